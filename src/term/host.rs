//! Line-oriented host implementation

use std::io::{self, Stdout, Write};
use std::time::Duration;

use tracing::debug;

use crate::host::{
    Handle, Host, KeyBinder, NativeBinding, PresentError, PresentOptions, Presenter, Screen,
    TextMeasure, Theme,
};
use crate::keys::{BindingId, BindingKey};
use crate::render::strip;

/// Rows assumed when `$LINES` is unset
const DEFAULT_LINES: u32 = 24;

/// Footer printed under every page
const FOOTER: &str = "[enter] dismiss";

/// Host that prints pages to a writer
pub struct TermHost<W: Write = Stdout> {
    out: W,
    lines: u32,
    bindings: Vec<BindingKey>,
    showing: Option<(Handle, Duration)>,
    next_id: u64,
}

impl TermHost<Stdout> {
    /// Print to stdout, sized from `$LINES`
    pub fn stdout() -> Self {
        let lines = std::env::var("LINES")
            .ok()
            .and_then(|lines| lines.parse().ok())
            .unwrap_or(DEFAULT_LINES);
        Self::new(io::stdout(), lines)
    }
}

impl<W: Write> TermHost<W> {
    pub fn new(out: W, lines: u32) -> Self {
        Self {
            out,
            lines,
            bindings: Vec::new(),
            showing: None,
            next_id: 0,
        }
    }

    /// The page on screen and its timeout
    pub fn showing(&self) -> Option<(Handle, Duration)> {
        self.showing
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

impl<W: Write> KeyBinder for TermHost<W> {
    /// Records the binding; actions are dropped since nothing can trigger
    /// them in a preview.
    fn create_binding(&mut self, binding: NativeBinding) -> Vec<BindingKey> {
        let key = BindingKey::new(BindingId(self.next_id()), binding.modifiers, binding.key);
        self.bindings.push(key.clone());
        vec![key]
    }
}

impl<W: Write> Presenter for TermHost<W> {
    fn present(&mut self, markup: &str, options: &PresentOptions) -> Result<Handle, PresentError> {
        let handle = Handle(self.next_id());
        writeln!(self.out, "{}", strip(markup))?;
        writeln!(self.out, "{}", FOOTER)?;
        self.out.flush()?;

        debug!(handle = handle.0, timeout = ?options.timeout, "page printed");
        self.showing = Some((handle, options.timeout));
        Ok(handle)
    }

    fn dismiss(&mut self, handle: Handle) {
        if self.showing.map(|(showing, _)| showing) == Some(handle) {
            self.showing = None;
        }
    }
}

impl<W: Write> TextMeasure for TermHost<W> {
    fn height(&self, markup: &str) -> u32 {
        strip(markup).lines().count() as u32
    }
}

impl<W: Write> Screen for TermHost<W> {
    fn work_area_height(&self) -> u32 {
        // Room for the footer
        self.lines.saturating_sub(1)
    }

    fn global_bindings(&self) -> Vec<BindingKey> {
        self.bindings.clone()
    }

    fn focused_client_bindings(&self) -> Option<Vec<BindingKey>> {
        None
    }
}

impl<W: Write> Host for TermHost<W> {
    /// Heights are in rows here, so the frame takes no space
    fn theme(&self) -> Theme {
        Theme {
            border_width: 0,
            padding: 0,
            ..Theme::default()
        }
    }
}

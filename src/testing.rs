//! In-memory host used by unit tests

use crate::host::{
    Handle, Host, KeyBinder, NativeBinding, PresentError, PresentOptions, Presenter, Screen,
    TextMeasure,
};
use crate::keys::{BindingId, BindingKey, Key};

/// What the host was asked to create
#[derive(Debug, Clone)]
pub struct CreatedBinding {
    pub modifiers: Vec<String>,
    pub key: Key,
    pub has_press: bool,
    pub has_release: bool,
}

/// Records every call; measures one unit per line
pub struct FakeHost {
    pub keys_per_binding: usize,
    pub created: Vec<CreatedBinding>,
    /// Created keys are appended here
    pub global: Vec<BindingKey>,
    pub focused: Option<Vec<BindingKey>>,
    pub work_area: u32,
    pub presented: Vec<(Handle, String, PresentOptions)>,
    pub dismissed: Vec<Handle>,
    pub fail_present: bool,
    next_id: u64,
}

impl Default for FakeHost {
    fn default() -> Self {
        Self {
            keys_per_binding: 1,
            created: Vec::new(),
            global: Vec::new(),
            focused: None,
            work_area: 1000,
            presented: Vec::new(),
            dismissed: Vec::new(),
            fail_present: false,
            next_id: 0,
        }
    }
}

impl FakeHost {
    /// Host whose usable work area is `lines` tall
    pub fn with_work_area(lines: u32) -> Self {
        Self {
            work_area: lines,
            ..Self::default()
        }
    }

    /// Host that creates `count` keys for every binding request
    pub fn with_keys_per_binding(count: usize) -> Self {
        Self {
            keys_per_binding: count,
            ..Self::default()
        }
    }

    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

impl KeyBinder for FakeHost {
    fn create_binding(&mut self, binding: NativeBinding) -> Vec<BindingKey> {
        self.created.push(CreatedBinding {
            modifiers: binding.modifiers.clone(),
            key: binding.key.clone(),
            has_press: binding.press.is_some(),
            has_release: binding.release.is_some(),
        });

        let keys: Vec<_> = (0..self.keys_per_binding)
            .map(|_| {
                BindingKey::new(
                    BindingId(self.next_id()),
                    binding.modifiers.clone(),
                    binding.key.clone(),
                )
            })
            .collect();
        self.global.extend(keys.iter().cloned());
        keys
    }
}

impl Presenter for FakeHost {
    fn present(&mut self, markup: &str, options: &PresentOptions) -> Result<Handle, PresentError> {
        if self.fail_present {
            return Err(PresentError::Unavailable);
        }
        let handle = Handle(self.next_id());
        self.presented.push((handle, markup.to_string(), options.clone()));
        Ok(handle)
    }

    fn dismiss(&mut self, handle: Handle) {
        self.dismissed.push(handle);
    }
}

impl TextMeasure for FakeHost {
    fn height(&self, markup: &str) -> u32 {
        markup.lines().count() as u32
    }
}

impl Screen for FakeHost {
    fn work_area_height(&self) -> u32 {
        self.work_area
    }

    fn global_bindings(&self) -> Vec<BindingKey> {
        self.global.clone()
    }

    fn focused_client_bindings(&self) -> Option<Vec<BindingKey>> {
        self.focused.clone()
    }
}

impl Host for FakeHost {}

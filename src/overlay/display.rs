//! Display orchestration
//!
//! `display` renders and paginates the active bindings, then presents the
//! first page. The host reports dismissals back through `on_dismissed`,
//! which presents the following page until the chain runs out.

use std::time::Duration;

use tokio::sync::broadcast;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::events::OverlayEvent;
use crate::host::{Handle, Host, KeyBinder, PresentOptions, Presenter};
use crate::keys::BindingKey;
use crate::registry::{BindingRequest, GroupScope, Registry};
use crate::render::{max_page_height, paginate, render};

use super::chain::PageChain;

/// Per-call presentation options; unset fields come from configuration
#[derive(Debug, Clone, Default)]
pub struct DisplayOptions {
    pub timeout: Option<Duration>,
    pub bg: Option<String>,
}

/// A chain currently on screen
struct Showing {
    chain: PageChain,
    handle: Handle,
    options: PresentOptions,
}

/// Keybinding documentation plus the page chain being shown
pub struct HelpOverlay {
    registry: Registry,
    config: Config,
    showing: Option<Showing>,
    event_tx: Option<broadcast::Sender<OverlayEvent>>,
}

impl HelpOverlay {
    pub fn new(config: Config) -> Self {
        Self {
            registry: Registry::new(),
            config,
            showing: None,
            event_tx: None,
        }
    }

    /// Create an overlay that publishes `OverlayEvent`s
    pub fn with_events(config: Config, event_tx: broadcast::Sender<OverlayEvent>) -> Self {
        let mut overlay = Self::new(config);
        overlay.event_tx = Some(event_tx);
        overlay
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Configuration is read on every `display`, so changes apply to the
    /// next one.
    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    pub fn begin_group(&mut self, name: impl Into<String>) -> GroupScope<'_> {
        self.registry.begin_group(name)
    }

    pub fn register<B: KeyBinder + ?Sized>(
        &mut self,
        binder: &mut B,
        request: BindingRequest,
    ) -> Vec<BindingKey> {
        self.registry.register(binder, request)
    }

    /// Handle of the page currently on screen
    pub fn current_handle(&self) -> Option<Handle> {
        self.showing.as_ref().map(|showing| showing.handle)
    }

    /// `(index, total)` of the page currently on screen
    pub fn position(&self) -> Option<(usize, usize)> {
        self.showing
            .as_ref()
            .map(|showing| (showing.chain.index(), showing.chain.len()))
    }

    /// Show help for the bindings active right now.
    ///
    /// Any chain already on screen is dismissed and abandoned.
    pub fn display<H: Host + ?Sized>(&mut self, host: &mut H, options: DisplayOptions) {
        let theme = host.theme();
        let style = self.config.key_style(&theme);
        let translations = self.config.translations();

        let mut bindings = host.global_bindings();
        if let Some(client) = host.focused_client_bindings() {
            debug!(count = client.len(), "including focused client bindings");
            bindings.extend(client);
        }

        let groups = render(&bindings, &self.registry, &translations, &style);
        let max_height = max_page_height(
            host.work_area_height(),
            self.config.border_width(&theme),
            self.config.padding(&theme),
        );
        let chain = PageChain::new(paginate(&groups, max_height, &*host));

        if let Some(previous) = self.showing.take() {
            debug!(handle = previous.handle.0, "replacing shown help");
            host.dismiss(previous.handle);
            self.emit(OverlayEvent::ChainAbandoned {
                at: previous.chain.index(),
                total: previous.chain.len(),
            });
        }

        if chain.current().is_empty() {
            info!("no documented bindings to show");
            self.emit(OverlayEvent::Cleared);
            return;
        }

        let options = PresentOptions {
            timeout: options.timeout.unwrap_or_else(|| self.config.timeout()),
            bg: options.bg.unwrap_or_else(|| self.config.background(&theme)),
        };

        info!(
            groups = groups.len(),
            pages = chain.len(),
            max_height,
            "showing keybinding help"
        );
        self.present(host, chain, options);
    }

    /// The host dismissed `handle` explicitly; show the next page, if any.
    pub fn on_dismissed<P: Presenter + ?Sized>(&mut self, host: &mut P, handle: Handle) {
        let Some(mut showing) = self.showing.take() else {
            return;
        };
        if showing.handle != handle {
            debug!(handle = handle.0, "ignoring dismissal of stale page");
            self.showing = Some(showing);
            return;
        }

        if showing.chain.advance().is_none() {
            self.emit(OverlayEvent::ChainFinished {
                pages: showing.chain.len(),
            });
            return;
        }
        self.present(host, showing.chain, showing.options);
    }

    /// The page behind `handle` timed out. The chain ends without advancing.
    pub fn on_expired(&mut self, handle: Handle) {
        if self.current_handle() != Some(handle) {
            return;
        }
        if let Some(showing) = self.showing.take() {
            let event = if showing.chain.is_last() {
                OverlayEvent::ChainFinished {
                    pages: showing.chain.len(),
                }
            } else {
                OverlayEvent::ChainAbandoned {
                    at: showing.chain.index(),
                    total: showing.chain.len(),
                }
            };
            self.emit(event);
        }
    }

    fn present<P: Presenter + ?Sized>(
        &mut self,
        host: &mut P,
        chain: PageChain,
        options: PresentOptions,
    ) {
        match host.present(chain.current(), &options) {
            Ok(handle) => {
                self.emit(OverlayEvent::PagePresented {
                    index: chain.index(),
                    total: chain.len(),
                });
                self.showing = Some(Showing {
                    chain,
                    handle,
                    options,
                });
            }
            Err(e) => {
                warn!(?e, page = chain.index(), "failed to present help page");
                self.emit(OverlayEvent::ChainAbandoned {
                    at: chain.index(),
                    total: chain.len(),
                });
            }
        }
    }

    fn emit(&self, event: OverlayEvent) {
        if let Some(tx) = &self.event_tx {
            debug!(%event, "emitting overlay event");
            let _ = tx.send(event);
        }
    }
}

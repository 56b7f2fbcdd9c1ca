//! Root coordinator: owns the view state and talks to the backend.
//!
//! [`AppProvider`] creates one [`AppState`] signal and one [`Backend`] and shares a
//! [`Coordinator`] handle through context. Components never mutate state directly:
//! pure UI events go through [`Coordinator::send`], anything that needs the server
//! goes through [`Coordinator::dispatch`].

use std::time::Duration;

use api::Backend;
use dioxus::prelude::*;
use store::{Action, AppState, AroundConfig, Effect, Msg};

use crate::timer::sleep;

/// Copyable handle to the application state and backend.
#[derive(Clone, Copy)]
pub struct Coordinator {
    state: Signal<AppState>,
    backend: CopyValue<Backend>,
}

impl Coordinator {
    pub fn state(&self) -> Signal<AppState> {
        self.state
    }

    /// Apply a message and schedule whatever follow-up it asks for.
    pub fn send(&self, msg: Msg) {
        let mut state = self.state;
        let effect = state.write().update(msg);
        if let Some(effect) = effect {
            self.schedule(effect);
        }
    }

    fn schedule(&self, effect: Effect) {
        let this = *self;
        match effect {
            Effect::ClearSelectionAfter { delay, epoch } => {
                spawn(async move {
                    sleep(delay).await;
                    this.send(Msg::SelectionExpired { epoch });
                });
            }
        }
    }

    /// Fetch the user and the cards independently; either may fail alone.
    pub fn load_initial(&self) {
        let this = *self;
        spawn(async move {
            let backend = this.backend.cloned();
            match api::load_user(&backend).await {
                Ok(msg) => this.send(msg),
                Err(e) => tracing::error!("Failed to load user: {e}"),
            }
        });
        spawn(async move {
            let backend = this.backend.cloned();
            match api::load_cards(&backend).await {
                Ok(msg) => this.send(msg),
                Err(e) => tracing::error!("Failed to load cards: {e}"),
            }
        });
    }

    /// Run an action against the backend and apply the outcome.
    ///
    /// On failure the error is logged and state is left as it was, so an open
    /// popup stays open. Only form actions clear the busy flag on failure.
    pub fn dispatch(&self, action: Action) {
        let this = *self;
        let viewer = self.state.peek().viewer_id().cloned();
        let label = action.label();
        let failure = action.failure_msg();

        tracing::debug!("Dispatching {label}");
        if action.shows_progress() {
            self.send(Msg::RequestStarted);
        }

        spawn(async move {
            let backend = this.backend.cloned();
            match api::perform(&backend, action, viewer.as_ref()).await {
                Ok(msg) => {
                    tracing::info!("{label} succeeded");
                    this.send(msg);
                }
                Err(e) => {
                    tracing::error!("{label} failed: {e}");
                    if let Some(msg) = failure {
                        this.send(msg);
                    }
                }
            }
        });
    }
}

/// Get the coordinator provided by [`AppProvider`].
pub fn use_coordinator() -> Coordinator {
    use_context::<Coordinator>()
}

/// Get the application state signal.
pub fn use_app_state() -> Signal<AppState> {
    use_coordinator().state()
}

/// Provider component that owns the application state.
/// Wrap the page with this component; it starts the initial fetch on mount.
#[component]
pub fn AppProvider(config: AroundConfig, children: Element) -> Element {
    use_coordinator_provider(config.preview_close_delay(), || {
        Backend::from_config(&config)
    });

    rsx! {
        {children}
    }
}

/// Create the state and backend, provide the coordinator, and start the initial fetch.
fn use_coordinator_provider(
    preview_close_delay: Duration,
    make_backend: impl FnOnce() -> Backend,
) -> Coordinator {
    let state = use_signal(|| AppState::new(preview_close_delay));
    let backend = use_hook(|| CopyValue::new(make_backend()));
    let coordinator = use_context_provider(|| Coordinator { state, backend });

    use_hook(|| coordinator.load_initial());

    coordinator
}

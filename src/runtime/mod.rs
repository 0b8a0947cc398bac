//! Tokio driver for the picker controller.
//!
//! Hosts that do not want to execute [`Action`]s themselves can hand the
//! picker to this module. [`spawn`] starts a single event loop task that owns
//! the [`PickerState`], and returns a [`PickerHandle`] for feeding events and
//! observing the view.
//!
//! # Architecture
//!
//! ```text
//! PickerHandle ──Event──► event loop ──handle_event──► actions
//!      ▲                     │   ▲                        │
//!      │ watch<ViewModel>    │   └── Loader / timer ◄─────┤ Load, ScheduleClose
//!      └─────────────────────┘       (spawned tasks)      │
//!      ◄──────────── selected Icon ◄──────────────────────┘ IconSelected
//! ```
//!
//! The loop is the only writer of picker state. The catalog fetch and the
//! close timers run as spawned tasks whose results come back as events. The
//! loop stops once every [`PickerHandle`] is dropped.

use crate::app::{handle_event, Action, Event, FocusTarget, PickerState};
use crate::domain::Icon;
use crate::loader::CatalogLoader;
use crate::ui::PickerViewModel;
use crate::Config;
use tokio::sync::{mpsc, watch};
use tracing::Instrument;

/// Starts the picker event loop on the current tokio runtime.
///
/// The catalog load is requested immediately.
///
/// # Panics
///
/// Panics if called outside a tokio runtime.
#[must_use]
pub fn spawn(config: &Config, loader: CatalogLoader) -> PickerHandle {
    let (state, startup) = crate::initialize(config);

    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let (view_tx, view_rx) = watch::channel(state.compute_viewmodel());
    let (selection_tx, selection_rx) = mpsc::unbounded_channel();

    let event_loop = EventLoop {
        state,
        loader,
        events: event_tx.downgrade(),
        view: view_tx,
        selections: selection_tx,
    };

    tokio::spawn(
        event_loop
            .run(event_rx, startup)
            .instrument(tracing::debug_span!("picker_event_loop")),
    );

    PickerHandle {
        events: event_tx,
        view: view_rx,
        selections: selection_rx,
    }
}

/// Handle to a running picker.
///
/// Event methods are fire-and-forget: they enqueue the event and return
/// immediately. Use [`subscribe`](Self::subscribe) to observe the outcome.
#[derive(Debug)]
pub struct PickerHandle {
    events: mpsc::UnboundedSender<Event>,
    view: watch::Receiver<PickerViewModel>,
    selections: mpsc::UnboundedReceiver<Icon>,
}

impl PickerHandle {
    /// Replaces the search query.
    pub fn search(&self, query: impl Into<String>) {
        self.send(Event::Search {
            query: query.into(),
        });
    }

    /// Selects `icon`. Unknown icons are rejected and logged.
    pub fn select(&self, icon: Icon) {
        self.send(Event::Select { icon });
    }

    /// Shows the popup.
    pub fn open(&self) {
        self.send(Event::Open);
    }

    /// Reports that `target` received focus.
    pub fn focus_gained(&self, target: FocusTarget) {
        self.send(Event::FocusGained { target });
    }

    /// Reports that focus left the picker element that had it.
    pub fn focus_lost(&self) {
        self.send(Event::FocusLost);
    }

    /// Sends an arbitrary controller event.
    pub fn send(&self, event: Event) {
        if self.events.send(event).is_err() {
            tracing::warn!("picker event loop has stopped, event dropped");
        }
    }

    /// Returns a receiver that observes every published view model.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<PickerViewModel> {
        self.view.clone()
    }

    /// Returns the most recently published view model.
    #[must_use]
    pub fn view(&self) -> PickerViewModel {
        self.view.borrow().clone()
    }

    /// Waits for the next icon the user selects.
    ///
    /// Returns `None` once the event loop has stopped.
    pub async fn next_selection(&mut self) -> Option<Icon> {
        self.selections.recv().await
    }
}

/// State owned by the event loop task.
struct EventLoop {
    state: PickerState,
    loader: CatalogLoader,
    /// Weak so in-flight tasks do not keep the loop alive after the handle drops.
    events: mpsc::WeakUnboundedSender<Event>,
    view: watch::Sender<PickerViewModel>,
    selections: mpsc::UnboundedSender<Icon>,
}

impl EventLoop {
    async fn run(mut self, mut events: mpsc::UnboundedReceiver<Event>, startup: Vec<Action>) {
        tracing::debug!(startup_actions = startup.len(), "event loop started");

        for action in startup {
            self.execute_action(action);
        }

        while let Some(event) = events.recv().await {
            self.update(&event);
        }

        tracing::debug!("all picker handles dropped, event loop stopped");
    }

    fn update(&mut self, event: &Event) {
        match handle_event(&mut self.state, event) {
            Ok((should_render, actions)) => {
                tracing::trace!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for action in actions {
                    self.execute_action(action);
                }
                if should_render {
                    self.view.send_replace(self.state.compute_viewmodel());
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "error handling event");
            }
        }
    }

    fn execute_action(&self, action: Action) {
        match action {
            Action::Load(message) => {
                let loader = self.loader.clone();
                let events = self.events.clone();
                tokio::spawn(async move {
                    let response = loader.handle_message(message).await;
                    if let Some(events) = events.upgrade() {
                        let _ = events.send(Event::Loader(response));
                    }
                });
            }
            Action::ScheduleClose { token, delay } => {
                let events = self.events.clone();
                tokio::spawn(async move {
                    tokio::time::sleep(delay).await;
                    if let Some(events) = events.upgrade() {
                        let _ = events.send(Event::CloseTimerElapsed { token });
                    }
                });
            }
            Action::IconSelected(icon) => {
                tracing::debug!(icon_id = %icon.id, "forwarding selection");
                if self.selections.send(icon).is_err() {
                    tracing::debug!("no selection listener");
                }
            }
        }
    }
}

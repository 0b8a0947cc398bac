//! Event handling and state transition logic.
//!
//! This module implements the event handler that processes user input, timer
//! expiries, and loader responses, translating them into state changes and
//! action sequences. It is the only place picker state is mutated.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the host or the runtime
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `PickerState` methods
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! - **Input**: `Search`, `Select`
//! - **Popup**: `Open`, `FocusGained`, `FocusLost`, `CloseTimerElapsed`
//! - **Loader**: `Loader` with a typed response
//!
//! # Example
//!
//! ```rust
//! use mdi_picker::app::{handle_event, Event, PickerState};
//! use mdi_picker::Config;
//!
//! let mut state = PickerState::new(&Config::default());
//! let (render, actions) = handle_event(&mut state, &Event::Open)?;
//! assert!(render);
//! assert!(actions.is_empty());
//! # Ok::<(), mdi_picker::PickerError>(())
//! ```

use super::modes::{FocusTarget, LoadStatus, PopupState};
use crate::app::{Action, PickerState};
use crate::domain::error::Result;
use crate::domain::Icon;
use crate::loader::LoaderResponse;

/// Events triggered by user input, timers, or loader responses.
#[derive(Debug, Clone)]
pub enum Event {
    /// The search input changed.
    Search {
        /// Full current text of the input.
        query: String,
    },

    /// The user picked an icon.
    Select {
        /// Icon to select; must exist in the loaded catalog.
        icon: Icon,
    },

    /// Explicit request to show the popup (e.g. trigger click).
    Open,

    /// Focus moved onto one of the picker's elements.
    FocusGained {
        /// Element that received focus.
        target: FocusTarget,
    },

    /// Focus left one of the picker's elements.
    FocusLost,

    /// A close timer armed by [`Action::ScheduleClose`] expired.
    CloseTimerElapsed {
        /// Token of the expired timer.
        token: u64,
    },

    /// The catalog loader answered.
    Loader(LoaderResponse),
}

/// Processes an event, mutates picker state, and returns actions to execute.
///
/// # Returns
///
/// `(should_render, actions)`: whether the view model changed in a way the
/// rendering layer should reflect, and the side effects to run in order.
///
/// # Errors
///
/// Returns [`PickerError::UnknownIcon`](crate::PickerError::UnknownIcon) when
/// `Select` names an icon that is not in the loaded catalog.
pub fn handle_event(state: &mut PickerState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span =
        tracing::debug_span!("handle_event", event_type = ?EventKind::from(event)).entered();

    match event {
        Event::Search { query } => {
            state.search_query.clone_from(query);
            state.apply_search();
            state.open_popup();

            tracing::trace!(
                query = %state.search_query,
                results = state.results.len(),
                "search query updated"
            );

            Ok((true, vec![]))
        }
        Event::Select { icon } => {
            let selected = state.select(icon)?;
            tracing::debug!(icon_id = %selected.id, icon_name = %selected.name, "icon selected");
            Ok((true, vec![Action::IconSelected(selected)]))
        }
        Event::Open => {
            let changed = state.open_popup();
            Ok((changed, vec![]))
        }
        Event::FocusGained { target } => {
            let cancelled = state.pending_close.is_some();
            let changed = state.open_popup();
            tracing::trace!(target = ?target, cancelled_close = cancelled, "focus gained");
            Ok((changed, vec![]))
        }
        Event::FocusLost => {
            if state.popup == PopupState::Closed {
                return Ok((false, vec![]));
            }

            let token = state.arm_close_timer();
            tracing::trace!(token = token, "focus lost, close timer armed");
            Ok((
                false,
                vec![Action::ScheduleClose {
                    token,
                    delay: state.close_delay,
                }],
            ))
        }
        Event::CloseTimerElapsed { token } => {
            if state.pending_close != Some(*token) {
                tracing::trace!(
                    token = token,
                    pending = ?state.pending_close,
                    "stale close timer ignored"
                );
                return Ok((false, vec![]));
            }

            let changed = state.close_popup();
            tracing::debug!("popup closed after focus loss");
            Ok((changed, vec![]))
        }
        Event::Loader(response) => match response {
            LoaderResponse::CatalogLoaded { catalog } => {
                if matches!(state.load_status, LoadStatus::Ready { .. }) {
                    tracing::debug!("catalog loaded again, replacing previous catalog");
                }
                state.install_catalog(catalog.clone());
                Ok((true, vec![]))
            }
            LoaderResponse::LoadFailed { message } => {
                tracing::error!(error = %message, "icon catalog unavailable, search disabled");
                state.load_status = LoadStatus::Failed {
                    message: message.clone(),
                };
                Ok((true, vec![]))
            }
        },
    }
}

/// Payload-free event name for span fields.
///
/// Keeps whole catalogs and icon records out of log output.
#[derive(Debug, Clone, Copy)]
enum EventKind {
    Search,
    Select,
    Open,
    FocusGained,
    FocusLost,
    CloseTimerElapsed,
    CatalogLoaded,
    LoadFailed,
}

impl From<&Event> for EventKind {
    fn from(event: &Event) -> Self {
        match event {
            Event::Search { .. } => Self::Search,
            Event::Select { .. } => Self::Select,
            Event::Open => Self::Open,
            Event::FocusGained { .. } => Self::FocusGained,
            Event::FocusLost => Self::FocusLost,
            Event::CloseTimerElapsed { .. } => Self::CloseTimerElapsed,
            Event::Loader(LoaderResponse::CatalogLoaded { .. }) => Self::CatalogLoaded,
            Event::Loader(LoaderResponse::LoadFailed { .. }) => Self::LoadFailed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::LoadedCatalog;
    use crate::domain::PickerError;
    use crate::Config;
    use std::sync::Arc;
    use std::time::Duration;

    fn icon(id: &str, name: &str) -> Icon {
        Icon {
            id: id.to_string(),
            name: name.to_string(),
            codepoint: "F0001".to_string(),
            aliases: vec![],
            tags: vec![],
            author: "Test".to_string(),
            version: "1.0.0".to_string(),
        }
    }

    fn loaded() -> Event {
        Event::Loader(LoaderResponse::CatalogLoaded {
            catalog: Arc::new(LoadedCatalog::build(vec![
                icon("a", "account"),
                icon("b", "account-alert"),
                icon("c", "bell"),
            ])),
        })
    }

    fn search(state: &mut PickerState, query: &str) -> Vec<String> {
        let event = Event::Search {
            query: query.to_string(),
        };
        handle_event(state, &event).expect("search never fails");
        state.results.iter().map(|i| i.id.clone()).collect()
    }

    #[test]
    fn search_before_load_returns_nothing_and_opens_popup() {
        let mut state = PickerState::new(&Config::default());
        assert!(search(&mut state, "acc").is_empty());
        assert!(state.popup_visible());
    }

    #[test]
    fn search_after_load_ranks_prefix_matches() {
        let mut state = PickerState::new(&Config::default());
        handle_event(&mut state, &loaded()).expect("load");

        assert_eq!(search(&mut state, "acc"), vec!["a", "b"]);
        assert_eq!(search(&mut state, "bel"), vec!["c"]);
        assert!(search(&mut state, "zzz").is_empty());
    }

    #[test]
    fn query_typed_before_load_is_rerun_on_load() {
        let mut state = PickerState::new(&Config::default());
        search(&mut state, "bel");
        handle_event(&mut state, &loaded()).expect("load");

        let ids: Vec<&str> = state.results.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["c"]);
    }

    #[test]
    fn select_emits_event_and_closes_popup() {
        let mut state = PickerState::new(&Config::default());
        handle_event(&mut state, &loaded()).expect("load");
        search(&mut state, "bel");

        let (render, actions) =
            handle_event(&mut state, &Event::Select { icon: icon("c", "bell") }).expect("select");

        assert!(render);
        assert_eq!(actions, vec![Action::IconSelected(icon("c", "bell"))]);
        assert_eq!(state.selected.as_ref().map(|i| i.id.as_str()), Some("c"));
        assert!(!state.popup_visible());
    }

    #[test]
    fn select_unknown_icon_is_rejected() {
        let mut state = PickerState::new(&Config::default());
        let result = handle_event(&mut state, &Event::Select { icon: icon("x", "ghost") });
        assert!(matches!(result, Err(PickerError::UnknownIcon(_))));
    }

    #[test]
    fn focus_lost_then_timeout_closes() {
        let mut state = PickerState::new(&Config::default());
        let focus = Event::FocusGained {
            target: FocusTarget::Trigger,
        };
        handle_event(&mut state, &focus).expect("focus");

        let (render, actions) = handle_event(&mut state, &Event::FocusLost).expect("blur");
        assert!(!render);
        assert!(state.popup_visible());
        let Some(Action::ScheduleClose { token, delay }) = actions.first().cloned() else {
            panic!("expected a close timer, got {actions:?}");
        };
        assert_eq!(delay, Duration::from_millis(100));

        let (render, _) =
            handle_event(&mut state, &Event::CloseTimerElapsed { token }).expect("timer");
        assert!(render);
        assert!(!state.popup_visible());
    }

    #[test]
    fn focus_returning_within_window_keeps_popup_open() {
        let mut state = PickerState::new(&Config::default());
        handle_event(&mut state, &Event::Open).expect("open");

        let (_, actions) = handle_event(&mut state, &Event::FocusLost).expect("blur");
        let Some(Action::ScheduleClose { token, .. }) = actions.first().cloned() else {
            panic!("expected a close timer");
        };

        let focus = Event::FocusGained {
            target: FocusTarget::Input,
        };
        let (render, _) = handle_event(&mut state, &focus).expect("focus");
        assert!(!render, "popup never left the open state");

        let (render, _) =
            handle_event(&mut state, &Event::CloseTimerElapsed { token }).expect("timer");
        assert!(!render);
        assert!(state.popup_visible());
    }

    #[test]
    fn repeated_focus_loss_resets_the_timer() {
        let mut state = PickerState::new(&Config::default());
        handle_event(&mut state, &Event::Open).expect("open");

        let first = match handle_event(&mut state, &Event::FocusLost).expect("blur").1.first() {
            Some(Action::ScheduleClose { token, .. }) => *token,
            other => panic!("unexpected {other:?}"),
        };
        let second = match handle_event(&mut state, &Event::FocusLost).expect("blur").1.first() {
            Some(Action::ScheduleClose { token, .. }) => *token,
            other => panic!("unexpected {other:?}"),
        };

        handle_event(&mut state, &Event::CloseTimerElapsed { token: first }).expect("timer");
        assert!(state.popup_visible(), "superseded timer must not close");

        handle_event(&mut state, &Event::CloseTimerElapsed { token: second }).expect("timer");
        assert!(!state.popup_visible());
    }

    #[test]
    fn focus_lost_while_closed_is_ignored() {
        let mut state = PickerState::new(&Config::default());
        let (render, actions) = handle_event(&mut state, &Event::FocusLost).expect("blur");
        assert!(!render);
        assert!(actions.is_empty());
    }

    #[test]
    fn load_failure_keeps_picker_usable() {
        let mut state = PickerState::new(&Config::default());
        let failed = Event::Loader(LoaderResponse::LoadFailed {
            message: "load catalog: connection refused".to_string(),
        });

        let (render, _) = handle_event(&mut state, &failed).expect("failure is not an error");
        assert!(render);
        assert!(matches!(state.load_status, LoadStatus::Failed { .. }));
        assert!(search(&mut state, "acc").is_empty());
    }
}

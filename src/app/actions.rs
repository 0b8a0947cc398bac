//! Actions representing side effects to be executed by the host runtime.
//!
//! This module defines the [`Action`] type, which represents imperative commands
//! produced by the event handler after processing user input or loader
//! responses. Actions bridge pure state transitions and effectful operations
//! like fetching the catalog, arming timers, or notifying the host of a
//! selection.
//!
//! # Architecture
//!
//! The event handler returns a `Vec<Action>` after processing each event, allowing
//! multiple side effects to be queued atomically. The host (or
//! [`crate::runtime`]) executes them in order.
//!
//! # Example
//!
//! ```rust
//! use mdi_picker::app::Action;
//! use mdi_picker::loader::LoaderMessage;
//! use std::time::Duration;
//!
//! let actions = vec![
//!     Action::Load(LoaderMessage::LoadCatalog),
//!     Action::ScheduleClose { token: 1, delay: Duration::from_millis(100) },
//! ];
//! assert_eq!(actions.len(), 2);
//! ```

use crate::domain::Icon;
use crate::loader::LoaderMessage;
use std::time::Duration;

/// Commands representing side effects to be executed by the host runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hands a message to the catalog loader.
    ///
    /// The loader's [`LoaderResponse`](crate::loader::LoaderResponse) must be fed
    /// back as [`Event::Loader`](crate::app::Event::Loader).
    Load(LoaderMessage),

    /// Starts the focus-lost grace timer.
    ///
    /// After `delay` the host sends
    /// [`Event::CloseTimerElapsed`](crate::app::Event::CloseTimerElapsed) with the
    /// same `token`. Earlier timers need not be cancelled: their tokens are stale
    /// and ignored.
    ScheduleClose {
        /// Identifies this timer; only the most recent token can close the popup.
        token: u64,
        /// Grace window before the popup closes.
        delay: Duration,
    },

    /// Announces that the user picked an icon.
    IconSelected(Icon),
}

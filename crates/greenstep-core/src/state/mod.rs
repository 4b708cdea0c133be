//! Domain State Store
//!
//! Three independent partitions (user, goals, actions). Each reduces its own
//! events synchronously and never performs I/O. The only cross-partition
//! event is [`Event::SessionReset`], which names every partition it clears.

mod actions;
mod goals;
mod phase;
mod user;

use std::cell::RefCell;
use std::rc::Rc;

use tracing::trace;

use crate::token::BearerToken;

pub use actions::{ActionsEvent, ActionsState};
pub use goals::{GoalsEvent, GoalsState};
pub use phase::{Phase, RequestStatus};
pub use user::{UserEvent, UserState};

/// Whole client state
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "store", derive(reactive_stores::Store))]
pub struct AppState {
    pub user: UserState,
    pub goals: GoalsState,
    pub actions: ActionsState,
}

/// Anything the store can reduce
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    User(UserEvent),
    Goals(GoalsEvent),
    Actions(ActionsEvent),
    /// Sign-out: every partition back to its anonymous default
    SessionReset,
}

impl Event {
    pub fn operation(&self) -> &'static str {
        match self {
            Event::User(event) => event.operation(),
            Event::Goals(event) => event.operation(),
            Event::Actions(event) => event.operation(),
            Event::SessionReset => "session_reset",
        }
    }
}

impl From<UserEvent> for Event {
    fn from(event: UserEvent) -> Self {
        Event::User(event)
    }
}

impl From<GoalsEvent> for Event {
    fn from(event: GoalsEvent) -> Self {
        Event::Goals(event)
    }
}

impl From<ActionsEvent> for Event {
    fn from(event: ActionsEvent) -> Self {
        Event::Actions(event)
    }
}

impl AppState {
    /// Initial state at start-up, remembering a persisted token if any
    pub fn new(token: Option<BearerToken>) -> Self {
        Self {
            user: UserState::restored(token),
            ..Self::default()
        }
    }

    pub fn reduce(&mut self, event: Event) {
        trace!(operation = event.operation(), "reducing event");
        match event {
            Event::User(event) => self.user.reduce(event),
            Event::Goals(event) => self.goals.reduce(event),
            Event::Actions(event) => self.actions.reduce(event),
            Event::SessionReset => self.reset_session(),
        }
    }

    /// Pure form of [`AppState::reduce`]
    pub fn reduced(mut self, event: Event) -> Self {
        self.reduce(event);
        self
    }

    pub fn reset_session(&mut self) {
        self.user.reset();
        self.goals.reset();
        self.actions.reset();
    }
}

/// Sink for events produced by the coordinator
pub trait Dispatch {
    fn dispatch(&self, event: Event);
}

impl Dispatch for RefCell<AppState> {
    fn dispatch(&self, event: Event) {
        self.borrow_mut().reduce(event);
    }
}

impl<D: Dispatch + ?Sized> Dispatch for Rc<D> {
    fn dispatch(&self, event: Event) {
        (**self).dispatch(event)
    }
}

#[cfg(feature = "store")]
mod store {
    use reactive_graph::traits::Write;
    use reactive_stores::Store;

    use super::{AppState, AppStateStoreFields, Dispatch, Event};

    /// Each partition is written through its own field.
    impl Dispatch for Store<AppState> {
        fn dispatch(&self, event: Event) {
            match event {
                Event::User(event) => self.user().write().reduce(event),
                Event::Goals(event) => self.goals().write().reduce(event),
                Event::Actions(event) => self.actions().write().reduce(event),
                Event::SessionReset => {
                    self.user().write().reset();
                    self.goals().write().reset();
                    self.actions().write().reset();
                }
            }
        }
    }
}

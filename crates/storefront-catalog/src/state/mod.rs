//! Load state owners for the list and detail views.
//!
//! Each owner keeps a [`LoadState`] and a [`RequestSequence`]. Every fetch
//! takes a [`Ticket`]; a completion is applied only if its ticket is the most
//! recent one issued by that owner, so a slow response can never overwrite a
//! newer one.

mod list;
mod single;

pub use list::{ProductListState, ProductListView};
pub use single::{ProductView, SingleProductState};

use serde::Serialize;

use crate::error::FailureKind;

/// Lifecycle of one piece of fetched data.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    /// Nothing requested yet.
    Idle,
    /// A request is in flight.
    Loading,
    /// The last applied request succeeded.
    Loaded(T),
    /// The last applied request failed.
    Failed(Failure),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::Idle
    }
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&Failure> {
        match self {
            LoadState::Failed(failure) => Some(failure),
            _ => None,
        }
    }

    /// Display message of the failure, if any.
    pub fn error_message(&self) -> Option<&str> {
        self.failure().map(|f| f.message.as_str())
    }
}

/// A failed load, already reduced to what the view needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Failure {
    pub kind: FailureKind,
    pub message: String,
}

impl Failure {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Identifies one fetch issued by one state owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    pub fn get(&self) -> u64 {
        self.0
    }
}

/// Monotonically increasing ticket source.
#[derive(Debug, Default)]
pub struct RequestSequence {
    issued: u64,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a ticket newer than every ticket issued before.
    pub fn issue(&mut self) -> Ticket {
        self.issued += 1;
        Ticket(self.issued)
    }

    /// Whether `ticket` is the latest one issued.
    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.issued
    }
}

//! Three phase async lifecycle shared by every remote resource
//!
//! An async operation enters `Pending` when it is issued and settles into
//! `Fulfilled` or `Rejected` when the connector answers. Each phase carries the
//! [`RequestId`] of the request it belongs to so a slot can drop completions of
//! requests that were superseded while in flight.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Sequence number stamped on every async request
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RequestId(u64);

impl RequestId {
    /// Create a [`RequestId`] from a raw sequence number
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Raw sequence number
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for RequestId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Phase of an async operation
#[derive(Debug, Clone, PartialEq)]
pub enum Lifecycle<T> {
    /// Request issued
    Pending(RequestId),
    /// Request succeeded with payload
    Fulfilled(RequestId, T),
    /// Request failed; `None` falls back to the operation's default message
    Rejected(RequestId, Option<String>),
}

impl<T> Lifecycle<T> {
    /// Request this phase belongs to
    pub fn request_id(&self) -> RequestId {
        match self {
            Self::Pending(id) | Self::Fulfilled(id, _) | Self::Rejected(id, _) => *id,
        }
    }

    /// Settle a request from its result, keeping the error's display string
    pub fn settle<E: fmt::Display>(id: RequestId, result: Result<T, E>) -> Self {
        match result {
            Ok(payload) => Self::Fulfilled(id, payload),
            Err(err) => {
                let message = err.to_string();
                Self::Rejected(id, (!message.is_empty()).then_some(message))
            }
        }
    }
}

/// Loading and error flags of one remote resource
///
/// `loading` implies `error` is `None`. The error is set exactly when the most
/// recent request failed and nothing cleared it since.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestStatus {
    /// A request is in flight
    pub loading: bool,
    /// Message of the last failed request
    pub error: Option<String>,
    pub(crate) latest: Option<RequestId>,
}

impl RequestStatus {
    /// Newest request this slot was asked to start
    pub fn latest_request(&self) -> Option<RequestId> {
        self.latest
    }

    /// Reset the error only
    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Reset loading and error
    pub fn reset(&mut self) {
        self.loading = false;
        self.error = None;
    }

    fn is_stale(&self, id: RequestId) -> bool {
        self.latest.is_some_and(|latest| id < latest)
    }

    /// Apply a lifecycle phase to this slot
    ///
    /// Returns the payload of a fulfilled, non stale request; the caller
    /// stores it in its data field.
    pub fn apply<T>(&mut self, phase: Lifecycle<T>, default_error: &str) -> Option<T> {
        let id = phase.request_id();
        if self.is_stale(id) {
            tracing::debug!(
                "Dropping stale completion {} (latest {:?})",
                id,
                self.latest.map(|latest| latest.value())
            );
            return None;
        }

        match phase {
            Lifecycle::Pending(id) => {
                self.latest = Some(id);
                self.loading = true;
                self.error = None;
                None
            }
            Lifecycle::Fulfilled(_, payload) => {
                self.loading = false;
                self.error = None;
                Some(payload)
            }
            Lifecycle::Rejected(_, message) => {
                self.loading = false;
                self.error = Some(message.unwrap_or_else(|| default_error.to_string()));
                None
            }
        }
    }
}

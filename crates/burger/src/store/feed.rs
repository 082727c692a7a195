//! Public live feed of orders across all users

use burger_common::OrdersData;

use super::lifecycle::{Lifecycle, RequestStatus};

const FETCH_FAILED: &str = "Failed to load feed";

/// Feed action
#[derive(Debug, Clone, PartialEq)]
pub enum FeedAction {
    /// Feed fetch
    Fetch(Lifecycle<OrdersData>),
    /// Reset the error
    ClearError,
}

/// Feed state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedState {
    /// Last fetched feed
    pub data: Option<OrdersData>,
    /// Fetch status
    pub status: RequestStatus,
}

impl FeedState {
    /// Feed fetch in flight
    pub fn loading(&self) -> bool {
        self.status.loading
    }

    /// Last fetch error
    pub fn error(&self) -> Option<&str> {
        self.status.error.as_deref()
    }

    /// Apply an action
    pub fn reduce(mut self, action: FeedAction) -> Self {
        match action {
            FeedAction::Fetch(phase) => {
                if let Some(data) = self.status.apply(phase, FETCH_FAILED) {
                    self.data = Some(data);
                }
            }
            FeedAction::ClearError => self.status.clear_error(),
        }
        self
    }
}

//! Submission of the current selection as a new order

use burger_common::Order;

use super::lifecycle::{Lifecycle, RequestStatus};

const CREATE_FAILED: &str = "Failed to create order";

/// Order creation action
#[derive(Debug, Clone, PartialEq)]
pub enum OrderCreationAction {
    /// Order submission
    Create(Lifecycle<Order>),
    /// Forget the last created order
    ClearLastOrder,
    /// Reset the error
    ClearError,
}

/// Order creation state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderCreationState {
    /// Last successfully created order
    pub last_order: Option<Order>,
    /// Submission status
    pub status: RequestStatus,
}

impl OrderCreationState {
    /// Submission in flight
    pub fn loading(&self) -> bool {
        self.status.loading
    }

    /// Last submission error
    pub fn error(&self) -> Option<&str> {
        self.status.error.as_deref()
    }

    /// Apply an action
    pub fn reduce(mut self, action: OrderCreationAction) -> Self {
        match action {
            OrderCreationAction::Create(phase) => {
                if let Some(order) = self.status.apply(phase, CREATE_FAILED) {
                    self.last_order = Some(order);
                }
            }
            OrderCreationAction::ClearLastOrder => self.last_order = None,
            OrderCreationAction::ClearError => self.status.clear_error(),
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::lifecycle::RequestId;
    use crate::test_utils::test_order;

    #[test]
    fn test_create_lifecycle() {
        let state = OrderCreationState::default()
            .reduce(OrderCreationAction::Create(Lifecycle::Pending(RequestId::new(1))));
        assert!(state.loading());
        assert_eq!(state.last_order, None);

        let state = state.reduce(OrderCreationAction::Create(Lifecycle::Fulfilled(
            RequestId::new(1),
            test_order(42),
        )));
        assert!(!state.loading());
        assert_eq!(state.error(), None);
        assert_eq!(state.last_order, Some(test_order(42)));
    }

    #[test]
    fn test_rejection_keeps_last_order() {
        let state = OrderCreationState {
            last_order: Some(test_order(1)),
            ..Default::default()
        };

        let state = state
            .reduce(OrderCreationAction::Create(Lifecycle::Pending(RequestId::new(2))))
            .reduce(OrderCreationAction::Create(Lifecycle::Rejected(RequestId::new(2), None)));
        assert!(!state.loading());
        assert_eq!(state.error(), Some(CREATE_FAILED));
        assert_eq!(state.last_order, Some(test_order(1)));
    }

    #[test]
    fn test_clears() {
        let state = OrderCreationState {
            last_order: Some(test_order(1)),
            status: RequestStatus {
                error: Some("some error".to_string()),
                ..Default::default()
            },
        };

        let state = state.reduce(OrderCreationAction::ClearError);
        assert_eq!(state.error(), None);
        assert_eq!(state.last_order, Some(test_order(1)));

        let state = state.reduce(OrderCreationAction::ClearLastOrder);
        assert_eq!(state, OrderCreationState::default());
    }
}

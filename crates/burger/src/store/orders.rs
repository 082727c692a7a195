//! Order history of the authenticated user
//!
//! Two resources share this container: the full list and a single order
//! looked up by number. Each keeps its own status so loading one never
//! disturbs the other.

use burger_common::Order;

use super::lifecycle::{Lifecycle, RequestStatus};

const LIST_FAILED: &str = "Failed to load orders";
const CURRENT_FAILED: &str = "Failed to load order";

/// Order history action
#[derive(Debug, Clone, PartialEq)]
pub enum OrdersAction {
    /// User order list fetch
    FetchUserOrders(Lifecycle<Vec<Order>>),
    /// Single order fetch by number
    FetchByNumber(Lifecycle<Order>),
    /// Forget the current order and its error
    ClearCurrent,
    /// Reset the list error
    ClearError,
}

/// Order history state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrdersState {
    /// User orders
    pub list: Vec<Order>,
    /// List status
    pub status: RequestStatus,
    /// Order looked up by number
    pub current: Option<Order>,
    /// Lookup status
    pub current_status: RequestStatus,
}

impl OrdersState {
    /// List fetch in flight
    pub fn loading(&self) -> bool {
        self.status.loading
    }

    /// Last list error
    pub fn error(&self) -> Option<&str> {
        self.status.error.as_deref()
    }

    /// Lookup in flight
    pub fn current_loading(&self) -> bool {
        self.current_status.loading
    }

    /// Last lookup error
    pub fn current_error(&self) -> Option<&str> {
        self.current_status.error.as_deref()
    }

    /// Apply an action
    pub fn reduce(mut self, action: OrdersAction) -> Self {
        match action {
            OrdersAction::FetchUserOrders(phase) => {
                if let Some(list) = self.status.apply(phase, LIST_FAILED) {
                    self.list = list;
                }
            }
            OrdersAction::FetchByNumber(phase) => {
                if let Some(order) = self.current_status.apply(phase, CURRENT_FAILED) {
                    self.current = Some(order);
                }
            }
            OrdersAction::ClearCurrent => {
                self.current = None;
                self.current_status.clear_error();
            }
            OrdersAction::ClearError => self.status.clear_error(),
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::lifecycle::RequestId;
    use crate::test_utils::test_order;

    fn id(n: u64) -> RequestId {
        RequestId::new(n)
    }

    #[test]
    fn test_fetch_user_orders() {
        let prev = OrdersState {
            status: RequestStatus {
                error: Some("err".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };

        let next = prev.reduce(OrdersAction::FetchUserOrders(Lifecycle::Pending(id(1))));
        assert!(next.loading());
        assert_eq!(next.error(), None);
        assert!(!next.current_loading());

        let next = next.reduce(OrdersAction::FetchUserOrders(Lifecycle::Fulfilled(
            id(1),
            vec![test_order(1)],
        )));
        assert!(!next.loading());
        assert_eq!(next.list, vec![test_order(1)]);
    }

    #[test]
    fn test_fetch_user_orders_rejected() {
        let next = OrdersState::default().reduce(OrdersAction::FetchUserOrders(Lifecycle::Rejected(
            id(1),
            Some("request rejected".to_string()),
        )));
        assert!(!next.loading());
        assert_eq!(next.error(), Some("request rejected"));
        assert_eq!(next.current_error(), None);
    }

    #[test]
    fn test_fetch_by_number_is_independent() {
        let next = OrdersState::default()
            .reduce(OrdersAction::FetchUserOrders(Lifecycle::Pending(id(1))))
            .reduce(OrdersAction::FetchByNumber(Lifecycle::Pending(id(2))));
        assert!(next.loading());
        assert!(next.current_loading());

        let next = next.reduce(OrdersAction::FetchByNumber(Lifecycle::Fulfilled(
            id(2),
            test_order(7),
        )));
        assert!(!next.current_loading());
        assert_eq!(next.current, Some(test_order(7)));
        assert!(next.loading());

        let next = next.reduce(OrdersAction::FetchByNumber(Lifecycle::Rejected(id(3), None)));
        assert_eq!(next.current_error(), Some(CURRENT_FAILED));
        assert_eq!(next.current, Some(test_order(7)));
        assert_eq!(next.error(), None);
    }

    #[test]
    fn test_clear_current() {
        let state = OrdersState {
            current: Some(test_order(1)),
            current_status: RequestStatus {
                error: Some("order error".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };

        let state = state.reduce(OrdersAction::ClearCurrent);
        assert_eq!(state.current, None);
        assert_eq!(state.current_error(), None);
    }

    #[test]
    fn test_clear_error() {
        let state = OrdersState {
            list: vec![test_order(1)],
            status: RequestStatus {
                error: Some("some error".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };

        let state = state.reduce(OrdersAction::ClearError);
        assert_eq!(state.error(), None);
        assert_eq!(state.list, vec![test_order(1)]);
    }
}

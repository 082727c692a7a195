//! Root store
//!
//! The six state containers composed into one [`RootState`]. Every container
//! owns its slice and reduces only the actions addressed to it; the root
//! routes an [`Action`] to its container and enforces nothing across them.

use tokio::sync::watch;

pub mod constructor;
pub mod feed;
pub mod ingredients;
pub mod lifecycle;
pub mod order_creation;
pub mod orders;
pub mod profile;
pub mod view;

pub use constructor::{ConstructorAction, ConstructorState};
pub use feed::{FeedAction, FeedState};
pub use ingredients::{IngredientsAction, IngredientsState};
pub use lifecycle::{Lifecycle, RequestId, RequestStatus};
pub use order_creation::{OrderCreationAction, OrderCreationState};
pub use orders::{OrdersAction, OrdersState};
pub use profile::{ProfileAction, ProfileState};
pub use view::{constructor_view, ConstructorView};

/// Action addressed to one container
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Ingredient catalog
    Ingredients(IngredientsAction),
    /// Constructor selection
    Constructor(ConstructorAction),
    /// Order creation
    OrderCreation(OrderCreationAction),
    /// Order history
    Orders(OrdersAction),
    /// Public feed
    Feed(FeedAction),
    /// User profile
    Profile(ProfileAction),
}

macro_rules! impl_from_action {
    ($($variant:ident($action:ty)),* $(,)?) => {
        $(
            impl From<$action> for Action {
                fn from(action: $action) -> Self {
                    Action::$variant(action)
                }
            }
        )*
    };
}

impl_from_action!(
    Ingredients(IngredientsAction),
    Constructor(ConstructorAction),
    OrderCreation(OrderCreationAction),
    Orders(OrdersAction),
    Feed(FeedAction),
    Profile(ProfileAction),
);

/// Aggregate of every container
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RootState {
    /// Ingredient catalog
    pub ingredients: IngredientsState,
    /// Constructor selection
    pub constructor: ConstructorState,
    /// Order creation
    pub order_creation: OrderCreationState,
    /// Order history
    pub orders: OrdersState,
    /// Public feed
    pub feed: FeedState,
    /// User profile
    pub profile: ProfileState,
}

impl RootState {
    /// Route an action to its container
    pub fn reduce(mut self, action: Action) -> Self {
        match action {
            Action::Ingredients(action) => {
                self.ingredients = self.ingredients.reduce(action);
            }
            Action::Constructor(action) => {
                self.constructor = self.constructor.reduce(action);
            }
            Action::OrderCreation(action) => {
                self.order_creation = self.order_creation.reduce(action);
            }
            Action::Orders(action) => {
                self.orders = self.orders.reduce(action);
            }
            Action::Feed(action) => {
                self.feed = self.feed.reduce(action);
            }
            Action::Profile(action) => {
                self.profile = self.profile.reduce(action);
            }
        }
        self
    }

    /// Bun and fillings of the selection, resolved against the catalog
    pub fn constructor_view(&self) -> ConstructorView {
        constructor_view(self.constructor.selected_ids(), &self.ingredients.data)
    }

    /// Index of the first selected id that resolves to a bun
    pub fn selected_bun_index(&self) -> Option<usize> {
        self.constructor
            .selected_ids()
            .iter()
            .position(|id| self.ingredients.by_id(id).is_some_and(|ing| ing.is_bun()))
    }
}

/// Holder of the [`RootState`]
///
/// Dispatch applies an action atomically; readers either borrow the current
/// snapshot through [`Store::select`] or subscribe to every committed one.
#[derive(Debug)]
pub struct Store {
    state: watch::Sender<RootState>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new(RootState::default())
    }
}

impl Store {
    /// Create a store holding `state`
    pub fn new(state: RootState) -> Self {
        let (state, _) = watch::channel(state);
        Self { state }
    }

    /// Apply an action
    pub fn dispatch(&self, action: impl Into<Action>) {
        let action = action.into();
        tracing::trace!("dispatch {:?}", action);
        self.state.send_modify(|state| {
            let current = std::mem::take(state);
            *state = current.reduce(action);
        });
    }

    /// Read from the current snapshot
    pub fn select<R>(&self, selector: impl FnOnce(&RootState) -> R) -> R {
        selector(&self.state.borrow())
    }

    /// Clone of the current snapshot
    pub fn state(&self) -> RootState {
        self.state.borrow().clone()
    }

    /// Receiver notified after every dispatch
    pub fn subscribe(&self) -> watch::Receiver<RootState> {
        self.state.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{test_ingredients, test_order};

    #[test]
    fn test_initial_state() {
        let state = Store::default().state();
        assert_eq!(state.ingredients, IngredientsState::default());
        assert_eq!(state.constructor, ConstructorState::default());
        assert_eq!(state.order_creation, OrderCreationState::default());
        assert_eq!(state.orders, OrdersState::default());
        assert_eq!(state.feed, FeedState::default());
        assert_eq!(state.profile, ProfileState::default());
    }

    #[test]
    fn test_foreign_actions_leave_containers_alone() {
        let initial = RootState::default();

        let next = initial
            .clone()
            .reduce(ConstructorAction::Add("bun-1".to_string()).into());
        assert_eq!(next.ingredients, initial.ingredients);
        assert_eq!(next.order_creation, initial.order_creation);
        assert_eq!(next.orders, initial.orders);
        assert_eq!(next.feed, initial.feed);
        assert_eq!(next.profile, initial.profile);
        assert_ne!(next.constructor, initial.constructor);

        let next = initial.clone().reduce(FeedAction::ClearError.into());
        assert_eq!(next, initial);
    }

    #[test]
    fn test_dispatch_and_select() {
        let store = Store::default();
        store.dispatch(IngredientsAction::Fetch(Lifecycle::Fulfilled(
            RequestId::new(1),
            test_ingredients(),
        )));
        store.dispatch(ConstructorAction::Add("main-1".to_string()));
        store.dispatch(ConstructorAction::Add("bun-1".to_string()));
        store.dispatch(ConstructorAction::Add("unknown".to_string()));

        let view = store.select(RootState::constructor_view);
        assert_eq!(view.bun.map(|bun| bun.id), Some("bun-1".to_string()));
        assert_eq!(view.ingredients.len(), 1);
        assert_eq!(store.select(RootState::selected_bun_index), Some(1));
    }

    #[test]
    fn test_selected_bun_index_without_bun() {
        let store = Store::default();
        store.dispatch(ConstructorAction::Add("bun-1".to_string()));
        // catalog not loaded yet, nothing resolves
        assert_eq!(store.select(RootState::selected_bun_index), None);
    }

    #[tokio::test]
    async fn test_subscribers_see_every_dispatch() {
        let store = Store::default();
        let mut receiver = store.subscribe();

        store.dispatch(OrderCreationAction::Create(Lifecycle::Fulfilled(
            RequestId::new(1),
            test_order(5),
        )));

        receiver.changed().await.unwrap();
        assert_eq!(
            receiver.borrow_and_update().order_creation.last_order,
            Some(test_order(5))
        );
    }
}

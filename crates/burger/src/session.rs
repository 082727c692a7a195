//! Session driver
//!
//! A [`Session`] binds the root [`Store`] to a [`BurgerConnector`] and a
//! [`CredentialStore`]. Every async operation runs as three phases: a
//! `Pending` action stamped with a fresh [`RequestId`], the connector call,
//! then a `Fulfilled` or `Rejected` action with the same id. Failures land in
//! the store; the methods still return the [`Result`] so callers can chain on
//! the outcome.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use burger_common::{
    Error, ForgotPasswordData, Ingredient, LoginData, Order, OrdersData, RegisterData,
    ResetPasswordData, User, UserPatch,
};
use tracing::instrument;

use crate::connector::BurgerConnector;
use crate::credentials::CredentialStore;
use crate::store::{
    Action, ConstructorAction, FeedAction, IngredientsAction, Lifecycle, OrderCreationAction,
    OrdersAction, ProfileAction, RequestId, RootState, Store,
};

/// Session
#[derive(Debug, Clone)]
pub struct Session {
    store: Arc<Store>,
    connector: Arc<dyn BurgerConnector + Send + Sync>,
    credentials: Arc<dyn CredentialStore + Send + Sync>,
    next_request: Arc<AtomicU64>,
}

impl Session {
    /// Create new [`Session`]
    pub fn new(
        store: Arc<Store>,
        connector: Arc<dyn BurgerConnector + Send + Sync>,
        credentials: Arc<dyn CredentialStore + Send + Sync>,
    ) -> Self {
        Self {
            store,
            connector,
            credentials,
            next_request: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Root store
    pub fn store(&self) -> &Arc<Store> {
        &self.store
    }

    /// Snapshot of the root state
    pub fn state(&self) -> RootState {
        self.store.state()
    }

    /// Credential store shared with the connector
    pub fn credentials(&self) -> &Arc<dyn CredentialStore + Send + Sync> {
        &self.credentials
    }

    fn next_request_id(&self) -> RequestId {
        RequestId::new(self.next_request.fetch_add(1, Ordering::Relaxed) + 1)
    }

    async fn run<T, A, F>(&self, action: fn(Lifecycle<T>) -> A, request: F) -> Result<T, Error>
    where
        T: Clone,
        A: Into<Action>,
        F: Future<Output = Result<T, Error>>,
    {
        let id = self.next_request_id();
        self.store.dispatch(action(Lifecycle::Pending(id)));

        let result = request.await;
        if let Err(err) = &result {
            tracing::debug!("Request {} failed: {}", id, err);
        }

        self.store
            .dispatch(action(Lifecycle::settle(id, result.as_ref().cloned())));
        result
    }

    /// Load the ingredient catalog
    #[instrument(skip(self))]
    pub async fn fetch_ingredients(&self) -> Result<Vec<Ingredient>, Error> {
        self.run(IngredientsAction::Fetch, self.connector.get_ingredients())
            .await
    }

    /// Submit an order with the given ingredient ids
    #[instrument(skip(self))]
    pub async fn create_order(&self, ingredient_ids: Vec<String>) -> Result<Order, Error> {
        self.run(
            OrderCreationAction::Create,
            self.connector.post_order(ingredient_ids),
        )
        .await
    }

    /// Load the order history of the authenticated user
    #[instrument(skip(self))]
    pub async fn fetch_user_orders(&self) -> Result<Vec<Order>, Error> {
        self.run(OrdersAction::FetchUserOrders, self.connector.get_user_orders())
            .await
    }

    /// Load a single order into `current`
    #[instrument(skip(self))]
    pub async fn fetch_order_by_number(&self, number: u64) -> Result<Order, Error> {
        self.run(
            OrdersAction::FetchByNumber,
            self.connector.get_order_by_number(number),
        )
        .await
    }

    /// Load the public feed
    #[instrument(skip(self))]
    pub async fn fetch_feed(&self) -> Result<OrdersData, Error> {
        self.run(FeedAction::Fetch, self.connector.get_feed()).await
    }

    /// Load the authenticated user
    #[instrument(skip(self))]
    pub async fn fetch_profile(&self) -> Result<User, Error> {
        self.run(ProfileAction::Fetch, self.connector.get_user())
            .await
    }

    /// Create an account and keep its credentials
    #[instrument(skip_all)]
    pub async fn register_user(&self, data: RegisterData) -> Result<User, Error> {
        self.run(ProfileAction::Register, async {
            let response = self.connector.register(data).await?;
            self.credentials
                .store(response.access_token, response.refresh_token)
                .await?;
            Ok(response.user)
        })
        .await
    }

    /// Log in and keep the credentials
    #[instrument(skip_all)]
    pub async fn login_user(&self, data: LoginData) -> Result<User, Error> {
        self.run(ProfileAction::Login, async {
            let response = self.connector.login(data).await?;
            self.credentials
                .store(response.access_token, response.refresh_token)
                .await?;
            Ok(response.user)
        })
        .await
    }

    /// Invalidate the stored refresh credential and forget both credentials
    #[instrument(skip(self))]
    pub async fn logout_user(&self) -> Result<(), Error> {
        self.run(ProfileAction::Logout, async {
            let refresh_token = self
                .credentials
                .refresh_token()
                .await
                .ok_or(Error::MissingCredential("refresh"))?;
            self.connector.logout(refresh_token).await?;
            self.credentials.clear().await
        })
        .await
    }

    /// Update name, email or password
    #[instrument(skip_all)]
    pub async fn update_user(&self, patch: UserPatch) -> Result<User, Error> {
        self.run(ProfileAction::Update, self.connector.patch_user(patch))
            .await
    }

    /// Request a password reset email
    #[instrument(skip_all)]
    pub async fn forgot_password(&self, data: ForgotPasswordData) -> Result<(), Error> {
        self.run(
            ProfileAction::ForgotPassword,
            self.connector.forgot_password(data),
        )
        .await
    }

    /// Set a new password with the emailed code
    #[instrument(skip_all)]
    pub async fn reset_password(&self, data: ResetPasswordData) -> Result<(), Error> {
        self.run(
            ProfileAction::ResetPassword,
            self.connector.reset_password(data),
        )
        .await
    }

    /// Order the burger in the constructor
    ///
    /// Returns `Ok(None)` without a request when no bun is selected or an
    /// order is already being created, and [`Error::NotAuthenticated`] when no
    /// user is loaded. After a successful order the constructor is emptied and
    /// the order history reloaded.
    #[instrument(skip(self))]
    pub async fn place_order(&self) -> Result<Option<Order>, Error> {
        let (orderable, in_flight, authenticated, ingredient_ids) = self.store.select(|state| {
            (
                state.constructor_view().is_orderable(),
                state.order_creation.loading(),
                state.profile.is_authenticated(),
                state.constructor.selected_ids().to_vec(),
            )
        });

        if !orderable || in_flight {
            return Ok(None);
        }
        if !authenticated {
            return Err(Error::NotAuthenticated);
        }

        let order = self.create_order(ingredient_ids).await?;
        tracing::info!("Order {} placed", order.number);

        self.clear_constructor();
        if let Err(err) = self.fetch_user_orders().await {
            tracing::warn!("Could not reload order history: {}", err);
        }

        Ok(Some(order))
    }

    /// Add an ingredient to the constructor
    ///
    /// A bun replaces every bun already selected; anything else is appended.
    pub fn add_ingredient(&self, id: impl Into<String>) {
        let id = id.into();
        let bun_indexes: Vec<usize> = self.store.select(|state| {
            if !state.ingredients.by_id(&id).is_some_and(Ingredient::is_bun) {
                return Vec::new();
            }
            state
                .constructor
                .selected_ids()
                .iter()
                .enumerate()
                .filter(|(_, selected)| {
                    state
                        .ingredients
                        .by_id(selected)
                        .is_some_and(Ingredient::is_bun)
                })
                .map(|(index, _)| index)
                .collect()
        });

        for index in bun_indexes.into_iter().rev() {
            self.store.dispatch(ConstructorAction::Remove(index));
        }
        self.store.dispatch(ConstructorAction::Add(id));
    }

    /// Remove the entry at `index`
    pub fn remove_ingredient(&self, index: usize) {
        self.store.dispatch(ConstructorAction::Remove(index));
    }

    /// Move the entry at `from` to `to`
    pub fn move_ingredient(&self, from: usize, to: usize) {
        self.store.dispatch(ConstructorAction::Move { from, to });
    }

    /// Empty the constructor
    pub fn clear_constructor(&self) {
        self.store.dispatch(ConstructorAction::Clear);
    }

    /// Forget the last created order
    pub fn clear_last_order(&self) {
        self.store.dispatch(OrderCreationAction::ClearLastOrder);
    }

    /// Reset the order creation error
    pub fn clear_create_order_error(&self) {
        self.store.dispatch(OrderCreationAction::ClearError);
    }

    /// Forget the order loaded by number
    pub fn clear_current_order(&self) {
        self.store.dispatch(OrdersAction::ClearCurrent);
    }

    /// Reset the order history error
    pub fn clear_orders_error(&self) {
        self.store.dispatch(OrdersAction::ClearError);
    }

    /// Reset the feed error
    pub fn clear_feed_error(&self) {
        self.store.dispatch(FeedAction::ClearError);
    }

    /// Forget the user
    pub fn clear_profile(&self) {
        self.store.dispatch(ProfileAction::Clear);
    }

    /// Reset the profile error
    pub fn clear_profile_error(&self) {
        self.store.dispatch(ProfileAction::ClearError);
    }
}

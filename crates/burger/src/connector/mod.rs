//! Ordering API client

use std::fmt::Debug;

use async_trait::async_trait;
use burger_common::{
    AuthResponse, Error, ForgotPasswordData, Ingredient, LoginData, Order, OrdersData,
    RegisterData, ResetPasswordData, TokenResponse, User, UserPatch,
};

#[cfg(feature = "http")]
pub mod http_client;

#[cfg(feature = "http")]
pub use http_client::HttpClient;

/// Interface that connects a session to the ordering API. Typically represents an [HttpClient].
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait BurgerConnector: Debug {
    /// Full ingredient catalog
    async fn get_ingredients(&self) -> Result<Vec<Ingredient>, Error>;
    /// Submit an order, bun included, in burger order
    async fn post_order(&self, ingredients: Vec<String>) -> Result<Order, Error>;
    /// Orders of the authenticated user
    async fn get_user_orders(&self) -> Result<Vec<Order>, Error>;
    /// Single order by its number
    async fn get_order_by_number(&self, number: u64) -> Result<Order, Error>;
    /// Public feed
    async fn get_feed(&self) -> Result<OrdersData, Error>;
    /// Authenticated user
    async fn get_user(&self) -> Result<User, Error>;
    /// Update the authenticated user
    async fn patch_user(&self, patch: UserPatch) -> Result<User, Error>;
    /// Create an account
    async fn register(&self, data: RegisterData) -> Result<AuthResponse, Error>;
    /// Log in
    async fn login(&self, data: LoginData) -> Result<AuthResponse, Error>;
    /// Invalidate a refresh credential
    async fn logout(&self, refresh_token: String) -> Result<(), Error>;
    /// Exchange a refresh credential for a new pair
    async fn refresh_token(&self, refresh_token: String) -> Result<TokenResponse, Error>;
    /// Request a password reset email
    async fn forgot_password(&self, data: ForgotPasswordData) -> Result<(), Error>;
    /// Set a new password with the emailed code
    async fn reset_password(&self, data: ResetPasswordData) -> Result<(), Error>;
}

//! Burger kit shared types and functions.
//!
//! This crate is the base foundation for everything that talks to the burger
//! ordering API: the catalog, order and user types exchanged with the backend,
//! the API base url, and the error type shared by the client crates.

pub mod api_url;
pub mod auth;
pub mod error;
pub mod types;

pub use api_url::ApiUrl;
pub use auth::{
    AuthResponse, ForgotPasswordData, LoginData, RegisterData, ResetPasswordData, TokenResponse,
    UserPatch,
};
pub use error::{Error, ErrorResponse};
pub use types::{Ingredient, IngredientType, Order, OrdersData, User};

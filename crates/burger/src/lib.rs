//! Client side state for the burger constructor
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![warn(rustdoc::bare_urls)]

pub mod builder;
pub mod connector;
pub mod credentials;
pub mod session;
pub mod store;

#[cfg(test)]
mod test_utils;

/// Re-export shared types
#[doc(hidden)]
pub use burger_common::{
    api_url, auth, error, types, ApiUrl, AuthResponse, Error, ErrorResponse, ForgotPasswordData,
    Ingredient, IngredientType, LoginData, Order, OrdersData, RegisterData, ResetPasswordData,
    TokenResponse, User, UserPatch,
};

pub use self::builder::SessionBuilder;
pub use self::connector::BurgerConnector;
#[cfg(feature = "http")]
pub use self::connector::HttpClient;
pub use self::credentials::{CredentialStore, MemoryCredentialStore};
pub use self::session::Session;
pub use self::store::{Action, ConstructorView, RootState, Store};

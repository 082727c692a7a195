//! Credential storage
//!
//! The backend hands out two credentials on register and login: a short lived
//! access credential sent with every authenticated call and a long lived
//! refresh credential used to obtain a new pair. They live in two separate
//! stores with different lifetimes, so the trait keeps them apart.

use std::fmt::Debug;

use async_trait::async_trait;
use burger_common::Error;
use tokio::sync::RwLock;

/// Storage for the access and refresh credentials
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait CredentialStore: Debug {
    /// Current access credential
    async fn access_token(&self) -> Option<String>;
    /// Replace or remove the access credential
    async fn set_access_token(&self, token: Option<String>) -> Result<(), Error>;
    /// Current refresh credential
    async fn refresh_token(&self) -> Option<String>;
    /// Replace or remove the refresh credential
    async fn set_refresh_token(&self, token: Option<String>) -> Result<(), Error>;

    /// Store both credentials, leaving a slot untouched when its value is `None`
    async fn store(
        &self,
        access_token: Option<String>,
        refresh_token: Option<String>,
    ) -> Result<(), Error> {
        if let Some(refresh_token) = refresh_token {
            self.set_refresh_token(Some(refresh_token)).await?;
        }
        if let Some(access_token) = access_token {
            self.set_access_token(Some(access_token)).await?;
        }
        Ok(())
    }

    /// Remove both credentials
    async fn clear(&self) -> Result<(), Error> {
        self.set_refresh_token(None).await?;
        self.set_access_token(None).await
    }
}

/// In memory [`CredentialStore`], lost when the process exits
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    access_token: RwLock<Option<String>>,
    refresh_token: RwLock<Option<String>>,
}

impl MemoryCredentialStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl CredentialStore for MemoryCredentialStore {
    async fn access_token(&self) -> Option<String> {
        self.access_token.read().await.clone()
    }

    async fn set_access_token(&self, token: Option<String>) -> Result<(), Error> {
        *self.access_token.write().await = token;
        Ok(())
    }

    async fn refresh_token(&self) -> Option<String> {
        self.refresh_token.read().await.clone()
    }

    async fn set_refresh_token(&self, token: Option<String>) -> Result<(), Error> {
        *self.refresh_token.write().await = token;
        Ok(())
    }
}

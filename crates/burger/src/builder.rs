//! Session builder

use std::sync::Arc;

use burger_common::{ApiUrl, Error};

#[cfg(feature = "http")]
use crate::connector::HttpClient;
use crate::connector::BurgerConnector;
use crate::credentials::{CredentialStore, MemoryCredentialStore};
use crate::session::Session;
use crate::store::{RootState, Store};

/// Builder for creating a new [`Session`]
#[derive(Debug, Default)]
pub struct SessionBuilder {
    #[cfg_attr(not(feature = "http"), allow(dead_code))]
    api_url: Option<ApiUrl>,
    connector: Option<Arc<dyn BurgerConnector + Send + Sync>>,
    credentials: Option<Arc<dyn CredentialStore + Send + Sync>>,
    initial_state: Option<RootState>,
}

impl SessionBuilder {
    /// Create a new SessionBuilder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API url used by the default [`HttpClient`]
    pub fn api_url(mut self, api_url: ApiUrl) -> Self {
        self.api_url = Some(api_url);
        self
    }

    /// Set a custom connector
    pub fn connector<C>(mut self, connector: C) -> Self
    where
        C: BurgerConnector + Send + Sync + 'static,
    {
        self.connector = Some(Arc::new(connector));
        self
    }

    /// Set a shared connector
    pub fn shared_connector(mut self, connector: Arc<dyn BurgerConnector + Send + Sync>) -> Self {
        self.connector = Some(connector);
        self
    }

    /// Set the credential store; defaults to a [`MemoryCredentialStore`]
    pub fn credentials(mut self, credentials: Arc<dyn CredentialStore + Send + Sync>) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Start from a given state instead of the initial one
    pub fn initial_state(mut self, state: RootState) -> Self {
        self.initial_state = Some(state);
        self
    }

    /// Build the session
    ///
    /// Without a custom connector an [`HttpClient`] is created against the
    /// configured API url, sharing the session's credential store.
    pub fn build(self) -> Result<Session, Error> {
        let credentials = self
            .credentials
            .unwrap_or_else(|| Arc::new(MemoryCredentialStore::new()));

        let connector = match self.connector {
            Some(connector) => connector,
            #[cfg(feature = "http")]
            None => Arc::new(HttpClient::new(
                self.api_url.unwrap_or_default(),
                credentials.clone(),
            )) as Arc<dyn BurgerConnector + Send + Sync>,
            #[cfg(not(feature = "http"))]
            None => return Err(Error::Custom("Connector required".to_string())),
        };

        let store = Arc::new(Store::new(self.initial_state.unwrap_or_default()));

        Ok(Session::new(store, connector, credentials))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_with_defaults() {
        let session = SessionBuilder::new().build().unwrap();
        assert_eq!(session.state(), RootState::default());
    }

    #[tokio::test]
    async fn test_credentials_are_shared() {
        let credentials = Arc::new(MemoryCredentialStore::new());
        let session = SessionBuilder::new()
            .api_url("http://localhost:3000/api".parse().unwrap())
            .credentials(credentials.clone())
            .build()
            .unwrap();

        credentials
            .set_access_token(Some("Bearer a".to_string()))
            .await
            .unwrap();
        assert_eq!(
            session.credentials().access_token().await.as_deref(),
            Some("Bearer a")
        );
    }
}

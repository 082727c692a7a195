//! HTTP client for the ordering API

use std::sync::Arc;

use async_trait::async_trait;
use burger_common::{
    ApiUrl, AuthResponse, Error, ErrorResponse, ForgotPasswordData, Ingredient, LoginData, Order,
    OrdersData, RegisterData, ResetPasswordData, TokenResponse, User, UserPatch,
};
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::instrument;
use url::Url;

use super::BurgerConnector;
use crate::credentials::CredentialStore;

#[derive(Debug, Deserialize)]
struct IngredientsResponse {
    data: Vec<Ingredient>,
}

#[derive(Debug, Deserialize)]
struct OrderResponse {
    order: Order,
}

#[derive(Debug, Deserialize)]
struct OrdersResponse {
    orders: Vec<Order>,
}

#[derive(Debug, Deserialize)]
struct UserResponse {
    user: User,
}

#[derive(Debug, Serialize)]
struct OrderRequest {
    ingredients: Vec<String>,
}

#[derive(Debug, Serialize)]
struct TokenRequest {
    token: String,
}

fn http_error(err: reqwest::Error) -> Error {
    Error::HttpError(err.status().map(|status| status.as_u16()), err.to_string())
}

#[derive(Debug, Clone)]
struct HttpClientCore {
    inner: Client,
}

impl HttpClientCore {
    fn new() -> Self {
        Self {
            inner: Client::new(),
        }
    }

    async fn request<P, R>(
        &self,
        method: Method,
        url: Url,
        access_token: Option<&str>,
        payload: Option<&P>,
    ) -> Result<R, Error>
    where
        P: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let mut request = self.inner.request(method, url);

        if let Some(access_token) = access_token {
            request = request.header(AUTHORIZATION, access_token);
        }
        if let Some(payload) = payload {
            request = request.json(payload);
        }

        let response = request.send().await.map_err(http_error)?;
        Self::decode(response).await
    }

    /// Every body carries `success`; anything but a successful status with
    /// `success: true` is turned into an error from the body's `message`.
    async fn decode<R: DeserializeOwned>(response: Response) -> Result<R, Error> {
        let status = response.status();
        let body = response.text().await.map_err(http_error)?;

        let value: Value = match serde_json::from_str(&body) {
            Ok(value) => value,
            Err(err) if status.is_success() => {
                tracing::warn!("Http Response error: {}", err);
                return Err(err.into());
            }
            Err(_) => {
                return Err(Error::Api {
                    status: Some(status.as_u16()),
                    message: body,
                })
            }
        };

        let success = value
            .get("success")
            .and_then(Value::as_bool)
            .unwrap_or(status.is_success());

        if !status.is_success() || !success {
            return Err(ErrorResponse::from_value(value)?.into_error(Some(status.as_u16())));
        }

        serde_json::from_value(value).map_err(|err| {
            tracing::warn!("Http Response error: {}", err);
            err.into()
        })
    }
}

/// Http Client
///
/// Authenticated endpoints read the access credential from the shared
/// [`CredentialStore`]. An expired credential is refreshed once with the
/// stored refresh credential and the call is retried.
#[derive(Debug, Clone)]
pub struct HttpClient {
    core: HttpClientCore,
    api_url: ApiUrl,
    credentials: Arc<dyn CredentialStore + Send + Sync>,
}

impl HttpClient {
    /// Create new [`HttpClient`]
    pub fn new(api_url: ApiUrl, credentials: Arc<dyn CredentialStore + Send + Sync>) -> Self {
        Self {
            core: HttpClientCore::new(),
            api_url,
            credentials,
        }
    }

    /// Create new [`HttpClient`] on top of a configured [`Client`]
    pub fn with_client(
        client: Client,
        api_url: ApiUrl,
        credentials: Arc<dyn CredentialStore + Send + Sync>,
    ) -> Self {
        Self {
            core: HttpClientCore { inner: client },
            api_url,
            credentials,
        }
    }

    /// Base url of the API
    pub fn api_url(&self) -> &ApiUrl {
        &self.api_url
    }

    async fn public_request<P, R>(
        &self,
        method: Method,
        path: &[&str],
        payload: Option<&P>,
    ) -> Result<R, Error>
    where
        P: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.api_url.join_paths(path)?;
        self.core.request(method, url, None, payload).await
    }

    async fn authed_request<P, R>(
        &self,
        method: Method,
        path: &[&str],
        payload: Option<&P>,
    ) -> Result<R, Error>
    where
        P: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.api_url.join_paths(path)?;
        let access_token = self
            .credentials
            .access_token()
            .await
            .ok_or(Error::MissingCredential("access"))?;

        match self
            .core
            .request(method.clone(), url.clone(), Some(&access_token), payload)
            .await
        {
            Err(err) if err.is_token_expired() => {
                tracing::debug!("Access token expired, refreshing");
                let access_token = self.refresh_credentials().await?;
                self.core
                    .request(method, url, Some(&access_token), payload)
                    .await
            }
            result => result,
        }
    }

    /// Swap the stored refresh credential for a new pair, returning the new
    /// access credential
    #[instrument(skip(self))]
    async fn refresh_credentials(&self) -> Result<String, Error> {
        let refresh_token = self
            .credentials
            .refresh_token()
            .await
            .ok_or(Error::MissingCredential("refresh"))?;

        let tokens = self.refresh_token(refresh_token).await?;
        self.credentials
            .store(
                Some(tokens.access_token.clone()),
                Some(tokens.refresh_token),
            )
            .await?;

        Ok(tokens.access_token)
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl BurgerConnector for HttpClient {
    #[instrument(skip(self), fields(api_url = %self.api_url))]
    async fn get_ingredients(&self) -> Result<Vec<Ingredient>, Error> {
        Ok(self
            .public_request::<(), IngredientsResponse>(Method::GET, &["ingredients"], None)
            .await?
            .data)
    }

    #[instrument(skip(self), fields(api_url = %self.api_url))]
    async fn post_order(&self, ingredients: Vec<String>) -> Result<Order, Error> {
        let request = OrderRequest { ingredients };
        Ok(self
            .authed_request::<_, OrderResponse>(Method::POST, &["orders"], Some(&request))
            .await?
            .order)
    }

    #[instrument(skip(self), fields(api_url = %self.api_url))]
    async fn get_user_orders(&self) -> Result<Vec<Order>, Error> {
        Ok(self
            .authed_request::<(), OrdersResponse>(Method::GET, &["orders"], None)
            .await?
            .orders)
    }

    #[instrument(skip(self), fields(api_url = %self.api_url))]
    async fn get_order_by_number(&self, number: u64) -> Result<Order, Error> {
        let number_path = number.to_string();
        self.public_request::<(), OrdersResponse>(Method::GET, &["orders", &number_path], None)
            .await?
            .orders
            .into_iter()
            .next()
            .ok_or(Error::OrderNotFound(number))
    }

    #[instrument(skip(self), fields(api_url = %self.api_url))]
    async fn get_feed(&self) -> Result<OrdersData, Error> {
        self.public_request::<(), _>(Method::GET, &["orders", "all"], None)
            .await
    }

    #[instrument(skip(self), fields(api_url = %self.api_url))]
    async fn get_user(&self) -> Result<User, Error> {
        Ok(self
            .authed_request::<(), UserResponse>(Method::GET, &["auth", "user"], None)
            .await?
            .user)
    }

    #[instrument(skip(self, patch), fields(api_url = %self.api_url))]
    async fn patch_user(&self, patch: UserPatch) -> Result<User, Error> {
        Ok(self
            .authed_request::<_, UserResponse>(Method::PATCH, &["auth", "user"], Some(&patch))
            .await?
            .user)
    }

    #[instrument(skip(self, data), fields(api_url = %self.api_url))]
    async fn register(&self, data: RegisterData) -> Result<AuthResponse, Error> {
        self.public_request(Method::POST, &["auth", "register"], Some(&data))
            .await
    }

    #[instrument(skip(self, data), fields(api_url = %self.api_url))]
    async fn login(&self, data: LoginData) -> Result<AuthResponse, Error> {
        self.public_request(Method::POST, &["auth", "login"], Some(&data))
            .await
    }

    #[instrument(skip_all, fields(api_url = %self.api_url))]
    async fn logout(&self, refresh_token: String) -> Result<(), Error> {
        let request = TokenRequest {
            token: refresh_token,
        };
        self.public_request::<_, Value>(Method::POST, &["auth", "logout"], Some(&request))
            .await?;
        Ok(())
    }

    #[instrument(skip_all, fields(api_url = %self.api_url))]
    async fn refresh_token(&self, refresh_token: String) -> Result<TokenResponse, Error> {
        let request = TokenRequest {
            token: refresh_token,
        };
        self.public_request(Method::POST, &["auth", "token"], Some(&request))
            .await
    }

    #[instrument(skip(self, data), fields(api_url = %self.api_url))]
    async fn forgot_password(&self, data: ForgotPasswordData) -> Result<(), Error> {
        self.public_request::<_, Value>(Method::POST, &["password-reset"], Some(&data))
            .await?;
        Ok(())
    }

    #[instrument(skip(self, data), fields(api_url = %self.api_url))]
    async fn reset_password(&self, data: ResetPasswordData) -> Result<(), Error> {
        self.public_request::<_, Value>(Method::POST, &["password-reset", "reset"], Some(&data))
            .await?;
        Ok(())
    }
}

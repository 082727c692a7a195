#![cfg(test)]
#![allow(missing_docs)]

use std::sync::{Arc, Mutex};

use burger_common::{
    AuthResponse, Error, ForgotPasswordData, Ingredient, IngredientType, LoginData, Order,
    OrdersData, RegisterData, ResetPasswordData, TokenResponse, User, UserPatch,
};

use crate::connector::BurgerConnector;
use crate::credentials::MemoryCredentialStore;
use crate::session::Session;
use crate::store::RootState;
use crate::SessionBuilder;

/// Create a test ingredient
pub fn test_ingredient(id: &str, kind: IngredientType, price: u64) -> Ingredient {
    Ingredient {
        id: id.to_string(),
        name: format!("Ingredient {id}"),
        kind,
        proteins: 10,
        fat: 5,
        carbohydrates: 20,
        calories: 150,
        price,
        image: format!("https://img.example.com/{id}.png"),
        image_mobile: format!("https://img.example.com/{id}-mobile.png"),
        image_large: format!("https://img.example.com/{id}-large.png"),
    }
}

/// Two buns, two mains and a sauce
pub fn test_ingredients() -> Vec<Ingredient> {
    vec![
        test_ingredient("bun-1", IngredientType::Bun, 100),
        test_ingredient("bun-2", IngredientType::Bun, 150),
        test_ingredient("main-1", IngredientType::Main, 300),
        test_ingredient("main-2", IngredientType::Main, 400),
        test_ingredient("sauce-1", IngredientType::Sauce, 50),
    ]
}

/// Create a test order
pub fn test_order(number: u64) -> Order {
    Order {
        id: format!("order-{number}"),
        name: format!("Burger {number}"),
        status: "done".to_string(),
        created_at: "2024-05-01T10:00:00.000Z".to_string(),
        updated_at: "2024-05-01T10:00:01.000Z".to_string(),
        number,
        ingredients: vec![
            "bun-1".to_string(),
            "main-1".to_string(),
            "bun-1".to_string(),
        ],
    }
}

/// Create a test feed page
pub fn test_feed() -> OrdersData {
    OrdersData {
        orders: vec![test_order(2), test_order(1)],
        total: 120,
        total_today: 7,
    }
}

/// Create a test user
pub fn test_user() -> User {
    User {
        email: "john@example.com".to_string(),
        name: "John".to_string(),
    }
}

/// Create a test auth response
pub fn test_auth_response() -> AuthResponse {
    AuthResponse {
        user: test_user(),
        access_token: Some("Bearer access-1".to_string()),
        refresh_token: Some("refresh-1".to_string()),
    }
}

/// Session over a mock connector and an empty memory credential store
pub fn create_test_session(
    connector: Arc<MockConnector>,
    credentials: Arc<MemoryCredentialStore>,
    initial_state: RootState,
) -> Session {
    SessionBuilder::new()
        .shared_connector(connector)
        .credentials(credentials)
        .initial_state(initial_state)
        .build()
        .unwrap()
}

type Response<T> = Mutex<Option<Result<T, Error>>>;

/// Mock BurgerConnector with one configurable response per endpoint
#[derive(Debug, Default)]
pub struct MockConnector {
    pub ingredients_response: Response<Vec<Ingredient>>,
    pub post_order_response: Response<Order>,
    pub user_orders_response: Response<Vec<Order>>,
    pub order_by_number_response: Response<Order>,
    pub feed_response: Response<OrdersData>,
    pub user_response: Response<User>,
    pub patch_user_response: Response<User>,
    pub register_response: Response<AuthResponse>,
    pub login_response: Response<AuthResponse>,
    pub logout_response: Response<()>,
    pub forgot_password_response: Response<()>,
    pub reset_password_response: Response<()>,
    /// Every call, in order, with its argument when it has one
    pub calls: Mutex<Vec<String>>,
}

fn take<T>(response: &Response<T>, name: &str) -> Result<T, Error> {
    response
        .lock()
        .unwrap()
        .take()
        .unwrap_or_else(|| panic!("MockConnector::{name} called without configured response"))
}

impl MockConnector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set<T>(response: &Response<T>, value: Result<T, Error>) {
        *response.lock().unwrap() = Some(value);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: impl Into<String>) {
        self.calls.lock().unwrap().push(call.into());
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
impl BurgerConnector for MockConnector {
    async fn get_ingredients(&self) -> Result<Vec<Ingredient>, Error> {
        self.record("get_ingredients");
        take(&self.ingredients_response, "get_ingredients")
    }

    async fn post_order(&self, ingredients: Vec<String>) -> Result<Order, Error> {
        self.record(format!("post_order {}", ingredients.join(",")));
        take(&self.post_order_response, "post_order")
    }

    async fn get_user_orders(&self) -> Result<Vec<Order>, Error> {
        self.record("get_user_orders");
        take(&self.user_orders_response, "get_user_orders")
    }

    async fn get_order_by_number(&self, number: u64) -> Result<Order, Error> {
        self.record(format!("get_order_by_number {number}"));
        take(&self.order_by_number_response, "get_order_by_number")
    }

    async fn get_feed(&self) -> Result<OrdersData, Error> {
        self.record("get_feed");
        take(&self.feed_response, "get_feed")
    }

    async fn get_user(&self) -> Result<User, Error> {
        self.record("get_user");
        take(&self.user_response, "get_user")
    }

    async fn patch_user(&self, _patch: UserPatch) -> Result<User, Error> {
        self.record("patch_user");
        take(&self.patch_user_response, "patch_user")
    }

    async fn register(&self, data: RegisterData) -> Result<AuthResponse, Error> {
        self.record(format!("register {}", data.email));
        take(&self.register_response, "register")
    }

    async fn login(&self, data: LoginData) -> Result<AuthResponse, Error> {
        self.record(format!("login {}", data.email));
        take(&self.login_response, "login")
    }

    async fn logout(&self, refresh_token: String) -> Result<(), Error> {
        self.record(format!("logout {refresh_token}"));
        take(&self.logout_response, "logout")
    }

    async fn refresh_token(&self, _refresh_token: String) -> Result<TokenResponse, Error> {
        unimplemented!()
    }

    async fn forgot_password(&self, data: ForgotPasswordData) -> Result<(), Error> {
        self.record(format!("forgot_password {}", data.email));
        take(&self.forgot_password_response, "forgot_password")
    }

    async fn reset_password(&self, _data: ResetPasswordData) -> Result<(), Error> {
        self.record("reset_password");
        take(&self.reset_password_response, "reset_password")
    }
}

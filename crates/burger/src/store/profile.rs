//! Authenticated user and the auth operations around it
//!
//! All seven auth operations share one `loading`/`error` pair. Fetch,
//! register, login and update store the returned user, logout drops it, and
//! the password reset pair leaves it alone.

use burger_common::User;

use super::lifecycle::{Lifecycle, RequestStatus};

const FETCH_FAILED: &str = "Failed to load profile";
const REGISTER_FAILED: &str = "Registration failed";
const LOGIN_FAILED: &str = "Login failed";
const LOGOUT_FAILED: &str = "Logout failed";
const UPDATE_FAILED: &str = "Update profile failed";
const FORGOT_PASSWORD_FAILED: &str = "Forgot password failed";
const RESET_PASSWORD_FAILED: &str = "Reset password failed";

/// Profile action
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileAction {
    /// Load the current user
    Fetch(Lifecycle<User>),
    /// Create an account
    Register(Lifecycle<User>),
    /// Log in
    Login(Lifecycle<User>),
    /// Log out
    Logout(Lifecycle<()>),
    /// Update name, email or password
    Update(Lifecycle<User>),
    /// Request a password reset email
    ForgotPassword(Lifecycle<()>),
    /// Set a new password with the emailed code
    ResetPassword(Lifecycle<()>),
    /// Reset user, error and loading together
    Clear,
    /// Reset the error only
    ClearError,
}

/// Profile state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileState {
    /// Authenticated user
    pub user: Option<User>,
    /// Status shared by every auth operation
    pub status: RequestStatus,
}

impl ProfileState {
    /// An auth operation is in flight
    pub fn loading(&self) -> bool {
        self.status.loading
    }

    /// Last auth error
    pub fn error(&self) -> Option<&str> {
        self.status.error.as_deref()
    }

    /// Whether a user is loaded
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    fn set_user(&mut self, phase: Lifecycle<User>, default_error: &str) {
        if let Some(user) = self.status.apply(phase, default_error) {
            self.user = Some(user);
        }
    }

    /// Apply an action
    pub fn reduce(mut self, action: ProfileAction) -> Self {
        match action {
            ProfileAction::Fetch(phase) => self.set_user(phase, FETCH_FAILED),
            ProfileAction::Register(phase) => self.set_user(phase, REGISTER_FAILED),
            ProfileAction::Login(phase) => self.set_user(phase, LOGIN_FAILED),
            ProfileAction::Update(phase) => self.set_user(phase, UPDATE_FAILED),
            ProfileAction::Logout(phase) => {
                if self.status.apply(phase, LOGOUT_FAILED).is_some() {
                    self.user = None;
                }
            }
            ProfileAction::ForgotPassword(phase) => {
                self.status.apply(phase, FORGOT_PASSWORD_FAILED);
            }
            ProfileAction::ResetPassword(phase) => {
                self.status.apply(phase, RESET_PASSWORD_FAILED);
            }
            ProfileAction::Clear => {
                self.user = None;
                self.status.reset();
            }
            ProfileAction::ClearError => self.status.clear_error(),
        }
        self
    }
}

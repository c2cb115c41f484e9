//! # Authenticate Service
//!
//! Checks an email/password pair and returns the matching user.

use super::auth_error;
use lib_auth::verify_password;
use lib_core::model::User;
use lib_core::{AppError, Result, UserRepository};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

#[derive(Debug, Clone)]
pub struct AuthenticateInput {
    pub email: String,
    pub password: String,
}

pub struct AuthenticateService {
    users: Arc<dyn UserRepository>,
}

impl AuthenticateService {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// Unknown email and wrong password both fail with
    /// [`AppError::InvalidCredentials`].
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn execute(&self, input: AuthenticateInput) -> Result<User> {
        let Some(user) = self.users.find_by_email(&input.email).await? else {
            warn!("[AUTH] Unknown email");
            return Err(AppError::InvalidCredentials);
        };

        let matches = verify_password(&input.password, &user.password_hash).map_err(auth_error)?;
        if !matches {
            warn!("[AUTH] Wrong password for user {}", user.id);
            return Err(AppError::InvalidCredentials);
        }

        debug!("[AUTH] User {} authenticated", user.id);

        Ok(user)
    }
}

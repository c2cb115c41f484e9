//! # Register Service
//!
//! Creates a member account from a name, email and plaintext password.

use super::auth_error;
use lib_auth::hash_password;
use lib_core::model::{User, UserForCreate};
use lib_core::{AppError, Result, UserRepository};
use std::sync::Arc;
use tracing::{info, instrument, warn};

#[derive(Debug, Clone)]
pub struct RegisterInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

pub struct RegisterService {
    users: Arc<dyn UserRepository>,
}

impl RegisterService {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// Fails with [`AppError::UserAlreadyExists`] if the email is taken.
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn execute(&self, input: RegisterInput) -> Result<User> {
        if self.users.find_by_email(&input.email).await?.is_some() {
            warn!("[REGISTER] Email already registered: {}", input.email);
            return Err(AppError::UserAlreadyExists);
        }

        let password_hash = hash_password(&input.password).map_err(auth_error)?;

        let user = self
            .users
            .create(UserForCreate::member(input.name, input.email, password_hash))
            .await
            .map_err(|e| match e {
                // Lost a race against a concurrent registration.
                AppError::Conflict(_) => AppError::UserAlreadyExists,
                other => other,
            })?;

        info!("[REGISTER] User created: {}", user.id);

        Ok(user)
    }
}

use lib_core::model::User;
use lib_core::{AppError, Result, UserRepository};
use std::sync::Arc;
use tracing::instrument;

pub struct GetUserProfileService {
    users: Arc<dyn UserRepository>,
}

impl GetUserProfileService {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, user_id: &str) -> Result<User> {
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or(AppError::ResourceNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_utils::seed_user;
    use lib_core::InMemoryUserRepository;

    #[tokio::test]
    async fn test_get_user_profile() {
        let users = Arc::new(InMemoryUserRepository::new());
        let id = seed_user(&users, "hash").await;
        let service = GetUserProfileService::new(users);

        let user = service.execute(&id).await.unwrap();
        assert_eq!(user.name, "John Doe");

        let missing = service.execute("non-existing-id").await;
        assert_eq!(missing.unwrap_err(), AppError::ResourceNotFound);
    }
}

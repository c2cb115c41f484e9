//! # Services Layer
//!
//! One service per use case. Each holds the repositories (and clock) it needs
//! and exposes a single `execute` operation:
//!
//! ```text
//! Handlers (HTTP) → make_*_service(&AppState) → Service::execute → Repositories
//! ```
//!
//! Services enforce the business rules and never swallow errors. Repository
//! failures propagate unchanged; the only translation is a storage
//! [`AppError::Conflict`] becoming the matching domain error at create call sites.
//!
//! ## Testing
//!
//! Services are tested against the in-memory repositories with a
//! [`FixedClock`](lib_core::FixedClock):
//!
//! ```rust,ignore
//! let gyms = Arc::new(InMemoryGymRepository::new());
//! let service = SearchGymsService::new(gyms);
//! let found = service.execute(SearchGymsInput { query: "JavaScript".into(), page: 1 }).await?;
//! ```

// region: --- Modules
pub mod authenticate;
pub mod check_in;
pub mod create_gym;
pub mod factories;
pub mod fetch_nearby_gyms;
pub mod fetch_user_check_ins_history;
pub mod get_user_metrics;
pub mod get_user_profile;
pub mod register;
pub mod search_gyms;
pub mod validate_check_in;
// endregion: --- Modules

// region: --- Re-exports
pub use authenticate::{AuthenticateInput, AuthenticateService};
pub use check_in::{CheckInInput, CheckInService};
pub use create_gym::CreateGymService;
pub use factories::*;
pub use fetch_nearby_gyms::FetchNearbyGymsService;
pub use fetch_user_check_ins_history::{FetchUserCheckInsHistoryInput, FetchUserCheckInsHistoryService};
pub use get_user_metrics::GetUserMetricsService;
pub use get_user_profile::GetUserProfileService;
pub use register::{RegisterInput, RegisterService};
pub use search_gyms::{SearchGymsInput, SearchGymsService};
pub use validate_check_in::{ValidateCheckInService, MAX_VALIDATION_MINUTES};
// endregion: --- Re-exports

use lib_core::AppError;

/// Map a password/token failure onto the application error type.
pub(crate) fn auth_error(err: lib_auth::Error) -> AppError {
    match err {
        lib_auth::Error::PasswordTooShort(min) => {
            AppError::Validation(format!("password must have at least {} characters", min))
        }
        other => AppError::Internal(other.to_string()),
    }
}

#[cfg(test)]
pub(crate) mod test_utils {
    use chrono::{DateTime, TimeZone, Utc};
    use lib_core::model::{GymForCreate, UserForCreate};
    use lib_core::{GymRepository, InMemoryGymRepository, InMemoryUserRepository, UserRepository};

    /// 2024-01-20 13:40 UTC.
    pub fn base_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 20, 13, 40, 0).unwrap()
    }

    pub fn gym_at(title: &str, latitude: f64, longitude: f64) -> GymForCreate {
        GymForCreate {
            title: title.to_string(),
            description: None,
            phone: None,
            latitude,
            longitude,
        }
    }

    pub async fn seed_gym(repo: &InMemoryGymRepository, latitude: f64, longitude: f64) -> String {
        repo.create(gym_at("JavaScript Gym", latitude, longitude))
            .await
            .unwrap()
            .id
    }

    pub async fn seed_user(repo: &InMemoryUserRepository, password_hash: &str) -> String {
        repo.create(UserForCreate::member(
            "John Doe".to_string(),
            "johndoe@example.com".to_string(),
            password_hash.to_string(),
        ))
        .await
        .unwrap()
        .id
    }
}

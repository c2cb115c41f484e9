//! # Service Factories
//!
//! Build each service from the repositories wired into [`AppState`] at startup.
//! Handlers go through these and never construct repositories themselves.

use super::*;
use crate::server::AppState;

pub fn make_register_service(state: &AppState) -> RegisterService {
    RegisterService::new(state.users.clone())
}

pub fn make_authenticate_service(state: &AppState) -> AuthenticateService {
    AuthenticateService::new(state.users.clone())
}

pub fn make_get_user_profile_service(state: &AppState) -> GetUserProfileService {
    GetUserProfileService::new(state.users.clone())
}

pub fn make_create_gym_service(state: &AppState) -> CreateGymService {
    CreateGymService::new(state.gyms.clone())
}

pub fn make_fetch_nearby_gyms_service(state: &AppState) -> FetchNearbyGymsService {
    FetchNearbyGymsService::new(state.gyms.clone())
}

pub fn make_search_gyms_service(state: &AppState) -> SearchGymsService {
    SearchGymsService::new(state.gyms.clone())
}

pub fn make_check_in_service(state: &AppState) -> CheckInService {
    CheckInService::new(
        state.check_ins.clone(),
        state.gyms.clone(),
        state.clock.clone(),
        state.config.check_in_offset(),
    )
}

pub fn make_validate_check_in_service(state: &AppState) -> ValidateCheckInService {
    ValidateCheckInService::new(state.check_ins.clone(), state.clock.clone())
}

pub fn make_fetch_user_check_ins_history_service(
    state: &AppState,
) -> FetchUserCheckInsHistoryService {
    FetchUserCheckInsHistoryService::new(state.check_ins.clone())
}

pub fn make_get_user_metrics_service(state: &AppState) -> GetUserMetricsService {
    GetUserMetricsService::new(state.check_ins.clone())
}

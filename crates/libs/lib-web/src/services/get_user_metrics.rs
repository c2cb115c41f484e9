use lib_core::{CheckInRepository, Result};
use std::sync::Arc;
use tracing::instrument;

/// Total number of check-ins of a user.
pub struct GetUserMetricsService {
    check_ins: Arc<dyn CheckInRepository>,
}

impl GetUserMetricsService {
    pub fn new(check_ins: Arc<dyn CheckInRepository>) -> Self {
        Self { check_ins }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, user_id: &str) -> Result<u64> {
        self.check_ins.count_by_user_id(user_id).await
    }
}

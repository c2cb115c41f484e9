use lib_core::model::CheckIn;
use lib_core::{CheckInRepository, Result};
use std::sync::Arc;
use tracing::instrument;

#[derive(Debug, Clone)]
pub struct FetchUserCheckInsHistoryInput {
    pub user_id: String,
    /// 1-indexed.
    pub page: u32,
}

pub struct FetchUserCheckInsHistoryService {
    check_ins: Arc<dyn CheckInRepository>,
}

impl FetchUserCheckInsHistoryService {
    pub fn new(check_ins: Arc<dyn CheckInRepository>) -> Self {
        Self { check_ins }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, input: FetchUserCheckInsHistoryInput) -> Result<Vec<CheckIn>> {
        self.check_ins
            .find_many_by_user_id(&input.user_id, input.page)
            .await
    }
}

//! # Validate Check-in Service
//!
//! Marks a check-in as validated. Validation is one-way and only allowed
//! within [`MAX_VALIDATION_MINUTES`] of the check-in's creation.

use lib_core::model::CheckIn;
use lib_core::{AppError, CheckInRepository, Clock, Result};
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Whole minutes after creation during which a check-in can be validated.
pub const MAX_VALIDATION_MINUTES: i64 = 20;

pub struct ValidateCheckInService {
    check_ins: Arc<dyn CheckInRepository>,
    clock: Arc<dyn Clock>,
}

impl ValidateCheckInService {
    pub fn new(check_ins: Arc<dyn CheckInRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { check_ins, clock }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, check_in_id: &str) -> Result<CheckIn> {
        let mut check_in = self
            .check_ins
            .find_by_id(check_in_id)
            .await?
            .ok_or(AppError::ResourceNotFound)?;

        if check_in.is_validated() {
            warn!("[VALIDATE] Check-in {} already validated", check_in.id);
            return Err(AppError::CheckInAlreadyValidated);
        }

        let now = self.clock.now();
        let elapsed_minutes = (now - check_in.created_at).num_minutes();

        if elapsed_minutes > MAX_VALIDATION_MINUTES {
            warn!("[VALIDATE] Check-in {} is {} minutes old", check_in.id, elapsed_minutes);
            return Err(AppError::LateCheckInValidate);
        }

        check_in.validated_at = Some(now);
        let check_in = self.check_ins.save(check_in).await?;

        info!("[VALIDATE] Check-in validated: {}", check_in.id);

        Ok(check_in)
    }
}

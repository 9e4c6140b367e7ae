use crate::domain::models::booking::{generate_reference, Booking, NewBookingParams};
use crate::domain::models::slot::SlotCategory;
use crate::domain::ports::BookingRepository;
use crate::domain::services::fees;
use crate::error::AppError;
use chrono::{Timelike, Utc};
use chrono_tz::Tz;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{info, warn};

const MAX_REFERENCE_ATTEMPTS: usize = 8;

pub struct BookingService {
    booking_repo: Arc<dyn BookingRepository>,
    timezone: Tz,
}

impl BookingService {
    pub fn new(booking_repo: Arc<dyn BookingRepository>, timezone: Tz) -> Self {
        Self { booking_repo, timezone }
    }

    /// Books `slot_names` of `category` for `user_id`.
    ///
    /// Validation failures reject the whole request before any state is
    /// touched; the mark-and-persist step runs inside a single repository
    /// transaction, so a lost race surfaces as `Conflict` with no partial
    /// mutation.
    pub async fn book(
        &self,
        user_id: &str,
        category: SlotCategory,
        slot_names: &[String],
    ) -> Result<Booking, AppError> {
        if slot_names.is_empty() {
            return Err(AppError::Validation("No slots provided".into()));
        }

        let mut seen = HashSet::new();
        for name in slot_names {
            if !category.owns_slot(name) {
                return Err(AppError::Validation(format!(
                    "Invalid slot '{name}' for category '{category}'"
                )));
            }
            if !seen.insert(name.as_str()) {
                return Err(AppError::Validation(format!("Duplicate slot '{name}' in request")));
            }
        }

        let local_hour = Utc::now().with_timezone(&self.timezone).hour();
        let fees = fees::compute(category, slot_names.len(), local_hour);

        let reference = self.unique_reference().await?;

        let booking = Booking::new(NewBookingParams {
            reference,
            user_id: user_id.to_string(),
            slot_type: category,
            slot_names: slot_names.to_vec(),
            fees,
        });

        let created = self.booking_repo.create(&booking).await?;

        info!(
            reference = %created.reference,
            category = %category,
            slots = slot_names.len(),
            grand_total = created.grand_total,
            "booking confirmed"
        );

        Ok(created)
    }

    async fn unique_reference(&self) -> Result<String, AppError> {
        for _ in 0..MAX_REFERENCE_ATTEMPTS {
            let reference = generate_reference();
            if !self.booking_repo.reference_exists(&reference).await? {
                return Ok(reference);
            }
            warn!("booking reference collision, regenerating");
        }
        Err(AppError::Internal)
    }
}

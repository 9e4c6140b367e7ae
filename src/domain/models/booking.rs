use crate::domain::models::slot::SlotCategory;
use crate::domain::services::fees::FeeBreakdown;
use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Booking {
    pub id: String,
    pub reference: String,
    #[serde(skip_serializing)]
    pub user_id: String,
    pub slot_type: SlotCategory,
    pub slot_names: Json<Vec<String>>,
    pub base_amount: i64,
    pub platform_fee: i64,
    pub night_surcharge: i64,
    pub grand_total: i64,
    pub created_at: DateTime<Utc>,
}

pub struct NewBookingParams {
    pub reference: String,
    pub user_id: String,
    pub slot_type: SlotCategory,
    pub slot_names: Vec<String>,
    pub fees: FeeBreakdown,
}

impl Booking {
    pub fn new(params: NewBookingParams) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            reference: params.reference,
            user_id: params.user_id,
            slot_type: params.slot_type,
            slot_names: Json(params.slot_names),
            base_amount: params.fees.base_amount,
            platform_fee: params.fees.platform_fee,
            night_surcharge: params.fees.night_surcharge,
            grand_total: params.fees.grand_total,
            created_at: Utc::now(),
        }
    }
}

/// A fresh booking reference: 16 uppercase hex characters (64 random bits).
/// Uniqueness is verified against existing bookings before persisting.
pub fn generate_reference() -> String {
    let mut bytes = [0u8; 8];
    rand::thread_rng().fill(&mut bytes);
    hex::encode(bytes).to_uppercase()
}

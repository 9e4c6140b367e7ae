use crate::domain::models::slot::{Slot, SlotCategory};
use crate::domain::services::fees::FeeBreakdown;
use serde::Serialize;

#[derive(Serialize)]
pub struct CategoryStatus {
    pub price: i64,
    pub slots: Vec<String>,
    pub booked: Vec<String>,
}

#[derive(Serialize)]
pub struct ParkingStatusResponse {
    pub vip: CategoryStatus,
    pub executive: CategoryStatus,
    pub normal: CategoryStatus,
}

impl ParkingStatusResponse {
    pub fn from_slots(all: &[Slot]) -> Self {
        let status = |category: SlotCategory| {
            let mut slots = Vec::new();
            let mut booked = Vec::new();
            for slot in all.iter().filter(|s| s.slot_type == category) {
                slots.push(slot.slot_name.clone());
                if slot.is_booked {
                    booked.push(slot.slot_name.clone());
                }
            }
            CategoryStatus {
                price: category.base_price(),
                slots,
                booked,
            }
        };

        Self {
            vip: status(SlotCategory::Vip),
            executive: status(SlotCategory::Executive),
            normal: status(SlotCategory::Normal),
        }
    }
}

#[derive(Serialize)]
pub struct BookingResponse {
    pub success: bool,
    pub message: String,
    pub booked_slots: Vec<String>,
    pub pricing: FeeBreakdown,
    pub booking_reference: String,
}

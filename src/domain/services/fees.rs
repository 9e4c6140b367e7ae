use crate::domain::models::slot::SlotCategory;
use serde::Serialize;

/// Flat fee charged once per booking, regardless of slot count.
pub const PLATFORM_FEE: i64 = 18;

/// Flat surcharge charged once per booking made during the night window.
pub const NIGHT_SURCHARGE: i64 = 12;

/// The night window is [00:00, 05:00) local time.
pub const NIGHT_WINDOW_END_HOUR: u32 = 5;

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct FeeBreakdown {
    pub base_amount: i64,
    pub platform_fee: i64,
    pub night_surcharge: i64,
    pub total_fees: i64,
    pub grand_total: i64,
    pub is_night_time: bool,
}

pub fn is_night_hour(local_hour: u32) -> bool {
    local_hour < NIGHT_WINDOW_END_HOUR
}

/// Itemized fees for a raw base amount at the given local hour.
pub fn breakdown(base_amount: i64, local_hour: u32) -> FeeBreakdown {
    let is_night_time = is_night_hour(local_hour);
    let night_surcharge = if is_night_time { NIGHT_SURCHARGE } else { 0 };

    FeeBreakdown {
        base_amount,
        platform_fee: PLATFORM_FEE,
        night_surcharge,
        total_fees: PLATFORM_FEE + night_surcharge,
        grand_total: base_amount + PLATFORM_FEE + night_surcharge,
        is_night_time,
    }
}

/// Itemized fees for booking `slot_count` slots of `category`.
pub fn compute(category: SlotCategory, slot_count: usize, local_hour: u32) -> FeeBreakdown {
    breakdown(category.base_price() * slot_count as i64, local_hour)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn daytime_vip_pair_totals_1018() {
        let fees = compute(SlotCategory::Vip, 2, 14);
        assert_eq!(fees.base_amount, 1000);
        assert_eq!(fees.platform_fee, 18);
        assert_eq!(fees.night_surcharge, 0);
        assert_eq!(fees.grand_total, 1018);
        assert!(!fees.is_night_time);
    }

    #[test]
    fn night_booking_adds_surcharge_once() {
        let fees = compute(SlotCategory::Normal, 3, 2);
        assert_eq!(fees.base_amount, 960);
        assert_eq!(fees.night_surcharge, 12);
        assert_eq!(fees.grand_total, 960 + 18 + 12);
        assert!(fees.is_night_time);
    }

    #[test]
    fn night_window_boundaries() {
        // 04:59 is inside the window, 05:00 is not.
        assert!(is_night_hour(4));
        assert!(!is_night_hour(5));
        assert!(is_night_hour(0));
        assert!(!is_night_hour(23));

        assert_eq!(breakdown(500, 4).night_surcharge, NIGHT_SURCHARGE);
        assert_eq!(breakdown(500, 5).night_surcharge, 0);
    }

    #[test]
    fn grand_total_is_sum_of_parts() {
        for hour in 0..24 {
            for count in 1..=5 {
                for category in SlotCategory::ALL {
                    let fees = compute(category, count, hour);
                    assert_eq!(
                        fees.grand_total,
                        fees.base_amount + fees.platform_fee + fees.night_surcharge
                    );
                    assert_eq!(fees.total_fees, fees.platform_fee + fees.night_surcharge);
                    assert_eq!(fees.base_amount, category.base_price() * count as i64);
                }
            }
        }
    }

    #[test]
    fn platform_fee_is_per_booking_not_per_slot() {
        let one = compute(SlotCategory::Executive, 1, 12);
        let five = compute(SlotCategory::Executive, 5, 12);
        assert_eq!(one.platform_fee, five.platform_fee);
        assert_eq!(five.base_amount, one.base_amount * 5);
    }
}

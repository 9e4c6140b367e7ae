use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;

/// Pricing tier of a parking slot. Prices, inventory sizes and the
/// slot-name scheme are fixed configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum SlotCategory {
    Vip,
    Executive,
    Normal,
}

impl SlotCategory {
    pub const ALL: [SlotCategory; 3] = [
        SlotCategory::Vip,
        SlotCategory::Executive,
        SlotCategory::Normal,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SlotCategory::Vip => "vip",
            SlotCategory::Executive => "executive",
            SlotCategory::Normal => "normal",
        }
    }

    /// Base price per slot, in whole currency units.
    pub fn base_price(self) -> i64 {
        match self {
            SlotCategory::Vip => 500,
            SlotCategory::Executive => 350,
            SlotCategory::Normal => 320,
        }
    }

    pub fn total_slots(self) -> usize {
        match self {
            SlotCategory::Vip => 10,
            SlotCategory::Executive => 100,
            SlotCategory::Normal => 11,
        }
    }

    /// All slot names of this category, in display order.
    /// VIP: V1..V10. Executive: a 5x20 grid named E{row:02}{col:02}.
    /// Normal: N1..N11.
    pub fn slot_names(self) -> Vec<String> {
        match self {
            SlotCategory::Vip => (1..=10).map(|i| format!("V{i}")).collect(),
            SlotCategory::Executive => (1..=5)
                .flat_map(|row| (1..=20).map(move |col| format!("E{row:02}{col:02}")))
                .collect(),
            SlotCategory::Normal => (1..=11).map(|i| format!("N{i}")).collect(),
        }
    }

    /// Whether `name` is a well-formed slot identifier of this category.
    /// The match is exact: "V01" is not a VIP slot even though "V1" is.
    pub fn owns_slot(self, name: &str) -> bool {
        match self {
            SlotCategory::Vip => parse_numbered(name, 'V', 10),
            SlotCategory::Normal => parse_numbered(name, 'N', 11),
            SlotCategory::Executive => {
                let Some(rest) = name.strip_prefix('E') else {
                    return false;
                };
                if rest.len() != 4 || !rest.chars().all(|c| c.is_ascii_digit()) {
                    return false;
                }
                let row: u32 = rest[..2].parse().unwrap_or(0);
                let col: u32 = rest[2..].parse().unwrap_or(0);
                (1..=5).contains(&row) && (1..=20).contains(&col)
            }
        }
    }
}

fn parse_numbered(name: &str, prefix: char, max: u32) -> bool {
    let Some(rest) = name.strip_prefix(prefix) else {
        return false;
    };
    match rest.parse::<u32>() {
        Ok(n) => (1..=max).contains(&n) && n.to_string() == rest,
        Err(_) => false,
    }
}

impl fmt::Display for SlotCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SlotCategory {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vip" => Ok(SlotCategory::Vip),
            "executive" => Ok(SlotCategory::Executive),
            "normal" => Ok(SlotCategory::Normal),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Slot {
    pub slot_name: String,
    pub slot_type: SlotCategory,
    pub price: i64,
    pub is_booked: bool,
}

impl Slot {
    /// The full fixed inventory, available at seeding time.
    pub fn inventory() -> Vec<Slot> {
        SlotCategory::ALL
            .into_iter()
            .flat_map(|category| {
                category.slot_names().into_iter().map(move |slot_name| Slot {
                    slot_name,
                    slot_type: category,
                    price: category.base_price(),
                    is_booked: false,
                })
            })
            .collect()
    }
}

/// Per-category occupancy, as reported by the stats endpoint.
#[derive(Debug, Serialize, FromRow, Clone)]
pub struct CategoryCounts {
    pub slot_type: SlotCategory,
    pub total: i64,
    pub booked: i64,
    pub available: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inventory_has_fixed_sizes() {
        let slots = Slot::inventory();
        assert_eq!(slots.len(), 121);
        assert_eq!(
            slots.iter().filter(|s| s.slot_type == SlotCategory::Vip).count(),
            10
        );
        assert_eq!(
            slots
                .iter()
                .filter(|s| s.slot_type == SlotCategory::Executive)
                .count(),
            100
        );
        assert_eq!(
            slots
                .iter()
                .filter(|s| s.slot_type == SlotCategory::Normal)
                .count(),
            11
        );
    }

    #[test]
    fn executive_grid_names() {
        let names = SlotCategory::Executive.slot_names();
        assert_eq!(names.first().unwrap(), "E0101");
        assert_eq!(names.last().unwrap(), "E0520");
        assert!(names.contains(&"E0320".to_string()));
    }

    #[test]
    fn owns_slot_accepts_inventory_names() {
        for category in SlotCategory::ALL {
            for name in category.slot_names() {
                assert!(category.owns_slot(&name), "{category} should own {name}");
            }
        }
    }

    #[test]
    fn owns_slot_rejects_malformed_names() {
        assert!(!SlotCategory::Vip.owns_slot("V0"));
        assert!(!SlotCategory::Vip.owns_slot("V11"));
        assert!(!SlotCategory::Vip.owns_slot("V01"));
        assert!(!SlotCategory::Vip.owns_slot("E0101"));
        assert!(!SlotCategory::Executive.owns_slot("E0021"));
        assert!(!SlotCategory::Executive.owns_slot("E0621"));
        assert!(!SlotCategory::Executive.owns_slot("E101"));
        assert!(!SlotCategory::Normal.owns_slot("N12"));
        assert!(!SlotCategory::Normal.owns_slot(""));
    }

    #[test]
    fn category_parses_from_lowercase() {
        assert_eq!("vip".parse(), Ok(SlotCategory::Vip));
        assert_eq!("executive".parse(), Ok(SlotCategory::Executive));
        assert!("VIP".parse::<SlotCategory>().is_err());
        assert!("premium".parse::<SlotCategory>().is_err());
    }
}

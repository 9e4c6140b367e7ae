use serde::Deserialize;

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub phone: Option<String>,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct BookSlotsRequest {
    #[serde(rename = "type")]
    pub slot_type: String,
    #[serde(default)]
    pub slots: Vec<String>,
}

/// Either a raw `base_amount` or a `type` + `slot_count` pair.
#[derive(Deserialize)]
pub struct CalculateFeesRequest {
    pub base_amount: Option<i64>,
    #[serde(rename = "type")]
    pub slot_type: Option<String>,
    #[serde(alias = "slotCount")]
    pub slot_count: Option<u32>,
}

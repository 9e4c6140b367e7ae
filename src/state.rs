use crate::config::Config;
use crate::domain::ports::{BookingRepository, SlotRepository, UserRepository};
use crate::domain::services::auth_service::AuthService;
use crate::domain::services::booking_service::BookingService;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub user_repo: Arc<dyn UserRepository>,
    pub slot_repo: Arc<dyn SlotRepository>,
    pub booking_repo: Arc<dyn BookingRepository>,
    pub auth_service: Arc<AuthService>,
    pub booking_service: Arc<BookingService>,
}

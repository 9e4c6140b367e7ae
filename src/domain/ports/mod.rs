use crate::domain::models::{
    booking::Booking,
    slot::{CategoryCounts, Slot},
    user::User,
};
use crate::error::AppError;
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: &User) -> Result<User, AppError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError>;
    async fn count(&self) -> Result<i64, AppError>;
}

#[async_trait]
pub trait SlotRepository: Send + Sync {
    async fn list_all(&self) -> Result<Vec<Slot>, AppError>;
    async fn counts(&self) -> Result<Vec<CategoryCounts>, AppError>;
    async fn count(&self) -> Result<i64, AppError>;
    async fn seed(&self, slots: &[Slot]) -> Result<(), AppError>;
}

#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Marks the booking's slots as taken and persists the record in one
    /// transaction. Fails with `Conflict` (and rolls back) if any slot is
    /// already booked or unknown to the category.
    async fn create(&self, booking: &Booking) -> Result<Booking, AppError>;
    async fn find_by_reference(&self, reference: &str) -> Result<Option<Booking>, AppError>;
    async fn reference_exists(&self, reference: &str) -> Result<bool, AppError>;
    async fn list_by_user(&self, user_id: &str) -> Result<Vec<Booking>, AppError>;
    /// Clears every booking and frees every slot. Idempotent.
    async fn reset_all(&self) -> Result<(), AppError>;
}

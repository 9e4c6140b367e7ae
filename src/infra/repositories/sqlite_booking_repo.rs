use crate::domain::{models::booking::Booking, ports::BookingRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteBookingRepo {
    pool: SqlitePool,
}

impl SqliteBookingRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingRepository for SqliteBookingRepo {
    async fn create(&self, booking: &Booking) -> Result<Booking, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        // Conditional update is the critical section: a slot that is gone
        // (booked by a concurrent request, or unknown) affects zero rows,
        // which aborts the transaction before the booking row is written.
        for name in booking.slot_names.iter() {
            let result = sqlx::query(
                "UPDATE slots SET is_booked = 1
                 WHERE slot_name = ? AND slot_type = ? AND is_booked = 0",
            )
                .bind(name)
                .bind(booking.slot_type)
                .execute(&mut *tx)
                .await
                .map_err(AppError::Database)?;

            if result.rows_affected() == 0 {
                return Err(AppError::Conflict(format!("Slot already booked or unknown: {name}")));
            }
        }

        let created = sqlx::query_as::<_, Booking>(
            "INSERT INTO bookings (id, reference, user_id, slot_type, slot_names,
                                   base_amount, platform_fee, night_surcharge, grand_total, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING *",
        )
            .bind(&booking.id)
            .bind(&booking.reference)
            .bind(&booking.user_id)
            .bind(booking.slot_type)
            .bind(&booking.slot_names)
            .bind(booking.base_amount)
            .bind(booking.platform_fee)
            .bind(booking.night_surcharge)
            .bind(booking.grand_total)
            .bind(booking.created_at)
            .fetch_one(&mut *tx)
            .await
            .map_err(AppError::Database)?;

        tx.commit().await.map_err(AppError::Database)?;
        Ok(created)
    }

    async fn find_by_reference(&self, reference: &str) -> Result<Option<Booking>, AppError> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE reference = ?")
            .bind(reference)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn reference_exists(&self, reference: &str) -> Result<bool, AppError> {
        let row = sqlx::query("SELECT 1 FROM bookings WHERE reference = ?")
            .bind(reference)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(row.is_some())
    }

    async fn list_by_user(&self, user_id: &str) -> Result<Vec<Booking>, AppError> {
        sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings WHERE user_id = ? ORDER BY created_at DESC",
        )
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn reset_all(&self) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;
        sqlx::query("UPDATE slots SET is_booked = 0")
            .execute(&mut *tx)
            .await
            .map_err(AppError::Database)?;
        sqlx::query("DELETE FROM bookings")
            .execute(&mut *tx)
            .await
            .map_err(AppError::Database)?;
        tx.commit().await.map_err(AppError::Database)?;
        Ok(())
    }
}

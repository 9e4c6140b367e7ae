use crate::domain::{
    models::slot::{CategoryCounts, Slot},
    ports::SlotRepository,
};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::{Row, SqlitePool};

pub struct SqliteSlotRepo {
    pool: SqlitePool,
}

impl SqliteSlotRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SlotRepository for SqliteSlotRepo {
    async fn list_all(&self) -> Result<Vec<Slot>, AppError> {
        sqlx::query_as::<_, Slot>("SELECT * FROM slots ORDER BY rowid")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn counts(&self) -> Result<Vec<CategoryCounts>, AppError> {
        sqlx::query_as::<_, CategoryCounts>(
            "SELECT
                slot_type,
                COUNT(*) as total,
                SUM(CASE WHEN is_booked = 1 THEN 1 ELSE 0 END) as booked,
                SUM(CASE WHEN is_booked = 0 THEN 1 ELSE 0 END) as available
             FROM slots
             GROUP BY slot_type",
        )
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let row = sqlx::query("SELECT COUNT(*) as count FROM slots")
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(row.get::<i64, _>("count"))
    }

    async fn seed(&self, slots: &[Slot]) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;
        for slot in slots {
            sqlx::query("INSERT INTO slots (slot_name, slot_type, price, is_booked) VALUES (?, ?, ?, ?)")
                .bind(&slot.slot_name)
                .bind(slot.slot_type)
                .bind(slot.price)
                .bind(slot.is_booked)
                .execute(&mut *tx)
                .await
                .map_err(AppError::Database)?;
        }
        tx.commit().await.map_err(AppError::Database)?;
        Ok(())
    }
}

use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::{ConnectOptions, SqlitePool};
use tracing::info;
use tracing::log::LevelFilter;

use crate::config::Config;
use crate::domain::models::slot::Slot;
use crate::domain::models::user::{User, ROLE_ADMIN};
use crate::domain::ports::{SlotRepository, UserRepository};
use crate::domain::services::auth_service::AuthService;
use crate::domain::services::booking_service::BookingService;
use crate::infra::repositories::{
    sqlite_booking_repo::SqliteBookingRepo, sqlite_slot_repo::SqliteSlotRepo,
    sqlite_user_repo::SqliteUserRepo,
};
use crate::state::AppState;

pub async fn bootstrap_state(config: &Config) -> AppState {
    info!("Initializing SQLite connection with WAL Mode...");

    let opts = SqliteConnectOptions::from_str(&config.database_url)
        .expect("Invalid SQLite connection string")
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5))
        .log_statements(LevelFilter::Debug)
        .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(opts)
        .await
        .expect("Failed to connect to SQLite");

    run_sqlite_migrations(&pool).await;

    build_state(config, pool).await
}

/// Wires repositories and services onto an already-migrated pool and seeds
/// the demo data. Shared with the integration-test harness.
pub async fn build_state(config: &Config, pool: SqlitePool) -> AppState {
    let user_repo = Arc::new(SqliteUserRepo::new(pool.clone()));
    let slot_repo = Arc::new(SqliteSlotRepo::new(pool.clone()));
    let booking_repo = Arc::new(SqliteBookingRepo::new(pool));

    let auth_service = Arc::new(AuthService::new(config));
    let booking_service = Arc::new(BookingService::new(booking_repo.clone(), config.tz()));

    if slot_repo.count().await.expect("Failed to query slots") == 0 {
        let inventory = Slot::inventory();
        slot_repo.seed(&inventory).await.expect("Failed to seed slot inventory");
        info!("Seeded {} parking slots", inventory.len());
    }

    if user_repo.count().await.expect("Failed to query users") == 0 {
        let password_hash = auth_service
            .hash_password(&config.admin_password)
            .expect("Failed to hash admin password");
        let mut admin = User::new(
            config.admin_email.clone(),
            password_hash,
            "System Administrator".to_string(),
            None,
        );
        admin.role = ROLE_ADMIN.to_string();
        user_repo.create(&admin).await.expect("Failed to seed admin user");
        info!("Default admin user created: {}", config.admin_email);
    }

    AppState {
        config: config.clone(),
        user_repo,
        slot_repo,
        booking_repo,
        auth_service,
        booking_service,
    }
}

async fn run_sqlite_migrations(pool: &SqlitePool) {
    sqlx::migrate!("./migrations/sqlite")
        .run(pool)
        .await
        .expect("Failed to run SQLite migrations");
}

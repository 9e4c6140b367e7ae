pub mod sqlite_booking_repo;
pub mod sqlite_slot_repo;
pub mod sqlite_user_repo;

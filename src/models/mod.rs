pub mod clock_status;
pub mod time_entry;
pub mod user;

pub mod health;
pub mod profile;
pub mod reservation;
pub mod space;
pub mod v1;

pub mod health;
pub mod questions;
pub mod verify_payment;
pub mod verify_session;

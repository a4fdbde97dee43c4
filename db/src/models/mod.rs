pub mod marathon;
pub mod registration;

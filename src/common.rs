pub mod error;
pub mod ownership;

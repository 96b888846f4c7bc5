//! API request handlers.

pub mod health;
pub mod views;

pub use health::*;
pub use views::*;

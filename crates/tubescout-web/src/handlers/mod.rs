//! Request handlers.

pub mod health;
pub mod research;

pub use health::health;
pub use research::{index, research_api, research_page};

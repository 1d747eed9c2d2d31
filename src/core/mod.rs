pub mod constants;
pub mod engine;
pub mod errors;
pub mod paths;
pub mod registry;
pub mod router;
pub mod swap;
pub mod trade;
pub mod types;
pub mod units;

pub use anyhow::{Context, Result};

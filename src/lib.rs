// Export all necessary modules
pub mod cli;
pub mod config;
pub mod context;
pub mod error;
pub mod shared;
pub mod strategy;

pub use context::Context;
pub use error::{Result, StrategyError};
pub use shared::SharedContext;
pub use strategy::{Ascending, Descending, SortStrategy, StrategyKind};

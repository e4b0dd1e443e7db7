// src/shared.rs
use crate::context::render;
use crate::error::{Result, StrategyError};
use crate::strategy::SortStrategy;
use parking_lot::RwLock;
use std::fmt::Display;
use std::sync::Arc;
use tracing::{debug, warn};

/// Thread-safe context whose strategy can be swapped while other threads
/// are sorting.
///
/// Clones share the same strategy slot. A swap happens under the write
/// lock, so a reader sees either the old or the new strategy in full.
/// Sorting runs outside the lock on a cloned handle.
pub struct SharedContext<T: Ord> {
    strategy: Arc<RwLock<Option<Arc<dyn SortStrategy<T>>>>>,
}

impl<T: Ord> Clone for SharedContext<T> {
    fn clone(&self) -> Self {
        Self {
            strategy: Arc::clone(&self.strategy),
        }
    }
}

impl<T: Ord> Default for SharedContext<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> SharedContext<T> {
    pub fn new() -> Self {
        Self {
            strategy: Arc::new(RwLock::new(None)),
        }
    }

    pub fn with_strategy(strategy: Arc<dyn SortStrategy<T>>) -> Self {
        Self {
            strategy: Arc::new(RwLock::new(Some(strategy))),
        }
    }

    /// Swap in a new strategy, returning the one it replaced
    pub fn set_strategy(&self, strategy: Arc<dyn SortStrategy<T>>) -> Option<Arc<dyn SortStrategy<T>>> {
        let name = strategy.name();
        let previous = self.strategy.write().replace(strategy);
        debug!("Shared context strategy set to {}", name);
        previous
    }

    pub fn is_configured(&self) -> bool {
        self.strategy.read().is_some()
    }

    pub fn strategy_name(&self) -> Option<&'static str> {
        self.strategy.read().as_ref().map(|s| s.name())
    }

    fn current(&self) -> Result<Arc<dyn SortStrategy<T>>> {
        self.strategy.read().clone().ok_or_else(|| {
            warn!("Shared context used with no strategy");
            StrategyError::NoStrategy
        })
    }

    /// Sort `data` with the current strategy and render it comma-terminated
    pub fn execute(&self, data: &mut [T]) -> Result<String>
    where
        T: Display,
    {
        let strategy = self.current()?;
        debug!("Running {} over {} elements", strategy.name(), data.len());
        Ok(render(strategy.transform(data)))
    }
}

// src/context.rs
use crate::error::{Result, StrategyError};
use crate::strategy::SortStrategy;
use std::fmt::Display;
use std::io::Write;
use tracing::{debug, warn};

/// Fixed sequence sorted by the business operation
pub const DEMO_DATA: [&str; 5] = ["a", "b", "c", "d", "e"];

pub const SORTING_MESSAGE: &str = "Context: Sorting data using the strategy (not sure how it'll do it)";

/// Holds at most one strategy and delegates sorting to it.
///
/// A context starts out either unconfigured (`new`) or configured
/// (`with_strategy`). `set_strategy` always leaves it configured, dropping
/// whatever strategy was held before.
pub struct Context<T: Ord> {
    strategy: Option<Box<dyn SortStrategy<T>>>,
}

impl<T: Ord> Default for Context<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> Context<T> {
    /// Create a context with no strategy
    pub fn new() -> Self {
        Self { strategy: None }
    }

    /// Create a context already holding `strategy`
    pub fn with_strategy(strategy: Box<dyn SortStrategy<T>>) -> Self {
        debug!("Context created with strategy {}", strategy.name());
        Self {
            strategy: Some(strategy),
        }
    }

    /// Replace the held strategy
    pub fn set_strategy(&mut self, strategy: Box<dyn SortStrategy<T>>) {
        match self.strategy.replace(strategy) {
            Some(previous) => debug!(
                "Replaced strategy {} with {}",
                previous.name(),
                self.strategy_name().unwrap_or_default()
            ),
            None => debug!("Strategy set to {}", self.strategy_name().unwrap_or_default()),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.strategy.is_some()
    }

    pub fn strategy_name(&self) -> Option<&'static str> {
        self.strategy.as_ref().map(|s| s.name())
    }

    fn strategy(&self) -> Result<&dyn SortStrategy<T>> {
        self.strategy.as_deref().ok_or_else(|| {
            warn!("Business logic invoked on a context with no strategy");
            StrategyError::NoStrategy
        })
    }

    /// Sort `data` with the held strategy and render it comma-terminated
    pub fn execute(&self, data: &mut [T]) -> Result<String>
    where
        T: Display,
    {
        let strategy = self.strategy()?;
        debug!("Running {} over {} elements", strategy.name(), data.len());
        Ok(render(strategy.transform(data)))
    }
}

impl Context<String> {
    /// Sort the fixed demonstration sequence and write the outcome to `out`
    pub fn do_some_business_logic<W: Write>(&self, out: &mut W) -> Result<String> {
        let strategy = self.strategy()?;
        writeln!(out, "{}", SORTING_MESSAGE)?;

        let mut data: Vec<String> = DEMO_DATA.iter().map(|s| s.to_string()).collect();
        let result = render(strategy.transform(&mut data));

        writeln!(out, "{}", result)?;
        Ok(result)
    }
}

/// Concatenate items, each followed by a comma
pub fn render<T: Display>(items: &[T]) -> String {
    items.iter().map(|item| format!("{},", item)).collect()
}

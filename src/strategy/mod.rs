// src/strategy/mod.rs
pub mod ascending;
pub mod descending;

pub use self::ascending::Ascending;
pub use self::descending::Descending;

use crate::error::StrategyError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An interchangeable ordering algorithm.
///
/// Implementations reorder `data` in place and hand back a view of the
/// reordered slice. Callers must not assume the input is left unchanged.
pub trait SortStrategy<T: Ord>: Send + Sync {
    /// Short name used in logs and listings
    fn name(&self) -> &'static str;

    /// Reorder `data` and return it
    fn transform<'a>(&self, data: &'a mut [T]) -> &'a [T];
}

/// Selector for the built-in strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum StrategyKind {
    #[default]
    Ascending,
    Descending,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 2] = [StrategyKind::Ascending, StrategyKind::Descending];

    /// Construct the strategy this selector names
    pub fn build<T: Ord>(self) -> Box<dyn SortStrategy<T>> {
        match self {
            StrategyKind::Ascending => Box::new(Ascending),
            StrategyKind::Descending => Box::new(Descending),
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            StrategyKind::Ascending => "lexicographic order, smallest first",
            StrategyKind::Descending => "lexicographic order, largest first (sort then reverse)",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrategyKind::Ascending => write!(f, "ascending"),
            StrategyKind::Descending => write!(f, "descending"),
        }
    }
}

impl FromStr for StrategyKind {
    type Err = StrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ascending" | "asc" => Ok(StrategyKind::Ascending),
            "descending" | "desc" => Ok(StrategyKind::Descending),
            other => Err(StrategyError::UnknownStrategy(other.to_string())),
        }
    }
}

impl TryFrom<String> for StrategyKind {
    type Error = StrategyError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_parses_names_and_aliases() {
        assert_eq!("ascending".parse::<StrategyKind>().unwrap(), StrategyKind::Ascending);
        assert_eq!(" DESC ".parse::<StrategyKind>().unwrap(), StrategyKind::Descending);
        assert!(matches!(
            "random".parse::<StrategyKind>(),
            Err(StrategyError::UnknownStrategy(name)) if name == "random"
        ));
    }

    #[test]
    fn try_from_string_uses_selector_parsing() {
        assert_eq!(StrategyKind::try_from("Asc".to_string()).unwrap(), StrategyKind::Ascending);
        assert!(StrategyKind::try_from("shuffle".to_string()).is_err());
    }

    #[test]
    fn kind_display_round_trips_through_parse() {
        for kind in StrategyKind::ALL {
            assert_eq!(kind.to_string().parse::<StrategyKind>().unwrap(), kind);
        }
    }

    #[test]
    fn build_returns_matching_strategy() {
        let asc = StrategyKind::Ascending.build::<i32>();
        let desc = StrategyKind::Descending.build::<i32>();
        assert_eq!(asc.name(), "ascending");
        assert_eq!(desc.name(), "descending");

        let mut data = vec![2, 3, 1];
        assert_eq!(desc.transform(&mut data), &[3, 2, 1]);
    }
}

// src/strategy/descending.rs
use super::SortStrategy;

/// Sorts largest first by sorting ascending and then reversing
#[derive(Debug, Clone, Copy, Default)]
pub struct Descending;

impl<T: Ord> SortStrategy<T> for Descending {
    fn name(&self) -> &'static str {
        "descending"
    }

    fn transform<'a>(&self, data: &'a mut [T]) -> &'a [T] {
        data.sort();
        data.reverse();
        data
    }
}

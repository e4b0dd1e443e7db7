// src/strategy/ascending.rs
use super::SortStrategy;

/// Sorts smallest first
#[derive(Debug, Clone, Copy, Default)]
pub struct Ascending;

impl<T: Ord> SortStrategy<T> for Ascending {
    fn name(&self) -> &'static str {
        "ascending"
    }

    fn transform<'a>(&self, data: &'a mut [T]) -> &'a [T] {
        data.sort();
        data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_strings_in_place() {
        let mut data: Vec<String> = ["d", "a", "e", "c", "b"].iter().map(|s| s.to_string()).collect();
        let sorted = Ascending.transform(&mut data).to_vec();

        assert_eq!(sorted, vec!["a", "b", "c", "d", "e"]);
        assert_eq!(data, sorted);
    }

    #[test]
    fn empty_input_is_untouched() {
        let mut data: Vec<u8> = Vec::new();
        assert!(Ascending.transform(&mut data).is_empty());
    }
}

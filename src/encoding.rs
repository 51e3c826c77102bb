//! One-hot encodings for categorical values.

use crate::error::{Error, Result};

/// A one-hot encoding over a fixed list of distinct category values.
///
/// Each category maps to an indicator vector with a single `1.0` at the
/// category's index. The encoding backs
/// [`CategoricalParameter`](crate::parameter::CategoricalParameter), whose
/// dimension and bounds are derived from the number of levels here.
///
/// # Examples
///
/// ```
/// use param_space::OneHotEncoding;
///
/// let encoding = OneHotEncoding::new(vec![
///     "relu".to_owned(),
///     "sigmoid".to_owned(),
///     "tanh".to_owned(),
/// ]).unwrap();
/// assert_eq!(encoding.dimension(), 3);
/// assert_eq!(encoding.encode("sigmoid"), Some(vec![0.0, 1.0, 0.0]));
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OneHotEncoding {
    categories: Vec<String>,
}

impl OneHotEncoding {
    /// Creates an encoding over the given distinct category values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyCategories`] if `categories` is empty.
    pub fn new(categories: Vec<String>) -> Result<Self> {
        if categories.is_empty() {
            return Err(Error::EmptyCategories);
        }
        Ok(Self { categories })
    }

    /// Returns the number of one-hot dimensions (one per category).
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.categories.len()
    }

    /// Returns the category values in index order.
    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Encodes `value` as an indicator vector, or `None` if `value` is not a
    /// known category.
    #[must_use]
    pub fn encode(&self, value: &str) -> Option<Vec<f64>> {
        let index = self.categories.iter().position(|c| c == value)?;
        let mut one_hot = vec![0.0; self.categories.len()];
        one_hot[index] = 1.0;
        Some(one_hot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_known_value() {
        let encoding =
            OneHotEncoding::new(vec!["a".to_owned(), "b".to_owned(), "c".to_owned()]).unwrap();
        assert_eq!(encoding.encode("a"), Some(vec![1.0, 0.0, 0.0]));
        assert_eq!(encoding.encode("c"), Some(vec![0.0, 0.0, 1.0]));
    }

    #[test]
    fn encode_unknown_value() {
        let encoding = OneHotEncoding::new(vec!["a".to_owned()]).unwrap();
        assert_eq!(encoding.encode("z"), None);
    }

    #[test]
    fn dimension_matches_levels() {
        let encoding = OneHotEncoding::new(vec!["x".to_owned(), "y".to_owned()]).unwrap();
        assert_eq!(encoding.dimension(), 2);
        assert_eq!(encoding.categories(), ["x", "y"]);
    }

    #[test]
    fn empty_categories_rejected() {
        assert!(matches!(
            OneHotEncoding::new(vec![]),
            Err(Error::EmptyCategories)
        ));
    }
}

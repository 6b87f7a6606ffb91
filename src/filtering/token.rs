//! Token-shape filtering.
use super::Filter;

/// Simple length filter.
/// Returns `false` if the provided token is less than [Length::min_size]
/// unicode codepoints.
///
/// [Length::min_size] is 2 by default, so single characters are dropped.
pub struct Length {
    min_size: usize,
}

impl Length {
    /// specify a minimum length
    pub fn with_min_size(min_size: usize) -> Self {
        Self { min_size }
    }

    /// Get a reference to the length's min size.
    pub fn min_size(&self) -> &usize {
        &self.min_size
    }
}

impl Default for Length {
    fn default() -> Self {
        Length { min_size: 2 }
    }
}

impl Filter<&str> for Length {
    fn detect(&self, token: &str) -> bool {
        token.chars().count() >= self.min_size
    }
}

/// Drops tokens made entirely of ASCII digits.
#[derive(Default)]
pub struct Numeric;

impl Filter<&str> for Numeric {
    fn detect(&self, token: &str) -> bool {
        !token.chars().all(|c| c.is_ascii_digit())
    }
}

#[cfg(test)]
mod tests {
    use super::{Filter, Length, Numeric};

    #[test]
    fn length_default() {
        let f = Length::default();
        assert_eq!(true, f.detect("of"));
        assert_eq!(false, f.detect("a"));
        assert_eq!(false, f.detect(""));
    }

    #[test]
    fn length_counts_codepoints_not_bytes() {
        let f = Length::with_min_size(3);
        assert_eq!(true, f.detect("été"));
        assert_eq!(false, f.detect("éé"));
    }

    #[test]
    fn numeric_drops_digit_runs() {
        let f = Numeric::default();
        assert_eq!(false, f.detect("2023"));
        assert_eq!(false, f.detect("7"));
        assert_eq!(true, f.detect("7th"));
        assert_eq!(true, f.detect("seven"));
    }
}

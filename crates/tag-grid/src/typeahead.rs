//! Typeahead Buffer
//!
//! Accumulates typed characters into a search string that resets after a
//! pause. Timestamps are passed in so the buffer stays clock-agnostic.

/// Pause after which the next character starts a new search
pub const TYPEAHEAD_TIMEOUT_MS: f64 = 1000.0;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TypeSelect {
    search: String,
    last_input_ms: Option<f64>,
}

impl TypeSelect {
    /// Add a character typed at `now_ms`; returns the current search.
    ///
    /// A space that would start a search is ignored so it can activate the
    /// focused control instead.
    pub fn push(&mut self, ch: char, now_ms: f64) -> Option<&str> {
        if self.is_expired(now_ms) {
            self.search.clear();
        }
        if ch == ' ' && self.search.is_empty() {
            return None;
        }
        self.search.push(ch);
        self.last_input_ms = Some(now_ms);
        Some(&self.search)
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn clear(&mut self) {
        self.search.clear();
        self.last_input_ms = None;
    }

    fn is_expired(&self, now_ms: f64) -> bool {
        self.last_input_ms
            .map_or(false, |last| now_ms - last > TYPEAHEAD_TIMEOUT_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulates_within_timeout() {
        let mut ts = TypeSelect::default();
        assert_eq!(ts.push('b', 0.0), Some("b"));
        assert_eq!(ts.push('l', 400.0), Some("bl"));
        assert_eq!(ts.push('u', 1300.0), Some("blu"));
    }

    #[test]
    fn test_resets_after_pause() {
        let mut ts = TypeSelect::default();
        ts.push('b', 0.0);
        assert_eq!(ts.push('c', 1500.0), Some("c"));
    }

    #[test]
    fn test_leading_space_ignored() {
        let mut ts = TypeSelect::default();
        assert_eq!(ts.push(' ', 0.0), None);
        ts.push('a', 10.0);
        assert_eq!(ts.push(' ', 20.0), Some("a "));
        ts.clear();
        assert_eq!(ts.search(), "");
    }
}

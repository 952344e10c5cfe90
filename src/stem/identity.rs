//! Identity stemmer implementation.

use crate::stem::Stemmer;

/// Identity stemmer that returns words unchanged.
///
/// Useful as a pipeline placeholder when stemming should be disabled
/// without changing the filter chain's shape.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityStemmer;

impl IdentityStemmer {
    /// Create a new identity stemmer.
    pub fn new() -> Self {
        IdentityStemmer
    }
}

impl Stemmer for IdentityStemmer {
    fn stem(&self, word: &str) -> String {
        word.to_string()
    }

    fn name(&self) -> &'static str {
        "identity"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_stemmer() {
        let stemmer = IdentityStemmer::new();

        assert_eq!(stemmer.stem("running"), "running");
        assert_eq!(stemmer.stem("flies"), "flies");
        assert_eq!(stemmer.stem("Mixed Case"), "Mixed Case");
    }

    #[test]
    fn test_identity_stemmer_name() {
        assert_eq!(IdentityStemmer::new().name(), "identity");
    }
}

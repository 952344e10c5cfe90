//! Stemming algorithms for reducing words to their root forms.
//!
//! The main implementation is [`PorterStemmer`], a faithful rendition of the
//! Porter suffix-stripping algorithm built from declarative rule tables. The
//! [`Stemmer`] trait is the seam for swapping algorithms; [`IdentityStemmer`]
//! is the pass-through implementation.
//!
//! Every stemmer is a pure function of its input with no shared mutable
//! state, so a single instance may be shared freely across threads.
//! [`stem_batch`] exploits this to stem word lists in parallel.

use rayon::prelude::*;

pub mod classify;
pub mod identity;
pub mod measure;
pub mod porter;
pub mod rules;

pub use identity::IdentityStemmer;
pub use porter::PorterStemmer;

/// Trait for stemming algorithms.
pub trait Stemmer: Send + Sync {
    /// Stem a word to its root form.
    fn stem(&self, word: &str) -> String;

    /// Get the name of this stemmer.
    fn name(&self) -> &'static str;
}

/// Stem a slice of words in parallel.
///
/// Stemmers are pure, so splitting the batch across a worker pool cannot
/// change the result: the output is position-aligned with `words` and
/// identical to stemming sequentially.
pub fn stem_batch<S, W>(stemmer: &S, words: &[W]) -> Vec<String>
where
    S: Stemmer + ?Sized,
    W: AsRef<str> + Sync,
{
    words
        .par_iter()
        .map(|word| stemmer.stem(word.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stem_batch_matches_sequential() {
        let stemmer = PorterStemmer::new();
        let words = vec![
            "caresses",
            "ponies",
            "cats",
            "motoring",
            "hopping",
            "falling",
            "sing",
            "feed",
        ];

        let parallel = stem_batch(&stemmer, &words);
        let sequential: Vec<String> = words.iter().map(|w| stemmer.stem(w)).collect();

        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_stem_batch_empty() {
        let stemmer = PorterStemmer::new();
        let words: Vec<&str> = Vec::new();
        assert!(stem_batch(&stemmer, &words).is_empty());
    }
}

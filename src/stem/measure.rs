//! Word-body measure: the `m` in the grammar `[C](VC)^m[V]`.

use crate::stem::classify::{is_consonant, is_vowel};

/// Count the consonant sequences between the start and end of `word`.
///
/// Treating maximal runs of consonants as `C` and of vowels as `V`, every
/// word matches `[C](VC)^m[V]`; this returns `m`:
///
/// ```text
/// <C><V>       gives 0    ("tree", "by")
/// <C>VC<V>     gives 1    ("trouble", "oats")
/// <C>VCVC<V>   gives 2    ("private", "orrery")
/// ```
///
/// Rule guards call this on the candidate stem, never on the full word.
pub fn measure(word: &str) -> usize {
    let n = word.len();
    let mut m = 0;
    let mut i = 0;

    // Optional leading consonant run.
    while i < n && is_consonant(word, i) {
        i += 1;
    }

    while i < n {
        while i < n && is_vowel(word, i) {
            i += 1;
        }
        if i >= n {
            break;
        }
        m += 1;
        while i < n && is_consonant(word, i) {
            i += 1;
        }
    }

    m
}

//! Consonant/vowel classification of word positions.
//!
//! Classification is per byte position: `a e i o u` are vowels, `y` is
//! resolved from the previous position (`y` after a consonant acts as a
//! vowel, `y` after a vowel or at the start of the word is a consonant),
//! everything else is a consonant. Non-letter bytes classify as consonants
//! so that unexpected input degrades instead of panicking.

/// Check whether the byte at `pos` is a consonant.
///
/// `pos` must be in bounds for `word`.
pub fn is_consonant(word: &str, pos: usize) -> bool {
    let bytes = word.as_bytes();
    match bytes[pos] {
        b'a' | b'e' | b'i' | b'o' | b'u' => false,
        b'y' if pos > 0 => is_vowel(word, pos - 1),
        _ => true,
    }
}

/// Check whether the byte at `pos` is a vowel (the inverse of
/// [`is_consonant`]).
pub fn is_vowel(word: &str, pos: usize) -> bool {
    !is_consonant(word, pos)
}

/// Check whether any position in `word` classifies as a vowel.
pub fn has_vowel(word: &str) -> bool {
    (0..word.len()).any(|pos| is_vowel(word, pos))
}

/// Check whether `word` ends in a doubled consonant: the last two bytes are
/// identical and that position classifies as a consonant.
pub fn ends_doubled_consonant(word: &str) -> bool {
    let bytes = word.as_bytes();
    let n = bytes.len();
    n >= 2 && bytes[n - 1] == bytes[n - 2] && is_consonant(word, n - 1)
}

/// Check whether `word` ends in consonant-vowel-consonant where the final
/// consonant is not `w`, `x` or `y`.
pub fn ends_cvc(word: &str) -> bool {
    let n = word.len();
    if n < 3 {
        return false;
    }

    is_consonant(word, n - 3)
        && is_vowel(word, n - 2)
        && is_consonant(word, n - 1)
        && !matches!(word.as_bytes()[n - 1], b'w' | b'x' | b'y')
}

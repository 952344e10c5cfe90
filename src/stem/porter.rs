//! The Porter stemming algorithm.
//!
//! An implementation of the algorithm described in M.F. Porter, "An
//! algorithm for suffix stripping" (1980), including the adjustments Porter
//! later recommended under "Points of difference from the published
//! algorithm". Five ordered steps of suffix-rewrite rules reduce an English
//! word to its stem; each rule is gated on the consonant/vowel shape of the
//! stem that would remain.
//!
//! All lengths and positions are byte-based, matching the per-position
//! classifier in [`crate::stem::classify`]. The algorithm is defined for
//! lowercase ASCII words; other bytes classify as consonants and pass
//! through without panicking, which is a deliberate relaxation of the
//! original (whose behavior for such input is undefined).
//!
//! # Examples
//!
//! ```
//! use stemma::stem::{PorterStemmer, Stemmer};
//!
//! let stemmer = PorterStemmer::new();
//!
//! assert_eq!(stemmer.stem("caresses"), "caress");
//! assert_eq!(stemmer.stem("ponies"), "poni");
//! assert_eq!(stemmer.stem("motoring"), "motor");
//! ```

use crate::stem::Stemmer;
use crate::stem::classify::{ends_cvc, ends_doubled_consonant, has_vowel};
use crate::stem::measure::measure;
use crate::stem::rules::{GroupOutcome, SuffixRule, apply_group};

// Guard predicates. Each receives the stem left after removing the
// candidate suffix.

fn measure_gt_zero(stem: &str) -> bool {
    measure(stem) > 0
}

fn measure_gt_one(stem: &str) -> bool {
    measure(stem) > 1
}

fn stem_has_vowel(stem: &str) -> bool {
    has_vowel(stem)
}

fn short_cvc(stem: &str) -> bool {
    measure(stem) == 1 && ends_cvc(stem)
}

fn ion_preceded_by_s_or_t(stem: &str) -> bool {
    measure(stem) > 1 && matches!(stem.as_bytes().last(), Some(b's') | Some(b't'))
}

fn removable_final_e(stem: &str) -> bool {
    let m = measure(stem);
    m > 1 || (m == 1 && !ends_cvc(stem))
}

fn removable_final_l(stem: &str) -> bool {
    // The suffix "l" already matched, so a stem ending in "l" means the
    // word ends in a doubled "ll".
    measure(stem) > 1 && stem.as_bytes().last() == Some(&b'l')
}

// Step 1a: plural stripping. The no-op "ss" rule exists to shadow the bare
// "s" rule for words that already end in a double s.
const STEP_1A: &[SuffixRule] = &[
    SuffixRule::bare("sses", "ss"),
    SuffixRule::bare("ies", "i"),
    SuffixRule::bare("ss", "ss"),
    SuffixRule::bare("s", ""),
];

// Step 1b phase 1: a structural "eed" match ends the whole step, whether or
// not the guard lets the rewrite through ("feed" stays "feed").
const STEP_1B_EED: &[SuffixRule] = &[SuffixRule::guarded("eed", "ee", measure_gt_zero)];

const STEP_1B_ED_ING: &[SuffixRule] = &[
    SuffixRule::guarded("ed", "", stem_has_vowel),
    SuffixRule::guarded("ing", "", stem_has_vowel),
];

const STEP_1B_UNDOUBLE: &[SuffixRule] = &[
    SuffixRule::bare("at", "ate"),
    SuffixRule::bare("bl", "ble"),
    SuffixRule::bare("iz", "ize"),
];

// Empty suffix: structurally matches any word, appending "e" when the word
// itself is a short CVC stem ("hop" -> "hope").
const STEP_1B_RESTORE_E: &[SuffixRule] = &[SuffixRule::guarded("", "e", short_cvc)];

const STEP_1C: &[SuffixRule] = &[SuffixRule::guarded("y", "i", stem_has_vowel)];

// Step 2 groups, keyed on the word's penultimate letter.
const STEP_2_A: &[SuffixRule] = &[
    SuffixRule::guarded("ational", "ate", measure_gt_zero),
    SuffixRule::guarded("tional", "tion", measure_gt_zero),
];

const STEP_2_C: &[SuffixRule] = &[
    SuffixRule::guarded("enci", "ence", measure_gt_zero),
    SuffixRule::guarded("anci", "ance", measure_gt_zero),
];

const STEP_2_E: &[SuffixRule] = &[SuffixRule::guarded("izer", "ize", measure_gt_zero)];

const STEP_2_G: &[SuffixRule] = &[SuffixRule::guarded("logi", "log", measure_gt_zero)];

const STEP_2_L: &[SuffixRule] = &[
    SuffixRule::guarded("bli", "ble", measure_gt_zero),
    SuffixRule::guarded("alli", "al", measure_gt_zero),
    SuffixRule::guarded("entli", "ent", measure_gt_zero),
    SuffixRule::guarded("eli", "e", measure_gt_zero),
    SuffixRule::guarded("ousli", "ous", measure_gt_zero),
];

const STEP_2_O: &[SuffixRule] = &[
    SuffixRule::guarded("ization", "ize", measure_gt_zero),
    SuffixRule::guarded("ation", "ate", measure_gt_zero),
    SuffixRule::guarded("ator", "ate", measure_gt_zero),
];

const STEP_2_S: &[SuffixRule] = &[
    SuffixRule::guarded("alism", "al", measure_gt_zero),
    SuffixRule::guarded("iveness", "ive", measure_gt_zero),
    SuffixRule::guarded("fulness", "ful", measure_gt_zero),
    SuffixRule::guarded("ousness", "ous", measure_gt_zero),
];

const STEP_2_T: &[SuffixRule] = &[
    SuffixRule::guarded("aliti", "al", measure_gt_zero),
    SuffixRule::guarded("iviti", "ive", measure_gt_zero),
    SuffixRule::guarded("biliti", "ble", measure_gt_zero),
];

const STEP_3: &[SuffixRule] = &[
    SuffixRule::guarded("icate", "ic", measure_gt_zero),
    SuffixRule::guarded("ative", "", measure_gt_zero),
    SuffixRule::guarded("alize", "al", measure_gt_zero),
    SuffixRule::guarded("iciti", "ic", measure_gt_zero),
    SuffixRule::guarded("ical", "ic", measure_gt_zero),
    SuffixRule::guarded("ful", "", measure_gt_zero),
    SuffixRule::guarded("ness", "", measure_gt_zero),
];

const STEP_4: &[SuffixRule] = &[
    SuffixRule::guarded("al", "", measure_gt_one),
    SuffixRule::guarded("ance", "", measure_gt_one),
    SuffixRule::guarded("ence", "", measure_gt_one),
    SuffixRule::guarded("er", "", measure_gt_one),
    SuffixRule::guarded("ic", "", measure_gt_one),
    SuffixRule::guarded("able", "", measure_gt_one),
    SuffixRule::guarded("ible", "", measure_gt_one),
    SuffixRule::guarded("ant", "", measure_gt_one),
    SuffixRule::guarded("ement", "", measure_gt_one),
    SuffixRule::guarded("ment", "", measure_gt_one),
    SuffixRule::guarded("ent", "", measure_gt_one),
    SuffixRule::guarded("ion", "", ion_preceded_by_s_or_t),
    SuffixRule::guarded("ou", "", measure_gt_one),
    SuffixRule::guarded("ism", "", measure_gt_one),
    SuffixRule::guarded("ate", "", measure_gt_one),
    SuffixRule::guarded("iti", "", measure_gt_one),
    SuffixRule::guarded("ous", "", measure_gt_one),
    SuffixRule::guarded("ive", "", measure_gt_one),
    SuffixRule::guarded("ize", "", measure_gt_one),
];

const STEP_5A: &[SuffixRule] = &[SuffixRule::guarded("e", "", removable_final_e)];

const STEP_5B: &[SuffixRule] = &[SuffixRule::guarded("l", "", removable_final_l)];

/// Porter stemming algorithm implementation.
///
/// Stateless: a single instance may be shared across threads, and every
/// call is an independent pure function of its input.
#[derive(Debug, Clone, Copy, Default)]
pub struct PorterStemmer;

impl PorterStemmer {
    /// Create a new Porter stemmer.
    pub fn new() -> Self {
        PorterStemmer
    }
}

impl Stemmer for PorterStemmer {
    /// Stem a single pre-tokenized English word.
    ///
    /// Words whose raw byte length is 0, 1 or 2 are returned verbatim,
    /// original case included; this is the one path that does not
    /// lowercase. Every other input is trimmed, ASCII-lowercased and run
    /// through steps 1a-5 in order, so the output is always lowercase.
    fn stem(&self, word: &str) -> String {
        if word.len() <= 2 {
            return word.to_string();
        }

        let stemmed = word.trim().to_ascii_lowercase();
        let stemmed = step1a(&stemmed);
        let stemmed = step1b(&stemmed);
        let stemmed = step1c(&stemmed);
        let stemmed = step2(&stemmed);
        let stemmed = step3(&stemmed);
        let stemmed = step4(&stemmed);
        step5(&stemmed)
    }

    fn name(&self) -> &'static str {
        "porter"
    }
}

fn step1a(word: &str) -> String {
    apply_group(STEP_1A, word).into_word(word)
}

fn step1b(word: &str) -> String {
    match apply_group(STEP_1B_EED, word) {
        // "eed" consumed the step, rewritten or not.
        GroupOutcome::Matched { word, .. } => word,
        GroupOutcome::NoMatch => match apply_group(STEP_1B_ED_ING, word) {
            GroupOutcome::Matched {
                word,
                rewritten: true,
            } => step1b_cleanup(&word),
            GroupOutcome::Matched {
                word,
                rewritten: false,
            } => word,
            GroupOutcome::NoMatch => word.to_string(),
        },
    }
}

/// After an actual "ed"/"ing" removal: restore a mangled suffix ("at" ->
/// "ate"), undouble a trailing consonant other than l/s/z, or put back an
/// "e" on a short CVC stem.
fn step1b_cleanup(word: &str) -> String {
    match apply_group(STEP_1B_UNDOUBLE, word) {
        GroupOutcome::Matched { word, .. } => word,
        GroupOutcome::NoMatch => {
            let bytes = word.as_bytes();
            if ends_doubled_consonant(word)
                && !matches!(bytes[bytes.len() - 1], b'l' | b's' | b'z')
            {
                match word.get(..word.len() - 1) {
                    Some(undoubled) => undoubled.to_string(),
                    // Truncation would split a multi-byte char; leave the
                    // word alone rather than panic.
                    None => word.to_string(),
                }
            } else {
                apply_group(STEP_1B_RESTORE_E, word).into_word(word)
            }
        }
    }
}

fn step1c(word: &str) -> String {
    apply_group(STEP_1C, word).into_word(word)
}

/// Step 2 dispatches on the penultimate letter; a word whose penultimate
/// letter keys no group passes through untouched.
fn step2(word: &str) -> String {
    let bytes = word.as_bytes();
    if bytes.len() < 2 {
        return word.to_string();
    }

    let rules = match bytes[bytes.len() - 2] {
        b'a' => STEP_2_A,
        b'c' => STEP_2_C,
        b'e' => STEP_2_E,
        b'g' => STEP_2_G,
        b'l' => STEP_2_L,
        b'o' => STEP_2_O,
        b's' => STEP_2_S,
        b't' => STEP_2_T,
        _ => return word.to_string(),
    };

    apply_group(rules, word).into_word(word)
}

fn step3(word: &str) -> String {
    apply_group(STEP_3, word).into_word(word)
}

fn step4(word: &str) -> String {
    apply_group(STEP_4, word).into_word(word)
}

/// Step 5 runs two independent single-rule passes: drop a final "e", then
/// undouble a final "ll".
fn step5(word: &str) -> String {
    let word = apply_group(STEP_5A, word).into_word(word);
    apply_group(STEP_5B, &word).into_word(&word)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stem(word: &str) -> String {
        PorterStemmer::new().stem(word)
    }

    #[test]
    fn test_short_words_returned_verbatim() {
        assert_eq!(stem(""), "");
        assert_eq!(stem("a"), "a");
        assert_eq!(stem("I"), "I");
        assert_eq!(stem("At"), "At");
        assert_eq!(stem("BY"), "BY");
    }

    #[test]
    fn test_lowercases_and_trims() {
        assert_eq!(stem("CATS"), "cat");
        assert_eq!(stem("Hopping"), "hop");
        assert_eq!(stem("  cats  "), "cat");
    }

    #[test]
    fn test_step1a_plurals() {
        assert_eq!(stem("caresses"), "caress");
        assert_eq!(stem("ponies"), "poni");
        assert_eq!(stem("ties"), "ti");
        assert_eq!(stem("caress"), "caress"); // "ss" no-op rule shadows "s"
        assert_eq!(stem("cats"), "cat");
    }

    #[test]
    fn test_step1b_eed_consumes_on_guard_failure() {
        // "feed" matches "eed" structurally, measure("fe") == 0 blocks the
        // rewrite, and the blocked match also blocks the ed/ing phase.
        assert_eq!(stem("feed"), "feed");
        assert_eq!(step1b("feed"), "feed");
        assert_eq!(step1b("agreed"), "agree");
    }

    #[test]
    fn test_step1b_ed_ing() {
        assert_eq!(stem("plastered"), "plaster");
        assert_eq!(stem("motoring"), "motor");
        // No vowel in the would-be stem "s": guard fails, word unchanged.
        assert_eq!(stem("sing"), "sing");
    }

    #[test]
    fn test_step1b_cleanup() {
        assert_eq!(stem("conflated"), "conflat"); // at -> ate, then step 5 drops the e
        assert_eq!(stem("sized"), "size"); // iz -> ize
        assert_eq!(stem("hopping"), "hop"); // undouble pp
        assert_eq!(stem("falling"), "fall"); // ll is never undoubled here
        assert_eq!(stem("plotted"), "plot");
        assert_eq!(stem("running"), "run");
    }

    #[test]
    fn test_step1c_y_to_i() {
        assert_eq!(stem("happy"), "happi");
        assert_eq!(stem("sky"), "sky"); // no vowel in "sk"
        assert_eq!(stem("dying"), "dy");
        assert_eq!(stem("saying"), "say");
    }

    #[test]
    fn test_step2() {
        assert_eq!(stem("relational"), "relat");
        assert_eq!(stem("conditional"), "condit");
        assert_eq!(stem("rational"), "ration");
        assert_eq!(stem("valenci"), "valenc");
        assert_eq!(stem("digitizer"), "digit");
        assert_eq!(stem("analogi"), "analog");
        assert_eq!(stem("radicalli"), "radic");
        assert_eq!(stem("differentli"), "differ");
        assert_eq!(stem("operator"), "oper");
        assert_eq!(stem("vietnamization"), "vietnam");
        assert_eq!(stem("feudalism"), "feudal");
        assert_eq!(stem("hopefulness"), "hope");
        assert_eq!(stem("angulariti"), "angular");
    }

    #[test]
    fn test_step3() {
        assert_eq!(stem("predication"), "predic"); // ation -> ate, icate -> ic
        assert_eq!(stem("electriciti"), "electr");
        assert_eq!(stem("goodness"), "good");
    }

    #[test]
    fn test_step4() {
        assert_eq!(stem("adjustable"), "adjust");
        assert_eq!(stem("defensible"), "defens");
        assert_eq!(stem("irritant"), "irrit");
        assert_eq!(stem("replacement"), "replac");
        assert_eq!(stem("communism"), "commun");
        assert_eq!(stem("activate"), "activ");
        assert_eq!(stem("effective"), "effect");
        assert_eq!(stem("bowdlerize"), "bowdler");
    }

    #[test]
    fn test_step4_ion_needs_s_or_t() {
        assert_eq!(stem("adoption"), "adopt");
        // "ion" itself: the stem is empty, the guard fails, nothing happens.
        assert_eq!(stem("ion"), "ion");
    }

    #[test]
    fn test_step5() {
        assert_eq!(stem("probate"), "probat");
        assert_eq!(stem("cease"), "ceas");
        assert_eq!(stem("rate"), "rate"); // measure too small to drop the e
        assert_eq!(stem("controll"), "control");
        assert_eq!(stem("roll"), "roll");
    }

    #[test]
    fn test_multi_step_interactions() {
        assert_eq!(stem("generalization"), "gener");
        assert_eq!(stem("oscillators"), "oscil");
        assert_eq!(stem("meetings"), "meet");
        // Step 1b rewrites "agreed" to "agree"; step 5a then drops the e.
        assert_eq!(stem("agreed"), "agre");
    }

    #[test]
    fn test_non_alphabetic_input_does_not_panic() {
        assert_eq!(stem("123456"), "123456");
        assert_eq!(stem("don't"), "don't");
        assert_eq!(stem("x=y+z"), "x=y+z");
        // Multi-byte input is outside the algorithm's domain but must not
        // slice mid-char.
        let _ = stem("héllo");
        let _ = stem("日本語");
    }

    #[test]
    fn test_deterministic_across_calls() {
        let stemmer = PorterStemmer::new();
        let first = stemmer.stem("generalization");
        for _ in 0..10 {
            assert_eq!(stemmer.stem("generalization"), first);
        }
    }

    #[test]
    fn test_stemmer_name() {
        assert_eq!(PorterStemmer::new().name(), "porter");
    }
}

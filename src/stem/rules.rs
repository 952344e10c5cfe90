//! Declarative suffix-rewrite rules and their evaluation.
//!
//! Every step of the Porter pipeline is an ordered group of [`SuffixRule`]s
//! run through [`apply_group`]. A group is consumed by the FIRST rule whose
//! suffix structurally matches the word, whether or not that rule's guard
//! accepts the stem; later rules in the group are never tried. Collapsing
//! that distinction into "did a rewrite happen" changes published outputs
//! ("feed" would become "fe"), so the outcome types keep it explicit.

/// Guard predicate over the stem left after removing a rule's suffix.
pub type Guard = fn(&str) -> bool;

/// A single suffix-rewrite rule: replace `suffix` with `replacement` when
/// the guard (if any) accepts the remaining stem. Rules are `'static`
/// declared data; the empty suffix structurally matches every word.
#[derive(Clone, Copy)]
pub struct SuffixRule {
    /// Suffix pattern the word must end with.
    pub suffix: &'static str,
    /// Text appended to the stem on a successful rewrite.
    pub replacement: &'static str,
    /// Optional predicate over the stem; `None` always rewrites.
    pub guard: Option<Guard>,
}

impl std::fmt::Debug for SuffixRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SuffixRule")
            .field("suffix", &self.suffix)
            .field("replacement", &self.replacement)
            .field("guarded", &self.guard.is_some())
            .finish()
    }
}

impl SuffixRule {
    /// An unguarded rule.
    pub const fn bare(suffix: &'static str, replacement: &'static str) -> Self {
        SuffixRule {
            suffix,
            replacement,
            guard: None,
        }
    }

    /// A rule whose rewrite is gated on `guard` accepting the stem.
    pub const fn guarded(suffix: &'static str, replacement: &'static str, guard: Guard) -> Self {
        SuffixRule {
            suffix,
            replacement,
            guard: Some(guard),
        }
    }

    /// Evaluate this rule against `word`.
    pub fn apply(&self, word: &str) -> RuleOutcome {
        if word.len() < self.suffix.len() {
            return RuleOutcome::NoMatch;
        }
        if !self.suffix.is_empty() && !word.ends_with(self.suffix) {
            return RuleOutcome::NoMatch;
        }

        // The suffix is ASCII and matched byte-for-byte, so the split is on
        // a char boundary.
        let stem = &word[..word.len() - self.suffix.len()];
        match self.guard {
            Some(guard) if !guard(stem) => RuleOutcome::Blocked,
            _ => RuleOutcome::Rewritten(format!("{stem}{}", self.replacement)),
        }
    }
}

/// Outcome of evaluating one rule against one word.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RuleOutcome {
    /// The word does not end with the rule's suffix; try the next rule.
    NoMatch,
    /// Structural match but the guard rejected the stem: the word is
    /// unchanged and the enclosing group is closed.
    Blocked,
    /// Structural match and the guard (if any) passed; holds the rewritten
    /// word. The group is closed.
    Rewritten(String),
}

/// Outcome of running a word through an ordered rule group.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GroupOutcome {
    /// No rule's suffix matched; the word passes through the group.
    NoMatch,
    /// Some rule matched structurally and closed the group. `rewritten` is
    /// false when the rule's guard rejected the stem and `word` is the
    /// group's input unchanged.
    Matched { word: String, rewritten: bool },
}

impl GroupOutcome {
    /// Collapse to the resulting word, falling back to `original` when no
    /// rule matched.
    pub fn into_word(self, original: &str) -> String {
        match self {
            GroupOutcome::NoMatch => original.to_string(),
            GroupOutcome::Matched { word, .. } => word,
        }
    }
}

/// Run `word` through `rules` in declaration order. The first structural
/// match consumes the group, even when its guard fails.
pub fn apply_group(rules: &[SuffixRule], word: &str) -> GroupOutcome {
    for rule in rules {
        match rule.apply(word) {
            RuleOutcome::NoMatch => continue,
            RuleOutcome::Blocked => {
                return GroupOutcome::Matched {
                    word: word.to_string(),
                    rewritten: false,
                };
            }
            RuleOutcome::Rewritten(result) => {
                return GroupOutcome::Matched {
                    word: result,
                    rewritten: true,
                };
            }
        }
    }
    GroupOutcome::NoMatch
}

//! Skill normalisation and matching.
//!
//! Skills are compared as normalised token sets rather than raw substrings:
//! two terms match when their phrases are equal or one term's tokens are a
//! subset of the other's. The relation is symmetric, so argument order never
//! changes a score.

use std::collections::BTreeSet;

/// Improvement-area words this short or shorter carry no signal ("and", "the", "api").
const MIN_AREA_TOKEN_LEN: usize = 3;

const TOKEN_SEPARATORS: &[char] = &['/', ',', ';', '-', '_', '(', ')', '|'];

/// Lowercases, trims, and collapses internal whitespace.
pub fn normalize(s: &str) -> String {
    s.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// A normalised skill phrase plus its token set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillTerm {
    phrase: String,
    tokens: BTreeSet<String>,
}

impl SkillTerm {
    pub fn new(raw: &str) -> Self {
        let phrase = normalize(raw);
        let tokens = phrase
            .split(|c: char| c.is_whitespace() || TOKEN_SEPARATORS.contains(&c))
            .map(|t| t.trim_matches(|c: char| c == '.' || c == ','))
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();
        Self { phrase, tokens }
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Phrase equality, or one side's tokens contained in the other's.
    pub fn matches(&self, other: &SkillTerm) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.phrase == other.phrase
            || self.tokens.is_subset(&other.tokens)
            || other.tokens.is_subset(&self.tokens)
    }

    pub fn has_token(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }
}

/// A set of CV skills prepared for repeated matching.
#[derive(Debug, Clone, Default)]
pub struct SkillSet {
    terms: Vec<SkillTerm>,
}

impl SkillSet {
    pub fn new<I, S>(skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let terms = skills
            .into_iter()
            .map(|s| SkillTerm::new(s.as_ref()))
            .filter(|t| !t.is_empty())
            .collect();
        Self { terms }
    }

    /// True when any skill in the set matches `term`.
    pub fn matches(&self, term: &SkillTerm) -> bool {
        self.terms.iter().any(|t| t.matches(term))
    }

    pub fn matches_str(&self, raw: &str) -> bool {
        self.matches(&SkillTerm::new(raw))
    }

    /// Exact phrase membership, used where a closer match earns a bonus.
    pub fn contains_phrase(&self, raw: &str) -> bool {
        let phrase = normalize(raw);
        self.terms.iter().any(|t| t.phrase == phrase)
    }
}

/// Splits improvement-area texts into the meaningful words used for gap matching.
/// Surrounding punctuation is stripped and words of three characters or fewer dropped.
pub fn improvement_tokens<'a, I>(areas: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = &'a str>,
{
    areas
        .into_iter()
        .flat_map(str::split_whitespace)
        .map(|w| {
            w.trim_matches(|c: char| !c.is_alphanumeric() && c != '+' && c != '#')
                .to_lowercase()
        })
        .filter(|w| w.chars().count() > MIN_AREA_TOKEN_LEN)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_collapses_whitespace_and_case() {
        assert_eq!(normalize("  Machine   Learning "), "machine learning");
    }

    #[test]
    fn test_tokens_keep_dots_and_plus() {
        let t = SkillTerm::new("Node.js / C++");
        assert!(t.has_token("node.js"));
        assert!(t.has_token("c++"));
    }

    #[test]
    fn test_ci_cd_splits_into_tokens() {
        let t = SkillTerm::new("CI/CD");
        assert!(t.has_token("ci"));
        assert!(t.has_token("cd"));
        assert!(t.matches(&SkillTerm::new("ci/cd")));
    }

    #[test]
    fn test_subset_match_is_symmetric() {
        let a = SkillTerm::new("machine learning");
        let b = SkillTerm::new("Learning");
        assert!(a.matches(&b));
        assert!(b.matches(&a));
    }

    #[test]
    fn test_no_accidental_substring_matches() {
        // "java" is a substring of "javascript" but a different skill.
        assert!(!SkillTerm::new("java").matches(&SkillTerm::new("javascript")));
        assert!(!SkillTerm::new("ai").matches(&SkillTerm::new("air traffic")));
    }

    #[test]
    fn test_empty_terms_never_match() {
        assert!(!SkillTerm::new("  ").matches(&SkillTerm::new("  ")));
    }

    #[test]
    fn test_improvement_tokens_drop_short_words() {
        let tokens = improvement_tokens(["React performance", "Go and AWS, testing."]);
        assert!(tokens.contains("react"));
        assert!(tokens.contains("performance"));
        assert!(tokens.contains("testing"));
        assert!(!tokens.contains("and"));
        assert!(!tokens.contains("aws"));
        assert!(!tokens.contains("go"));
    }

    #[test]
    fn test_skill_set_phrase_membership() {
        let set = SkillSet::new(["React", "Machine Learning"]);
        assert!(set.contains_phrase("machine learning"));
        assert!(!set.contains_phrase("machine"));
        assert!(set.matches_str("machine"));
    }
}

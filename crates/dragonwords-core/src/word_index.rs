#![forbid(unsafe_code)]

//! Ordered `code -> word` tables and the per-panel registry.
//!
//! A [`WordMapping`] pairs each completion candidate, in input order, with the
//! next code of a fresh [`codes`] sequence. Position `i` of a mapping always
//! holds [`Code::at(i)`](Code::at), which makes lookups by code a direct index.
//!
//! [`PanelRegistry`] remembers the last mapping rendered into each panel so a
//! typed code can be resolved against exactly what the user is looking at.
//!
//! # Failure Modes
//!
//! | Condition | Behavior |
//! |-----------|----------|
//! | No candidates / `None` | Empty mapping |
//! | More than 234 candidates | First 234 kept, rest dropped (logged at `warn`) |
//! | Unknown panel id | Empty mapping |
//! | Unknown or malformed code | `None` |

use std::fmt;

use rustc_hash::FxHashMap;

use crate::code::{Code, codes};

/// Identity of a panel view, as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PanelId(u64);

impl PanelId {
    /// Wrap a raw host identifier.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw host identifier.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "panel#{}", self.0)
    }
}

/// Ordered mapping from [`Code`] to candidate word.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WordMapping {
    entries: Vec<(Code, String)>,
}

impl WordMapping {
    /// An empty mapping.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Assign codes to `candidates` in order.
    ///
    /// Candidates past the end of the code space are dropped.
    pub fn from_candidates<I>(candidates: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut candidates = candidates.into_iter();
        // `zip` polls the code sequence first, so leftovers stay in `candidates`.
        let entries: Vec<(Code, String)> = codes()
            .zip(candidates.by_ref())
            .map(|(code, word)| (code, word.into()))
            .collect();

        let dropped = candidates.count();
        if dropped > 0 {
            tracing::warn!(
                kept = entries.len(),
                dropped,
                "candidate list exceeds the code space; extra candidates dropped"
            );
        }

        Self { entries }
    }

    /// Number of entries.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the mapping has no entries.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Word for the typed code, matched exactly.
    #[must_use]
    pub fn get(&self, typed: &str) -> Option<&str> {
        let code = typed.parse::<Code>().ok()?;
        self.get_code(code)
    }

    /// Word assigned to `code`, if the mapping reaches that far.
    #[must_use]
    pub fn get_code(&self, code: Code) -> Option<&str> {
        self.entries
            .get(code.index())
            .filter(|(assigned, _)| *assigned == code)
            .map(|(_, word)| word.as_str())
    }

    /// Entries in insertion (code) order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (Code, &str)> + '_ {
        self.entries.iter().map(|(code, word)| (*code, word.as_str()))
    }

    /// Words in insertion order.
    pub fn words(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.entries.iter().map(|(_, word)| word.as_str())
    }
}

/// Build a mapping from an optional candidate list.
///
/// Hosts report "no completion list" and "empty completion list" differently;
/// both produce an empty mapping.
pub fn build_mapping<I>(candidates: Option<I>) -> WordMapping
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    candidates
        .map(WordMapping::from_candidates)
        .unwrap_or_default()
}

static EMPTY_MAPPING: WordMapping = WordMapping::new();

/// Last mapping rendered into each panel.
///
/// Entries are overwritten on every update and never removed; panel ids are
/// recycled by the host, which bounds growth.
#[derive(Debug, Default)]
pub struct PanelRegistry {
    mappings: FxHashMap<PanelId, WordMapping>,
}

impl PanelRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `mapping` for `panel`, replacing any previous one.
    pub fn save(&mut self, panel: PanelId, mapping: WordMapping) {
        tracing::trace!(%panel, entries = mapping.len(), "saving word mapping");
        self.mappings.insert(panel, mapping);
    }

    /// Mapping for `panel`, or an empty mapping if none was saved.
    #[must_use]
    pub fn get(&self, panel: PanelId) -> &WordMapping {
        self.mappings.get(&panel).unwrap_or(&EMPTY_MAPPING)
    }

    /// Resolve a typed code against the mapping saved for `panel`.
    #[must_use]
    pub fn lookup(&self, panel: PanelId, typed: &str) -> Option<&str> {
        self.get(panel).get(typed)
    }

    /// Whether a mapping was ever saved for `panel`.
    #[must_use]
    pub fn contains(&self, panel: PanelId) -> bool {
        self.mappings.contains_key(&panel)
    }

    /// Number of panels with a saved mapping.
    #[must_use]
    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    /// Whether no mapping has been saved yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::CODE_SPACE;
    use tracing_test::traced_test;

    fn words(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("word{i}")).collect()
    }

    #[test]
    fn assigns_codes_in_candidate_order() {
        let mapping = WordMapping::from_candidates(["foo", "bar", "bazqux"]);
        let pairs: Vec<(String, &str)> = mapping
            .iter()
            .map(|(code, word)| (code.to_string(), word))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("la".to_string(), "foo"),
                ("lb".to_string(), "bar"),
                ("lc".to_string(), "bazqux"),
            ]
        );
    }

    #[test]
    fn none_and_empty_build_empty_mapping() {
        assert!(build_mapping(None::<Vec<String>>).is_empty());
        assert!(build_mapping(Some(Vec::<String>::new())).is_empty());
    }

    #[test]
    fn duplicate_words_get_distinct_codes() {
        let mapping = WordMapping::from_candidates(["same", "same"]);
        assert_eq!(mapping.get("la"), Some("same"));
        assert_eq!(mapping.get("lb"), Some("same"));
    }

    #[test]
    fn full_code_space_is_used() {
        let mapping = WordMapping::from_candidates(words(CODE_SPACE));
        assert_eq!(mapping.len(), CODE_SPACE);
        assert_eq!(mapping.get("fz"), Some("word233"));
    }

    #[test]
    #[traced_test]
    fn overflow_drops_extra_candidates() {
        let mapping = WordMapping::from_candidates(words(CODE_SPACE + 1));
        assert_eq!(mapping.len(), CODE_SPACE);
        assert!(!mapping.words().any(|w| w == "word234"));
        assert!(logs_contain("extra candidates dropped"));
    }

    #[test]
    fn get_is_exact() {
        let mapping = WordMapping::from_candidates(["foo"]);
        assert_eq!(mapping.get("la"), Some("foo"));
        assert_eq!(mapping.get("LA"), None);
        assert_eq!(mapping.get(" la"), None);
        assert_eq!(mapping.get("lb"), None);
        assert_eq!(mapping.get(""), None);
    }

    #[test]
    fn get_code_past_end_is_none() {
        let mapping = WordMapping::from_candidates(["foo"]);
        assert_eq!(mapping.get_code(Code::at(1).unwrap()), None);
        assert_eq!(mapping.get_code(Code::at(233).unwrap()), None);
    }

    #[test]
    fn registry_get_after_save() {
        let mut registry = PanelRegistry::new();
        let mapping = WordMapping::from_candidates(["alpha", "beta"]);
        registry.save(PanelId::new(7), mapping.clone());
        assert_eq!(registry.get(PanelId::new(7)), &mapping);
        assert!(registry.contains(PanelId::new(7)));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn registry_unknown_panel_is_empty() {
        let registry = PanelRegistry::new();
        assert!(registry.get(PanelId::new(1)).is_empty());
        assert!(!registry.contains(PanelId::new(1)));
        assert!(registry.is_empty());
    }

    #[test]
    fn registry_save_overwrites() {
        let mut registry = PanelRegistry::new();
        let panel = PanelId::new(3);
        registry.save(panel, WordMapping::from_candidates(["old"]));
        registry.save(panel, WordMapping::from_candidates(["new", "newer"]));
        assert_eq!(registry.lookup(panel, "la"), Some("new"));
        assert_eq!(registry.lookup(panel, "lb"), Some("newer"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn registry_keeps_panels_apart() {
        let mut registry = PanelRegistry::new();
        registry.save(PanelId::new(1), WordMapping::from_candidates(["one"]));
        registry.save(PanelId::new(2), WordMapping::from_candidates(["two"]));
        assert_eq!(registry.lookup(PanelId::new(1), "la"), Some("one"));
        assert_eq!(registry.lookup(PanelId::new(2), "la"), Some("two"));
        assert_eq!(registry.lookup(PanelId::new(3), "la"), None);
    }

    #[test]
    fn panel_id_display() {
        assert_eq!(PanelId::new(42).to_string(), "panel#42");
        assert_eq!(PanelId::new(42).get(), 42);
    }
}

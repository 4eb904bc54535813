//! Coverage accounting for one match block. Created fresh per compilation,
//! discarded right after the exhaustiveness check.

use variant_lang_ast::{CaseKey, HashSet, UnionModel};

#[derive(Debug, Default)]
pub struct CoverageSet {
    seen: HashSet<CaseKey>,
    wildcard: bool,
}

impl CoverageSet {
    pub fn new() -> Self {
        CoverageSet::default()
    }

    /// Record a clause for a declared case. Recording the same case twice is
    /// legal; the dispatch is first-match-wins.
    pub fn add(&mut self, key: CaseKey) {
        self.seen.insert(key);
    }

    /// Record a wildcard clause (the sentinel is tracked separately and is
    /// never a declared case).
    pub fn add_wildcard(&mut self) {
        self.wildcard = true;
    }

    pub fn covers(&self, key: &CaseKey) -> bool {
        self.seen.contains(key)
    }

    pub fn has_wildcard(&self) -> bool {
        self.wildcard
    }

    /// Every declared case absent from this set, in declaration order.
    pub fn missing(&self, model: &UnionModel) -> Vec<CaseKey> {
        model.keys().filter(|key| !self.covers(key)).collect()
    }
}

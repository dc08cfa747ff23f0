//! Fixed transliteration/synonym table.
//!
//! # Invariants
//! - Expansion is one-directional: a trigger in the query adds its
//!   expansions, an expansion in the query never adds its trigger.
//! - All comparisons are made on lowercased text.

/// One trigger with the alternate substrings it unlocks in record text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SynonymRule {
    pub trigger: &'static str,
    pub expansions: &'static [&'static str],
}

pub const SYNONYM_RULES: &[SynonymRule] = &[
    SynonymRule {
        trigger: "money",
        expansions: &["lac", "paise", "upi"],
    },
    SynonymRule {
        trigger: "meet",
        expansions: &["milte", "meeting"],
    },
    SynonymRule {
        trigger: "send",
        expansions: &["send", "bhejne"],
    },
    SynonymRule {
        trigger: "ready",
        expansions: &["ready"],
    },
    SynonymRule {
        trigger: "police",
        expansions: &["police"],
    },
];

/// Returns expansions of every trigger contained in `query_lower`.
///
/// Duplicates across rules are dropped; rule order is kept.
pub fn expansions_for(query_lower: &str) -> Vec<&'static str> {
    let mut expansions = Vec::new();
    for rule in SYNONYM_RULES
        .iter()
        .filter(|rule| query_lower.contains(rule.trigger))
    {
        for expansion in rule.expansions {
            if !expansions.contains(expansion) {
                expansions.push(*expansion);
            }
        }
    }
    expansions
}

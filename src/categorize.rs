//! Tone / Modifier Categorization
//!
//! Batch analysis over a corpus of phrases against two caller-supplied
//! vocabularies: known tones ("pink", "teal") and known modifiers ("soft",
//! "bold"). Produces the observed subsets of each plus a bidirectional
//! co-occurrence mapping between them. Runs off the request hot-path,
//! typically for analytics, and holds no state between calls.
//!
//! Tokenization here is whitespace splitting only. A token glued to
//! punctuation ("pink!") is one literal token and will fail vocabulary
//! membership; that is the intended contract, since no richer tokenizer is
//! defined at this layer.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashSet};

/// Result of categorizing a phrase corpus.
///
/// All lists are ascending-sorted, so equal inputs (in any phrase order)
/// produce byte-identical serialized output. The edge maps only carry keys
/// that received at least one co-occurrence edge; a tone or modifier seen
/// with no partner appears in `tones`/`modifiers` but not in the maps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Categorization {
    pub tones: Vec<String>,
    pub modifiers: Vec<String>,
    pub modifier_to_tone: BTreeMap<String, Vec<String>>,
    pub tone_to_modifier: BTreeMap<String, Vec<String>>,
}

/// Categorize a batch of phrases against tone and modifier vocabularies.
///
/// Within each phrase, every matched modifier is paired with every matched
/// tone — the full cross-product, not just adjacent pairs. "soft bold pink
/// red" pairs soft with both pink and red, and bold with both too; that
/// over-approximation is deliberate. Phrases contribute no edges unless they
/// match at least one token from each vocabulary. Unknown tokens are
/// silently ignored. A token present in both vocabularies is recorded in
/// both roles independently (upstream data-quality issue, not special-cased
/// here).
pub fn categorize(
    phrases: &[String],
    known_tones: &HashSet<String>,
    known_modifiers: &HashSet<String>,
) -> Categorization {
    let mut tones: BTreeSet<String> = BTreeSet::new();
    let mut modifiers: BTreeSet<String> = BTreeSet::new();
    let mut modifier_to_tone: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    let mut tone_to_modifier: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();

    for phrase in phrases {
        let lowered = phrase.to_lowercase();
        let tokens: Vec<&str> = lowered.split_whitespace().collect();

        let phrase_tones: BTreeSet<&str> = tokens
            .iter()
            .copied()
            .filter(|t| known_tones.contains(*t))
            .collect();
        let phrase_modifiers: BTreeSet<&str> = tokens
            .iter()
            .copied()
            .filter(|t| known_modifiers.contains(*t))
            .collect();

        tones.extend(phrase_tones.iter().map(|t| t.to_string()));
        modifiers.extend(phrase_modifiers.iter().map(|m| m.to_string()));

        for modifier in &phrase_modifiers {
            for tone in &phrase_tones {
                modifier_to_tone
                    .entry(modifier.to_string())
                    .or_default()
                    .insert(tone.to_string());
                tone_to_modifier
                    .entry(tone.to_string())
                    .or_default()
                    .insert(modifier.to_string());
            }
        }
    }

    Categorization {
        tones: tones.into_iter().collect(),
        modifiers: modifiers.into_iter().collect(),
        modifier_to_tone: into_sorted_lists(modifier_to_tone),
        tone_to_modifier: into_sorted_lists(tone_to_modifier),
    }
}

fn into_sorted_lists(map: BTreeMap<String, BTreeSet<String>>) -> BTreeMap<String, Vec<String>> {
    map.into_iter()
        .map(|(key, values)| (key, values.into_iter().collect()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocab(words: &[&str]) -> HashSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn phrases(items: &[&str]) -> Vec<String> {
        items.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn test_empty_corpus_yields_empty_result() {
        let result = categorize(&[], &vocab(&["pink"]), &vocab(&["soft"]));
        assert_eq!(result, Categorization::default());
    }

    #[test]
    fn test_single_match_pairs_modifier_with_tone() {
        let result = categorize(&phrases(&["soft pink"]), &vocab(&["pink"]), &vocab(&["soft"]));

        assert_eq!(result.tones, vec!["pink"]);
        assert_eq!(result.modifiers, vec!["soft"]);
        assert_eq!(result.modifier_to_tone["soft"], vec!["pink"]);
        assert_eq!(result.tone_to_modifier["pink"], vec!["soft"]);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let result = categorize(&phrases(&["SOFT Pink"]), &vocab(&["pink"]), &vocab(&["soft"]));
        assert_eq!(result.modifier_to_tone["soft"], vec!["pink"]);
    }

    #[test]
    fn test_edges_stay_within_their_phrase() {
        let result = categorize(
            &phrases(&["soft pink", "bold red"]),
            &vocab(&["pink", "red"]),
            &vocab(&["soft", "bold"]),
        );

        assert_eq!(result.modifier_to_tone["soft"], vec!["pink"]);
        assert_eq!(result.modifier_to_tone["bold"], vec!["red"]);
        assert_eq!(result.tone_to_modifier["pink"], vec!["soft"]);
        assert_eq!(result.tone_to_modifier["red"], vec!["bold"]);
    }

    #[test]
    fn test_cross_product_within_a_phrase() {
        let result = categorize(
            &phrases(&["soft bold pink red"]),
            &vocab(&["pink", "red"]),
            &vocab(&["soft", "bold"]),
        );

        assert_eq!(result.modifier_to_tone["soft"], vec!["pink", "red"]);
        assert_eq!(result.modifier_to_tone["bold"], vec!["pink", "red"]);
        assert_eq!(result.tone_to_modifier["pink"], vec!["bold", "soft"]);
        assert_eq!(result.tone_to_modifier["red"], vec!["bold", "soft"]);
    }

    #[test]
    fn test_partnerless_tone_gets_no_edge_entry() {
        let result = categorize(&phrases(&["pink"]), &vocab(&["pink"]), &vocab(&["soft"]));

        assert_eq!(result.tones, vec!["pink"]);
        assert!(result.modifiers.is_empty());
        assert!(result.modifier_to_tone.is_empty());
        assert!(result.tone_to_modifier.is_empty());
    }

    #[test]
    fn test_unknown_tokens_are_ignored() {
        let result = categorize(
            &phrases(&["very soft pink indeed"]),
            &vocab(&["pink"]),
            &vocab(&["soft"]),
        );

        assert_eq!(result.tones, vec!["pink"]);
        assert_eq!(result.modifiers, vec!["soft"]);
    }

    #[test]
    fn test_punctuation_glued_tokens_fail_membership() {
        let result = categorize(&phrases(&["soft pink!"]), &vocab(&["pink"]), &vocab(&["soft"]));

        assert!(result.tones.is_empty());
        assert_eq!(result.modifiers, vec!["soft"]);
        assert!(result.modifier_to_tone.is_empty());
    }

    #[test]
    fn test_dual_vocabulary_token_is_recorded_in_both_roles() {
        // "rose" as both tone and modifier: recorded independently, and the
        // self-pairing is not excluded.
        let result = categorize(&phrases(&["rose"]), &vocab(&["rose"]), &vocab(&["rose"]));

        assert_eq!(result.tones, vec!["rose"]);
        assert_eq!(result.modifiers, vec!["rose"]);
        assert_eq!(result.modifier_to_tone["rose"], vec!["rose"]);
        assert_eq!(result.tone_to_modifier["rose"], vec!["rose"]);
    }

    #[test]
    fn test_permuted_input_is_byte_identical() {
        let tones = vocab(&["pink", "red", "teal"]);
        let modifiers = vocab(&["soft", "bold", "dusty"]);
        let forward = phrases(&["soft pink", "bold red teal", "dusty teal"]);
        let reversed = phrases(&["dusty teal", "bold red teal", "soft pink"]);

        let a = categorize(&forward, &tones, &modifiers);
        let b = categorize(&reversed, &tones, &modifiers);

        assert_eq!(a, b);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }
}

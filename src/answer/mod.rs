//! Natural-language summaries of match results.
//!
//! The answer is a single French sentence built from a static template:
//! counts plus up to three entity names per non-empty category. No matching
//! or inference happens here.

use crate::search::Matches;

/// Answer used when nothing in the universe matches the question.
pub const FALLBACK_ANSWER: &str =
    "Aucun élément de l'univers ne correspond à votre question.";

/// Maximum entity names quoted per category.
const NAMES_PER_CATEGORY: usize = 3;

/// Compose the answer sentence for a match set.
pub fn synthesize(matches: &Matches) -> String {
    if matches.is_empty() {
        return FALLBACK_ANSWER.to_string();
    }

    let mut parts = Vec::new();
    if !matches.objects.is_empty() {
        parts.push(category(
            matches.objects.len(),
            "objet",
            "objets",
            matches.objects.iter().map(|m| m.name.as_str()),
        ));
    }
    if !matches.classes.is_empty() {
        parts.push(category(
            matches.classes.len(),
            "classe",
            "classes",
            matches.classes.iter().map(|m| m.name.as_str()),
        ));
    }
    if !matches.tables.is_empty() {
        parts.push(category(
            matches.tables.len(),
            "table",
            "tables",
            matches.tables.iter().map(|m| m.name.as_str()),
        ));
    }
    if !matches.joins.is_empty() {
        parts.push(category(
            matches.joins.len(),
            "jointure",
            "jointures",
            matches.joins.iter().map(|m| m.name.as_str()),
        ));
    }

    format!("Votre question fait ressortir {}.", enumerate_french(&parts))
}

/// "2 objets (Marge, Revenu)" with at most [`NAMES_PER_CATEGORY`] names.
fn category<'a>(
    count: usize,
    singular: &str,
    plural: &str,
    names: impl Iterator<Item = &'a str>,
) -> String {
    let quoted: Vec<&str> = names.take(NAMES_PER_CATEGORY).collect();
    let label = if count > 1 { plural } else { singular };

    let mut part = format!("{} {} ({}", count, label, quoted.join(", "));
    if count > quoted.len() {
        part.push_str(", …");
    }
    part.push(')');
    part
}

/// "a", "a et b", "a, b et c".
fn enumerate_french(parts: &[String]) -> String {
    match parts {
        [] => String::new(),
        [only] => only.clone(),
        [head @ .., last] => format!("{} et {}", head.join(", "), last),
    }
}

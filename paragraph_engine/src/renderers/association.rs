//! Association annotation rendering.
//!
//! Association fields are compact multi-code strings using two
//! separators: commas between independent associations and colons
//! between a code and its qualifiers (often a bracketed catalogue
//! cross-reference). The renderer is deliberately heuristic; it covers
//! the code combinations that occur in practice and leans on the
//! composer's patch table for the handful of cases it gets wrong.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// The association code that flips the paragraph's subject elsewhere.
pub const EXTRAGALACTIC_CODE: &str = "EXGAL";

/// Code -> canonical phrase lexicon for association annotations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssociationLexicon {
    phrases: HashMap<String, String>,
}

impl AssociationLexicon {
    /// The standard lexicon. Some phrases carry their own leading
    /// space or trailing full stop; the composer relies on that.
    pub fn standard() -> Self {
        let phrases = [
            (EXTRAGALACTIC_CODE, "an extragalactic pulsar"),
            ("SMC", " located in the Small Magellanic Cloud."),
            ("XRS", "an associated x-ray source"),
            ("GRS", "an associated gamma-ray source"),
            ("SNR", "a supernova remnant"),
            ("GC", "located in the globular cluster"),
            ("PWN", " located in the pulsar wind nebula"),
            ("LMC", " located in the Large Magellanic Cloud."),
            ("OPT", "the optical counterpart"),
        ]
        .into_iter()
        .map(|(code, phrase)| (code.to_string(), phrase.to_string()))
        .collect();
        Self { phrases }
    }

    /// The phrase for a code, if it is a known association code.
    pub fn get(&self, code: &str) -> Option<&str> {
        self.phrases.get(code).map(String::as_str)
    }
}

impl Default for AssociationLexicon {
    fn default() -> Self {
        Self::standard()
    }
}

/// A rendered association fragment plus the flag that changes the
/// subject of the hemisphere sentence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedAssociation {
    pub text: String,
    pub extragalactic: bool,
}

/// Render an association annotation into a sentence fragment.
///
/// Returns `None` only for the unknown sentinel; an annotation with no
/// separators renders as an empty fragment.
pub fn render_association(lexicon: &AssociationLexicon, raw: &str) -> Option<RenderedAssociation> {
    let assoc = raw.trim();
    if assoc.contains('*') {
        return None;
    }

    let mut text = String::new();
    let mut extragalactic = false;

    if assoc.contains(',') {
        let segments: Vec<&str> = assoc.split(',').collect();
        let mut fragment = String::new();
        let mut current = String::new();
        for (idx, segment) in segments.iter().enumerate() {
            let count = idx + 1;
            if segment.contains(':') {
                let parts: Vec<&str> = segment.split(':').collect();
                for item in &parts {
                    let item = item.trim();
                    match lexicon.get(item) {
                        Some(phrase) if extragalactic => fragment.push_str(phrase),
                        Some(phrase) if item == EXTRAGALACTIC_CODE => {
                            fragment = phrase.to_string();
                            extragalactic = true;
                        }
                        Some(phrase) => {
                            if count < segments.len() && count != 1 {
                                fragment.push_str(" and ");
                            }
                            if fragment.contains("with") || fragment.contains("and") {
                                fragment = phrase.to_string();
                            } else {
                                fragment.push_str(phrase);
                            }
                        }
                        None if item.contains('[') && item.len() > 9 => {
                            let reference = &item[..item.find('[').unwrap_or(item.len())];
                            fragment.push_str(&format!(" ({reference})"));
                            fragment.push_str(list_separator(count, segments.len()));
                        }
                        None if item.contains('[') => {
                            fragment = fragment.replace("the", "an");
                            fragment.push_str(list_separator(count, segments.len()));
                        }
                        None => {
                            if count < parts.len() {
                                fragment.push_str(" with");
                            }
                            fragment.push_str(&format!(" ({item})"));
                            if count == segments.len() {
                                fragment.push('.');
                            }
                        }
                    }
                    current = fragment.clone();
                }
            }
            text.push_str(&current);
        }
    } else if assoc.contains(':') {
        let parts: Vec<&str> = assoc.split(':').collect();
        let mut fragment = String::new();
        for (idx, item) in parts.iter().enumerate() {
            let count = idx + 1;
            let item = item.trim();
            match lexicon.get(item) {
                Some(phrase) if extragalactic => fragment.push_str(phrase),
                Some(phrase) if item == EXTRAGALACTIC_CODE => {
                    fragment = phrase.to_string();
                    extragalactic = true;
                }
                Some(phrase) => {
                    fragment = format!(" and has {phrase}");
                }
                None if item.contains('[') && item.len() > 9 => {
                    let reference = &item[..item.find('[').unwrap_or(item.len())];
                    fragment.push_str(&format!(" ({reference})"));
                    if count < parts.len() {
                        fragment.push_str(" and has ");
                    } else {
                        fragment.push_str(". ");
                    }
                }
                None if item.contains('[') => {
                    fragment = fragment.replace("the", "an");
                }
                None => {
                    fragment.push_str(&format!(" {item}"));
                    if count < parts.len() {
                        fragment.push_str("and has ");
                    } else {
                        fragment.push_str(". ");
                    }
                }
            }
        }
        text.push_str(&fragment);
    }

    Some(RenderedAssociation { text, extragalactic })
}

// Position-dependent list punctuation for comma-separated associations.
fn list_separator(count: usize, total: usize) -> &'static str {
    if count + 1 < total {
        ", "
    } else if count < total {
        " and "
    } else {
        "."
    }
}

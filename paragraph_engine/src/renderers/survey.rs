//! Survey code lookup.
//!
//! The survey catalogue maps the catalogue's short discovery-survey
//! codes to human-readable survey names. It is meant to be exhaustive
//! for valid codes, so a miss is reported as an error, never skipped.

use serde::{Deserialize, Serialize};

use crate::ParagraphError;

/// One survey code with its display name. The code doubles as the slug
/// of the survey's reference page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyEntry {
    pub code: String,
    pub name: String,
}

/// Ordered code -> name catalogue for discovery surveys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyCatalogue {
    entries: Vec<SurveyEntry>,
}

impl SurveyCatalogue {
    /// Build a catalogue from `(code, name)` pairs.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(code, name)| SurveyEntry {
                    code: code.into(),
                    name: name.into(),
                })
                .collect(),
        }
    }

    /// The standard survey catalogue.
    pub fn standard() -> Self {
        Self::from_pairs([
            ("ar1", "the first Arecibo survey"),
            ("ar2", "the second Arecibo survey"),
            ("ar3", "the third Arecibo survey"),
            ("ar4", "the fourth Arecibo survey"),
            ("gb1", "the Green Bank northern hemisphere survey"),
            ("gb2", "the Princeton-NRAO survey"),
            ("gb3", "the Green Bank short-period survey"),
            ("gb4", "the Green Bank fast pulsar survey"),
            ("gb350", "the Green Bank 350 MHz drift-scan survey"),
            ("gbncc", "the Green Bank North Celestial Cap survey"),
            ("jb1", "the Jodrell Bank 10-m survey"),
            ("jb2", "the Jodrell Bank B survey"),
            ("mol1", "the first Molonglo survey"),
            ("mol2", "the second Molonglo survey"),
            ("pks1", "the Parkes 20 cm survey"),
            ("pks70", "the Parkes Southern Sky survey"),
            ("pksmb", "the Parkes multibeam pulsar survey"),
            ("pkssw", "the Parkes Swinburne intermediate latitude survey"),
            ("pkshl", "the Parkes high-latitude survey"),
            ("pkspa", "the Parkes Perseus Arm survey"),
            ("pks1m", "the Parkes deep multibeam survey"),
            ("htru_eff", "the High Time Resolution Universe survey (Effelsberg)"),
            ("htru_pks", "the High Time Resolution Universe survey (Parkes)"),
            ("htru_low", "the High Time Resolution Universe low-latitude survey"),
            ("palfa", "the Arecibo PALFA survey"),
            ("ar327", "the Arecibo 327 MHz drift-scan survey"),
            ("fermi", "Fermi gamma-ray observations"),
            ("FermiBlind", "the Fermi-LAT blind survey"),
            ("FermiAssoc", "searches of Fermi-LAT source positions"),
            ("lotaas", "the LOFAR Tied-Array All-Sky survey"),
            ("chime", "the CHIME pulsar survey"),
            ("gmrt", "the Giant Metrewave Radio Telescope survey"),
            ("ghrss", "the GMRT High Resolution Southern Sky survey"),
            ("fast", "the FAST Galactic Plane Pulsar Snapshot survey"),
            ("fast_crafts", "the FAST drift-scan survey (CRAFTS)"),
            ("mwa", "the Murchison Widefield Array survey"),
            ("meerkat_trapum", "the MeerKAT TRAPUM survey"),
            ("misc", "miscellaneous observations"),
        ])
    }

    /// Look up a single survey code.
    pub fn lookup(&self, code: &str) -> Result<&SurveyEntry, ParagraphError> {
        let code = code.trim();
        self.entries
            .iter()
            .find(|entry| entry.code == code)
            .ok_or_else(|| ParagraphError::UnknownSurveyCode {
                code: code.to_string(),
            })
    }

    /// The first code of a possibly comma-separated survey field; only
    /// the discovery survey is described.
    pub fn primary_code(field: &str) -> &str {
        field.split(',').next().unwrap_or(field).trim()
    }
}

impl Default for SurveyCatalogue {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_code() {
        let catalogue = SurveyCatalogue::standard();
        let entry = catalogue.lookup("pksmb").unwrap();
        assert_eq!(entry.name, "the Parkes multibeam pulsar survey");
    }

    #[test]
    fn test_lookup_unknown_code_is_an_error() {
        let catalogue = SurveyCatalogue::standard();
        let err = catalogue.lookup("nonsense").unwrap_err();
        assert_eq!(
            err,
            ParagraphError::UnknownSurveyCode {
                code: "nonsense".to_string()
            }
        );
    }

    #[test]
    fn test_primary_code_takes_first_token() {
        assert_eq!(SurveyCatalogue::primary_code("pksmb,pkshl"), "pksmb");
        assert_eq!(SurveyCatalogue::primary_code(" htru_pks "), "htru_pks");
    }

    #[test]
    fn test_catalogue_round_trips_through_json() {
        let catalogue = SurveyCatalogue::standard();
        let json = serde_json::to_string(&catalogue).unwrap();
        let back: SurveyCatalogue = serde_json::from_str(&json).unwrap();
        assert_eq!(back, catalogue);
    }
}

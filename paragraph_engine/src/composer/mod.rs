//! Paragraph composition - stitches per-field fragments into one
//! narrative and repairs known grammatical artifacts.
//!
//! Slots are concatenated in a fixed order: name+period, dispersion
//! measure, flux density, hemisphere, associations, period derivative,
//! orbital period, eccentricity, age, surface field, transverse
//! velocity, distance, companion mass, discovery year, survey. Each
//! slot either contributes a fragment or the empty string; which slot
//! introduces the subject ("PSR X" versus "It") depends on what the
//! neighbouring slots rendered.

use std::collections::HashSet;

use pulsar_catalogue::{PulsarRecord, SpinDown};
use serde::{Deserialize, Serialize};

use crate::gates::GateSet;
use crate::renderers::{
    distance_sentence, hemisphere, render_association, spin_down_sentence, AssociationLexicon,
    SurveyCatalogue, SurveyEntry,
};
use crate::ParagraphError;

/// A discovery date equal to this value is a known catalogue artifact,
/// not a year; it suppresses the year and survey sentences.
const DISCOVERY_DATE_ARTIFACT: f64 = 1_089_806_188.0;

/// How pulsar names and survey references are marked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LinkStyle {
    /// No markup; names render as plain text.
    Plain,
    /// Wiki form, `[[url|text]]`.
    Wiki,
    /// HTML anchor form, `<a href="url">text</a>`.
    Html,
}

/// Construction-time configuration for the composer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComposerConfig {
    pub link_style: LinkStyle,

    /// Pulsars that have a page to link to; names outside this set
    /// render as plain text even when links are enabled.
    pub linkable_pulsars: HashSet<String>,

    /// Base URL for per-pulsar pages.
    pub pulsar_link_base: String,

    /// Base URL for survey reference pages.
    pub survey_link_base: String,
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self {
            link_style: LinkStyle::Plain,
            linkable_pulsars: HashSet::new(),
            pulsar_link_base: "https://pulsars.org.au/fold/meertime/".to_string(),
            survey_link_base: "https://astronomy.swin.edu.au/~mbailes/encyc/".to_string(),
        }
    }
}

/// The paragraph composer. Holds the immutable lookup tables and the
/// markup configuration; one instance serves any number of records.
pub struct ParagraphComposer {
    config: ComposerConfig,
    gates: GateSet,
    surveys: SurveyCatalogue,
    associations: AssociationLexicon,
}

impl ParagraphComposer {
    /// Create a composer with the standard tables.
    pub fn new(config: ComposerConfig) -> Self {
        Self {
            config,
            gates: GateSet::standard(),
            surveys: SurveyCatalogue::standard(),
            associations: AssociationLexicon::standard(),
        }
    }

    /// Create a composer with default configuration and standard tables.
    pub fn with_defaults() -> Self {
        Self::new(ComposerConfig::default())
    }

    /// Create a composer with custom tables.
    pub fn with_tables(
        config: ComposerConfig,
        gates: GateSet,
        surveys: SurveyCatalogue,
        associations: AssociationLexicon,
    ) -> Self {
        Self {
            config,
            gates,
            surveys,
            associations,
        }
    }

    /// Compose the descriptive paragraph for one record.
    pub fn compose(&self, record: &PulsarRecord) -> Result<String, ParagraphError> {
        let name = record.psrj.trim();
        let spin = SpinDown::from_record(record);

        let period_phrase = self.gates.period.classify(record.p0);
        let dm_phrase = self.gates.dm.classify(record.dm);
        let s1400_phrase = self.gates.s1400.classify(record.s1400);
        let pb_phrase = self.gates.pb.classify(record.pb);
        let ecc_phrase = self.gates.ecc.classify(record.ecc);
        let age_phrase = self.gates.age.classify(spin.age);
        let bsurf_phrase = self.gates.bsurf.classify(spin.bsurf);
        let vtrans_phrase = self.gates.vtrans.classify(record.vtrans);
        let minmass_phrase = self.gates.minmass.classify(record.minmass);

        let hemisphere_name = record.decj.as_deref().and_then(hemisphere);
        let association = record
            .assoc
            .as_deref()
            .and_then(|a| render_association(&self.associations, a));

        // The survey catalogue is exhaustive; an unknown code aborts the
        // whole paragraph rather than silently dropping the sentence.
        let survey = match record.survey.as_deref() {
            Some(field) => Some(self.surveys.lookup(SurveyCatalogue::primary_code(field))?),
            None => None,
        };

        // Name and period anchor the paragraph.
        let display_name = self.display_name(name);
        let alt_name = record
            .psrb
            .as_deref()
            .map(|b| format!(" ({})", b.trim()))
            .unwrap_or_default();
        let period_str = match &period_phrase {
            Some(p) => {
                let sentence = format!("PSR {display_name}{alt_name} is {p}");
                if dm_phrase.is_some() {
                    sentence
                } else {
                    format!("{sentence}.")
                }
            }
            None => String::new(),
        };

        let dm_str = dm_phrase
            .map(|p| format!(" and has {p}."))
            .unwrap_or_default();

        let s1400_str = s1400_phrase
            .map(|p| format!(" It is {p}."))
            .unwrap_or_default();

        let assoc_str = match &association {
            Some(a) if a.extragalactic => format!("It is {}", a.text),
            Some(a) => a.text.clone(),
            None => String::new(),
        };

        let dec_str = match hemisphere_name {
            Some(h) => {
                let subject = if !s1400_str.is_empty() {
                    format!(" PSR {name} ")
                } else {
                    " It ".to_string()
                };
                let extragalactic = association.as_ref().is_some_and(|a| a.extragalactic);
                if extragalactic || assoc_str.is_empty() {
                    format!("{subject}is a {h} pulsar. ")
                } else if assoc_str.contains("47Tuc") || assoc_str.contains("and has") {
                    format!("{subject}is a {h} pulsar ")
                } else {
                    format!("{subject}is a {h} pulsar with ")
                }
            }
            None => String::new(),
        };

        let p1_str = spin_down_sentence(name, spin.pdot);

        let (pb_str, pb_has_subject) = match &pb_phrase {
            Some(p) => {
                let sentence = if ecc_phrase.is_some() {
                    format!(" PSR {name} {p}")
                } else {
                    format!(" PSR {name} {p}.")
                };
                (sentence, true)
            }
            None => (String::new(), false),
        };

        let ecc_str = match &ecc_phrase {
            Some(e) => {
                if pb_str.is_empty() {
                    format!(" PSR {name} has {e}.")
                } else {
                    format!(" and {e}.")
                }
            }
            None => String::new(),
        };

        // The age slot takes the pronoun when the orbital-period slot
        // already introduced the subject; surface field and transverse
        // velocity each look one slot back the same way.
        let (age_str, age_has_subject) = match &age_phrase {
            Some(a) => {
                if pb_has_subject {
                    (format!(" It is {a}."), false)
                } else {
                    (format!(" PSR {name} is {a}."), true)
                }
            }
            None => (String::new(), false),
        };

        let (bsurf_str, bsurf_has_subject) = match &bsurf_phrase {
            Some(b) => {
                if age_has_subject {
                    (format!(" It has {b}."), false)
                } else {
                    (format!(" PSR {name} has {b}."), true)
                }
            }
            None => (String::new(), false),
        };

        let vtrans_str = match &vtrans_phrase {
            Some(v) => {
                if bsurf_has_subject {
                    format!(" It has {v}.")
                } else {
                    format!(" PSR {name} has {v}.")
                }
            }
            None => String::new(),
        };

        let assoc_text = association.as_ref().map(|a| a.text.as_str()).unwrap_or("");
        let dist_str = record
            .dist
            .known()
            .map(|d| distance_sentence(name, d, assoc_text))
            .unwrap_or_default();

        // The companion-mass slot always says something. Its leading
        // space comes from the distance sentence when that rendered.
        let minmass_str = {
            let lead = if record.dist.is_known() { "" } else { " " };
            match &minmass_phrase {
                Some(m) => format!("{lead}This pulsar has {m}."),
                None => format!("{lead}This pulsar appears to be solitary."),
            }
        };

        let year_str = match record.date.known() {
            Some(d) if d == DISCOVERY_DATE_ARTIFACT => String::new(),
            Some(d) => {
                let year = d as i64;
                if survey.is_some() {
                    format!(" PSR {name} was discovered in {year}")
                } else {
                    format!(" PSR {name} was discovered in {year}.")
                }
            }
            None => String::new(),
        };

        let survey_str = match survey {
            Some(entry) if !year_str.is_empty() => {
                format!(" as part of {}.", self.survey_reference(entry))
            }
            _ => String::new(),
        };

        let paragraph = format!(
            "{period_str}{dm_str}{s1400_str}{dec_str}{assoc_str}{p1_str}{pb_str}{ecc_str}\
             {age_str}{bsurf_str}{vtrans_str}{dist_str}{minmass_str}{year_str}{survey_str}"
        );
        Ok(apply_grammar_patches(&paragraph))
    }

    fn display_name(&self, name: &str) -> String {
        if !self.config.linkable_pulsars.contains(name) {
            return name.to_string();
        }
        let base = &self.config.pulsar_link_base;
        match self.config.link_style {
            LinkStyle::Plain => name.to_string(),
            LinkStyle::Wiki => format!("[[{base}{name}|{name}]]"),
            LinkStyle::Html => format!("<a href=\"{base}{name}\">{name}</a>"),
        }
    }

    fn survey_reference(&self, entry: &SurveyEntry) -> String {
        let base = &self.config.survey_link_base;
        match self.config.link_style {
            LinkStyle::Plain => entry.name.clone(),
            LinkStyle::Wiki => format!("[[{base}{}_plots.html|{}]]", entry.code, entry.name),
            LinkStyle::Html => {
                format!("<a href=\"{base}{}_plots.html\">{}</a>", entry.code, entry.name)
            }
        }
    }
}

/// The grammar patch table: literal substring repairs for artifacts the
/// association renderer and slot gluing are known to produce.
///
/// Applied unconditionally, one pass each, in exactly this order; later
/// patches assume earlier ones already ran. A patch that finds nothing
/// is a normal outcome.
pub const GRAMMAR_PATCHES: &[(&str, &str)] = &[
    ("(47Tuc)an", "47Tuc with an"),
    ("with 47Tuc", "47Tuc"),
    ("and has located", "located"),
    (".an extragalactic pulsar located in the Small Magellanic Cloud.", " with "),
    ("with and", "and"),
    (".an extragalactic pulsar located in the Large Magellanic Cloud.", ", and has "),
    (
        "It is a gamma-ray source (4FGL_J0540.3-6920), an extragalactic pulsar located in the \
         Large Magellanic Cloud.an extragalactic pulsar located in the Large Magellanic Cloud.",
        "It is an extragalactic pulsar located in the Large Magellanic Cloud, with a gamma-ray \
         source (4FGL_J0540.3-6920) and ",
    ),
    (
        "a gamma-ray source (4FGL_J0540.3-6920), an extragalactic pulsar located in the Large \
         Magellanic Cloud,",
        "an extragalactic pulsar located in the Large Magellanic Cloud with a gamma-ray source \
         (4FGL_J0540.3-6920)",
    ),
    ("(?)", ""),
    (")a", ") a"),
    (")an", ") an"),
    ("and located", "and is located"),
    ("and  located", "and is located"),
    (", located", ", is located"),
    (",  located", ", is located"),
    ("and an", "and has an"),
    ("and  an", "and has an"),
    (" ()", ""),
    (" with (", " ("),
    ("  with (", " ("),
    (" with  (", " ("),
    ("  with  (", " ("),
    ("with located", "located"),
    ("with  located", "located"),
    (") an", ") and an"),
    (")  an", ") and an"),
    (") a ", ") and a "),
    (")  a ", ") and a "),
    ("the optical counterpart.", "an optical counterpart."),
    ("and and", "and"),
    ("and  and", "and"),
    (" and a supernova remnant (Vela)", ""),
    ("and an associated x-ray source (Swift_J063343.8+063223)", ""),
    (" and an associated gamma-ray source (HESS_J1023-575)", ""),
    (")) and an optical counterpart", ")) with an optical counterpart"),
    (" and an associated gamma-ray source (1AGL_J)", ""),
    ("It is an associated gamma-ray source", "It has an associated gamma-ray source"),
];

/// Apply the grammar patch table to a composed paragraph.
pub fn apply_grammar_patches(paragraph: &str) -> String {
    let mut text = paragraph.to_string();
    for (find, replace) in GRAMMAR_PATCHES {
        text = text.replace(find, replace);
    }
    text
}

//! Bespoke renderers for the fields that are not simple numeric gates.

mod association;
mod survey;

pub use association::*;
pub use survey::*;

use pulsar_catalogue::FieldValue;

use crate::gates::format_scientific;

/// Derive the hemisphere from the sign embedded in a declination string.
///
/// Returns `None` for the unknown sentinel and for strings carrying no
/// sign at all.
pub fn hemisphere(decj: &str) -> Option<&'static str> {
    let dec = decj.trim();
    if dec.contains('*') {
        None
    } else if dec.contains('+') {
        Some("Northern Hemisphere")
    } else if dec.contains('-') {
        Some("Southern Hemisphere")
    } else {
        None
    }
}

/// Render the period-derivative sentence.
///
/// Three outcomes: no measurement, a normal positive derivative, or the
/// unusual negative case, which explicitly states that no age or field
/// estimate is possible rather than attempting one.
pub fn spin_down_sentence(name: &str, pdot: FieldValue) -> String {
    match pdot.known() {
        None => format!(" PSR {name} has no measured period derivative."),
        Some(p) if p < 0.0 => format!(
            " This pulsar has an unusual negative period derivative of {}. \
             Because it is negative, it has no estimate of implied magnetic \
             field strength or characteristic age.",
            format_scientific(p, 2)
        ),
        Some(p) => format!(
            " This pulsar has a period derivative of {}.",
            format_scientific(p, 2)
        ),
    }
}

/// Literature distances to globular clusters, kpc, overriding the
/// catalogue distance when the rendered association names the cluster.
///
/// Checked in order, first substring match wins. The order resolves
/// ambiguous prefixes (M22 and M28 sit before M2), so never re-sort it.
pub const CLUSTER_DISTANCES_KPC: &[(&str, f64)] = &[
    ("47Tuc", 4.5),
    ("M10", 4.4),
    ("M13", 7.1),
    ("M14", 9.3),
    ("M15", 10.4),
    ("M22", 3.2),
    ("M28", 5.5),
    ("M2", 11.5),
    ("M30", 8.1),
    ("NGC5272", 10.2),
    ("M4", 2.2),
    ("M53", 17.9),
    ("M5", 7.5),
    ("M62", 6.8),
    ("M71", 4.0),
    ("NGC1851", 12.1),
    ("NGC5986", 10.4),
    ("NGC6341", 8.3),
    ("NGC6397", 2.3),
    ("NGC6440", 8.5),
    ("NGC6441", 11.6),
    ("NGC6517", 10.6),
    ("NGC6522", 7.7),
    ("NGC6539", 7.8),
    ("NGC6544", 3.0),
    ("NGC6624", 7.9),
    ("NGC6652", 10.0),
    ("NGC_6712", 6.9),
    ("NGC6749", 7.9),
    ("NGC6752", 4.0),
    ("NGC6760", 7.4),
    ("OmegaCen", 5.2),
    ("Ter5", 6.9),
    ("NGC6342", 8.5),
];

/// Distance override for pulsars whose association names a globular
/// cluster with a better literature distance.
pub fn cluster_distance_override(association_text: &str) -> Option<f64> {
    CLUSTER_DISTANCES_KPC
        .iter()
        .find(|(cluster, _)| association_text.contains(cluster))
        .map(|&(_, kpc)| kpc)
}

/// Render the distance sentence.
///
/// Distances past 15 kpc come from the model's far tail and are called
/// out as suspicious.
pub fn distance_sentence(name: &str, dist_kpc: f64, association_text: &str) -> String {
    let dist_kpc = cluster_distance_override(association_text).unwrap_or(dist_kpc);
    let dist_pc = (dist_kpc * 1000.0) as i64;
    if dist_pc < 15_000 {
        format!(" The estimated distance to {name} is {dist_pc} pc. ")
    } else {
        format!(
            " The YMD distance model suggests that the distance to {name} is \
             {dist_pc} pc, but that is suspicious. "
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hemisphere_from_sign() {
        assert_eq!(hemisphere("+30:12:01"), Some("Northern Hemisphere"));
        assert_eq!(hemisphere("-47:15:09.1"), Some("Southern Hemisphere"));
        assert_eq!(hemisphere("*"), None);
        assert_eq!(hemisphere("471509"), None);
    }

    #[test]
    fn test_spin_down_sentence_positive() {
        let s = spin_down_sentence("J0437-4715", FieldValue::Known(5.73e-20));
        assert_eq!(s, " This pulsar has a period derivative of 5.73e-20.");
    }

    #[test]
    fn test_spin_down_sentence_negative() {
        let s = spin_down_sentence("J0024-7204", FieldValue::Known(-3.1e-15));
        assert!(s.contains("unusual negative period derivative of -3.10e-15"));
        assert!(s.contains("no estimate of implied magnetic field strength or characteristic age"));
    }

    #[test]
    fn test_spin_down_sentence_missing() {
        let s = spin_down_sentence("J1234+5678", FieldValue::Unknown);
        assert_eq!(s, " PSR J1234+5678 has no measured period derivative.");
    }

    #[test]
    fn test_cluster_override_beats_catalogue_distance() {
        let text = "located in the globular cluster (47Tuc)";
        assert_eq!(cluster_distance_override(text), Some(4.5));
        let sentence = distance_sentence("J0024-7204C", 9.9, text);
        assert_eq!(sentence, " The estimated distance to J0024-7204C is 4500 pc. ");
    }

    #[test]
    fn test_cluster_override_prefers_specific_names() {
        // M22 must win over its prefix M2.
        assert_eq!(cluster_distance_override("in the globular cluster (M22)"), Some(3.2));
        assert_eq!(cluster_distance_override("in the globular cluster (M2)"), Some(11.5));
    }

    #[test]
    fn test_far_distance_is_flagged() {
        let sentence = distance_sentence("J0000+0000", 25.0, "");
        assert!(sentence.contains("YMD distance model"));
        assert!(sentence.contains("25000 pc, but that is suspicious"));
    }
}

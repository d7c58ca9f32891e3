//! Catalogue record types - one row of named physical values per pulsar.

use serde::{Deserialize, Serialize};

/// A single numeric quantity as reported by the catalogue.
///
/// The catalogue marks missing measurements with a `*` cell or a
/// not-a-number value. Both collapse to [`FieldValue::Unknown`] at the
/// ingestion boundary so classifier and composer logic never have to
/// distinguish the two.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    Known(f64),
    Unknown,
}

impl FieldValue {
    /// Parse a raw catalogue cell.
    ///
    /// Empty cells, cells containing the `*` sentinel, and anything that
    /// does not parse to a finite number all become [`FieldValue::Unknown`].
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() || raw.contains('*') {
            return FieldValue::Unknown;
        }
        // Some catalogue exports carry Fortran-style exponents (1.2D-15).
        let normalized = raw.replace(['D', 'd'], "E");
        match normalized.parse::<f64>() {
            Ok(v) if v.is_finite() => FieldValue::Known(v),
            _ => FieldValue::Unknown,
        }
    }

    /// The measured value, if there is one.
    pub fn known(self) -> Option<f64> {
        match self {
            FieldValue::Known(v) => Some(v),
            FieldValue::Unknown => None,
        }
    }

    /// Whether a measurement is present.
    pub fn is_known(self) -> bool {
        matches!(self, FieldValue::Known(_))
    }

    /// Lift an optional computation result back into a field value.
    pub fn from_option(value: Option<f64>) -> Self {
        match value {
            Some(v) if v.is_finite() => FieldValue::Known(v),
            _ => FieldValue::Unknown,
        }
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        if value.is_finite() {
            FieldValue::Known(value)
        } else {
            FieldValue::Unknown
        }
    }
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Unknown
    }
}

/// Parse a raw textual catalogue cell (DECJ, ASSOC, SURVEY, PSRB).
///
/// The `*` sentinel and empty cells become `None`; everything else is
/// kept verbatim, trimmed.
pub fn text_field(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() || raw.contains('*') {
        None
    } else {
        Some(raw.to_string())
    }
}

/// One catalogue row. Field names follow the catalogue's parameter codes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PulsarRecord {
    /// J2000 name, e.g. "J0437-4715". The only field that must be present.
    pub psrj: String,

    /// B1950 name, when the pulsar has one.
    pub psrb: Option<String>,

    /// Spin period, seconds.
    pub p0: FieldValue,

    /// Spin period derivative, s/s.
    pub p1: FieldValue,

    /// Dispersion measure, pc/cc.
    pub dm: FieldValue,

    /// Flux density at 1400 MHz, mJy.
    pub s1400: FieldValue,

    /// Orbital period, days.
    pub pb: FieldValue,

    /// Orbital eccentricity.
    pub ecc: FieldValue,

    /// Minimum companion mass, solar masses.
    pub minmass: FieldValue,

    /// Characteristic age, years, as supplied by the catalogue.
    pub age: FieldValue,

    /// Surface magnetic field strength, Gauss, as supplied by the catalogue.
    pub bsurf: FieldValue,

    /// Transverse velocity, km/s.
    pub vtrans: FieldValue,

    /// Best distance estimate, kpc.
    pub dist: FieldValue,

    /// Declination string, e.g. "-47:15:09.1".
    pub decj: Option<String>,

    /// Compact association annotation, e.g. "GC:47Tuc".
    pub assoc: Option<String>,

    /// Year of discovery.
    pub date: FieldValue,

    /// Discovery survey code(s), comma separated.
    pub survey: Option<String>,
}

impl PulsarRecord {
    /// Create a record with the given J2000 name and every field unknown.
    pub fn new(psrj: impl Into<String>) -> Self {
        Self {
            psrj: psrj.into(),
            psrb: None,
            p0: FieldValue::Unknown,
            p1: FieldValue::Unknown,
            dm: FieldValue::Unknown,
            s1400: FieldValue::Unknown,
            pb: FieldValue::Unknown,
            ecc: FieldValue::Unknown,
            minmass: FieldValue::Unknown,
            age: FieldValue::Unknown,
            bsurf: FieldValue::Unknown,
            vtrans: FieldValue::Unknown,
            dist: FieldValue::Unknown,
            decj: None,
            assoc: None,
            date: FieldValue::Unknown,
            survey: None,
        }
    }

    /// Set the B1950 name.
    pub fn with_psrb(mut self, psrb: impl Into<String>) -> Self {
        self.psrb = Some(psrb.into());
        self
    }

    /// Set the spin period, seconds.
    pub fn with_p0(mut self, p0: f64) -> Self {
        self.p0 = p0.into();
        self
    }

    /// Set the period derivative, s/s.
    pub fn with_p1(mut self, p1: f64) -> Self {
        self.p1 = p1.into();
        self
    }

    /// Set the dispersion measure, pc/cc.
    pub fn with_dm(mut self, dm: f64) -> Self {
        self.dm = dm.into();
        self
    }

    /// Set the 1400 MHz flux density, mJy.
    pub fn with_s1400(mut self, s1400: f64) -> Self {
        self.s1400 = s1400.into();
        self
    }

    /// Set the orbital period, days.
    pub fn with_pb(mut self, pb: f64) -> Self {
        self.pb = pb.into();
        self
    }

    /// Set the orbital eccentricity.
    pub fn with_ecc(mut self, ecc: f64) -> Self {
        self.ecc = ecc.into();
        self
    }

    /// Set the minimum companion mass, solar masses.
    pub fn with_minmass(mut self, minmass: f64) -> Self {
        self.minmass = minmass.into();
        self
    }

    /// Set the catalogue characteristic age, years.
    pub fn with_age(mut self, age: f64) -> Self {
        self.age = age.into();
        self
    }

    /// Set the catalogue surface field strength, Gauss.
    pub fn with_bsurf(mut self, bsurf: f64) -> Self {
        self.bsurf = bsurf.into();
        self
    }

    /// Set the transverse velocity, km/s.
    pub fn with_vtrans(mut self, vtrans: f64) -> Self {
        self.vtrans = vtrans.into();
        self
    }

    /// Set the distance, kpc.
    pub fn with_dist(mut self, dist: f64) -> Self {
        self.dist = dist.into();
        self
    }

    /// Set the declination string.
    pub fn with_decj(mut self, decj: impl Into<String>) -> Self {
        self.decj = Some(decj.into());
        self
    }

    /// Set the association annotation.
    pub fn with_assoc(mut self, assoc: impl Into<String>) -> Self {
        self.assoc = Some(assoc.into());
        self
    }

    /// Set the discovery year.
    pub fn with_date(mut self, date: f64) -> Self {
        self.date = date.into();
        self
    }

    /// Set the survey code field.
    pub fn with_survey(mut self, survey: impl Into<String>) -> Self {
        self.survey = Some(survey.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_value() {
        assert_eq!(FieldValue::parse("0.00575"), FieldValue::Known(0.00575));
        assert_eq!(FieldValue::parse(" 12.5 "), FieldValue::Known(12.5));
    }

    #[test]
    fn test_parse_sentinel() {
        assert_eq!(FieldValue::parse("*"), FieldValue::Unknown);
        assert_eq!(FieldValue::parse("  *  "), FieldValue::Unknown);
        assert_eq!(FieldValue::parse(""), FieldValue::Unknown);
        assert_eq!(FieldValue::parse("NaN"), FieldValue::Unknown);
    }

    #[test]
    fn test_parse_fortran_exponent() {
        assert_eq!(FieldValue::parse("1.2D-15"), FieldValue::Known(1.2e-15));
    }

    #[test]
    fn test_nan_collapses_to_unknown() {
        assert_eq!(FieldValue::from(f64::NAN), FieldValue::Unknown);
        assert_eq!(FieldValue::from_option(Some(f64::INFINITY)), FieldValue::Unknown);
        assert_eq!(FieldValue::from_option(None), FieldValue::Unknown);
    }

    #[test]
    fn test_text_field() {
        assert_eq!(text_field(" -47:15:09.1 "), Some("-47:15:09.1".to_string()));
        assert_eq!(text_field("*"), None);
        assert_eq!(text_field(""), None);
    }

    #[test]
    fn test_record_builder() {
        let record = PulsarRecord::new("J0437-4715")
            .with_psrb("B0434-47")
            .with_p0(0.00575)
            .with_dm(2.64);

        assert_eq!(record.psrj, "J0437-4715");
        assert_eq!(record.psrb.as_deref(), Some("B0434-47"));
        assert!(record.p0.is_known());
        assert!(!record.age.is_known());
    }

    #[test]
    fn test_record_round_trips_through_json() {
        let record = PulsarRecord::new("J0737-3039A").with_p0(0.0226).with_ecc(0.0877);
        let json = serde_json::to_string(&record).unwrap();
        let back: PulsarRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back.psrj, "J0737-3039A");
        assert_eq!(back.p0, FieldValue::Known(0.0226));
    }
}

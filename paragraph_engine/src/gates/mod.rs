//! Gate tables - ordered half-open value ranges that map a physical
//! quantity onto a descriptive phrase with unit and formatting policy.

mod defaults;

pub use defaults::*;

use pulsar_catalogue::FieldValue;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Absolute magnitude at which fixed-point output switches to
/// scientific notation.
pub const SCIENTIFIC_THRESHOLD: f64 = 1e5;

/// How a classified value is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NumericStyle {
    /// Fixed-point with the table's decimal places, switching to
    /// scientific notation above [`SCIENTIFIC_THRESHOLD`].
    Fixed,
    /// Always scientific notation.
    Scientific,
    /// Rounded to the table's decimal places, then truncated to a
    /// whole number.
    Integer,
}

/// One classification rule: a `[lower, upper)` range plus the phrase
/// and unit policy used when a value lands inside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gate {
    /// Least value that passes into this gate.
    pub lower_bound: f64,

    /// Exclusive upper limit; the last gate of a table uses 1e99 as an
    /// effective infinity.
    pub upper_bound: f64,

    /// Adjectival phrase, e.g. "a youthful pulsar with an estimated age of".
    pub descriptor: String,

    /// Unit suffix; empty for dimensionless quantities.
    pub unit: String,

    /// Multiplier taking the looked-up value to its display unit.
    pub factor: f64,

    /// Rendering style for the scaled value.
    pub style: NumericStyle,
}

impl Gate {
    pub fn new(
        lower_bound: f64,
        upper_bound: f64,
        descriptor: impl Into<String>,
        unit: impl Into<String>,
        factor: f64,
        style: NumericStyle,
    ) -> Self {
        Self {
            lower_bound,
            upper_bound,
            descriptor: descriptor.into(),
            unit: unit.into(),
            factor,
            style,
        }
    }

    /// Half-open containment check: `lower <= value < upper`.
    pub fn contains(&self, value: f64) -> bool {
        self.lower_bound <= value && value < self.upper_bound
    }
}

/// Ordered gate table for one physical quantity.
///
/// Gates are checked in order and the first match wins; the source
/// tables keep ranges contiguous by convention but nothing enforces it.
/// Built once at startup and shared read-only across all records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GateTable {
    /// Quantity name, e.g. "period" or "dm".
    pub quantity: String,

    /// Decimal places used by the fixed and scientific styles.
    pub decimal_places: usize,

    /// Multiplier applied to the raw value before gate lookup, so that
    /// bounds and unit factors live in a self-consistent base unit
    /// (e.g. S1400 arrives in mJy but its gates are keyed in Jy).
    #[serde(default = "default_pre_scale")]
    pub pre_scale: f64,

    pub gates: Vec<Gate>,
}

fn default_pre_scale() -> f64 {
    1.0
}

impl GateTable {
    /// Create an empty table for the given quantity.
    pub fn new(quantity: impl Into<String>, decimal_places: usize) -> Self {
        Self {
            quantity: quantity.into(),
            decimal_places,
            pre_scale: 1.0,
            gates: Vec::new(),
        }
    }

    /// Set the lookup pre-scale.
    pub fn with_pre_scale(mut self, pre_scale: f64) -> Self {
        self.pre_scale = pre_scale;
        self
    }

    /// Append a gate. Order is significant.
    pub fn add_gate(&mut self, gate: Gate) {
        self.gates.push(gate);
    }

    /// Load a table from a TOML document.
    pub fn from_toml_str(input: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(input)
    }

    /// Load a table from a JSON document.
    pub fn from_json_str(input: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(input)
    }

    /// Classify a raw value into a rendered phrase.
    ///
    /// Returns `None` for an unknown value, for a value outside every
    /// gate, and for a value that is not positive once scaled and, for
    /// the fixed and integer styles, rounded. The last two cases are
    /// logged: the first indicates incomplete gate coverage, the second
    /// is a compatibility quirk that can hide legitimate small values.
    pub fn classify(&self, value: FieldValue) -> Option<String> {
        let raw = value.known()?;
        let value = raw * self.pre_scale;

        let Some(gate) = self.gates.iter().find(|g| g.contains(value)) else {
            debug!(
                quantity = %self.quantity,
                value,
                "value falls outside every gate"
            );
            return None;
        };

        if value <= 0.0 {
            debug!(quantity = %self.quantity, value, "suppressing non-positive value");
            return None;
        }

        let scaled = value * gate.factor;
        // Scientific output keeps its magnitude no matter how small the
        // value, so only the fixed and integer styles can round to zero.
        let display = match gate.style {
            NumericStyle::Fixed => round_to(scaled, self.decimal_places),
            NumericStyle::Scientific => scaled,
            NumericStyle::Integer => round_to(scaled, self.decimal_places).trunc(),
        };
        if display <= 0.0 {
            debug!(
                quantity = %self.quantity,
                scaled,
                "suppressing value that rounds to zero"
            );
            return None;
        }

        let text = match gate.style {
            NumericStyle::Fixed => format_float(scaled, self.decimal_places),
            NumericStyle::Scientific => format_scientific(scaled, self.decimal_places),
            NumericStyle::Integer => format!("{}", display as i64),
        };

        if gate.unit.is_empty() {
            Some(format!("{} {}", gate.descriptor, text))
        } else {
            Some(format!("{} {} {}", gate.descriptor, text, gate.unit))
        }
    }
}

fn round_to(value: f64, decimal_places: usize) -> f64 {
    let scale = 10f64.powi(decimal_places as i32);
    (value * scale).round() / scale
}

/// Fixed-point rendering that switches to scientific notation when the
/// magnitude reaches [`SCIENTIFIC_THRESHOLD`].
pub fn format_float(value: f64, decimal_places: usize) -> String {
    if value.abs() >= SCIENTIFIC_THRESHOLD {
        format_scientific(value, decimal_places)
    } else {
        format!("{value:.decimal_places$}")
    }
}

/// Scientific notation with a signed two-digit exponent, e.g. `1.50e+05`.
pub fn format_scientific(value: f64, precision: usize) -> String {
    if value == 0.0 {
        return format!("{:.precision$}e+00", 0.0);
    }
    let mut exponent = value.abs().log10().floor() as i32;
    let mut mantissa = value / 10f64.powi(exponent);
    // Rounding the mantissa can carry it to +-10.0.
    let scale = 10f64.powi(precision as i32);
    mantissa = (mantissa * scale).round() / scale;
    if mantissa.abs() >= 10.0 {
        mantissa /= 10.0;
        exponent += 1;
    }
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{:.precision$}e{}{:02}", mantissa, sign, exponent.abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn period_table() -> GateTable {
        GateSet::standard().period
    }

    #[test]
    fn test_lower_bound_is_inclusive() {
        // 0.002 s sits exactly on the boundary between the very fast
        // millisecond gate [0.001, 0.002) and the millisecond gate
        // [0.002, 0.008): the latter must win.
        let phrase = period_table().classify(FieldValue::Known(0.002)).unwrap();
        assert_eq!(phrase, "a millisecond pulsar with a period of 2.00 milliseconds");
    }

    #[test]
    fn test_upper_bound_is_exclusive() {
        let phrase = period_table().classify(FieldValue::Known(0.0019999)).unwrap();
        assert!(phrase.starts_with("a very fast millisecond pulsar"));
    }

    #[test]
    fn test_unknown_value_yields_none() {
        assert_eq!(period_table().classify(FieldValue::Unknown), None);
    }

    #[test]
    fn test_unmatched_value_yields_none() {
        // Below the lowest period gate.
        assert_eq!(period_table().classify(FieldValue::Known(0.0001)), None);
    }

    #[test]
    fn test_scale_round_trip() {
        let gate = &period_table().gates[1];
        let value = 0.00432;
        let scaled = value * gate.factor;
        assert!((scaled / gate.factor - value).abs() < 1e-12);
    }

    #[test]
    fn test_format_float_auto_switch() {
        assert_eq!(format_float(150_000.0, 2), "1.50e+05");
        assert_eq!(format_float(42.5, 2), "42.50");
    }

    #[test]
    fn test_format_scientific() {
        assert_eq!(format_scientific(1.34e-20, 2), "1.34e-20");
        assert_eq!(format_scientific(-3.1e-15, 2), "-3.10e-15");
        assert_eq!(format_scientific(2.64, 2), "2.64e+00");
        assert_eq!(format_scientific(9.999e4, 1), "1.0e+05");
    }

    #[test]
    fn test_integer_style_truncates() {
        let table = GateSet::standard().age;
        // 150 kyr lands in the Myr gate, scales to 0.15, truncates to 0,
        // and is suppressed. Documented compatibility behavior.
        assert_eq!(table.classify(FieldValue::Known(1.5e5)), None);
        // 50 kyr renders through the kyr gate.
        let phrase = table.classify(FieldValue::Known(5e4)).unwrap();
        assert_eq!(phrase, "a youthful pulsar with an estimated age of 50 kyr");
    }

    #[test]
    fn test_scientific_style_keeps_subresolution_values() {
        // 3.5e-7 rounds to zero at five fixed decimal places; the
        // scientific style must still render it, not suppress it.
        let table = GateSet::standard().ecc;
        let phrase = table.classify(FieldValue::Known(3.5e-7)).unwrap();
        assert_eq!(
            phrase,
            "an extremely circular orbit with an eccentricity of 3.50000e-07"
        );
        let phrase = table.classify(FieldValue::Known(1e-8)).unwrap();
        assert_eq!(
            phrase,
            "an extremely circular orbit with an eccentricity of 1.00000e-08"
        );
    }

    #[test]
    fn test_non_positive_value_suppressed() {
        let table = GateSet::standard().dm;
        assert_eq!(table.classify(FieldValue::Known(0.0)), None);
    }

    #[test]
    fn test_pre_scale_applies_before_lookup() {
        let table = GateSet::standard().s1400;
        // 0.05 mJy pre-scales to 5e-5 Jy, the microJy gate.
        let phrase = table.classify(FieldValue::Known(0.05)).unwrap();
        assert_eq!(
            phrase,
            "an extremely faint pulsar with a 1400 MHz catalogue flux density of 50.000 microJy"
        );
    }

    #[test]
    fn test_table_loads_from_toml() {
        let table = GateTable::from_toml_str(
            r#"
            quantity = "dm"
            decimal_places = 3

            [[gates]]
            lower_bound = 0.0
            upper_bound = 1e99
            descriptor = "a dispersion measure of"
            unit = "pc/cc"
            factor = 1.0
            style = "Fixed"
            "#,
        )
        .unwrap();

        assert_eq!(table.pre_scale, 1.0);
        let phrase = table.classify(FieldValue::Known(12.0)).unwrap();
        assert_eq!(phrase, "a dispersion measure of 12.000 pc/cc");
    }

    #[test]
    fn test_table_round_trips_through_json() {
        let table = GateSet::standard().ecc;
        let json = serde_json::to_string(&table).unwrap();
        let back = GateTable::from_json_str(&json).unwrap();
        assert_eq!(back, table);
    }
}

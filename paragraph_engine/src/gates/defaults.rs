//! The standard gate tables for the nine classified quantities.
//!
//! Bounds, phrases, unit factors, and styles reproduce the catalogue's
//! long-standing defaults. Order matters: first match wins.

use serde::{Deserialize, Serialize};

use super::{Gate, GateTable, NumericStyle};

/// The full complement of gate tables used by the composer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GateSet {
    pub period: GateTable,
    pub dm: GateTable,
    pub s1400: GateTable,
    pub pb: GateTable,
    pub ecc: GateTable,
    pub age: GateTable,
    pub bsurf: GateTable,
    pub vtrans: GateTable,
    pub minmass: GateTable,
}

impl GateSet {
    /// The standard tables.
    pub fn standard() -> Self {
        Self {
            period: period_table(),
            dm: dm_table(),
            s1400: s1400_table(),
            pb: pb_table(),
            ecc: ecc_table(),
            age: age_table(),
            bsurf: bsurf_table(),
            vtrans: vtrans_table(),
            minmass: minmass_table(),
        }
    }
}

impl Default for GateSet {
    fn default() -> Self {
        Self::standard()
    }
}

fn table(quantity: &str, decimal_places: usize, gates: Vec<Gate>) -> GateTable {
    let mut t = GateTable::new(quantity, decimal_places);
    for gate in gates {
        t.add_gate(gate);
    }
    t
}

fn period_table() -> GateTable {
    use NumericStyle::Fixed;
    table(
        "period",
        2,
        vec![
            Gate::new(0.001, 0.002, "a very fast millisecond pulsar with a period of", "milliseconds", 1000.0, Fixed),
            Gate::new(0.002, 0.008, "a millisecond pulsar with a period of", "milliseconds", 1000.0, Fixed),
            Gate::new(0.008, 0.02, "a relatively slow millisecond pulsar with a period of", "milliseconds", 1000.0, Fixed),
            Gate::new(0.02, 0.1, "a quite fast pulsar with a period of", "milliseconds", 1000.0, Fixed),
            Gate::new(0.1, 0.999, "a normal pulsar with a period of", "milliseconds", 1000.0, Fixed),
            Gate::new(1.0, 2.0, "a normal pulsar with a period of", "seconds", 1.0, Fixed),
            Gate::new(2.0, 5.0, "a fairly slow pulsar with a period of", "seconds", 1.0, Fixed),
            Gate::new(5.0, 10.0, "a very slow pulsar with a period of", "seconds", 1.0, Fixed),
            Gate::new(10.0, 10000.0, "an extremely slow pulsar with a period of", "seconds", 1.0, Fixed),
        ],
    )
}

fn dm_table() -> GateTable {
    use NumericStyle::Fixed;
    table(
        "dm",
        3,
        vec![
            Gate::new(0.0, 5.0, "an extremely low dispersion measure of", "pc/cc", 1.0, Fixed),
            Gate::new(5.0, 15.0, "a small dispersion measure of", "pc/cc", 1.0, Fixed),
            Gate::new(15.0, 30.0, "a fairly low dispersion measure of", "pc/cc", 1.0, Fixed),
            Gate::new(30.0, 100.0, "a moderate dispersion measure of", "pc/cc", 1.0, Fixed),
            Gate::new(100.0, 600.0, "a fairly large dispersion measure of", "pc/cc", 1.0, Fixed),
            Gate::new(600.0, 1000.0, "a quite high dispersion measure of", "pc/cc", 1.0, Fixed),
            Gate::new(1000.0, 1e99, "an extremely high dispersion measure of", "pc/cc", 1.0, Fixed),
        ],
    )
}

// S1400 arrives in mJy; the table is keyed in Jy so the unit factors
// stay self-consistent across the microJy/mJy/Jy display gates.
fn s1400_table() -> GateTable {
    use NumericStyle::Fixed;
    table(
        "s1400",
        3,
        vec![
            Gate::new(0.0, 1e-6, "an extremely faint pulsar with a 1400 MHz catalogue flux density of", "microJy", 1e6, Fixed),
            // Same phrase again; this gate only pins the microJy unit.
            Gate::new(1e-6, 1e-4, "an extremely faint pulsar with a 1400 MHz catalogue flux density of", "microJy", 1e6, Fixed),
            Gate::new(1e-4, 5e-4, "a faint pulsar with a 1400 MHz catalogue flux density of", "mJy", 1e3, Fixed),
            Gate::new(5e-4, 1e-3, "a weak pulsar with a 1400 MHz catalogue flux density of", "mJy", 1e3, Fixed),
            Gate::new(1e-3, 5e-3, "a moderately bright pulsar with a 1400 MHz catalogue flux density of", "mJy", 1e3, Fixed),
            Gate::new(5e-3, 2e-2, "a fairly bright pulsar with a 1400 MHz catalogue flux density of", "mJy", 1e3, Fixed),
            Gate::new(2e-2, 0.1, "a bright pulsar with a 1400 MHz catalogue flux density of", "mJy", 1e3, Fixed),
            Gate::new(0.1, 0.5, "a very bright pulsar with a 1400 MHz catalogue flux density of", "mJy", 1e3, Fixed),
            Gate::new(0.5, 1e99, "an extremely bright pulsar with a 1400 MHz catalogue flux density of", "Jy", 1.0, Fixed),
        ],
    )
    .with_pre_scale(1e-3)
}

fn pb_table() -> GateTable {
    use NumericStyle::Fixed;
    table(
        "pb",
        3,
        vec![
            Gate::new(0.0, 0.0833, "has an extremely tight orbital period of just", "hours", 24.0, Fixed),
            Gate::new(0.0833, 0.5, "has a very tight orbital period of just", "hours", 24.0, Fixed),
            Gate::new(0.5, 1.0, "has a quite tight orbital period of only", "hours", 24.0, Fixed),
            Gate::new(1.0, 2.0, "has a reasonably short orbital period of", "days", 1.0, Fixed),
            Gate::new(2.0, 10.0, "has a fairly typical orbital period of", "days", 1.0, Fixed),
            Gate::new(10.0, 50.0, "has a quite long orbital period of", "days", 1.0, Fixed),
            Gate::new(50.0, 365.0, "has a very long orbital period of", "days", 1.0, Fixed),
            Gate::new(365.0, 1e99, "has an extremely long orbital period of", "years", 0.002737850787, Fixed),
        ],
    )
}

fn ecc_table() -> GateTable {
    use NumericStyle::{Fixed, Scientific};
    table(
        "ecc",
        5,
        vec![
            Gate::new(0.0, 1e-6, "an extremely circular orbit with an eccentricity of", "", 1.0, Scientific),
            Gate::new(1e-6, 1e-5, "a very circular orbit with an eccentricity of", "", 1.0, Scientific),
            Gate::new(1e-5, 1e-4, "a very mildly eccentric orbit with an eccentricity of", "", 1.0, Scientific),
            Gate::new(1e-4, 0.01, "a mildly eccentric orbit with an eccentricity of", "", 1.0, Scientific),
            Gate::new(0.01, 0.1, "a reasonably eccentric orbit with an eccentricity of", "", 1.0, Fixed),
            Gate::new(0.1, 0.4, "an eccentric orbit with an eccentricity of", "", 1.0, Fixed),
            Gate::new(0.4, 0.8, "a highly eccentric orbit with an eccentricity of", "", 1.0, Fixed),
            Gate::new(0.8, 1.0, "an extremely eccentric orbit with an eccentricity of", "", 1.0, Fixed),
        ],
    )
}

fn age_table() -> GateTable {
    use NumericStyle::Integer;
    table(
        "age",
        3,
        vec![
            Gate::new(0.0, 1000.0, "an extremely young pulsar with an estimated age of", "yr", 1.0, Integer),
            Gate::new(1000.0, 2e4, "a fairly young pulsar with an estimated age of", "yr", 1.0, Integer),
            Gate::new(2e4, 1e5, "a youthful pulsar with an estimated age of", "kyr", 1e-3, Integer),
            Gate::new(1e5, 1e6, "a middle-aged pulsar with an estimated age of", "Myr", 1e-6, Integer),
            Gate::new(1e6, 1e7, "a fairly old pulsar with an estimated age of", "Myr", 1e-6, Integer),
            Gate::new(1e7, 1e9, "a very old pulsar with an estimated age of", "Gyr", 1e-9, Integer),
            Gate::new(1e9, 1e12, "an ancient pulsar with an estimated age of", "Gyr", 1e-9, Integer),
        ],
    )
}

fn bsurf_table() -> GateTable {
    use NumericStyle::Scientific;
    table(
        "bsurf",
        2,
        vec![
            Gate::new(0.0, 1e8, "an extremely low implied magnetic field strength of", "G", 1.0, Scientific),
            Gate::new(1e8, 1e9, "a low implied magnetic field strength of", "G", 1.0, Scientific),
            Gate::new(1e9, 1e11, "a moderate implied magnetic field strength of", "G", 1.0, Scientific),
            Gate::new(1e11, 1e13, "a typical slow pulsar-like implied magnetic field strength of", "G", 1.0, Scientific),
            Gate::new(1e13, 1e99, "a magnetar-like implied magnetic field strength of", "G", 1.0, Scientific),
        ],
    )
}

fn vtrans_table() -> GateTable {
    use NumericStyle::Integer;
    table(
        "vtrans",
        1,
        vec![
            Gate::new(0.0, 10.0, "an extremely low transverse velocity of", "km/s", 1.0, Integer),
            Gate::new(10.0, 30.0, "a low transverse velocity of", "km/s", 1.0, Integer),
            Gate::new(30.0, 100.0, "an intermediate transverse velocity of", "km/s", 1.0, Integer),
            Gate::new(100.0, 300.0, "a high transverse velocity of", "km/s", 1.0, Integer),
            Gate::new(300.0, 500.0, "a very high transverse velocity of", "km/s", 1.0, Integer),
            Gate::new(500.0, 1e99, "an extremely high transverse velocity of", "km/s", 1.0, Integer),
        ],
    )
}

fn minmass_table() -> GateTable {
    use NumericStyle::Fixed;
    table(
        "minmass",
        3,
        vec![
            Gate::new(0.0, 1e-4, "a planetary-sized companion with a minimum mass of", "solar masses", 1.0, Fixed),
            Gate::new(1e-4, 0.02, "an extremely low-mass companion with a minimum mass of", "solar masses", 1.0, Fixed),
            Gate::new(0.02, 0.1, "a very low-mass companion with a minimum mass of", "solar masses", 1.0, Fixed),
            Gate::new(0.1, 0.4, "a low-mass companion with a minimum mass of", "solar masses", 1.0, Fixed),
            Gate::new(0.4, 1.0, "a moderate-sized companion with a minimum mass of", "solar masses", 1.0, Fixed),
            Gate::new(1.0, 1000.0, "a very high mass companion with a minimum mass of", "solar masses", 1.0, Fixed),
        ],
    )
}

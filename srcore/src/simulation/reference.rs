use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::ion::descriptor::IonDescriptor;
use crate::ion::moq_table::MoqTable;
use crate::physics::constants::u_to_mev;
use crate::physics::kinematics::{resolve_reference_frequency, transition_gamma, ReferenceInput};
use crate::physics::ring::Ring;

/// Everything known about the reference ion once the mass-over-charge table exists.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReferenceContext {
    pub ion: IonDescriptor,
    pub label: String,
    pub moq: f64,
    pub charge: u32,
    /// Rest mass in MeV/c^2.
    pub mass_mev: f64,
    pub ring: Ring,
    pub alphap: f64,
}

impl ReferenceContext {
    /// Builds the context for `reference_label`, which must be present in `table`.
    ///
    /// The charge is taken from the label, the rest mass is `moq * charge` converted to MeV.
    pub fn new(table: &MoqTable, reference_label: &str, ring: Ring, alphap: f64) -> Result<Self> {
        let ion = IonDescriptor::from_label(reference_label)?;
        let label = ion.label();
        let entry = table.get(&label).ok_or_else(|| Error::Lookup(label.clone()))?;

        if !alphap.is_finite() {
            return Err(Error::invalid("alphap", alphap));
        }

        let mass_mev = u_to_mev(entry.moq * ion.charge as f64);
        debug!(reference = %label, moq = entry.moq, mass_mev, "reference context ready");

        Ok(ReferenceContext {
            charge: ion.charge,
            moq: entry.moq,
            ion,
            label,
            mass_mev,
            ring,
            alphap,
        })
    }

    /// Same reference and ring, different momentum compaction factor.
    pub fn with_alphap(&self, alphap: f64) -> Result<Self> {
        if !alphap.is_finite() {
            return Err(Error::invalid("alphap", alphap));
        }
        Ok(ReferenceContext { alphap, ..self.clone() })
    }

    /// Revolution frequency of the reference ion in Hz.
    pub fn revolution_frequency(&self, input: ReferenceInput) -> Result<f64> {
        resolve_reference_frequency(input.mode, self.mass_mev, self.charge, self.ring.circumference, input.value)
    }

    pub fn transition_gamma(&self) -> f64 {
        transition_gamma(self.alphap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::constants::ATOMIC_MASS_UNIT_MEV;
    use crate::physics::kinematics::ResolverMode;

    fn table() -> MoqTable {
        let mut table = MoqTable::new();
        table.push(IonDescriptor::new("Ge", 72, 32), 2.2475, 1.0).unwrap();
        table.push(IonDescriptor::new("Se", 74, 34), 2.1741, 1.0).unwrap();
        table
    }

    #[test]
    fn test_context_from_label() {
        let context = ReferenceContext::new(&table(), "72Ge+32", Ring::esr(), 0.13).unwrap();
        assert_eq!(context.charge, 32);
        assert_eq!(context.moq, 2.2475);
        assert!((context.mass_mev - 2.2475 * 32.0 * ATOMIC_MASS_UNIT_MEV).abs() < 1e-9);
    }

    #[test]
    fn test_missing_reference() {
        let err = ReferenceContext::new(&table(), "238U+92", Ring::esr(), 0.13).unwrap_err();
        assert_eq!(err, Error::Lookup("238U+92".to_string()));
    }

    #[test]
    fn test_malformed_reference_label() {
        let err = ReferenceContext::new(&table(), "Ge72", Ring::esr(), 0.13).unwrap_err();
        assert!(matches!(err, Error::Label(_)));
    }

    #[test]
    fn test_frequency_modes() {
        let context = ReferenceContext::new(&table(), "72Ge+32", Ring::esr(), 0.13).unwrap();
        let direct = context.revolution_frequency(ReferenceInput::frequency(1.9e6)).unwrap();
        assert_eq!(direct, 1.9e6);

        let from_ke = context.revolution_frequency(ReferenceInput::kinetic_energy(30_000.0)).unwrap();
        let expected = resolve_reference_frequency(
            ResolverMode::KineticEnergy,
            context.mass_mev,
            32,
            108.4,
            30_000.0,
        )
        .unwrap();
        assert_eq!(from_ke, expected);
    }

    #[test]
    fn test_with_alphap() {
        let context = ReferenceContext::new(&table(), "72Ge+32", Ring::esr(), 0.13).unwrap();
        let other = context.with_alphap(0.25).unwrap();
        assert_eq!(other.alphap, 0.25);
        assert_eq!(other.transition_gamma(), 2.0);
        assert_eq!(other.label, context.label);
    }
}

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::ion::descriptor::IonDescriptor;
use crate::physics::constants::MASS_ELECTRON;

/// Source of ionic mass-over-charge ratios, typically backed by an atomic mass evaluation.
pub trait IonicMoqLookup {
    /// Whether the nuclide (element symbol, mass number) is known.
    fn has_nuclide(&self, element: &str, mass_number: u32) -> bool;

    /// Ionic mass-over-charge of `ion` in u/e.
    fn ionic_moq(&self, ion: &IonDescriptor) -> Result<f64>;
}

/// ionic mass-over-charge from the neutral atomic mass
///
/// Removes `charge` electrons from the atom; electron binding energies are neglected.
///
/// # Examples
///
/// ```
/// use srcore::ion::mass_table::ionic_moq_from_atomic_mass;
///
/// let moq = ionic_moq_from_atomic_mass(1.00782503223, 1).unwrap();
/// assert!((moq - 1.00727645232).abs() < 1e-10);
/// ```
pub fn ionic_moq_from_atomic_mass(atomic_mass: f64, charge: u32) -> Result<f64> {
    if charge == 0 {
        return Err(Error::invalid("charge", 0.0));
    }
    let q = charge as f64;
    Ok((atomic_mass - q * MASS_ELECTRON) / q)
}

/// In-memory atomic mass table, masses in u keyed by (element symbol, mass number).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MassTable {
    atomic_masses: HashMap<(String, u32), f64>,
}

impl MassTable {
    pub fn new() -> Self {
        MassTable::default()
    }

    pub fn insert(&mut self, element: impl Into<String>, mass_number: u32, atomic_mass: f64) {
        self.atomic_masses.insert((element.into(), mass_number), atomic_mass);
    }

    pub fn atomic_mass(&self, element: &str, mass_number: u32) -> Option<f64> {
        self.atomic_masses.get(&(element.to_string(), mass_number)).copied()
    }

    pub fn len(&self) -> usize {
        self.atomic_masses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atomic_masses.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, u32, f64)> for MassTable {
    fn from_iter<I: IntoIterator<Item = (S, u32, f64)>>(iter: I) -> Self {
        let mut table = MassTable::new();
        for (element, mass_number, atomic_mass) in iter {
            table.insert(element, mass_number, atomic_mass);
        }
        table
    }
}

impl IonicMoqLookup for MassTable {
    fn has_nuclide(&self, element: &str, mass_number: u32) -> bool {
        self.atomic_mass(element, mass_number).is_some()
    }

    fn ionic_moq(&self, ion: &IonDescriptor) -> Result<f64> {
        let atomic_mass = self
            .atomic_mass(&ion.element, ion.mass_number)
            .ok_or_else(|| Error::MissingMass {
                element: ion.element.clone(),
                mass_number: ion.mass_number,
            })?;
        ionic_moq_from_atomic_mass(atomic_mass, ion.charge)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> MassTable {
        vec![("Ge", 72, 71.922075826), ("Se", 74, 73.922475934)].into_iter().collect()
    }

    #[test]
    fn test_lookup_known_nuclide() {
        let table = table();
        assert_eq!(table.len(), 2);
        assert!(table.has_nuclide("Ge", 72));
        assert!(!table.has_nuclide("Ge", 73));

        let moq = table.ionic_moq(&IonDescriptor::new("Ge", 72, 32)).unwrap();
        let expected = (71.922075826 - 32.0 * MASS_ELECTRON) / 32.0;
        assert!((moq - expected).abs() < 1e-12);
    }

    #[test]
    fn test_lookup_unknown_nuclide() {
        let err = table().ionic_moq(&IonDescriptor::new("U", 238, 92)).unwrap_err();
        assert_eq!(err, Error::MissingMass { element: "U".to_string(), mass_number: 238 });
    }

    #[test]
    fn test_zero_charge_rejected() {
        assert!(ionic_moq_from_atomic_mass(12.0, 0).is_err());
    }
}

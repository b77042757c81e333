use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

fn label_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(\d+)([A-Z][a-z]{0,2})\+(\d+)$").expect("ion label pattern is a valid regex")
    })
}

/// A nuclide in a given charge state, e.g. `72Ge+32`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IonDescriptor {
    pub element: String,
    pub mass_number: u32,
    pub charge: u32,
}

impl IonDescriptor {
    pub fn new(element: impl Into<String>, mass_number: u32, charge: u32) -> Self {
        IonDescriptor { element: element.into(), mass_number, charge }
    }

    /// Composite label `{mass_number}{element}+{charge}`.
    ///
    /// # Examples
    ///
    /// ```
    /// use srcore::ion::descriptor::IonDescriptor;
    ///
    /// let ion = IonDescriptor::new("Ge", 72, 32);
    /// assert_eq!(ion.label(), "72Ge+32");
    /// ```
    pub fn label(&self) -> String {
        format!("{}{}+{}", self.mass_number, self.element, self.charge)
    }

    /// Parses a label of the form `72Ge+32`; the charge must be non-zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use srcore::ion::descriptor::IonDescriptor;
    ///
    /// let ion = IonDescriptor::from_label("238U+92").unwrap();
    /// assert_eq!(ion, IonDescriptor::new("U", 238, 92));
    /// assert!(IonDescriptor::from_label("U238").is_err());
    /// ```
    pub fn from_label(label: &str) -> Result<Self> {
        let trimmed = label.trim();
        let caps = label_pattern()
            .captures(trimmed)
            .ok_or_else(|| Error::Label(label.to_string()))?;

        let mass_number: u32 = caps[1].parse().map_err(|_| Error::Label(label.to_string()))?;
        let charge: u32 = caps[3].parse().map_err(|_| Error::Label(label.to_string()))?;
        if mass_number == 0 || charge == 0 {
            return Err(Error::Label(label.to_string()));
        }

        Ok(IonDescriptor::new(&caps[2], mass_number, charge))
    }
}

impl fmt::Display for IonDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}+{}", self.mass_number, self.element, self.charge)
    }
}

impl FromStr for IonDescriptor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        IonDescriptor::from_label(s)
    }
}

/// One entry of a candidate particle list together with its expected yield.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CandidateIon {
    pub element: String,
    pub mass_number: u32,
    pub proton_number: u32,
    pub neutron_number: u32,
    pub charge: u32,
    pub yield_value: f64,
}

impl CandidateIon {
    pub fn new(
        element: impl Into<String>,
        mass_number: u32,
        proton_number: u32,
        neutron_number: u32,
        charge: u32,
        yield_value: f64,
    ) -> Self {
        CandidateIon {
            element: element.into(),
            mass_number,
            proton_number,
            neutron_number,
            charge,
            yield_value,
        }
    }

    pub fn descriptor(&self) -> IonDescriptor {
        IonDescriptor::new(self.element.clone(), self.mass_number, self.charge)
    }
}

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use srcore::{IonDescriptor, ReferenceInput, Ring};

use crate::error::{Error, Result};

/// Simulation settings, read from a JSON file.
///
/// Exactly one of `frequency`, `rigidity` or `kinetic_energy` is needed to resolve the
/// reference; when several are present the first in that order wins. With `ions` set the
/// simulation uses that explicit set, otherwise the database candidate list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SimulationConfig {
    /// SQLite nuclide database with the `ame` and `candidates` tables.
    pub database: PathBuf,
    #[serde(default)]
    pub experimental_data: Option<PathBuf>,
    pub reference_ion: String,
    pub alphap: f64,
    pub harmonics: Vec<f64>,
    #[serde(default)]
    pub ring: Ring,
    /// Reference revolution frequency in Hz.
    #[serde(default)]
    pub frequency: Option<f64>,
    /// Magnetic rigidity in T m.
    #[serde(default)]
    pub rigidity: Option<f64>,
    /// Total kinetic energy of the reference ion in MeV.
    #[serde(default)]
    pub kinetic_energy: Option<f64>,
    #[serde(default)]
    pub ions: Option<Vec<String>>,
}

impl SimulationConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        SimulationConfig::from_json_str(&json)
    }

    pub fn reference_input(&self) -> Result<ReferenceInput> {
        Ok(ReferenceInput::from_options(self.frequency, self.rigidity, self.kinetic_energy)?)
    }

    /// Parsed explicit ion set, `None` when the candidate list should be used.
    pub fn explicit_ions(&self) -> Result<Option<Vec<IonDescriptor>>> {
        match &self.ions {
            None => Ok(None),
            Some(labels) => {
                let ions = labels
                    .iter()
                    .map(|label| IonDescriptor::from_label(label))
                    .collect::<srcore::Result<Vec<_>>>()?;
                Ok(Some(ions))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use srcore::ResolverMode;

    const MINIMAL: &str = r#"{
        "database": "nuclides.db",
        "reference_ion": "72Ge+32",
        "alphap": 0.13,
        "harmonics": [124, 125],
        "rigidity": 6.9
    }"#;

    #[test]
    fn test_minimal_config_defaults() {
        let config = SimulationConfig::from_json_str(MINIMAL).unwrap();
        assert_eq!(config.ring, Ring::esr());
        assert_eq!(config.harmonics, vec![124.0, 125.0]);
        assert!(config.experimental_data.is_none());
        assert!(config.explicit_ions().unwrap().is_none());
        assert_eq!(config.reference_input().unwrap().mode, ResolverMode::Rigidity);
    }

    #[test]
    fn test_explicit_ions_and_ring() {
        let json = r#"{
            "database": "nuclides.db",
            "reference_ion": "72Ge+32",
            "alphap": 0.13,
            "harmonics": [1],
            "frequency": 1.9e6,
            "ring": { "name": "CRYRING", "circumference": 54.17 },
            "ions": ["72Ge+32", "74Se+34"]
        }"#;
        let config = SimulationConfig::from_json_str(json).unwrap();
        assert_eq!(config.ring.name, "CRYRING");
        let ions = config.explicit_ions().unwrap().unwrap();
        assert_eq!(ions[1], IonDescriptor::new("Se", 74, 34));
        assert_eq!(config.reference_input().unwrap(), ReferenceInput::frequency(1.9e6));
    }

    #[test]
    fn test_missing_reference_input() {
        let json = MINIMAL.replace("\"rigidity\": 6.9", "\"ions\": []");
        let config = SimulationConfig::from_json_str(&json).unwrap();
        let err = config.reference_input().unwrap_err();
        assert!(matches!(err, Error::Core(srcore::Error::Configuration(_))));
    }

    #[test]
    fn test_bad_ion_label() {
        let json = MINIMAL.replace("\"rigidity\": 6.9", "\"rigidity\": 6.9, \"ions\": [\"Ge72\"]");
        let config = SimulationConfig::from_json_str(&json).unwrap();
        assert!(config.explicit_ions().is_err());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let json = MINIMAL.replace("\"alphap\"", "\"alpha\": 1, \"alphap\"");
        assert!(matches!(SimulationConfig::from_json_str(&json), Err(Error::Json(_))));
    }
}

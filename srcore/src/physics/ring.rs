use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::physics::constants::{ESR_CIRCUMFERENCE, ESR_NAME};

/// Storage ring geometry, only the circumference matters for the revolution frequency.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ring {
    pub name: String,
    pub circumference: f64,
}

impl Ring {
    pub fn new(name: impl Into<String>, circumference: f64) -> Result<Self> {
        if !(circumference.is_finite() && circumference > 0.0) {
            return Err(Error::invalid("ring circumference", circumference));
        }
        Ok(Ring { name: name.into(), circumference })
    }

    /// The experimental storage ring ESR.
    pub fn esr() -> Self {
        Ring { name: ESR_NAME.to_string(), circumference: ESR_CIRCUMFERENCE }
    }
}

impl Default for Ring {
    fn default() -> Self {
        Ring::esr()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_esr() {
        let ring = Ring::default();
        assert_eq!(ring.name, "ESR");
        assert_eq!(ring.circumference, 108.4);
    }

    #[test]
    fn test_rejects_bad_circumference() {
        assert!(Ring::new("CRYRING", 54.17).is_ok());
        assert!(Ring::new("broken", 0.0).is_err());
        assert!(Ring::new("broken", f64::NAN).is_err());
    }
}

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the frequency simulation pipeline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// No usable reference input (frequency, rigidity or kinetic energy) was given.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// An ion label was expected in a mass-over-charge table but is not there.
    #[error("ion {0} not found in the mass-over-charge table")]
    Lookup(String),

    #[error("dimension mismatch: expected {expected} values, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("invalid harmonic {0}: harmonics must be finite and positive")]
    InvalidHarmonic(f64),

    #[error("invalid value for {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("malformed ion label '{0}', expected <mass number><element>+<charge> (e.g. 72Ge+32)")]
    Label(String),

    #[error("ion {0} appears more than once in the mass-over-charge table")]
    DuplicateIon(String),

    #[error("no atomic mass known for {element}-{mass_number}")]
    MissingMass { element: String, mass_number: u32 },
}

impl Error {
    pub(crate) fn invalid(name: &'static str, value: f64) -> Self {
        Error::InvalidParameter { name, value }
    }
}

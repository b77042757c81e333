use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::physics::constants::{MEV_TO_EV, SPEED_OF_LIGHT};

/// Physical quantity used to derive the reference revolution frequency.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolverMode {
    /// The value is the revolution frequency itself (Hz).
    Direct,
    /// The value is the magnetic rigidity (T m).
    Rigidity,
    /// The value is the total kinetic energy (MeV).
    KineticEnergy,
}

/// A reference input: one quantity together with the mode telling how to read it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReferenceInput {
    pub mode: ResolverMode,
    pub value: f64,
}

impl ReferenceInput {
    pub fn frequency(value: f64) -> Self {
        ReferenceInput { mode: ResolverMode::Direct, value }
    }

    pub fn rigidity(value: f64) -> Self {
        ReferenceInput { mode: ResolverMode::Rigidity, value }
    }

    pub fn kinetic_energy(value: f64) -> Self {
        ReferenceInput { mode: ResolverMode::KineticEnergy, value }
    }

    /// Picks the first supplied quantity, in the order frequency, rigidity, kinetic energy.
    ///
    /// # Examples
    ///
    /// ```
    /// use srcore::physics::kinematics::{ReferenceInput, ResolverMode};
    ///
    /// let input = ReferenceInput::from_options(None, Some(6.9), Some(400.0)).unwrap();
    /// assert_eq!(input.mode, ResolverMode::Rigidity);
    /// assert!(ReferenceInput::from_options(None, None, None).is_err());
    /// ```
    pub fn from_options(
        frequency: Option<f64>,
        rigidity: Option<f64>,
        kinetic_energy: Option<f64>,
    ) -> Result<Self> {
        match (frequency, rigidity, kinetic_energy) {
            (Some(f), _, _) => Ok(ReferenceInput::frequency(f)),
            (None, Some(brho), _) => Ok(ReferenceInput::rigidity(brho)),
            (None, None, Some(ke)) => Ok(ReferenceInput::kinetic_energy(ke)),
            (None, None, None) => Err(Error::Configuration(
                "none of frequency, rigidity or kinetic energy was supplied".to_string(),
            )),
        }
    }
}

/// Lorentz factor from magnetic rigidity.
///
/// Arguments:
///
/// * `rigidity` - magnetic rigidity in T m
/// * `charge` - ionic charge in units of the elementary charge
/// * `mass_mev` - rest mass of the ion in MeV/c^2
pub fn gamma_from_rigidity(rigidity: f64, charge: f64, mass_mev: f64) -> f64 {
    // p c in eV is rigidity * charge * c, the mass goes from MeV to eV
    let momentum_over_mass = rigidity * charge * SPEED_OF_LIGHT / (mass_mev * MEV_TO_EV);
    (momentum_over_mass.powi(2) + 1.0).sqrt()
}

/// Lorentz factor from the total kinetic energy, both energies in MeV.
pub fn gamma_from_kinetic_energy(kinetic_energy: f64, mass_mev: f64) -> f64 {
    kinetic_energy / mass_mev + 1.0
}

pub fn beta(gamma: f64) -> f64 {
    (gamma.powi(2) - 1.0).sqrt() / gamma
}

pub fn velocity(beta: f64) -> f64 {
    SPEED_OF_LIGHT * beta
}

pub fn revolution_frequency(velocity: f64, ring_circumference: f64) -> f64 {
    velocity / ring_circumference
}

/// transition gamma of a ring with momentum compaction factor `alphap`
///
/// # Examples
///
/// ```
/// use srcore::physics::kinematics::transition_gamma;
///
/// assert_eq!(transition_gamma(0.25), 2.0);
/// ```
pub fn transition_gamma(alphap: f64) -> f64 {
    1.0 / alphap.sqrt()
}

fn ensure_positive(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(Error::invalid(name, value))
    }
}

/// Revolution frequency of the reference ion in Hz.
///
/// Arguments:
///
/// * `mode` - how to interpret `value`
/// * `reference_mass_mev` - rest mass of the reference ion in MeV/c^2
/// * `reference_charge` - charge state of the reference ion
/// * `ring_circumference` - ring circumference in m
/// * `value` - frequency (Hz), rigidity (T m) or kinetic energy (MeV)
///
/// # Examples
///
/// ```
/// use srcore::physics::kinematics::{resolve_reference_frequency, ResolverMode};
///
/// let f = resolve_reference_frequency(ResolverMode::Direct, 67_000.0, 32, 108.4, 1.98e6).unwrap();
/// assert_eq!(f, 1.98e6);
/// ```
pub fn resolve_reference_frequency(
    mode: ResolverMode,
    reference_mass_mev: f64,
    reference_charge: u32,
    ring_circumference: f64,
    value: f64,
) -> Result<f64> {
    let value = ensure_positive("reference input", value)?;

    let gamma = match mode {
        ResolverMode::Direct => return Ok(value),
        ResolverMode::Rigidity => {
            let mass = ensure_positive("reference mass", reference_mass_mev)?;
            if reference_charge == 0 {
                return Err(Error::invalid("reference charge", 0.0));
            }
            gamma_from_rigidity(value, reference_charge as f64, mass)
        }
        ResolverMode::KineticEnergy => {
            let mass = ensure_positive("reference mass", reference_mass_mev)?;
            gamma_from_kinetic_energy(value, mass)
        }
    };

    let circumference = ensure_positive("ring circumference", ring_circumference)?;
    let beta = beta(gamma);
    let frequency = revolution_frequency(velocity(beta), circumference);

    debug!(?mode, gamma, beta, frequency, "resolved reference revolution frequency");
    Ok(frequency)
}

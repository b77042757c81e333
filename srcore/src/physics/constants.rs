// Purpose: To store constants that are used in the program
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0; // m/s
pub const ATOMIC_MASS_UNIT_MEV: f64 = 931.49410242; // MeV/c^2 per unified atomic mass unit
pub const MASS_ELECTRON: f64 = 0.00054857990946; // Unified atomic mass unit
pub const MEV_TO_EV: f64 = 1e6;

// Experimental storage ring (GSI), circumference in meters
pub const ESR_NAME: &str = "ESR";
pub const ESR_CIRCUMFERENCE: f64 = 108.4;

/// convert a mass in unified atomic mass units to MeV/c^2
///
/// # Examples
///
/// ```
/// use srcore::physics::constants::u_to_mev;
///
/// assert_eq!(u_to_mev(1.0), 931.49410242);
/// ```
pub fn u_to_mev(mass_u: f64) -> f64 {
    mass_u * ATOMIC_MASS_UNIT_MEV
}

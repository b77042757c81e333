use tracing::debug;

use crate::error::{Error, Result};
use crate::ion::moq_table::MoqTable;

/// Linearized dispersion: the factor by which an ion's revolution frequency differs
/// from the reference's.
///
/// The result multiplies the reference frequency directly; it is 1 for the reference
/// itself, not 0.
pub fn relative_revolution_frequency(moq: f64, reference_moq: f64, alphap: f64) -> f64 {
    1.0 - alphap * (moq - reference_moq) / reference_moq
}

/// Relative revolution frequencies of every ion in `table`, in table order.
///
/// Fails with a lookup error if `reference_label` is not in the table.
///
/// # Examples
///
/// ```
/// use srcore::ion::descriptor::IonDescriptor;
/// use srcore::ion::moq_table::MoqTable;
/// use srcore::simulation::dispersion::project_relative_frequencies;
///
/// let mut table = MoqTable::new();
/// table.push(IonDescriptor::new("Ge", 72, 32), 2.25, 1.0).unwrap();
/// table.push(IonDescriptor::new("Se", 74, 34), 2.18, 1.0).unwrap();
///
/// let rel = project_relative_frequencies(&table, "72Ge+32", 0.13).unwrap();
/// assert_eq!(rel[0], 1.0);
/// assert!(rel[1] > 1.0);
/// ```
pub fn project_relative_frequencies(table: &MoqTable, reference_label: &str, alphap: f64) -> Result<Vec<f64>> {
    if !alphap.is_finite() {
        return Err(Error::invalid("alphap", alphap));
    }

    let reference_moq = table
        .get(reference_label)
        .map(|entry| entry.moq)
        .ok_or_else(|| Error::Lookup(reference_label.to_string()))?;

    let relative: Vec<f64> = table
        .iter()
        .map(|entry| relative_revolution_frequency(entry.moq, reference_moq, alphap))
        .collect();

    debug!(ions = relative.len(), reference = reference_label, alphap, "projected relative revolution frequencies");
    Ok(relative)
}

use itertools::izip;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::data::spectrum::FrequencySpectrum;
use crate::error::{Error, Result};
use crate::ion::moq_table::MoqTable;

/// Simulated spectrum at one harmonic of the revolution frequency.
///
/// `labels` names the ion behind each peak, in peak order. It is empty when the spectrum
/// was synthesized from bare vectors without a mass-over-charge table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HarmonicSpectrum {
    pub harmonic: f64,
    pub label: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
    pub spectrum: FrequencySpectrum,
}

impl HarmonicSpectrum {
    /// (ion label, frequency, yield) per peak; empty when the ions are unknown.
    pub fn peaks(&self) -> impl Iterator<Item = (&str, f64, f64)> + '_ {
        izip!(&self.labels, &self.spectrum.frequency, &self.spectrum.intensity)
            .map(|(label, &frequency, &yield_value)| (label.as_str(), frequency, yield_value))
    }

    /// Frequency and yield of the peak produced by ion `label`.
    pub fn peak(&self, label: &str) -> Option<(f64, f64)> {
        self.peaks()
            .find(|(ion, _, _)| *ion == label)
            .map(|(_, frequency, yield_value)| (frequency, yield_value))
    }
}

/// Simulated spectra, one per requested harmonic and in request order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulatedSpectra {
    pub spectra: Vec<HarmonicSpectrum>,
}

impl SimulatedSpectra {
    /// First spectrum carrying `label`.
    pub fn get(&self, label: &str) -> Option<&HarmonicSpectrum> {
        self.spectra.iter().find(|s| s.label == label)
    }

    pub fn labels(&self) -> Vec<&str> {
        self.spectra.iter().map(|s| s.label.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.spectra.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spectra.is_empty()
    }
}

/// label of a harmonic, `1.0` becomes `"1"`
pub fn harmonic_label(harmonic: f64) -> String {
    format!("{}", harmonic)
}

/// Frequencies of all ions at every requested harmonic, each paired with its yield.
///
/// Arguments:
///
/// * `relative_frequencies` - relative revolution frequency per ion
/// * `reference_frequency` - revolution frequency of the reference ion in Hz
/// * `harmonics` - harmonic numbers, finite and positive
/// * `yields` - expected yield per ion, same length as `relative_frequencies`
///
/// # Examples
///
/// ```
/// use srcore::simulation::harmonics::synthesize_spectra;
///
/// let spectra = synthesize_spectra(&[1.0, 0.5], 1e6, &[1.0, 2.0], &[1.0, 1.0]).unwrap();
/// assert_eq!(spectra.labels(), vec!["1", "2"]);
/// assert_eq!(spectra.get("2").unwrap().spectrum.frequency, vec![2e6, 1e6]);
/// ```
pub fn synthesize_spectra(
    relative_frequencies: &[f64],
    reference_frequency: f64,
    harmonics: &[f64],
    yields: &[f64],
) -> Result<SimulatedSpectra> {
    synthesize(&[], relative_frequencies, reference_frequency, harmonics, yields)
}

/// Same as [`synthesize_spectra`] with yields and ion labels taken from `table`.
///
/// `relative_frequencies` must be aligned with the table, one value per entry.
///
/// # Examples
///
/// ```
/// use srcore::ion::descriptor::IonDescriptor;
/// use srcore::ion::moq_table::MoqTable;
/// use srcore::simulation::harmonics::synthesize_table_spectra;
///
/// let mut table = MoqTable::new();
/// table.push(IonDescriptor::new("Ge", 72, 32), 2.25, 1.0).unwrap();
/// table.push(IonDescriptor::new("Se", 74, 34), 2.18, 0.5).unwrap();
///
/// let spectra = synthesize_table_spectra(&table, &[1.0, 1.004], 2e6, &[1.0]).unwrap();
/// let first = spectra.get("1").unwrap();
/// assert_eq!(first.labels, vec!["72Ge+32", "74Se+34"]);
/// assert_eq!(first.peak("74Se+34"), Some((1.004 * 2e6, 0.5)));
/// ```
pub fn synthesize_table_spectra(
    table: &MoqTable,
    relative_frequencies: &[f64],
    reference_frequency: f64,
    harmonics: &[f64],
) -> Result<SimulatedSpectra> {
    if relative_frequencies.len() != table.len() {
        return Err(Error::DimensionMismatch {
            expected: table.len(),
            actual: relative_frequencies.len(),
        });
    }
    let labels: Vec<String> = table.iter().map(|entry| entry.label.clone()).collect();
    synthesize(&labels, relative_frequencies, reference_frequency, harmonics, &table.yields())
}

fn synthesize(
    ion_labels: &[String],
    relative_frequencies: &[f64],
    reference_frequency: f64,
    harmonics: &[f64],
    yields: &[f64],
) -> Result<SimulatedSpectra> {
    if yields.len() != relative_frequencies.len() {
        return Err(Error::DimensionMismatch {
            expected: relative_frequencies.len(),
            actual: yields.len(),
        });
    }

    let mut spectra = Vec::with_capacity(harmonics.len());

    for &harmonic in harmonics {
        if !(harmonic.is_finite() && harmonic > 0.0) {
            return Err(Error::InvalidHarmonic(harmonic));
        }

        let spectrum: FrequencySpectrum = izip!(relative_frequencies, yields)
            .map(|(&rel, &yield_value)| (rel * reference_frequency * harmonic, yield_value))
            .collect();

        debug!(harmonic, base = reference_frequency * harmonic, peaks = spectrum.len(), "synthesized harmonic");

        spectra.push(HarmonicSpectrum {
            harmonic,
            label: harmonic_label(harmonic),
            labels: ion_labels.to_vec(),
            spectrum,
        });
    }

    Ok(SimulatedSpectra { spectra })
}

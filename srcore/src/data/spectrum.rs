use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Represents a revolution-frequency spectrum: frequencies in Hz paired with intensities or yields.
///
/// Unlike a mass spectrum the peaks are not sorted; their order follows the ions they
/// were produced from (simulation) or the order of the measurement (experiment).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FrequencySpectrum {
    pub frequency: Vec<f64>,
    pub intensity: Vec<f64>,
}

impl FrequencySpectrum {
    /// Constructs a new `FrequencySpectrum`.
    ///
    /// # Arguments
    ///
    /// * `frequency` - A vector of frequency values.
    /// * `intensity` - A vector of intensity values corresponding to the frequency values.
    ///
    /// # Errors
    ///
    /// Returns a dimension mismatch if the lengths of `frequency` and `intensity` differ.
    ///
    /// # Example
    ///
    /// ```rust
    /// # use srcore::data::spectrum::FrequencySpectrum;
    /// let spectrum = FrequencySpectrum::new(vec![2.0e6, 1.0e6], vec![20.0, 10.0]).unwrap();
    /// assert_eq!(spectrum.frequency, vec![2.0e6, 1.0e6]);
    /// assert!(FrequencySpectrum::new(vec![1.0], vec![]).is_err());
    /// ```
    pub fn new(frequency: Vec<f64>, intensity: Vec<f64>) -> Result<Self> {
        if frequency.len() != intensity.len() {
            return Err(Error::DimensionMismatch { expected: frequency.len(), actual: intensity.len() });
        }
        Ok(FrequencySpectrum { frequency, intensity })
    }

    pub fn len(&self) -> usize {
        self.frequency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequency.is_empty()
    }

    /// (frequency, intensity) pairs in stored order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.frequency.iter().copied().zip(self.intensity.iter().copied())
    }
}

impl FromIterator<(f64, f64)> for FrequencySpectrum {
    fn from_iter<I: IntoIterator<Item = (f64, f64)>>(iter: I) -> Self {
        let (frequency, intensity) = iter.into_iter().unzip();
        FrequencySpectrum { frequency, intensity }
    }
}

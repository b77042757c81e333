use serde::Serialize;
use srcore::simulation::dispersion::project_relative_frequencies;
use srcore::simulation::harmonics::synthesize_table_spectra;
use srcore::{
    build_moq_table, CandidateIon, FrequencySpectrum, IonSource, IonicMoqLookup, MoqTable, ReferenceContext,
    ReferenceInput, SimulatedSpectra,
};
use tracing::info;

use crate::data::config::SimulationConfig;
use crate::data::experimental::read_experimental_data;
use crate::data::nuclides::NuclideDataHandle;
use crate::error::{Error, Result};

/// Outcome of one simulation run. The table is never modified after construction, a
/// different alphap or harmonic set produces a new result via [`SimulationResult::resimulate`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SimulationResult {
    pub reference: ReferenceContext,
    pub input: ReferenceInput,
    pub reference_frequency: f64,
    pub table: MoqTable,
    pub relative_frequencies: Vec<f64>,
    pub spectra: SimulatedSpectra,
    pub experimental: Option<FrequencySpectrum>,
}

impl SimulationResult {
    /// Projects and synthesizes again with another momentum compaction factor and harmonics.
    ///
    /// The reference frequency does not depend on alphap and is reused.
    pub fn resimulate(&self, alphap: f64, harmonics: &[f64]) -> Result<SimulationResult> {
        let reference = self.reference.with_alphap(alphap)?;
        let relative_frequencies = project_relative_frequencies(&self.table, &reference.label, alphap)?;
        let spectra = synthesize_table_spectra(&self.table, &relative_frequencies, self.reference_frequency, harmonics)?;

        Ok(SimulationResult {
            reference,
            input: self.input,
            reference_frequency: self.reference_frequency,
            table: self.table.clone(),
            relative_frequencies,
            spectra,
            experimental: self.experimental.clone(),
        })
    }
}

/// Runs the pipeline on already loaded inputs.
///
/// Explicit ions from the configuration take precedence over `candidates`.
pub fn simulate<L: IonicMoqLookup + ?Sized>(
    config: &SimulationConfig,
    lookup: &L,
    candidates: &[CandidateIon],
    experimental: Option<FrequencySpectrum>,
) -> Result<SimulationResult> {
    let input = config.reference_input()?;
    let explicit = config.explicit_ions()?;

    let source = match &explicit {
        Some(ions) => IonSource::Explicit(ions),
        None => IonSource::Candidates(candidates),
    };
    let table = build_moq_table(source, lookup)?;
    if table.is_empty() {
        return Err(Error::EmptyTable);
    }

    let reference = ReferenceContext::new(&table, &config.reference_ion, config.ring.clone(), config.alphap)?;
    let reference_frequency = reference.revolution_frequency(input)?;
    info!(
        reference = %reference.label,
        reference_frequency,
        gamma_t = reference.transition_gamma(),
        "reference revolution frequency resolved"
    );

    let relative_frequencies = project_relative_frequencies(&table, &reference.label, reference.alphap)?;
    let spectra = synthesize_table_spectra(&table, &relative_frequencies, reference_frequency, &config.harmonics)?;
    info!(ions = table.len(), harmonics = spectra.len(), "simulated spectra");

    Ok(SimulationResult {
        reference,
        input,
        reference_frequency,
        table,
        relative_frequencies,
        spectra,
        experimental,
    })
}

/// Loads the database and experimental data named by `config` and runs the pipeline.
pub fn run(config: &SimulationConfig) -> Result<SimulationResult> {
    let handle = NuclideDataHandle::new(&config.database)?;
    let masses = handle.read_mass_table()?;
    let candidates = match config.ions {
        Some(_) => Vec::new(),
        None => handle.read_candidates()?,
    };

    let experimental = match &config.experimental_data {
        Some(path) => Some(read_experimental_data(path)?),
        None => None,
    };

    simulate(config, &masses, &candidates, experimental)
}

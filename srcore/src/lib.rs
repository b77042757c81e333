pub mod error;

// physics module
pub mod physics {
    pub mod constants;
    pub mod kinematics;
    pub mod ring;
}

// ion module
pub mod ion {
    pub mod descriptor;
    pub mod mass_table;
    pub mod moq_table;
}

// simulation module
pub mod simulation {
    pub mod reference;
    pub mod dispersion;
    pub mod harmonics;
}

// data module
pub mod data {
    pub mod spectrum;
}

pub use error::{Error, Result};
pub use data::spectrum::FrequencySpectrum;
pub use ion::descriptor::{CandidateIon, IonDescriptor};
pub use ion::mass_table::{IonicMoqLookup, MassTable};
pub use ion::moq_table::{build_moq_table, IonSource, MoqEntry, MoqTable};
pub use physics::kinematics::{resolve_reference_frequency, ReferenceInput, ResolverMode};
pub use physics::ring::Ring;
pub use simulation::dispersion::project_relative_frequencies;
pub use simulation::harmonics::{synthesize_spectra, synthesize_table_spectra, HarmonicSpectrum, SimulatedSpectra};
pub use simulation::reference::ReferenceContext;

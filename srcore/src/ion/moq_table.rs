use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::ion::descriptor::{CandidateIon, IonDescriptor};
use crate::ion::mass_table::IonicMoqLookup;

/// One ion of a simulation: its label, mass-over-charge in u/e and expected yield.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MoqEntry {
    pub ion: IonDescriptor,
    pub label: String,
    pub moq: f64,
    pub yield_value: f64,
}

impl MoqEntry {
    pub fn new(ion: IonDescriptor, moq: f64, yield_value: f64) -> Self {
        let label = ion.label();
        MoqEntry { ion, label, moq, yield_value }
    }
}

/// Ordered mass-over-charge table with unique labels.
///
/// Iteration order is insertion order; every downstream vector (relative frequencies,
/// simulated spectra) is aligned to it by position.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MoqTable {
    entries: Vec<MoqEntry>,
}

impl MoqTable {
    pub fn new() -> Self {
        MoqTable::default()
    }

    /// Appends an ion, rejecting duplicated labels and non-positive ratios.
    pub fn push(&mut self, ion: IonDescriptor, moq: f64, yield_value: f64) -> Result<()> {
        let entry = MoqEntry::new(ion, moq, yield_value);
        if !(entry.moq.is_finite() && entry.moq > 0.0) {
            return Err(Error::invalid("mass-over-charge", entry.moq));
        }
        if self.contains(&entry.label) {
            return Err(Error::DuplicateIon(entry.label));
        }
        self.entries.push(entry);
        Ok(())
    }

    pub fn contains(&self, label: &str) -> bool {
        self.position(label).is_some()
    }

    pub fn position(&self, label: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.label == label)
    }

    pub fn get(&self, label: &str) -> Option<&MoqEntry> {
        self.entries.iter().find(|entry| entry.label == label)
    }

    pub fn entries(&self) -> &[MoqEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MoqEntry> {
        self.entries.iter()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(|entry| entry.label.as_str()).collect()
    }

    pub fn yields(&self) -> Vec<f64> {
        self.entries.iter().map(|entry| entry.yield_value).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Where the ions of a simulation come from.
#[derive(Clone, Copy, Debug)]
pub enum IonSource<'a> {
    /// A candidate list, cross-referenced against the mass database; carries yields.
    Candidates(&'a [CandidateIon]),
    /// An explicit set of ions, all with unit yield.
    Explicit(&'a [IonDescriptor]),
}

/// Builds the mass-over-charge table in input order.
///
/// Candidates whose nuclide is unknown to `lookup` are skipped with a warning, and so are
/// repeated candidates. Explicit ions must all be resolvable. An empty source gives an
/// empty table.
///
/// # Examples
///
/// ```
/// use srcore::ion::descriptor::IonDescriptor;
/// use srcore::ion::mass_table::MassTable;
/// use srcore::ion::moq_table::{build_moq_table, IonSource};
///
/// let masses: MassTable = vec![("Ge", 72, 71.922075826)].into_iter().collect();
/// let ions = vec![IonDescriptor::new("Ge", 72, 32)];
/// let table = build_moq_table(IonSource::Explicit(&ions), &masses).unwrap();
/// assert_eq!(table.labels(), vec!["72Ge+32"]);
/// assert_eq!(table.yields(), vec![1.0]);
/// ```
pub fn build_moq_table<L: IonicMoqLookup + ?Sized>(source: IonSource<'_>, lookup: &L) -> Result<MoqTable> {
    let mut table = MoqTable::new();

    match source {
        IonSource::Candidates(candidates) => {
            let mut skipped = 0usize;
            for candidate in candidates {
                let ion = candidate.descriptor();
                if !lookup.has_nuclide(&candidate.element, candidate.mass_number) {
                    warn!(ion = %ion, "candidate has no atomic mass entry, skipping");
                    skipped += 1;
                    continue;
                }
                if table.contains(&ion.label()) {
                    warn!(ion = %ion, "candidate listed more than once, keeping the first entry");
                    skipped += 1;
                    continue;
                }
                let moq = lookup.ionic_moq(&ion)?;
                table.push(ion, moq, candidate.yield_value)?;
            }
            info!(
                accepted = table.len(),
                skipped,
                "built mass-over-charge table from candidate list"
            );
        }
        IonSource::Explicit(ions) => {
            for ion in ions {
                let moq = lookup.ionic_moq(ion)?;
                table.push(ion.clone(), moq, 1.0)?;
            }
            debug!(ions = table.len(), "built mass-over-charge table from explicit ions");
        }
    }

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ion::mass_table::MassTable;
    use std::sync::{Arc, Mutex};
    use tracing::field::{Field, Visit};
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    /// Collects the `ion` field of every warning.
    #[derive(Clone, Default)]
    struct WarnedIons(Arc<Mutex<Vec<String>>>);

    struct IonField(Option<String>);

    impl Visit for IonField {
        fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
            if field.name() == "ion" {
                self.0 = Some(format!("{:?}", value));
            }
        }
    }

    impl<S: Subscriber> Layer<S> for WarnedIons {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            if *event.metadata().level() == Level::WARN {
                let mut visitor = IonField(None);
                event.record(&mut visitor);
                self.0.lock().unwrap().push(visitor.0.unwrap_or_default());
            }
        }
    }

    fn masses() -> MassTable {
        vec![
            ("Ge", 72, 71.922075826),
            ("Se", 74, 73.922475934),
            ("As", 73, 72.923829086),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_candidates_keep_input_order_and_yields() {
        let candidates = vec![
            CandidateIon::new("Se", 74, 34, 40, 34, 0.25),
            CandidateIon::new("Ge", 72, 32, 40, 32, 1.5),
            CandidateIon::new("As", 73, 33, 40, 33, 0.75),
        ];
        let table = build_moq_table(IonSource::Candidates(&candidates), &masses()).unwrap();

        assert_eq!(table.labels(), vec!["74Se+34", "72Ge+32", "73As+33"]);
        assert_eq!(table.yields(), vec![0.25, 1.5, 0.75]);
        assert_eq!(table.position("72Ge+32"), Some(1));
    }

    #[test]
    fn test_unknown_candidates_are_skipped() {
        let candidates = vec![
            CandidateIon::new("Ge", 72, 32, 40, 32, 1.0),
            CandidateIon::new("Xx", 300, 120, 180, 50, 1.0),
            CandidateIon::new("Se", 74, 34, 40, 34, 2.0),
        ];
        let table = build_moq_table(IonSource::Candidates(&candidates), &masses()).unwrap();

        assert_eq!(table.len(), 2);
        assert!(!table.contains("300Xx+50"));
    }

    #[test]
    fn test_skipped_candidates_are_warned() {
        let candidates = vec![
            CandidateIon::new("Ge", 72, 32, 40, 32, 1.0),
            CandidateIon::new("Xx", 300, 120, 180, 50, 1.0),
            CandidateIon::new("Ge", 72, 32, 40, 32, 3.0),
            CandidateIon::new("Se", 74, 34, 40, 34, 2.0),
        ];
        let warned = WarnedIons::default();
        let subscriber = tracing_subscriber::registry().with(warned.clone());

        let table = tracing::subscriber::with_default(subscriber, || {
            build_moq_table(IonSource::Candidates(&candidates), &masses()).unwrap()
        });

        assert_eq!(table.labels(), vec!["72Ge+32", "74Se+34"]);
        assert_eq!(*warned.0.lock().unwrap(), vec!["300Xx+50".to_string(), "72Ge+32".to_string()]);
    }

    #[test]
    fn test_resolved_candidates_are_not_warned() {
        let candidates = vec![CandidateIon::new("Ge", 72, 32, 40, 32, 1.0)];
        let warned = WarnedIons::default();
        let subscriber = tracing_subscriber::registry().with(warned.clone());

        tracing::subscriber::with_default(subscriber, || {
            build_moq_table(IonSource::Candidates(&candidates), &masses()).unwrap()
        });

        assert!(warned.0.lock().unwrap().is_empty());
    }

    #[test]
    fn test_repeated_candidates_keep_first() {
        let candidates = vec![
            CandidateIon::new("Ge", 72, 32, 40, 32, 1.0),
            CandidateIon::new("Ge", 72, 32, 40, 32, 9.0),
        ];
        let table = build_moq_table(IonSource::Candidates(&candidates), &masses()).unwrap();

        assert_eq!(table.len(), 1);
        assert_eq!(table.yields(), vec![1.0]);
    }

    #[test]
    fn test_explicit_ions_require_masses() {
        let ions = vec![IonDescriptor::new("Ge", 72, 32), IonDescriptor::new("U", 238, 92)];
        let err = build_moq_table(IonSource::Explicit(&ions), &masses()).unwrap_err();
        assert!(matches!(err, Error::MissingMass { .. }));
    }

    #[test]
    fn test_empty_sources_give_empty_table() {
        let table = build_moq_table(IonSource::Candidates(&[]), &masses()).unwrap();
        assert!(table.is_empty());
        let table = build_moq_table(IonSource::Explicit(&[]), &masses()).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_duplicate_push_rejected() {
        let mut table = MoqTable::new();
        table.push(IonDescriptor::new("Ge", 72, 32), 2.25, 1.0).unwrap();
        let err = table.push(IonDescriptor::new("Ge", 72, 32), 2.25, 1.0).unwrap_err();
        assert_eq!(err, Error::DuplicateIon("72Ge+32".to_string()));
    }

    #[test]
    fn test_non_positive_moq_rejected() {
        let mut table = MoqTable::new();
        assert!(table.push(IonDescriptor::new("Ge", 72, 32), 0.0, 1.0).is_err());
        assert!(table.push(IonDescriptor::new("Ge", 72, 32), f64::NAN, 1.0).is_err());
    }
}

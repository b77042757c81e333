use rusqlite::Connection;
use srcore::{CandidateIon, MassTable};
use std::path::Path;
use tracing::debug;

use crate::error::Result;

/// Atomic mass entry of the `ame` table, mass in unified atomic mass units.
#[derive(Debug, Clone, PartialEq)]
pub struct AtomicMassRow {
    pub element: String,
    pub mass_number: u32,
    pub atomic_mass: f64,
}

impl AtomicMassRow {
    pub fn new(element: String, mass_number: u32, atomic_mass: f64) -> Self {
        AtomicMassRow { element, mass_number, atomic_mass }
    }
}

/// Handle on a SQLite nuclide database holding the tables
/// `ame(element, mass_number, atomic_mass)` and
/// `candidates(element, mass_number, proton_number, neutron_number, charge, yield)`.
///
/// `yield` is an SQL keyword and is always quoted.
#[derive(Debug)]
pub struct NuclideDataHandle {
    pub connection: Connection,
}

impl NuclideDataHandle {
    pub fn new(path: &Path) -> Result<Self> {
        let connection = Connection::open(path)?;
        Ok(Self { connection })
    }

    pub fn from_connection(connection: Connection) -> Self {
        Self { connection }
    }

    /// Creates both tables if they do not exist yet.
    pub fn create_tables(&self) -> Result<()> {
        self.connection.execute_batch(
            r#"CREATE TABLE IF NOT EXISTS ame (
                element TEXT NOT NULL,
                mass_number INTEGER NOT NULL,
                atomic_mass REAL NOT NULL,
                PRIMARY KEY (element, mass_number)
            );
            CREATE TABLE IF NOT EXISTS candidates (
                element TEXT NOT NULL,
                mass_number INTEGER NOT NULL,
                proton_number INTEGER NOT NULL,
                neutron_number INTEGER NOT NULL,
                charge INTEGER NOT NULL,
                "yield" REAL NOT NULL DEFAULT 1.0
            );"#,
        )?;
        Ok(())
    }

    pub fn insert_atomic_mass(&self, row: &AtomicMassRow) -> Result<()> {
        self.connection.execute(
            "INSERT OR REPLACE INTO ame (element, mass_number, atomic_mass) VALUES (?1, ?2, ?3)",
            (&row.element, row.mass_number, row.atomic_mass),
        )?;
        Ok(())
    }

    pub fn insert_candidate(&self, candidate: &CandidateIon) -> Result<()> {
        self.connection.execute(
            r#"INSERT INTO candidates (element, mass_number, proton_number, neutron_number, charge, "yield")
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)"#,
            (
                &candidate.element,
                candidate.mass_number,
                candidate.proton_number,
                candidate.neutron_number,
                candidate.charge,
                candidate.yield_value,
            ),
        )?;
        Ok(())
    }

    pub fn read_atomic_masses(&self) -> Result<Vec<AtomicMassRow>> {
        let mut stmt = self.connection.prepare("SELECT element, mass_number, atomic_mass FROM ame")?;
        let rows_iter = stmt.query_map([], |row| {
            Ok(AtomicMassRow::new(
                row.get(0)?,
                row.get(1)?,
                row.get(2)?,
            ))
        })?;
        let mut rows = Vec::new();
        for row in rows_iter {
            rows.push(row?);
        }
        Ok(rows)
    }

    /// The `ame` table as an in-memory lookup.
    pub fn read_mass_table(&self) -> Result<MassTable> {
        let table: MassTable = self
            .read_atomic_masses()?
            .into_iter()
            .map(|row| (row.element, row.mass_number, row.atomic_mass))
            .collect();
        debug!(nuclides = table.len(), "read atomic mass table");
        Ok(table)
    }

    /// Candidate ions in insertion order.
    pub fn read_candidates(&self) -> Result<Vec<CandidateIon>> {
        let mut stmt = self.connection.prepare(
            r#"SELECT element, mass_number, proton_number, neutron_number, charge, "yield"
             FROM candidates ORDER BY rowid"#,
        )?;
        let candidates_iter = stmt.query_map([], |row| {
            Ok(CandidateIon::new(
                row.get::<_, String>(0)?,
                row.get(1)?,
                row.get(2)?,
                row.get(3)?,
                row.get(4)?,
                row.get(5)?,
            ))
        })?;
        let mut candidates = Vec::new();
        for candidate in candidates_iter {
            candidates.push(candidate?);
        }
        debug!(candidates = candidates.len(), "read candidate list");
        Ok(candidates)
    }
}

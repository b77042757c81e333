use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

use srcore::FrequencySpectrum;
use tracing::debug;

use crate::error::{Error, Result};

fn parse_field(field: Option<&str>, line: usize, name: &str) -> Result<f64> {
    let raw = field.ok_or_else(|| Error::format(line, format!("missing {} field", name)))?;
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| Error::format(line, format!("{} field '{}' is not a number", name, raw.trim())))?;
    if value.is_nan() {
        return Err(Error::format(line, format!("{} field is NaN", name)));
    }
    Ok(value)
}

/// Parses pipe-delimited experimental data: one header line, then `frequency|yield[|...]`.
///
/// Only the first two fields of each line are used, blank lines are ignored. Line numbers
/// in errors are 1-based and count the header. Invalid UTF-8 is a format error, any other
/// read failure is an I/O error.
///
/// # Examples
///
/// ```
/// use std::io::Cursor;
/// use srdf::data::experimental::parse_experimental_data;
///
/// let text = "frequency|yield|comment\n1.98e6|12.5|a\n1.99e6|3|b\n";
/// let spectrum = parse_experimental_data(Cursor::new(text)).unwrap();
/// assert_eq!(spectrum.frequency, vec![1.98e6, 1.99e6]);
/// assert_eq!(spectrum.intensity, vec![12.5, 3.0]);
/// ```
pub fn parse_experimental_data<R: BufRead>(reader: R) -> Result<FrequencySpectrum> {
    parse_from(reader, Path::new("<reader>"))
}

fn parse_from<R: BufRead>(reader: R, origin: &Path) -> Result<FrequencySpectrum> {
    let mut frequency = Vec::new();
    let mut intensity = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;
        let line = line.map_err(|e| match e.kind() {
            ErrorKind::InvalidData => Error::format(line_number, e.to_string()),
            _ => Error::io(origin, e),
        })?;

        if index == 0 || line.trim().is_empty() {
            continue;
        }

        let mut fields = line.split('|');
        frequency.push(parse_field(fields.next(), line_number, "frequency")?);
        intensity.push(parse_field(fields.next(), line_number, "yield")?);
    }

    Ok(FrequencySpectrum::new(frequency, intensity)?)
}

/// Reads an experimental spectrum from a pipe-delimited text file.
pub fn read_experimental_data(path: &Path) -> Result<FrequencySpectrum> {
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    let spectrum = parse_from(BufReader::new(file), path)?;
    debug!(path = %path.display(), peaks = spectrum.len(), "read experimental data");
    Ok(spectrum)
}

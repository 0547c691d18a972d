use std::fs::File;
use std::io;
use std::path::Path;

use csv::WriterBuilder;
use log::{debug, info};
use rand::Rng;

use crate::error::GenError;
use crate::record::{HousingRecord, HEADER};

pub const DEFAULT_ROWS: usize = 1000;
pub const DEFAULT_OUTPUT: &str = "madrid_housing_1000.csv";

const LOG_EVERY: usize = 100;

/// Writes a header line followed by `rows` randomly drawn [`HousingRecord`]s as CSV.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generator {
    rows: usize,
}

impl Default for Generator {
    fn default() -> Self {
        Generator::new(DEFAULT_ROWS)
    }
}

impl Generator {
    #[must_use]
    pub fn new(rows: usize) -> Self {
        Generator { rows }
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of data rows written, not counting the header.
    ///
    /// # Errors
    /// Errors when a record cannot be serialized or the underlying writer fails
    pub fn write_records<W, R>(&self, writer: W, rng: &mut R) -> Result<usize, GenError>
    where
        W: io::Write,
        R: Rng + ?Sized,
    {
        let mut writer = WriterBuilder::new().has_headers(false).from_writer(writer);
        writer.write_record(HEADER)?;

        for row in 0..self.rows {
            let record: HousingRecord = rng.gen();
            writer.serialize(&record)?;
            if (row + 1) % LOG_EVERY == 0 {
                debug!("Wrote {} of {} rows", row + 1, self.rows);
            }
        }
        writer.flush()?;

        Ok(self.rows)
    }

    /// Creates (or truncates) the file at `path` and fills it via [`Generator::write_records`].
    ///
    /// # Errors
    /// Errors when the file cannot be created or written
    pub fn write_to_path<P, R>(&self, path: P, rng: &mut R) -> Result<usize, GenError>
    where
        P: AsRef<Path>,
        R: Rng + ?Sized,
    {
        let path = path.as_ref();
        info!("Generating {} rows into {}", self.rows, path.display());
        let file = File::create(path)?;
        let written = self.write_records(file, rng)?;
        info!("Finished writing {}", path.display());

        Ok(written)
    }
}

/// The line printed once the output file is complete,
/// e.g. `CSV file 'madrid_housing_1000.csv' with 1,000 rows has been created.`
#[must_use]
pub fn confirmation_message(path: &str, rows: usize) -> String {
    format!(
        "CSV file '{path}' with {} rows has been created.",
        group_thousands(rows)
    )
}

fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

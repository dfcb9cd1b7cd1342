use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Writer};
use thiserror::Error;
use tracing::*;

use crate::{classify, name, normalize, normalize_strict, InputError};

#[derive(Error, Debug)]
pub enum BatchError {
    #[error("Failed to open {path}: {source}")]
    Open {
        path: String,
        source: std::io::Error,
    },
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Counts of what a batch run did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub named: usize,
    pub skipped: usize,
}

/// Names every formula in `column` of a headered csv table.
///
/// Writes a `formula,iupac_name` row per formula. Records without a formula
/// in that column are skipped, as are lowercase formulas when `strict_case` is set.
pub fn name_table<R: Read, W: Write>(
    reader: R,
    writer: W,
    column: usize,
    strict_case: bool,
) -> Result<BatchSummary, BatchError> {
    let normalize_formula: fn(&str) -> Result<String, InputError> = if strict_case {
        normalize_strict
    } else {
        normalize
    };
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);
    let mut wtr = Writer::from_writer(writer);
    wtr.write_record(["formula", "iupac_name"])?;

    let mut summary = BatchSummary::default();
    for result in rdr.records() {
        let record: StringRecord = result?;
        let formula = match record.get(column).map(normalize_formula) {
            Some(Ok(formula)) => formula,
            Some(Err(e)) => {
                warn!("Skipping record {:?}: {}", record, e);
                summary.skipped += 1;
                continue;
            }
            None => {
                warn!("Skipping record without column {}: {:?}", column, record);
                summary.skipped += 1;
                continue;
            }
        };
        let iupac = name(&classify(&formula));
        trace!(%formula, %iupac, "named");
        wtr.write_record([formula.as_str(), iupac.as_str()])?;
        summary.named += 1;
    }
    wtr.flush()?;

    info!("Named {} formulas ({} skipped)", summary.named, summary.skipped);
    Ok(summary)
}

/// [`name_table`] over files on disk.
pub fn name_csv_file(
    input: &Path,
    output: &Path,
    column: usize,
    strict_case: bool,
) -> Result<BatchSummary, BatchError> {
    let reader = File::open(input).map_err(|source| BatchError::Open {
        path: input.display().to_string(),
        source,
    })?;
    let writer = File::create(output)?;
    name_table(reader, writer, column, strict_case)
}

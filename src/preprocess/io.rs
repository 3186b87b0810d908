use crate::error::{PrepError, Result};
use polars::prelude::*;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Read a comma-separated file with a header row into a raw table.
///
/// Column types are inferred from the whole file, so `10` and `10.0` load as
/// the same number. Columns that mix numbers and text stay `String` and are
/// coerced later in the transformer.
pub fn load_raw_table(path: &Path) -> Result<DataFrame> {
    if !path.exists() {
        return Err(PrepError::NotFound(path.to_path_buf()));
    }

    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(None)
        .finish()?
        .collect()?;

    tracing::info!(
        "Loaded {} rows x {} columns from {}",
        df.height(),
        df.width(),
        path.display()
    );
    Ok(df)
}

/// Write the processed table as CSV into `output_dir`, creating it if needed.
///
/// The file is written next to its destination under a temporary name and
/// renamed into place, so a failed write never leaves a partial file behind.
pub fn save_processed(df: &mut DataFrame, output_dir: &Path, file_name: &str) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)?;

    let final_path = output_dir.join(file_name);
    let temp_path = output_dir.join(format!(".{file_name}.tmp"));

    if let Err(e) = write_csv(df, &temp_path) {
        let _ = std::fs::remove_file(&temp_path);
        return Err(e);
    }
    if let Err(e) = std::fs::rename(&temp_path, &final_path) {
        let _ = std::fs::remove_file(&temp_path);
        return Err(e.into());
    }

    tracing::info!("Saved {} rows to {}", df.height(), final_path.display());
    Ok(final_path)
}

fn write_csv(df: &mut DataFrame, path: &Path) -> Result<()> {
    let mut file = File::create(path)?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(df)
        .map_err(|e| PrepError::Io(std::io::Error::other(e.to_string())))?;
    file.sync_all()?;
    Ok(())
}

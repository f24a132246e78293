use epdx_core::error::EpdError;
use epdx_core::{export, normalize};
use serde_json::Value;
use std::path::PathBuf;

pub fn run(input_file: PathBuf, format: &str, out: Option<PathBuf>) -> Result<(), EpdError> {
    let bytes = std::fs::read(&input_file)?;
    let raw: Value = serde_json::from_slice(&bytes)?;
    let epd = normalize(&raw);

    let (content, extension) = match format {
        "json" => (export::to_json(&raw)?, "json"),
        "csv" => (export::to_csv(&epd)?, "csv"),
        other => {
            return Err(EpdError::Export(format!(
                "unknown export format '{other}' (expected 'json' or 'csv')"
            )))
        }
    };

    let path = out.unwrap_or_else(|| PathBuf::from(export::export_filename(&epd, extension)));
    std::fs::write(&path, content)?;
    eprintln!("Export written to {}", path.display());

    Ok(())
}

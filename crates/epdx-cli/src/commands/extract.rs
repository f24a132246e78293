use epdx_core::error::EpdError;
use epdx_core::{export, normalize, ExtractionClient, Session};
use std::path::PathBuf;
use std::time::Duration;

use crate::output;

pub async fn run(
    input_file: PathBuf,
    output_format: &str,
    out: Option<PathBuf>,
    csv: Option<PathBuf>,
    save: bool,
    api_url: &str,
    timeout_secs: u64,
) -> Result<(), EpdError> {
    let client = ExtractionClient::with_timeout(api_url, Duration::from_secs(timeout_secs))?;
    let mut session = Session::new(client);

    session.select_file(&input_file)?;
    session.extract().await?;

    let data = session.current_data().ok_or(EpdError::NoData)?;
    let epd = normalize(data);

    match output_format {
        "json" => output::json::print(data)?,
        _ => output::table::print(&epd),
    }

    if let Some(path) = &out {
        std::fs::write(path, session.export_json()?)?;
        eprintln!("Raw response written to {}", path.display());
    }
    if let Some(path) = &csv {
        std::fs::write(path, session.export_csv()?)?;
        eprintln!("CSV export written to {}", path.display());
    }
    if save {
        let json_name = export::export_filename(&epd, "json");
        std::fs::write(&json_name, session.export_json()?)?;
        let csv_name = export::export_filename(&epd, "csv");
        std::fs::write(&csv_name, session.export_csv()?)?;
        eprintln!("Exports written to {json_name} and {csv_name}");
    }

    Ok(())
}

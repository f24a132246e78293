use crate::error::EpdError;
use crate::model::{CarbonFootprint, NormalizedEpd, Quantity};
use chrono::{DateTime, Utc};
use serde_json::Value;

/// Default CSV units. These exact byte sequences (double-encoded UTF-8) are
/// part of the export contract that downstream consumers match on; they must
/// not be normalized to clean UTF-8.
pub const CSV_GWP_UNIT: &str = "kg CO‚ÇÇe";
pub const CSV_DENSITY_UNIT: &str = "kg/m¬≥";
pub const CSV_CO2_UNIT: &str = "kg CO‚ÇÇe/kg";

const FALLBACK_BASE_NAME: &str = "EPD-Data";

/// Serialize the raw API response as pretty-printed JSON (2-space indent).
///
/// The JSON export is of the raw response, not the normalized view, so
/// downstream consumers retain full fidelity.
pub fn to_json(raw: &Value) -> Result<String, EpdError> {
    Ok(serde_json::to_string_pretty(raw)?)
}

/// Encode the normalized field set as a 4-column CSV table
/// (`Field,Value,Unit,Source`).
///
/// The calculated CO2-per-kg row leads (only when calculable), followed by
/// the fixed field catalog; a row is emitted only when its field resolved.
/// Values containing a comma or a double quote are wrapped in double quotes
/// with internal quotes doubled. Rows are newline-joined without a trailing
/// terminator.
pub fn to_csv(epd: &NormalizedEpd) -> Result<String, EpdError> {
    let mut rows: Vec<[String; 4]> = Vec::new();

    if let Some(CarbonFootprint::PerKg(value)) = &epd.carbon_footprint {
        rows.push([
            "CO2 Equivalent per kg".to_string(),
            value.to_string(),
            CSV_CO2_UNIT.to_string(),
            "Calculated".to_string(),
        ]);
    }

    push_text(&mut rows, "Product Name", &epd.product_name);
    push_text(&mut rows, "Manufacturer", &epd.manufacturer);
    push_text(&mut rows, "Product Type", &epd.product_type);
    push_text(&mut rows, "Functional Unit", &epd.functional_unit);
    push_text(&mut rows, "EPD Number", &epd.epd_number);
    push_text(&mut rows, "Standard", &epd.standard);
    push_text(&mut rows, "Validity Period", &epd.validity_period);

    push_quantity(&mut rows, "Global Warming Potential", &epd.gwp, CSV_GWP_UNIT);
    push_quantity(
        &mut rows,
        "Material Density",
        &epd.material_density,
        CSV_DENSITY_UNIT,
    );
    push_quantity(
        &mut rows,
        "Material Weight",
        &epd.material_weight,
        CSV_DENSITY_UNIT,
    );

    push_text(&mut rows, "Acidification Potential", &epd.acidification);
    push_text(&mut rows, "Eutrophication Potential", &epd.eutrophication);
    push_text(&mut rows, "Ozone Depletion Potential", &epd.ozone_depletion);
    push_text(&mut rows, "Primary Energy Demand", &epd.primary_energy);

    push_text(&mut rows, "Lifecycle Phases", &epd.lifecycle_phases);
    push_text(&mut rows, "Assessment Method", &epd.assessment_method);
    push_text(&mut rows, "Cut-off Rules", &epd.cut_off_rules);
    push_text(&mut rows, "Data Quality", &epd.data_quality);

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["Field", "Value", "Unit", "Source"])?;
    for row in &rows {
        writer.write_record(row)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| EpdError::Export(e.to_string()))?;
    let mut text = String::from_utf8(bytes).map_err(|e| EpdError::Export(e.to_string()))?;
    if text.ends_with('\n') {
        text.pop();
    }
    Ok(text)
}

/// Generate an export filename: sanitized product name (or "EPD-Data"),
/// a UTC second-precision timestamp, and the target extension.
pub fn export_filename(epd: &NormalizedEpd, extension: &str) -> String {
    export_filename_at(epd, extension, Utc::now())
}

/// Same as [`export_filename`], with an explicit clock for testability.
pub fn export_filename_at(
    epd: &NormalizedEpd,
    extension: &str,
    now: DateTime<Utc>,
) -> String {
    let base = epd.product_name.as_deref().unwrap_or(FALLBACK_BASE_NAME);
    let stamp = now.format("%Y-%m-%dT%H-%M-%S");
    format!("{}_{stamp}.{extension}", sanitize_base_name(base))
}

/// Replace every character outside `[A-Za-z0-9\-_]` with `_`, one for one.
pub fn sanitize_base_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

fn push_text(rows: &mut Vec<[String; 4]>, field: &str, value: &Option<String>) {
    if let Some(v) = value {
        rows.push([field.to_string(), v.clone(), String::new(), String::new()]);
    }
}

fn push_quantity(
    rows: &mut Vec<[String; 4]>,
    field: &str,
    quantity: &Option<Quantity>,
    default_unit: &str,
) {
    if let Some(q) = quantity {
        rows.push([
            field.to_string(),
            q.value.clone(),
            q.unit.clone().unwrap_or_else(|| default_unit.to_string()),
            q.source.clone().unwrap_or_default(),
        ]);
    }
}

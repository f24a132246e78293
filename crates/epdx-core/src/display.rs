use crate::model::{CarbonFootprint, NormalizedEpd, Quantity};

/// Default display units, used only when the response carried no unit string.
pub const DISPLAY_GWP_UNIT: &str = "kg CO₂e";
pub const DISPLAY_DENSITY_UNIT: &str = "kg/m³";

/// Domain-standard defaults. These stand in for an unresolved value and are
/// never filtered out of the display sequence.
pub const DEFAULT_LIFECYCLE_PHASES: &str = "A1-A3 (Cradle to Gate)";
pub const DEFAULT_ASSESSMENT_METHOD: &str = "EN 15804+A2";

const UNSPECIFIED_SOURCE: &str = "Source not specified";

/// One rendered result card: a field title, its value, and an optional
/// provenance line (quantities only).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    pub title: &'static str,
    pub value: String,
    pub source: Option<String>,
}

/// The carbon-footprint headline with its derivation line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarbonSummary {
    pub headline: String,
    pub formula: String,
}

/// Build the fixed, ordered display sequence from a normalized response.
///
/// Unresolved fields are omitted entirely; a missing field never renders as a
/// placeholder card. The two trailing system-boundary fields fall back to
/// domain defaults instead.
pub fn build_display_items(epd: &NormalizedEpd) -> Vec<DisplayItem> {
    let mut items: Vec<DisplayItem> = Vec::new();

    items.extend(text_item("Product Name", &epd.product_name));
    items.extend(text_item("Manufacturer", &epd.manufacturer));
    items.extend(text_item("Product Type", &epd.product_type));
    items.extend(text_item("Functional Unit", &epd.functional_unit));
    items.extend(text_item("EPD Number", &epd.epd_number));
    items.extend(text_item("Standard/Norm", &epd.standard));
    items.extend(text_item("Validity Period", &epd.validity_period));

    items.extend(quantity_item(
        "Global Warming Potential",
        &epd.gwp,
        DISPLAY_GWP_UNIT,
    ));
    items.extend(quantity_item(
        "Material Density",
        &epd.material_density,
        DISPLAY_DENSITY_UNIT,
    ));
    items.extend(quantity_item(
        "Material Weight",
        &epd.material_weight,
        DISPLAY_DENSITY_UNIT,
    ));

    items.extend(text_item("Acidification Potential", &epd.acidification));
    items.extend(text_item("Eutrophication Potential", &epd.eutrophication));
    items.extend(text_item("Ozone Depletion Potential", &epd.ozone_depletion));
    items.extend(text_item("Primary Energy Demand", &epd.primary_energy));

    items.push(DisplayItem {
        title: "Lifecycle Phases",
        value: epd
            .lifecycle_phases
            .clone()
            .unwrap_or_else(|| DEFAULT_LIFECYCLE_PHASES.to_string()),
        source: None,
    });
    items.push(DisplayItem {
        title: "Assessment Method",
        value: epd
            .assessment_method
            .clone()
            .unwrap_or_else(|| DEFAULT_ASSESSMENT_METHOD.to_string()),
        source: None,
    });

    items
}

/// Render the carbon-footprint headline.
///
/// Calculable values are shown to 4 decimal places with the derivation
/// `GWP ÷ density = result`; the GWP and density slots fall back to the
/// placeholder letters X and Y when those fields are themselves unresolved.
pub fn carbon_summary(epd: &NormalizedEpd) -> CarbonSummary {
    match &epd.carbon_footprint {
        Some(CarbonFootprint::PerKg(value)) => {
            let gwp = epd.gwp.as_ref().map(|q| q.value.as_str()).unwrap_or("X");
            let density = epd
                .material_density
                .as_ref()
                .map(|q| q.value.as_str())
                .unwrap_or("Y");
            CarbonSummary {
                headline: format!("{value:.4} kg CO₂e/kg"),
                formula: format!("{gwp} kg CO₂e/m³ ÷ {density} kg/m³ = {value} kg CO₂e/kg"),
            }
        }
        Some(CarbonFootprint::NotCalculable { reason }) => CarbonSummary {
            headline: "Not calculable".to_string(),
            formula: reason
                .clone()
                .unwrap_or_else(|| "Insufficient data available".to_string()),
        },
        None => CarbonSummary {
            headline: "Not calculable".to_string(),
            formula: "Insufficient data available".to_string(),
        },
    }
}

fn text_item(title: &'static str, value: &Option<String>) -> Option<DisplayItem> {
    value.as_ref().map(|v| DisplayItem {
        title,
        value: v.clone(),
        source: None,
    })
}

fn quantity_item(
    title: &'static str,
    quantity: &Option<Quantity>,
    default_unit: &str,
) -> Option<DisplayItem> {
    quantity.as_ref().map(|q| DisplayItem {
        title,
        value: format!("{} {}", q.value, q.unit.as_deref().unwrap_or(default_unit)),
        source: Some(
            q.source
                .clone()
                .unwrap_or_else(|| UNSPECIFIED_SOURCE.to_string()),
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;
    use serde_json::json;

    #[test]
    fn test_missing_fields_are_omitted() {
        let epd = normalize(&json!({ "data": { "product_name": "Beam" } }));
        let items = build_display_items(&epd);
        let titles: Vec<&str> = items.iter().map(|i| i.title).collect();
        assert!(titles.contains(&"Product Name"));
        assert!(!titles.contains(&"Manufacturer"));
        assert!(!titles.contains(&"Acidification Potential"));
    }

    #[test]
    fn test_lifecycle_and_method_defaults_always_present() {
        let epd = normalize(&json!({}));
        let items = build_display_items(&epd);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title, "Lifecycle Phases");
        assert_eq!(items[0].value, "A1-A3 (Cradle to Gate)");
        assert_eq!(items[1].title, "Assessment Method");
        assert_eq!(items[1].value, "EN 15804+A2");
    }

    #[test]
    fn test_catalog_order_is_fixed() {
        let epd = normalize(&json!({
            "data": {
                "product_name": "Beam",
                "manufacturer": "Acme",
                "gwp": { "value": 10 },
                "impact_categories": { "acidification": "0.1" }
            }
        }));
        let titles: Vec<&str> = build_display_items(&epd).iter().map(|i| i.title).collect();
        assert_eq!(
            titles,
            vec![
                "Product Name",
                "Manufacturer",
                "Global Warming Potential",
                "Acidification Potential",
                "Lifecycle Phases",
                "Assessment Method",
            ]
        );
    }

    #[test]
    fn test_quantity_uses_response_unit_over_default() {
        let epd = normalize(&json!({
            "data": { "gwp": { "value": 10, "unit": "kg CO2e" } }
        }));
        let items = build_display_items(&epd);
        let gwp = items
            .iter()
            .find(|i| i.title == "Global Warming Potential")
            .unwrap();
        assert_eq!(gwp.value, "10 kg CO2e");
    }

    #[test]
    fn test_quantity_default_units_and_source() {
        let epd = normalize(&json!({
            "data": {
                "gwp": { "value": 10 },
                "material_density": { "value": 2350, "source": "Section 4" }
            }
        }));
        let items = build_display_items(&epd);
        let gwp = items
            .iter()
            .find(|i| i.title == "Global Warming Potential")
            .unwrap();
        assert_eq!(gwp.value, "10 kg CO₂e");
        assert_eq!(gwp.source.as_deref(), Some("Source not specified"));

        let density = items.iter().find(|i| i.title == "Material Density").unwrap();
        assert_eq!(density.value, "2350 kg/m³");
        assert_eq!(density.source.as_deref(), Some("Section 4"));
    }

    #[test]
    fn test_carbon_summary_calculable() {
        let epd = normalize(&json!({
            "data": {
                "product_name": "X",
                "gwp": { "value": 10, "unit": "kg CO2e" },
                "material_density": { "value": 2 }
            },
            "carbonFootprintPerKg": { "value": 5 }
        }));
        let summary = carbon_summary(&epd);
        assert_eq!(summary.headline, "5.0000 kg CO₂e/kg");
        assert_eq!(
            summary.formula,
            "10 kg CO₂e/m³ ÷ 2 kg/m³ = 5 kg CO₂e/kg"
        );
    }

    #[test]
    fn test_carbon_summary_placeholders_for_unresolved_inputs() {
        let epd = normalize(&json!({ "carbonFootprintPerKg": { "value": 1.5 } }));
        let summary = carbon_summary(&epd);
        assert_eq!(summary.headline, "1.5000 kg CO₂e/kg");
        assert_eq!(summary.formula, "X kg CO₂e/m³ ÷ Y kg/m³ = 1.5 kg CO₂e/kg");
    }

    #[test]
    fn test_carbon_summary_not_calculable_shows_reason() {
        let epd = normalize(&json!({
            "carbonFootprintPerKg": { "value": "Not calculable", "reason": "density missing" }
        }));
        let summary = carbon_summary(&epd);
        assert_eq!(summary.headline, "Not calculable");
        assert_eq!(summary.formula, "density missing");
    }

    #[test]
    fn test_carbon_summary_absent_uses_generic_fallback() {
        let epd = normalize(&json!({}));
        let summary = carbon_summary(&epd);
        assert_eq!(summary.headline, "Not calculable");
        assert_eq!(summary.formula, "Insufficient data available");
    }
}

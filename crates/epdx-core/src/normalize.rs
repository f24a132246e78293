use crate::model::{CarbonFootprint, NormalizedEpd, Quantity};
use serde_json::Value;

/// Ordered fallback-key lists, one per canonical field.
///
/// The extraction service does not guarantee a response shape: the same
/// logical field shows up under snake_case, camelCase or a domain synonym
/// depending on the source document. Each list is walked in priority order
/// and the first usable value wins, identically for display and export.
pub mod keys {
    pub const PRODUCT_NAME: &[&str] = &[
        "product_name",
        "productName",
        "material_name",
        "materialName",
    ];
    pub const MANUFACTURER: &[&str] = &["manufacturer", "company", "producer"];
    pub const PRODUCT_TYPE: &[&str] = &["product_type", "productType", "category"];
    pub const FUNCTIONAL_UNIT: &[&str] = &["functional_unit", "functionalUnit"];
    pub const EPD_NUMBER: &[&str] = &["epd_number", "epdNumber", "declaration_number"];
    pub const STANDARD: &[&str] = &["standard", "norm", "certification"];
    pub const VALIDITY_PERIOD: &[&str] = &["validity_period", "validity", "valid_until"];

    /// Structured and flat spellings coincide for GWP; density and weight
    /// have distinct camelCase flat fallbacks.
    pub const GWP: &[&str] = &["gwp"];
    pub const MATERIAL_DENSITY: &[&str] = &["material_density"];
    pub const MATERIAL_DENSITY_FLAT: &[&str] = &["materialDensity"];
    pub const MATERIAL_WEIGHT: &[&str] = &["material_weight"];
    pub const MATERIAL_WEIGHT_FLAT: &[&str] = &["materialWeight"];

    pub const IMPACT_CATEGORIES: &[&str] = &[
        "impact_categories",
        "impactCategories",
        "environmental_impacts",
    ];
    pub const ACIDIFICATION: &[&str] = &["acidification", "ap", "acidification_potential"];
    pub const EUTROPHICATION: &[&str] = &["eutrophication", "ep", "eutrophication_potential"];
    pub const OZONE_DEPLETION: &[&str] = &["ozone_depletion", "odp", "ozone_depletion_potential"];
    pub const PRIMARY_ENERGY: &[&str] = &["primary_energy", "pe", "primary_energy_demand"];

    pub const SYSTEM_BOUNDARIES: &[&str] =
        &["system_boundaries", "systemBoundaries", "methodology"];
    pub const LIFECYCLE_PHASES: &[&str] = &["lifecycle_phases", "phases", "life_cycle_stages"];
    pub const ASSESSMENT_METHOD: &[&str] = &["assessment_method", "method", "lca_method"];
    pub const CUT_OFF_RULES: &[&str] = &["cut_off_rules", "cutOff", "cutoff_criteria"];
    pub const DATA_QUALITY: &[&str] = &["data_quality", "quality", "data_representativeness"];

    pub const CARBON_FOOTPRINT: &str = "carbonFootprintPerKg";
}

/// Resolve a field from a raw response by walking `candidate_keys` in order.
///
/// For each key, the nested `data` sub-object (if present) is checked before
/// the top level. Null values and empty strings do not count as hits; `0` and
/// `false` do.
pub fn resolve_field<'a>(raw: &'a Value, candidate_keys: &[&str]) -> Option<&'a Value> {
    let data = raw.get("data").filter(|d| d.is_object());
    for key in candidate_keys {
        for scope in data.iter().copied().chain(std::iter::once(raw)) {
            if let Some(v) = scope.get(key) {
                if !is_missing(v) {
                    return Some(v);
                }
            }
        }
    }
    None
}

/// Derive the canonical field set from a raw extraction response.
///
/// Pure and deterministic: the same response always yields the same
/// `NormalizedEpd`, and both derivations (display, export) go through here.
pub fn normalize(raw: &Value) -> NormalizedEpd {
    NormalizedEpd {
        product_name: resolve_scalar(raw, keys::PRODUCT_NAME),
        manufacturer: resolve_scalar(raw, keys::MANUFACTURER),
        product_type: resolve_scalar(raw, keys::PRODUCT_TYPE),
        functional_unit: resolve_scalar(raw, keys::FUNCTIONAL_UNIT),
        epd_number: resolve_scalar(raw, keys::EPD_NUMBER),
        standard: resolve_scalar(raw, keys::STANDARD),
        validity_period: resolve_scalar(raw, keys::VALIDITY_PERIOD),

        gwp: resolve_quantity(raw, keys::GWP, keys::GWP),
        material_density: resolve_quantity(
            raw,
            keys::MATERIAL_DENSITY,
            keys::MATERIAL_DENSITY_FLAT,
        ),
        material_weight: resolve_quantity(raw, keys::MATERIAL_WEIGHT, keys::MATERIAL_WEIGHT_FLAT),

        acidification: resolve_nested(raw, keys::IMPACT_CATEGORIES, keys::ACIDIFICATION),
        eutrophication: resolve_nested(raw, keys::IMPACT_CATEGORIES, keys::EUTROPHICATION),
        ozone_depletion: resolve_nested(raw, keys::IMPACT_CATEGORIES, keys::OZONE_DEPLETION),
        primary_energy: resolve_nested(raw, keys::IMPACT_CATEGORIES, keys::PRIMARY_ENERGY),

        lifecycle_phases: resolve_nested(raw, keys::SYSTEM_BOUNDARIES, keys::LIFECYCLE_PHASES),
        assessment_method: resolve_nested(raw, keys::SYSTEM_BOUNDARIES, keys::ASSESSMENT_METHOD),
        cut_off_rules: resolve_nested(raw, keys::SYSTEM_BOUNDARIES, keys::CUT_OFF_RULES),
        data_quality: resolve_nested(raw, keys::SYSTEM_BOUNDARIES, keys::DATA_QUALITY),

        carbon_footprint: resolve_carbon(raw),
    }
}

/// Resolve a field and render it as text.
pub fn resolve_scalar(raw: &Value, candidate_keys: &[&str]) -> Option<String> {
    resolve_field(raw, candidate_keys).map(render_scalar)
}

/// Resolve a structured quantity (`{value, unit?, source?}`).
///
/// Tries the structured object first; a bare scalar under the structured key
/// is accepted as a value without unit, as is a scalar under the flat
/// fallback keys. Default units are applied at display/export time, not here.
fn resolve_quantity(
    raw: &Value,
    structured_keys: &[&str],
    flat_keys: &[&str],
) -> Option<Quantity> {
    if let Some(resolved) = resolve_field(raw, structured_keys) {
        if let Some(value) = resolved.get("value").filter(|v| !is_missing(v)) {
            return Some(Quantity {
                value: render_scalar(value),
                unit: resolved.get("unit").filter(|v| !is_missing(v)).map(render_scalar),
                source: resolved
                    .get("source")
                    .filter(|v| !is_missing(v))
                    .map(render_scalar),
            });
        }
        if !resolved.is_object() && !resolved.is_array() {
            return Some(Quantity {
                value: render_scalar(resolved),
                unit: None,
                source: None,
            });
        }
    }
    resolve_field(raw, flat_keys)
        .filter(|v| !v.is_object() && !v.is_array())
        .map(|v| Quantity {
            value: render_scalar(v),
            unit: None,
            source: None,
        })
}

/// Resolve a child field under a container that itself has fallback keys
/// (impact categories, system boundaries). An absent container leaves every
/// child unresolved.
fn resolve_nested(raw: &Value, container_keys: &[&str], child_keys: &[&str]) -> Option<String> {
    let container = resolve_field(raw, container_keys)?;
    for key in child_keys {
        if let Some(v) = container.get(key) {
            if !is_missing(v) {
                return Some(render_scalar(v));
            }
        }
    }
    None
}

fn resolve_carbon(raw: &Value) -> Option<CarbonFootprint> {
    let footprint = raw.get(keys::CARBON_FOOTPRINT)?;
    let reason = footprint
        .get("reason")
        .filter(|v| !is_missing(v))
        .map(render_scalar);
    let numeric = match footprint.get("value") {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Some(match numeric {
        Some(v) => CarbonFootprint::PerKg(v),
        None => CarbonFootprint::NotCalculable { reason },
    })
}

fn is_missing(v: &Value) -> bool {
    match v {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Render a JSON scalar the way the document spelled it: strings verbatim,
/// numbers and booleans via their JSON text.
fn render_scalar(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

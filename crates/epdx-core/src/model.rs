/// A physical quantity resolved from an extraction response: a value with an
/// optional unit and an optional provenance string.
///
/// The value is kept as the string the response spelled it with (numbers keep
/// their JSON rendering), so display and export reproduce it verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quantity {
    pub value: String,
    pub unit: Option<String>,
    pub source: Option<String>,
}

/// The carbon-footprint headline reported at the top level of the API
/// response, independent of the nested `data` object.
#[derive(Debug, Clone, PartialEq)]
pub enum CarbonFootprint {
    /// kg CO₂e per kg of material.
    PerKg(f64),
    NotCalculable { reason: Option<String> },
}

/// The canonical field set derived from a raw extraction response.
///
/// Every field is resolved once, through the same ordered fallback-key lists,
/// and both the presenter and the CSV encoder read from this struct. A `None`
/// means no candidate key held a usable value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedEpd {
    pub product_name: Option<String>,
    pub manufacturer: Option<String>,
    pub product_type: Option<String>,
    pub functional_unit: Option<String>,
    pub epd_number: Option<String>,
    pub standard: Option<String>,
    pub validity_period: Option<String>,

    pub gwp: Option<Quantity>,
    pub material_density: Option<Quantity>,
    pub material_weight: Option<Quantity>,

    pub acidification: Option<String>,
    pub eutrophication: Option<String>,
    pub ozone_depletion: Option<String>,
    pub primary_energy: Option<String>,

    pub lifecycle_phases: Option<String>,
    pub assessment_method: Option<String>,
    pub cut_off_rules: Option<String>,
    pub data_quality: Option<String>,

    pub carbon_footprint: Option<CarbonFootprint>,
}

/// Outcome of the API health probe. A network failure and a non-2xx response
/// both report `ok = false`; callers do not need to distinguish them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthStatus {
    pub ok: bool,
    pub version: Option<String>,
}

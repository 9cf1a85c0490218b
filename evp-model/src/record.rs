use csv::ReaderBuilder;
use log::info;
use serde::{Deserialize, Serialize};

use crate::category::{CafvStatus, EvCategory};

/// Embedded sample of the Washington EV population dataset, used by tests
/// and the demo dashboard. The full registration extract drops in with the
/// same header row.
pub static CSV_SAMPLE: &str = include_str!("../../fixtures/ev_population_sample.csv");

/// One row of the upstream CSV, keyed by the fixed column names the state
/// export uses. Every field is optional; normalization happens in
/// [`VehicleRecord::from_raw`].
#[derive(Debug, Deserialize)]
pub struct RawRow {
    #[serde(rename = "VIN (1-10)")]
    pub vin: Option<String>,
    #[serde(rename = "County")]
    pub county: Option<String>,
    #[serde(rename = "City")]
    pub city: Option<String>,
    #[serde(rename = "State")]
    pub state: Option<String>,
    #[serde(rename = "Postal Code")]
    pub postal_code: Option<String>,
    #[serde(rename = "Model Year")]
    pub model_year: Option<String>,
    #[serde(rename = "Make")]
    pub make: Option<String>,
    #[serde(rename = "Model")]
    pub model: Option<String>,
    #[serde(rename = "Electric Vehicle Type")]
    pub ev_type: Option<String>,
    #[serde(rename = "Clean Alternative Fuel Vehicle (CAFV) Eligibility")]
    pub cafv_eligibility: Option<String>,
    #[serde(rename = "Electric Range")]
    pub electric_range: Option<String>,
    #[serde(rename = "Base MSRP")]
    pub base_msrp: Option<String>,
    #[serde(rename = "Legislative District")]
    pub legislative_district: Option<String>,
    #[serde(rename = "Vehicle Location")]
    pub vehicle_location: Option<String>,
    #[serde(rename = "Electric Utility")]
    pub electric_utility: Option<String>,
    #[serde(rename = "2020 Census Tract")]
    pub census_tract: Option<String>,
}

/// A normalized, immutable per-vehicle registration record.
///
/// Numeric columns use `Option` instead of the upstream 0-as-unknown
/// sentinel: `None` covers absent values, unparsable values, and the
/// dataset's own literal 0. Aggregates therefore filter with `Option`
/// combinators rather than the original's recurring `> 0` checks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VehicleRecord {
    pub vin: String,
    pub county: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub model_year: Option<i32>,
    pub make: String,
    pub model: String,
    /// Raw EV-type label as shipped upstream.
    pub ev_type: String,
    /// Closed category derived from `ev_type` at normalization time.
    pub category: EvCategory,
    pub cafv: CafvStatus,
    /// Electric range in miles; `None` when unknown.
    pub electric_range: Option<u32>,
    /// Base MSRP in dollars; `None` when unknown (most rows).
    pub base_msrp: Option<u32>,
    pub legislative_district: String,
    pub vehicle_location: String,
    /// Pipe-delimited provider list; see [`VehicleRecord::primary_utility`].
    pub electric_utility: String,
    pub census_tract: String,
}

/// Best-effort parse of a count-like column. Empty, "null"/"n/a", garbage,
/// and the dataset's 0 sentinel all normalize to `None`.
fn parse_count(field: Option<&String>) -> Option<u32> {
    let trimmed = field?.trim().to_lowercase();
    match trimmed.as_str() {
        "" | "null" | "n/a" | "na" => None,
        s => match s.parse::<u32>() {
            Ok(0) => None,
            Ok(v) => Some(v),
            Err(_) => None,
        },
    }
}

/// Best-effort parse of the model year. 0 denotes unknown upstream.
fn parse_year(field: Option<&String>) -> Option<i32> {
    let trimmed = field?.trim();
    match trimmed.parse::<i32>() {
        Ok(y) if y > 0 => Some(y),
        _ => None,
    }
}

fn text(field: Option<String>) -> String {
    field.unwrap_or_default().trim().to_string()
}

impl VehicleRecord {
    /// Normalize one raw row. Malformed fields default; rows are never
    /// rejected here.
    pub fn from_raw(raw: RawRow) -> Self {
        let ev_type = text(raw.ev_type);
        let cafv_label = text(raw.cafv_eligibility);
        let category = EvCategory::from_label(&ev_type);
        let cafv = CafvStatus::from_label(&cafv_label);
        VehicleRecord {
            vin: text(raw.vin),
            county: text(raw.county),
            city: text(raw.city),
            state: text(raw.state),
            postal_code: text(raw.postal_code),
            model_year: parse_year(raw.model_year.as_ref()),
            make: text(raw.make),
            model: text(raw.model),
            ev_type,
            category,
            cafv,
            electric_range: parse_count(raw.electric_range.as_ref()),
            base_msrp: parse_count(raw.base_msrp.as_ref()),
            legislative_district: text(raw.legislative_district),
            vehicle_location: text(raw.vehicle_location),
            electric_utility: text(raw.electric_utility),
            census_tract: text(raw.census_tract),
        }
    }

    /// First segment of the pipe-delimited utility column; only that
    /// segment is semantically meaningful upstream.
    pub fn primary_utility(&self) -> &str {
        self.electric_utility
            .split("||")
            .next()
            .unwrap_or(&self.electric_utility)
            .trim()
    }

    /// County name with blank normalized to "Unknown".
    pub fn county_or_unknown(&self) -> &str {
        if self.county.is_empty() {
            "Unknown"
        } else {
            &self.county
        }
    }

    /// EV-type display label with the parenthetical qualifier stripped.
    pub fn type_label(&self) -> String {
        crate::category::strip_type_qualifier(&self.ev_type)
    }
}

/// Parse an upstream population CSV (header row required) into normalized
/// records.
///
/// Field-level problems default silently; only structural CSV errors
/// propagate, and they surface once here at the load boundary.
pub fn parse_population_csv(csv_object: &str) -> Result<Vec<VehicleRecord>, csv::Error> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(b',')
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_object.as_bytes());
    let mut records = Vec::new();
    for row in rdr.deserialize::<RawRow>() {
        records.push(VehicleRecord::from_raw(row?));
    }
    info!("parsed {} vehicle records", records.len());
    Ok(records)
}

/// Parse the embedded sample dataset.
pub fn sample_records() -> Result<Vec<VehicleRecord>, csv::Error> {
    parse_population_csv(CSV_SAMPLE)
}

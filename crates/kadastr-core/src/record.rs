//! The canonical cadastre record.

use serde::{Deserialize, Serialize};

/// Normalized cadastre record, independent of upstream structure.
///
/// Every field is independently optional; a record with all fields
/// absent is valid and means "no data", not an error. Built once per
/// lookup by [`crate::normalize`] and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CadastreRecord {
    /// Cadastre number as reported by the registry.
    pub identifier: Option<String>,
    pub address: Option<String>,
    /// Formatted with the unit suffix, e.g. `1 234.50 м²`.
    pub area: Option<String>,
    pub land_category: Option<String>,
    /// Never populated: the upstream payload carries no source field
    /// for the use code. Kept so the wire shape stays stable.
    pub permitted_use_code: Option<String>,
    pub permitted_use_by_document: Option<String>,
    /// Cadastral cost in digits plus the amount spelled out in words.
    pub assessed_value: Option<String>,
    /// `DD-MM-YYYY`, or the raw upstream value when unparseable.
    pub record_created_date: Option<String>,
    /// `DD-MM-YYYY`, or the raw upstream value when unparseable.
    pub record_updated_date: Option<String>,
    /// First ring of the parcel polygon as `[x, y]` pairs.
    pub polygon_coordinates: Option<Vec<[f64; 2]>>,
}

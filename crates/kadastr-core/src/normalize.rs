//! Best-effort mapping from a raw geoportal feature to the canonical
//! record.
//!
//! The upstream payload is an untyped JSON tree where any path may be
//! absent or of an unexpected type. `normalize` is total: whatever
//! shape comes in, a record comes out, with unreadable fields absent
//! and unparseable values passed through raw.

use serde_json::Value;

use crate::format::{format_area, format_date, format_money};
use crate::record::CadastreRecord;

/// Build a [`CadastreRecord`] from a feature's `properties`, the
/// nested `properties.options` bag, and its `geometry`. Pass
/// `Value::Null` for anything the feature lacks.
pub fn normalize(props: &Value, options: &Value, geometry: &Value) -> CadastreRecord {
    CadastreRecord {
        identifier: scalar(options, "cad_num").or_else(|| scalar(props, "descr")),
        address: scalar(options, "readable_address"),
        area: scalar(options, "specified_area").map(|v| format_area(&v)),
        land_category: scalar(props, "categoryName"),
        // No upstream source field exists for the use code.
        permitted_use_code: None,
        permitted_use_by_document: scalar(options, "permitted_use_established_by_document"),
        assessed_value: scalar(options, "cost_value").map(|v| match v.parse::<f64>() {
            Ok(amount) => format_money(amount),
            Err(_) => v,
        }),
        record_created_date: date_field(scalar(options, "cost_determination_date")),
        record_updated_date: date_field(nested_scalar(props, "systemInfo", "updated")),
        polygon_coordinates: first_ring(geometry),
    }
}

/// Read a field as its string form: strings verbatim, numbers and
/// booleans stringified, anything else treated as absent.
fn scalar(tree: &Value, key: &str) -> Option<String> {
    match tree.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn nested_scalar(tree: &Value, outer: &str, inner: &str) -> Option<String> {
    scalar(tree.get(outer)?, inner)
}

/// Empty strings count as absent; everything else goes through the
/// date formatter (which passes unparseable values along raw).
fn date_field(raw: Option<String>) -> Option<String> {
    let raw = raw?;
    if raw.is_empty() {
        return None;
    }
    Some(format_date(&raw))
}

/// First ring of the polygon. Absent geometry or coordinates yield
/// `None`; a present but empty or malformed ring yields an empty ring.
fn first_ring(geometry: &Value) -> Option<Vec<[f64; 2]>> {
    let rings = geometry.get("coordinates")?.as_array()?;
    let ring = match rings.first() {
        Some(Value::Array(points)) => points,
        _ => return Some(Vec::new()),
    };
    Some(ring.iter().filter_map(point).collect())
}

fn point(value: &Value) -> Option<[f64; 2]> {
    let pair = value.as_array()?;
    Some([pair.first()?.as_f64()?, pair.get(1)?.as_f64()?])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_feature() -> (Value, Value, Value) {
        let props = json!({
            "descr": "77:99:0000000:1",
            "categoryName": "Земли населённых пунктов",
            "systemInfo": { "updated": "2024-03-10T12:30:45" },
        });
        let options = json!({
            "cad_num": "77:03:0001001:1",
            "readable_address": "г. Москва, ул. Примерная, д. 1",
            "specified_area": 1234.5,
            "permitted_use_established_by_document": "Для размещения объектов торговли",
            "cost_value": "1234.56",
            "cost_determination_date": "2023-05-01",
        });
        let geometry = json!({
            "coordinates": [[[37.0, 55.0], [38.0, 55.0], [38.0, 56.0], [37.0, 56.0]]],
        });
        (props, options, geometry)
    }

    #[test]
    fn maps_every_field() {
        let (props, options, geometry) = full_feature();
        let record = normalize(&props, &options, &geometry);

        assert_eq!(record.identifier.as_deref(), Some("77:03:0001001:1"));
        assert_eq!(
            record.address.as_deref(),
            Some("г. Москва, ул. Примерная, д. 1")
        );
        assert_eq!(record.area.as_deref(), Some("1 234.50 м²"));
        assert_eq!(
            record.land_category.as_deref(),
            Some("Земли населённых пунктов")
        );
        assert_eq!(record.permitted_use_code, None);
        assert_eq!(
            record.permitted_use_by_document.as_deref(),
            Some("Для размещения объектов торговли")
        );
        let cost = record.assessed_value.unwrap();
        assert!(cost.starts_with("1 234 руб. 56 коп."), "{cost}");
        assert_eq!(record.record_created_date.as_deref(), Some("01-05-2023"));
        assert_eq!(record.record_updated_date.as_deref(), Some("10-03-2024"));
        assert_eq!(
            record.polygon_coordinates,
            Some(vec![[37.0, 55.0], [38.0, 55.0], [38.0, 56.0], [37.0, 56.0]])
        );
    }

    #[test]
    fn identifier_falls_back_to_descr() {
        let (props, _, _) = full_feature();
        let record = normalize(&props, &Value::Null, &Value::Null);
        assert_eq!(record.identifier.as_deref(), Some("77:99:0000000:1"));
    }

    #[test]
    fn all_null_inputs_yield_empty_record() {
        let record = normalize(&Value::Null, &Value::Null, &Value::Null);
        assert_eq!(record, CadastreRecord::default());
    }

    #[test]
    fn empty_objects_yield_empty_record() {
        let record = normalize(&json!({}), &json!({}), &json!({}));
        assert_eq!(record, CadastreRecord::default());
    }

    #[test]
    fn wrong_shapes_are_treated_as_absent() {
        let props = json!({ "categoryName": ["not", "a", "string"], "systemInfo": 42 });
        let options = json!({ "cad_num": {"nested": true} });
        let record = normalize(&props, &options, &json!("geometry?"));
        assert_eq!(record, CadastreRecord::default());
    }

    #[test]
    fn numeric_option_values_are_stringified() {
        let options = json!({ "specified_area": 500, "cost_value": 100 });
        let record = normalize(&Value::Null, &options, &Value::Null);
        assert_eq!(record.area.as_deref(), Some("500.00 м²"));
        assert!(record.assessed_value.unwrap().starts_with("100 руб. 00 коп."));
    }

    #[test]
    fn unparseable_cost_passes_through_raw() {
        let options = json!({ "cost_value": "согласовывается" });
        let record = normalize(&Value::Null, &options, &Value::Null);
        assert_eq!(record.assessed_value.as_deref(), Some("согласовывается"));
    }

    #[test]
    fn empty_date_strings_are_absent() {
        let options = json!({ "cost_determination_date": "" });
        let record = normalize(&Value::Null, &options, &Value::Null);
        assert_eq!(record.record_created_date, None);
    }

    #[test]
    fn unparseable_dates_pass_through_raw() {
        let options = json!({ "cost_determination_date": "весна 2023" });
        let record = normalize(&Value::Null, &options, &Value::Null);
        assert_eq!(record.record_created_date.as_deref(), Some("весна 2023"));
    }

    #[test]
    fn missing_geometry_means_no_polygon() {
        let record = normalize(&Value::Null, &Value::Null, &json!({}));
        assert_eq!(record.polygon_coordinates, None);
    }

    #[test]
    fn empty_coordinate_array_means_empty_ring() {
        let record = normalize(&Value::Null, &Value::Null, &json!({ "coordinates": [] }));
        assert_eq!(record.polygon_coordinates, Some(vec![]));
    }

    #[test]
    fn malformed_points_are_skipped() {
        let geometry = json!({ "coordinates": [[[37.0, 55.0], [38.0], "junk", [39.0, 56.0]]] });
        let record = normalize(&Value::Null, &Value::Null, &geometry);
        assert_eq!(
            record.polygon_coordinates,
            Some(vec![[37.0, 55.0], [39.0, 56.0]])
        );
    }
}

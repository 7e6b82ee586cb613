//! Human-readable rendering of a canonical record for the chat front
//! end: a fixed-order list of labeled fields separated by blank lines,
//! with gender-matched placeholders for absent values.

use crate::record::CadastreRecord;

const NOT_SET_M: &str = "Не указан";
const NOT_SET_F: &str = "Не указана";
const NOT_SET_N: &str = "Не указано";

/// Public NSPD map, centered via query parameters.
const MAP_BASE: &str = "https://nspd.gov.ru/map?thematic=PKK&zoom=20";

/// Render the record as a multi-line chat message.
pub fn render(record: &CadastreRecord) -> String {
    let field = |value: &Option<String>, placeholder: &str| -> String {
        value.as_deref().unwrap_or(placeholder).to_string()
    };
    format!(
        "Кадастровый номер: {}\n\n\
         Адрес: {}\n\n\
         Площадь (ГКН): {}\n\n\
         Категория земель: {}\n\n\
         Вид использования: {} ({})\n\n\
         Кадастровая стоимость: {}\n\n\
         Дата создания: {}\n\n\
         Дата обновления: {}",
        field(&record.identifier, NOT_SET_M),
        field(&record.address, NOT_SET_M),
        field(&record.area, NOT_SET_F),
        field(&record.land_category, NOT_SET_F),
        field(&record.permitted_use_code, NOT_SET_M),
        field(&record.permitted_use_by_document, NOT_SET_N),
        field(&record.assessed_value, NOT_SET_F),
        field(&record.record_created_date, NOT_SET_F),
        field(&record.record_updated_date, NOT_SET_F),
    )
}

/// [`render`] plus a map link at the parcel centroid. The link line is
/// omitted when there is no polygon to center on.
pub fn render_with_map_link(record: &CadastreRecord) -> String {
    let mut message = render(record);
    if let Some(url) = map_link(record) {
        message.push_str("\n\nСсылка на карту НСПД: ");
        message.push_str(&url);
    }
    message
}

/// Map URL at the polygon centroid (mean x, mean y), or `None` when
/// the polygon is absent or empty. The empty ring is checked up front
/// so the mean is never a division by zero.
pub fn map_link(record: &CadastreRecord) -> Option<String> {
    let ring = record.polygon_coordinates.as_deref()?;
    if ring.is_empty() {
        return None;
    }
    let count = ring.len() as f64;
    let center_x = ring.iter().map(|p| p[0]).sum::<f64>() / count;
    let center_y = ring.iter().map(|p| p[1]).sum::<f64>() / count;
    Some(format!(
        "{MAP_BASE}&coordinate_x={center_x}&coordinate_y={center_y}\
         &baseLayerId=235&theme_id=1&active_layers=36048"
    ))
}

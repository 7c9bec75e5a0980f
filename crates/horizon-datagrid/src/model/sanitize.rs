//! Imported-record sanitization.
//!
//! Imports arrive as loose records: JSON objects from the backend or
//! stringly-typed CSV rows. Sanitization maps them onto the fixed
//! [`CatalogRow`] schema: taxonomy term IDs become display names,
//! numeric `0`/`1` flags become booleans, dates are normalized, every
//! row gets its import ordinal as `key`, and the result is ordered by
//! `sortOrder`.

use std::collections::HashMap;

use serde_json::Value;

use super::date::sanitize_date;
use super::row::{CatalogRow, RowTerms};

/// One taxonomy term as delivered by the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxonomyTerm {
    /// Backend identifier.
    pub id: i64,
    /// Display name. Surrounding whitespace is trimmed during mapping.
    pub name: String,
    /// Taxonomy the term belongs to (`"category"`, `"genre"`).
    pub taxonomy: String,
}

/// Loose-value coercions matching the editor's import tolerance.
fn as_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn as_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Flags are imported as `1`/`0`, `"1"`/`"0"`, or real booleans;
/// only `1` (or `true`) counts as set.
fn as_flag(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        _ => as_i64(value) == Some(1),
    }
}

/// Map a term list onto display names.
///
/// Numeric entries are looked up in the taxonomy map (unknown IDs are
/// dropped); string entries are kept as-is, trimmed.
fn term_names(value: &Value, names_by_id: Option<&HashMap<i64, String>>) -> Option<Vec<String>> {
    let entries = value.as_array()?;
    let mapped: Vec<String> = entries
        .iter()
        .filter_map(|entry| match entry {
            Value::String(name) => Some(name.trim().to_string()),
            _ => {
                let id = as_i64(entry)?;
                names_by_id.and_then(|names| names.get(&id).cloned())
            }
        })
        .filter(|name| !name.is_empty())
        .collect();
    Some(mapped)
}

/// Sanitize imported records into catalog rows.
///
/// Records that are not JSON objects are skipped. The result is sorted
/// by `sortOrder` (missing values sort as 0); `key` carries each
/// record's position in the input.
pub fn sanitize_imported_rows(records: &[Value], terms: &[TaxonomyTerm]) -> Vec<CatalogRow> {
    // taxonomy -> (id -> trimmed name)
    let mut term_maps: HashMap<&str, HashMap<i64, String>> = HashMap::new();
    for term in terms {
        term_maps
            .entry(term.taxonomy.as_str())
            .or_default()
            .insert(term.id, term.name.trim().to_string());
    }

    let mut rows: Vec<CatalogRow> = records
        .iter()
        .enumerate()
        .filter_map(|(index, record)| {
            let object = record.as_object()?;
            let mut row = CatalogRow {
                key: Some(index as i64),
                ..CatalogRow::default()
            };

            if let Some(value) = object.get("id") {
                row.id = as_i64(value);
            }
            if let Some(value) = object.get("title").and_then(as_string) {
                row.title = value;
            }
            if let Some(value) = object.get("price").and_then(as_i64) {
                row.price = value;
            }
            if let Some(value) = object.get("stock").and_then(as_i64) {
                row.stock = value;
            }
            if let Some(value) = object.get("infiniteStock") {
                row.infinite_stock = as_flag(value);
            }
            if let Some(value) = object.get("pubdate").and_then(as_string) {
                row.pubdate = sanitize_date(&value);
            }
            if let Some(value) = object.get("cost") {
                row.cost = as_i64(value);
            }
            if let Some(value) = object.get("totalSalesAmount").and_then(as_i64) {
                row.total_sales_amount = value;
            }
            if let Some(value) = object.get("image").and_then(as_string) {
                row.image = value;
            }
            if let Some(value) = object.get("sortOrder") {
                row.sort_order = as_i64(value);
            }
            if let Some(value) = object.get("hidden") {
                row.hidden = as_flag(value);
            }
            if let Some(value) = object.get("r18") {
                row.r18 = as_flag(value);
            }
            if let Some(value) = object.get("terms").and_then(Value::as_object) {
                row.terms = RowTerms {
                    category: value
                        .get("category")
                        .and_then(|v| term_names(v, term_maps.get("category"))),
                    genre: value
                        .get("genre")
                        .and_then(|v| term_names(v, term_maps.get("genre"))),
                };
            }

            Some(row)
        })
        .collect();

    rows.sort_by_key(|row| row.sort_order.unwrap_or(0));

    tracing::debug!(
        target: "horizon_datagrid::model",
        imported = rows.len(),
        skipped = records.len() - rows.len(),
        "sanitized imported rows"
    );
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn terms() -> Vec<TaxonomyTerm> {
        vec![
            TaxonomyTerm {
                id: 1,
                name: " Books ".to_string(),
                taxonomy: "category".to_string(),
            },
            TaxonomyTerm {
                id: 2,
                name: "Games".to_string(),
                taxonomy: "category".to_string(),
            },
            TaxonomyTerm {
                id: 7,
                name: "Mystery".to_string(),
                taxonomy: "genre".to_string(),
            },
        ]
    }

    #[test]
    fn test_term_ids_become_trimmed_names() {
        let records = [json!({
            "title": "With terms",
            "terms": { "category": [1, 2], "genre": [7] }
        })];

        let rows = sanitize_imported_rows(&records, &terms());
        assert_eq!(
            rows[0].terms.category,
            Some(vec!["Books".to_string(), "Games".to_string()])
        );
        assert_eq!(rows[0].terms.genre, Some(vec!["Mystery".to_string()]));
    }

    #[test]
    fn test_unknown_term_ids_are_dropped() {
        let records = [json!({
            "terms": { "category": [1, 999] }
        })];

        let rows = sanitize_imported_rows(&records, &terms());
        assert_eq!(rows[0].terms.category, Some(vec!["Books".to_string()]));
    }

    #[test]
    fn test_string_terms_pass_through() {
        let records = [json!({
            "terms": { "genre": [" Horror "] }
        })];

        let rows = sanitize_imported_rows(&records, &[]);
        assert_eq!(rows[0].terms.genre, Some(vec!["Horror".to_string()]));
    }

    #[test]
    fn test_flag_coercion() {
        let records = [json!({
            "infiniteStock": 1,
            "hidden": "1",
            "r18": 0
        })];

        let rows = sanitize_imported_rows(&records, &[]);
        assert!(rows[0].infinite_stock);
        assert!(rows[0].hidden);
        assert!(!rows[0].r18);
    }

    #[test]
    fn test_pubdate_is_normalized() {
        let records = [json!({ "pubdate": "2026/08/06" })];
        let rows = sanitize_imported_rows(&records, &[]);
        assert_eq!(rows[0].pubdate, "2026-08-06");

        let records = [json!({ "pubdate": "garbage" })];
        let rows = sanitize_imported_rows(&records, &[]);
        assert_eq!(rows[0].pubdate, "");
    }

    #[test]
    fn test_numeric_strings_coerce() {
        let records = [json!({
            "price": "1200",
            "stock": "3",
            "cost": "80"
        })];

        let rows = sanitize_imported_rows(&records, &[]);
        assert_eq!(rows[0].price, 1200);
        assert_eq!(rows[0].stock, 3);
        assert_eq!(rows[0].cost, Some(80));
    }

    #[test]
    fn test_missing_fields_keep_editor_defaults() {
        let records = [json!({ "title": "Sparse" })];
        let rows = sanitize_imported_rows(&records, &[]);
        assert_eq!(rows[0].price, 500);
        assert_eq!(rows[0].stock, 10);
    }

    #[test]
    fn test_rows_sorted_by_sort_order_with_keys_assigned() {
        let records = [
            json!({ "title": "second", "sortOrder": 5 }),
            json!({ "title": "first", "sortOrder": 1 }),
            json!({ "title": "zeroth" }),
        ];

        let rows = sanitize_imported_rows(&records, &[]);
        let titles: Vec<&str> = rows.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["zeroth", "first", "second"]);
        // Keys carry the original input ordinals.
        assert_eq!(rows[0].key, Some(2));
        assert_eq!(rows[1].key, Some(1));
        assert_eq!(rows[2].key, Some(0));
    }

    #[test]
    fn test_non_object_records_are_skipped() {
        let records = [json!("not a record"), json!({ "title": "kept" })];
        let rows = sanitize_imported_rows(&records, &[]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].title, "kept");
    }
}

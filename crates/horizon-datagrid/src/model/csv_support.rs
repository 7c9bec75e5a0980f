//! CSV import/export for catalog rows.
//!
//! The exchange format is one row per catalog item with camelCase
//! headers matching the row schema. Flags are written as `1`/`0` (the
//! form the sanitizer coerces back), absent optionals as empty cells,
//! and taxonomy terms as `;`-joined names in `category`/`genre` columns.
//!
//! Import goes through the same path as backend imports: records are
//! first lifted into loose JSON objects, then pushed through
//! [`sanitize_imported_rows`], so CSV files get identical coercion and
//! ordering behavior.

use serde_json::{Map, Value, json};

use super::error::{ModelError, ModelResult};
use super::row::CatalogRow;
use super::sanitize::{TaxonomyTerm, sanitize_imported_rows};

/// Column order of the exchange format.
const HEADERS: [&str; 15] = [
    "key",
    "id",
    "title",
    "price",
    "stock",
    "infiniteStock",
    "pubdate",
    "cost",
    "totalSalesAmount",
    "image",
    "sortOrder",
    "hidden",
    "r18",
    "category",
    "genre",
];

fn optional_cell(value: Option<i64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn flag_cell(value: bool) -> &'static str {
    if value { "1" } else { "0" }
}

fn terms_cell(names: Option<&Vec<String>>) -> String {
    names.map(|n| n.join(";")).unwrap_or_default()
}

/// Serialize rows to a CSV document.
pub fn export_catalog_csv(rows: &[CatalogRow]) -> ModelResult<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(HEADERS)?;

    for row in rows {
        writer.write_record([
            optional_cell(row.key),
            optional_cell(row.id),
            row.title.clone(),
            row.price.to_string(),
            row.stock.to_string(),
            flag_cell(row.infinite_stock).to_string(),
            row.pubdate.clone(),
            optional_cell(row.cost),
            row.total_sales_amount.to_string(),
            row.image.clone(),
            optional_cell(row.sort_order),
            flag_cell(row.hidden).to_string(),
            flag_cell(row.r18).to_string(),
            terms_cell(row.terms.category.as_ref()),
            terms_cell(row.terms.genre.as_ref()),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| ModelError::InvalidData(err.to_string()))?;
    String::from_utf8(bytes).map_err(|err| ModelError::InvalidData(err.to_string()))
}

/// Split a `;`-joined terms cell into a name list.
fn split_terms(cell: &str) -> Value {
    let names: Vec<Value> = cell
        .split(';')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(|name| Value::String(name.to_string()))
        .collect();
    Value::Array(names)
}

/// Parse a CSV document into loose import records.
///
/// Every cell becomes a string value under its header key; the
/// `category`/`genre` columns become term-name arrays under `terms`.
/// Empty cells are omitted so the sanitizer applies editor defaults.
pub fn parse_catalog_records(data: &str) -> ModelResult<Vec<Value>> {
    let mut reader = csv::Reader::from_reader(data.as_bytes());
    let headers = reader.headers()?.clone();

    let mut records = Vec::new();
    for result in reader.records() {
        let record = result?;
        let mut object = Map::new();
        let mut terms = Map::new();

        for (header, cell) in headers.iter().zip(record.iter()) {
            if cell.is_empty() {
                continue;
            }
            match header {
                "category" | "genre" => {
                    terms.insert(header.to_string(), split_terms(cell));
                }
                _ => {
                    object.insert(header.to_string(), Value::String(cell.to_string()));
                }
            }
        }
        if !terms.is_empty() {
            object.insert("terms".to_string(), Value::Object(terms));
        }
        records.push(Value::Object(object));
    }

    tracing::debug!(
        target: "horizon_datagrid::model",
        records = records.len(),
        "parsed catalog CSV"
    );
    Ok(records)
}

/// Import a CSV document into sanitized catalog rows.
pub fn import_catalog_csv(data: &str, terms: &[TaxonomyTerm]) -> ModelResult<Vec<CatalogRow>> {
    let records = parse_catalog_records(data)?;
    Ok(sanitize_imported_rows(&records, terms))
}

/// A loose JSON record for one row, as the backend import path delivers
/// them. Exposed for hosts that import JSON instead of CSV.
pub fn row_to_record(row: &CatalogRow) -> Value {
    json!(row)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::row::RowTerms;

    fn sample_row() -> CatalogRow {
        CatalogRow {
            key: Some(0),
            id: Some(11),
            title: "Paperback".to_string(),
            price: 1200,
            stock: 4,
            infinite_stock: false,
            pubdate: "2026-08-06".to_string(),
            cost: Some(300),
            total_sales_amount: 8400,
            image: String::new(),
            sort_order: Some(1),
            hidden: false,
            r18: true,
            terms: RowTerms {
                category: Some(vec!["Books".to_string(), "Games".to_string()]),
                genre: None,
            },
        }
    }

    #[test]
    fn test_export_headers_and_cells() {
        let csv = export_catalog_csv(&[sample_row()]).unwrap();
        let mut lines = csv.lines();

        assert_eq!(
            lines.next().unwrap(),
            "key,id,title,price,stock,infiniteStock,pubdate,cost,totalSalesAmount,image,sortOrder,hidden,r18,category,genre"
        );
        assert_eq!(
            lines.next().unwrap(),
            "0,11,Paperback,1200,4,0,2026-08-06,300,8400,,1,0,1,Books;Games,"
        );
    }

    #[test]
    fn test_import_round_trips_through_sanitizer() {
        let exported = export_catalog_csv(&[sample_row()]).unwrap();
        let rows = import_catalog_csv(&exported, &[]).unwrap();

        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.title, "Paperback");
        assert_eq!(row.price, 1200);
        assert_eq!(row.stock, 4);
        assert_eq!(row.cost, Some(300));
        assert_eq!(row.total_sales_amount, 8400);
        assert_eq!(row.pubdate, "2026-08-06");
        assert!(!row.infinite_stock);
        assert!(!row.hidden);
        assert!(row.r18);
        assert_eq!(
            row.terms.category,
            Some(vec!["Books".to_string(), "Games".to_string()])
        );
        // The empty genre cell is omitted on import.
        assert_eq!(row.terms.genre, None);
    }

    #[test]
    fn test_import_applies_defaults_and_ordering() {
        let data = "\
title,price,sortOrder
second,800,5
first,,1
";
        let rows = import_catalog_csv(data, &[]).unwrap();
        assert_eq!(rows[0].title, "first");
        assert_eq!(rows[0].price, 500);
        assert_eq!(rows[1].title, "second");
        assert_eq!(rows[1].price, 800);
    }

    #[test]
    fn test_import_rejects_ragged_records() {
        // A record with more fields than the header row is a hard
        // error, not a silent skip.
        let data = "title,price\nitem,100,extra\n";
        assert!(import_catalog_csv(data, &[]).is_err());
    }

    #[test]
    fn test_file_backed_exchange() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.csv");

        std::fs::write(&path, export_catalog_csv(&[sample_row()]).unwrap()).unwrap();
        let data = std::fs::read_to_string(&path).unwrap();

        let rows = import_catalog_csv(&data, &[]).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].title, "Paperback");
    }

    #[test]
    fn test_row_to_record_uses_wire_keys() {
        let record = row_to_record(&sample_row());
        assert_eq!(record["infiniteStock"], false);
        assert_eq!(record["totalSalesAmount"], 8400);
    }
}

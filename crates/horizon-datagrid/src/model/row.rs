//! The catalog row schema.
//!
//! One grid row edits one catalog item. The field set and its editor
//! defaults are fixed; serialization uses camelCase names, which is the
//! wire format the editor exchanges with its backend and CSV layer.

use serde::{Deserialize, Serialize};

/// Default price for a freshly inserted row.
pub const DEFAULT_PRICE: i64 = 500;

/// Default stock for a freshly inserted row.
pub const DEFAULT_STOCK: i64 = 10;

/// Taxonomy terms attached to a catalog row.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RowTerms {
    /// Category term names.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Vec<String>>,
    /// Genre term names.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<Vec<String>>,
}

/// One catalog item as edited in the grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CatalogRow {
    /// Ordinal assigned at import time; `None` for rows created in the
    /// editor.
    pub key: Option<i64>,
    /// Backend identifier; `None` until the item is first saved.
    pub id: Option<i64>,
    /// Item title.
    pub title: String,
    /// Unit price.
    pub price: i64,
    /// Units in stock.
    pub stock: i64,
    /// Whether stock is unlimited (stock count ignored).
    pub infinite_stock: bool,
    /// Publication date as `YYYY-MM-DD`, or empty when unset.
    pub pubdate: String,
    /// Unit cost; optional.
    pub cost: Option<i64>,
    /// Accumulated sales amount.
    pub total_sales_amount: i64,
    /// Thumbnail as a data URI, or empty when unset.
    pub image: String,
    /// Explicit sort position; `None` sorts as 0.
    pub sort_order: Option<i64>,
    /// Whether the item is hidden from the storefront.
    pub hidden: bool,
    /// Whether the item is age-restricted.
    pub r18: bool,
    /// Taxonomy terms.
    pub terms: RowTerms,
}

impl Default for CatalogRow {
    fn default() -> Self {
        Self {
            key: None,
            id: None,
            title: String::new(),
            price: DEFAULT_PRICE,
            stock: DEFAULT_STOCK,
            infinite_stock: false,
            pubdate: String::new(),
            cost: None,
            total_sales_amount: 0,
            image: String::new(),
            sort_order: None,
            hidden: false,
            r18: false,
            terms: RowTerms::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_row_values() {
        let row = CatalogRow::default();
        assert_eq!(row.price, 500);
        assert_eq!(row.stock, 10);
        assert_eq!(row.total_sales_amount, 0);
        assert!(!row.infinite_stock);
        assert!(!row.hidden);
        assert!(!row.r18);
        assert_eq!(row.key, None);
        assert_eq!(row.cost, None);
        assert_eq!(row.terms, RowTerms::default());
    }

    #[test]
    fn test_serde_uses_camel_case_keys() {
        let row = CatalogRow {
            title: "Sample".to_string(),
            infinite_stock: true,
            sort_order: Some(3),
            ..CatalogRow::default()
        };

        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["title"], "Sample");
        assert_eq!(json["infiniteStock"], true);
        assert_eq!(json["sortOrder"], 3);
        assert_eq!(json["totalSalesAmount"], 0);
        assert!(json.get("infinite_stock").is_none());
    }

    #[test]
    fn test_serde_round_trip() {
        let row = CatalogRow {
            key: Some(1),
            id: Some(42),
            title: "Round trip".to_string(),
            cost: Some(120),
            terms: RowTerms {
                category: Some(vec!["Books".to_string()]),
                genre: None,
            },
            ..CatalogRow::default()
        };

        let json = serde_json::to_string(&row).unwrap();
        let back: CatalogRow = serde_json::from_str(&json).unwrap();
        assert_eq!(back, row);
    }

    #[test]
    fn test_deserialize_fills_missing_fields_with_defaults() {
        let row: CatalogRow = serde_json::from_str(r#"{"title": "Partial"}"#).unwrap();
        assert_eq!(row.title, "Partial");
        assert_eq!(row.price, DEFAULT_PRICE);
        assert_eq!(row.stock, DEFAULT_STOCK);
    }
}

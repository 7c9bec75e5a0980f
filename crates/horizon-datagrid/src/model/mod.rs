//! Catalog data model and import/export utilities.
//!
//! The navigation subsystem itself never touches row content; these are
//! the collaborators around it: the fixed row schema the grid edits
//! ([`CatalogRow`]), sanitization of loosely-typed imports, date
//! normalization, CSV exchange, and thumbnail re-encoding.

mod csv_support;
mod date;
mod error;
mod image;
mod row;
mod sanitize;

pub use csv_support::{export_catalog_csv, import_catalog_csv, parse_catalog_records, row_to_record};
pub use date::{date_stamp, sanitize_date};
pub use error::{ModelError, ModelResult};
pub use image::{JPEG_QUALITY, MAX_IMAGE_WIDTH, image_to_data_uri};
pub use row::{CatalogRow, DEFAULT_PRICE, DEFAULT_STOCK, RowTerms};
pub use sanitize::{TaxonomyTerm, sanitize_imported_rows};

/// Shared data types.
///
/// `CatalogData` is the on-disk shape of the catalog file read by the in-memory
/// data source. `ProductRecord` and `WebsiteRecord` are what the data source
/// hands back to the reporter; they are decoupled from the file layout.
use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

/// Full contents of a catalog data file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogData {
    /// Product entities.
    #[serde(default)]
    pub products: Vec<ProductRow>,
    /// Inventory rows, joined onto products by `product_id`.
    #[serde(default)]
    pub stock_items: Vec<StockItemRow>,
    /// Website entities.
    #[serde(default)]
    pub websites: Vec<WebsiteRecord>,
    /// Module enablement table. Absent means the registry cannot be queried.
    #[serde(default)]
    pub modules: Option<BTreeMap<String, bool>>,
}

/// A product as stored in the catalog file.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductRow {
    pub entity_id: u32,
    pub type_id: String,
    /// Attribute code → raw value.
    #[serde(default)]
    pub attributes: BTreeMap<String, Value>,
    #[serde(default)]
    pub website_ids: Vec<u32>,
}

/// A `cataloginventory_stock_item` row.
#[derive(Debug, Clone, Deserialize)]
pub struct StockItemRow {
    pub product_id: u32,
    #[serde(default = "default_stock_id")]
    pub stock_id: u32,
    /// Column name → raw value (e.g. `qty`, `is_in_stock`).
    #[serde(default)]
    pub fields: BTreeMap<String, Value>,
}

fn default_stock_id() -> u32 {
    1
}

/// A website: identifier and display name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WebsiteRecord {
    pub website_id: u32,
    pub name: String,
}

/// A product as returned by a query: type, projected values, assigned websites.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductRecord {
    pub entity_id: u32,
    pub type_id: String,
    /// Field name → display value. Holds projected attributes and joined inventory fields.
    pub data: BTreeMap<String, String>,
    /// Empty unless website ids were requested.
    pub website_ids: Vec<u32>,
}

impl ProductRecord {
    /// Display value of a field, if the record carries it.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.data.get(field).map(String::as_str)
    }
}

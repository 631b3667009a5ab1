/// In-memory catalog loaded from a JSON data file.
///
/// Implements every collaborator the reporter needs: product queries with
/// projection, inventory joins, type filtering and ordering; module
/// enablement; website lookup.
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use anyhow::Context;
use serde_json::Value;
use tracing::{debug, trace};

use super::source::{ModuleRegistry, ProductCursor, ProductSource, WebsiteLookup};
use super::{CatalogError, ProductQuery};
use crate::types::{CatalogData, ProductRecord, ProductRow, StockItemRow, WebsiteRecord};

/// Columns every product row has regardless of its attribute set.
const PRODUCT_COLUMNS: [&str; 2] = ["entity_id", "type_id"];

/// Columns every stock item row has regardless of its fields.
const STOCK_COLUMNS: [&str; 2] = ["product_id", "stock_id"];

/// A catalog held entirely in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    data: CatalogData,
}

impl MemoryCatalog {
    #[must_use]
    pub fn new(data: CatalogData) -> Self {
        Self { data }
    }

    /// Load a catalog from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::DataFile` if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        read_catalog(path)
            .map(Self::new)
            .map_err(|e| CatalogError::DataFile(format!("{e:#}")))
    }

    fn has_attribute(&self, code: &str) -> bool {
        PRODUCT_COLUMNS.contains(&code)
            || self.data.products.is_empty()
            || self
                .data
                .products
                .iter()
                .any(|p| p.attributes.contains_key(code))
    }

    fn has_stock_column(&self, column: &str) -> bool {
        STOCK_COLUMNS.contains(&column)
            || self.data.stock_items.is_empty()
            || self
                .data
                .stock_items
                .iter()
                .any(|s| s.fields.contains_key(column))
    }

    fn validate(&self, query: &ProductQuery) -> Result<(), CatalogError> {
        if let Some(attr) = query.attributes.iter().find(|a| !self.has_attribute(a)) {
            return Err(CatalogError::Query(format!("unknown attribute '{attr}'")));
        }
        if let Some(join) = query.joins.iter().find(|j| !self.has_stock_column(&j.column)) {
            return Err(CatalogError::Query(format!(
                "unknown column '{}' in table '{}'",
                join.column, join.table
            )));
        }
        if let Some(order) = &query.order_by {
            if !query.exposes(order) && !self.has_attribute(order) {
                return Err(CatalogError::Query(format!(
                    "cannot order by unknown field '{order}'"
                )));
            }
        }
        Ok(())
    }

    fn stock_item(&self, product_id: u32, stock_id: u32) -> Option<&StockItemRow> {
        self.data
            .stock_items
            .iter()
            .find(|s| s.product_id == product_id && s.stock_id == stock_id)
    }

    fn project(&self, row: &ProductRow, query: &ProductQuery) -> ProductRecord {
        let mut record = ProductRecord {
            entity_id: row.entity_id,
            type_id: row.type_id.clone(),
            ..ProductRecord::default()
        };

        for attr in &query.attributes {
            if let Some(value) = product_value(row, attr) {
                record.data.insert(attr.clone(), value);
            }
        }

        for join in &query.joins {
            let value = self
                .stock_item(row.entity_id, join.stock_id)
                .and_then(|item| stock_value(item, &join.column));
            if let Some(value) = value {
                record.data.insert(join.alias.clone(), value);
            }
        }

        if query.website_ids {
            record.website_ids.clone_from(&row.website_ids);
        }
        record
    }
}

fn read_catalog(path: &Path) -> anyhow::Result<CatalogData> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read '{}'", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("failed to parse '{}'", path.display()))
}

fn product_value(row: &ProductRow, field: &str) -> Option<String> {
    match field {
        "entity_id" => Some(row.entity_id.to_string()),
        "type_id" => Some(row.type_id.clone()),
        _ => row.attributes.get(field).map(display_value),
    }
}

fn stock_value(item: &StockItemRow, column: &str) -> Option<String> {
    match column {
        "product_id" => Some(item.product_id.to_string()),
        "stock_id" => Some(item.stock_id.to_string()),
        _ => item.fields.get(column).map(display_value),
    }
}

/// Render a raw value the way the report shows it.
#[must_use]
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null | Value::Bool(false) => String::new(),
        Value::Bool(true) => "1".to_owned(),
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// Ascending order for sort keys: absent first, then finite numbers by value, then text.
fn compare_keys(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a.map(SortKey::new), b.map(SortKey::new)) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => a.cmp(&b),
    }
}

#[derive(Debug)]
enum SortKey<'a> {
    Number(f64),
    Text(&'a str),
}

impl<'a> SortKey<'a> {
    fn new(raw: &'a str) -> Self {
        match raw.trim().parse::<f64>() {
            Ok(n) if n.is_finite() => Self::Number(n),
            _ => Self::Text(raw),
        }
    }

    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Number(x), Self::Number(y)) => x.total_cmp(y),
            (Self::Number(_), Self::Text(_)) => Ordering::Less,
            (Self::Text(_), Self::Number(_)) => Ordering::Greater,
            (Self::Text(x), Self::Text(y)) => x.cmp(y),
        }
    }
}

impl ProductSource for MemoryCatalog {
    fn execute(&self, query: &ProductQuery) -> Result<ProductCursor<'_>, CatalogError> {
        self.validate(query)?;
        debug!(
            attributes = ?query.attributes,
            joins = query.joins.len(),
            types = ?query.type_in,
            order = ?query.order_by,
            "executing product query"
        );

        let types: BTreeSet<&str> = query.type_in.iter().map(String::as_str).collect();
        let mut rows: Vec<(Option<String>, ProductRecord)> = self
            .data
            .products
            .iter()
            .filter(|row| types.is_empty() || types.contains(row.type_id.as_str()))
            .map(|row| {
                let record = self.project(row, query);
                let key = query.order_by.as_deref().and_then(|field| {
                    record
                        .get(field)
                        .map(str::to_owned)
                        .or_else(|| product_value(row, field))
                });
                (key, record)
            })
            .collect();

        if query.order_by.is_some() {
            rows.sort_by(|(a, _), (b, _)| compare_keys(a.as_deref(), b.as_deref()));
        }
        trace!(matched = rows.len(), "product query resolved");

        let cursor = rows.into_iter().map(|(_, record)| Ok::<_, CatalogError>(record));
        Ok(Box::new(cursor))
    }
}

impl ModuleRegistry for MemoryCatalog {
    fn is_enabled(&self, module: &str) -> Result<bool, CatalogError> {
        let modules = self.data.modules.as_ref().ok_or_else(|| {
            CatalogError::CapabilityUnavailable {
                module: module.to_owned(),
                reason: "catalog data has no module table".to_owned(),
            }
        })?;
        Ok(modules.get(module).copied().unwrap_or(false))
    }
}

impl WebsiteLookup for MemoryCatalog {
    fn websites_by_ids(&self, ids: &[u32]) -> Result<Vec<WebsiteRecord>, CatalogError> {
        Ok(self
            .data
            .websites
            .iter()
            .filter(|w| ids.contains(&w.website_id))
            .cloned()
            .collect())
    }
}

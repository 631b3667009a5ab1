/// Collaborator seams: product data source, module registry, website lookup.
use super::{CatalogError, ProductQuery};
use crate::types::{ProductRecord, WebsiteRecord};

/// Module whose enablement gates the inventory join.
pub const INVENTORY_MODULE: &str = "Magento_CatalogInventory";

/// Forward-only cursor over query results.
///
/// Whatever the source holds for the query is released when the cursor drops,
/// including when iteration stops early on an error.
pub type ProductCursor<'a> = Box<dyn Iterator<Item = Result<ProductRecord, CatalogError>> + 'a>;

/// Executes product queries.
pub trait ProductSource {
    /// Run `query`, returning a cursor over matching records.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Query` when the projection, join, filter or sort is rejected.
    fn execute(&self, query: &ProductQuery) -> Result<ProductCursor<'_>, CatalogError>;
}

/// Answers whether an optional module is active.
pub trait ModuleRegistry {
    /// # Errors
    ///
    /// Returns `CatalogError::CapabilityUnavailable` when enablement cannot be determined.
    fn is_enabled(&self, module: &str) -> Result<bool, CatalogError>;
}

/// Resolves website ids to website records.
pub trait WebsiteLookup {
    /// Websites whose id is in `ids`, in lookup order.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Query` when the lookup fails.
    fn websites_by_ids(&self, ids: &[u32]) -> Result<Vec<WebsiteRecord>, CatalogError>;
}

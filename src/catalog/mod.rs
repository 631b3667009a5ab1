/// Catalog domain layer: options, query building, data source seams.
pub mod errors;
pub mod memory;
pub mod options;
pub mod query;
pub mod source;

pub use errors::CatalogError;
pub use memory::MemoryCatalog;
pub use options::Options;
pub use query::ProductQuery;
pub use source::{INVENTORY_MODULE, ModuleRegistry, ProductSource, WebsiteLookup};

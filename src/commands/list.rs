/// `session:catalog:list` command: print products with projected, inventory and website fields.
use std::io::{self, Write};

use tracing::{debug, trace};

use crate::catalog::{
    CatalogError, INVENTORY_MODULE, MemoryCatalog, ModuleRegistry, Options, ProductQuery,
    ProductSource, WebsiteLookup,
};
use crate::cli::args::ListArgs;
use crate::cli::output::{end_record, timer, write_fields, write_websites};
use crate::config::Config;

/// Run `catalog-list session:catalog:list` against the configured catalog file.
///
/// # Errors
///
/// Returns `CatalogError` on bad options, unreadable catalog data, query
/// failure, or a failed write to stdout.
pub fn run(args: &ListArgs, config: &Config) -> Result<(), CatalogError> {
    let options = Options::from_args(args)?;
    debug!(?options, "options parsed");

    let catalog = {
        let _t = timer("load_catalog");
        MemoryCatalog::load(&config.data_path)?
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let printed = CatalogListReporter::new(&catalog, &catalog, &catalog).run(&options, &mut out)?;
    debug!(printed, "listing complete");
    Ok(())
}

/// Builds a product query from options and prints one line per matching record.
pub struct CatalogListReporter<'a> {
    products: &'a dyn ProductSource,
    modules: &'a dyn ModuleRegistry,
    websites: &'a dyn WebsiteLookup,
}

impl<'a> CatalogListReporter<'a> {
    #[must_use]
    pub fn new(
        products: &'a dyn ProductSource,
        modules: &'a dyn ModuleRegistry,
        websites: &'a dyn WebsiteLookup,
    ) -> Self {
        Self {
            products,
            modules,
            websites,
        }
    }

    /// Apply the optional join, website, filter and order steps to a base projection.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::CapabilityUnavailable` when inventory fields are
    /// requested and the module registry cannot answer.
    pub fn build_query(&self, options: &Options) -> Result<ProductQuery, CatalogError> {
        let mut query = ProductQuery::select(&options.attributes);

        if !options.inventory_fields.is_empty() {
            if self.modules.is_enabled(INVENTORY_MODULE)? {
                for field in &options.inventory_fields {
                    query = query.join_inventory_field(field);
                }
            } else {
                debug!(module = INVENTORY_MODULE, "module disabled, skipping inventory join");
            }
        }

        if options.print_websites {
            query = query.with_website_ids();
        }

        if !options.type_filters.is_empty() {
            query = query.filter_type_in(&options.type_filters);
        }

        if let Some(order) = &options.order_by {
            query = query.order_asc(order);
        }

        Ok(query)
    }

    /// Print every matching record to `out`, returning how many were printed.
    ///
    /// Records are written as they are fetched. On failure, records already
    /// written stay written.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` from query building, execution, iteration,
    /// website lookup, or writing.
    pub fn run<W: Write>(&self, options: &Options, out: &mut W) -> Result<usize, CatalogError> {
        let query = self.build_query(options)?;

        let _t = timer("print_products");
        let cursor = self.products.execute(&query)?;
        let mut printed = 0;
        for record in cursor {
            let record = record?;
            trace!(entity_id = record.entity_id, "printing product");

            write_fields(out, &record, &options.attributes)?;
            write_fields(out, &record, &options.inventory_fields)?;
            if options.print_websites {
                let names: Vec<String> = self
                    .websites
                    .websites_by_ids(&record.website_ids)?
                    .into_iter()
                    .map(|w| w.name)
                    .collect();
                write_websites(out, &names)?;
            }
            end_record(out)?;
            printed += 1;
        }
        Ok(printed)
    }
}

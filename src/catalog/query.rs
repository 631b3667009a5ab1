/// Product query specification, built up step by step before execution.

/// Table inventory fields are joined from.
pub const STOCK_ITEM_TABLE: &str = "cataloginventory_stock_item";

/// Stock the inventory join is restricted to.
pub const DEFAULT_STOCK_ID: u32 = 1;

/// A left join of one inventory column onto the product row.
///
/// Matches `product_id = entity_id AND stock_id = <stock_id>`; the joined value is
/// exposed under `alias`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryJoin {
    pub alias: String,
    pub table: &'static str,
    pub column: String,
    pub stock_id: u32,
}

/// Declarative description of a product query. Holds no connection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductQuery {
    /// Attribute codes to project.
    pub attributes: Vec<String>,
    /// Inventory joins, in the order they were added.
    pub joins: Vec<InventoryJoin>,
    /// Attach assigned website ids to each record.
    pub website_ids: bool,
    /// Restrict `type_id` to these values (IN). Empty means no filter.
    pub type_in: Vec<String>,
    /// Single ascending sort key.
    pub order_by: Option<String>,
}

impl ProductQuery {
    /// Start a query projecting the given attributes.
    #[must_use]
    pub fn select<I, S>(attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            attributes: attributes.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Left-join an inventory column from stock 1 under its own name.
    #[must_use]
    pub fn join_inventory_field(mut self, field: &str) -> Self {
        self.joins.push(InventoryJoin {
            alias: field.to_owned(),
            table: STOCK_ITEM_TABLE,
            column: field.to_owned(),
            stock_id: DEFAULT_STOCK_ID,
        });
        self
    }

    /// Attach each product's website ids to the result.
    #[must_use]
    pub fn with_website_ids(mut self) -> Self {
        self.website_ids = true;
        self
    }

    /// Restrict results to the given product types.
    #[must_use]
    pub fn filter_type_in(mut self, types: &[String]) -> Self {
        self.type_in = types.to_vec();
        self
    }

    /// Sort ascending by one field, replacing any earlier order.
    #[must_use]
    pub fn order_asc(mut self, field: &str) -> Self {
        self.order_by = Some(field.to_owned());
        self
    }

    /// Whether `field` is exposed by this query, either projected or joined.
    #[must_use]
    pub fn exposes(&self, field: &str) -> bool {
        self.attributes.iter().any(|a| a == field) || self.joins.iter().any(|j| j.alias == field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_only() {
        let q = ProductQuery::select(["name", "price"]);
        assert_eq!(q.attributes, vec!["name", "price"]);
        assert!(q.joins.is_empty());
        assert!(!q.website_ids);
        assert!(q.type_in.is_empty());
        assert_eq!(q.order_by, None);
    }

    #[test]
    fn test_join_uses_stock_one_and_same_alias() {
        let q = ProductQuery::select(["name"]).join_inventory_field("qty");
        assert_eq!(
            q.joins,
            vec![InventoryJoin {
                alias: "qty".to_owned(),
                table: STOCK_ITEM_TABLE,
                column: "qty".to_owned(),
                stock_id: 1,
            }]
        );
        assert!(q.exposes("qty"));
        assert!(q.exposes("name"));
        assert!(!q.exposes("price"));
    }

    #[test]
    fn test_order_replaces_previous() {
        let q = ProductQuery::select(["name"]).order_asc("name").order_asc("price");
        assert_eq!(q.order_by.as_deref(), Some("price"));
    }
}

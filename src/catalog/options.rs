/// Parsed listing options: validated once, immutable afterwards.
use super::CatalogError;
use crate::cli::args::ListArgs;

/// Default projection when `--attributes` is omitted.
pub const DEFAULT_ATTRIBUTES: &str = "name,price";

/// Default inventory join when `--inventory_fields` is omitted.
pub const DEFAULT_INVENTORY_FIELDS: &str = "qty";

/// Options driving a single listing run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Attribute codes to project, in output order. Never empty.
    pub attributes: Vec<String>,
    /// Inventory fields to join, in output order. Empty disables the join.
    pub inventory_fields: Vec<String>,
    /// Product types to restrict to, as given. Empty means no `-t` was passed.
    pub type_filters: Vec<String>,
    /// Field to sort ascending by.
    pub order_by: Option<String>,
    /// Whether to print assigned website names.
    pub print_websites: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            attributes: parse_field_list(DEFAULT_ATTRIBUTES),
            inventory_fields: parse_field_list(DEFAULT_INVENTORY_FIELDS),
            type_filters: Vec::new(),
            order_by: None,
            print_websites: false,
        }
    }
}

/// Split a comma-separated list, trimming each piece and dropping empty ones.
#[must_use]
pub fn parse_field_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}

impl Options {
    /// Build options from parsed CLI arguments.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::OptionParse` when the attribute list is empty after trimming.
    pub fn from_args(args: &ListArgs) -> Result<Self, CatalogError> {
        let attributes = parse_field_list(&args.attributes);
        if attributes.is_empty() {
            return Err(CatalogError::OptionParse {
                option: "attributes",
                reason: format!("no attribute names in '{}'", args.attributes),
            });
        }

        let mut type_filters: Vec<String> = Vec::new();
        for t in &args.types {
            if !type_filters.contains(t) {
                type_filters.push(t.clone());
            }
        }

        Ok(Self {
            attributes,
            inventory_fields: parse_field_list(&args.inventory_fields),
            type_filters,
            order_by: args
                .order
                .as_deref()
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(str::to_owned),
            print_websites: args.website.as_deref().is_some_and(|w| !w.is_empty()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(attributes: &str, inventory_fields: &str) -> ListArgs {
        ListArgs {
            attributes: attributes.to_owned(),
            inventory_fields: inventory_fields.to_owned(),
            types: Vec::new(),
            order: None,
            website: None,
        }
    }

    #[test]
    fn test_parse_field_list_trims() {
        assert_eq!(parse_field_list(" name, price "), vec!["name", "price"]);
    }

    #[test]
    fn test_parse_field_list_single_value() {
        assert_eq!(parse_field_list("qty"), vec!["qty"]);
    }

    #[test]
    fn test_parse_field_list_drops_empty_pieces() {
        assert_eq!(parse_field_list("name,,  ,sku,"), vec!["name", "sku"]);
        assert!(parse_field_list("").is_empty());
        assert!(parse_field_list(" , ").is_empty());
    }

    #[test]
    fn test_defaults() {
        let opts = Options::default();
        assert_eq!(opts.attributes, vec!["name", "price"]);
        assert_eq!(opts.inventory_fields, vec!["qty"]);
        assert!(opts.type_filters.is_empty());
        assert_eq!(opts.order_by, None);
        assert!(!opts.print_websites);
    }

    #[test]
    fn test_from_args_rejects_empty_attributes() {
        let err = Options::from_args(&args(" , ", "qty")).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::OptionParse {
                option: "attributes",
                ..
            }
        ));
    }

    #[test]
    fn test_from_args_empty_inventory_disables_join() {
        let opts = Options::from_args(&args("name", "")).unwrap();
        assert!(opts.inventory_fields.is_empty());
    }

    #[test]
    fn test_from_args_type_filters_deduplicated() {
        let mut a = args("name", "qty");
        a.types = vec!["simple".into(), "configurable".into(), "simple".into()];
        let opts = Options::from_args(&a).unwrap();
        assert_eq!(opts.type_filters, vec!["simple", "configurable"]);
    }

    #[test]
    fn test_from_args_type_values_kept_verbatim() {
        let mut a = args("name", "qty");
        a.types = vec![String::new(), " simple ".into()];
        let opts = Options::from_args(&a).unwrap();
        assert_eq!(opts.type_filters, vec!["", " simple "]);
    }

    #[test]
    fn test_from_args_website_and_order() {
        let mut a = args("name", "qty");
        a.website = Some("1".into());
        a.order = Some(" price ".into());
        let opts = Options::from_args(&a).unwrap();
        assert!(opts.print_websites);
        assert_eq!(opts.order_by.as_deref(), Some("price"));

        a.website = Some(String::new());
        a.order = Some("  ".into());
        let opts = Options::from_args(&a).unwrap();
        assert!(!opts.print_websites);
        assert_eq!(opts.order_by, None);
    }
}

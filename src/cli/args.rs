/// CLI argument definitions via clap derive.
use clap::{Parser, Subcommand};

use crate::catalog::options::{DEFAULT_ATTRIBUTES, DEFAULT_INVENTORY_FIELDS};

/// catalog-list — list catalog products with inventory and website data.
#[derive(Debug, Parser)]
#[command(
    name = "catalog-list",
    about = "List catalog products with inventory fields and website assignments",
    version,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// All subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List all your products.
    #[command(name = "session:catalog:list")]
    CatalogList(ListArgs),
}

/// Arguments for `catalog-list session:catalog:list`.
#[derive(Debug, Parser)]
pub struct ListArgs {
    /// Attribute list, comma separated.
    #[arg(
        short = 'a',
        long = "attributes",
        value_name = "ATTRIBUTES",
        default_value = DEFAULT_ATTRIBUTES
    )]
    pub attributes: String,

    /// Fields from inventory item, comma separated. Pass an empty value to skip the join.
    #[arg(
        short = 'i',
        long = "inventory_fields",
        value_name = "FIELDS",
        num_args = 0..=1,
        default_value = DEFAULT_INVENTORY_FIELDS,
        default_missing_value = ""
    )]
    pub inventory_fields: String,

    /// Filter by product type. Repeat to allow several types.
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub types: Vec<String>,

    /// Order by field, ascending.
    #[arg(short = 'o', long = "order", value_name = "FIELD")]
    pub order: Option<String>,

    /// Print assigned websites (any non-empty value).
    pub website: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> ListArgs {
        let cli = Cli::try_parse_from(
            ["catalog-list", "session:catalog:list"]
                .iter()
                .chain(args.iter())
                .copied(),
        )
        .unwrap();
        match cli.command {
            Command::CatalogList(args) => args,
        }
    }

    #[test]
    fn test_defaults() {
        let args = parse(&[]);
        assert_eq!(args.attributes, "name,price");
        assert_eq!(args.inventory_fields, "qty");
        assert!(args.types.is_empty());
        assert_eq!(args.order, None);
        assert_eq!(args.website, None);
    }

    #[test]
    fn test_short_flags_and_repeatable_type() {
        let args = parse(&[
            "-a", "sku,name", "-i", "qty,is_in_stock", "--type", "a", "-t", "b", "-o", "price",
            "all",
        ]);
        assert_eq!(args.attributes, "sku,name");
        assert_eq!(args.inventory_fields, "qty,is_in_stock");
        assert_eq!(args.types, vec!["a", "b"]);
        assert_eq!(args.order.as_deref(), Some("price"));
        assert_eq!(args.website.as_deref(), Some("all"));
    }

    #[test]
    fn test_inventory_flag_without_value_is_empty() {
        let args = parse(&["-o", "name", "--inventory_fields"]);
        assert_eq!(args.inventory_fields, "");
    }

    #[test]
    fn test_unknown_flag_rejected() {
        let res = Cli::try_parse_from(["catalog-list", "session:catalog:list", "--json"]);
        assert!(res.is_err());
    }
}

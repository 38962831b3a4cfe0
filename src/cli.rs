//! Command-line interface.

use std::path::PathBuf;

use clap::Parser;

use crate::catalog::Catalog;

#[derive(Debug, Parser)]
#[command(name = "dessert-clicker", version, about = "Sell desserts one click at a time")]
pub struct Cli {
    /// Config file (default: platform config dir)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Start a fresh session, ignoring any saved progress
    #[arg(long)]
    pub fresh: bool,

    /// Do not save progress on exit
    #[arg(long)]
    pub no_save: bool,

    /// Log file (overrides config)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Print the dessert catalog and exit
    #[arg(long)]
    pub print_catalog: bool,
}

/// Plain-text table of the catalog, one dessert per line.
pub fn format_catalog(catalog: &Catalog) -> String {
    let name_width = catalog
        .items()
        .iter()
        .map(|item| item.image_ref.chars().count())
        .max()
        .unwrap_or(0)
        .max("Dessert".len());

    let mut out = format!(
        "{:>3}  {:<name_width$}  {:>8}  {:>9}\n",
        "#", "Dessert", "Price", "Threshold"
    );
    for (idx, item) in catalog.items().iter().enumerate() {
        out.push_str(&format!(
            "{:>3}  {:<name_width$}  {:>8}  {:>9}\n",
            idx + 1,
            item.image_ref,
            format!("${}", item.unit_price),
            item.activation_threshold
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ItemRecord;

    #[test]
    fn parses_flags() {
        let cli = Cli::try_parse_from([
            "dessert-clicker",
            "--fresh",
            "--no-save",
            "--config",
            "/tmp/c.toml",
        ])
        .unwrap();
        assert!(cli.fresh);
        assert!(cli.no_save);
        assert!(!cli.print_catalog);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/c.toml")));
        assert!(cli.log_file.is_none());
    }

    #[test]
    fn defaults_are_off() {
        let cli = Cli::try_parse_from(["dessert-clicker"]).unwrap();
        assert!(!cli.fresh);
        assert!(!cli.no_save);
        assert!(cli.config.is_none());
    }

    #[test]
    fn catalog_table_lists_every_item() {
        let catalog = Catalog::new(vec![
            ItemRecord::new("cupcake", 5, 0),
            ItemRecord::new("donut", 10, 5),
        ])
        .unwrap();
        let table = format_catalog(&catalog);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("Threshold"));
        assert!(lines[1].contains("cupcake") && lines[1].contains("$5"));
        assert!(lines[2].contains("donut") && lines[2].contains("$10"));
    }
}

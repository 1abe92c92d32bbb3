//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;
use simplelog::LevelFilter;
use tabula_lib::table::TableConfig;

/// Filter, search, sort and page a JSON array of records.
#[derive(Debug, Parser)]
#[command(name = "tabula", version)]
pub struct Args {
    /// JSON file holding an array of objects.
    pub input: PathBuf,

    /// Columns to show, in order (default: every field, alphabetical).
    #[arg(short, long, value_delimiter = ',')]
    pub columns: Vec<String>,

    /// Structured filter: `field=value`, `field=a|b`, `field~text`,
    /// `field>=value` or `field<=value`. Repeatable.
    #[arg(short, long = "filter")]
    pub filters: Vec<String>,

    /// Free-text search across columns.
    #[arg(short, long)]
    pub search: Option<String>,

    /// Limit search to these columns.
    #[arg(long, value_delimiter = ',')]
    pub search_fields: Vec<String>,

    /// Column to sort by.
    #[arg(long)]
    pub sort: Option<String>,

    /// Sort descending.
    #[arg(long, requires = "sort")]
    pub desc: bool,

    /// Page to show (1-based).
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,

    /// Rows per page.
    #[arg(long, env = "TABULA_PAGE_SIZE", default_value_t = 10)]
    pub page_size: usize,

    /// Log level (off, error, warn, info, debug, trace).
    #[arg(long, env = "TABULA_LOG", default_value = "warn")]
    pub log_level: LevelFilter,

    /// Write logs to this file instead of stderr.
    #[arg(long, env = "TABULA_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

impl Args {
    /// Builds the table configuration from the arguments.
    pub fn table_config(&self) -> TableConfig {
        TableConfig::default().with_page_size(self.page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["tabula", "data.json"]);
        assert_eq!(args.page, 1);
        assert!(args.columns.is_empty());
        assert!(!args.desc);
    }

    #[test]
    fn test_lists_and_repeats() {
        let args = Args::parse_from([
            "tabula",
            "data.json",
            "--columns",
            "name,city",
            "-f",
            "city=Doha",
            "-f",
            "price>=100",
            "--sort",
            "price",
            "--desc",
            "--page-size",
            "5",
        ]);
        assert_eq!(args.columns, vec!["name", "city"]);
        assert_eq!(args.filters, vec!["city=Doha", "price>=100"]);
        assert_eq!(args.table_config().page_size, 5);
    }

    #[test]
    fn test_desc_requires_sort() {
        assert!(Args::try_parse_from(["tabula", "data.json", "--desc"]).is_err());
    }
}

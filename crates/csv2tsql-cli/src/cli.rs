//! CLI argument definitions for csv2tsql.

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "csv2tsql",
    version,
    about = "Convert CSV files to T-SQL INSERT statements",
    long_about = "Convert every CSV file under a directory to T-SQL INSERT statements.\n\n\
                  Each input gets one <name>.sql script in ./output_sql. The delimiter is\n\
                  detected per file and column names are sanitized into SQL identifiers.",
    after_help = "Examples:\n  \
                  csv2tsql                      Process CSV files in the current directory\n  \
                  csv2tsql /path/to/csv/files   Process CSV files in a specific directory\n  \
                  csv2tsql --debug              Enable debug logging"
)]
pub struct Cli {
    /// Directory containing CSV files, searched recursively.
    #[arg(value_name = "DIRECTORY", default_value = ".")]
    pub directory: PathBuf,

    /// Enable debug mode with verbose logging.
    #[arg(long)]
    pub debug: bool,
}

//! CLI subcommand definitions

use clap::Subcommand;

use crate::catalog::{CatalogSort, Category};

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// List services and plans with prices in the display currency (default)
    Catalog {
        /// Case-insensitive search over names and summaries
        #[arg(short, long)]
        search: Option<String>,

        /// Only show one category
        #[arg(short = 'g', long, value_enum)]
        category: Option<Category>,

        /// Sort key
        #[arg(long, value_enum, default_value = "price")]
        sort: CatalogSort,
    },

    /// Convert a whole-tenge amount into the display currency
    Convert {
        /// Amount in whole tenge (0 = price on request)
        #[arg(allow_negative_numbers = true)]
        amount: i64,
    },

    /// Estimate token costs for a provider and usage profile
    Calc {
        /// Provider id (run `providers` for the list)
        #[arg(short, long)]
        provider: String,

        /// Usage scenario preset id (run `scenarios` for the list)
        #[arg(long)]
        scenario: Option<String>,

        /// Input tokens per request
        #[arg(long, allow_negative_numbers = true)]
        input_tokens: Option<i64>,

        /// Output tokens per request
        #[arg(long, allow_negative_numbers = true)]
        output_tokens: Option<i64>,

        /// Requests per month
        #[arg(long, allow_negative_numbers = true)]
        requests: Option<i64>,
    },

    /// List provider rates
    Providers,

    /// List usage scenario presets
    Scenarios,
}

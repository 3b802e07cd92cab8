use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use civic_core::Category;

/// Heat-map clustering and voice-intent resolution for the civic services app.
#[derive(Parser, Debug)]
#[command(name = "civic", version, about)]
pub struct CliArgs {
    /// YAML intent catalog replacing the built-in one
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Cluster a JSON report export and print clusters, heat points and stats
    Heatmap {
        /// JSON array of report rows
        reports: PathBuf,

        /// Cluster radius in meters (overrides CLUSTER_RADIUS_M)
        #[arg(long)]
        radius: Option<f64>,

        /// Recompute whenever the report file changes
        #[arg(long)]
        watch: bool,
    },

    /// List active reports a new report at this location would duplicate
    Duplicates {
        /// JSON array of report rows
        reports: PathBuf,

        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        #[arg(long, allow_hyphen_values = true)]
        lon: f64,

        #[arg(long, value_enum)]
        category: CategoryArg,
    },

    /// Resolve a spoken transcript to an intent
    Resolve {
        #[arg(required = true, trailing_var_arg = true)]
        transcript: Vec<String>,
    },

    /// Rank plausible intents for a transcript
    Suggest {
        /// Maximum number of suggestions (defaults to INTENT_SUGGESTION_LIMIT)
        #[arg(long)]
        limit: Option<usize>,

        #[arg(required = true, trailing_var_arg = true)]
        transcript: Vec<String>,
    },

    /// Show a transcript after corrections are applied
    Normalize {
        #[arg(required = true, trailing_var_arg = true)]
        transcript: Vec<String>,
    },

    /// Print the active intent catalog as YAML
    Catalog,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum CategoryArg {
    Pothole,
    Garbage,
    Streetlight,
    Drainage,
    Water,
    Noise,
    Other,
}

impl From<CategoryArg> for Category {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Pothole => Category::Pothole,
            CategoryArg::Garbage => Category::Garbage,
            CategoryArg::Streetlight => Category::Streetlight,
            CategoryArg::Drainage => Category::Drainage,
            CategoryArg::Water => Category::Water,
            CategoryArg::Noise => Category::Noise,
            CategoryArg::Other => Category::Other,
        }
    }
}

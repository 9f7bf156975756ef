use clap::{Args, Parser, Subcommand, ValueEnum};
use std::io::IsTerminal;
use std::path::PathBuf;

use crate::catalog::Category;
use crate::filter::Filters;
use crate::outfit::OutfitType;

/// Output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

impl OutputFormat {
    /// Resolve the effective output format.
    /// If user specified a format, use it.
    /// Otherwise: TTY → Text, non-TTY (pipe) → Json
    pub fn resolve(user_choice: Option<OutputFormat>) -> OutputFormat {
        match user_choice {
            Some(fmt) => fmt,
            None => {
                if std::io::stdout().is_terminal() {
                    OutputFormat::Text
                } else {
                    OutputFormat::Json
                }
            }
        }
    }
}

#[derive(Parser)]
#[command(
    name = "wardrobe",
    about = "Digital wardrobe - browse your clothes and build the outfit of the day",
    version = env!("GIT_DESCRIBE"),
    after_help = "Logs are written to: ~/.local/share/wardrobe/logs/wardrobe.log"
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, help = "Path to wardrobe.yaml config file")]
    pub config: Option<PathBuf>,

    /// Catalog file or URL (overrides the config file)
    #[arg(long, global = true)]
    pub catalog: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true, help = "Log at debug level")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Attribute filters shared by catalog commands
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Item type (shirt, pants, jacket, dress, skirt, ...)
    #[arg(long = "type")]
    pub item_type: Option<String>,

    /// Thickness (thin, medium, thick)
    #[arg(long)]
    pub thickness: Option<String>,

    /// Length (short, medium, long)
    #[arg(long)]
    pub length: Option<String>,

    /// Storage location
    #[arg(long)]
    pub location: Option<String>,

    /// Season (spring, summer, autumn, winter); repeat to match any of several
    #[arg(long = "season")]
    pub seasons: Vec<String>,
}

impl From<FilterArgs> for Filters {
    fn from(args: FilterArgs) -> Self {
        Filters {
            item_type: args.item_type,
            thickness: args.thickness,
            length: args.length,
            location: args.location,
            seasons: args.seasons,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// List wardrobe items grouped by category
    Items {
        #[command(flatten)]
        filters: FilterArgs,

        /// Output format (default: text for TTY, json for pipes)
        #[arg(long, short = 'o', value_enum)]
        format: Option<OutputFormat>,
    },

    /// List the distinct storage locations
    Locations {
        /// Output format (default: text for TTY, json for pipes)
        #[arg(long, short = 'o', value_enum)]
        format: Option<OutputFormat>,
    },

    /// Show the items offered for one outfit slot
    Picker {
        /// Slot category (top, bottom, dress, outwear, bag, shoes)
        category: Category,

        #[command(flatten)]
        filters: FilterArgs,

        /// Output format (default: text for TTY, json for pipes)
        #[arg(long, short = 'o', value_enum)]
        format: Option<OutputFormat>,
    },

    /// Generate a random outfit
    Outfit {
        #[command(flatten)]
        filters: FilterArgs,

        /// Force a dress or a top + bottom outfit (random when omitted)
        #[arg(long = "kind", value_enum)]
        outfit_type: Option<OutfitType>,

        /// Put this item into its slot after randomizing (repeatable)
        #[arg(long = "pick", value_name = "ID")]
        picks: Vec<String>,

        /// Empty this slot after picks are applied (repeatable)
        #[arg(long = "without", value_name = "CATEGORY")]
        without: Vec<Category>,

        /// Start from an empty outfit instead of randomizing
        #[arg(long)]
        blank: bool,

        /// Seed for a reproducible outfit
        #[arg(long)]
        seed: Option<u64>,

        /// Output format (default: text for TTY, json for pipes)
        #[arg(long, short = 'o', value_enum)]
        format: Option<OutputFormat>,
    },

    /// Check a dragged item payload against an outfit slot
    Drop {
        /// Target slot category
        category: Category,

        /// Item JSON (reads from stdin if not provided)
        #[arg(long)]
        payload: Option<String>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show {
        /// Output format (default: text for TTY, json for pipes)
        #[arg(long, short = 'o', value_enum)]
        format: Option<OutputFormat>,
    },

    /// Get a configuration value
    Get {
        /// Configuration key (dot notation)
        key: String,
    },
}

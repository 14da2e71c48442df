pub mod menu_file;
pub mod toml_config;

pub use menu_file::{CsvMenuFile, TomlMenuFile};
pub use toml_config::MenuConfig;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command};

#[cfg(feature = "cli")]
mod cli {
    use super::{CsvMenuFile, MenuConfig, TomlMenuFile};
    use crate::core::price::UnparsablePrice;
    use crate::core::{Course, MenuSource};
    use crate::report::OutputFormat;
    use crate::utils::error::Result;
    use crate::utils::validation::{
        validate_file_extension, validate_non_empty_string, validate_path, Validate,
    };
    use clap::{Parser, Subcommand};

    #[derive(Debug, Clone, Parser)]
    #[command(name = "menu-board")]
    #[command(about = "Restaurant menu with per-course average prices")]
    pub struct CliConfig {
        /// TOML config file (display, aggregation, seed [[items]])
        #[arg(short, long)]
        pub config: Option<String>,

        /// Seed menu file (.csv or .toml), replaces the config's items
        #[arg(short, long)]
        pub menu: Option<String>,

        /// Currency prefix shown before prices
        #[arg(long)]
        pub currency: Option<String>,

        /// Let unparsable prices turn their course average into NaN
        #[arg(long)]
        pub poison_invalid_prices: bool,

        #[arg(short, long, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, help = "Emit logs as JSON lines")]
        pub json_logs: bool,

        #[command(subcommand)]
        pub command: Command,
    }

    #[derive(Debug, Clone, Subcommand)]
    pub enum Command {
        /// Show every item and the average price per course
        Summary {
            #[arg(short, long, value_enum, default_value = "text")]
            format: OutputFormat,
        },
        /// Show the items of one course (name or 1-3)
        Filter {
            course: Course,
            #[arg(short, long, value_enum, default_value = "text")]
            format: OutputFormat,
        },
        /// Read add/remove/filter commands from stdin
        Session,
    }

    impl CliConfig {
        /// Config file settings with command-line overrides applied.
        pub fn load_settings(&self) -> Result<MenuConfig> {
            let mut settings = match &self.config {
                Some(path) => {
                    tracing::info!("📁 Loading configuration from: {}", path);
                    MenuConfig::from_file(path)?
                }
                None => MenuConfig::default(),
            };

            if let Some(prefix) = &self.currency {
                settings.display.currency_prefix = prefix.clone();
            }
            if self.poison_invalid_prices {
                settings.aggregation.unparsable_price = UnparsablePrice::Poison;
            }

            settings.validate()?;
            Ok(settings)
        }

        /// Where the seed menu comes from: `--menu` if given, else the config's items.
        pub fn menu_source(&self, settings: &MenuConfig) -> Box<dyn MenuSource> {
            match self.menu.as_deref() {
                Some(path) if path.ends_with(".toml") => Box::new(TomlMenuFile::new(path)),
                Some(path) => Box::new(CsvMenuFile::new(path)),
                None => Box::new(settings.clone()),
            }
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            if let Some(path) = &self.config {
                validate_path("config", path)?;
                validate_file_extension("config", path, &["toml"])?;
            }
            if let Some(path) = &self.menu {
                validate_path("menu", path)?;
                validate_file_extension("menu", path, &["csv", "toml"])?;
            }
            if let Some(prefix) = &self.currency {
                validate_non_empty_string("currency", prefix)?;
            }
            Ok(())
        }
    }

}

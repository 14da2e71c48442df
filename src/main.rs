use anyhow::Context;
use clap::Parser;
use menu_board::app::session::HELP as SESSION_HELP;
use menu_board::report::{self, OutputFormat};
use menu_board::utils::error::ErrorSeverity;
use menu_board::utils::{logger, validation::Validate};
use menu_board::{CliConfig, Command, MenuAggregator, MenuController, MenuError, Session};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting menu-board");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(&config) {
        match e.downcast_ref::<MenuError>() {
            Some(menu_error) => {
                tracing::error!(
                    "❌ menu-board failed: {} (Category: {:?}, Severity: {:?})",
                    menu_error,
                    menu_error.category(),
                    menu_error.severity()
                );
                eprintln!("❌ {}", menu_error.user_friendly_message());
                eprintln!("💡 {}", menu_error.recovery_suggestion());

                let exit_code = match menu_error.severity() {
                    ErrorSeverity::Low => 0,
                    ErrorSeverity::Medium => 2,
                    ErrorSeverity::High => 1,
                    ErrorSeverity::Critical => 3,
                };
                if exit_code > 0 {
                    std::process::exit(exit_code);
                }
            }
            None => return Err(e),
        }
    }

    Ok(())
}

fn run(config: &CliConfig) -> anyhow::Result<()> {
    config.validate()?;
    let settings = config.load_settings()?;
    let prefix = settings.currency_prefix().to_string();

    let aggregator = MenuAggregator::new(settings.unparsable_price());
    let source = config.menu_source(&settings);
    let controller = MenuController::from_source(source.as_ref(), aggregator)?;

    match &config.command {
        Command::Summary { format } => {
            let items = controller.snapshot();
            let averages = controller.averages();
            let output = match format {
                OutputFormat::Text => report::render_summary(&prefix, items, &averages),
                OutputFormat::Json => report::summary_json(&prefix, items, &averages)?,
            };
            println!("{}", output.trim_end());
        }
        Command::Filter { course, format } => {
            let filtered = controller.filter(*course);
            let output = match format {
                OutputFormat::Text => report::render_filtered(&prefix, &filtered),
                OutputFormat::Json => report::filtered_json(&prefix, *course, &filtered)?,
            };
            println!("{}", output.trim_end());
        }
        Command::Session => {
            println!("{}", SESSION_HELP);
            let mut session = Session::new(controller, prefix);
            let stdin = std::io::stdin();
            session
                .run(stdin.lock(), std::io::stdout())
                .context("interactive session ended unexpectedly")?;
            tracing::info!(
                "Session closed with {} items",
                session.controller().snapshot().len()
            );
        }
    }

    Ok(())
}

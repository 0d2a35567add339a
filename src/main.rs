use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use expenses::cli::{
    handle_categories_command, handle_export_command, handle_list_command, handle_recent_command,
    handle_summary_command, ExportFormat, ListArgs, SummaryArgs,
};
use expenses::config::{paths::ExpensePaths, settings::Settings};
use expenses::services::{ExpenseService, ImportService};
use expenses::storage::Storage;

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Terminal expense tracker",
    long_about = "A small expense tracker for the terminal. Expenses are kept in \
                  memory for the session; use --data to start from a JSON, YAML \
                  or CSV file and `export` to write them back out."
)]
struct Cli {
    /// Seed the session from a .json, .yaml or .csv file
    #[arg(long, global = true, value_name = "FILE", env = "EXPENSES_DATA")]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    /// List expenses in the order they were recorded
    #[command(alias = "ls")]
    List(ListArgs),

    /// Show expenses from the last days, newest first
    Recent {
        /// Number of days to look back (default from config)
        #[arg(short, long)]
        days: Option<u32>,
    },

    /// List the distinct categories
    Categories,

    /// Totals by category, grand total and average per day
    Summary(SummaryArgs),

    /// Write all expenses to stdout
    Export {
        /// Export format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Show current configuration and paths
    Config {
        /// Write the configuration file with the current settings
        #[arg(long)]
        init: bool,
    },
}

/// Logs go to stderr for plain commands. The TUI owns the terminal, so its
/// logs go to a file in the config directory instead.
fn init_logging(tui: bool, paths: &ExpensePaths) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let registry = tracing_subscriber::registry().with(filter);

    if !tui {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
        return;
    }

    // Without a log file the TUI runs with logging off
    if let Ok(file) = paths.open_log_file() {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Arc::new(file)),
            )
            .init();
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = ExpensePaths::new()?;
    init_logging(matches!(cli.command, Some(Commands::Tui)), &paths);
    let settings = Settings::load_or_create(&paths)?;

    let storage = Storage::new();
    if let Some(ref data) = cli.data {
        let service = ExpenseService::new(&storage);
        ImportService::new(&service).import_file(data)?;
    }

    match cli.command {
        Some(Commands::Tui) => {
            expenses::tui::run_tui(&storage, &settings)?;
        }
        Some(Commands::List(args)) => {
            handle_list_command(&storage, &settings, &args)?;
        }
        Some(Commands::Recent { days }) => {
            handle_recent_command(&storage, &settings, days)?;
        }
        Some(Commands::Categories) => {
            handle_categories_command(&storage)?;
        }
        Some(Commands::Summary(args)) => {
            handle_summary_command(&storage, &settings, &args)?;
        }
        Some(Commands::Export { format, pretty }) => {
            handle_export_command(&storage, format, pretty)?;
        }
        Some(Commands::Config { init }) => {
            if init {
                paths.ensure_directories()?;
                settings.save(&paths)?;
                println!("Конфигурация записана: {}", paths.settings_file().display());
                println!();
            }
            println!("Конфигурация");
            println!("============");
            println!("Каталог:       {}", paths.base_dir().display());
            println!("Файл настроек: {}", paths.settings_file().display());
            println!();
            println!("Настройки:");
            println!("  Валюта:          {}", settings.currency_symbol);
            println!("  Формат даты:     {}", settings.date_format);
            println!("  Недавние (дней): {}", settings.recent_days);
            println!("  Такт TUI (мс):   {}", settings.tick_rate_ms);
        }
        None => {
            println!("Expense tracker - учёт расходов в терминале");
            println!();
            println!("Run 'expenses --help' for usage information.");
            println!("Run 'expenses tui' to launch the interactive interface.");
        }
    }

    Ok(())
}

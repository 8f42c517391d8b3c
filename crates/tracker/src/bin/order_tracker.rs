use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use base::entities::OrderId;
use base::notifier::{ConsoleNotifier, Notifier};
use base::stores::order_store::BasicOrderStore;
use storage::{InMemoryOrderStore, JsonFileOrderStore};
use tracker::app::OrderTracker;
use tracker::cli::OrderArgs;
use tracker::config::{TrackerConfig, TRACKER_ENV_FILE};
use tracker::export::export_orders_csv;
use tracker::logging::init_logging;

#[derive(Parser, Debug)]
#[command(name = "order-tracker", version, about = "Track purchases, returns and refunds")]
struct Cli {
    /// Store file (overrides ORDER_TRACKER_DB_PATH)
    #[arg(long)]
    db: Option<PathBuf>,

    /// Keep orders in memory for this run only
    #[arg(long)]
    in_memory: bool,

    /// strftime pattern for return dates
    #[arg(long)]
    date_format: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show every order
    List,
    /// Add a new order
    Add(OrderArgs),
    /// Change an existing order; omitted flags keep their stored values
    Edit {
        id: OrderId,
        #[command(flatten)]
        fields: OrderArgs,
    },
    /// Delete an order
    Delete { id: OrderId },
    /// Write every order to a CSV file
    Export { path: PathBuf },
}

fn main() -> Result<()> {
    dotenv::from_filename(TRACKER_ENV_FILE).ok();

    let cli = Cli::parse();

    let mut config = TrackerConfig::from_env()?;
    if let Some(db) = cli.db {
        config = config.with_db_path(db);
    }
    if let Some(date_format) = &cli.date_format {
        config = config.with_date_format(date_format)?;
    }

    init_logging(&config.log)?;

    let notifier = ConsoleNotifier::stderr();
    let command = cli.command.unwrap_or(Command::List);

    if cli.in_memory {
        let tracker = OrderTracker::init(
            || Ok(InMemoryOrderStore::new()),
            notifier,
            &config.date_format,
        )?;
        run(tracker, command)
    } else {
        let db_path = config.db_path.clone();
        let tracker = OrderTracker::init(
            || JsonFileOrderStore::open(db_path),
            notifier,
            &config.date_format,
        )?;
        run(tracker, command)
    }
}

fn run<S: BasicOrderStore, N: Notifier>(mut tracker: OrderTracker<S, N>, command: Command) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        Command::List => tracker.display_orders(&mut out)?,
        Command::Add(fields) => {
            fields.apply(tracker.form_mut())?;
            let label = tracker.submit_label();
            let id = tracker.submit(&mut out)?;
            writeln!(out, "{}: #{} saved", label, id)?;
            log::info!("added an order {}", id);
        }
        Command::Edit { id, fields } => {
            tracker.edit_order(id)?;
            fields.apply(tracker.form_mut())?;
            let label = tracker.submit_label();
            tracker.submit(&mut out)?;
            writeln!(out, "{}: #{} saved", label, id)?;
            log::info!("updated an order {}", id);
        }
        Command::Delete { id } => {
            tracker.remove_order(id, &mut out)?;
            log::info!("deleted an order {}", id);
        }
        Command::Export { path } => {
            let orders = tracker
                .repository()
                .fetch_all()
                .context("an error occurred on fetching orders to export")?;
            export_orders_csv(&orders, &path)?;
            writeln!(out, "Exported {} orders to {}", orders.len(), path.display())?;
        }
    }

    Ok(())
}

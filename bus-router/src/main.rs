//! Command-line interface for the bus route path finder.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use bus_router::domain::StopPath;
use bus_router::planner::{Planner, SearchConfig};
use bus_router::store::SqliteStore;

/// Bus route path finder
#[derive(Parser, Debug)]
#[command(name = "bus-router")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the routes database
    #[arg(long, global = true, default_value = "bus_routes.db")]
    db: PathBuf,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    Human,
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create the database and seed it with the sample network
    Init,

    /// Enumerate every cycle-free path between two stops
    Find {
        /// Name of the starting stop
        from: String,

        /// Name of the destination stop
        to: String,

        /// Abandon the search after this many frontier expansions
        #[arg(long)]
        max_expansions: Option<usize>,
    },

    /// List every stop
    Stops,

    /// List every route with its stops in visit order
    Routes,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Init => init(&cli),
        Commands::Find {
            from,
            to,
            max_expansions,
        } => find(&cli, from, to, *max_expansions),
        Commands::Stops => stops(&cli),
        Commands::Routes => routes(&cli),
    }
}

fn init(cli: &Cli) -> anyhow::Result<()> {
    let mut store = SqliteStore::open(&cli.db)?;
    store.seed_sample_network()?;

    match cli.format {
        OutputFormat::Human => {
            println!("Seeded sample network into {}", cli.db.display());
        }
        OutputFormat::Json => {
            println!("{}", serde_json::json!({ "db": cli.db, "seeded": true }));
        }
    }
    Ok(())
}

fn find(cli: &Cli, from: &str, to: &str, max_expansions: Option<usize>) -> anyhow::Result<()> {
    let store = SqliteStore::open(&cli.db)?;
    let config = SearchConfig { max_expansions };
    let planner = Planner::new(&store, &config);
    let result = planner.find_paths(from, to)?;

    match cli.format {
        OutputFormat::Human => {
            println!("Possible paths from {from} to {to}:");
            for path in &result.paths {
                println!("{path}");
            }
        }
        OutputFormat::Json => {
            let paths: Vec<&[String]> = result.paths.iter().map(StopPath::names).collect();
            println!(
                "{}",
                serde_json::json!({ "from": from, "to": to, "paths": paths })
            );
        }
    }
    Ok(())
}

fn stops(cli: &Cli) -> anyhow::Result<()> {
    let store = SqliteStore::open(&cli.db)?;
    let stops = store.stops()?;

    match cli.format {
        OutputFormat::Human => {
            for stop in &stops {
                println!("{}\t{}", stop.id, stop.name);
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string(&stops)?),
    }
    Ok(())
}

fn routes(cli: &Cli) -> anyhow::Result<()> {
    let store = SqliteStore::open(&cli.db)?;
    let routes = store.routes()?;

    match cli.format {
        OutputFormat::Human => {
            for route in &routes {
                let names: Vec<&str> = route.stops.iter().map(|s| s.name.as_str()).collect();
                println!("{}: {}", route.name, names.join(" -> "));
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string(&routes)?),
    }
    Ok(())
}

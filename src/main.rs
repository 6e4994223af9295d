use clap::{Parser, Subcommand};
use gazetteer::{render_json, FeatureClass, GeoStore, Geographical, RenderLevel, Snapshot, ToponymId};
use serde_json::Value;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Gazetteer — read-only GeoNames reference data
///
/// Renders toponyms, their alternate names and airports from a snapshot.
///
/// Examples:
///   gazetteer airport JFK
///   gazetteer --level tiny toponym 2950159
///   gazetteer toponym 2950159 --names
///   gazetteer --snapshot ./snapshot.json info
#[derive(Parser)]
#[command(name = "gazetteer", version, about, long_about = None)]
struct Cli {
    /// Snapshot file. Defaults to ~/.gazetteer/snapshot.json.
    #[arg(long, global = true)]
    snapshot: Option<PathBuf>,

    /// Render level: tiny, short, medium or long.
    #[arg(long, global = true, default_value = "medium", value_parser = parse_level)]
    level: RenderLevel,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render an airport by IATA code.
    Airport { code: String },

    /// Render a toponym by GeoNames id.
    Toponym {
        id: i64,

        /// Also render its alternate names in order.
        #[arg(long)]
        names: bool,
    },

    /// Show snapshot statistics.
    Info,
}

fn parse_level(s: &str) -> Result<RenderLevel, String> {
    match s.to_lowercase().as_str() {
        "tiny" => Ok(RenderLevel::Tiny),
        "short" => Ok(RenderLevel::Short),
        "medium" => Ok(RenderLevel::Medium),
        "long" => Ok(RenderLevel::Long),
        _ => Err(format!("Unknown level '{}'. Use tiny, short, medium or long.", s)),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let path = cli.snapshot.clone().unwrap_or_else(Snapshot::default_path);
    let store = GeoStore::open(&path).unwrap_or_else(|e| {
        eprintln!("Error: Cannot load snapshot {}: {}", path.display(), e);
        std::process::exit(1);
    });

    let output = run(&cli, &store).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    match serde_json::to_string_pretty(&output) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run(cli: &Cli, store: &GeoStore) -> Result<Value, String> {
    match &cli.command {
        Command::Airport { code } => {
            let airport = store
                .airport(code)
                .ok_or_else(|| format!("Airport not found: '{}'", code))?;
            render_json(&**airport, cli.level).map_err(|e| e.to_string())
        }
        Command::Toponym { id, names } => {
            let toponym = store
                .toponym(ToponymId(*id))
                .ok_or_else(|| format!("Toponym not found: {}", id))?;
            let feature = toponym
                .feature_class()
                .map(FeatureClass::description)
                .unwrap_or("unclassified");
            eprintln!("  \u{1F4CD} {} ({})", toponym.name(), feature);
            eprintln!("  \u{1F4D0} {}", toponym.location());

            let rendered = render_json(&**toponym, cli.level).map_err(|e| e.to_string())?;
            if !names {
                return Ok(rendered);
            }
            let aliases = toponym
                .aliases()
                .iter()
                .map(|name| render_json(name, cli.level))
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| e.to_string())?;
            Ok(serde_json::json!({ "toponym": rendered, "alternateNames": aliases }))
        }
        Command::Info => serde_json::to_value(store.stats()).map_err(|e| e.to_string()),
    }
}

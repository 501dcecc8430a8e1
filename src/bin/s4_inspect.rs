use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use serde_json::json;
use tracing_subscriber::EnvFilter;

use rct1_import::{ImportOptions, ObjectRepository, Park, S4Importer};

#[derive(Parser)]
#[command(name = "s4-inspect")]
#[command(about = "Inspect and import RollerCoaster Tycoon 1 parks")]
struct Cli {
    /// Object manifest (JSON). Falls back to $RCT1_IMPORT_OBJECTS, then the
    /// user data directory, then accepting every known object.
    #[arg(long, global = true)]
    objects: Option<PathBuf>,

    /// Extra scenario patch database (JSON)
    #[arg(long, global = true)]
    patches: Option<PathBuf>,

    #[arg(long, global = true)]
    no_patches: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the objects the park needs
    Objects { file: PathBuf },
    /// Import the park and print a summary
    Import { file: PathBuf },
    /// Print the scenario index entry
    Index { file: PathBuf },
}

fn manifest_path(cli: &Cli) -> Option<PathBuf> {
    if let Some(path) = &cli.objects {
        return Some(path.clone());
    }
    if let Ok(path) = std::env::var("RCT1_IMPORT_OBJECTS") {
        return Some(PathBuf::from(path));
    }
    let default = dirs::data_dir()?.join("rct1-import").join("objects.json");
    default.exists().then_some(default)
}

fn repository(cli: &Cli) -> rct1_import::Result<ObjectRepository> {
    match manifest_path(cli) {
        Some(path) => {
            tracing::info!(path = %path.display(), "using object manifest");
            ObjectRepository::from_manifest_file(&path)
        }
        None => {
            tracing::info!("no object manifest, accepting every known object");
            Ok(ObjectRepository::accept_all())
        }
    }
}

fn park_summary(park: &Park) -> serde_json::Value {
    let rides: Vec<_> = park
        .rides()
        .map(|r| {
            json!({
                "id": r.id,
                "name": r.formatted_name(),
                "ride_type": r.ride_type,
                "subtype": r.subtype,
                "mode": r.mode,
                "stations": r.stations.iter().filter(|s| s.start.is_some()).count(),
                "excitement": r.stats.excitement,
            })
        })
        .collect();
    json!({
        "name": park.name,
        "scenario": park.scenario,
        "flags": park.flags.bits(),
        "date": park.date,
        "objective": park.objective,
        "rating": park.rating,
        "cash": park.finances.cash,
        "park_value": park.finances.park_value,
        "guests_in_park": park.guests_in_park,
        "rides": rides,
        "entities": park.entities.len(),
        "tile_elements": park.tiles.element_count(),
        "banners": park.banners.len(),
        "park_entrances": park.park_entrances.len(),
        "research": {
            "invented": park.research.invented.len(),
            "uninvented": park.research.uninvented.len(),
            "progress_stage": park.research.progress_stage,
        },
    })
}

fn run(cli: &Cli, file: &Path) -> rct1_import::Result<serde_json::Value> {
    let options = ImportOptions { apply_scenario_patches: !cli.no_patches, patch_file: cli.patches.clone() };
    let mut repo = repository(cli)?;
    let mut importer = S4Importer::new(options)?;
    let required = importer.load(file, &repo)?;

    Ok(match &cli.command {
        Commands::Objects { .. } => {
            let groups: serde_json::Map<String, serde_json::Value> = required
                .iter()
                .filter(|(_, ids)| !ids.is_empty())
                .map(|(object_type, ids)| (object_type.identifier_segment().to_owned(), json!(ids)))
                .collect();
            serde_json::Value::Object(groups)
        }
        Commands::Import { .. } => {
            repo.load_objects(&required);
            let mut park = Park::new();
            importer.import(&repo, &mut park);
            park_summary(&park)
        }
        Commands::Index { .. } => json!(importer.populate_index_entry(&repo)),
    })
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("rct1_import=info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let file = match &cli.command {
        Commands::Objects { file } | Commands::Import { file } | Commands::Index { file } => file.clone(),
    };

    match run(&cli, &file) {
        Ok(value) => match serde_json::to_string_pretty(&value) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        Err(e) => {
            eprintln!("Error: unable to read {}: {}", file.display(), e);
            std::process::exit(1);
        }
    }
}

use clap::{Parser, Subcommand};
use packdex::config;
use packdex::index::Indexer;
use packdex::output;
use packdex::roots::StorageRoots;
use std::path::PathBuf;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "packdex")]
#[command(about = "Index tile-map asset packs into a catalog")]
#[command(long_about = "\
Index tile-map asset packs into a catalog

Your filesystem is the data source. Each pack is a directory of numbered
category directories; categories hold image assets with optional rotation
variants and thumbnails; small `cfg` files (key=value lines) carry display
metadata.

Pack structure:

  assets/                          # primary storage root
  └── G-Zombicide-Base/            # pack (id = directory name)
      ├── cfg                      # name=, image=, align=
      ├── 01.tiles/                # category (digits, then dot or digit)
      │   ├── cfg                  # name=, z-index=, max=, pairs=
      │   ├── 1V.png               # flat asset
      │   └── 10V.png/             # directory asset
      │       ├── r_0.png          # canonical image (required)
      │       ├── r_90.png         # rotation variant (optional)
      │       └── r_thumb.png      # thumbnail (optional)
      └── 02.doors/

Storage roots are searched in priority order; the first root containing a
pack id wins. Roots come from packdex.toml (or --root overrides).")]
#[command(version = version_string())]
struct Cli {
    /// Tool configuration file
    #[arg(long, default_value = "packdex.toml", global = true)]
    config: PathBuf,

    /// Storage root override, priority order (repeatable; replaces the
    /// configured roots entirely)
    #[arg(long = "root", global = true)]
    roots: Vec<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List every pack found across the storage roots
    List {
        /// Emit the full catalog as JSON instead of a tree
        #[arg(long)]
        json: bool,
    },
    /// Show one pack's assets, keyed by category
    Show {
        pack_id: String,
        /// Emit JSON instead of a tree
        #[arg(long)]
        json: bool,
    },
    /// Scan all roots and fail if anything had to be skipped
    Check,
    /// Write a static packs-index.json for backend-less frontends
    Index {
        /// Output file
        #[arg(long, default_value = "packs-index.json")]
        output: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut settings = config::load_settings(&cli.config)?;
    if !cli.roots.is_empty() {
        settings.roots = cli.roots.clone();
    }
    let indexer = Indexer::new(
        StorageRoots::new(settings.roots.clone()),
        settings.pack_prefix.clone(),
    );

    match cli.command {
        Command::List { json } => {
            let outcome = indexer.index_all_packs()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&outcome.packs)?);
            } else {
                output::print_catalog(&outcome.packs);
            }
            output::print_warnings(&outcome.warnings);
        }
        Command::Show { pack_id, json } => {
            let lookup = indexer.pack_assets(&pack_id);
            if json {
                println!("{}", serde_json::to_string_pretty(&lookup.categories)?);
            } else {
                output::print_pack_assets(&pack_id, &lookup.categories);
            }
            output::print_warnings(&lookup.warnings);
        }
        Command::Check => {
            let outcome = indexer.index_all_packs()?;
            output::print_catalog(&outcome.packs);
            output::print_warnings(&outcome.warnings);
            if outcome.warnings.is_empty() {
                println!("==> All packs parsed cleanly");
            } else {
                return Err(format!(
                    "{} problem(s) found while scanning",
                    outcome.warnings.len()
                )
                .into());
            }
        }
        Command::Index { output: out_path } => {
            let (index, warnings) = indexer.packs_index()?;
            let json = serde_json::to_string_pretty(&index)?;
            std::fs::write(&out_path, json)?;
            output::print_warnings(&warnings);
            println!(
                "==> Indexed {} pack(s) → {}",
                index.packs.len(),
                out_path.display()
            );
        }
    }

    Ok(())
}

use clap::{Parser, Subcommand};
use gallery_manifest::{config, output, scan};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "gallery-manifest")]
#[command(about = "Generate the gallery manifest from the media tree")]
#[command(long_about = "\
Generate the gallery manifest from the media tree

Your filesystem is the data source. Each gallery category maps to one
directory under the media root; every supported photo or video in that
directory (at any depth) becomes a manifest entry. Listing order is the
display order on the gallery pages: files are deduplicated, sorted by
filename (numeric-aware, case-insensitive), then declumped so runs of
near-identical camera exports spread out.

Media structure:

  public/images/
  ├── Balloons/                 # One directory per category
  │   ├── IMG_0001.jpg
  │   └── arches/               # Nesting is fine - files flatten
  │       └── red_1.jpg
  ├── Characters/
  │   └── Elsa_1.jpg
  └── Shows/                    # Missing directories = empty category

Running with no subcommand builds the manifest. Re-running against an
unchanged tree produces identical output (only generatedAt moves).

Run 'gallery-manifest gen-config' to generate a documented gallery.toml.")]
#[command(version)]
struct Cli {
    /// Config file. When omitted, gallery.toml is used if present,
    /// defaults otherwise; an explicit path must exist.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the media root from config
    #[arg(long, global = true)]
    media_root: Option<PathBuf>,

    /// Override the manifest output path from config
    #[arg(long, global = true)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Walk the media tree and write the manifest (the default)
    Build,
    /// Walk the media tree and report, without writing anything
    Check,
    /// Print a stock gallery.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command.as_ref().unwrap_or(&Command::Build) {
        Command::Build => {
            let config = load_config(&cli)?;
            let manifest = scan::build_manifest(&config)?;
            let output_path = PathBuf::from(&config.output);
            scan::write_manifest(&manifest, &output_path)?;
            output::print_build_output(&manifest, &output_path);
        }
        Command::Check => {
            let config = load_config(&cli)?;
            let manifest = scan::build_manifest(&config)?;
            output::print_check_output(&manifest);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Load config per CLI flags: an explicit --config must exist, the
/// implicit gallery.toml may be absent. Path flags override the file.
fn load_config(cli: &Cli) -> Result<config::BuildConfig, config::ConfigError> {
    let mut config = match &cli.config {
        Some(path) => config::load_config_file(path)?,
        None => config::load_config(Path::new("gallery.toml"))?,
    };
    if let Some(root) = &cli.media_root {
        config.media_root = root.to_string_lossy().into_owned();
    }
    if let Some(out) = &cli.output {
        config.output = out.to_string_lossy().into_owned();
    }
    config.validate()?;
    Ok(config)
}

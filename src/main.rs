use anyhow::{Context, Result, bail};
use clap::Parser;
use scriptgfx::host::catalog;
use scriptgfx::script::Script;
use scriptgfx::surface::ImageBackend;
use scriptgfx::{Config, Session, SessionSettings};
use std::path::PathBuf;

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("SCRIPTGFX_GIT_HASH"), ")");

#[derive(Parser, Debug)]
#[command(name = "scriptgfx")]
#[command(version = VERSION, about = "Deferred 2D drawing engine for scripting hosts")]
struct Cli {
    /// JSON script of operation calls to run
    #[arg(value_name = "SCRIPT", required_unless_present = "catalog")]
    script: Option<PathBuf>,

    /// Write the last painted frame to this PNG file
    #[arg(long, short = 'o', value_name = "PNG")]
    output: Option<PathBuf>,

    /// Use this config file instead of the default location
    #[arg(long, short = 'c', value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the operation catalog as JSON and exit
    #[arg(long, conflicts_with_all = ["script", "output"])]
    catalog: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.catalog {
        println!("{}", serde_json::to_string_pretty(catalog())?);
        return Ok(());
    }

    let Some(script_path) = cli.script else {
        bail!("no script given");
    };

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let script = Script::load(&script_path)?;
    let backend = ImageBackend::new(config.background());
    let mut session = Session::new(backend, SessionSettings::from_config(&config));

    let results = script.run(&mut session)?;
    log::info!(
        "Ran {} steps from {}",
        results.len(),
        script_path.display()
    );

    if let Some(output) = &cli.output {
        session
            .backend()
            .write_png(output)
            .with_context(|| format!("Failed to write frame to {}", output.display()))?;
        println!("Wrote {}", output.display());
    }

    Ok(())
}

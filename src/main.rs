use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use mipmap_icons::{Batch, BatchEvent, IconProfile};

#[derive(Parser)]
#[command(
    name = "mipmap-icons",
    version,
    about = "Generate Android launcher icons for every screen density"
)]
struct Cli {
    /// Resource directory to write mipmap-* folders into
    #[arg(long, value_name = "DIR")]
    base_dir: Option<PathBuf>,

    /// JSON profile with palette and output settings
    #[arg(long, value_name = "FILE")]
    profile: Option<PathBuf>,

    /// Print the effective profile as JSON and exit
    #[arg(long)]
    print_profile: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("mipmap_icons=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let mut profile = match &cli.profile {
        Some(path) => IconProfile::load(path)
            .with_context(|| format!("loading profile {}", path.display()))?,
        None => IconProfile::default(),
    };
    if let Some(base_dir) = cli.base_dir {
        profile.base_dir = base_dir;
    }

    if cli.print_profile {
        println!("{}", profile.to_json_pretty()?);
        return Ok(());
    }

    Batch::from_profile(&profile)
        .run_with(|event| match event {
            BatchEvent::Started { .. } => {
                println!("🎨 Generating launcher icons...");
                println!();
            }
            BatchEvent::Wrote(icon) => println!("✅ {}", icon.path.display()),
            BatchEvent::Finished(_) => {
                println!();
                println!("✅ All icons generated!");
            }
        })
        .context("icon generation failed")?;

    Ok(())
}

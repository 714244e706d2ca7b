use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use meetsrecord_icons::generate::generate_all;

#[derive(Parser)]
#[command(name = "generate-icons")]
#[command(about = "Generate the MeetsRecord app icon and menu bar icons", long_about = None)]
struct Cli {
    /// Directory receiving the generated assets (appiconset, icns, menu bar icons)
    #[arg(long, default_value = "MeetsRecord/Resources")]
    resources_dir: PathBuf,

    /// Skip compiling AppIcon.icns (iconutil is only available on macOS)
    #[arg(long)]
    skip_icns: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    generate_all(&cli.resources_dir, cli.skip_icns)
}

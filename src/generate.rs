//! I/O glue: renders the output catalog to disk and drives iconutil.
//!
//! Filesystem failures propagate as fatal errors. The one tolerated failure
//! is the external iconutil step, which degrades to a warning because the
//! PNG artifacts are useful on their own.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

use crate::app_icon::render_app_icon;
use crate::menubar::render_menu_bar_icon;
use crate::outputs::{contents_manifest, iconset_files, menubar_outputs, APP_ICON_SIZES};

/// Render the raw app icon sizes and the `Contents.json` manifest into
/// `<resources>/AppIcon.appiconset`.
pub fn generate_appiconset(resources_dir: &Path) -> Result<()> {
    let iconset_dir = resources_dir.join("AppIcon.appiconset");
    fs::create_dir_all(&iconset_dir)
        .with_context(|| format!("Failed to create {}", iconset_dir.display()))?;

    println!("Generating app icons...");
    for size in APP_ICON_SIZES {
        let path = iconset_dir.join(format!("icon_{size}x{size}.png"));
        render_app_icon(size)
            .save(&path)
            .with_context(|| format!("Failed to save {}", path.display()))?;
        println!("  {size}x{size}");
    }

    let manifest_path = iconset_dir.join("Contents.json");
    let json = serde_json::to_string_pretty(&contents_manifest())
        .context("Failed to serialize Contents.json")?;
    fs::write(&manifest_path, json)
        .with_context(|| format!("Failed to write {}", manifest_path.display()))?;

    Ok(())
}

/// Stage an `AppIcon.iconset` in a temporary directory and compile it to
/// `<resources>/AppIcon.icns` with iconutil.
///
/// The staging directory lives inside a `TempDir`, so it is removed on every
/// exit path, including tool failure. A missing or failing iconutil is
/// reported as a warning, not an error; macOS is the only platform that
/// ships it.
pub fn generate_icns(resources_dir: &Path) -> Result<()> {
    let staging = TempDir::new().context("Failed to create temporary directory")?;
    // iconutil requires the input directory name to end in .iconset
    let iconset_dir = staging.path().join("AppIcon.iconset");
    fs::create_dir(&iconset_dir)
        .with_context(|| format!("Failed to create {}", iconset_dir.display()))?;

    for (filename, px) in iconset_files() {
        let path = iconset_dir.join(&filename);
        render_app_icon(px)
            .save(&path)
            .with_context(|| format!("Failed to save {}", path.display()))?;
    }

    let icns_path = resources_dir.join("AppIcon.icns");
    println!("Converting to .icns...");
    let result = Command::new("iconutil")
        .arg("-c")
        .arg("icns")
        .arg(&iconset_dir)
        .arg("-o")
        .arg(&icns_path)
        .output();

    match result {
        Ok(output) if output.status.success() => {
            println!("  {}", icns_path.display());
        }
        Ok(output) => {
            eprintln!(
                "Warning: iconutil failed ({}): {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }
        Err(e) => {
            eprintln!("Warning: could not run iconutil: {e}");
        }
    }

    Ok(())
}

/// Render all menu bar glyphs into `<resources>/MenuBarIcons`.
pub fn generate_menubar_icons(resources_dir: &Path) -> Result<()> {
    let menubar_dir = resources_dir.join("MenuBarIcons");
    fs::create_dir_all(&menubar_dir)
        .with_context(|| format!("Failed to create {}", menubar_dir.display()))?;

    println!("Generating menu bar icons...");
    for (filename, px, state) in menubar_outputs() {
        let path = menubar_dir.join(&filename);
        render_menu_bar_icon(px, state)
            .save(&path)
            .with_context(|| format!("Failed to save {}", path.display()))?;
        println!("  {filename}");
    }

    Ok(())
}

/// Produce the whole icon family under `resources_dir`.
pub fn generate_all(resources_dir: &Path, skip_icns: bool) -> Result<()> {
    generate_appiconset(resources_dir)?;
    if skip_icns {
        println!("Skipping .icns compilation");
    } else {
        generate_icns(resources_dir)?;
    }
    generate_menubar_icons(resources_dir)?;
    println!("All icons generated");
    Ok(())
}

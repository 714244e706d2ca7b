//! The fixed output catalog: which sizes get rendered, what the files are
//! called, and the `Contents.json` manifest describing the appiconset.

use serde::{Deserialize, Serialize};

use crate::menubar::MenuBarState;

/// Raw app icon sizes saved as `icon_<N>x<N>.png`.
pub const APP_ICON_SIZES: [u32; 7] = [16, 32, 64, 128, 256, 512, 1024];

/// Nominal point sizes of the macOS icon set; each appears at 1x and 2x.
pub const ICONSET_NOMINAL_SIZES: [u32; 5] = [16, 32, 128, 256, 512];

/// Menu bar output scales: pixel size and the file name suffix.
pub const MENUBAR_SCALES: [(u32, &str); 2] = [(18, ""), (36, "@2x")];

/// One image entry of the `Contents.json` manifest.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ManifestImage {
    pub filename: String,
    pub idiom: String,
    pub scale: String,
    pub size: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ManifestInfo {
    pub author: String,
    pub version: u32,
}

/// The `Contents.json` document Xcode expects inside an `.appiconset`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ContentsManifest {
    pub images: Vec<ManifestImage>,
    pub info: ManifestInfo,
}

/// Build the appiconset manifest: ten entries, a 1x and a 2x variant per
/// nominal size, the 2x variant pointing at the doubled-size raw file.
pub fn contents_manifest() -> ContentsManifest {
    let mut images = Vec::with_capacity(ICONSET_NOMINAL_SIZES.len() * 2);
    for &nominal in &ICONSET_NOMINAL_SIZES {
        for (scale, factor) in [("1x", 1), ("2x", 2)] {
            let px = nominal * factor;
            images.push(ManifestImage {
                filename: format!("icon_{px}x{px}.png"),
                idiom: "mac".to_string(),
                scale: scale.to_string(),
                size: format!("{nominal}x{nominal}"),
            });
        }
    }
    ContentsManifest {
        images,
        info: ManifestInfo {
            author: "xcode".to_string(),
            version: 1,
        },
    }
}

/// `.iconset` staging files consumed by iconutil: file name and the pixel
/// size to render it at. `@2x` names carry double the nominal resolution.
pub fn iconset_files() -> Vec<(String, u32)> {
    let mut files = Vec::with_capacity(ICONSET_NOMINAL_SIZES.len() * 2);
    for &nominal in &ICONSET_NOMINAL_SIZES {
        files.push((format!("icon_{nominal}x{nominal}.png"), nominal));
        files.push((format!("icon_{nominal}x{nominal}@2x.png"), nominal * 2));
    }
    files
}

/// All menu bar outputs: file name, pixel size, and state. Three states at
/// two scales, six files.
pub fn menubar_outputs() -> Vec<(String, u32, MenuBarState)> {
    let mut outputs = Vec::with_capacity(MenuBarState::ALL.len() * MENUBAR_SCALES.len());
    for state in MenuBarState::ALL {
        for (px, suffix) in MENUBAR_SCALES {
            outputs.push((format!("menubar_{}{}.png", state.name(), suffix), px, state));
        }
    }
    outputs
}

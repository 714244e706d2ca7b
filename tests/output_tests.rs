// The fixed output catalog: manifest shape, file name mappings, and what the
// generators actually leave on disk.

use meetsrecord_icons::generate::{generate_appiconset, generate_icns, generate_menubar_icons};
use meetsrecord_icons::outputs::{
    contents_manifest, iconset_files, menubar_outputs, APP_ICON_SIZES,
};

#[test]
fn manifest_has_ten_mac_entries_in_the_fixed_order() {
    let manifest = contents_manifest();
    assert_eq!(manifest.images.len(), 10);
    assert!(manifest.images.iter().all(|img| img.idiom == "mac"));

    let expected: Vec<(&str, &str, &str)> = vec![
        ("icon_16x16.png", "1x", "16x16"),
        ("icon_32x32.png", "2x", "16x16"),
        ("icon_32x32.png", "1x", "32x32"),
        ("icon_64x64.png", "2x", "32x32"),
        ("icon_128x128.png", "1x", "128x128"),
        ("icon_256x256.png", "2x", "128x128"),
        ("icon_256x256.png", "1x", "256x256"),
        ("icon_512x512.png", "2x", "256x256"),
        ("icon_512x512.png", "1x", "512x512"),
        ("icon_1024x1024.png", "2x", "512x512"),
    ];
    let actual: Vec<(&str, &str, &str)> = manifest
        .images
        .iter()
        .map(|img| (img.filename.as_str(), img.scale.as_str(), img.size.as_str()))
        .collect();
    assert_eq!(actual, expected);

    assert_eq!(manifest.info.author, "xcode");
    assert_eq!(manifest.info.version, 1);
}

#[test]
fn manifest_serializes_with_the_xcode_field_names() {
    let json = serde_json::to_value(contents_manifest()).unwrap();
    assert_eq!(json["images"][0]["filename"], "icon_16x16.png");
    assert_eq!(json["images"][0]["idiom"], "mac");
    assert_eq!(json["info"]["author"], "xcode");
    assert_eq!(json["info"]["version"], 1);
}

#[test]
fn iconset_mapping_matches_iconutil_expectations() {
    let expected = vec![
        ("icon_16x16.png".to_string(), 16),
        ("icon_16x16@2x.png".to_string(), 32),
        ("icon_32x32.png".to_string(), 32),
        ("icon_32x32@2x.png".to_string(), 64),
        ("icon_128x128.png".to_string(), 128),
        ("icon_128x128@2x.png".to_string(), 256),
        ("icon_256x256.png".to_string(), 256),
        ("icon_256x256@2x.png".to_string(), 512),
        ("icon_512x512.png".to_string(), 512),
        ("icon_512x512@2x.png".to_string(), 1024),
    ];
    assert_eq!(iconset_files(), expected);
}

#[test]
fn menubar_outputs_cover_three_states_at_two_scales() {
    let outputs = menubar_outputs();
    assert_eq!(outputs.len(), 6);
    for (filename, px, state) in &outputs {
        let suffix = if *px == 36 { "@2x" } else { "" };
        assert_eq!(*filename, format!("menubar_{}{}.png", state.name(), suffix));
    }
    let names: Vec<&str> = outputs.iter().map(|(f, _, _)| f.as_str()).collect();
    assert!(names.contains(&"menubar_idle.png"));
    assert!(names.contains(&"menubar_recording@2x.png"));
    assert!(names.contains(&"menubar_paused.png"));
}

#[test]
fn generate_appiconset_writes_all_sizes_and_the_manifest() {
    let dir = tempfile::tempdir().unwrap();
    generate_appiconset(dir.path()).unwrap();

    let iconset = dir.path().join("AppIcon.appiconset");
    for size in APP_ICON_SIZES {
        assert!(iconset.join(format!("icon_{size}x{size}.png")).is_file());
    }

    let img = image::open(iconset.join("icon_64x64.png")).unwrap();
    assert_eq!(img.width(), 64);
    assert_eq!(img.height(), 64);

    let manifest: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(iconset.join("Contents.json")).unwrap())
            .unwrap();
    assert_eq!(manifest["images"].as_array().unwrap().len(), 10);
}

#[test]
fn generate_menubar_icons_writes_six_files() {
    let dir = tempfile::tempdir().unwrap();
    generate_menubar_icons(dir.path()).unwrap();

    let menubar = dir.path().join("MenuBarIcons");
    for state in ["idle", "recording", "paused"] {
        for suffix in ["", "@2x"] {
            assert!(menubar.join(format!("menubar_{state}{suffix}.png")).is_file());
        }
    }

    let img = image::open(menubar.join("menubar_recording@2x.png")).unwrap();
    assert_eq!(img.width(), 36);
}

#[test]
fn generate_icns_succeeds_even_when_iconutil_is_unavailable() {
    // On machines without iconutil the tool step degrades to a warning; the
    // function still returns Ok and cleans up its staging directory.
    let dir = tempfile::tempdir().unwrap();
    assert!(generate_icns(dir.path()).is_ok());
}

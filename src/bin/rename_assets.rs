use std::env;
use std::fs;
use std::path::PathBuf;
use std::process;

/// Rename PNG files with uppercase letters in their names to all-lowercase,
/// so asset lookups on case-sensitive filesystems stay consistent.
fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() > 2 {
        eprintln!("Usage: rename_assets [directory]");
        process::exit(1);
    }

    let dir = args
        .get(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("assets"));

    if !dir.is_dir() {
        eprintln!("Directory not found: {}", dir.display());
        process::exit(1);
    }

    let entries = fs::read_dir(&dir).expect("Failed to read directory");

    let mut renamed = 0;
    let mut skipped = 0;

    for entry in entries {
        let entry = entry.expect("Failed to read directory entry");
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if !name.to_ascii_lowercase().ends_with(".png") {
            continue;
        }

        let lower = name.to_lowercase();
        if lower == name {
            continue;
        }

        let target = dir.join(&lower);
        if target.exists() {
            eprintln!("Skipping {name}: {lower} already exists");
            skipped += 1;
            continue;
        }

        fs::rename(&path, &target).expect("Failed to rename file");
        println!("  {name} -> {lower}");
        renamed += 1;
    }

    if skipped > 0 {
        println!("Renamed {renamed} PNG files ({skipped} skipped)");
    } else {
        println!("Renamed {renamed} PNG files");
    }
}

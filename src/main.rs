use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::Parser;
use rayon::prelude::*;
use serde::Serialize;

use spritegen::canvas::Canvas;
use spritegen::catalog::{self, AssetSpec, Family};
use spritegen::cli::{Args, Command};
use spritegen::output;
use spritegen::sprites::{pickaxe, unlock};

fn main() -> Result<()> {
    let args = Args::parse();

    match args.command {
        Command::All { out_dir } => generate_all(&out_dir),
        Command::Pickaxes { out_dir } => generate_family(Family::Pickaxes, &out_dir),
        Command::Gemstone { out_dir } => generate_family(Family::Gemstone, &out_dir),
        Command::Crack { out_dir } => generate_family(Family::Crack, &out_dir),
        Command::Biomes { out_dir } => generate_family(Family::Biomes, &out_dir),
        Command::ShopIcon { size, output } => {
            let canvas = pickaxe::shop_icon(size).context("generating shop icon")?;
            write_icon(&canvas, &output)
        }
        Command::UnlockIcon { size, output } => {
            let canvas = unlock::key_icon(size).context("generating unlock icon")?;
            write_icon(&canvas, &output)
        }
        Command::UnlockBiome { size, output } => {
            let canvas = unlock::biome_icon(size).context("generating biome unlock icon")?;
            write_icon(&canvas, &output)
        }
        Command::List { json } => list(json),
        Command::Check { out_dir, json } => check(&out_dir, json),
    }
}

/// Render and write the whole catalog. Every asset is attempted even when an
/// earlier one fails; failures are collected and reported at the end.
fn generate_all(out_dir: &Path) -> Result<()> {
    let failures: Vec<String> = catalog::ASSETS
        .par_iter()
        .filter_map(|asset| {
            write_asset(asset, out_dir)
                .err()
                .map(|err| format!("{}: {err:#}", asset.name))
        })
        .collect();

    let written = catalog::ASSETS.len() - failures.len();
    println!(
        "✓ {written} of {} assets written to {}",
        catalog::ASSETS.len(),
        out_dir.display()
    );

    if !failures.is_empty() {
        for failure in &failures {
            eprintln!("  ✗ {failure}");
        }
        bail!("{} of {} assets failed", failures.len(), catalog::ASSETS.len());
    }
    Ok(())
}

fn generate_family(family: Family, out_dir: &Path) -> Result<()> {
    for asset in catalog::by_family(family) {
        write_asset(asset, out_dir)?;
    }
    Ok(())
}

fn write_asset(asset: &AssetSpec, out_dir: &Path) -> Result<()> {
    let canvas = (asset.render)().with_context(|| format!("generating {}", asset.name))?;
    let path = out_dir.join(asset.file);
    output::save(&canvas, &path).with_context(|| format!("writing {}", path.display()))?;
    println!("  ✓ {}", path.display());
    Ok(())
}

fn write_icon(canvas: &Canvas, path: &Path) -> Result<()> {
    output::save(canvas, path).with_context(|| format!("writing {}", path.display()))?;
    println!("✓ Created: {}", path.display());
    Ok(())
}

fn list(json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&catalog::ASSETS)?);
    } else {
        println!("{} assets:", catalog::ASSETS.len());
        for asset in &catalog::ASSETS {
            println!(
                "  {:<20} {:>3}x{:<3} {}",
                asset.name, asset.width, asset.height, asset.file
            );
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct CheckReport {
    present: Vec<&'static str>,
    missing: Vec<&'static str>,
}

/// Confirm every catalog asset exists under `out_dir`. Missing files fail the
/// command so CI can gate on it.
fn check(out_dir: &Path, json: bool) -> Result<()> {
    let mut report = CheckReport {
        present: Vec::new(),
        missing: Vec::new(),
    };
    for asset in &catalog::ASSETS {
        if out_dir.join(asset.file).is_file() {
            report.present.push(asset.file);
        } else {
            report.missing.push(asset.file);
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "{} present, {} missing in {}",
            report.present.len(),
            report.missing.len(),
            out_dir.display()
        );
        for file in &report.missing {
            println!("  missing: {file}");
        }
    }

    if !report.missing.is_empty() {
        bail!("{} assets missing", report.missing.len());
    }
    Ok(())
}

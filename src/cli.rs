use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "spritegen")]
#[command(version)]
#[command(about = "Generate the game's pixel-art sprites and icons", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate every asset in the catalog
    All {
        /// Directory the sprites are written into
        #[arg(short, long, default_value = "assets")]
        out_dir: PathBuf,
    },

    /// Generate the three shop pickaxe sprites
    Pickaxes {
        /// Directory the sprites are written into
        #[arg(short, long, default_value = "assets")]
        out_dir: PathBuf,
    },

    /// Generate the gemstone sprite
    Gemstone {
        /// Directory the sprite is written into
        #[arg(short, long, default_value = "assets")]
        out_dir: PathBuf,
    },

    /// Generate the block crack overlay
    Crack {
        /// Directory the sprite is written into
        #[arg(short, long, default_value = "assets")]
        out_dir: PathBuf,
    },

    /// Generate the biome tiles and the desert selection icon
    Biomes {
        /// Directory the tiles are written into
        #[arg(short, long, default_value = "assets")]
        out_dir: PathBuf,
    },

    /// Generate the shop pickaxe button icon
    ShopIcon {
        /// Canvas size in pixels (square)
        #[arg(short, long, default_value = "24")]
        size: u32,

        /// Output file
        #[arg(short, long, default_value = "assets/shop_pickaxe.png")]
        output: PathBuf,
    },

    /// Generate the gold key unlock icon
    UnlockIcon {
        /// Canvas size in pixels (square)
        #[arg(short, long, default_value = "32")]
        size: u32,

        /// Output file
        #[arg(short, long, default_value = "assets/unlock_icon.png")]
        output: PathBuf,
    },

    /// Generate the biome unlock button icon
    UnlockBiome {
        /// Canvas size in pixels (square)
        #[arg(short, long, default_value = "24")]
        size: u32,

        /// Output file
        #[arg(short, long, default_value = "assets/unlock_biome.png")]
        output: PathBuf,
    },

    /// Print the asset catalog
    List {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Verify that every catalog asset exists on disk
    Check {
        /// Directory to look for the assets in
        #[arg(short, long, default_value = "assets")]
        out_dir: PathBuf,

        /// Emit JSON instead of a summary
        #[arg(long)]
        json: bool,
    },
}

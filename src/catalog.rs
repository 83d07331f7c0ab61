//! Compiled-in inventory of every asset the suite emits. The CLI drives all
//! bulk generation through this table so file names and sizes live in exactly
//! one place.

use serde::Serialize;

use crate::canvas::Canvas;
use crate::error::Result;
use crate::sprites::{biome, gem, pickaxe, unlock};

/// Generator family an asset belongs to; each family maps to one subcommand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Family {
    Pickaxes,
    Gemstone,
    Crack,
    Biomes,
    ShopIcon,
    UnlockIcon,
    UnlockBiome,
}

/// One emitted asset: its default file name, dimensions, and generator.
#[derive(Clone, Copy, Serialize)]
pub struct AssetSpec {
    pub name: &'static str,
    pub file: &'static str,
    pub width: u32,
    pub height: u32,
    pub family: Family,
    #[serde(skip)]
    pub render: fn() -> Result<Canvas>,
}

fn wooden_pickaxe() -> Result<Canvas> {
    pickaxe::sprite(pickaxe::WOODEN)
}

fn stone_pickaxe() -> Result<Canvas> {
    pickaxe::sprite(pickaxe::STONE)
}

fn iron_pickaxe() -> Result<Canvas> {
    pickaxe::sprite(pickaxe::IRON)
}

fn plains_tile() -> Result<Canvas> {
    biome::tile(biome::PLAINS)
}

fn desert_tile() -> Result<Canvas> {
    biome::tile(biome::DESERT)
}

fn shop_pickaxe() -> Result<Canvas> {
    pickaxe::shop_icon(24)
}

fn unlock_key() -> Result<Canvas> {
    unlock::key_icon(32)
}

fn unlock_biome() -> Result<Canvas> {
    unlock::biome_icon(24)
}

/// Every asset the game expects, in generation order. File names match what
/// the game loads at runtime, quirks included ("plain-biome", the underscore
/// icons), so keep them stable.
pub static ASSETS: [AssetSpec; 11] = [
    AssetSpec {
        name: "wooden-pickaxe",
        file: "pickaxe.png",
        width: 32,
        height: 32,
        family: Family::Pickaxes,
        render: wooden_pickaxe,
    },
    AssetSpec {
        name: "stone-pickaxe",
        file: "stone-pickaxe.png",
        width: 32,
        height: 32,
        family: Family::Pickaxes,
        render: stone_pickaxe,
    },
    AssetSpec {
        name: "iron-pickaxe",
        file: "iron-pickaxe.png",
        width: 32,
        height: 32,
        family: Family::Pickaxes,
        render: iron_pickaxe,
    },
    AssetSpec {
        name: "gemstone",
        file: "gemstone.png",
        width: 24,
        height: 24,
        family: Family::Gemstone,
        render: gem::gemstone,
    },
    AssetSpec {
        name: "crack",
        file: "crack.png",
        width: 24,
        height: 24,
        family: Family::Crack,
        render: gem::crack,
    },
    AssetSpec {
        name: "plains-biome",
        file: "plain-biome.png",
        width: 64,
        height: 64,
        family: Family::Biomes,
        render: plains_tile,
    },
    AssetSpec {
        name: "desert-biome",
        file: "desert-biome.png",
        width: 64,
        height: 64,
        family: Family::Biomes,
        render: desert_tile,
    },
    AssetSpec {
        name: "desert-biome-icon",
        file: "desert-biome-icon.png",
        width: 32,
        height: 32,
        family: Family::Biomes,
        render: biome::desert_icon,
    },
    AssetSpec {
        name: "shop-pickaxe",
        file: "shop_pickaxe.png",
        width: 24,
        height: 24,
        family: Family::ShopIcon,
        render: shop_pickaxe,
    },
    AssetSpec {
        name: "unlock-key",
        file: "unlock_icon.png",
        width: 32,
        height: 32,
        family: Family::UnlockIcon,
        render: unlock_key,
    },
    AssetSpec {
        name: "unlock-biome",
        file: "unlock_biome.png",
        width: 24,
        height: 24,
        family: Family::UnlockBiome,
        render: unlock_biome,
    },
];

/// Assets belonging to one family, in catalog order.
pub fn by_family(family: Family) -> impl Iterator<Item = &'static AssetSpec> {
    ASSETS.iter().filter(move |asset| asset.family == family)
}

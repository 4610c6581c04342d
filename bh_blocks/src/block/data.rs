//! The vanilla block set. This is a subset of the blocks in the latest
//! version, which covers every block that has a vanilla behavior group.

pub const WOODS: &[&str] =
  &["oak", "spruce", "birch", "jungle", "acacia", "dark_oak", "mangrove", "cherry"];

pub const COLORS: &[&str] = &[
  "white",
  "orange",
  "magenta",
  "light_blue",
  "yellow",
  "lime",
  "pink",
  "gray",
  "light_gray",
  "cyan",
  "purple",
  "blue",
  "brown",
  "green",
  "red",
  "black",
];

/// Blocks that don't come in a wood or color family.
pub const MISC: &[&str] = &[
  "air",
  "stone",
  "granite",
  "diorite",
  "andesite",
  "grass_block",
  "dirt",
  "cobblestone",
  "bedrock",
  "sand",
  "red_sand",
  "gravel",
  "glass",
  "crafting_table",
  "basalt",
  "polished_basalt",
  "bone_block",
  "hay_block",
  "quartz_pillar",
  "purpur_pillar",
  "anvil",
  "chipped_anvil",
  "damaged_anvil",
  "iron_door",
  "iron_trapdoor",
  "stone_slab",
  "smooth_stone_slab",
  "cobblestone_slab",
  "sandstone_slab",
];

/// Patterns for each wood type. `{}` is replaced with the wood name.
pub const WOOD_FAMILY: &[&str] = &[
  "{}_planks",
  "{}_log",
  "stripped_{}_log",
  "{}_wood",
  "stripped_{}_wood",
  "{}_slab",
  "{}_door",
  "{}_trapdoor",
];

/// Patterns for each dye color. `{}` is replaced with the color name.
pub const COLOR_FAMILY: &[&str] = &["{}_wool", "{}_concrete", "{}_concrete_powder", "{}_bed"];

/// Expands a family pattern for every name given.
pub fn expand<'a>(
  patterns: &'a [&str],
  names: &'a [&str],
) -> impl Iterator<Item = String> + 'a {
  names.iter().flat_map(move |name| patterns.iter().map(move |pat| pat.replace("{}", name)))
}

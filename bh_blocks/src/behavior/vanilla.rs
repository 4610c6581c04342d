//! The built-in behavior groups.

use super::{Bed, CraftingTable, Door, Falling, Pillar, Slab, Trapdoor, VanillaGroup};
use crate::group::BlockGroup;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("no vanilla behavior group named `{0}`")]
pub struct UnknownGroup(pub String);

/// Returns the vanilla groups with the given names, in the same order as
/// [`all`]. An empty list selects every group.
pub fn select(names: &[String]) -> Result<Vec<VanillaGroup>, UnknownGroup> {
  let groups = all();
  if let Some(name) = names.iter().find(|n| !groups.iter().any(|g| g.name == n.as_str())) {
    return Err(UnknownGroup(name.clone()));
  }
  if names.is_empty() {
    return Ok(groups);
  }
  Ok(groups.into_iter().filter(|g| names.iter().any(|n| n == g.name)).collect())
}

/// Returns every vanilla behavior group. These are registered, in this order,
/// by [`Registrations::register_default`](crate::registrations::Registrations::register_default).
pub fn all() -> Vec<VanillaGroup> {
  vec![
    VanillaGroup::new(
      "pillars",
      BlockGroup::AnyOf(vec![
        BlockGroup::tag("minecraft:logs"),
        BlockGroup::blocks(&[
          "minecraft:basalt",
          "minecraft:polished_basalt",
          "minecraft:bone_block",
          "minecraft:hay_block",
          "minecraft:quartz_pillar",
          "minecraft:purpur_pillar",
        ]),
      ]),
      Pillar::create,
    ),
    VanillaGroup::new(
      "falling",
      BlockGroup::AnyOf(vec![
        BlockGroup::tag("minecraft:sand"),
        BlockGroup::blocks(&["minecraft:gravel"]),
        BlockGroup::suffix("_concrete_powder"),
        BlockGroup::tag("minecraft:anvil"),
      ]),
      Falling::create,
    ),
    VanillaGroup::new(
      "crafting_table",
      BlockGroup::blocks(&["minecraft:crafting_table"]),
      CraftingTable::create,
    ),
    VanillaGroup::new("trapdoors", BlockGroup::tag("minecraft:trapdoors"), Trapdoor::create),
    VanillaGroup::new("doors", BlockGroup::tag("minecraft:doors"), Door::create),
    VanillaGroup::new("beds", BlockGroup::tag("minecraft:beds"), Bed::create),
    VanillaGroup::new("slabs", BlockGroup::tag("minecraft:slabs"), Slab::create),
  ]
}

use crate::block::data;
use bh_common::{Key, KeyError};
use std::collections::{HashMap, HashSet};
use thiserror::Error;

#[cfg(test)]
mod tests;

/// A set of block tags. Each tag is a list of entries, where every entry is
/// either a block key, or a `#` followed by the key of another tag.
#[derive(Debug, Clone, Default)]
pub struct Tags {
  tags: HashMap<Key, Vec<String>>,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TagError {
  #[error("no such tag `#{0}`")]
  Unknown(Key),
  #[error("invalid entry `{entry}` in tag `#{tag}`: {source}")]
  InvalidEntry {
    tag:    Key,
    entry:  String,
    #[source]
    source: KeyError,
  },
  #[error("tag `#{0}` references itself")]
  Cycle(Key),
}

impl Tags {
  pub fn new() -> Self { Tags::default() }

  /// Builds the vanilla block tags.
  pub fn vanilla() -> Self {
    let mut tags = Tags::new();
    let wood = |pat: &str| -> Vec<String> {
      data::WOODS.iter().map(|w| pat.replace("{}", w)).collect()
    };
    for w in data::WOODS {
      tags.add(
        Key::minecraft(format!("{w}_logs")),
        ["{}_log", "{}_wood", "stripped_{}_log", "stripped_{}_wood"]
          .map(|pat| format!("minecraft:{}", pat.replace("{}", w))),
      );
    }
    tags.add(Key::minecraft("logs"), wood("#minecraft:{}_logs"));
    tags.add(Key::minecraft("planks"), wood("minecraft:{}_planks"));
    tags.add(Key::minecraft("wooden_trapdoors"), wood("minecraft:{}_trapdoor"));
    tags.add(
      Key::minecraft("trapdoors"),
      ["#minecraft:wooden_trapdoors", "minecraft:iron_trapdoor"].map(String::from),
    );
    tags.add(Key::minecraft("wooden_doors"), wood("minecraft:{}_door"));
    tags.add(Key::minecraft("doors"), ["#minecraft:wooden_doors", "minecraft:iron_door"].map(String::from));
    tags.add(Key::minecraft("wooden_slabs"), wood("minecraft:{}_slab"));
    tags.add(
      Key::minecraft("slabs"),
      [
        "#minecraft:wooden_slabs",
        "minecraft:stone_slab",
        "minecraft:smooth_stone_slab",
        "minecraft:cobblestone_slab",
        "minecraft:sandstone_slab",
      ]
      .map(String::from),
    );
    tags.add(
      Key::minecraft("beds"),
      data::COLORS.iter().map(|c| format!("minecraft:{c}_bed")),
    );
    tags.add(
      Key::minecraft("anvil"),
      ["minecraft:anvil", "minecraft:chipped_anvil", "minecraft:damaged_anvil"].map(String::from),
    );
    tags.add(Key::minecraft("sand"), ["minecraft:sand", "minecraft:red_sand"].map(String::from));
    tags
  }

  /// Adds a tag. If the tag already exists, the new entries are appended to it.
  pub fn add(&mut self, tag: Key, entries: impl IntoIterator<Item = impl Into<String>>) {
    self.tags.entry(tag).or_default().extend(entries.into_iter().map(Into::into));
  }

  /// Expands the given tag into all the block keys in it. Nested tags are
  /// expanded in place, and each block is only listed the first time it is
  /// found.
  ///
  /// Blocks are not checked against any block list, so the result may contain
  /// keys for blocks that don't exist.
  pub fn expand(&self, tag: &Key) -> Result<Vec<Key>, TagError> {
    let mut out = vec![];
    let mut seen = HashSet::new();
    let mut stack = vec![];
    self.expand_into(tag, &mut stack, &mut seen, &mut out)?;
    Ok(out)
  }

  fn expand_into(
    &self,
    tag: &Key,
    stack: &mut Vec<Key>,
    seen: &mut HashSet<Key>,
    out: &mut Vec<Key>,
  ) -> Result<(), TagError> {
    if stack.contains(tag) {
      return Err(TagError::Cycle(tag.clone()));
    }
    let entries = self.tags.get(tag).ok_or_else(|| TagError::Unknown(tag.clone()))?;
    stack.push(tag.clone());
    for entry in entries {
      let invalid = |source| TagError::InvalidEntry { tag: tag.clone(), entry: entry.clone(), source };
      match entry.strip_prefix('#') {
        Some(name) => {
          let inner = name.parse().map_err(invalid)?;
          self.expand_into(&inner, stack, seen, out)?;
        }
        None => {
          let block: Key = entry.parse().map_err(invalid)?;
          if seen.insert(block.clone()) {
            out.push(block);
          }
        }
      }
    }
    stack.pop();
    Ok(())
  }
}

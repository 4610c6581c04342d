use crate::{
  block::BlockList,
  tags::{TagError, Tags},
};
use bh_common::{Key, KeyError};
use std::collections::HashSet;
use thiserror::Error;


/// Everything a [`BlockGroup`] can be matched against.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
  pub blocks: BlockList,
  pub tags:   Tags,
}

impl Catalog {
  pub fn new(blocks: BlockList, tags: Tags) -> Self { Catalog { blocks, tags } }
  /// The vanilla blocks and tags.
  pub fn vanilla() -> Self { Catalog { blocks: BlockList::vanilla(), tags: Tags::vanilla() } }
}

/// A description of a set of blocks. Groups are matched against a
/// [`Catalog`] to find the actual blocks they contain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockGroup {
  /// A list of block keys, such as `minecraft:stone`.
  Blocks(Vec<String>),
  /// A tag, such as `minecraft:logs`. The leading `#` is optional.
  Tag(String),
  /// Every known block whose path ends with the given string.
  Suffix(String),
  /// Every block matched by any of the given groups.
  AnyOf(Vec<BlockGroup>),
  /// Every block in the first group, which isn't in the second group.
  Excluding(Box<BlockGroup>, Box<BlockGroup>),
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GroupError {
  #[error("invalid block key: {0}")]
  InvalidKey(#[from] KeyError),
  #[error("no such block `{0}`")]
  UnknownBlock(Key),
  #[error(transparent)]
  Tag(#[from] TagError),
}

impl BlockGroup {
  pub fn blocks(names: &[&str]) -> Self {
    BlockGroup::Blocks(names.iter().map(|s| s.to_string()).collect())
  }
  pub fn tag(name: &str) -> Self { BlockGroup::Tag(name.into()) }
  pub fn suffix(suffix: &str) -> Self { BlockGroup::Suffix(suffix.into()) }
  pub fn excluding(self, other: BlockGroup) -> Self {
    BlockGroup::Excluding(Box::new(self), Box::new(other))
  }

  /// Returns every block in this group. Blocks are listed in the order the
  /// group declares them (catalog order for [`BlockGroup::Suffix`]), and each
  /// block is only listed once.
  ///
  /// Blocks named directly must exist in the catalog. Blocks found through a
  /// tag which don't exist in the catalog are skipped.
  pub fn all_matching(&self, catalog: &Catalog) -> Result<Vec<Key>, GroupError> {
    let mut out = vec![];
    let mut seen = HashSet::new();
    self.collect(catalog, &mut seen, &mut out)?;
    Ok(out)
  }

  fn collect(
    &self,
    catalog: &Catalog,
    seen: &mut HashSet<Key>,
    out: &mut Vec<Key>,
  ) -> Result<(), GroupError> {
    let mut push = |key: Key| {
      if seen.insert(key.clone()) {
        out.push(key);
      }
    };
    match self {
      Self::Blocks(names) => {
        for name in names {
          let key: Key = name.parse()?;
          if !catalog.blocks.contains(&key) {
            return Err(GroupError::UnknownBlock(key));
          }
          push(key);
        }
      }
      Self::Tag(name) => {
        let tag: Key = name.strip_prefix('#').unwrap_or(name).parse()?;
        for key in catalog.tags.expand(&tag)? {
          if catalog.blocks.contains(&key) {
            push(key);
          } else {
            debug!("tag `#{tag}` contains unknown block `{key}`, skipping");
          }
        }
      }
      Self::Suffix(suffix) => {
        catalog.blocks.iter().filter(|k| k.path().ends_with(suffix.as_str())).cloned().for_each(push);
      }
      Self::AnyOf(groups) => {
        for group in groups {
          group.collect(catalog, seen, out)?;
        }
      }
      Self::Excluding(base, removed) => {
        let removed: HashSet<Key> = removed.all_matching(catalog)?.into_iter().collect();
        for key in base.all_matching(catalog)? {
          if !removed.contains(&key) {
            push(key);
          }
        }
      }
    }
    Ok(())
  }
}

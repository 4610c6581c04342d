use bh_common::{util::Face, Key};
use std::collections::HashSet;

pub mod data;

#[cfg(test)]
mod tests;

/// Every block kind that the server knows about, in a stable order.
#[derive(Debug, Clone, Default)]
pub struct BlockList {
  blocks: Vec<Key>,
  set:    HashSet<Key>,
}

impl BlockList {
  /// Creates a block list from the given keys. Duplicates are removed, and the
  /// first occurrence keeps its position.
  pub fn new(blocks: impl IntoIterator<Item = Key>) -> Self {
    let mut list = BlockList::default();
    for key in blocks {
      list.insert(key);
    }
    list
  }

  /// Builds the vanilla block list. Miscellaneous blocks come first, then wood
  /// families, then color families.
  pub fn vanilla() -> Self {
    BlockList::new(
      data::MISC
        .iter()
        .map(|name| name.to_string())
        .chain(data::expand(data::WOOD_FAMILY, data::WOODS))
        .chain(data::expand(data::COLOR_FAMILY, data::COLORS))
        .map(Key::minecraft),
    )
  }

  /// Adds a block to the end of this list. Returns `false` if the block was
  /// already present.
  pub fn insert(&mut self, key: Key) -> bool {
    if self.set.insert(key.clone()) {
      self.blocks.push(key);
      true
    } else {
      false
    }
  }

  pub fn contains(&self, key: &Key) -> bool { self.set.contains(key) }
  pub fn iter(&self) -> impl Iterator<Item = &Key> { self.blocks.iter() }
  pub fn len(&self) -> usize { self.blocks.len() }
  pub fn is_empty(&self) -> bool { self.blocks.is_empty() }
}

/// A block kind along with its properties. Properties are kept in the order
/// they were first set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
  block: Key,
  props: Vec<(String, String)>,
}

impl State {
  pub fn new(block: Key) -> Self { State { block, props: vec![] } }

  pub fn block(&self) -> &Key { &self.block }

  /// Returns a copy of this state with the given property set.
  pub fn with(mut self, name: &str, value: impl Into<String>) -> Self {
    self.set(name, value);
    self
  }
  pub fn set(&mut self, name: &str, value: impl Into<String>) {
    let value = value.into();
    match self.props.iter_mut().find(|(n, _)| n == name) {
      Some((_, v)) => *v = value,
      None => self.props.push((name.into(), value)),
    }
  }
  pub fn prop(&self, name: &str) -> Option<&str> {
    self.props.iter().find(|(n, _)| n == name).map(|(_, v)| v.as_str())
  }
  /// Returns true if the property is set to `true`. Missing properties are
  /// `false`.
  pub fn bool_prop(&self, name: &str) -> bool { self.prop(name) == Some("true") }

  pub fn props(&self) -> impl Iterator<Item = (&str, &str)> {
    self.props.iter().map(|(n, v)| (n.as_str(), v.as_str()))
  }
}

/// Where a player clicked when placing or using a block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockClick {
  /// The face of the block that was clicked.
  pub face:     Face,
  /// The horizontal direction the player is facing.
  pub dir:      Face,
  /// The height of the cursor within the clicked block, from 0 to 1.
  pub cursor_y: f64,
}

use crate::{
  block::{BlockClick, State},
  group::{BlockGroup, Catalog, GroupError},
};
use bh_common::{util::Face, Key};
use std::{fmt, sync::Arc};
use thiserror::Error;

mod impls;
pub mod vanilla;

#[cfg(test)]
mod tests;

pub use impls::{Bed, CraftingTable, Door, Falling, Pillar, Slab, Trapdoor};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventFlow {
  Handled,
  Continue,
}

/// What should happen to a block after one of its neighbors changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Update {
  Keep,
  /// The block should be removed, without any drops.
  Break,
  /// The block should turn into a falling block entity.
  Fall,
}

/// The behavior of a single block kind. One handler is created for every
/// block matched by a [`BehaviorGroup`].
pub trait Handler: Send + Sync {
  /// A short name for this handler, used when listing registered handlers.
  fn name(&self) -> &str;

  /// Called when the block is placed. The returned state will be placed in
  /// the world.
  fn place(&self, state: State, click: &BlockClick) -> State {
    let _ = click;
    state
  }
  /// Called when a player right clicks on this block.
  fn interact(&self, state: &mut State) -> EventFlow {
    let _ = state;
    EventFlow::Continue
  }
  /// Called when the block on the given face of this block changes.
  fn neighbor_update(&self, state: &State, face: Face, neighbor: &Key) -> Update {
    let _ = (state, face, neighbor);
    Update::Keep
  }
}

impl fmt::Debug for dyn Handler {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.debug_tuple("Handler").field(&self.name()).finish()
  }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HandlerError {
  #[error("handler `{handler}` cannot be used for block `{block}`")]
  UnsupportedBlock { handler: &'static str, block: Key },
}

/// A set of blocks which all share a behavior. The group decides which blocks
/// it applies to, and builds a handler for each of them.
pub trait BehaviorGroup {
  fn name(&self) -> &str;

  /// The blocks this group applies to.
  fn block_group(&self) -> &BlockGroup;

  /// Returns every block this group applies to.
  fn matched_blocks(&self, catalog: &Catalog) -> Result<Vec<Key>, GroupError> {
    self.block_group().all_matching(catalog)
  }

  /// Builds a handler for a single block. This is called once for every
  /// block returned by [`matched_blocks`](Self::matched_blocks).
  fn create_handler(&self, block: &Key) -> Result<Arc<dyn Handler>, HandlerError>;
}

pub type HandlerFactory = fn(&Key) -> Result<Arc<dyn Handler>, HandlerError>;

/// A behavior group built from a [`BlockGroup`] and a plain factory
/// function. All the vanilla groups are one of these.
pub struct VanillaGroup {
  name:    &'static str,
  group:   BlockGroup,
  factory: HandlerFactory,
}

impl VanillaGroup {
  pub fn new(name: &'static str, group: BlockGroup, factory: HandlerFactory) -> Self {
    VanillaGroup { name, group, factory }
  }
}

impl fmt::Debug for VanillaGroup {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.debug_struct("VanillaGroup").field("name", &self.name).field("group", &self.group).finish()
  }
}

impl BehaviorGroup for VanillaGroup {
  fn name(&self) -> &str { self.name }
  fn block_group(&self) -> &BlockGroup { &self.group }
  fn create_handler(&self, block: &Key) -> Result<Arc<dyn Handler>, HandlerError> {
    (self.factory)(block)
  }
}

use crate::behavior::Handler;
use bh_common::Key;
use parking_lot::RwLock;
use std::{
  collections::HashMap,
  sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
  },
};
use thiserror::Error;


/// Something which handlers can be registered into.
pub trait HandlerSink {
  /// Registers a handler for the given block. If a handler is already
  /// registered for this block, it is replaced.
  fn register_handler(&self, block: &Key, handler: Arc<dyn Handler>) -> Result<(), SinkError>;
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SinkError {
  #[error("cannot register a handler for `{0}`, as the block manager is frozen")]
  Frozen(Key),
}

/// Stores the handler for every block. This can be shared between threads;
/// all access goes through a lock.
#[derive(Default)]
pub struct BlockManager {
  handlers: RwLock<HashMap<Key, Arc<dyn Handler>>>,
  frozen:   AtomicBool,
}

impl BlockManager {
  pub fn new() -> Self { BlockManager::default() }

  /// Returns the handler for the given block, if there is one.
  pub fn handler(&self, block: &Key) -> Option<Arc<dyn Handler>> {
    self.handlers.read().get(block).cloned()
  }

  pub fn len(&self) -> usize { self.handlers.read().len() }
  pub fn is_empty(&self) -> bool { self.handlers.read().is_empty() }

  /// Returns every block with a handler, sorted.
  pub fn keys(&self) -> Vec<Key> {
    let mut keys: Vec<Key> = self.handlers.read().keys().cloned().collect();
    keys.sort();
    keys
  }

  /// After this is called, any new registrations will fail. Handlers that are
  /// already registered stay.
  pub fn freeze(&self) { self.frozen.store(true, Ordering::Release); }
  pub fn is_frozen(&self) -> bool { self.frozen.load(Ordering::Acquire) }
}

impl HandlerSink for BlockManager {
  fn register_handler(&self, block: &Key, handler: Arc<dyn Handler>) -> Result<(), SinkError> {
    if self.is_frozen() {
      return Err(SinkError::Frozen(block.clone()));
    }
    if let Some(old) = self.handlers.write().insert(block.clone(), handler) {
      debug!("replaced handler `{}` for block `{block}`", old.name());
    }
    Ok(())
  }
}

use crate::{
  behavior::{vanilla, BehaviorGroup, HandlerError},
  group::{Catalog, GroupError},
  manager::{HandlerSink, SinkError},
  tags::TagError,
};
use bh_common::Key;
use thiserror::Error;


/// Receives the total once every handler has been registered.
pub trait Reporter {
  fn registered(&self, count: usize);
}

/// Logs the registration count at the `info` level.
pub struct LogReporter;
impl Reporter for LogReporter {
  fn registered(&self, count: usize) { info!("registered {count} handlers"); }
}

/// Returns true if the error comes from a malformed key. Groups with a
/// malformed key are skipped. Any other matching error fails registration.
fn is_malformed_key(err: &GroupError) -> bool {
  matches!(err, GroupError::InvalidKey(_) | GroupError::Tag(TagError::InvalidEntry { .. }))
}

#[derive(Debug, Error)]
pub enum RegisterError {
  #[error("behavior group `{group}` could not be matched: {source}")]
  Group {
    group:  String,
    #[source]
    source: GroupError,
  },
  #[error("behavior group `{group}` could not create a handler for `{block}`: {source}")]
  Handler {
    group:  String,
    block:  Key,
    #[source]
    source: HandlerError,
  },
  #[error("behavior group `{group}` could not register a handler for `{block}`: {source}")]
  Sink {
    group:  String,
    block:  Key,
    #[source]
    source: SinkError,
  },
}

impl RegisterError {
  /// The behavior group that failed.
  pub fn group(&self) -> &str {
    match self {
      Self::Group { group, .. } | Self::Handler { group, .. } | Self::Sink { group, .. } => group,
    }
  }
  /// The block that failed to register. This is `None` if the group itself
  /// could not be matched.
  pub fn block(&self) -> Option<&Key> {
    match self {
      Self::Group { .. } => None,
      Self::Handler { block, .. } | Self::Sink { block, .. } => Some(block),
    }
  }
}

/// Registers the handlers of behavior groups into a [`HandlerSink`].
pub struct Registrations<'a> {
  catalog:  &'a Catalog,
  sink:     &'a dyn HandlerSink,
  reporter: &'a dyn Reporter,
}

impl<'a> Registrations<'a> {
  /// Creates a registry initializer which reports with a [`LogReporter`].
  pub fn new(catalog: &'a Catalog, sink: &'a dyn HandlerSink) -> Self {
    Registrations { catalog, sink, reporter: &LogReporter }
  }
  pub fn with_reporter(mut self, reporter: &'a dyn Reporter) -> Self {
    self.reporter = reporter;
    self
  }

  /// Registers every group in [`vanilla::all`]. This is the same as calling
  /// [`register`](Self::register) with those groups.
  pub fn register_default(&self) -> Result<usize, RegisterError> {
    let groups = vanilla::all();
    self.register(groups.iter().map(|g| g as &dyn BehaviorGroup))
  }

  /// Registers one handler for every block matched by every group. Groups are
  /// processed in order, and blocks in the order each group matches them. If
  /// two groups match the same block, the later group's handler replaces the
  /// earlier one, but both registrations are counted.
  ///
  /// A group containing a malformed key is skipped with a warning. If a group
  /// names an unknown block or tag, or a handler cannot be created or
  /// registered, this stops immediately and returns the error. The total is
  /// only reported on success.
  pub fn register<'g>(
    &self,
    groups: impl IntoIterator<Item = &'g dyn BehaviorGroup>,
  ) -> Result<usize, RegisterError> {
    let mut count = 0;
    for group in groups {
      let blocks = match group.matched_blocks(self.catalog) {
        Ok(blocks) => blocks,
        Err(e) if is_malformed_key(&e) => {
          warn!("skipping behavior group `{}`: {e}", group.name());
          continue;
        }
        Err(source) => return Err(RegisterError::Group { group: group.name().into(), source }),
      };
      if blocks.is_empty() {
        debug!("behavior group `{}` matched no blocks", group.name());
      }
      for block in blocks {
        let handler = group.create_handler(&block).map_err(|source| RegisterError::Handler {
          group: group.name().into(),
          block: block.clone(),
          source,
        })?;
        self.sink.register_handler(&block, handler).map_err(|source| RegisterError::Sink {
          group: group.name().into(),
          block: block.clone(),
          source,
        })?;
        count += 1;
      }
    }
    self.reporter.registered(count);
    Ok(count)
  }
}

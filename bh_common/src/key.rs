use std::{fmt, str::FromStr};
use thiserror::Error;


/// The namespace used when a key is parsed without one.
pub const DEFAULT_NAMESPACE: &str = "minecraft";

/// A namespaced identifier, such as `minecraft:stone`. Blocks, tags and
/// anything else that is looked up by name is keyed with one of these.
///
/// The string form (see the [`Display`](fmt::Display) impl) is always
/// `namespace:path`, even if the key was parsed from a bare path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Key {
  namespace: String,
  path:      String,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum KeyError {
  #[error("key `{0}` is empty")]
  Empty(String),
  #[error("key `{0}` has more than one `:`")]
  TooManySeparators(String),
  #[error("invalid character `{ch}` in namespace of key `{key}`")]
  InvalidNamespace { key: String, ch: char },
  #[error("invalid character `{ch}` in path of key `{key}`")]
  InvalidPath { key: String, ch: char },
}

fn valid_namespace_char(c: char) -> bool {
  matches!(c, 'a'..='z' | '0'..='9' | '_' | '.' | '-')
}
fn valid_path_char(c: char) -> bool { valid_namespace_char(c) || c == '/' }

impl Key {
  /// Creates a new key, validating both halves.
  pub fn new(namespace: &str, path: &str) -> Result<Key, KeyError> {
    let full = || format!("{namespace}:{path}");
    if namespace.is_empty() || path.is_empty() {
      return Err(KeyError::Empty(full()));
    }
    if let Some(ch) = namespace.chars().find(|&c| !valid_namespace_char(c)) {
      return Err(KeyError::InvalidNamespace { key: full(), ch });
    }
    if let Some(ch) = path.chars().find(|&c| !valid_path_char(c)) {
      return Err(KeyError::InvalidPath { key: full(), ch });
    }
    Ok(Key { namespace: namespace.into(), path: path.into() })
  }

  /// Creates a key in the `minecraft` namespace. The path is only validated in
  /// debug builds, so this should only be used with paths that are known to be
  /// valid. Use [`Key::new`] or parse the key for anything else.
  pub fn minecraft(path: impl Into<String>) -> Key {
    let path = path.into();
    debug_assert!(
      !path.is_empty() && path.chars().all(valid_path_char),
      "invalid path `{path}` for a minecraft key"
    );
    Key { namespace: DEFAULT_NAMESPACE.into(), path }
  }

  pub fn namespace(&self) -> &str { &self.namespace }
  pub fn path(&self) -> &str { &self.path }
}

impl FromStr for Key {
  type Err = KeyError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let mut sections = s.split(':');
    match (sections.next(), sections.next(), sections.next()) {
      (Some(path), None, None) => Key::new(DEFAULT_NAMESPACE, path),
      (Some(namespace), Some(path), None) => Key::new(namespace, path),
      _ => Err(KeyError::TooManySeparators(s.into())),
    }
  }
}

impl fmt::Display for Key {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "{}:{}", self.namespace, self.path)
  }
}

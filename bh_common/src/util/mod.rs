use std::{fmt, str::FromStr};
use thiserror::Error;


/// A face of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Face {
  #[default]
  Bottom,
  Top,
  North,
  South,
  West,
  East,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid face `{0}`")]
pub struct InvalidFace(String);

impl Face {
  pub fn all() -> [Face; 6] {
    [Face::Bottom, Face::Top, Face::North, Face::South, Face::West, Face::East]
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Bottom => "down",
      Self::Top => "up",
      Self::North => "north",
      Self::South => "south",
      Self::West => "west",
      Self::East => "east",
    }
  }

  /// Returns the axis this face is perpendicular to. This is the same string
  /// used in the `axis` property of logs.
  pub fn axis(&self) -> &'static str {
    match self {
      Self::West | Self::East => "x",
      Self::Top | Self::Bottom => "y",
      Self::North | Self::South => "z",
    }
  }

  pub fn opposite(&self) -> Face {
    match self {
      Self::Bottom => Self::Top,
      Self::Top => Self::Bottom,
      Self::North => Self::South,
      Self::South => Self::North,
      Self::West => Self::East,
      Self::East => Self::West,
    }
  }

  pub fn is_horizontal(&self) -> bool { !matches!(self, Self::Top | Self::Bottom) }
}

impl FromStr for Face {
  type Err = InvalidFace;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Ok(match s {
      "down" | "bottom" => Self::Bottom,
      "up" | "top" => Self::Top,
      "north" => Self::North,
      "south" => Self::South,
      "west" => Self::West,
      "east" => Self::East,
      _ => return Err(InvalidFace(s.into())),
    })
  }
}

impl fmt::Display for Face {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { f.write_str(self.as_str()) }
}

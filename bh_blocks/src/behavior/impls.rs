use super::{EventFlow, Handler, HandlerError, Update};
use crate::block::{BlockClick, State};
use bh_common::{util::Face, Key};
use std::sync::Arc;

fn air() -> Key { Key::minecraft("air") }

/// Checks that the block's path ends with `suffix`, and returns the rest of
/// the path.
fn strip_suffix<'a>(
  handler: &'static str,
  block: &'a Key,
  suffix: &str,
) -> Result<&'a str, HandlerError> {
  block
    .path()
    .strip_suffix(suffix)
    .filter(|rest| !rest.is_empty())
    .ok_or_else(|| HandlerError::UnsupportedBlock { handler, block: block.clone() })
}

fn toggle_open(state: &mut State) {
  let open = !state.bool_prop("open");
  state.set("open", open.to_string());
}

/// Logs, and anything else with an `axis` property.
pub struct Pillar;
impl Pillar {
  pub fn create(_: &Key) -> Result<Arc<dyn Handler>, HandlerError> { Ok(Arc::new(Pillar)) }
}
impl Handler for Pillar {
  fn name(&self) -> &str { "pillar" }
  fn place(&self, state: State, click: &BlockClick) -> State {
    state.with("axis", click.face.axis())
  }
}

/// Sand, gravel, and other blocks that fall when nothing is below them.
pub struct Falling;
impl Falling {
  pub fn create(_: &Key) -> Result<Arc<dyn Handler>, HandlerError> { Ok(Arc::new(Falling)) }
}
impl Handler for Falling {
  fn name(&self) -> &str { "falling" }
  fn neighbor_update(&self, _: &State, face: Face, neighbor: &Key) -> Update {
    if face == Face::Bottom && *neighbor == air() {
      Update::Fall
    } else {
      Update::Keep
    }
  }
}

pub struct CraftingTable;
impl CraftingTable {
  pub fn create(_: &Key) -> Result<Arc<dyn Handler>, HandlerError> {
    Ok(Arc::new(CraftingTable))
  }
}
impl Handler for CraftingTable {
  fn name(&self) -> &str { "crafting_table" }
  fn interact(&self, _: &mut State) -> EventFlow { EventFlow::Handled }
}

pub struct Trapdoor {
  /// Iron trapdoors can only be opened with redstone.
  iron: bool,
}
impl Trapdoor {
  pub fn create(block: &Key) -> Result<Arc<dyn Handler>, HandlerError> {
    let material = strip_suffix("trapdoor", block, "_trapdoor")?;
    Ok(Arc::new(Trapdoor { iron: material == "iron" }))
  }
}
impl Handler for Trapdoor {
  fn name(&self) -> &str { "trapdoor" }
  fn place(&self, state: State, click: &BlockClick) -> State {
    let top = click.face == Face::Bottom || (click.face.is_horizontal() && click.cursor_y > 0.5);
    state
      .with("half", if top { "top" } else { "bottom" })
      .with("facing", click.dir.as_str())
      .with("open", "false")
  }
  fn interact(&self, state: &mut State) -> EventFlow {
    if self.iron {
      return EventFlow::Continue;
    }
    toggle_open(state);
    EventFlow::Handled
  }
}

pub struct Door {
  iron: bool,
}
impl Door {
  pub fn create(block: &Key) -> Result<Arc<dyn Handler>, HandlerError> {
    let material = strip_suffix("door", block, "_door")?;
    Ok(Arc::new(Door { iron: material == "iron" }))
  }
}
impl Handler for Door {
  fn name(&self) -> &str { "door" }
  fn place(&self, state: State, click: &BlockClick) -> State {
    state.with("half", "lower").with("facing", click.dir.as_str()).with("open", "false")
  }
  fn interact(&self, state: &mut State) -> EventFlow {
    if self.iron {
      return EventFlow::Continue;
    }
    toggle_open(state);
    EventFlow::Handled
  }
  fn neighbor_update(&self, state: &State, face: Face, neighbor: &Key) -> Update {
    let other_half = match state.prop("half") {
      Some("upper") => Face::Bottom,
      _ => Face::Top,
    };
    if face == other_half && neighbor != state.block() {
      Update::Break
    } else {
      Update::Keep
    }
  }
}

pub struct Bed;
impl Bed {
  pub fn create(block: &Key) -> Result<Arc<dyn Handler>, HandlerError> {
    strip_suffix("bed", block, "_bed")?;
    Ok(Arc::new(Bed))
  }

  /// Returns the face of this half which the other half is on.
  fn other_half(&self, state: &State) -> Face {
    let facing = state.prop("facing").and_then(|f| f.parse().ok()).unwrap_or(Face::North);
    if state.prop("part") == Some("head") {
      facing.opposite()
    } else {
      facing
    }
  }
}
impl Handler for Bed {
  fn name(&self) -> &str { "bed" }
  fn place(&self, state: State, click: &BlockClick) -> State {
    state.with("part", "foot").with("facing", click.dir.as_str())
  }
  fn neighbor_update(&self, state: &State, face: Face, neighbor: &Key) -> Update {
    if face == self.other_half(state) && neighbor != state.block() {
      Update::Break
    } else {
      Update::Keep
    }
  }
}

pub struct Slab;
impl Slab {
  pub fn create(block: &Key) -> Result<Arc<dyn Handler>, HandlerError> {
    strip_suffix("slab", block, "_slab")?;
    Ok(Arc::new(Slab))
  }
}
impl Handler for Slab {
  fn name(&self) -> &str { "slab" }
  fn place(&self, state: State, click: &BlockClick) -> State {
    let top = click.face == Face::Bottom || (click.face.is_horizontal() && click.cursor_y > 0.5);
    state.with("type", if top { "top" } else { "bottom" })
  }
}

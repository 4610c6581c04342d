use super::*;
use crate::group::Catalog;
use pretty_assertions::assert_eq;

fn click(face: Face, dir: Face, cursor_y: f64) -> BlockClick { BlockClick { face, dir, cursor_y } }

#[test]
fn pillar_axis() {
  let handler = Pillar::create(&Key::minecraft("oak_log")).unwrap();
  let state = State::new(Key::minecraft("oak_log"));
  assert_eq!(handler.place(state.clone(), &click(Face::East, Face::North, 0.5)).prop("axis"), Some("x"));
  assert_eq!(handler.place(state.clone(), &click(Face::Top, Face::North, 0.5)).prop("axis"), Some("y"));
  assert_eq!(handler.place(state, &click(Face::South, Face::North, 0.5)).prop("axis"), Some("z"));
}

#[test]
fn falling_only_below_air() {
  let handler = Falling::create(&Key::minecraft("sand")).unwrap();
  let state = State::new(Key::minecraft("sand"));
  assert_eq!(handler.neighbor_update(&state, Face::Bottom, &Key::minecraft("air")), Update::Fall);
  assert_eq!(handler.neighbor_update(&state, Face::Bottom, &Key::minecraft("stone")), Update::Keep);
  assert_eq!(handler.neighbor_update(&state, Face::North, &Key::minecraft("air")), Update::Keep);
}

#[test]
fn trapdoors_toggle() {
  let oak = Trapdoor::create(&Key::minecraft("oak_trapdoor")).unwrap();
  let mut state =
    oak.place(State::new(Key::minecraft("oak_trapdoor")), &click(Face::West, Face::South, 0.75));
  assert_eq!(state.prop("half"), Some("top"));
  assert_eq!(state.prop("facing"), Some("south"));
  assert_eq!(oak.interact(&mut state), EventFlow::Handled);
  assert!(state.bool_prop("open"));
  assert_eq!(oak.interact(&mut state), EventFlow::Handled);
  assert!(!state.bool_prop("open"));

  let iron = Trapdoor::create(&Key::minecraft("iron_trapdoor")).unwrap();
  let mut state =
    iron.place(State::new(Key::minecraft("iron_trapdoor")), &click(Face::Top, Face::North, 1.0));
  assert_eq!(state.prop("half"), Some("bottom"));
  assert_eq!(iron.interact(&mut state), EventFlow::Continue);
  assert!(!state.bool_prop("open"));
}

#[test]
fn door_breaks_without_other_half() {
  let door = Door::create(&Key::minecraft("birch_door")).unwrap();
  let lower =
    door.place(State::new(Key::minecraft("birch_door")), &click(Face::Top, Face::East, 1.0));
  let upper = lower.clone().with("half", "upper");
  let air = Key::minecraft("air");
  assert_eq!(door.neighbor_update(&lower, Face::Top, &air), Update::Break);
  assert_eq!(door.neighbor_update(&lower, Face::Top, &Key::minecraft("birch_door")), Update::Keep);
  assert_eq!(door.neighbor_update(&lower, Face::Bottom, &air), Update::Keep);
  assert_eq!(door.neighbor_update(&upper, Face::Bottom, &air), Update::Break);
}

#[test]
fn bed_halves() {
  let bed = Bed::create(&Key::minecraft("red_bed")).unwrap();
  let foot = bed.place(State::new(Key::minecraft("red_bed")), &click(Face::Top, Face::North, 1.0));
  let head = foot.clone().with("part", "head");
  let air = Key::minecraft("air");
  assert_eq!(bed.neighbor_update(&foot, Face::North, &air), Update::Break);
  assert_eq!(bed.neighbor_update(&foot, Face::South, &air), Update::Keep);
  assert_eq!(bed.neighbor_update(&head, Face::South, &air), Update::Break);
}

#[test]
fn unsupported_blocks() {
  assert_eq!(
    Bed::create(&Key::minecraft("stone")).err(),
    Some(HandlerError::UnsupportedBlock { handler: "bed", block: Key::minecraft("stone") })
  );
  assert!(Door::create(&Key::minecraft("_door")).is_err());
  assert!(Slab::create(&Key::minecraft("oak_planks")).is_err());
}

#[test]
fn slab_half() {
  let slab = Slab::create(&Key::minecraft("stone_slab")).unwrap();
  let state = State::new(Key::minecraft("stone_slab"));
  assert_eq!(slab.place(state.clone(), &click(Face::Top, Face::North, 1.0)).prop("type"), Some("bottom"));
  assert_eq!(slab.place(state.clone(), &click(Face::Bottom, Face::North, 0.0)).prop("type"), Some("top"));
  assert_eq!(slab.place(state, &click(Face::North, Face::North, 0.25)).prop("type"), Some("bottom"));
}

#[test]
fn every_vanilla_group_matches() {
  let catalog = Catalog::vanilla();
  for group in vanilla::all() {
    let blocks = group.matched_blocks(&catalog).unwrap();
    assert!(!blocks.is_empty(), "group {} matched no blocks", group.name());
    for block in blocks {
      assert!(group.create_handler(&block).is_ok(), "group {} failed on {block}", group.name());
    }
  }
}

#[test]
fn select_vanilla_groups() {
  let names = |groups: Vec<VanillaGroup>| -> Vec<String> {
    groups.iter().map(|g| g.name().to_string()).collect()
  };
  assert_eq!(names(vanilla::select(&[]).unwrap()), names(vanilla::all()));
  assert_eq!(
    names(vanilla::select(&["slabs".into(), "doors".into()]).unwrap()),
    vec!["doors", "slabs"]
  );
  assert_eq!(
    vanilla::select(&["doors".into(), "chairs".into()]).err(),
    Some(vanilla::UnknownGroup("chairs".into()))
  );
}

use super::*;
use pretty_assertions::assert_eq;

#[test]
fn vanilla_list() {
  let blocks = BlockList::vanilla();
  assert!(blocks.contains(&Key::minecraft("stone")));
  assert!(blocks.contains(&Key::minecraft("stripped_dark_oak_wood")));
  assert!(blocks.contains(&Key::minecraft("light_blue_bed")));
  assert!(!blocks.contains(&Key::minecraft("diamond_sword")));
  assert_eq!(blocks.iter().next(), Some(&Key::minecraft("air")));
  assert_eq!(
    blocks.len(),
    data::MISC.len()
      + data::WOODS.len() * data::WOOD_FAMILY.len()
      + data::COLORS.len() * data::COLOR_FAMILY.len()
  );
}

#[test]
fn duplicates_keep_first_position() {
  let mut blocks =
    BlockList::new(["stone", "dirt", "stone"].into_iter().map(Key::minecraft));
  assert_eq!(blocks.len(), 2);
  assert!(!blocks.insert(Key::minecraft("dirt")));
  assert!(blocks.insert(Key::minecraft("sand")));
  assert_eq!(
    blocks.iter().map(|k| k.path()).collect::<Vec<_>>(),
    vec!["stone", "dirt", "sand"]
  );
}

#[test]
fn state_props() {
  let mut state = State::new(Key::minecraft("oak_trapdoor")).with("half", "top").with("open", "false");
  assert_eq!(state.prop("half"), Some("top"));
  assert!(!state.bool_prop("open"));
  state.set("open", "true");
  assert!(state.bool_prop("open"));
  assert_eq!(state.prop("facing"), None);
  assert_eq!(state.props().collect::<Vec<_>>(), vec![("half", "top"), ("open", "true")]);
}

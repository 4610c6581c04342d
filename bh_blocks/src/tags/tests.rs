use super::*;
use pretty_assertions::assert_eq;

fn keys(paths: &[&str]) -> Vec<Key> { paths.iter().map(|p| Key::minecraft(*p)).collect() }

#[test]
fn expand_simple() {
  let tags = Tags::vanilla();
  assert_eq!(
    tags.expand(&Key::minecraft("oak_logs")).unwrap(),
    keys(&["oak_log", "oak_wood", "stripped_oak_log", "stripped_oak_wood"])
  );
}

#[test]
fn expand_nested() {
  let tags = Tags::vanilla();
  let trapdoors = tags.expand(&Key::minecraft("trapdoors")).unwrap();
  assert_eq!(trapdoors.len(), data::WOODS.len() + 1);
  assert_eq!(trapdoors.first(), Some(&Key::minecraft("oak_trapdoor")));
  assert_eq!(trapdoors.last(), Some(&Key::minecraft("iron_trapdoor")));

  let logs = tags.expand(&Key::minecraft("logs")).unwrap();
  assert_eq!(logs.len(), data::WOODS.len() * 4);
}

#[test]
fn expand_dedups() {
  let mut tags = Tags::new();
  tags.add(Key::minecraft("a"), ["minecraft:stone", "minecraft:dirt"]);
  tags.add(Key::minecraft("b"), ["minecraft:dirt", "#minecraft:a", "minecraft:sand"]);
  assert_eq!(tags.expand(&Key::minecraft("b")).unwrap(), keys(&["dirt", "stone", "sand"]));
}

#[test]
fn expand_errors() {
  let mut tags = Tags::new();
  tags.add(Key::minecraft("loop_a"), ["#minecraft:loop_b"]);
  tags.add(Key::minecraft("loop_b"), ["#minecraft:loop_a"]);
  tags.add(Key::minecraft("missing"), ["#minecraft:nothing"]);
  tags.add(Key::minecraft("bad"), ["minecraft:Stone"]);

  assert_eq!(
    tags.expand(&Key::minecraft("loop_a")),
    Err(TagError::Cycle(Key::minecraft("loop_a")))
  );
  assert_eq!(
    tags.expand(&Key::minecraft("missing")),
    Err(TagError::Unknown(Key::minecraft("nothing")))
  );
  assert!(matches!(
    tags.expand(&Key::minecraft("bad")),
    Err(TagError::InvalidEntry { entry, .. }) if entry == "minecraft:Stone"
  ));
}

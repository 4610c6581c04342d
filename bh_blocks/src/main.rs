#[macro_use]
extern crate log;

use bh_blocks::{
  behavior::{vanilla, BehaviorGroup},
  group::Catalog,
  manager::BlockManager,
  registrations::Registrations,
};
use bh_common::config::Config;
use clap::Parser;
use log::LevelFilter;
use std::{process, sync::Arc};

#[derive(Parser, Debug)]
#[clap(about, version, author)]
struct Args {
  /// The path to the config file. If it doesn't exist, the defaults are used.
  #[clap(long, default_value = "server.toml")]
  config: String,
  /// If set, every registered handler will be printed.
  #[clap(long)]
  list:   bool,
}

fn main() {
  let args = Args::parse();
  let config =
    Arc::new(Config::new(&args.config, "server-default.toml", include_str!("default.toml")));

  let level: LevelFilter = config.get("log-level");
  if let Err(e) = bh_common::init_with_level("blocks", level) {
    eprintln!("could not initialize logger: {e}");
  }

  let blocks = config.section("blocks");
  let names: Vec<String> = blocks.get("groups");
  let groups = match vanilla::select(&names) {
    Ok(groups) => groups,
    Err(e) => {
      error!("invalid config: {e}");
      process::exit(1);
    }
  };

  let catalog = Catalog::vanilla();
  info!("loaded {} blocks", catalog.blocks.len());

  let manager = BlockManager::new();
  let registrations = Registrations::new(&catalog, &manager);
  let res = if names.is_empty() {
    registrations.register_default()
  } else {
    registrations.register(groups.iter().map(|g| g as &dyn BehaviorGroup))
  };
  if let Err(e) = res {
    error!("could not register block handlers: {e}");
    process::exit(1);
  }
  if blocks.get("freeze") {
    manager.freeze();
  }

  if args.list || blocks.get::<_, bool>("list") {
    for key in manager.keys() {
      if let Some(handler) = manager.handler(&key) {
        info!("{key} -> {}", handler.name());
      }
    }
  }
}

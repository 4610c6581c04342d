#[macro_use]
extern crate log;

#[cfg(feature = "host")]
use log::LevelFilter;

pub mod config;
pub mod key;
pub mod util;

pub use key::{Key, KeyError};

/// Installs a logger which writes to stdout. Every line is prefixed with a
/// timestamp, and the level is colored. In debug builds, the module path and
/// line number of the log call is also printed.
///
/// This fails if another logger has already been installed.
#[cfg(feature = "host")]
pub fn init_with_level(name: &str, level: LevelFilter) -> Result<(), log::SetLoggerError> {
  use log::{Metadata, Record};

  struct Logger {
    name: String,
  }

  impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool { metadata.level() <= log::max_level() }

    fn log(&self, record: &Record) {
      if self.enabled(record.metadata()) {
        #[cfg(feature = "utclogs")]
        let now = chrono::Utc::now();
        #[cfg(not(feature = "utclogs"))]
        let now = chrono::Local::now();
        print!("{} {} ", now.format("%Y-%m-%d %H:%M:%S%.3f"), self.name);
        #[cfg(debug_assertions)]
        {
          if let Some(path) = record.module_path() {
            print!("{path}");
          }
          if let Some(line) = record.line() {
            print!(":{line}");
          }
          print!(" ");
        }
        print!("{}", level_tag(record.level()));
        println!(" {}", record.args());
      }
    }

    fn flush(&self) {}
  }

  log::set_boxed_logger(Box::new(Logger { name: name.into() }))
    .map(|()| log::set_max_level(level))?;
  debug!("logger initialized at level {level}");
  Ok(())
}

#[cfg(feature = "host")]
fn level_tag(level: log::Level) -> &'static str {
  use log::Level;
  match level {
    Level::Trace => "[\x1b[36mTRACE\x1b[0m]",
    Level::Debug => "[\x1b[34mDEBUG\x1b[0m]",
    Level::Info => "[\x1b[32mINFO\x1b[0m]",
    Level::Warn => "[\x1b[33mWARN\x1b[0m]",
    Level::Error => "[\x1b[31m\x1b[1mERROR\x1b[0m]",
  }
}

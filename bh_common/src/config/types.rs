use super::TomlValue;
use log::LevelFilter;
use std::str::FromStr;
use toml::Value;

impl TomlValue<'_> for bool {
  fn from_toml(v: &Value) -> Option<Self> { v.as_bool() }

  fn name() -> String { "bool".into() }
}
impl TomlValue<'_> for LevelFilter {
  fn from_toml(v: &Value) -> Option<Self> { LevelFilter::from_str(v.as_str()?).ok() }
  fn name() -> String { "log level filter".into() }
}

impl<'a, T> TomlValue<'a> for Vec<T>
where
  T: TomlValue<'a>,
{
  fn from_toml(v: &'a Value) -> Option<Self> {
    v.as_array().and_then(|v| v.iter().map(|v| T::from_toml(v)).collect::<Option<Vec<T>>>())
  }

  fn name() -> String { format!("array of {}", T::name()) }
}

impl TomlValue<'_> for String {
  fn from_toml(v: &Value) -> Option<Self> { v.as_str().map(|v| v.into()) }

  fn name() -> String { "string".into() }
}

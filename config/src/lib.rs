// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
mod config;
mod store;

pub use crate::{
  config::{resolve_path, NecoConfig},
  store::ConfigStore,
};

pub mod constants {
  use std::time::Duration;
  pub const CONF_NAME: &str = "neco_conf.json";
  pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);
}

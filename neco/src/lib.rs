// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
pub mod log;
pub mod notifier;

pub use crate::{
  log::{log, timestamp},
  notifier::{Notifier, NotifierBuilder, Outcome, SendBuilder},
};
pub use config::{ConfigStore, NecoConfig};
pub use error::{ConfigError, DeliveryError, Error};

pub mod constants {
  pub const DEFAULT_SUFFIX: &str = "\nnya";
  pub const DEFAULT_LOG_TEXT: &str = "done nya";
  pub(crate) const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
}

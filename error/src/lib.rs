// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use std::{path::PathBuf, time::Duration};
use thiserror::Error as ThisError;

/// Ошибки получения учётных данных. Всегда возвращаются вызывающему коду.
#[derive(ThisError, Debug)]
pub enum ConfigError {
  #[error("Config not found: {}", .0.display())]
  NotFound(PathBuf),
  #[error("Failed to parse config {}: {source}", .path.display())]
  Parse {
    path: PathBuf,
    #[source]
    source: serde_json::Error,
  },
  #[error("IO error on {}: {source}", .path.display())]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },
  #[error("Failed to serialize config: {0}")]
  Serialize(#[from] serde_json::Error),
}

/// Ошибки отправки. В тихом режиме отбрасываются.
#[derive(ThisError, Debug)]
pub enum DeliveryError {
  #[error("HTTP error: {0}")]
  Http(#[from] reqwest::Error),
  #[error("Request timed out after {0:?}")]
  Timeout(Duration),
  #[error("Invalid endpoint: {0}")]
  InvalidEndpoint(String),
}

#[derive(ThisError, Debug)]
pub enum Error {
  #[error(transparent)]
  Config(#[from] ConfigError),
  #[error(transparent)]
  Delivery(#[from] DeliveryError),
}

impl Error {
  pub fn is_config(&self) -> bool {
    matches!(self, Error::Config(_))
  }

  pub fn is_delivery(&self) -> bool {
    matches!(self, Error::Delivery(_))
  }
}

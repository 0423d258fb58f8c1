// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::constants::{CONF_NAME, DEFAULT_TIMEOUT};
use error::ConfigError;
use serde::{Deserialize, Serialize};
use std::{
  env, fs,
  io::{self, Write},
  path::{Path, PathBuf},
  time::Duration,
};
use tempfile::NamedTempFile;
use tracing::{debug, instrument};

/// Путь к файлу конфигурации.
///
/// Без явного пути берётся `neco_conf.json` в текущем рабочем каталоге,
/// вычисленном в момент вызова, а не при старте процесса.
pub fn resolve_path(path: Option<&Path>) -> PathBuf {
  match path {
    Some(path) => path.to_path_buf(),
    None => env::current_dir()
      .map(|cwd| cwd.join(CONF_NAME))
      .unwrap_or_else(|_| PathBuf::from(CONF_NAME)),
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NecoConfig {
  #[serde(deserialize_with = "lenient::string")]
  pub token: String,
  #[serde(deserialize_with = "lenient::string")]
  pub chat_id: String,
  #[serde(default = "default_timeout", with = "lenient::seconds")]
  pub timeout: Duration,
}

fn default_timeout() -> Duration {
  DEFAULT_TIMEOUT
}

impl NecoConfig {
  pub fn new(token: impl Into<String>, chat_id: impl Into<String>) -> Self {
    Self {
      token: token.into(),
      chat_id: chat_id.into(),
      timeout: DEFAULT_TIMEOUT,
    }
  }

  pub fn with_timeout(mut self, timeout: Duration) -> Self {
    self.timeout = timeout;
    self
  }

  #[instrument]
  pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
    let path = resolve_path(path);
    let content = match fs::read_to_string(&path) {
      Ok(content) => content,
      Err(e) if e.kind() == io::ErrorKind::NotFound => return Err(ConfigError::NotFound(path)),
      Err(source) => return Err(ConfigError::Io { path, source }),
    };

    let config = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
      path: path.clone(),
      source,
    })?;
    debug!("Loaded configuration from {}", path.display());
    Ok(config)
  }

  /// Полностью перезаписывает файл: сначала во временный файл рядом, затем переименование.
  #[instrument(skip(self))]
  pub fn save(&self, path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    let path = resolve_path(path);
    let content = serde_json::to_string_pretty(self)?;

    let dir = match path.parent() {
      Some(parent) if !parent.as_os_str().is_empty() => parent,
      _ => Path::new("."),
    };
    let io_error = |source: io::Error| ConfigError::Io {
      path: path.clone(),
      source,
    };

    let mut file = NamedTempFile::new_in(dir).map_err(io_error)?;
    file.write_all(content.as_bytes()).map_err(io_error)?;
    file.persist(&path).map_err(|e| io_error(e.error))?;

    debug!("Saved configuration to {}", path.display());
    Ok(path)
  }
}

mod lenient {
  use serde::{de::Error as _, Deserialize, Deserializer};
  use serde_json::Value;

  // chat_id часто хранится числом
  pub fn string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    match Value::deserialize(deserializer)? {
      Value::String(s) => Ok(s),
      Value::Number(n) => Ok(n.to_string()),
      other => Err(D::Error::custom(format!(
        "expected a string or a number, found {}",
        other
      ))),
    }
  }

  pub mod seconds {
    use serde::{de::Error as _, Deserialize, Deserializer, Serializer};
    use serde_json::Value;
    use std::time::Duration;

    pub fn serialize<S: Serializer>(timeout: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
      serializer.serialize_f64(timeout.as_secs_f64())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
      let secs = match Value::deserialize(deserializer)? {
        Value::Number(n) => n
          .as_f64()
          .ok_or_else(|| D::Error::custom(format!("invalid timeout: {}", n)))?,
        Value::String(s) => s
          .trim()
          .parse::<f64>()
          .map_err(|_| D::Error::custom(format!("timeout is not numeric: {:?}", s)))?,
        other => {
          return Err(D::Error::custom(format!(
            "expected a numeric timeout, found {}",
            other
          )))
        }
      };
      Duration::try_from_secs_f64(secs).map_err(D::Error::custom)
    }
  }
}

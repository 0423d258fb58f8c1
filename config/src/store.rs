// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::config::NecoConfig;
use error::ConfigError;
use std::path::Path;
use tracing::{debug, instrument};

/// Хранит последние заданные или загруженные учётные данные.
///
/// Владеет им вызывающий код; состояние заменяется целиком и никогда не сливается.
#[derive(Debug, Clone, Default)]
pub struct ConfigStore {
  current: Option<NecoConfig>,
}

impl ConfigStore {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn current(&self) -> Option<&NecoConfig> {
    self.current.as_ref()
  }

  /// Состояние в памяти заменяется, даже если сохранение затем не удалось.
  #[instrument(skip(self, config))]
  pub fn configure(
    &mut self,
    config: NecoConfig,
    save: bool,
    path: Option<&Path>,
  ) -> Result<NecoConfig, ConfigError> {
    self.current = Some(config.clone());
    if save {
      config.save(path)?;
    }
    Ok(config)
  }

  #[instrument(skip(self))]
  pub fn get_or_load(&mut self, path: Option<&Path>) -> Result<&NecoConfig, ConfigError> {
    let config = match self.current.take() {
      Some(config) => config,
      None => {
        debug!("No credentials cached, loading from disk");
        NecoConfig::load(path)?
      }
    };
    Ok(&*self.current.insert(config))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::{fs, time::Duration};
  use tempfile::tempdir;

  #[test]
  fn get_or_load_caches_the_first_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("neco_conf.json");
    NecoConfig::new("T", "C").save(Some(&path)).unwrap();

    let mut store = ConfigStore::new();
    assert!(store.current().is_none());
    assert_eq!(store.get_or_load(Some(&path)).unwrap().token, "T");

    fs::remove_file(&path).unwrap();
    assert_eq!(store.get_or_load(Some(&path)).unwrap().chat_id, "C");
  }

  #[test]
  fn get_or_load_propagates_not_found_and_stays_empty() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("neco_conf.json");

    let mut store = ConfigStore::new();
    assert!(matches!(
      store.get_or_load(Some(&path)),
      Err(ConfigError::NotFound(_))
    ));
    assert!(store.current().is_none());
  }

  #[test]
  fn configure_replaces_cached_state() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("neco_conf.json");
    NecoConfig::new("file", "file").save(Some(&path)).unwrap();

    let mut store = ConfigStore::new();
    store.get_or_load(Some(&path)).unwrap();
    store
      .configure(NecoConfig::new("T", "C"), false, None)
      .unwrap();

    assert_eq!(store.current(), Some(&NecoConfig::new("T", "C")));
    assert_eq!(store.get_or_load(Some(&path)).unwrap().token, "T");
    assert_eq!(NecoConfig::load(Some(&path)).unwrap().token, "file");
  }

  #[test]
  fn configure_with_save_round_trips() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("saved.json");

    let mut store = ConfigStore::new();
    let config = store
      .configure(
        NecoConfig::new("T", "C").with_timeout(Duration::from_secs(9)),
        true,
        Some(&path),
      )
      .unwrap();

    assert_eq!(NecoConfig::load(Some(&path)).unwrap(), config);
  }

  #[test]
  fn configure_keeps_state_when_save_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing").join("neco_conf.json");

    let mut store = ConfigStore::new();
    let err = store
      .configure(NecoConfig::new("T", "C"), true, Some(&path))
      .unwrap_err();

    assert!(matches!(err, ConfigError::Io { .. }));
    assert_eq!(store.current().map(|c| c.token.as_str()), Some("T"));
  }
}

// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{constants::DEFAULT_SUFFIX, log::log_to};
use config::{constants::DEFAULT_TIMEOUT, ConfigStore, NecoConfig};
use error::{ConfigError, Error};
use std::{
  io::{self, Write},
  path::Path,
  time::Duration,
};
use telegram::{MessageSender, SendMessage, TelegramClient};
use tracing::{debug, instrument, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
  Sent,
  /// Отправка не удалась, ошибка проглочена в тихом режиме.
  Dropped,
}

pub struct Notifier {
  store: ConfigStore,
  sender: Box<dyn MessageSender>,
}

#[derive(Default)]
pub struct NotifierBuilder {
  store: ConfigStore,
  sender: Option<Box<dyn MessageSender>>,
  api_base: Option<String>,
}

impl NotifierBuilder {
  pub fn store(mut self, store: ConfigStore) -> Self {
    self.store = store;
    self
  }

  pub fn sender(mut self, sender: impl MessageSender + 'static) -> Self {
    self.sender = Some(Box::new(sender));
    self
  }

  pub fn api_base(mut self, api_base: impl Into<String>) -> Self {
    self.api_base = Some(api_base.into());
    self
  }

  pub fn build(self) -> Result<Notifier, Error> {
    let sender: Box<dyn MessageSender> = match self.sender {
      Some(sender) => sender,
      None => {
        let mut builder = TelegramClient::builder();
        if let Some(api_base) = self.api_base {
          builder = builder.api_base(api_base);
        }
        Box::new(builder.build()?)
      }
    };

    Ok(Notifier {
      store: self.store,
      sender,
    })
  }
}

impl Notifier {
  pub fn new() -> Result<Self, Error> {
    Self::builder().build()
  }

  pub fn builder() -> NotifierBuilder {
    NotifierBuilder::default()
  }

  pub fn store(&self) -> &ConfigStore {
    &self.store
  }

  pub fn configure(
    &mut self,
    token: impl Into<String>,
    chat_id: impl Into<String>,
    timeout: Duration,
    save: bool,
    path: Option<&Path>,
  ) -> Result<NecoConfig, ConfigError> {
    self
      .store
      .configure(NecoConfig::new(token, chat_id).with_timeout(timeout), save, path)
  }

  pub fn message<'a>(&self, text: &'a str) -> SendBuilder<'a> {
    SendBuilder::new(text)
  }

  /// Печатает время и текст, затем отправляет `"<время>\n<текст>"` без суффикса.
  pub async fn log_tg(
    &mut self,
    text: &str,
    tz_offset_hours: i32,
    config_path: Option<&Path>,
    silent: bool,
  ) -> Result<Outcome, Error> {
    let mut stdout = io::stdout();
    self
      .log_tg_to(&mut stdout, text, tz_offset_hours, config_path, silent)
      .await
  }

  pub(crate) async fn log_tg_to<W: Write>(
    &mut self,
    out: &mut W,
    text: &str,
    tz_offset_hours: i32,
    config_path: Option<&Path>,
    silent: bool,
  ) -> Result<Outcome, Error> {
    let ts = log_to(out, text, tz_offset_hours);
    let body = format!("{}\n{}", ts, text);

    let mut request = self.message(&body).suffix("").silent(silent);
    if let Some(path) = config_path {
      request = request.config_path(path);
    }
    request.send(self).await
  }

  #[instrument(skip(self, request), fields(silent = request.silent))]
  async fn dispatch(&mut self, request: SendBuilder<'_>) -> Result<Outcome, Error> {
    let (token, chat_id, timeout) = match (request.token, request.chat_id) {
      (Some(token), Some(chat_id)) => {
        let timeout = request.timeout.unwrap_or(DEFAULT_TIMEOUT);
        if request.save_credentials {
          self.configure(token, chat_id, timeout, true, request.config_path)?;
        }
        (token.to_string(), chat_id.to_string(), timeout)
      }
      (token, chat_id) => {
        let config = self.store.get_or_load(request.config_path)?;
        debug!("Using stored credentials for missing fields");
        (
          token
            .filter(|t| !t.is_empty())
            .map_or_else(|| config.token.clone(), str::to_string),
          chat_id
            .filter(|c| !c.is_empty())
            .map_or_else(|| config.chat_id.clone(), str::to_string),
          request.timeout.unwrap_or(config.timeout),
        )
      }
    };

    let text = format!("{}{}", request.text, request.suffix);
    let message = SendMessage {
      chat_id: &chat_id,
      text: &text,
    };

    match self.sender.send_message(&token, message, timeout).await {
      Ok(()) => Ok(Outcome::Sent),
      Err(e) if request.silent => {
        warn!("Notification dropped: {}", e);
        Ok(Outcome::Dropped)
      }
      Err(e) => Err(e.into()),
    }
  }
}

pub struct SendBuilder<'a> {
  pub(crate) text: &'a str,
  pub(crate) token: Option<&'a str>,
  pub(crate) chat_id: Option<&'a str>,
  pub(crate) timeout: Option<Duration>,
  pub(crate) config_path: Option<&'a Path>,
  pub(crate) save_credentials: bool,
  pub(crate) suffix: &'a str,
  pub(crate) silent: bool,
}

impl<'a> SendBuilder<'a> {
  pub fn new(text: &'a str) -> Self {
    Self {
      text,
      token: None,
      chat_id: None,
      timeout: None,
      config_path: None,
      save_credentials: false,
      suffix: DEFAULT_SUFFIX,
      silent: true,
    }
  }

  pub fn token(mut self, token: &'a str) -> Self {
    self.token = Some(token);
    self
  }

  pub fn chat_id(mut self, chat_id: &'a str) -> Self {
    self.chat_id = Some(chat_id);
    self
  }

  pub fn timeout(mut self, timeout: Duration) -> Self {
    self.timeout = Some(timeout);
    self
  }

  pub fn config_path(mut self, path: &'a Path) -> Self {
    self.config_path = Some(path);
    self
  }

  /// Учитывается только если токен и chat id заданы явно.
  pub fn save_credentials(mut self) -> Self {
    self.save_credentials = true;
    self
  }

  pub fn suffix(mut self, suffix: &'a str) -> Self {
    self.suffix = suffix;
    self
  }

  pub fn silent(mut self, silent: bool) -> Self {
    self.silent = silent;
    self
  }

  pub async fn send(self, notifier: &mut Notifier) -> Result<Outcome, Error> {
    notifier.dispatch(self).await
  }
}

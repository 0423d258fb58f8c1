// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{client::TelegramClient, config::TelegramConfig};
use error::DeliveryError;
use url::Url;

#[derive(Default)]
pub struct TelegramClientBuilder {
  pub(crate) config: TelegramConfig,
}

impl TelegramClientBuilder {
  pub fn api_base(mut self, api_base: impl Into<String>) -> Self {
    self.config.api_base = api_base.into();
    self
  }

  pub fn build(self) -> Result<TelegramClient, DeliveryError> {
    Url::parse(&self.config.api_base).map_err(|e| {
      DeliveryError::InvalidEndpoint(format!("{}: {}", self.config.api_base, e))
    })?;

    let client = reqwest::Client::builder()
      .build()
      .map_err(DeliveryError::Http)?;

    Ok(TelegramClient {
      config: self.config,
      client,
    })
  }
}

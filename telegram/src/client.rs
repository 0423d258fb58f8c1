// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{builders::TelegramClientBuilder, config::TelegramConfig, types::SendMessage};
use async_trait::async_trait;
use error::DeliveryError;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, instrument, warn};
use url::Url;

#[async_trait]
pub trait MessageSender: Send + Sync {
  async fn send_message(
    &self,
    token: &str,
    message: SendMessage<'_>,
    timeout: Duration,
  ) -> Result<(), DeliveryError>;
}

#[derive(Clone)]
pub struct TelegramClient {
  pub(crate) config: TelegramConfig,
  pub(crate) client: Client,
}

impl TelegramClient {
  pub fn builder() -> TelegramClientBuilder {
    TelegramClientBuilder::default()
  }
}

#[async_trait]
impl MessageSender for TelegramClient {
  /// Один POST без повторов; тело ответа не разбирается.
  #[instrument(skip(self, token, message), fields(chat_id = message.chat_id))]
  async fn send_message(
    &self,
    token: &str,
    message: SendMessage<'_>,
    timeout: Duration,
  ) -> Result<(), DeliveryError> {
    let url = Url::parse(&self.config.endpoint(token, "sendMessage"))
      .map_err(|e| DeliveryError::InvalidEndpoint(e.to_string()))?;

    let response = self
      .client
      .post(url)
      .form(&message)
      .timeout(timeout)
      .send()
      .await
      .map_err(|e| {
        if e.is_timeout() {
          DeliveryError::Timeout(timeout)
        } else {
          DeliveryError::Http(e.without_url())
        }
      })?;

    let status = response.status();
    if status.is_success() {
      debug!("Message sent successfully");
    } else {
      warn!("Telegram responded with {}", status);
    }

    Ok(())
  }
}

// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
pub(crate) const TELEGRAM_API_BASE: &str = "https://api.telegram.org/bot";

#[derive(Clone, Debug)]
pub struct TelegramConfig {
  pub(crate) api_base: String,
}

impl Default for TelegramConfig {
  fn default() -> Self {
    Self {
      api_base: TELEGRAM_API_BASE.to_string(),
    }
  }
}

impl TelegramConfig {
  pub(crate) fn endpoint(&self, token: &str, method: &str) -> String {
    format!("{}{}/{}", self.api_base, token, method)
  }
}

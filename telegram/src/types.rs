// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use serde::Serialize;

/// Тело запроса `sendMessage`, отправляется как форма.
#[derive(Debug, Serialize, Clone, Copy, PartialEq)]
pub struct SendMessage<'a> {
  pub chat_id: &'a str,
  pub text: &'a str,
}

// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::constants::DATETIME_FORMAT;
use chrono::{DateTime, FixedOffset, Offset, Utc};
use std::io::{self, Write};
use tracing::{debug, warn};

/// Форматирует `now` в зоне UTC+`tz_offset_hours`.
///
/// Смещение вне диапазона ±23 ч заменяется на UTC.
pub fn timestamp(now: DateTime<Utc>, tz_offset_hours: i32) -> String {
  let offset = tz_offset_hours
    .checked_mul(3600)
    .and_then(FixedOffset::east_opt)
    .unwrap_or_else(|| {
      warn!("Invalid UTC offset {}h, using UTC", tz_offset_hours);
      Utc.fix()
    });

  now
    .with_timezone(&offset)
    .format(DATETIME_FORMAT)
    .to_string()
}

/// Печатает в stdout строку времени, затем `text`. Возвращает метку времени.
pub fn log(text: &str, tz_offset_hours: i32) -> String {
  log_to(&mut io::stdout().lock(), text, tz_offset_hours)
}

pub(crate) fn log_to<W: Write>(out: &mut W, text: &str, tz_offset_hours: i32) -> String {
  let ts = timestamp(Utc::now(), tz_offset_hours);
  if let Err(e) = writeln!(out, "{}\n{}", ts, text).and_then(|_| out.flush()) {
    debug!("Failed to write log line: {}", e);
  }
  ts
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::TimeZone;
  use regex::Regex;

  fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
  }

  #[test]
  fn timestamp_applies_offset() {
    let now = at(2024, 1, 31, 22, 30, 5);
    assert_eq!(timestamp(now, 0), "2024-01-31 22:30:05");
    assert_eq!(timestamp(now, 3), "2024-02-01 01:30:05");
    assert_eq!(timestamp(now, -5), "2024-01-31 17:30:05");
  }

  #[test]
  fn out_of_range_offset_falls_back_to_utc() {
    let now = at(2024, 6, 1, 12, 0, 0);
    assert_eq!(timestamp(now, 24), "2024-06-01 12:00:00");
    assert_eq!(timestamp(now, i32::MAX), "2024-06-01 12:00:00");
  }

  #[test]
  fn log_writes_exactly_two_lines() {
    let mut out = Vec::new();
    let ts = log_to(&mut out, "x", 3);

    let printed = String::from_utf8(out).unwrap();
    let re = Regex::new(r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}\nx\n$").unwrap();
    assert!(re.is_match(&printed), "{printed:?}");
    assert!(printed.starts_with(&ts));
  }

  #[test]
  fn log_reflects_requested_zone() {
    let before = Utc::now();
    let ts = log_to(&mut Vec::new(), "x", 3);
    let after = Utc::now();

    let candidates = [timestamp(before, 3), timestamp(after, 3)];
    assert!(candidates.contains(&ts), "{ts} not in {candidates:?}");
  }
}

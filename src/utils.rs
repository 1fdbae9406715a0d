pub(crate) fn format_rating(vote_average: Option<f64>) -> String {
  match vote_average {
    Some(average) if average > 0.0 => format!("★ {average:.1}"),
    _ => "unrated".to_string(),
  }
}

pub(crate) fn release_year(date: &str) -> Option<&str> {
  date
    .get(..4)
    .filter(|year| year.chars().all(|ch| ch.is_ascii_digit()))
}

pub(crate) fn truncate(text: &str, max_chars: usize) -> String {
  if text.chars().count() <= max_chars {
    return text.to_string();
  }

  let mut result = String::new();

  for (idx, ch) in text.chars().enumerate() {
    if idx >= max_chars {
      result.push_str("...");
      break;
    }

    result.push(ch);
  }

  result.trim_end().to_string()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn format_rating_rounds_to_one_decimal() {
    assert_eq!(format_rating(Some(8.234)), "★ 8.2");
  }

  #[test]
  fn format_rating_treats_zero_and_missing_as_unrated() {
    assert_eq!(format_rating(Some(0.0)), "unrated");
    assert_eq!(format_rating(None), "unrated");
  }

  #[test]
  fn release_year_takes_the_leading_digits() {
    assert_eq!(release_year("1999-03-30"), Some("1999"));
    assert_eq!(release_year("1999"), Some("1999"));
  }

  #[test]
  fn release_year_rejects_malformed_dates() {
    assert_eq!(release_year(""), None);
    assert_eq!(release_year("n/a"), None);
  }

  #[test]
  fn truncate_returns_original_when_within_limit() {
    assert_eq!(truncate("short", 10), "short");
  }

  #[test]
  fn truncate_appends_ellipsis_when_exceeding_limit() {
    assert_eq!(truncate("This is a longer line", 4), "This...");
  }
}

use super::*;

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Config {
  pub(crate) limit: i64,
  pub(crate) order_by: String,
  pub(crate) shorten: bool,
  pub(crate) target: Target,
  pub(crate) title_length: usize,
}

impl Config {
  pub(crate) const DEFAULT_LIMIT: i64 = 10;

  pub(crate) const DEFAULT_ORDER_BY: &str = "score";

  pub(crate) const DEFAULT_TITLE_LENGTH: usize = 60;

  /// Number of posts to show, with non-positive limits showing none.
  pub(crate) fn display_count(&self) -> usize {
    usize::try_from(self.limit).unwrap_or(0)
  }

  pub(crate) fn sorts_descending(&self) -> bool {
    self.order_by == "score"
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn config(limit: i64, order_by: &str) -> Config {
    Config {
      limit,
      order_by: order_by.into(),
      shorten: false,
      target: Target::Community("rust".into()),
      title_length: Config::DEFAULT_TITLE_LENGTH,
    }
  }

  #[test]
  fn display_count_clamps_non_positive_limits() {
    assert_eq!(config(10, "score").display_count(), 10);
    assert_eq!(config(0, "score").display_count(), 0);
    assert_eq!(config(-3, "score").display_count(), 0);
  }

  #[test]
  fn only_score_sorts_descending() {
    assert!(config(10, "score").sorts_descending());
    assert!(!config(10, "created_utc").sorts_descending());
    assert!(!config(10, "title").sorts_descending());
  }
}

use super::*;

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Post {
  pub(crate) score: i64,
  pub(crate) title: String,
  pub(crate) url: String,
}

impl Post {
  /// Builds a post from the `data` object of the feed child at `index`.
  pub(crate) fn from_fields(
    index: usize,
    fields: &Map<String, Value>,
  ) -> Result<Self, Error> {
    let invalid = |field| Error::InvalidPost { field, index };

    let score = fields
      .get("score")
      .and_then(Value::as_i64)
      .ok_or_else(|| invalid("score"))?;

    let title = fields
      .get("title")
      .and_then(Value::as_str)
      .ok_or_else(|| invalid("title"))?
      .to_owned();

    let url = fields
      .get("url")
      .and_then(Value::as_str)
      .ok_or_else(|| invalid("url"))?
      .to_owned();

    Ok(Self { score, title, url })
  }
}

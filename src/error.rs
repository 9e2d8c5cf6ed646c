use super::*;

#[derive(Debug, Error)]
pub(crate) enum Error {
  #[error("sort field `{field}` does not hold comparable values")]
  IncomparableSortField { field: String },
  #[error("post {index} is missing `{field}` or it has the wrong type")]
  InvalidPost { field: &'static str, index: usize },
  #[error("post {index} has no field `{field}` to sort by")]
  MissingSortField { field: String, index: usize },
}

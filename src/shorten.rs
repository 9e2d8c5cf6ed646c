use super::*;

pub(crate) trait Shorten {
  async fn shorten(&self, url: &str) -> Result<String>;
}

use {
  super::*,
  anyhow::Context,
  reqwest::header::{HeaderValue, USER_AGENT},
};

pub(crate) struct Client {
  client: reqwest::Client,
  shortener_url: String,
  user_agent: HeaderValue,
}

#[derive(Debug, Deserialize)]
struct ShortenResponse {
  shorturl: String,
}

impl Client {
  const SHORTENER_URL: &str = "http://is.gd/create.php";

  const SHORTENER_URL_VAR: &str = "REDDIT_SHORTENER_URL";

  const USER_AGENT_FALLBACK: &str = "cse-20289-sp19";

  fn feed_request(&self, url: &str) -> Result<reqwest::Request> {
    self
      .client
      .get(url)
      .header(USER_AGENT, self.user_agent.clone())
      .build()
      .with_context(|| format!("invalid feed url {url}"))
  }

  pub(crate) fn from_env() -> Result<Self> {
    let user_agent = Self::user_agent(env::var("USER").ok().as_deref());

    let shortener_url = env::var(Self::SHORTENER_URL_VAR)
      .unwrap_or_else(|_| Self::SHORTENER_URL.to_owned());

    Self::new(&user_agent, shortener_url)
  }

  pub(crate) async fn load_feed(&self, url: &str) -> Result<Feed> {
    tracing::debug!(%url, "loading feed");

    let request = self.feed_request(url)?;

    self
      .client
      .execute(request)
      .await
      .with_context(|| format!("failed to load feed from {url}"))?
      .json::<Feed>()
      .await
      .with_context(|| format!("failed to parse feed from {url}"))
  }

  fn new(user_agent: &str, shortener_url: String) -> Result<Self> {
    let user_agent = HeaderValue::from_str(user_agent)
      .with_context(|| format!("invalid user agent `{user_agent}`"))?;

    let client = reqwest::Client::builder()
      .build()
      .context("failed to build http client")?;

    Ok(Self {
      client,
      shortener_url,
      user_agent,
    })
  }

  fn shorten_request(&self, url: &str) -> Result<reqwest::Request> {
    Ok(
      self
        .client
        .get(&self.shortener_url)
        .header(USER_AGENT, self.user_agent.clone())
        .query(&[("format", "json"), ("url", url)])
        .build()?,
    )
  }

  fn user_agent(user: Option<&str>) -> String {
    format!(
      "reddit-{}",
      user
        .filter(|user| !user.is_empty())
        .unwrap_or(Self::USER_AGENT_FALLBACK)
    )
  }
}

impl Shorten for Client {
  async fn shorten(&self, url: &str) -> Result<String> {
    let request = self.shorten_request(url)?;

    tracing::debug!(url = %request.url(), "shortening link");

    let response = self
      .client
      .execute(request)
      .await
      .with_context(|| format!("failed to shorten {url}"))?
      .json::<ShortenResponse>()
      .await
      .with_context(|| format!("unexpected shortener response for {url}"))?;

    Ok(response.shorturl)
  }
}

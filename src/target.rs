use {super::*, std::str::FromStr};

/// The positional argument: either a feed URL or a community name.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Target {
  Community(String),
  Url(String),
}

impl Target {
  const COMMUNITY_BASE_URL: &str = "https://www.reddit.com/r/";

  const COMMUNITY_SUFFIX: &str = "/.json";

  pub(crate) fn feed_url(&self) -> String {
    match self {
      Self::Community(name) => {
        format!("{}{name}{}", Self::COMMUNITY_BASE_URL, Self::COMMUNITY_SUFFIX)
      }
      Self::Url(url) => url.clone(),
    }
  }
}

impl FromStr for Target {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    if s.chars().count() <= 1 {
      return Err(format!(
        "`{s}` is too short to be a feed URL or community name"
      ));
    }

    Ok(if s.starts_with("http") {
      Self::Url(s.to_owned())
    } else {
      Self::Community(s.to_owned())
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn community_name_builds_listing_url() {
    let target = "programming".parse::<Target>().unwrap();

    assert_eq!(target, Target::Community("programming".into()));

    assert_eq!(
      target.feed_url(),
      "https://www.reddit.com/r/programming/.json"
    );
  }

  #[test]
  fn http_prefix_is_used_verbatim() {
    let target = "https://example.com/feed.json".parse::<Target>().unwrap();

    assert_eq!(target.feed_url(), "https://example.com/feed.json");
  }

  #[test]
  fn http_prefix_without_scheme_separator_is_still_a_url() {
    assert_eq!(
      "httpbin".parse::<Target>().unwrap(),
      Target::Url("httpbin".into())
    );
  }

  #[test]
  fn single_character_target_is_rejected() {
    assert!("a".parse::<Target>().is_err());
    assert!("-".parse::<Target>().is_err());
    assert!("".parse::<Target>().is_err());
  }
}

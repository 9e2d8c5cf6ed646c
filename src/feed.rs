use super::*;

#[derive(Debug, Deserialize)]
pub(crate) struct Feed {
  data: FeedData,
}

#[derive(Debug, Deserialize)]
struct FeedChild {
  data: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
struct FeedData {
  children: Vec<FeedChild>,
}

impl Feed {
  /// The raw `data` object of every child, in feed order.
  pub(crate) fn into_children(self) -> Vec<Map<String, Value>> {
    self
      .data
      .children
      .into_iter()
      .map(|child| child.data)
      .collect()
  }
}

#[cfg(test)]
pub(crate) fn sample_child(title: &str, score: i64) -> Map<String, Value> {
  let Value::Object(fields) = serde_json::json!({
    "title": title,
    "score": score,
    "url": format!("https://example.com/{score}"),
  }) else {
    unreachable!("json! object literal");
  };

  fields
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn into_children_preserves_feed_order() {
    let feed = serde_json::from_str::<Feed>(
      r#"{
        "kind": "Listing",
        "data": {
          "after": "t3_abc",
          "children": [
            {"kind": "t3", "data": {"title": "First", "score": 5, "url": "https://a.example"}},
            {"kind": "t3", "data": {"title": "Second", "score": 20, "url": "https://b.example"}}
          ]
        }
      }"#,
    )
    .unwrap();

    let children = feed.into_children();

    assert_eq!(children.len(), 2);
    assert_eq!(children[0]["title"], "First");
    assert_eq!(children[1]["score"], 20);
    assert_eq!(children[1]["url"], "https://b.example");
  }

  #[test]
  fn feed_without_children_fails_to_parse() {
    assert!(serde_json::from_str::<Feed>(r#"{"data": {}}"#).is_err());
    assert!(serde_json::from_str::<Feed>(r#"{"error": 429}"#).is_err());
  }

  #[test]
  fn child_data_must_be_an_object() {
    assert!(
      serde_json::from_str::<Feed>(r#"{"data": {"children": [{"data": 1}]}}"#)
        .is_err()
    );
  }

  #[test]
  fn empty_children_yield_nothing() {
    let feed =
      serde_json::from_str::<Feed>(r#"{"data": {"children": []}}"#).unwrap();

    assert!(feed.into_children().is_empty());
  }
}

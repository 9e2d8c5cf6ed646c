use {super::*, std::io::Write};

/// Posts selected for display, already sorted and cut to the limit.
#[derive(Debug)]
pub(crate) struct Listing {
  posts: Vec<Post>,
}

impl Listing {
  /// Sorts the feed children, keeps the first `limit` of them and builds
  /// typed posts for those alone.
  pub(crate) fn new(
    children: Vec<Map<String, Value>>,
    config: &Config,
  ) -> Result<Self, Error> {
    let mut children =
      Self::sort(children, &config.order_by, config.sorts_descending())?;

    children.truncate(config.display_count());

    let posts = children
      .iter()
      .map(|(index, fields)| Post::from_fields(*index, fields))
      .collect::<Result<Vec<_>, Error>>()?;

    Ok(Self { posts })
  }

  pub(crate) fn posts(&self) -> &[Post] {
    &self.posts
  }

  pub(crate) async fn render(
    &self,
    config: &Config,
    shortener: &impl Shorten,
    out: &mut impl Write,
  ) -> Result {
    for (index, post) in self.posts.iter().enumerate() {
      let url = if config.shorten {
        shortener.shorten(&post.url).await?
      } else {
        post.url.clone()
      };

      if index > 0 {
        writeln!(out)?;
      }

      writeln!(
        out,
        "{:>4}.\t{} (Score: {})",
        index + 1,
        truncate(&post.title, config.title_length),
        post.score
      )?;

      writeln!(out, "\t{url}")?;
    }

    Ok(())
  }

  /// Stable sort by `field`: descending order keeps ties in feed order.
  /// Each child is paired with its position in the feed.
  fn sort(
    children: Vec<Map<String, Value>>,
    field: &str,
    descending: bool,
  ) -> Result<Vec<(usize, Map<String, Value>)>, Error> {
    let mut keyed = children
      .into_iter()
      .enumerate()
      .map(|(index, fields)| {
        let value =
          fields.get(field).ok_or_else(|| Error::MissingSortField {
            field: field.to_owned(),
            index,
          })?;

        let key = SortKey::from_value(value).ok_or_else(|| {
          Error::IncomparableSortField {
            field: field.to_owned(),
          }
        })?;

        Ok::<_, Error>((key, (index, fields)))
      })
      .collect::<Result<Vec<_>, Error>>()?;

    if let Some((first, _)) = keyed.first()
      && keyed.iter().any(|(key, _)| !key.same_kind(first))
    {
      return Err(Error::IncomparableSortField {
        field: field.to_owned(),
      });
    }

    if descending {
      keyed.sort_by(|(a, _), (b, _)| b.cmp(a));
    } else {
      keyed.sort_by(|(a, _), (b, _)| a.cmp(b));
    }

    Ok(keyed.into_iter().map(|(_, child)| child).collect())
  }
}

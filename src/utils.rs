/// Returns at most the first `max_chars` characters of `text`.
pub(crate) fn truncate(text: &str, max_chars: usize) -> &str {
  text
    .char_indices()
    .nth(max_chars)
    .map_or(text, |(end, _)| &text[..end])
}

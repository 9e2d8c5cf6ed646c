use {super::*, serde_json::Number, std::cmp::Ordering};

#[derive(Clone, Debug)]
pub(crate) enum SortKey {
  Bool(bool),
  Number(Number),
  Text(String),
}

impl SortKey {
  pub(crate) fn from_value(value: &Value) -> Option<Self> {
    match value {
      Value::Bool(b) => Some(Self::Bool(*b)),
      Value::Number(n) => Some(Self::Number(n.clone())),
      Value::String(s) => Some(Self::Text(s.clone())),
      Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
  }

  /// Booleans order as the numbers 0 and 1.
  fn kind(&self) -> u8 {
    match self {
      Self::Bool(_) | Self::Number(_) => 0,
      Self::Text(_) => 1,
    }
  }

  pub(crate) fn same_kind(&self, other: &Self) -> bool {
    self.kind() == other.kind()
  }
}

impl Eq for SortKey {}

impl Ord for SortKey {
  fn cmp(&self, other: &Self) -> Ordering {
    match (self, other) {
      (Self::Bool(a), Self::Bool(b)) => a.cmp(b),
      (Self::Number(a), Self::Number(b)) => compare_numbers(a, b),
      (Self::Bool(a), Self::Number(b)) => {
        compare_numbers(&Number::from(u8::from(*a)), b)
      }
      (Self::Number(a), Self::Bool(b)) => {
        compare_numbers(a, &Number::from(u8::from(*b)))
      }
      (Self::Text(a), Self::Text(b)) => a.cmp(b),
      _ => self.kind().cmp(&other.kind()),
    }
  }
}

impl PartialEq for SortKey {
  fn eq(&self, other: &Self) -> bool {
    self.cmp(other) == Ordering::Equal
  }
}

impl PartialOrd for SortKey {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

fn compare_numbers(a: &Number, b: &Number) -> Ordering {
  match (a.as_i64(), b.as_i64()) {
    (Some(a), Some(b)) => a.cmp(&b),
    _ => match (a.as_u64(), b.as_u64()) {
      (Some(a), Some(b)) => a.cmp(&b),
      _ => {
        let a = a.as_f64().unwrap_or(f64::NAN);
        let b = b.as_f64().unwrap_or(f64::NAN);
        a.total_cmp(&b)
      }
    },
  }
}

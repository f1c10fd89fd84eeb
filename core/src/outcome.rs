/// Outcome of an operation: either a [`Success`](Self::Success) value or a [`Failure`](Self::Failure) value.
///
/// A passive carrier; it has no combinators.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug)]
pub enum Outcome<S, F> {
  Success(S),
  Failure(F),
}

impl<S, F> Outcome<S, F> {
  #[inline]
  pub const fn is_success(&self) -> bool { matches!(self, Self::Success(_)) }
  #[inline]
  pub const fn is_failure(&self) -> bool { matches!(self, Self::Failure(_)) }

  #[inline]
  pub fn success(&self) -> Option<&S> {
    match self {
      Self::Success(value) => Some(value),
      Self::Failure(_) => None,
    }
  }
  #[inline]
  pub fn failure(&self) -> Option<&F> {
    match self {
      Self::Success(_) => None,
      Self::Failure(value) => Some(value),
    }
  }

  #[inline]
  pub fn into_success(self) -> Option<S> {
    match self {
      Self::Success(value) => Some(value),
      Self::Failure(_) => None,
    }
  }
  #[inline]
  pub fn into_failure(self) -> Option<F> {
    match self {
      Self::Success(_) => None,
      Self::Failure(value) => Some(value),
    }
  }
}


#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn success_holds_success_value() {
    let outcome: Outcome<u32, String> = Outcome::Success(42);
    assert!(outcome.is_success());
    assert!(!outcome.is_failure());
    assert_eq!(outcome.success(), Some(&42));
    assert_eq!(outcome.failure(), None);
    assert_eq!(outcome.into_success(), Some(42));
  }

  #[test]
  fn failure_holds_failure_value() {
    let outcome: Outcome<u32, String> = Outcome::Failure("broken".to_string());
    assert!(outcome.is_failure());
    assert!(!outcome.is_success());
    assert_eq!(outcome.success(), None);
    assert_eq!(outcome.failure().map(String::as_str), Some("broken"));
    assert_eq!(outcome.into_failure(), Some("broken".to_string()));
  }

  #[cfg(feature = "serde_json")]
  #[cfg(feature = "serde")]
  #[test]
  fn serializes_as_tagged_variant() {
    let outcome: Outcome<u32, String> = Outcome::Failure("broken".to_string());
    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json, serde_json::json!({ "Failure": "broken" }));
    let back: Outcome<u32, String> = serde_json::from_value(json).unwrap();
    assert_eq!(back, outcome);
  }
}

use crate::error::InvalidAccess;
use crate::nullable::Nullable;

/// Presence or absence of a value: either [`Some`](Self::Some) holding exactly one value, or [`None`](Self::None).
///
/// Values are only created by [`to_option`](Self::to_option) or as the result of a combinator, never mutated after
/// creation. Combinators pass the raw results of their callbacks back through [`to_option`](Self::to_option), so a
/// callback that returns an absent value collapses the result into `None` even when the receiver was `Some`.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug)]
pub enum Optional<T> {
  None,
  Some(T),
}

impl<T> Optional<T> {
  /// The empty value. Every `None` is this value, regardless of how it was produced.
  pub const NONE: Self = Self::None;

  /// Creates an `Optional` from a possibly-absent `value`: the absent marker becomes `None`, any other value is
  /// wrapped as `Some`.
  #[inline]
  pub fn to_option<N: Nullable<Value=T>>(value: N) -> Self {
    match value.into_present() {
      Some(value) => Self::Some(value),
      None => Self::None,
    }
  }

  /// Same as [`to_option`](Self::to_option).
  #[inline]
  pub fn of<N: Nullable<Value=T>>(value: N) -> Self { Self::to_option(value) }


  #[inline]
  pub const fn is_some(&self) -> bool { matches!(self, Self::Some(_)) }

  #[inline]
  pub const fn is_none(&self) -> bool { matches!(self, Self::None) }


  /// Gets a reference to the held value.
  ///
  /// # Errors
  ///
  /// Returns [`InvalidAccess`] if `self` is `None`.
  #[inline]
  pub fn value(&self) -> Result<&T, InvalidAccess> {
    match self {
      Self::Some(value) => Ok(value),
      Self::None => Err(InvalidAccess),
    }
  }

  /// Unwraps the held value.
  ///
  /// # Errors
  ///
  /// Returns [`InvalidAccess`] if `self` is `None`.
  #[inline]
  pub fn into_value(self) -> Result<T, InvalidAccess> {
    match self {
      Self::Some(value) => Ok(value),
      Self::None => Err(InvalidAccess),
    }
  }

  /// Unwraps the held value, or returns `default_value` if `self` is `None`.
  #[inline]
  pub fn default_value(self, default_value: T) -> T {
    match self {
      Self::Some(value) => value,
      Self::None => default_value,
    }
  }

  #[inline]
  pub const fn as_ref(&self) -> Optional<&T> {
    match self {
      Self::Some(value) => Optional::Some(value),
      Self::None => Optional::None,
    }
  }


  /// Dispatches on the variant: calls `some_fn` with the held value if `self` is `Some`, or `none_fn` if `self` is
  /// `None`. At most one handler is called, at most once. The handler's result is passed through
  /// [`to_option`](Self::to_option), so a handler returning an absent value produces `None`. Returns `None` without
  /// calling anything if the handler for the variant is absent.
  #[inline]
  pub fn match_with<N, S, E>(self, some_fn: Option<S>, none_fn: Option<E>) -> Optional<N::Value> where
    N: Nullable,
    S: FnOnce(T) -> N,
    E: FnOnce() -> N,
  {
    match (self, some_fn, none_fn) {
      (Self::Some(value), Some(some_fn), _) => Optional::to_option(some_fn(value)),
      (Self::None, _, Some(none_fn)) => Optional::to_option(none_fn()),
      _ => Optional::None,
    }
  }

  /// Transforms the held value with `transform_fn`, passing its result through [`to_option`](Self::to_option).
  ///
  /// Returns `None` without calling `transform_fn` if `self` is `None` or `transform_fn` is absent. Unlike a plain
  /// functor map, `Some(x)` maps to `to_option(transform_fn(x))`, which is `None` when the transform returns an absent
  /// value.
  #[inline]
  pub fn map<N, F>(self, transform_fn: Option<F>) -> Optional<N::Value> where
    N: Nullable,
    F: FnOnce(T) -> N,
  {
    match (self, transform_fn) {
      (Self::Some(value), Some(transform_fn)) => Optional::to_option(transform_fn(value)),
      _ => Optional::None,
    }
  }
}

impl<T> Default for Optional<T> {
  #[inline]
  fn default() -> Self { Self::None }
}

/// Deserializes the same externally tagged form that is serialized (`"None"` or `{"Some": value}`), but a `Some`
/// holding the absent marker of `T` (e.g. `{"Some": null}`) becomes `None`.
#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de> + Nullable> serde::Deserialize<'de> for Optional<T> {
  fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    #[derive(serde::Deserialize)]
    #[serde(rename = "Optional")]
    enum Tagged<V> {
      None,
      Some(V),
    }

    let optional = match Tagged::<T>::deserialize(deserializer)? {
      Tagged::Some(value) if value.has_value() => Self::Some(value),
      _ => Self::None,
    };
    Ok(optional)
  }
}

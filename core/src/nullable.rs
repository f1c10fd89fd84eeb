use std::ptr::NonNull;

use crate::optional::Optional;

/// A value that may be the absent marker of its type.
///
/// This is the single source of possibly-absent input: [`Optional::to_option`] turns any `Nullable` into an
/// [`Optional`], and the [`map`](Optional::map) and [`match_with`](Optional::match_with) combinators re-wrap the
/// results of their callbacks through it. Types that can never be absent report `true` from
/// [`has_value`](Self::has_value), which lets callbacks return plain values.
pub trait Nullable {
  /// Type of the present value.
  type Value;

  /// Gets whether a value is present, i.e. `self` is not the absent marker.
  fn has_value(&self) -> bool;

  /// Converts into the present value, or `None` if `self` is the absent marker.
  fn into_present(self) -> Option<Self::Value>;
}

/// Gets whether `value` is present, i.e. it is not the absent marker of its type.
#[inline]
pub fn has_value<N: Nullable>(value: &N) -> bool {
  value.has_value()
}


impl<T> Nullable for Option<T> {
  type Value = T;
  #[inline]
  fn has_value(&self) -> bool { self.is_some() }
  #[inline]
  fn into_present(self) -> Option<T> { self }
}

impl<'a, T> Nullable for &'a Option<T> {
  type Value = &'a T;
  #[inline]
  fn has_value(&self) -> bool { self.is_some() }
  #[inline]
  fn into_present(self) -> Option<&'a T> { self.as_ref() }
}

impl<T> Nullable for Optional<T> {
  type Value = T;
  #[inline]
  fn has_value(&self) -> bool { self.is_some() }
  #[inline]
  fn into_present(self) -> Option<T> {
    match self {
      Optional::Some(value) => Some(value),
      Optional::None => None,
    }
  }
}

impl<T> Nullable for *const T {
  type Value = NonNull<T>;
  #[inline]
  fn has_value(&self) -> bool { !self.is_null() }
  #[inline]
  fn into_present(self) -> Option<NonNull<T>> { NonNull::new(self as *mut T) }
}

impl<T> Nullable for *mut T {
  type Value = NonNull<T>;
  #[inline]
  fn has_value(&self) -> bool { !self.is_null() }
  #[inline]
  fn into_present(self) -> Option<NonNull<T>> { NonNull::new(self) }
}

#[cfg(feature = "serde_json")]
impl Nullable for serde_json::Value {
  type Value = serde_json::Value;
  #[inline]
  fn has_value(&self) -> bool { !self.is_null() }
  #[inline]
  fn into_present(self) -> Option<serde_json::Value> {
    if self.is_null() { None } else { Some(self) }
  }
}

#[cfg(feature = "serde_json")]
impl<'a> Nullable for &'a serde_json::Value {
  type Value = &'a serde_json::Value;
  #[inline]
  fn has_value(&self) -> bool { !self.is_null() }
  #[inline]
  fn into_present(self) -> Option<&'a serde_json::Value> {
    if self.is_null() { None } else { Some(self) }
  }
}


// Types without an absent marker.

macro_rules! impl_always_present {
  ($($ty:ty),* $(,)?) => {
    $(
      impl Nullable for $ty {
        type Value = $ty;
        #[inline]
        fn has_value(&self) -> bool { true }
        #[inline]
        fn into_present(self) -> Option<$ty> { Some(self) }
      }
    )*
  };
}

impl_always_present!(
  (), bool, char,
  u8, u16, u32, u64, u128, usize,
  i8, i16, i32, i64, i128, isize,
  f32, f64,
  String,
);

impl<'a> Nullable for &'a str {
  type Value = &'a str;
  #[inline]
  fn has_value(&self) -> bool { true }
  #[inline]
  fn into_present(self) -> Option<&'a str> { Some(self) }
}

impl<T> Nullable for Vec<T> {
  type Value = Vec<T>;
  #[inline]
  fn has_value(&self) -> bool { true }
  #[inline]
  fn into_present(self) -> Option<Vec<T>> { Some(self) }
}

impl<T: ?Sized> Nullable for Box<T> {
  type Value = Box<T>;
  #[inline]
  fn has_value(&self) -> bool { true }
  #[inline]
  fn into_present(self) -> Option<Box<T>> { Some(self) }
}


#[cfg(test)]
mod tests {
  use std::ptr;

  use super::*;

  #[test]
  fn std_option_absent_marker() {
    assert!(!has_value(&None::<i32>));
    assert!(has_value(&Some(0)));
    assert_eq!(Some("a").into_present(), Some("a"));

    let borrowed = Some(String::from("a"));
    assert_eq!((&borrowed).into_present().map(String::as_str), Some("a"));
  }

  #[test]
  fn null_pointer_is_absent() {
    let value = 5u32;
    let present: *const u32 = &value;
    let absent: *const u32 = ptr::null();
    assert!(has_value(&present));
    assert!(!has_value(&absent));
    assert!(absent.into_present().is_none());
    assert_eq!(present.into_present().map(NonNull::as_ptr).map(|p| p as *const u32), Some(present));

    let absent_mut: *mut u32 = ptr::null_mut();
    assert!(!has_value(&absent_mut));
  }

  #[test]
  fn plain_values_are_always_present() {
    assert!(has_value(&0i32));
    assert!(has_value(&false));
    assert!(has_value(&()));
    assert!(has_value(&""));
    assert!(has_value(&String::new()));
    assert!(has_value(&Vec::<u8>::new()));
    assert_eq!(123i32.into_present(), Some(123));
  }

  #[test]
  fn optional_absent_marker() {
    assert!(!has_value(&Optional::<i32>::None));
    assert!(has_value(&Optional::Some(1)));
    assert_eq!(Optional::Some(1).into_present(), Some(1));
  }

  #[cfg(feature = "serde_json")]
  #[test]
  fn json_null_is_absent() {
    use serde_json::{json, Value};

    assert!(!has_value(&Value::Null));
    assert!(has_value(&json!(0)));
    assert!(has_value(&json!(false)));
    assert!(has_value(&json!("")));
    assert_eq!(json!({"a": 1}).into_present(), Some(json!({"a": 1})));
    assert_eq!((&Value::Null).into_present(), None);
  }
}

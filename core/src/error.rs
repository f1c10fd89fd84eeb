use thiserror::Error;

/// Error produced when reading the value of an [`Optional::None`](crate::optional::Optional::None).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Default, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug, Error)]
#[error("No value present in None")]
pub struct InvalidAccess;

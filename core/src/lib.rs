pub mod error;
pub mod nullable;
pub mod optional;
pub mod outcome;

pub mod app;

pub use error::InvalidAccess;
pub use nullable::{has_value, Nullable};
pub use optional::Optional;
pub use outcome::Outcome;

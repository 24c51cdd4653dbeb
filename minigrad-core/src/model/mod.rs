//! Containers composing modules into models.

pub mod sequential;

pub use sequential::Sequential;

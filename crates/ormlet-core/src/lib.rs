mod error;
pub use error::{Error, IntoError};

pub mod mapping;
pub use mapping::{Mapping, Property, Record};

pub mod schema;
pub use schema::{Column, Table};

pub mod stmt;

/// A Result type alias that uses Ormlet's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

//! Core types, schemas, and validation for the sessionizer engine.

pub mod error;
pub mod events;
pub mod limits;
pub mod schema;
pub mod session;
pub mod table;

pub use error::{Error, Result};
pub use events::*;
pub use schema::*;
pub use session::*;
pub use table::*;

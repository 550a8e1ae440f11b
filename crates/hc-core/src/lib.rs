pub mod application;
pub mod error;
pub mod types;

pub use application::Application;
pub use error::{CatalogError, ErrorKind};
pub use types::*;

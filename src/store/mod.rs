pub mod collection;
pub mod error;
pub mod http;
pub mod traits;

#[cfg(test)]
pub(crate) mod testing;

pub use collection::*;
pub use error::*;
pub use http::*;
pub use traits::*;

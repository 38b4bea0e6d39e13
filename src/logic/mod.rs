pub mod draft;
pub mod filter;
pub mod notifier;
pub mod validate;

pub use draft::*;
pub use filter::*;
pub use notifier::*;
pub use validate::*;

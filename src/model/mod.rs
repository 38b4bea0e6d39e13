pub mod record;
pub mod session;
pub mod validation;

pub use record::*;
pub use session::*;
pub use validation::*;

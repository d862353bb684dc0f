// Application layer - the session state and the use cases the shell drives.

pub mod error;
pub mod reporting;
pub mod session;
pub mod validation;

pub use error::*;
pub use reporting::*;
pub use session::*;
pub use validation::*;

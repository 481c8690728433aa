//! Host-facing surface of the engine: the operation table, argument decoding,
//! the stopwatch and the [`Session`] facade that ties them together.

pub mod args;
pub mod catalog;
pub mod session;
pub mod timer;

pub use args::Call;
pub use catalog::{Operation, OperationSignature, catalog};
pub use session::{MIN_SURFACE_SIZE, Session, SessionSettings};
pub use timer::{Stopwatch, format_elapsed};

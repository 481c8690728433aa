//! Deferred 2D drawing for scripting hosts.
//!
//! Scripts call named operations on a [`Session`]. Drawing operations are
//! recorded into a command buffer and replayed onto the surface whenever it
//! repaints, so a frame can be redrawn at any time from the same recording.

pub mod config;
pub mod draw;
pub mod error;
pub mod host;
pub mod script;
pub mod surface;
pub mod value;

pub use config::Config;
pub use error::{GfxError, SurfaceError};
pub use host::{Operation, Session, SessionSettings};
pub use value::{Value, ValueKind};

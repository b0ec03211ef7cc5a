//! The mediagen module owns everything about the Wavespeed generation calls:
//! model classification, request construction, and the retrying invoker that
//! turns a successful response into a file on disk.

// region:    --- Modules

mod invoker;
mod model_class;
mod request;

// -- Flatten
pub use invoker::*;
pub use model_class::*;
pub use request::*;

// endregion: --- Modules

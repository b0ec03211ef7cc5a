//! The chat module contains the value types for the describe/caption vision
//! calls made against the text providers (instruction + up to 3 images in,
//! one plain text string out).

// region:    --- Modules

mod describe_request;
mod describe_response;

// -- Flatten
pub use describe_request::*;
pub use describe_response::*;

// endregion: --- Modules

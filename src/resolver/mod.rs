//! Resolution of service endpoints and authentication data for a provider call.

// region:    --- Modules

mod auth_data;
mod endpoint;

// -- Flatten
pub use auth_data::*;
pub use endpoint::*;

// endregion: --- Modules

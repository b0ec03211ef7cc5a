// region:    --- Modules

mod content_class;
mod model_iden;

// -- Flatten
pub use content_class::*;
pub use model_iden::*;

// endregion: --- Modules

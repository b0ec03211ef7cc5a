use serde::{Deserialize, Serialize};
use std::path::Path;

/// Content classification of a sample image, derived from its source path.
/// Selects the per-job provider/model overrides (see `RunConfig::profile_for`).
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ContentClass {
	Normal,
	Nsfw,
	#[default]
	Unclassified,
}

impl ContentClass {
	/// Derive the class from the parent directory of a sample file.
	/// `.../nsfw/img.png` -> Nsfw, `.../normal/img.png` -> Normal, else Unclassified.
	///
	/// Only the name of the immediate parent counts, and only as an exact
	/// (case-insensitive) match; `abnormal/` or `nsfw_backup/` classify nothing.
	pub fn from_path(path: &Path) -> Self {
		let Some(parent) = path.parent().and_then(Path::file_name) else {
			return Self::Unclassified;
		};
		match parent.to_string_lossy().to_lowercase().as_str() {
			"nsfw" => Self::Nsfw,
			"normal" => Self::Normal,
			_ => Self::Unclassified,
		}
	}

	pub const fn as_str(&self) -> &'static str {
		match self {
			Self::Normal => "normal",
			Self::Nsfw => "nsfw",
			Self::Unclassified => "unclassified",
		}
	}
}

// region:    --- Tests


// endregion: --- Tests

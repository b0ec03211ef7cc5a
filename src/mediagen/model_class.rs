use serde::{Deserialize, Serialize};

/// Classification of a generation model identifier into its request shape.
///
/// The upstream API dispatches on the model id string; the rule table lives
/// here and nowhere else:
///
/// | token in model id (lowercased) | classification          |
/// |--------------------------------|-------------------------|
/// | `image-to-video`               | `Video`                 |
/// | `/video`                       | `Video`                 |
/// | `video`                        | `Video`                 |
/// | `seedream`                     | `ImageEdit(Seedream)`   |
/// | anything else                  | `ImageEdit(Generic)`    |
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum GenerationKind {
	ImageEdit(ImageFamily),
	Video,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum ImageFamily {
	/// Seedream models take a combined `width*height` size string.
	Seedream,
	/// Other families (e.g. Nano Banana Pro) take a named `resolution` tier.
	Generic,
}

impl GenerationKind {
	pub fn from_model(model: &str) -> Self {
		let model = model.to_lowercase();
		if model.contains("image-to-video") || model.contains("/video") || model.contains("video") {
			Self::Video
		} else if model.contains("seedream") {
			Self::ImageEdit(ImageFamily::Seedream)
		} else {
			Self::ImageEdit(ImageFamily::Generic)
		}
	}

	#[must_use]
	pub const fn is_video(&self) -> bool {
		matches!(self, Self::Video)
	}

	/// Default output extension before result resolution
	/// (video paths may be renamed to the fetched URL's extension).
	#[must_use]
	pub const fn default_ext(&self) -> &'static str {
		match self {
			Self::Video => "mp4",
			Self::ImageEdit(_) => "png",
		}
	}
}

// region:    --- ResolutionTier

/// Coarse size selector, translated per model family.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default, Serialize, Deserialize)]
pub enum ResolutionTier {
	#[default]
	#[serde(rename = "1k")]
	OneK,
	#[serde(rename = "2k")]
	TwoK,
	#[serde(rename = "4k")]
	FourK,
}

impl ResolutionTier {
	/// Unknown tiers fall back to `OneK` (and therefore to the Seedream
	/// minimum size).
	pub fn from_config(tier: &str) -> Self {
		match tier.trim().to_lowercase().as_str() {
			"2k" => Self::TwoK,
			"4k" => Self::FourK,
			_ => Self::OneK,
		}
	}

	#[must_use]
	pub const fn as_str(&self) -> &'static str {
		match self {
			Self::OneK => "1k",
			Self::TwoK => "2k",
			Self::FourK => "4k",
		}
	}

	/// The Seedream size strings. The API enforces a minimum of 3,686,400
	/// pixels, so the `1k` tier already maps to 1920*1920.
	#[must_use]
	pub const fn seedream_size(&self) -> &'static str {
		match self {
			Self::OneK => "1920*1920",
			Self::TwoK => "2048*2048",
			Self::FourK => "4096*4096",
		}
	}
}

// endregion: --- ResolutionTier

// region:    --- Tests


// endregion: --- Tests

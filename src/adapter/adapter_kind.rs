use crate::adapter::adapters::gemini::GeminiAdapter;
use crate::adapter::adapters::openai::OpenAIAdapter;
use crate::adapter::adapters::xai::XaiAdapter;
use crate::{Error, Result};
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// `AdapterKind` is an enum that represents the interchangeable text/vision
/// providers used for prompt and caption generation.
#[derive(Debug, Clone, Copy, Display, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum AdapterKind {
	/// Used for the Gemini adapter.
	Gemini,
	/// Main adapter type for the `OpenAI` service.
	OpenAI,
	/// For xAI (Grok). Behind the scenes, it uses the `OpenAI` adapter logic
	/// with the xAI endpoint.
	Xai,
}

/// Serialization implementations
impl AdapterKind {
	/// Serialize to a static str
	#[must_use]
	pub const fn as_str(&self) -> &'static str {
		match self {
			Self::Gemini => "Gemini",
			Self::OpenAI => "OpenAI",
			Self::Xai => "xAi",
		}
	}

	/// Serialize to a static str
	#[must_use]
	pub const fn as_lower_str(&self) -> &'static str {
		match self {
			Self::Gemini => "gemini",
			Self::OpenAI => "openai",
			Self::Xai => "xai",
		}
	}
}

/// Utilities
impl AdapterKind {
	/// Get the default key environment variable name for the adapter kind.
	#[must_use]
	pub const fn default_key_env_name(&self) -> &'static str {
		match self {
			Self::Gemini => GeminiAdapter::API_KEY_DEFAULT_ENV_NAME,
			Self::OpenAI => OpenAIAdapter::API_KEY_DEFAULT_ENV_NAME,
			Self::Xai => XaiAdapter::API_KEY_DEFAULT_ENV_NAME,
		}
	}

	/// Mapping from the provider names used in the run configuration.
	/// ("grok" is the historical config name for the xAI provider.)
	pub fn from_provider_name(name: &str) -> Result<Self> {
		match name.trim().to_lowercase().as_str() {
			"gemini" => Ok(Self::Gemini),
			"openai" => Ok(Self::OpenAI),
			"grok" | "xai" => Ok(Self::Xai),
			_ => Err(Error::UnknownProvider { name: name.to_string() }),
		}
	}
}

// region:    --- Tests


// endregion: --- Tests

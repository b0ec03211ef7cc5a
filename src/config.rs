//! Run configuration, loaded from a `config.json` file.
//!
//! The file carries folder paths, API keys, provider/model choices, caption
//! settings, and optional per-content override blocks. Provider choices are
//! resolved up front into immutable [`ProviderProfile`] values, one per
//! content class, so that nothing mutates shared settings mid-run.

use crate::adapter::{AdapterDispatcher, AdapterKind, ServiceTarget};
use crate::common::ContentClass;
use crate::mediagen::ResolutionTier;
use crate::resolver::AuthData;
use crate::{Error, ModelIden, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const WAVESPEED_KEY_ENV_NAME: &str = "WAVESPEED_API_KEY";

// region:    --- RunConfig

#[derive(Debug, Clone, Copy, Eq, PartialEq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunMode {
	/// Process up to `limit_sample_images` samples in one run.
	#[default]
	Bulk,
	/// Process one interactively selected sample.
	Detailed,
}

/// Per-content overrides. Any field left out falls back to the top-level
/// choice for that concern.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProfileOverride {
	pub prompt_provider: Option<String>,
	pub prompt_model: Option<String>,
	pub media_model: Option<String>,
	pub caption_provider: Option<String>,
	pub caption_model: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RunConfig {
	// -- Folders
	pub influencer_ref_folder: PathBuf,
	pub sample_dataset_folder: PathBuf,
	pub output_folder: PathBuf,

	// -- Limits
	pub limit_ref_images: usize,
	pub limit_sample_images: usize,

	// -- API keys (blank means "resolve from the environment")
	pub gemini_api_key: String,
	pub openai_api_key: String,
	pub grok_api_key: String,
	pub wavespeed_api_key: String,

	// -- Prompt generation
	pub prompt_provider: Option<String>,
	pub gemini_model: String,
	pub openai_model: String,
	pub grok_model: String,

	// -- Media generation
	pub media_provider: String,
	pub wavespeed_model: String,
	pub wavespeed_resolution: String,
	pub wavespeed_output_format: String,

	// -- Run shape
	pub run_mode: RunMode,
	pub nsfw_enabled: bool,

	// -- Captions
	pub generate_captions: bool,
	pub trigger_name: String,
	pub caption_provider: String,
	pub openai_caption_model: String,
	pub grok_caption_model: String,

	// -- Per-content overrides
	pub overrides_normal: Option<ProfileOverride>,
	pub overrides_nsfw: Option<ProfileOverride>,

	/// Set by the interactive selection in detailed mode; never read from file.
	#[serde(skip)]
	pub selected_sample: Option<PathBuf>,
}

impl Default for RunConfig {
	fn default() -> Self {
		Self {
			influencer_ref_folder: PathBuf::from("./Influencer Reference Images"),
			sample_dataset_folder: PathBuf::from("./Sample Dataset"),
			output_folder: PathBuf::from("./output"),
			limit_ref_images: 10,
			limit_sample_images: 10,
			gemini_api_key: String::new(),
			openai_api_key: String::new(),
			grok_api_key: String::new(),
			wavespeed_api_key: String::new(),
			prompt_provider: None,
			gemini_model: "gemini-2.5-flash".to_string(),
			openai_model: "gpt-5.1".to_string(),
			grok_model: "grok-4-1-fast-reasoning".to_string(),
			media_provider: "wavespeed".to_string(),
			wavespeed_model: String::new(),
			wavespeed_resolution: "1k".to_string(),
			wavespeed_output_format: "png".to_string(),
			run_mode: RunMode::default(),
			nsfw_enabled: false,
			generate_captions: false,
			trigger_name: String::new(),
			caption_provider: "openai".to_string(),
			openai_caption_model: "gpt-5.1".to_string(),
			grok_caption_model: "grok-4-1-fast-reasoning".to_string(),
			overrides_normal: None,
			overrides_nsfw: None,
			selected_sample: None,
		}
	}
}

// endregion: --- RunConfig

// region:    --- ProviderProfile

/// The fully resolved provider choices for one generation job. Built once per
/// sample from the config plus its content-class override block, and never
/// mutated afterwards.
#[derive(Debug, Clone)]
pub struct ProviderProfile {
	pub prompt: ModelIden,
	pub caption: ModelIden,
	pub media_model: String,
	pub resolution: ResolutionTier,
	pub output_format: String,
}

impl RunConfig {
	pub fn load(path: &Path) -> Result<Self> {
		if !path.is_file() {
			return Err(Error::FileNotFound { path: path.to_path_buf() });
		}
		let content = fs::read_to_string(path)?;
		Ok(serde_json::from_str(&content)?)
	}

	/// Resolve the provider choices for one content class.
	///
	/// Fails when no prompt provider is configured, when a provider name is
	/// unknown, or when the media provider is not `wavespeed`.
	pub fn profile_for(&self, content: ContentClass) -> Result<ProviderProfile> {
		if self.media_provider.trim().to_lowercase() != "wavespeed" {
			return Err(Error::UnknownMediaProvider {
				name: self.media_provider.clone(),
			});
		}

		let overrides = match content {
			ContentClass::Nsfw => self.overrides_nsfw.as_ref(),
			ContentClass::Normal => self.overrides_normal.as_ref(),
			ContentClass::Unclassified => None,
		};

		// -- Prompt model
		let prompt_provider = overrides
			.and_then(|o| o.prompt_provider.as_deref())
			.or(self.prompt_provider.as_deref())
			.ok_or(Error::ProviderNotConfigured { role: "prompt" })?;
		let prompt_kind = AdapterKind::from_provider_name(prompt_provider)?;
		let prompt_model = overrides
			.and_then(|o| o.prompt_model.as_deref())
			.unwrap_or_else(|| self.prompt_model_for(prompt_kind));

		// -- Caption model
		let caption_provider = overrides
			.and_then(|o| o.caption_provider.as_deref())
			.unwrap_or(&self.caption_provider);
		let caption_kind = AdapterKind::from_provider_name(caption_provider)?;
		let caption_model = overrides
			.and_then(|o| o.caption_model.as_deref())
			.unwrap_or_else(|| self.caption_model_for(caption_kind));

		// -- Media model
		let media_model = overrides
			.and_then(|o| o.media_model.as_deref())
			.unwrap_or(&self.wavespeed_model)
			.to_string();

		Ok(ProviderProfile {
			prompt: ModelIden::new(prompt_kind, prompt_model),
			caption: ModelIden::new(caption_kind, caption_model),
			media_model,
			resolution: ResolutionTier::from_config(&self.wavespeed_resolution),
			output_format: self.wavespeed_output_format.clone(),
		})
	}

	fn prompt_model_for(&self, kind: AdapterKind) -> &str {
		match kind {
			AdapterKind::Gemini => &self.gemini_model,
			AdapterKind::OpenAI => &self.openai_model,
			AdapterKind::Xai => &self.grok_model,
		}
	}

	fn caption_model_for(&self, kind: AdapterKind) -> &str {
		match kind {
			AdapterKind::Gemini => &self.gemini_model,
			AdapterKind::OpenAI => &self.openai_caption_model,
			AdapterKind::Xai => &self.grok_caption_model,
		}
	}

	/// Auth for a text/vision provider: a config key when given, otherwise the
	/// provider's default key environment variable.
	pub fn auth_for(&self, kind: AdapterKind) -> AuthData {
		let key = match kind {
			AdapterKind::Gemini => &self.gemini_api_key,
			AdapterKind::OpenAI => &self.openai_api_key,
			AdapterKind::Xai => &self.grok_api_key,
		};
		if key.trim().is_empty() {
			AuthData::from_env(kind.default_key_env_name())
		} else {
			AuthData::from_single(key.as_str())
		}
	}

	pub fn service_target(&self, model: ModelIden) -> ServiceTarget {
		let endpoint = AdapterDispatcher::default_endpoint(model.adapter_kind);
		let auth = self.auth_for(model.adapter_kind);
		ServiceTarget { endpoint, auth, model }
	}

	/// The media-generation key resolves like the provider keys, but against
	/// `WAVESPEED_API_KEY`.
	pub fn wavespeed_key(&self) -> Result<String> {
		if !self.wavespeed_api_key.trim().is_empty() {
			return Ok(self.wavespeed_api_key.clone());
		}
		match std::env::var(WAVESPEED_KEY_ENV_NAME) {
			Ok(value) if !value.trim().is_empty() => Ok(value),
			_ => Err(Error::ApiKeyEnvNotFound {
				env_name: WAVESPEED_KEY_ENV_NAME.to_string(),
			}),
		}
	}
}

// endregion: --- ProviderProfile

// region:    --- Tests


// endregion: --- Tests

use crate::ModelIden;
use derive_more::From;
use std::path::PathBuf;

pub type Result<T> = core::result::Result<T, Error>;

/// Main error type for the lorasmith crate.
///
/// Configuration variants surface before any network call; media variants are
/// scoped to a single generation call and are caught at the pipeline loop
/// boundary (one failed sample never aborts the run).
#[derive(Debug, From)]
pub enum Error {
	// -- Configuration
	/// The provider for the given role ("prompt", "caption", "media") was not set.
	ProviderNotConfigured {
		role: &'static str,
	},
	/// No provider name matched (config accepts "gemini" | "openai" | "grok").
	UnknownProvider {
		name: String,
	},
	/// Only "wavespeed" is supported as the media generation provider.
	UnknownMediaProvider {
		name: String,
	},
	/// The credential for the resolved model is blank and no env fallback was found.
	NoAuthData {
		model_iden: ModelIden,
	},
	ApiKeyEnvNotFound {
		env_name: String,
	},

	// -- Web (single call)
	/// Non-2xx status (or error body) from a describe/caption provider.
	/// Single attempt; surfaced to the pipeline loop as-is.
	ProviderResponseError {
		model_iden: ModelIden,
		detail: String,
	},
	WebCallTimeout {
		url: String,
	},
	WebCall {
		url: String,
		detail: String,
	},

	// -- Media generation
	/// HTTP 4xx from the generation provider. Never retried.
	MediaClientError {
		status: u16,
		detail: String,
	},
	/// All retry attempts consumed (5xx or API-reported failure on every attempt).
	MediaAttemptsExhausted {
		attempts: u32,
		last_error: String,
	},
	/// 2xx response with no recognizable artifact field. The raw body was
	/// persisted to `dump_path` for postmortem inspection.
	UnexpectedResponseShape {
		dump_path: PathBuf,
	},
	ResultFetchFailed {
		url: String,
		detail: String,
	},

	// -- Files
	FolderNotFound {
		path: PathBuf,
	},
	FileNotFound {
		path: PathBuf,
	},

	// -- Externals
	#[from]
	Io(std::io::Error),
	#[from]
	SerdeJson(serde_json::Error),
	#[from]
	JsonValueExt(value_ext::JsonValueExtError),
	#[from]
	Reqwest(reqwest::Error),
	#[from]
	Zip(zip::result::ZipError),
	#[from]
	Base64Decode(base64::DecodeError),
}

// region:    --- Error Boilerplate

impl core::fmt::Display for Error {
	fn fmt(&self, fmt: &mut core::fmt::Formatter) -> core::result::Result<(), core::fmt::Error> {
		write!(fmt, "{self:?}")
	}
}

impl std::error::Error for Error {}

// endregion: --- Error Boilerplate

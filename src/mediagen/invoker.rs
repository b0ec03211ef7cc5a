use crate::files::unique_file_path;
use crate::mediagen::{GenerationKind, MediaRequestData};
use crate::texts::tr;
use crate::webc::{body_excerpt, Transport};
use crate::{Error, Result};
use base64::Engine;
use base64::engine::general_purpose::STANDARD as B64;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

/// Total attempts for one generation call (first try included).
pub const MAX_ATTEMPTS: u32 = 3;

const BACKOFF_STEP_SECS: u64 = 3;
const BACKOFF_CAP_SECS: u64 = 30;

/// Result fetches download an already-produced file; minutes, not hours.
pub const RESULT_FETCH_TIMEOUT: Duration = Duration::from_secs(300);

// region:    --- Classification

/// Outcome class of a single generation attempt.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum RetryClass {
	Success,
	/// Transient: 5xx, or a 2xx whose body reports the generation job failed
	/// (moderation flakiness, model overload). Worth another attempt.
	Retry(String),
	/// 4xx: the request itself is malformed; retrying cannot help.
	Fatal(String),
}

/// Pure classification of one HTTP exchange. `body` must already be
/// envelope-unwrapped. Transport-level failures (timeout, connect) never get
/// here; they abort the call before classification.
pub fn classify_response(status: u16, body: &Value) -> RetryClass {
	if status >= 500 {
		return RetryClass::Retry(format!("HTTP {status} Server Error: {}", body_excerpt(body)));
	}
	if status >= 400 {
		return RetryClass::Fatal(format!("HTTP {status} Client Error: {}", body_excerpt(body)));
	}

	// 2xx can still encode a failed generation job.
	let failed = body.get("status").and_then(Value::as_str) == Some("failed");
	let api_error = body.get("error").filter(|v| !v.is_null() && *v != &Value::String(String::new()));
	if failed || api_error.is_some() {
		let detail = api_error
			.and_then(Value::as_str)
			.map(str::to_string)
			.unwrap_or_else(|| tr("unknown_error").to_string());
		return RetryClass::Retry(detail);
	}

	RetryClass::Success
}

/// The generation API may wrap the result in a `{code, message, data}`
/// envelope; the artifact fields live inside `data` when present.
pub fn unwrap_envelope(mut body: Value) -> Value {
	match body.get_mut("data") {
		Some(data) => data.take(),
		None => body,
	}
}

/// Monotonically non-decreasing, capped backoff before the given (1-based)
/// attempt number.
#[must_use]
pub const fn backoff_delay(attempt: u32) -> Duration {
	let secs = (attempt.saturating_sub(1) as u64) * BACKOFF_STEP_SECS;
	let secs = if secs > BACKOFF_CAP_SECS { BACKOFF_CAP_SECS } else { secs };
	Duration::from_secs(secs)
}

// endregion: --- Classification

// region:    --- Invoke

/// Record of one successful generation.
#[derive(Debug)]
pub struct MediaOutcome {
	/// Actual output path (video paths can differ from the requested one
	/// when the fetched URL carries another extension).
	pub path: PathBuf,
	pub attempts: u32,
	pub kind: GenerationKind,
}

/// Execute one generation call with bounded retry, and resolve the result
/// payload into bytes at `output_path`.
///
/// State machine: ATTEMPTING -> { SUCCEEDED, RETRY_WAIT -> ATTEMPTING, FAILED }.
/// This is the only place that writes generation outputs to disk and the only
/// place that performs the generation/result-fetch network calls.
pub async fn generate_media<T: Transport>(
	transport: &T,
	request: &MediaRequestData,
	output_path: &Path,
) -> Result<MediaOutcome> {
	let mut last_error: Option<String> = None;

	for attempt in 1..=MAX_ATTEMPTS {
		if attempt > 1 {
			let wait = backoff_delay(attempt);
			info!("{} ({attempt}/{MAX_ATTEMPTS})", tr("retry_attempt"));
			info!("{} ({}s)", tr("waiting_before_retry"), wait.as_secs());
			tokio::time::sleep(wait).await;
		}

		// Network/timeout failures abort immediately: generation timeouts are
		// tens of minutes, and every attempt is billed.
		let web_res = transport.do_post(&request.web).await?;

		let status = web_res.status;
		let body = unwrap_envelope(web_res.body);

		match classify_response(status, &body) {
			RetryClass::Success => {
				let path = resolve_result(transport, request.kind, &body, output_path).await?;
				return Ok(MediaOutcome {
					path,
					attempts: attempt,
					kind: request.kind,
				});
			}
			RetryClass::Retry(detail) => {
				warn!("{}: {detail}", tr("media_api_error"));
				last_error = Some(detail);
			}
			RetryClass::Fatal(detail) => {
				return Err(Error::MediaClientError { status, detail });
			}
		}
	}

	Err(Error::MediaAttemptsExhausted {
		attempts: MAX_ATTEMPTS,
		last_error: last_error.unwrap_or_else(|| tr("unknown_error").to_string()),
	})
}

/// Search the successful body for the artifact, in priority order:
/// remote URL field, then `outputs[0]`, then inline base64; otherwise dump
/// the raw body next to the intended output for postmortem debugging.
async fn resolve_result<T: Transport>(
	transport: &T,
	kind: GenerationKind,
	body: &Value,
	output_path: &Path,
) -> Result<PathBuf> {
	let is_video = kind.is_video();
	let url_fields: &[&str] = if is_video { &["video", "video_url"] } else { &["image", "image_url"] };

	let mut remote_url = url_fields.iter().find_map(|field| body.get(*field).and_then(Value::as_str));
	if remote_url.is_none() {
		remote_url = body
			.get("outputs")
			.and_then(Value::as_array)
			.and_then(|outputs| outputs.first())
			.and_then(Value::as_str);
	}

	if let Some(url) = remote_url {
		// Plain GET, own (short) timeout, no retry.
		let bytes = transport.do_get_bytes(url, RESULT_FETCH_TIMEOUT).await?;
		let final_path = if is_video {
			// The extension rename can land on a path the caller never
			// checked; it must not clobber a leftover file there.
			unique_file_path(&with_url_extension(output_path, url))
		} else {
			output_path.to_path_buf()
		};
		fs::write(&final_path, &bytes)?;
		return Ok(final_path);
	}

	let b64_field = if is_video { "video_base64" } else { "image_base64" };
	if let Some(b64) = body.get(b64_field).and_then(Value::as_str) {
		let data = B64.decode(b64)?;
		let final_path = if is_video {
			unique_file_path(&output_path.with_extension("mp4"))
		} else {
			output_path.to_path_buf()
		};
		fs::write(&final_path, data)?;
		return Ok(final_path);
	}

	// A misunderstood provider contract must leave evidence.
	let stem = output_path.file_stem().map(|s| s.to_string_lossy().to_string()).unwrap_or_default();
	let dump_path = output_path.with_file_name(format!("{stem}_response.json"));
	fs::write(&dump_path, serde_json::to_string_pretty(body)?)?;
	Err(Error::UnexpectedResponseShape { dump_path })
}

/// Rename the output to match the fetched URL's trailing extension
/// (query string stripped); `mp4` when the URL has none.
fn with_url_extension(path: &Path, url: &str) -> PathBuf {
	let trimmed = url.split('?').next().unwrap_or(url);
	let ext = trimmed
		.rsplit('.')
		.next()
		.filter(|ext| !ext.is_empty() && !ext.contains('/') && ext.len() <= 5 && *ext != trimmed)
		.unwrap_or("mp4");
	path.with_extension(ext)
}

// endregion: --- Invoke

// region:    --- Tests


// endregion: --- Tests

//! webc - the crate's thin web layer over reqwest.
//!
//! All outbound HTTP goes through the `Transport` trait so that the pipeline
//! and the invoker can be exercised against a scripted transport in tests.
//! The production implementation is `WebClient`.

use crate::adapter::WebRequestData;
use crate::{Error, Result};
use bytes::Bytes;
use serde_json::Value;
use std::time::Duration;

// region:    --- WebResponse

#[derive(Debug, Clone)]
pub struct WebResponse {
	pub status: u16,
	/// Parsed JSON body, or `Value::String` with the raw text when the
	/// provider returns a non-JSON body (e.g., some 5xx error pages).
	pub body: Value,
}

impl WebResponse {
	/// Short body rendering for error details (bounded, single line).
	#[must_use]
	pub fn body_detail(&self) -> String {
		body_excerpt(&self.body)
	}
}

/// Bounded rendering of a response body for error details. Error pages are
/// not necessarily ASCII, so the cut must land on a char boundary.
pub fn body_excerpt(body: &Value) -> String {
	const MAX_BYTES: usize = 200;
	let mut text = match body {
		Value::String(text) => text.clone(),
		other => other.to_string(),
	};
	if text.len() > MAX_BYTES {
		let mut cut = MAX_BYTES;
		while !text.is_char_boundary(cut) {
			cut -= 1;
		}
		text.truncate(cut);
	}
	text
}

// endregion: --- WebResponse

// region:    --- Transport

/// The outbound HTTP seam. One `do_post` per provider call, one
/// `do_get_bytes` per result fetch. No retry at this layer; retry policy
/// belongs to `mediagen::invoker`.
pub trait Transport {
	fn do_post(&self, data: &WebRequestData) -> impl Future<Output = Result<WebResponse>>;
	fn do_get_bytes(&self, url: &str, timeout: Duration) -> impl Future<Output = Result<Bytes>>;
}

/// Shared handle delegation, for callers that must keep a handle to the
/// transport after a pipeline takes ownership of it.
impl<T: Transport> Transport for std::sync::Arc<T> {
	async fn do_post(&self, data: &WebRequestData) -> Result<WebResponse> {
		self.as_ref().do_post(data).await
	}

	async fn do_get_bytes(&self, url: &str, timeout: Duration) -> Result<Bytes> {
		self.as_ref().do_get_bytes(url, timeout).await
	}
}

// endregion: --- Transport

// region:    --- WebClient

/// Production transport backed by a shared `reqwest::Client`.
#[derive(Debug, Clone, Default)]
pub struct WebClient {
	inner: reqwest::Client,
}

impl Transport for WebClient {
	async fn do_post(&self, data: &WebRequestData) -> Result<WebResponse> {
		let mut req = self.inner.post(&data.url).json(&data.payload).timeout(data.timeout);
		for (name, value) in &data.headers {
			req = req.header(name, value);
		}

		let res = req.send().await.map_err(|err| map_reqwest_err(&data.url, &err))?;
		let status = res.status().as_u16();
		let text = res.text().await.map_err(|err| map_reqwest_err(&data.url, &err))?;

		// Keep non-JSON bodies around as raw text; the invoker folds them into error details.
		let body = serde_json::from_str::<Value>(&text).unwrap_or(Value::String(text));

		Ok(WebResponse { status, body })
	}

	async fn do_get_bytes(&self, url: &str, timeout: Duration) -> Result<Bytes> {
		let res = self
			.inner
			.get(url)
			.timeout(timeout)
			.send()
			.await
			.map_err(|err| map_reqwest_err(url, &err))?;

		if !res.status().is_success() {
			return Err(Error::ResultFetchFailed {
				url: url.to_string(),
				detail: format!("HTTP {}", res.status().as_u16()),
			});
		}

		res.bytes().await.map_err(|err| map_reqwest_err(url, &err))
	}
}

fn map_reqwest_err(url: &str, err: &reqwest::Error) -> Error {
	if err.is_timeout() {
		Error::WebCallTimeout { url: url.to_string() }
	} else {
		Error::WebCall {
			url: url.to_string(),
			detail: err.to_string(),
		}
	}
}

// endregion: --- WebClient

// region:    --- Tests


// endregion: --- Tests

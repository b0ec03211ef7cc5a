//! Shared test support: a scripted transport and workspace seeding.

#![allow(unused)] // Not all test files use every helper.

use bytes::Bytes;
use lorasmith::adapter::WebRequestData;
use lorasmith::config::RunConfig;
use lorasmith::webc::{Transport, WebResponse};
use serde_json::json;
use std::collections::VecDeque;
use std::fs;
use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;
use tempfile::TempDir;

pub const FETCHED_BYTES: &[u8] = b"fetched-media-bytes";

/// Scripted transport. Posts are routed by URL: Wavespeed calls pop from the
/// media script, everything else from the chat script. Every post is recorded
/// for assertions.
#[derive(Default)]
pub struct FakeTransport {
	chat_script: Mutex<VecDeque<WebResponse>>,
	media_script: Mutex<VecDeque<WebResponse>>,
	pub posts: Mutex<Vec<WebRequestData>>,
}

impl FakeTransport {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn push_chat(&self, response: WebResponse) {
		self.chat_script.lock().unwrap().push_back(response);
	}

	pub fn push_media(&self, response: WebResponse) {
		self.media_script.lock().unwrap().push_back(response);
	}

	pub fn post_count(&self) -> usize {
		self.posts.lock().unwrap().len()
	}

	pub fn media_post_count(&self) -> usize {
		self.posts
			.lock()
			.unwrap()
			.iter()
			.filter(|post| post.url.contains("wavespeed"))
			.count()
	}
}

impl Transport for FakeTransport {
	async fn do_post(&self, data: &WebRequestData) -> lorasmith::Result<WebResponse> {
		self.posts.lock().unwrap().push(data.clone());
		let script = if data.url.contains("wavespeed") {
			&self.media_script
		} else {
			&self.chat_script
		};
		let response = script
			.lock()
			.unwrap()
			.pop_front()
			.unwrap_or_else(|| panic!("unscripted post to {}", data.url));
		Ok(response)
	}

	async fn do_get_bytes(&self, _url: &str, _timeout: Duration) -> lorasmith::Result<Bytes> {
		Ok(Bytes::from_static(FETCHED_BYTES))
	}
}

// region:    --- Response builders

/// OpenAI-shaped chat success (the tests run prompts and captions on OpenAI).
pub fn chat_ok(text: &str) -> WebResponse {
	WebResponse {
		status: 200,
		body: json!({
			"choices": [
				{ "message": { "content": text }, "finish_reason": "stop" }
			]
		}),
	}
}

/// Media success whose artifact is a remote URL inside the data envelope.
pub fn media_ok(url: &str) -> WebResponse {
	WebResponse {
		status: 200,
		body: json!({ "code": 200, "message": "success", "data": { "outputs": [url] } }),
	}
}

pub fn media_http_error(status: u16, detail: &str) -> WebResponse {
	WebResponse {
		status,
		body: json!({ "message": detail }),
	}
}

/// 2xx whose body reports a failed generation job.
pub fn media_job_failed(reason: &str) -> WebResponse {
	WebResponse {
		status: 200,
		body: json!({ "data": { "status": "failed", "error": reason } }),
	}
}

// endregion: --- Response builders

// region:    --- Workspace seeding

/// Create a workspace with `ref_count` reference images and `sample_count`
/// samples under `samples/normal/`, plus a config wired to it (OpenAI prompts
/// and captions, Seedream media, inline API keys so no env vars are needed).
pub fn seed_workspace(ref_count: usize, sample_count: usize) -> (TempDir, RunConfig) {
	let dir = tempfile::tempdir().unwrap();
	let root = dir.path();

	let refs_dir = root.join("refs");
	fs::create_dir_all(&refs_dir).unwrap();
	for i in 0..ref_count {
		fs::write(refs_dir.join(format!("ref_{i}.jpg")), format!("ref-{i}")).unwrap();
	}

	let normal_dir = root.join("samples/normal");
	fs::create_dir_all(&normal_dir).unwrap();
	for i in 0..sample_count {
		fs::write(normal_dir.join(format!("sample_{i}.png")), format!("sample-{i}")).unwrap();
	}

	let config = RunConfig {
		influencer_ref_folder: refs_dir,
		sample_dataset_folder: root.join("samples"),
		output_folder: root.join("output"),
		prompt_provider: Some("openai".to_string()),
		openai_api_key: "sk-test".to_string(),
		wavespeed_api_key: "ws-test".to_string(),
		wavespeed_model: "bytedance/seedream-v4".to_string(),
		..RunConfig::default()
	};

	(dir, config)
}

/// Name-sorted file names under `dir` whose name ends with `suffix`.
pub fn files_with_suffix(dir: &Path, suffix: &str) -> Vec<String> {
	let mut names: Vec<String> = fs::read_dir(dir)
		.unwrap()
		.filter_map(|entry| entry.ok())
		.map(|entry| entry.file_name().to_string_lossy().to_string())
		.filter(|name| name.ends_with(suffix))
		.collect();
	names.sort();
	names
}

// endregion: --- Workspace seeding

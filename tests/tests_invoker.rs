mod support;

use lorasmith::adapter::AdapterKind;
use lorasmith::config::ProviderProfile;
use lorasmith::mediagen::{generate_media, to_media_request_data, MediaRequestData, ResolutionTier};
use lorasmith::{Error, ModelIden};
use serde_json::json;
use std::fs;
use std::sync::Arc;
use std::time::Duration;
use support::{media_http_error, media_job_failed, media_ok, FakeTransport, FETCHED_BYTES};

type Result<T> = core::result::Result<T, Box<dyn std::error::Error>>; // For tests.

fn media_request(model: &str) -> Result<MediaRequestData> {
	let profile = ProviderProfile {
		prompt: ModelIden::new(AdapterKind::OpenAI, "gpt-5.1"),
		caption: ModelIden::new(AdapterKind::OpenAI, "gpt-5.1"),
		media_model: model.to_string(),
		resolution: ResolutionTier::OneK,
		output_format: "png".to_string(),
	};
	let refs: Vec<Arc<[u8]>> = vec![Arc::from(&b"ref-0"[..]), Arc::from(&b"ref-1"[..])];
	Ok(to_media_request_data(&profile, "ws-test", &refs, b"sample", "A scene prompt")?)
}

fn seedream_request() -> Result<MediaRequestData> {
	media_request("bytedance/seedream-v4")
}

#[tokio::test(start_paused = true)]
async fn test_invoker_retries_server_errors_with_backoff() -> Result<()> {
	// -- Setup & Fixtures
	let dir = tempfile::tempdir()?;
	let output_path = dir.path().join("sample_generated.png");
	let transport = FakeTransport::new();
	transport.push_media(media_http_error(503, "overloaded"));
	transport.push_media(media_http_error(503, "overloaded"));
	transport.push_media(media_ok("https://cdn.test/result.png"));
	let request = seedream_request()?;

	// -- Exec
	let start = tokio::time::Instant::now();
	let outcome = generate_media(&transport, &request, &output_path).await?;

	// -- Check
	assert_eq!(outcome.attempts, 3);
	assert_eq!(transport.post_count(), 3);
	// waits of 3s then 6s before attempts 2 and 3
	assert_eq!(start.elapsed(), Duration::from_secs(9));
	assert_eq!(fs::read(&output_path)?, FETCHED_BYTES);

	Ok(())
}

#[tokio::test]
async fn test_invoker_client_error_fails_without_retry() -> Result<()> {
	// -- Setup & Fixtures
	let dir = tempfile::tempdir()?;
	let output_path = dir.path().join("sample_generated.png");
	let transport = FakeTransport::new();
	transport.push_media(media_http_error(404, "model not found"));
	let request = seedream_request()?;

	// -- Exec
	let res = generate_media(&transport, &request, &output_path).await;

	// -- Check
	assert!(matches!(res, Err(Error::MediaClientError { status: 404, .. })));
	assert_eq!(transport.post_count(), 1);
	assert!(!output_path.exists());

	Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_invoker_exhausts_attempts_on_job_failures() -> Result<()> {
	// -- Setup & Fixtures
	let dir = tempfile::tempdir()?;
	let output_path = dir.path().join("sample_generated.png");
	let transport = FakeTransport::new();
	for _ in 0..3 {
		transport.push_media(media_job_failed("flagged by moderation"));
	}
	let request = seedream_request()?;

	// -- Exec
	let res = generate_media(&transport, &request, &output_path).await;

	// -- Check
	match res {
		Err(Error::MediaAttemptsExhausted { attempts, last_error }) => {
			assert_eq!(attempts, 3);
			assert_eq!(last_error, "flagged by moderation");
		}
		other => panic!("expected MediaAttemptsExhausted, got {other:?}"),
	}
	assert_eq!(transport.post_count(), 3);

	Ok(())
}

#[tokio::test]
async fn test_invoker_video_rename_keeps_existing_file() -> Result<()> {
	// -- Setup & Fixtures
	let dir = tempfile::tempdir()?;
	let output_path = dir.path().join("sample_generated.mp4");
	let leftover = dir.path().join("sample_generated.webm");
	fs::write(&leftover, b"previous run")?;
	let transport = FakeTransport::new();
	transport.push_media(media_ok("https://cdn.test/result.webm?sig=abc"));
	let request = media_request("wavespeed-ai/wan-2.2/image-to-video")?;

	// -- Exec
	let outcome = generate_media(&transport, &request, &output_path).await?;

	// -- Check: the URL-driven rename lands next to, not on, the leftover
	assert_ne!(outcome.path, leftover);
	let name = outcome.path.file_name().unwrap().to_string_lossy().to_string();
	assert!(name.starts_with("sample_generated_"));
	assert!(name.ends_with(".webm"));
	assert_eq!(fs::read(&outcome.path)?, FETCHED_BYTES);
	assert_eq!(fs::read(&leftover)?, b"previous run");

	Ok(())
}

#[tokio::test]
async fn test_invoker_unrecognized_body_dumps_response() -> Result<()> {
	// -- Setup & Fixtures
	let dir = tempfile::tempdir()?;
	let output_path = dir.path().join("sample_generated.png");
	let transport = FakeTransport::new();
	// 2xx, no artifact field (e.g. an async job ticket instead of a result)
	transport.push_media(lorasmith::webc::WebResponse {
		status: 200,
		body: json!({ "data": { "id": "job-123", "status": "created" } }),
	});
	let request = seedream_request()?;

	// -- Exec
	let res = generate_media(&transport, &request, &output_path).await;

	// -- Check
	let dump_path = dir.path().join("sample_generated_response.json");
	assert!(matches!(res, Err(Error::UnexpectedResponseShape { dump_path: p }) if p == dump_path));
	let dump: serde_json::Value = serde_json::from_str(&fs::read_to_string(&dump_path)?)?;
	assert_eq!(dump, json!({ "id": "job-123", "status": "created" }));
	assert!(!output_path.exists());

	Ok(())
}

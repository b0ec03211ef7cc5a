use crate::adapter::WebRequestData;
use crate::config::ProviderProfile;
use crate::mediagen::{GenerationKind, ImageFamily};
use crate::Result;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as B64;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use value_ext::JsonValueExt;

pub const WAVESPEED_BASE_URL: &str = "https://api.wavespeed.ai/api/v3/";

/// Server-side rendering can take many minutes; the synchronous image-edit
/// call blocks for the whole generation.
pub const GENERATION_TIMEOUT: Duration = Duration::from_secs(3600);

/// The opaque request descriptor for one generation call.
/// Building it performs no I/O; execution belongs to the invoker.
#[derive(Debug, Clone)]
pub struct MediaRequestData {
	pub web: WebRequestData,
	pub kind: GenerationKind,
}

/// Build the provider request body for image-edit or video generation.
///
/// Image-edit payloads carry up to 3 images (2 identity + 1 scene) and run in
/// synchronous mode. Video payloads carry exactly 1 image (the scene only;
/// identity references are never sent for video) and run asynchronously.
pub fn to_media_request_data(
	profile: &ProviderProfile,
	api_key: &str,
	ref_images: &[Arc<[u8]>],
	sample_image: &[u8],
	prompt: &str,
) -> Result<MediaRequestData> {
	let model = &profile.media_model;
	let kind = GenerationKind::from_model(model);
	let url = format!("{WAVESPEED_BASE_URL}{model}");

	// Prompt newlines confuse the generation API; collapse them to spaces.
	let clean_prompt = prompt.replace(['\n', '\r'], " ");

	let payload = match kind {
		GenerationKind::ImageEdit(family) => {
			let mut images_b64: Vec<String> = ref_images.iter().take(2).map(|data| B64.encode(data)).collect();
			images_b64.push(B64.encode(sample_image));

			let mut payload = json!({
				"enable_base64_output": false,
				"enable_sync_mode": true,
				"images": images_b64,
				"prompt": clean_prompt,
			});

			match family {
				ImageFamily::Seedream => {
					payload.x_insert("size", profile.resolution.seedream_size())?;
				}
				ImageFamily::Generic => {
					payload.x_insert("resolution", profile.resolution.as_str())?;
				}
			}

			if !profile.output_format.is_empty() {
				payload.x_insert("output_format", profile.output_format.as_str())?;
			}

			payload
		}
		GenerationKind::Video => {
			json!({
				"enable_base64_output": false,
				"enable_sync_mode": false,
				"image": B64.encode(sample_image),
				"prompt": clean_prompt,
			})
		}
	};

	let headers = vec![("Authorization".to_string(), format!("Bearer {api_key}"))];

	Ok(MediaRequestData {
		web: WebRequestData {
			url,
			headers,
			payload,
			timeout: GENERATION_TIMEOUT,
		},
		kind,
	})
}

// region:    --- Tests

#[cfg(test)]
mod tests {
	use super::*;
	use crate::adapter::AdapterKind;
	use crate::mediagen::ResolutionTier;
	use crate::ModelIden;

	fn profile(media_model: &str, resolution: ResolutionTier) -> ProviderProfile {
		ProviderProfile {
			prompt: ModelIden::new(AdapterKind::Gemini, "gemini-2.5-flash"),
			caption: ModelIden::new(AdapterKind::OpenAI, "gpt-5.1"),
			media_model: media_model.to_string(),
			resolution,
			output_format: "png".to_string(),
		}
	}

	fn refs(count: usize) -> Vec<Arc<[u8]>> {
		(0..count).map(|i| Arc::from(vec![i as u8; 4])).collect()
	}

	#[test]
	fn test_image_edit_payload_image_count() {
		// n references -> n + 1 images (scene always last)
		for n in 0..=2 {
			let data =
				to_media_request_data(&profile("bytedance/seedream-v4", ResolutionTier::OneK), "k", &refs(n), &[9u8], "p")
					.unwrap();
			let images = data.web.payload["images"].as_array().unwrap();
			assert_eq!(images.len(), n + 1, "refs: {n}");
		}
	}

	#[test]
	fn test_video_payload_single_image() {
		let data = to_media_request_data(
			&profile("wavespeed-ai/wan-2.2/image-to-video", ResolutionTier::OneK),
			"k",
			&refs(2),
			&[9u8],
			"p",
		)
		.unwrap();

		assert!(data.kind.is_video());
		assert!(data.web.payload.get("images").is_none());
		assert!(data.web.payload.get("image").is_some());
		assert_eq!(data.web.payload["enable_sync_mode"], false);
	}

	#[test]
	fn test_seedream_size_vs_generic_resolution() {
		let seedream =
			to_media_request_data(&profile("bytedance/seedream-v4", ResolutionTier::TwoK), "k", &refs(1), &[9u8], "p")
				.unwrap();
		assert_eq!(seedream.web.payload["size"], "2048*2048");
		assert!(seedream.web.payload.get("resolution").is_none());

		let generic =
			to_media_request_data(&profile("google/nano-banana-pro", ResolutionTier::TwoK), "k", &refs(1), &[9u8], "p")
				.unwrap();
		assert_eq!(generic.web.payload["resolution"], "2k");
		assert!(generic.web.payload.get("size").is_none());
	}

	#[test]
	fn test_prompt_newlines_collapsed() {
		let data = to_media_request_data(
			&profile("bytedance/seedream-v4", ResolutionTier::OneK),
			"k",
			&refs(1),
			&[9u8],
			"line one\nline two\r\nline three",
		)
		.unwrap();
		assert_eq!(data.web.payload["prompt"], "line one line two  line three");
	}

	#[test]
	fn test_sync_mode_and_auth_header() {
		let data =
			to_media_request_data(&profile("bytedance/seedream-v4", ResolutionTier::OneK), "ws-key", &refs(1), &[9u8], "p")
				.unwrap();
		assert_eq!(data.web.payload["enable_sync_mode"], true);
		assert_eq!(data.web.headers[0], ("Authorization".to_string(), "Bearer ws-key".to_string()));
		assert!(data.web.url.starts_with(WAVESPEED_BASE_URL));
	}
}

// endregion: --- Tests

use crate::adapter::adapters::support::get_api_key;
use crate::adapter::{Adapter, DESCRIBE_TIMEOUT, ServiceTarget, WebRequestData};
use crate::chat::{DescribeRequest, DescribeResponse};
use crate::resolver::{AuthData, Endpoint};
use crate::webc::WebResponse;
use crate::{Error, ModelIden, Result};
use base64::Engine;
use base64::engine::general_purpose::STANDARD as B64;
use serde_json::{Value, json};

pub struct GeminiAdapter;

// curl \
//   -H 'Content-Type: application/json' \
//   -d '{"contents":[{"parts":[{"text":"Describe this scene"}]}]}' \
//   -X POST 'https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent?key=YOUR_API_KEY'

impl GeminiAdapter {
	pub const API_KEY_DEFAULT_ENV_NAME: &str = "GEMINI_API_KEY";
}

impl Adapter for GeminiAdapter {
	fn default_endpoint() -> Endpoint {
		const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/";
		Endpoint::from_static(BASE_URL)
	}

	fn default_auth() -> AuthData {
		AuthData::from_env(Self::API_KEY_DEFAULT_ENV_NAME)
	}

	fn get_service_url(model_iden: &ModelIden, endpoint: Endpoint) -> String {
		let base_url = endpoint.base_url();
		let model_name = &model_iden.model_name;
		format!("{base_url}models/{model_name}:generateContent")
	}

	fn to_web_request_data(target: ServiceTarget, describe_req: DescribeRequest) -> Result<WebRequestData> {
		let ServiceTarget { endpoint, auth, model } = target;

		// -- api_key
		let api_key = get_api_key(&auth, &model)?;

		// -- parts (instruction first, then identity refs, scene image last)
		let mut parts: Vec<Value> = Vec::with_capacity(1 + describe_req.images.len());
		parts.push(json!({ "text": describe_req.instruction }));
		for image in &describe_req.images {
			parts.push(json!({
				"inline_data": {
					"mime_type": image.mime_type,
					"data": B64.encode(&image.data),
				}
			}));
		}

		let payload = json!({
			"contents": [{ "parts": parts }],
		});

		// -- headers (empty for gemini, since API_KEY is in url)
		let headers = vec![];

		// NOTE: Somehow, Google decided to put the API key in the URL.
		//       This should be considered an antipattern from a security point of view.
		let url = Self::get_service_url(&model, endpoint);
		let url = format!("{url}?key={api_key}");

		Ok(WebRequestData {
			url,
			headers,
			payload,
			timeout: DESCRIBE_TIMEOUT,
		})
	}

	fn to_describe_response(model_iden: ModelIden, web_response: WebResponse) -> Result<DescribeResponse> {
		let WebResponse { body, .. } = web_response;

		// If the body has an `error` property, then it is assumed to be an error.
		if let Some(error) = body.get("error") {
			return Err(Error::ProviderResponseError {
				model_iden,
				detail: error.to_string(),
			});
		}

		let first_candidate = body.get("candidates").and_then(|c| c.get(0));

		let truncated = first_candidate
			.and_then(|c| c.get("finishReason"))
			.and_then(Value::as_str)
			.is_some_and(|reason| reason == "MAX_TOKENS");

		// Concatenate all text parts of the first candidate.
		let content = first_candidate
			.and_then(|c| c.get("content"))
			.and_then(|c| c.get("parts"))
			.and_then(Value::as_array)
			.map(|parts| {
				parts
					.iter()
					.filter_map(|part| part.get("text").and_then(Value::as_str))
					.collect::<Vec<_>>()
					.join("")
			})
			.filter(|text| !text.is_empty());

		Ok(DescribeResponse {
			content,
			truncated,
			model_iden,
		})
	}
}

// region:    --- Tests

#[cfg(test)]
mod tests {
	use super::*;
	use crate::adapter::AdapterKind;

	fn target() -> ServiceTarget {
		ServiceTarget {
			endpoint: GeminiAdapter::default_endpoint(),
			auth: AuthData::from_single("key-123"),
			model: ModelIden::new(AdapterKind::Gemini, "gemini-2.5-flash"),
		}
	}

	#[test]
	fn test_gemini_request_parts_count() {
		let req = DescribeRequest::new("describe", 35_000)
			.append_image(crate::chat::ImagePart::jpeg(vec![1u8, 2]))
			.append_image(crate::chat::ImagePart::jpeg(vec![3u8]));

		let data = GeminiAdapter::to_web_request_data(target(), req).unwrap();

		let parts = data.payload["contents"][0]["parts"].as_array().unwrap();
		// instruction + 2 images
		assert_eq!(parts.len(), 3);
		assert!(data.url.ends_with("gemini-2.5-flash:generateContent?key=key-123"));
		assert!(data.headers.is_empty());
	}

	#[test]
	fn test_gemini_response_truncation_flag() {
		let body = serde_json::json!({
			"candidates": [{
				"content": { "parts": [{ "text": "a scene" }] },
				"finishReason": "MAX_TOKENS",
			}]
		});
		let res = GeminiAdapter::to_describe_response(
			ModelIden::new(AdapterKind::Gemini, "gemini-2.5-flash"),
			WebResponse { status: 200, body },
		)
		.unwrap();

		assert_eq!(res.content.as_deref(), Some("a scene"));
		assert!(res.truncated);
	}
}

// endregion: --- Tests

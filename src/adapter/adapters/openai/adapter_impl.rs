use crate::adapter::adapters::support::get_api_key;
use crate::adapter::{Adapter, DESCRIBE_TIMEOUT, ServiceTarget, WebRequestData};
use crate::chat::{DescribeRequest, DescribeResponse};
use crate::resolver::{AuthData, Endpoint};
use crate::webc::WebResponse;
use crate::{Error, ModelIden, Result};
use base64::Engine;
use base64::engine::general_purpose::STANDARD as B64;
use serde_json::{Value, json};
use value_ext::JsonValueExt;

pub struct OpenAIAdapter;

impl OpenAIAdapter {
	pub const API_KEY_DEFAULT_ENV_NAME: &str = "OPENAI_API_KEY";
}

impl Adapter for OpenAIAdapter {
	fn default_endpoint() -> Endpoint {
		const BASE_URL: &str = "https://api.openai.com/v1/";
		Endpoint::from_static(BASE_URL)
	}

	fn default_auth() -> AuthData {
		AuthData::from_env(Self::API_KEY_DEFAULT_ENV_NAME)
	}

	fn get_service_url(_model_iden: &ModelIden, endpoint: Endpoint) -> String {
		let base_url = endpoint.base_url();
		format!("{base_url}chat/completions")
	}

	fn to_web_request_data(target: ServiceTarget, describe_req: DescribeRequest) -> Result<WebRequestData> {
		Self::util_to_web_request_data(target, describe_req)
	}

	fn to_describe_response(model_iden: ModelIden, web_response: WebResponse) -> Result<DescribeResponse> {
		Self::util_to_describe_response(model_iden, web_response)
	}
}

/// Support functions for `OpenAIAdapter`, also used by the compatible
/// adapters (xAI rides this logic with its own endpoint).
impl OpenAIAdapter {
	pub(in crate::adapter) fn util_to_web_request_data(
		target: ServiceTarget,
		describe_req: DescribeRequest,
	) -> Result<WebRequestData> {
		let ServiceTarget { endpoint, auth, model } = target;

		// -- api_key
		let api_key = get_api_key(&auth, &model)?;
		let url = Self::get_service_url(&model, endpoint);

		// -- content parts (instruction first, images as data URLs, scene image last)
		let mut content: Vec<Value> = Vec::with_capacity(1 + describe_req.images.len());
		content.push(json!({ "type": "text", "text": describe_req.instruction }));
		for image in &describe_req.images {
			let b64 = B64.encode(&image.data);
			content.push(json!({
				"type": "image_url",
				"image_url": { "url": format!("data:{};base64,{b64}", image.mime_type) },
			}));
		}

		let mut payload = json!({
			"model": model.model_name.as_ref(),
			"messages": [{ "role": "user", "content": content }],
		});

		// -- Output-size limit field
		// The generation-5 class families renamed `max_tokens`; the rule stays
		// inside this adapter and never leaks to callers.
		let max_tokens_field = Self::max_tokens_field(&model.model_name);
		payload.x_insert(max_tokens_field, describe_req.max_output_tokens)?;

		let headers = vec![("Authorization".to_string(), format!("Bearer {api_key}"))];

		Ok(WebRequestData {
			url,
			headers,
			payload,
			timeout: DESCRIBE_TIMEOUT,
		})
	}

	pub(in crate::adapter) fn util_to_describe_response(
		model_iden: ModelIden,
		web_response: WebResponse,
	) -> Result<DescribeResponse> {
		let WebResponse { body, .. } = web_response;

		if let Some(error) = body.get("error") {
			return Err(Error::ProviderResponseError {
				model_iden,
				detail: error.to_string(),
			});
		}

		let first_choice = body.get("choices").and_then(|c| c.get(0));

		let truncated = first_choice
			.and_then(|c| c.get("finish_reason"))
			.and_then(Value::as_str)
			.is_some_and(|reason| reason == "length");

		let content = first_choice
			.and_then(|c| c.get("message"))
			.and_then(|m| m.get("content"))
			.and_then(Value::as_str)
			.map(str::to_string)
			.filter(|text| !text.is_empty());

		Ok(DescribeResponse {
			content,
			truncated,
			model_iden,
		})
	}

	/// `max_completion_tokens` for the gpt-5 / gpt-4o families (and grok, which
	/// rides this adapter); `max_tokens` for legacy models.
	pub(in crate::adapter) fn max_tokens_field(model_name: &str) -> &'static str {
		let model_name = model_name.to_lowercase();
		if model_name.contains("gpt-5") || model_name.contains("gpt-4o") || model_name.contains("grok") {
			"max_completion_tokens"
		} else {
			"max_tokens"
		}
	}
}

// region:    --- Tests


// endregion: --- Tests

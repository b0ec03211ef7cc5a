use crate::adapter::adapters::openai::OpenAIAdapter;
use crate::adapter::{Adapter, ServiceTarget, WebRequestData};
use crate::chat::{DescribeRequest, DescribeResponse};
use crate::resolver::{AuthData, Endpoint};
use crate::webc::WebResponse;
use crate::{ModelIden, Result};

/// xAI (Grok) exposes an OpenAI-compatible chat completions API, so this
/// adapter delegates the payload/response logic to `OpenAIAdapter` and only
/// owns its endpoint and credential.
pub struct XaiAdapter;

impl XaiAdapter {
	pub const API_KEY_DEFAULT_ENV_NAME: &str = "XAI_API_KEY";
}

impl Adapter for XaiAdapter {
	fn default_endpoint() -> Endpoint {
		const BASE_URL: &str = "https://api.x.ai/v1/";
		Endpoint::from_static(BASE_URL)
	}

	fn default_auth() -> AuthData {
		AuthData::from_env(Self::API_KEY_DEFAULT_ENV_NAME)
	}

	fn get_service_url(model_iden: &ModelIden, endpoint: Endpoint) -> String {
		OpenAIAdapter::get_service_url(model_iden, endpoint)
	}

	fn to_web_request_data(target: ServiceTarget, describe_req: DescribeRequest) -> Result<WebRequestData> {
		OpenAIAdapter::util_to_web_request_data(target, describe_req)
	}

	fn to_describe_response(model_iden: ModelIden, web_response: WebResponse) -> Result<DescribeResponse> {
		OpenAIAdapter::util_to_describe_response(model_iden, web_response)
	}
}

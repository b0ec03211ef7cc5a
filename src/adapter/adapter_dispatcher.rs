use crate::adapter::adapters::gemini::GeminiAdapter;
use crate::adapter::adapters::openai::OpenAIAdapter;
use crate::adapter::adapters::xai::XaiAdapter;
use crate::adapter::{Adapter, AdapterKind, ServiceTarget, WebRequestData};
use crate::chat::{DescribeRequest, DescribeResponse};
use crate::resolver::{AuthData, Endpoint};
use crate::webc::WebResponse;
use crate::{ModelIden, Result};

/// Static dispatch over the adapter implementations, keyed by `AdapterKind`.
pub struct AdapterDispatcher;

impl AdapterDispatcher {
	pub fn default_endpoint(kind: AdapterKind) -> Endpoint {
		match kind {
			AdapterKind::Gemini => GeminiAdapter::default_endpoint(),
			AdapterKind::OpenAI => OpenAIAdapter::default_endpoint(),
			AdapterKind::Xai => XaiAdapter::default_endpoint(),
		}
	}

	pub fn default_auth(kind: AdapterKind) -> AuthData {
		match kind {
			AdapterKind::Gemini => GeminiAdapter::default_auth(),
			AdapterKind::OpenAI => OpenAIAdapter::default_auth(),
			AdapterKind::Xai => XaiAdapter::default_auth(),
		}
	}

	pub fn to_web_request_data(target: ServiceTarget, describe_req: DescribeRequest) -> Result<WebRequestData> {
		match target.model.adapter_kind {
			AdapterKind::Gemini => GeminiAdapter::to_web_request_data(target, describe_req),
			AdapterKind::OpenAI => OpenAIAdapter::to_web_request_data(target, describe_req),
			AdapterKind::Xai => XaiAdapter::to_web_request_data(target, describe_req),
		}
	}

	pub fn to_describe_response(model_iden: ModelIden, web_response: WebResponse) -> Result<DescribeResponse> {
		match model_iden.adapter_kind {
			AdapterKind::Gemini => GeminiAdapter::to_describe_response(model_iden, web_response),
			AdapterKind::OpenAI => OpenAIAdapter::to_describe_response(model_iden, web_response),
			AdapterKind::Xai => XaiAdapter::to_describe_response(model_iden, web_response),
		}
	}
}

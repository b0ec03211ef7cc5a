use crate::chat::{DescribeRequest, DescribeResponse};
use crate::resolver::{AuthData, Endpoint};
use crate::webc::WebResponse;
use crate::{ModelIden, Result};
use serde_json::Value;
use std::time::Duration;

/// Timeout for describe/caption posts. Text/vision calls are far quicker than
/// media generation; five minutes is generous.
pub const DESCRIBE_TIMEOUT: Duration = Duration::from_secs(300);

pub trait Adapter {
	fn default_auth() -> AuthData;

	fn default_endpoint() -> Endpoint;

	/// The service URL for this adapter for the given model.
	fn get_service_url(model_iden: &ModelIden, endpoint: Endpoint) -> String;

	/// To be implemented by Adapters.
	fn to_web_request_data(service_target: ServiceTarget, describe_req: DescribeRequest) -> Result<WebRequestData>;

	/// To be implemented by Adapters.
	fn to_describe_response(model_iden: ModelIden, web_response: WebResponse) -> Result<DescribeResponse>;
}

// region:    --- ServiceTarget

/// A `ServiceTarget` represents the destination and necessary details for making a service call.
///
/// - `endpoint`: The specific service endpoint to be contacted.
/// - `auth`: The authentication data required to access the service.
/// - `model`: The identifier of the model associated with the service call.
#[derive(Debug, Clone)]
pub struct ServiceTarget {
	pub endpoint: Endpoint,
	pub auth: AuthData,
	pub model: ModelIden,
}

// endregion: --- ServiceTarget

// region:    --- WebRequestData

#[derive(Debug, Clone)]
pub struct WebRequestData {
	pub url: String,
	pub headers: Vec<(String, String)>,
	pub payload: Value,
	pub timeout: Duration,
}

// endregion: --- WebRequestData

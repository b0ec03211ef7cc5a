//! The adapter module translates "describe this scene" / "caption this image"
//! requests into provider-specific payloads and normalizes the heterogeneous
//! response shapes back into a plain string.

// region:    --- Modules

mod adapter_dispatcher;
mod adapter_kind;
mod adapter_types;
mod adapters;

pub use adapter_dispatcher::*;
pub use adapter_kind::*;
pub use adapter_types::*;

// endregion: --- Modules

use crate::chat::DescribeRequest;
use crate::texts::tr;
use crate::webc::Transport;
use crate::{Error, Result};
use tracing::warn;

/// Execute one describe/caption call: build the provider request, post it,
/// and normalize the response to a text string.
///
/// Single attempt, no retry; text/vision calls fail rarely enough that the
/// caller decides what a failure means. An empty or truncated response is NOT
/// a hard failure here: a warning is logged and `""` is returned.
pub async fn exec_describe<T: Transport>(
	transport: &T,
	target: ServiceTarget,
	describe_req: DescribeRequest,
) -> Result<String> {
	let model_iden = target.model.clone();

	let web_req = AdapterDispatcher::to_web_request_data(target, describe_req)?;
	let web_res = transport.do_post(&web_req).await?;

	if !(200..300).contains(&web_res.status) {
		return Err(Error::ProviderResponseError {
			model_iden,
			detail: format!("HTTP {}: {}", web_res.status, web_res.body_detail()),
		});
	}

	let res = AdapterDispatcher::to_describe_response(model_iden.clone(), web_res)?;

	if res.truncated {
		warn!("{} (model: {model_iden})", tr("response_truncated"));
	}

	match res.content {
		Some(text) if !text.trim().is_empty() => Ok(text.trim().to_string()),
		_ => {
			warn!("{} (model: {model_iden})", tr("empty_describe_content"));
			Ok(String::new())
		}
	}
}

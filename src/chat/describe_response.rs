use crate::ModelIden;

/// Normalized result of a describe/caption call, independent of the
/// provider's response shape.
#[derive(Debug, Clone)]
pub struct DescribeResponse {
	/// The text content, if the provider returned any.
	pub content: Option<String>,
	/// True when the provider reported the output was cut off by the
	/// output-size limit (`finish_reason: length` / `MAX_TOKENS`).
	/// Surfaced distinctly from "no content" in diagnostics.
	pub truncated: bool,
	pub model_iden: ModelIden,
}

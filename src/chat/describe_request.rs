use std::sync::Arc;

/// One inline image of a describe request.
/// Image bytes are shared (`Arc`) because the identity references are reused
/// across every job of a run.
#[derive(Debug, Clone)]
pub struct ImagePart {
	pub mime_type: &'static str,
	pub data: Arc<[u8]>,
}

impl ImagePart {
	/// The original tool reads arbitrary image files but always transmits
	/// them as `image/jpeg` data; providers sniff the real format.
	pub fn jpeg(data: impl Into<Arc<[u8]>>) -> Self {
		Self {
			mime_type: "image/jpeg",
			data: data.into(),
		}
	}
}

/// A single-turn vision request: one instruction plus the ordered images.
///
/// Image order is part of the contract: up to two identity references first,
/// the scene/sample image always last.
#[derive(Debug, Clone)]
pub struct DescribeRequest {
	pub instruction: String,
	pub images: Vec<ImagePart>,
	pub max_output_tokens: u32,
}

/// Constructors
impl DescribeRequest {
	pub fn new(instruction: impl Into<String>, max_output_tokens: u32) -> Self {
		Self {
			instruction: instruction.into(),
			images: Vec::new(),
			max_output_tokens,
		}
	}

	#[must_use]
	pub fn append_image(mut self, image: ImagePart) -> Self {
		self.images.push(image);
		self
	}
}

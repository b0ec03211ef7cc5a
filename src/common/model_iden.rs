use crate::adapter::AdapterKind;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// The model identifier, combining the `AdapterKind` and the model name.
/// Designed to be efficiently clonable.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ModelIden {
	pub adapter_kind: AdapterKind,
	pub model_name: Arc<str>,
}

/// Constructors
impl ModelIden {
	pub fn new(adapter_kind: AdapterKind, model_name: impl Into<Arc<str>>) -> Self {
		Self {
			adapter_kind,
			model_name: model_name.into(),
		}
	}
}

impl core::fmt::Display for ModelIden {
	fn fmt(&self, fmt: &mut core::fmt::Formatter) -> core::fmt::Result {
		write!(fmt, "{}:{}", self.adapter_kind.as_lower_str(), self.model_name)
	}
}

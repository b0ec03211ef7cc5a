use crate::{Error, ModelIden, Result};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// The authentication data for a provider call: either a literal key
/// (typically from the run configuration) or an environment variable name
/// to resolve at call time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AuthData {
	FromEnv(String),
	Key(Arc<str>),
}

/// Constructors
impl AuthData {
	pub fn from_env(env_name: impl Into<String>) -> Self {
		Self::FromEnv(env_name.into())
	}

	pub fn from_single(value: impl Into<Arc<str>>) -> Self {
		Self::Key(value.into())
	}
}

/// Resolvers
impl AuthData {
	/// Resolve the key value. A blank key is treated as absent so that an
	/// empty string in the config file fails loudly before any network call.
	pub fn single_key_value(&self, model_iden: &ModelIden) -> Result<String> {
		match self {
			Self::FromEnv(env_name) => match std::env::var(env_name) {
				Ok(value) if !value.trim().is_empty() => Ok(value),
				_ => Err(Error::ApiKeyEnvNotFound {
					env_name: env_name.clone(),
				}),
			},
			Self::Key(key) => {
				if key.trim().is_empty() {
					Err(Error::NoAuthData {
						model_iden: model_iden.clone(),
					})
				} else {
					Ok(key.to_string())
				}
			}
		}
	}
}

//! Support types and functions for the various adapter implementations.

use crate::resolver::AuthData;
use crate::{ModelIden, Result};

pub fn get_api_key(auth: &AuthData, model_iden: &ModelIden) -> Result<String> {
	auth.single_key_value(model_iden)
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Generic success envelope returned by submit-style endpoints.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct SuccessDto {
    pub success: bool,
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub msg: String,
}

/// Envelope for catalog reads: `{"msg": "ok", "result": ...}`
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ResultDto<T> {
    pub msg: String,
    pub result: T,
}

impl<T> ResultDto<T> {
    pub fn ok(result: T) -> Self {
        Self {
            msg: "ok".to_string(),
            result,
        }
    }
}

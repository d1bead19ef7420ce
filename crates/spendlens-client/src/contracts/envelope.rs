use serde::Serialize;
use serde_json::{Map, Value};

use crate::API_VERSION;
use crate::error::{ClientError, ClientResult, INTERNAL_ERROR_MESSAGE};

#[derive(Debug, Clone, Serialize)]
pub struct SuccessEnvelope {
    pub ok: bool,
    pub action: String,
    pub version: String,
    pub data: Value,
}

#[derive(Debug, Clone, Serialize)]
pub struct FailureEnvelope {
    pub ok: bool,
    pub error: ErrorContract,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorContract {
    pub code: String,
    pub message: String,
    pub recovery_steps: Vec<String>,
}

/// Status plus JSON body, as served by `GET /api`.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

pub fn success<T>(action: &str, data: T) -> ClientResult<SuccessEnvelope>
where
    T: Serialize,
{
    let json_data = serde_json::to_value(data)
        .map_err(|err| ClientError::internal_serialization(&err.to_string()))?;
    Ok(SuccessEnvelope {
        ok: true,
        action: action.to_string(),
        version: API_VERSION.to_string(),
        data: json_data,
    })
}

pub fn failure_from_error(error: &ClientError) -> FailureEnvelope {
    FailureEnvelope {
        ok: false,
        error: ErrorContract {
            code: error.code.clone(),
            message: error.message.clone(),
            recovery_steps: error.recovery_steps.clone(),
        },
        data: error.data.clone(),
    }
}

pub fn api_success(envelope: SuccessEnvelope) -> ApiResponse {
    ApiResponse {
        status: 200,
        body: envelope.data,
    }
}

/// Internal faults collapse to a fixed message; client errors keep their
/// message and any `errors` detail.
pub fn api_failure(error: &ClientError) -> ApiResponse {
    let mut body = Map::new();
    if error.is_internal() {
        body.insert(
            "message".to_string(),
            Value::String(INTERNAL_ERROR_MESSAGE.to_string()),
        );
    } else {
        body.insert("message".to_string(), Value::String(error.message.clone()));
        if let Some(errors) = error.data.as_ref().and_then(|data| data.get("errors")) {
            body.insert("errors".to_string(), errors.clone());
        }
    }

    ApiResponse {
        status: error.status_code(),
        body: Value::Object(body),
    }
}

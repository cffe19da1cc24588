use axum::Json;
use serde_json::{Value, json};

/// Simple endpoint to test if the API is working.
pub async fn test() -> Json<Value> {
    Json(json!({ "status": "API is working" }))
}

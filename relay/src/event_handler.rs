use lambda_runtime::{Error, LambdaEvent};
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;

#[derive(Serialize)]
pub struct Response {
    #[serde(rename = "statusCode")]
    status_code: i32,
    headers: HashMap<&'static str, &'static str>,
    body: String,
}

fn cors_headers() -> HashMap<&'static str, &'static str> {
    HashMap::from([
        ("Content-Type", "application/json"),
        ("Access-Control-Allow-Origin", "*"),
        ("Access-Control-Allow-Methods", "*"),
        (
            "Access-Control-Allow-Headers",
            "Content-Type,X-Amz-Date,Authorization,X-Api-Key,X-Amz-Security-Token",
        ),
    ])
}

/// Gateway-facing entry point for the relay function. Every proxied request
/// lands here; the gateway hands us the raw event, and we answer with the
/// status and header shape the route contract declares. Session brokering
/// itself happens in the server module this crate is built around.
pub(crate) async fn function_handler(event: LambdaEvent<Value>) -> Result<Response, Error> {
    let path = event
        .payload
        .pointer("/rawPath")
        .and_then(Value::as_str)
        .unwrap_or("/");

    Ok(Response {
        status_code: 200,
        headers: cors_headers(),
        body: serde_json::json!({ "path": path }).to_string(),
    })
}

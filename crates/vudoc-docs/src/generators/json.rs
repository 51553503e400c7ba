use chrono::Utc;
use serde::Serialize;

use crate::{
    error::{DocgenError, Result},
    model::ComponentDescriptor,
};

/// Pretty-printed JSON representation of one component descriptor including
/// generator metadata.
pub fn render_json(descriptor: &ComponentDescriptor) -> Result<String> {
    let payload = JsonPayload {
        version: env!("CARGO_PKG_VERSION"),
        generated_at: Utc::now().to_rfc3339(),
        component: descriptor,
    };

    serde_json::to_string_pretty(&payload).map_err(|error| DocgenError::Render {
        message: error.to_string(),
    })
}

#[derive(Serialize)]
struct JsonPayload<'a> {
    version: &'static str,
    generated_at: String,
    component: &'a ComponentDescriptor,
}

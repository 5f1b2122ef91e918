use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("reservation service request failed: {message}")]
    RemoteRequest {
        message: String,
        body: Option<String>,
    },

    #[error("could not parse reservation service response as JSON: {message}")]
    ResponseParse { message: String, body: String },

    #[error("no tables found in reservation service response")]
    NoTablesFound { response: Value },
}

impl FetchError {
    // Raw server text to show alongside the error, when any was captured.
    pub fn server_body(&self) -> Option<String> {
        match self {
            FetchError::RemoteRequest { body, .. } => body.clone(),
            FetchError::ResponseParse { body, .. } => Some(body.clone()),
            FetchError::NoTablesFound { response } => {
                serde_json::to_string_pretty(response).ok()
            }
        }
    }
}

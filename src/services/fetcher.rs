use serde_json::Value;

use crate::errors::FetchError;
use crate::models::{ReserveQuery, TableDescriptor};
use crate::services::extract;

pub struct TableFetcher {
    endpoint: String,
    client: reqwest::Client,
}

impl TableFetcher {
    pub fn new(endpoint: String) -> Self {
        Self {
            endpoint,
            client: reqwest::Client::new(),
        }
    }

    // Sends one availability request and extracts the tables from whatever
    // the service answers. The parsed response is returned alongside the
    // descriptors so callers can show the raw payload when nothing was found.
    pub async fn fetch(
        &self,
        query: &ReserveQuery,
    ) -> Result<(Vec<TableDescriptor>, Value), FetchError> {
        let resp = self
            .client
            .post(&self.endpoint)
            .json(query)
            .send()
            .await
            .map_err(|err| FetchError::RemoteRequest {
                message: err.to_string(),
                body: None,
            })?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|err| FetchError::RemoteRequest {
                message: err.to_string(),
                body: None,
            })?;

        if !status.is_success() {
            return Err(FetchError::RemoteRequest {
                message: format!("server returned {status}"),
                body: Some(body),
            });
        }

        let data: Value =
            serde_json::from_str(&body).map_err(|err| FetchError::ResponseParse {
                message: err.to_string(),
                body: body.clone(),
            })?;

        let tables = match extract::known_shapes(&data) {
            Some(tables) => tables,
            None => {
                tracing::warn!("response did not match a known shape, searching whole document");
                println!("{}", serde_json::to_string_pretty(&data).unwrap_or(body));
                extract::deep_search(&data)
            }
        };

        Ok((tables, data))
    }
}

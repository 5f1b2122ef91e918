use std::env;

const DEFAULT_ENDPOINT: &str = "https://app.remarked.ru/api/v1/ApiReservesWidget";
const DEFAULT_TOKEN: &str = "7608d1fa196c7b4f340dd9d0c3fbffc1";
const DEFAULT_OUTPUT_PATH: &str = "tables-api-extract.json";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub endpoint_url: String,
    pub default_token: String,
    pub output_path: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            endpoint_url: env::var("RESERVES_API_URL")
                .unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string()),
            default_token: env::var("RESERVES_API_TOKEN")
                .unwrap_or_else(|_| DEFAULT_TOKEN.to_string()),
            output_path: env::var("TABLES_OUTPUT_PATH")
                .unwrap_or_else(|_| DEFAULT_OUTPUT_PATH.to_string()),
        }
    }
}

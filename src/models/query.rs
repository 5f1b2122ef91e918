use serde::Serialize;
use uuid::Uuid;

const METHOD: &str = "GetTimesWithTables";

// Request body for the reserves widget endpoint. Built fresh for every call;
// the token travels inside the body, not in a header.
#[derive(Debug, Clone, Serialize)]
pub struct ReserveQuery {
    pub method: String,
    pub token: String,
    pub request_id: String,
    pub reserve_date: String,
    pub guests_count: u32,
}

impl ReserveQuery {
    pub fn new(reserve_date: &str, guests_count: u32, token: &str) -> Self {
        Self::with_request_id(reserve_date, guests_count, token, Uuid::new_v4().to_string())
    }

    pub fn with_request_id(
        reserve_date: &str,
        guests_count: u32,
        token: &str,
        request_id: String,
    ) -> Self {
        Self {
            method: METHOD.to_string(),
            token: token.to_string(),
            request_id,
            reserve_date: reserve_date.to_string(),
            guests_count,
        }
    }
}

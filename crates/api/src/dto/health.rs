use serde::Serialize;

#[derive(Serialize, Debug, Clone)]
pub struct IndexResponse {
    pub status: &'static str,
    pub message: &'static str,
}

#[derive(Serialize, Debug, Clone)]
pub struct TestResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub timestamp: String,
}

#[derive(Serialize, Debug, Clone)]
pub struct HealthResponse {
    pub status: &'static str,
    pub blacklist_size: usize,
    pub timestamp: String,
}

#[derive(Serialize, Debug, Clone)]
pub struct NotFoundResponse {
    pub error: &'static str,
    pub message: String,
}

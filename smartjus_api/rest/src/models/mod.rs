use serde::Serialize;

pub mod lead;

#[derive(Serialize)]
pub struct ApiError {
    pub success: bool,
    pub error: &'static str,
}

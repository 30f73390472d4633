use serde::Serialize;

pub mod contact;

/// Response contract of the contact endpoint.
#[derive(Debug, Serialize)]
pub struct ApiContactResponse {
    pub success: bool,
    pub message: &'static str,
}

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use folio_core_contact_contracts::ContactService;
use tracing::error;

use crate::models::{
    contact::{ApiContactMessage, ContactMessageRejection},
    ApiContactResponse,
};

pub fn router(service: Arc<impl ContactService>) -> Router<()> {
    Router::new()
        .route("/api/contact", routing::post(send_message))
        .with_state(service)
}

async fn send_message(
    service: State<Arc<impl ContactService>>,
    Json(message): Json<ApiContactMessage>,
) -> Response {
    let message = match message.try_into() {
        Ok(message) => message,
        Err(ContactMessageRejection::MissingField) => {
            return response(StatusCode::BAD_REQUEST, false, "All fields are required");
        }
        Err(ContactMessageRejection::InvalidEmail) => {
            return response(
                StatusCode::BAD_REQUEST,
                false,
                "Please provide a valid email address",
            );
        }
    };

    match service.send_message(message).await {
        Ok(()) => response(
            StatusCode::OK,
            true,
            "Message sent successfully! Thank you for reaching out.",
        ),
        // transport details are logged but never leak to the caller
        Err(err) => {
            error!("Failed to send contact message: {err}");
            response(
                StatusCode::INTERNAL_SERVER_ERROR,
                false,
                "Failed to send message. Please try again later.",
            )
        }
    }
}

fn response(code: StatusCode, success: bool, message: &'static str) -> Response {
    (code, Json(ApiContactResponse { success, message })).into_response()
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;
    use folio_core_contact_contracts::{ContactSendMessageError, MockContactService};
    use folio_models::contact::{ContactMessage, ContactMessageAuthor};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[tokio::test]
    async fn ok() {
        // Arrange
        let service = MockContactService::new().with_send_message(contact_message(), Ok(()));

        // Act
        let response = send_message(State(Arc::new(service)), Json(api_message())).await;

        // Assert
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({
                "success": true,
                "message": "Message sent successfully! Thank you for reaching out."
            })
        );
    }

    #[tokio::test]
    async fn missing_field() {
        // Arrange: no expectations, the service must not be called
        let service = MockContactService::new();

        let mut message = api_message();
        message.subject = " ".into();

        // Act
        let response = send_message(State(Arc::new(service)), Json(message)).await;

        // Assert
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({"success": false, "message": "All fields are required"})
        );
    }

    #[tokio::test]
    async fn invalid_email() {
        // Arrange
        let service = MockContactService::new();

        let mut message = api_message();
        message.email = "noatsign.com".into();

        // Act
        let response = send_message(State(Arc::new(service)), Json(message)).await;

        // Assert
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({"success": false, "message": "Please provide a valid email address"})
        );
    }

    #[tokio::test]
    async fn send_fails() {
        // Arrange
        let service = MockContactService::new()
            .with_send_message(contact_message(), Err(ContactSendMessageError::Send));

        // Act
        let response = send_message(State(Arc::new(service)), Json(api_message())).await;

        // Assert
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({"success": false, "message": "Failed to send message. Please try again later."})
        );
    }

    #[tokio::test]
    async fn internal_error() {
        // Arrange
        let service = MockContactService::new().with_send_message(
            contact_message(),
            Err(ContactSendMessageError::Other(anyhow!("boom"))),
        );

        // Act
        let response = send_message(State(Arc::new(service)), Json(api_message())).await;

        // Assert
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    fn api_message() -> ApiContactMessage {
        ApiContactMessage {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            subject: "Hello".into(),
            message: "Hi there".into(),
        }
    }

    fn contact_message() -> ContactMessage {
        ContactMessage {
            author: ContactMessageAuthor {
                name: "Jane Doe".try_into().unwrap(),
                email: "jane@example.com".parse().unwrap(),
            },
            subject: "Hello".try_into().unwrap(),
            content: "Hi there".try_into().unwrap(),
        }
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }
}

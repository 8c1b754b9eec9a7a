use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use ticket_board::BoardError;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("board error: {0}")]
    Board(#[from] BoardError),

    #[error("store error: {0}")]
    Store(#[from] ticket_store::StoreError),

    #[error("type error: {0}")]
    Type(#[from] ticket_types::TypeError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) | Self::Type(_) => StatusCode::BAD_REQUEST,
            Self::Board(BoardError::Closed | BoardError::StreamTruncated) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::Board(_) => StatusCode::BAD_REQUEST,
            Self::Store(_) | Self::Config(_) | Self::Io(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status == StatusCode::BAD_REQUEST {
            tracing::debug!("rejecting request: {self}");
            (status, "400 Bad request").into_response()
        } else {
            tracing::warn!("request failed: {self}");
            (status, "500 Internal server error").into_response()
        }
    }
}

pub type ServerResult<T> = Result<T, ServerError>;

#[cfg(test)]
mod tests {
    use super::*;
    use ticket_types::TicketId;

    #[test]
    fn client_errors_are_bad_request() {
        assert_eq!(
            ServerError::from(BoardError::Duplicate(TicketId::new(1))).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ServerError::BadRequest("x".into()).status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn closed_board_is_server_error() {
        assert_eq!(
            ServerError::from(BoardError::Closed).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}

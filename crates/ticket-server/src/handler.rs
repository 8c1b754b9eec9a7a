use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use serde::Deserialize;

use ticket_board::BoardHandle;
use ticket_types::{CommandKind, Ticket, TicketId};

use crate::error::{ServerError, ServerResult};

const JSON: [(header::HeaderName, &str); 1] = [(header::CONTENT_TYPE, "application/json")];

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct GetQuery {
    pub id: Option<String>,
    pub op: Option<String>,
}

fn decode_ticket(body: &[u8]) -> ServerResult<Ticket> {
    Ticket::from_json_bytes(body).map_err(ServerError::from)
}

/// `POST /add`: store a new ticket.
pub async fn add_handler(State(board): State<BoardHandle>, body: Bytes) -> ServerResult<StatusCode> {
    let ticket = decode_ticket(&body)?;
    let id = ticket.id;
    board.add(ticket).await?;
    tracing::info!(%id, "added ticket");
    Ok(StatusCode::OK)
}

/// `GET /list`: every ticket, JSON objects back to back with no enclosing
/// array.
pub async fn list_handler(
    State(board): State<BoardHandle>,
    Query(query): Query<ListQuery>,
) -> ServerResult<impl IntoResponse> {
    if query.id.is_some_and(|id| !id.is_empty()) {
        return Err(ServerError::BadRequest("list takes no id".into()));
    }

    let mut stream = board.list_stream().await?;
    let mut body = Vec::new();
    while let Some(ticket) = stream.next().await? {
        body.extend(ticket.to_json_bytes()?);
    }
    tracing::debug!(bytes = body.len(), "sending ticket list");
    Ok((JSON, body))
}

/// `POST /list`: replace the mutable fields of an existing ticket.
pub async fn modify_handler(
    State(board): State<BoardHandle>,
    body: Bytes,
) -> ServerResult<StatusCode> {
    let ticket = decode_ticket(&body)?;
    let id = ticket.id;
    board.modify(ticket).await?;
    tracing::info!(%id, "modified ticket");
    Ok(StatusCode::OK)
}

/// `GET /get?id=<int64>` fetches one ticket; `GET /get?op=export` and
/// `GET /get?op=stat` trigger the fire-and-forget commands.
pub async fn get_handler(
    State(board): State<BoardHandle>,
    Query(query): Query<GetQuery>,
) -> ServerResult<axum::response::Response> {
    if let Some(op) = query.op {
        let kind = op.parse::<CommandKind>()?;
        if !kind.is_fire_and_forget() {
            return Err(ServerError::BadRequest(format!("{kind} is not an op")));
        }
        if kind == CommandKind::Export {
            board.export().await?;
        } else {
            board.stat().await?;
        }
        return Ok(StatusCode::OK.into_response());
    }

    let id: TicketId = query.id.as_deref().unwrap_or_default().parse()?;
    let ticket = board
        .get(id)
        .await?
        .ok_or(ticket_board::BoardError::NotFound(id))?;
    Ok((JSON, ticket.to_json_bytes()?).into_response())
}

/// Anything outside the route table.
pub async fn bad_request_handler() -> ServerError {
    ServerError::BadRequest("unknown path".into())
}

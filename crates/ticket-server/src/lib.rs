//! HTTP server for the ticket board.
//!
//! Thin plumbing over a [`BoardHandle`](ticket_board::BoardHandle): each
//! handler decodes its request, sends one command to the board manager and
//! renders the reply.
//!
//! | Route | Command |
//! |---|---|
//! | `POST /add` | add |
//! | `GET /list` | list |
//! | `POST /list` | modify |
//! | `GET /get?id=N` | get |
//! | `GET /get?op=export` | export |
//! | `GET /get?op=stat` | stat |

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::TicketServer;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use axum::Router;
    use tower::util::ServiceExt;

    use ticket_board::{BoardConfig, BoardHandle, BoardManager};
    use ticket_store::BoardStore;
    use ticket_types::{CommandKind, Ticket, TicketId};

    fn app() -> (tempfile::TempDir, BoardHandle, Router) {
        let dir = tempfile::tempdir().unwrap();
        let config = BoardConfig {
            export_root: dir.path().to_path_buf(),
            ..Default::default()
        };
        let (board, _task) = BoardManager::spawn(BoardStore::new(), config);
        let router = router::build_router(board.clone());
        (dir, board, router)
    }

    async fn call(app: &Router, method: &str, uri: &str, body: &str) -> (StatusCode, String) {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    const TICKET: &str = r#"{"id": 1, "messageType": "binary", "message": "AB12"}"#;

    #[tokio::test]
    async fn add_then_get() {
        let (_dir, _board, app) = app();
        let (status, _) = call(&app, "POST", "/add", TICKET).await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = call(&app, "GET", "/get?id=1", "").await;
        assert_eq!(status, StatusCode::OK);
        let ticket = Ticket::from_json_bytes(body.as_bytes()).unwrap();
        assert_eq!(ticket, Ticket::new(1, "binary", "AB12"));
    }

    #[tokio::test]
    async fn duplicate_add_is_bad_request() {
        let (_dir, _board, app) = app();
        call(&app, "POST", "/add", TICKET).await;
        let (status, body) = call(&app, "POST", "/add", TICKET).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, "400 Bad request");
    }

    #[tokio::test]
    async fn malformed_ticket_is_bad_request() {
        let (_dir, board, app) = app();
        let (status, _) = call(&app, "POST", "/add", "{not json").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(board.stats().await.unwrap().turns, 1);
    }

    #[tokio::test]
    async fn get_missing_or_unparseable_is_bad_request() {
        let (_dir, _board, app) = app();
        assert_eq!(call(&app, "GET", "/get?id=5", "").await.0, StatusCode::BAD_REQUEST);
        assert_eq!(call(&app, "GET", "/get?id=abc", "").await.0, StatusCode::BAD_REQUEST);
        assert_eq!(call(&app, "GET", "/get", "").await.0, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn list_concatenates_tickets() {
        let (_dir, board, app) = app();
        board.add(Ticket::new(1, "a", "x")).await.unwrap();
        board.add(Ticket::new(2, "b", "y")).await.unwrap();

        let (status, body) = call(&app, "GET", "/list", "").await;
        assert_eq!(status, StatusCode::OK);
        assert!(!body.starts_with('['));

        let tickets: Vec<Ticket> = serde_json::Deserializer::from_str(&body)
            .into_iter::<Ticket>()
            .map(|t| t.unwrap())
            .collect();
        assert_eq!(tickets.len(), 2);
    }

    #[tokio::test]
    async fn list_with_id_is_bad_request() {
        let (_dir, _board, app) = app();
        assert_eq!(call(&app, "GET", "/list?id=1", "").await.0, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn post_list_modifies() {
        let (_dir, board, app) = app();
        call(&app, "POST", "/add", TICKET).await;

        let modified = r#"{"id": 1, "messageType": "binary", "message": "AB12",
            "responseType": "binary", "response": "CD34", "complete": true}"#;
        let (status, _) = call(&app, "POST", "/list", modified).await;
        assert_eq!(status, StatusCode::OK);

        let ticket = board.get(TicketId::new(1)).await.unwrap().unwrap();
        assert_eq!(ticket.response, "CD34");
        assert!(ticket.complete);
    }

    #[tokio::test]
    async fn post_list_unknown_id_is_bad_request() {
        let (_dir, _board, app) = app();
        let (status, _) = call(&app, "POST", "/list", TICKET).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn export_op_empties_board() {
        let (dir, board, app) = app();
        call(&app, "POST", "/add", TICKET).await;

        let (status, _) = call(&app, "GET", "/get?op=export", "").await;
        assert_eq!(status, StatusCode::OK);

        // Commands are served in order, so this observes the drained board.
        assert!(board.list().await.unwrap().is_empty());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[tokio::test]
    async fn stat_op_and_unknown_op() {
        let (_dir, _board, app) = app();
        assert_eq!(call(&app, "GET", "/get?op=stat", "").await.0, StatusCode::OK);
        assert_eq!(call(&app, "GET", "/get?op=list", "").await.0, StatusCode::BAD_REQUEST);
        assert_eq!(call(&app, "GET", "/get?op=purge", "").await.0, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn only_fire_and_forget_kinds_are_ops() {
        let (_dir, board, app) = app();
        board.add(Ticket::new(1, "binary", "AB12")).await.unwrap();

        for kind in CommandKind::ALL {
            let uri = format!("/get?op={kind}");
            let expected = if kind.is_fire_and_forget() {
                StatusCode::OK
            } else {
                StatusCode::BAD_REQUEST
            };
            assert_eq!(call(&app, "GET", &uri, "").await.0, expected, "op={kind}");
        }

        // Only the export op touched the board.
        assert_eq!(board.stats().await.unwrap().exports, 1);
    }

    #[tokio::test]
    async fn unknown_path_is_bad_request() {
        let (_dir, _board, app) = app();
        let (status, body) = call(&app, "GET", "/tickets", "").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, "400 Bad request");
    }
}

use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use ticket_board::{BoardHandle, BoardManager};
use ticket_store::{archive, BoardStore};

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::router::build_router;

/// Ticket board server: the board manager plus its HTTP front end.
pub struct TicketServer {
    config: ServerConfig,
}

impl TicketServer {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Load the configured import directory, if any. Runs before the board
    /// manager takes its first command.
    pub fn load_store(&self) -> ServerResult<BoardStore> {
        match &self.config.import_dir {
            Some(dir) => Ok(BoardStore::from_tickets(archive::import_tickets(dir)?)),
            None => Ok(BoardStore::new()),
        }
    }

    /// Import, then start the board manager.
    pub fn start_board(&self) -> ServerResult<(BoardHandle, JoinHandle<()>)> {
        let store = self.load_store()?;
        Ok(BoardManager::spawn(store, self.config.board.clone()))
    }

    /// Start serving requests.
    pub async fn serve(self) -> ServerResult<()> {
        let (board, _manager) = self.start_board()?;
        let app = build_router(board);
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        tracing::info!("ticket board listening on {}", self.config.bind_addr);
        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))
    }
}

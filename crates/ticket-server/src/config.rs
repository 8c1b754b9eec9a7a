use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use ticket_board::BoardConfig;

use crate::error::{ServerError, ServerResult};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Export directory to load before serving.
    pub import_dir: Option<PathBuf>,
    pub board: BoardConfig,
}

impl ServerConfig {
    /// Load from a TOML file. Absent keys keep their defaults.
    pub fn from_toml_file(path: &Path) -> ServerResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> ServerResult<Self> {
        toml::from_str(text).map_err(|e| ServerError::Config(e.to_string()))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8000)),
            import_dir: None,
            board: BoardConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let c = ServerConfig::default();
        assert_eq!(c.bind_addr, "127.0.0.1:8000".parse::<SocketAddr>().unwrap());
        assert!(c.import_dir.is_none());
        assert_eq!(c.board, BoardConfig::default());
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let c = ServerConfig::from_toml_str(
            r#"
            bind_addr = "0.0.0.0:9000"

            [board]
            list_limit = 50
            export_root = "/var/tickets"
            "#,
        )
        .unwrap();
        assert_eq!(c.bind_addr.port(), 9000);
        assert_eq!(c.board.list_limit, Some(50));
        assert_eq!(c.board.export_root, PathBuf::from("/var/tickets"));
        assert_eq!(c.board.intake_capacity, 64);
        assert!(c.import_dir.is_none());
    }

    #[test]
    fn bad_toml_is_config_error() {
        assert!(matches!(
            ServerConfig::from_toml_str("bind_addr = 12"),
            Err(ServerError::Config(_))
        ));
    }

    #[test]
    fn from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("board.toml");
        std::fs::write(&path, "import_dir = \"/tmp/export\"\n").unwrap();
        let c = ServerConfig::from_toml_file(&path).unwrap();
        assert_eq!(c.import_dir, Some(PathBuf::from("/tmp/export")));
    }
}

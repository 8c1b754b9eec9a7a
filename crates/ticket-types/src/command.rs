use std::fmt;
use std::str::FromStr;

use crate::error::TypeError;

/// The closed set of commands the board manager understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Add,
    Get,
    List,
    Modify,
    Export,
    Stat,
}

impl CommandKind {
    pub const ALL: [CommandKind; 6] = [
        Self::Add,
        Self::Get,
        Self::List,
        Self::Modify,
        Self::Export,
        Self::Stat,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Get => "get",
            Self::List => "list",
            Self::Modify => "modify",
            Self::Export => "export",
            Self::Stat => "stat",
        }
    }

    /// Kinds whose caller does not wait for an answer.
    pub fn is_fire_and_forget(&self) -> bool {
        matches!(self, Self::Export | Self::Stat)
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CommandKind {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| TypeError::UnknownCommand(s.to_string()))
    }
}

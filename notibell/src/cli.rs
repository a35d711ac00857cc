use clap::Parser;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use notibell_domain::NotificationId;

#[derive(Parser, Debug)]
#[command(name = "notibell")]
#[command(about = "Drive a notification bell and print its state")]
#[command(version)]
pub struct Cli {
    /// Configuration file (defaults to $NOTIBELL_CONFIG, then the user config dir)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Seed file with `[[notifications]]`; overrides `store.seed_path`
    #[arg(long, value_name = "PATH")]
    pub seed: Option<PathBuf>,

    /// Start with the panel open
    #[arg(long)]
    pub open: bool,

    /// Operations applied in order: read:<id>, read-all, remove:<id>, activate:<id>, toggle
    #[arg(value_name = "OP")]
    pub ops: Vec<BellOp>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BellOp {
    Read(NotificationId),
    ReadAll,
    Remove(NotificationId),
    Activate(NotificationId),
    Toggle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOpError(String);

impl fmt::Display for ParseOpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown operation '{}' (expected read:<id>, read-all, remove:<id>, activate:<id> or toggle)",
            self.0
        )
    }
}

impl std::error::Error for ParseOpError {}

impl FromStr for BellOp {
    type Err = ParseOpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "read-all" => return Ok(BellOp::ReadAll),
            "toggle" => return Ok(BellOp::Toggle),
            _ => {}
        }

        let (verb, id) = s.split_once(':').ok_or_else(|| ParseOpError(s.to_string()))?;
        if id.is_empty() {
            return Err(ParseOpError(s.to_string()));
        }
        let id = NotificationId::new(id);
        match verb {
            "read" => Ok(BellOp::Read(id)),
            "remove" => Ok(BellOp::Remove(id)),
            "activate" => Ok(BellOp::Activate(id)),
            _ => Err(ParseOpError(s.to_string())),
        }
    }
}

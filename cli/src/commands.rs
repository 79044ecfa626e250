//! Subcommand implementations, kept free of process exits so they can be
//! tested directly.

use std::fmt;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use idewire_protocol::types::{Request, Response};
use idewire_protocol::{ProtocolError, api_docs, from_str};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Markdown,
    Json,
}

/// Which side of the protocol a message comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Direction {
    Request,
    Response,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Request => f.write_str("request"),
            Self::Response => f.write_str("response"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    Current,
    Stale,
}

pub fn render_docs(format: Format) -> Result<String> {
    let docs = api_docs();
    match format {
        Format::Markdown => Ok(docs.to_string()),
        Format::Json => {
            let mut json =
                serde_json::to_string_pretty(&docs).context("Failed to serialize API docs")?;
            json.push('\n');
            Ok(json)
        }
    }
}

pub fn write_docs(path: &Path, rendered: &str) -> Result<()> {
    fs::write(path, rendered).with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), "API reference written");
    Ok(())
}

/// Compare a committed reference with a fresh rendering. Line endings and
/// trailing whitespace at the end of the file are not significant.
pub fn check_docs(path: &Path, format: Format) -> Result<Freshness> {
    let committed = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let expected = render_docs(format)?;
    let committed = committed.replace("\r\n", "\n");
    if committed.trim_end() == expected.trim_end() {
        Ok(Freshness::Current)
    } else {
        tracing::debug!(path = %path.display(), "committed API reference differs");
        Ok(Freshness::Stale)
    }
}

pub fn read_message(path: Option<&Path>) -> Result<String> {
    if let Some(path) = path {
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
    } else {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read message from stdin")?;
        Ok(text)
    }
}

/// Decode `text` as a message of the given direction and describe the result.
pub fn validate(direction: Direction, text: &str) -> Result<String, ProtocolError> {
    match direction {
        Direction::Request => {
            let request = from_str::<Request>(text)?;
            Ok(format!("valid {} request\n{request:#?}", request.name()))
        }
        Direction::Response => {
            let response = from_str::<Response>(text)?;
            Ok(format!("valid {} response\n{response:#?}", response.name()))
        }
    }
}

//! YAML front matter handling.
//!
//! Source files may open with a `---` delimited YAML block. The block is
//! validated and removed before any title or heading extraction happens; the
//! pipeline itself takes no data from it.

use thiserror::Error;

/// Failure to take a front matter block off a document.
#[derive(Debug, Error)]
pub enum FrontMatterError {
    /// An opening `---` line was never closed.
    #[error("front matter block is not terminated")]
    Unterminated,
    /// The block is delimited correctly but is not valid YAML.
    #[error("invalid YAML: {0}")]
    InvalidYaml(String),
}

/// Split an optional leading front matter block from `text`.
///
/// Returns the raw YAML (without its delimiters) and the body that follows.
/// Text that does not open with a `---` line is returned whole. An opening
/// delimiter without a closing one is an error.
pub fn split(text: &str) -> Result<(Option<&str>, &str), FrontMatterError> {
    let Some(rest) = text.strip_prefix("---") else {
        return Ok((None, text));
    };
    let rest = rest.strip_prefix('\r').unwrap_or(rest);
    let Some(rest) = rest.strip_prefix('\n') else {
        // A line like "---foo" is body text, not a delimiter.
        return Ok((None, text));
    };

    let mut consumed = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            let yaml = &rest[..consumed];
            let body = &rest[consumed + line.len()..];
            return Ok((Some(yaml), body));
        }
        consumed += line.len();
    }
    Err(FrontMatterError::Unterminated)
}

/// Strip and validate an optional front matter block, returning the body.
pub fn strip(text: &str) -> Result<&str, FrontMatterError> {
    let (yaml, body) = split(text)?;
    if let Some(yaml) = yaml
        && !yaml.trim().is_empty()
    {
        serde_yaml::from_str::<serde_yaml::Value>(yaml)
            .map_err(|e| FrontMatterError::InvalidYaml(e.to_string()))?;
    }
    Ok(body)
}

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("failed to read '{}': {source}", .path.display())]
    File { path: PathBuf, source: io::Error },
}

/// Read an API description from `path`, or from stdin when `path` is `-`.
pub fn load_api_text(path: &Path) -> Result<String, LoadError> {
    if path.as_os_str() == "-" {
        return load_stdin();
    }
    load_file(path)
}

fn load_stdin() -> Result<String, LoadError> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(LoadError::Stdin)?;
    debug!(bytes = buf.len(), "read API description from stdin");
    Ok(buf)
}

fn load_file(path: &Path) -> Result<String, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::File {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = content.len(), "read API description");
    Ok(content)
}

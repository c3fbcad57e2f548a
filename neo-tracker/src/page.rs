//! Static index page
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Page markup; fetches `/api/asteroids` and renders one card per record
pub const INDEX_HTML: &str = include_str!("../assets/index.html");

pub const INDEX_FILE: &str = "index.html";

/// Write the index page into `template_dir`, creating the directory if
/// needed. Returns the path of the written file.
pub async fn write_index_page(template_dir: impl AsRef<Path>) -> Result<PathBuf> {
    let template_dir = template_dir.as_ref();
    fs::create_dir_all(template_dir)
        .await
        .context(format!("Failed to create template directory: {:?}", template_dir))?;

    let path = template_dir.join(INDEX_FILE);
    fs::write(&path, INDEX_HTML)
        .await
        .context(format!("Failed to write index page: {:?}", path))?;

    tracing::info!("Index page written to {:?}", path);
    Ok(path)
}

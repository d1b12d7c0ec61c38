//! Document rendering and saving.
//!
//! Saving writes to a temporary file and renames it over the target so the
//! target is never left half-written. A `.bak` copy of the previous file can
//! be kept, and targets ending in `.gz` are compressed.

use crate::config::{Config, OutputFormat};
use crate::graph::convert::to_yaml;
use crate::graph::node::Node;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Serializes a node graph in the requested format.
///
/// YAML keeps record type names as tags; JSON has no tags and writes records
/// as plain objects. The output always ends with a newline.
///
/// ```
/// use slotpath::config::OutputFormat;
/// use slotpath::file::saver::render_document;
/// use slotpath::graph::convert::parse_node;
///
/// let root = parse_node("p: !Point {x: 1}").unwrap();
/// assert!(render_document(&root, OutputFormat::Yaml).unwrap().contains("!Point"));
/// assert!(render_document(&root, OutputFormat::Json).unwrap().contains("\"x\": 1"));
/// ```
pub fn render_document(root: &Node, format: OutputFormat) -> Result<String> {
    let mut text = match format {
        OutputFormat::Yaml => {
            serde_yaml::to_string(&to_yaml(root, true)).context("Failed to serialize YAML")?
        }
        OutputFormat::Json => serde_json::to_string_pretty(&to_yaml(root, false))
            .context("Failed to serialize JSON")?,
    };
    if !text.ends_with('\n') {
        text.push('\n');
    }
    Ok(text)
}

/// Renders `root` with `config.output_format` and writes it to `path`.
///
/// # Errors
///
/// This function will return an error if:
/// - Backup creation fails (if requested)
/// - Serialization fails
/// - Writing or renaming the temp file fails
pub fn save_document<P: AsRef<Path>>(path: P, root: &Node, config: &Config) -> Result<()> {
    let path = path.as_ref();
    let should_compress = path.to_string_lossy().ends_with(".gz");

    if config.create_backup && path.exists() {
        create_backup(path)?;
    }

    let text = render_document(root, config.output_format)?;
    write_file_atomic(path, text.as_bytes(), should_compress)?;

    tracing::debug!(path = %path.display(), format = %config.output_format, gzip = should_compress, "saved document");
    Ok(())
}

/// Copies `path` to `<name>.bak` next to it.
fn create_backup(path: &Path) -> Result<()> {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| anyhow::anyhow!("Invalid file name"))?;
    fs::copy(path, path.with_file_name(format!("{}.bak", name)))
        .context("Failed to create backup")?;
    Ok(())
}

/// Writes `data` to a uniquely named temp file in the target's directory,
/// then renames it over `path`.
fn write_file_atomic(path: &Path, data: &[u8], compress: bool) -> Result<()> {
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;
    use tempfile::NamedTempFile;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut temp = NamedTempFile::new_in(dir).context("Failed to create temp file")?;

    if compress {
        let mut encoder = GzEncoder::new(temp.as_file_mut(), Compression::default());
        encoder
            .write_all(data)
            .context("Failed to write compressed data")?;
        encoder.finish().context("Failed to finish compression")?;
    } else {
        temp.write_all(data).context("Failed to write temp file")?;
    }

    if let Ok(metadata) = fs::metadata(path) {
        fs::set_permissions(temp.path(), metadata.permissions())
            .context("Failed to copy file permissions")?;
    }

    temp.persist(path).context("Failed to replace target file")?;
    Ok(())
}

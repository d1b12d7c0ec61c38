//! Document loading.
//!
//! Documents are YAML (JSON works too, being a YAML subset) and may be
//! gzip-compressed. They are converted into node graphs with
//! [`crate::graph::convert::from_yaml`].

use crate::graph::convert::parse_node;
use crate::graph::node::Node;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Loads and parses a document from the filesystem.
///
/// Files ending in `.gz` are decompressed first.
///
/// # Examples
///
/// ```no_run
/// use slotpath::file::loader::load_document;
///
/// let root = load_document("config.yaml").unwrap();
/// ```
///
/// # Errors
///
/// This function will return an error if:
/// - The file cannot be read
/// - A `.gz` file is not valid gzip
/// - The contents are not valid YAML, or use keys or tags a graph cannot hold
pub fn load_document<P: AsRef<Path>>(path: P) -> Result<Node> {
    let path_ref = path.as_ref();

    let is_gzipped = path_ref
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext == "gz")
        .unwrap_or(false);

    let content = if is_gzipped {
        gunzip(fs::File::open(path_ref).context("Failed to open gzipped file")?)?
    } else {
        fs::read_to_string(path_ref).context("Failed to read file")?
    };

    tracing::debug!(path = %path_ref.display(), bytes = content.len(), gzip = is_gzipped, "loaded document");
    parse_node(&content).with_context(|| format!("Failed to parse {}", path_ref.display()))
}

/// Loads and parses a document from standard input.
///
/// Gzip input is detected by its magic bytes.
pub fn load_from_stdin() -> Result<Node> {
    use std::io::{self, Read};

    let mut buffer = Vec::new();
    io::stdin()
        .read_to_end(&mut buffer)
        .context("Failed to read from stdin")?;

    load_from_bytes(&buffer)
}

/// Parses a document held in memory, decompressing it if it starts with the
/// gzip magic bytes (0x1f 0x8b).
pub fn load_from_bytes(bytes: &[u8]) -> Result<Node> {
    let content = if bytes.starts_with(&[0x1f, 0x8b]) {
        gunzip(bytes)?
    } else {
        String::from_utf8(bytes.to_vec()).context("Input is not valid UTF-8")?
    };

    parse_node(&content).context("Failed to parse input")
}

/// Decompresses a gzip stream into a UTF-8 string.
fn gunzip<R: std::io::Read>(reader: R) -> Result<String> {
    use flate2::read::GzDecoder;
    use std::io::Read;

    let mut content = String::new();
    GzDecoder::new(reader)
        .read_to_string(&mut content)
        .context("Failed to decompress gzip data - input may be corrupted")?;
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_from_plain_bytes() {
        let root = load_from_bytes(b"a: 1\nb: [x, y]\n").unwrap();
        assert_eq!(root.child("a"), Some(Node::Integer(1)));
        assert_eq!(root.child("b").and_then(|b| b.child("1")), Some(Node::from("y")));
    }

    #[test]
    fn test_load_from_gzip_bytes() {
        use flate2::write::GzEncoder;
        use flate2::Compression;
        use std::io::Write;

        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(b"{\"k\": true}").unwrap();
        let compressed = encoder.finish().unwrap();

        let root = load_from_bytes(&compressed).unwrap();
        assert_eq!(root.child("k"), Some(Node::Boolean(true)));
    }

    #[test]
    fn test_invalid_utf8_is_rejected() {
        assert!(load_from_bytes(&[0xff, 0xfe, 0x00]).is_err());
    }
}

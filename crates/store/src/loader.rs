//! Startup data loader: JSON dataset file → product list.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use thiserror::Error;

use vitrina_catalog::Product;

/// Failure while reading or parsing the dataset at startup.
///
/// Fatal and non-retryable: the process must not serve traffic from an
/// inconsistent store, so the bootstrap layer aborts on this error.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read data file: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not parse data file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Read the product dataset at `path`.
///
/// The parent directory is created if missing. An absent or zero-length file
/// is an empty dataset, not an error.
pub fn load(path: impl AsRef<Path>) -> Result<Vec<Product>, LoadError> {
    let path = path.as_ref();

    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir)?;
        }
    }

    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => Vec::new(),
        Err(e) => return Err(e.into()),
    };

    if bytes.is_empty() {
        tracing::info!("data file {} is absent or empty, starting with an empty catalog", path.display());
        return Ok(Vec::new());
    }

    let products: Vec<Product> = serde_json::from_slice(&bytes)?;
    tracing::info!("loaded {} products from {}", products.len(), path.display());
    Ok(products)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_empty_dataset_and_creates_parent_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("products.json");

        let products = load(&path).unwrap();
        assert!(products.is_empty());
        assert!(path.parent().unwrap().is_dir());
    }

    #[test]
    fn zero_length_file_yields_empty_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("products.json");
        fs::write(&path, b"").unwrap();

        let products = load(&path).unwrap();
        assert!(products.is_empty());
    }

    #[test]
    fn valid_dataset_is_parsed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("products.json");
        fs::write(
            &path,
            br#"[
                {"id": "p1", "title": "first", "type": "a"},
                {"id": "p2", "title": "second"}
            ]"#,
        )
        .unwrap();

        let products = load(&path).unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].id, "p1");
        assert_eq!(products[0].product_type.as_deref(), Some("a"));
        assert_eq!(products[1].product_type, None);
    }

    #[test]
    fn malformed_dataset_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("products.json");
        fs::write(&path, b"{ not json ").unwrap();

        let err = load(&path).unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[test]
    fn unreadable_path_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        // The path itself is a directory, so reading it as a file fails.
        let err = load(dir.path()).unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }
}

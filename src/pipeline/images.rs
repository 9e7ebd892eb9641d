use crate::models::ImageMetadataRow;
use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Read-only lookup from car names to image files
///
/// Loaded once per process and shared by reference. A catalog whose
/// metadata could not be read still works but never finds an image.
#[derive(Debug, Clone)]
pub struct ImageCatalog {
    base_dir: PathBuf,
    rows: Vec<ImageMetadataRow>,
    load_error: Option<String>,
}

impl ImageCatalog {
    pub fn new(base_dir: impl Into<PathBuf>, rows: Vec<ImageMetadataRow>) -> Self {
        Self {
            base_dir: base_dir.into(),
            rows,
            load_error: None,
        }
    }

    /// Catalog that remembers why its metadata is missing
    pub fn unavailable(base_dir: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self {
            base_dir: base_dir.into(),
            rows: Vec::new(),
            load_error: Some(reason.into()),
        }
    }

    /// Read the metadata CSV; the header row must name `car_name` and `image_path`
    pub fn load(csv_path: &Path, base_dir: impl Into<PathBuf>) -> Result<Self> {
        let mut reader = csv::Reader::from_path(csv_path)
            .with_context(|| format!("Failed to open {}", csv_path.display()))?;

        let headers = reader
            .headers()
            .with_context(|| format!("Failed to read header of {}", csv_path.display()))?;
        for column in ["car_name", "image_path"] {
            if !headers.iter().any(|h| h.trim() == column) {
                bail!("{} has no '{}' column", csv_path.display(), column);
            }
        }

        let mut rows = Vec::new();
        for (line, record) in reader.deserialize::<ImageMetadataRow>().enumerate() {
            match record {
                Ok(row) => rows.push(row),
                Err(err) => warn!("Skipping metadata row {}: {}", line + 1, err),
            }
        }

        info!("Loaded {} image metadata rows from {}", rows.len(), csv_path.display());

        Ok(Self::new(base_dir, rows))
    }

    /// [`ImageCatalog::load`], degrading to an unavailable catalog on failure
    pub fn load_or_unavailable(csv_path: &Path, base_dir: impl Into<PathBuf>) -> Self {
        let base_dir = base_dir.into();
        match Self::load(csv_path, base_dir.clone()) {
            Ok(catalog) => catalog,
            Err(err) => {
                warn!("Image metadata unavailable: {:#}", err);
                Self::unavailable(base_dir, format!("{:#}", err))
            }
        }
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    /// Path of an existing image for this car, if any
    pub fn find_image(&self, make: &str, model: &str) -> Option<PathBuf> {
        let image_path = match_image(&self.rows, make, model)?;
        let path = self.base_dir.join(image_path);

        if path.exists() {
            Some(path)
        } else {
            debug!("Matched image {} is missing on disk", path.display());
            None
        }
    }
}

/// First row whose name contains "make model", compared case-insensitively
pub fn match_image<'a>(rows: &'a [ImageMetadataRow], make: &str, model: &str) -> Option<&'a str> {
    let query = format!("{} {}", make, model).to_lowercase();

    rows.iter()
        .find(|row| row.car_name.to_lowercase().contains(&query))
        .map(|row| row.image_path.as_str())
}

pub mod pdftoppm;
pub mod tesseract;

use std::path::{Path, PathBuf};

use crate::error::FinbridgeError;

/// Single-page raster formats handled by direct recognition.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "tiff", "bmp", "gif"];

/// Trait for optical-character-recognition backends.
pub trait TextRecognizer: Send + Sync {
    /// Recognize text in a single page image.
    fn recognize(&self, image: &Path) -> Result<String, FinbridgeError>;

    /// Name of this backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// Trait for rendering a multi-page document into page images.
pub trait PageRasterizer: Send + Sync {
    /// Render every page of `pdf` into `out_dir`, returning the image paths
    /// in page order.
    fn rasterize(&self, pdf: &Path, out_dir: &Path) -> Result<Vec<PathBuf>, FinbridgeError>;

    /// Name of this backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// Recognize the text of one document file.
///
/// PDFs are rasterized page by page and recognized independently, page texts
/// joined with newlines in page order. Single-page images go straight to the
/// recognizer. Anything else is `UnsupportedFormat`.
///
/// Missing-tool errors pass through untouched so callers can tell "feature
/// not installed" apart from a bad input file; everything else is wrapped
/// with the offending path.
pub fn recognize_document(
    path: &Path,
    recognizer: &dyn TextRecognizer,
    rasterizer: &dyn PageRasterizer,
) -> Result<String, FinbridgeError> {
    let extension = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "pdf" => recognize_pdf(path, recognizer, rasterizer),
        ext if IMAGE_EXTENSIONS.contains(&ext) => recognizer
            .recognize(path)
            .map_err(|e| wrap_recognition(path, e)),
        _ => Err(FinbridgeError::UnsupportedFormat { extension }),
    }
}

fn recognize_pdf(
    path: &Path,
    recognizer: &dyn TextRecognizer,
    rasterizer: &dyn PageRasterizer,
) -> Result<String, FinbridgeError> {
    let pages_dir = tempfile::tempdir()?;
    let pages = rasterizer
        .rasterize(path, pages_dir.path())
        .map_err(|e| wrap_recognition(path, e))?;

    tracing::debug!(
        pages = pages.len(),
        rasterizer = rasterizer.backend_name(),
        "rasterized document"
    );

    let mut texts = Vec::with_capacity(pages.len());
    for page in &pages {
        let text = recognizer
            .recognize(page)
            .map_err(|e| wrap_recognition(path, e))?;
        texts.push(text);
    }
    Ok(texts.join("\n"))
}

/// Keep capability errors distinguishable; wrap the rest with the file path.
fn wrap_recognition(path: &Path, err: FinbridgeError) -> FinbridgeError {
    match err {
        e @ (FinbridgeError::TesseractNotFound | FinbridgeError::PdftoppmNotFound) => e,
        other => FinbridgeError::Recognition {
            path: path.to_path_buf(),
            reason: other.to_string(),
        },
    }
}

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::FinbridgeError;
use crate::recognize::PageRasterizer;

/// Page rasterizer shelling out to `pdftoppm` (from poppler-utils).
///
/// Renders `page-N.png` files into the target directory; pdftoppm zero-pads
/// the page index, so lexical order is page order.
pub struct PdftoppmRasterizer {
    dpi: u32,
}

impl PdftoppmRasterizer {
    pub fn new() -> Self {
        Self::with_dpi(200)
    }

    pub fn with_dpi(dpi: u32) -> Self {
        PdftoppmRasterizer { dpi }
    }

    /// Check if pdftoppm is available on the system.
    pub fn is_available() -> bool {
        Command::new("pdftoppm")
            .arg("-v")
            .output()
            .map(|o| o.status.success() || !o.stderr.is_empty())
            .unwrap_or(false)
    }
}

impl Default for PdftoppmRasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl PageRasterizer for PdftoppmRasterizer {
    fn rasterize(&self, pdf: &Path, out_dir: &Path) -> Result<Vec<PathBuf>, FinbridgeError> {
        let prefix = out_dir.join("page");

        let output = Command::new("pdftoppm")
            .arg("-png")
            .arg("-r")
            .arg(self.dpi.to_string())
            .arg(pdf)
            .arg(&prefix)
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    FinbridgeError::PdftoppmNotFound
                } else {
                    FinbridgeError::Recognition {
                        path: pdf.to_path_buf(),
                        reason: format!("pdftoppm failed: {e}"),
                    }
                }
            })?;

        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            return Err(FinbridgeError::RecognizerFailed {
                tool: "pdftoppm",
                code,
                stderr,
            });
        }

        let mut pages: Vec<PathBuf> = std::fs::read_dir(out_dir)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|p| p.extension().map(|ext| ext == "png").unwrap_or(false))
            .collect();
        pages.sort();

        if pages.is_empty() {
            return Err(FinbridgeError::Recognition {
                path: pdf.to_path_buf(),
                reason: "pdftoppm produced no page images".into(),
            });
        }

        Ok(pages)
    }

    fn backend_name(&self) -> &str {
        "pdftoppm"
    }
}

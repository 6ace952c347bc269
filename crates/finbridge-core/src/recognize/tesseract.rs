use std::path::Path;
use std::process::Command;

use crate::error::FinbridgeError;
use crate::recognize::TextRecognizer;

/// OCR backend shelling out to the `tesseract` binary.
///
/// Pages are recognized one image at a time with `--psm 1` (automatic page
/// segmentation with orientation detection), text written to stdout.
pub struct TesseractRecognizer {
    lang: String,
}

impl TesseractRecognizer {
    pub fn new() -> Self {
        Self::with_language("eng")
    }

    pub fn with_language(lang: &str) -> Self {
        TesseractRecognizer {
            lang: lang.to_string(),
        }
    }

    /// Check if tesseract is available on the system.
    pub fn is_available() -> bool {
        Command::new("tesseract")
            .arg("--version")
            .output()
            .map(|o| o.status.success() || !o.stderr.is_empty())
            .unwrap_or(false)
    }
}

impl Default for TesseractRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextRecognizer for TesseractRecognizer {
    fn recognize(&self, image: &Path) -> Result<String, FinbridgeError> {
        let output = Command::new("tesseract")
            .arg(image)
            .arg("stdout")
            .arg("-l")
            .arg(&self.lang)
            .arg("--psm")
            .arg("1")
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    FinbridgeError::TesseractNotFound
                } else {
                    FinbridgeError::Recognition {
                        path: image.to_path_buf(),
                        reason: format!("tesseract failed: {e}"),
                    }
                }
            })?;

        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            return Err(FinbridgeError::RecognizerFailed {
                tool: "tesseract",
                code,
                stderr,
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }

    fn backend_name(&self) -> &str {
        "tesseract"
    }
}

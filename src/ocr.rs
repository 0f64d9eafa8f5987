//! Shared OCR engine accessor.
//!
//! The engine is a process-wide, lazily constructed singleton: the first
//! request to touch an image attachment builds it, every later request
//! reuses it, and concurrent first use still constructs exactly one
//! instance. Construction resolves the Tesseract data path; if no
//! recognized platform default exists the failure is fatal, but only
//! surfaces when OCR is actually invoked.

use std::path::{Path, PathBuf};

use once_cell::sync::OnceCell;

use crate::config::{self, OcrConfig};
use crate::error::{Result, SiftError};

/// Environment variable overriding the Tesseract data path.
const TESSDATA_ENV: &str = "TESSDATA_PREFIX";

static ENGINE: OnceCell<OcrEngine> = OnceCell::new();

/// Handle to the OCR capability.
///
/// The recognition language is fixed at construction time and is not
/// request-configurable. Once built, the engine is reused for the rest of
/// the process lifetime and never reconfigured.
#[derive(Debug)]
pub struct OcrEngine {
    data_path: PathBuf,
    language: String,
}

impl OcrEngine {
    /// Get the process-wide engine, constructing it on first use.
    ///
    /// Thread-safe: concurrent first calls construct exactly one instance.
    pub fn shared() -> Result<&'static OcrEngine> {
        ENGINE.get_or_try_init(|| {
            let cfg = config::load_config();
            Self::from_config(&cfg.ocr)
        })
    }

    /// Construct an engine from configuration plus the process environment.
    pub fn from_config(cfg: &OcrConfig) -> Result<Self> {
        let env_override = std::env::var(TESSDATA_ENV).ok().filter(|s| !s.is_empty());
        let data_path = resolve_data_path(
            env_override.as_deref(),
            cfg.data_path.as_deref(),
            std::env::consts::OS,
        )?;
        tracing::info!(
            data_path = %data_path.display(),
            language = %cfg.language,
            "Initialized OCR engine"
        );
        Ok(Self {
            data_path,
            language: cfg.language.clone(),
        })
    }

    /// Run OCR over a decoded raster image.
    #[cfg(feature = "ocr")]
    pub fn recognize(&self, image: &image::DynamicImage) -> Result<String> {
        use leptess::LepTess;

        let mut engine = LepTess::new(Some(&self.data_path.to_string_lossy()), &self.language)
            .map_err(|e| SiftError::Extraction(format!("cannot initialize Tesseract: {e}")))?;

        // leptess wants encoded image data, so round-trip through PNG.
        let mut png = std::io::Cursor::new(Vec::new());
        image
            .write_to(&mut png, image::ImageFormat::Png)
            .map_err(|e| SiftError::Extraction(format!("cannot encode image for OCR: {e}")))?;

        engine
            .set_image_from_mem(png.get_ref())
            .map_err(|e| SiftError::Extraction(format!("cannot load image into Tesseract: {e}")))?;

        engine
            .get_utf8_text()
            .map_err(|e| SiftError::Extraction(format!("OCR recognition failed: {e}")))
    }

    /// Without the `ocr` feature the engine still resolves its data path,
    /// but recognition reports a per-attachment failure.
    #[cfg(not(feature = "ocr"))]
    pub fn recognize(&self, _image: &image::DynamicImage) -> Result<String> {
        Err(SiftError::Extraction(
            "built without OCR support (enable the `ocr` feature)".into(),
        ))
    }
}

/// Resolve the Tesseract data path.
///
/// Precedence: environment override, then configured path, then the
/// platform's default install location. Unrecognized platforms have no
/// default and fail with [`SiftError::UnsupportedPlatform`].
fn resolve_data_path(
    env_override: Option<&str>,
    configured: Option<&Path>,
    os: &str,
) -> Result<PathBuf> {
    if let Some(path) = env_override {
        return Ok(PathBuf::from(path));
    }
    if let Some(path) = configured {
        return Ok(path.to_path_buf());
    }

    match os {
        "windows" => Ok(PathBuf::from(r"C:\Program Files\Tesseract-OCR\tessdata")),
        "macos" => Ok(PathBuf::from("/usr/local/share/tessdata")),
        "linux" => Ok(PathBuf::from("/usr/share/tessdata")),
        other => Err(SiftError::UnsupportedPlatform(other.to_string())),
    }
}

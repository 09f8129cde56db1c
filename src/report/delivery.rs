//! Showing a report, or saving it for download when it cannot be shown

use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::report::renderer::ReportDocument;
use crate::types::LogbookResult;

/// Why a document could not be displayed
#[derive(Debug, thiserror::Error)]
pub enum DisplayError {
    #[error("exibição indisponível: {0}")]
    Unavailable(String),
    #[error("falha ao exibir: {0}")]
    Failed(String),
}

/// Something that can present a document interactively (a browser window,
/// a print preview)
pub trait DisplaySurface {
    fn show(&mut self, document: &ReportDocument) -> Result<(), DisplayError>;
}

/// Surface for environments with no interactive display; every document
/// goes to the download fallback.
#[derive(Debug, Clone, Copy, Default)]
pub struct Headless;

impl DisplaySurface for Headless {
    fn show(&mut self, _document: &ReportDocument) -> Result<(), DisplayError> {
        Err(DisplayError::Unavailable("nenhuma tela disponível".to_string()))
    }
}

/// How a document reached the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    Displayed,
    Downloaded(PathBuf),
}

/// Show `document` on `surface`; if that fails, save it into `fallback_dir`.
pub fn deliver(
    document: &ReportDocument,
    surface: &mut dyn DisplaySurface,
    fallback_dir: &Path,
) -> LogbookResult<Delivery> {
    match surface.show(document) {
        Ok(()) => {
            info!(title = %document.title, "report displayed");
            Ok(Delivery::Displayed)
        }
        Err(err) => {
            warn!(title = %document.title, error = %err, "falling back to download");
            let path = document.save(fallback_dir)?;
            info!(path = %path.display(), "report saved for download");
            Ok(Delivery::Downloaded(path))
        }
    }
}

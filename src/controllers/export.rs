use std::error::Error;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use log::{error, info};

use crate::controllers::ports::file_presenter::{FilePresentError, FilePresenterPort};
use crate::core::actions::render_frame::RenderError;
use crate::core::data::window_size::WindowSize;
use crate::session::viewer::ViewerSession;

#[derive(Debug)]
pub enum ExportError {
    Render(RenderError),
    Io(io::Error),
    Encode(Box<dyn Error + Send + Sync>),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Render(err) => write!(f, "export render failed: {}", err),
            Self::Io(err) => write!(f, "export write failed: {}", err),
            Self::Encode(err) => write!(f, "export encoding failed: {}", err),
        }
    }
}

impl Error for ExportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Render(err) => Some(err),
            Self::Io(err) => Some(err),
            Self::Encode(err) => Some(err.as_ref()),
        }
    }
}

impl From<RenderError> for ExportError {
    fn from(err: RenderError) -> Self {
        Self::Render(err)
    }
}

impl From<FilePresentError> for ExportError {
    fn from(err: FilePresentError) -> Self {
        match err {
            FilePresentError::Io(err) => Self::Io(err),
            FilePresentError::Encode(err) => Self::Encode(err),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExportSummary {
    pub path: PathBuf,
    pub size: WindowSize,
    pub duration: Duration,
}

/// Renders the session's current view at export resolution and writes it out.
pub struct ExportController<P: FilePresenterPort> {
    presenter: P,
}

impl<P: FilePresenterPort> ExportController<P> {
    pub fn new(presenter: P) -> Self {
        Self { presenter }
    }

    pub fn export(
        &self,
        session: &ViewerSession,
        filepath: impl AsRef<Path>,
    ) -> Result<ExportSummary, ExportError> {
        let path = filepath.as_ref();
        let result = self.render_and_present(session, path);

        match &result {
            Ok(summary) => info!(
                "exported {}x{} to {} in {:?}",
                summary.size.width(),
                summary.size.height(),
                summary.path.display(),
                summary.duration
            ),
            Err(err) => error!("export to {} failed: {}", path.display(), err),
        }

        result
    }

    fn render_and_present(
        &self,
        session: &ViewerSession,
        path: &Path,
    ) -> Result<ExportSummary, ExportError> {
        let start = Instant::now();
        let raster = session.render_export()?;

        self.presenter.present(&raster, path)?;

        Ok(ExportSummary {
            path: path.to_path_buf(),
            size: raster.size(),
            duration: start.elapsed(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ViewerConfig;
    use crate::core::data::pixel_buffer::PixelBuffer;
    use crate::presenters::file::by_extension::ExtensionFilePresenter;
    use crate::session::input::{InputEvent, Key};
    use std::cell::RefCell;

    fn session() -> ViewerSession {
        ViewerSession::new(ViewerConfig {
            window_width: 20,
            window_height: 10,
            export_scale: 3,
            max_iterations: 30,
            export_max_iterations: 50,
            ..ViewerConfig::default()
        })
        .unwrap()
    }

    #[derive(Default)]
    struct RecordingPresenter {
        presented: RefCell<Vec<(PathBuf, PixelBuffer)>>,
    }

    impl FilePresenterPort for RecordingPresenter {
        fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> Result<(), FilePresentError> {
            self.presented
                .borrow_mut()
                .push((filepath.to_path_buf(), buffer.clone()));
            Ok(())
        }
    }

    #[test]
    fn test_export_presents_scaled_raster() {
        let session = session();
        let controller = ExportController::new(RecordingPresenter::default());

        let summary = controller.export(&session, "view.png").unwrap();

        assert_eq!(summary.size, WindowSize::new(60, 30).unwrap());
        assert_eq!(summary.path, PathBuf::from("view.png"));

        let presented = controller.presenter.presented.borrow();
        assert_eq!(presented.len(), 1);
        assert_eq!(presented[0].1.size(), summary.size);
    }

    #[test]
    fn test_export_matches_view_after_input() {
        let mut session = session();
        session.handle_event(InputEvent::Key(Key::Space));
        let controller = ExportController::new(RecordingPresenter::default());

        controller.export(&session, "bw.png").unwrap();

        let presented = controller.presenter.presented.borrow();
        assert!(presented[0].1.buffer().iter().all(|&b| b == 0 || b == 255));
    }

    #[test]
    fn test_write_failure_reports_io_and_keeps_session() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not_a_directory");
        std::fs::write(&blocker, b"x").unwrap();

        let mut session = session();
        session.handle_event(InputEvent::Key(Key::PageUp));
        let view = session.view();

        let controller = ExportController::new(ExtensionFilePresenter::new());
        let result = controller.export(&session, blocker.join("out.png"));

        assert!(matches!(result, Err(ExportError::Io(_))));
        assert_eq!(session.view(), view);
        assert!(session.render_frame().is_ok());
    }

    #[test]
    fn test_export_writes_real_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("export.ppm");
        let controller = ExportController::new(ExtensionFilePresenter::new());

        controller.export(&session(), &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"P6\n60 30\n255\n"));
    }
}

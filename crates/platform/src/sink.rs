//! Destinations for rendered exports.

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use designsystem::{
    to_css_variables, ExportError, ExportFormat, Exporter, TokenSet, EXPORT_FILE_NAME,
    EXPORT_MIME_TYPE,
};
use thiserror::Error;

/// File name used for the CSS custom property export.
pub const CSS_FILE_NAME: &str = "design-system.css";
/// MIME type of the CSS custom property export.
pub const CSS_MIME_TYPE: &str = "text/css";

/// Errors raised while producing or delivering an export.
#[derive(Debug, Error)]
pub enum SinkError {
    /// The document could not be rendered.
    #[error(transparent)]
    Export(#[from] ExportError),
    /// The destination could not be written.
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Rendered export ready to be handed to a sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    /// Suggested file name.
    pub file_name: &'static str,
    /// MIME type of the contents.
    pub mime_type: &'static str,
    /// UTF-8 contents.
    pub contents: String,
}

impl ExportArtifact {
    /// Renders the JSON document for `tokens`.
    pub fn json(
        exporter: &Exporter,
        tokens: &TokenSet,
        format: ExportFormat,
    ) -> Result<Self, SinkError> {
        Ok(Self {
            file_name: EXPORT_FILE_NAME,
            mime_type: EXPORT_MIME_TYPE,
            contents: exporter.render(tokens, format)?,
        })
    }

    /// Renders the CSS custom properties for `tokens`.
    #[must_use]
    pub fn css(exporter: &Exporter, tokens: &TokenSet) -> Self {
        Self {
            file_name: CSS_FILE_NAME,
            mime_type: CSS_MIME_TYPE,
            contents: to_css_variables(&exporter.document(tokens)),
        }
    }
}

/// Receiver of rendered exports.
pub trait ExportSink {
    /// Hands the artifact to the destination.
    fn deliver(&mut self, artifact: &ExportArtifact) -> Result<(), SinkError>;
}

/// Writes artifacts into a directory under their suggested file name.
#[derive(Debug, Clone)]
pub struct FileSink {
    dir: PathBuf,
}

impl FileSink {
    /// Creates a sink writing into `dir`.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Destination path of an artifact.
    #[must_use]
    pub fn target(&self, artifact: &ExportArtifact) -> PathBuf {
        self.dir.join(artifact.file_name)
    }

    /// Directory receiving artifacts.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ExportSink for FileSink {
    fn deliver(&mut self, artifact: &ExportArtifact) -> Result<(), SinkError> {
        fs::create_dir_all(&self.dir)?;
        let target = self.target(artifact);
        fs::write(&target, artifact.contents.as_bytes())?;
        tracing::info!(
            path = %target.display(),
            mime = artifact.mime_type,
            bytes = artifact.contents.len(),
            "wrote export"
        );
        Ok(())
    }
}

/// Streams artifact contents into any writer, such as stdout.
#[derive(Debug)]
pub struct WriterSink<W> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    /// Wraps a writer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ExportSink for WriterSink<W> {
    fn deliver(&mut self, artifact: &ExportArtifact) -> Result<(), SinkError> {
        self.writer.write_all(artifact.contents.as_bytes())?;
        if !artifact.contents.ends_with('\n') {
            self.writer.write_all(b"\n")?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

use crate::{
    error::{IoAction, SyncError},
    escape::escape_template_literal,
    region::{Markers, Region, locate},
    splice::splice,
};
use inliner_util::ResultTraced;
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

/// Knobs for a single inline run
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SyncOptions {
    pub markers: Markers,
    /// If the placeholder is gone, find a previously inlined block by its
    /// opening literal instead of failing
    pub resync: bool,
}

/// Result of computing the new destination content
#[derive(Debug)]
pub struct SyncOutcome {
    /// Region of the *original* destination that was replaced
    pub region: Region,
    /// Did the content differ from what was already in the destination?
    pub changed: bool,
    /// Full new destination content
    pub content: String,
}

/// Copies one source file into the placeholder of one destination file
#[derive(Clone, Debug)]
pub struct Inliner {
    source: PathBuf,
    destination: PathBuf,
    options: SyncOptions,
}

impl Inliner {
    pub fn new(
        source: impl Into<PathBuf>,
        destination: impl Into<PathBuf>,
        options: SyncOptions,
    ) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            options,
        }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }

    pub fn options(&self) -> &SyncOptions {
        &self.options
    }

    /// Compute the new destination content without writing anything. Both
    /// files are read in full and closed before this returns.
    pub fn plan(&self) -> Result<SyncOutcome, SyncError> {
        let source = read_text(&self.source)?;
        let document = read_text(&self.destination)?;

        let escaped = escape_template_literal(&source);
        let SyncOptions { markers, resync } = &self.options;
        let region = locate(&document, markers, *resync)
            .map_err(SyncError::from)
            .traced()?;
        info!(
            destination = ?self.destination,
            span = %region.span,
            anchor = %region.anchor,
            "Located placeholder region"
        );

        let content =
            splice(&document, region.span, &markers.opening, &escaped);
        debug!(
            before = document.len(),
            after = content.len(),
            escaped = escaped.len(),
            "Spliced document"
        );
        let changed = content != document;
        Ok(SyncOutcome {
            region,
            changed,
            content,
        })
    }

    /// Inline the source into the destination. The destination is written
    /// exactly once, and only if every previous step succeeded.
    pub fn sync(&self) -> Result<SyncOutcome, SyncError> {
        let outcome = self.plan()?;
        write_text(&self.destination, &outcome.content)?;
        info!(
            destination = ?self.destination,
            changed = outcome.changed,
            "Updated destination"
        );
        Ok(outcome)
    }
}

/// Read a whole file as UTF-8 text
pub fn read_text(path: &Path) -> Result<String, SyncError> {
    info!(?path, "Reading file");
    let bytes = fs::read(path)
        .map_err(|error| SyncError::Io {
            action: IoAction::Read,
            path: path.to_owned(),
            error,
        })
        .traced()?;
    String::from_utf8(bytes)
        .map_err(|error| SyncError::Encoding {
            path: path.to_owned(),
            error,
        })
        .traced()
}

/// Overwrite a file with the given text. The file is truncated, written with
/// a single `write_all`, and flushed before the handle is dropped.
pub fn write_text(path: &Path, content: &str) -> Result<(), SyncError> {
    info!(?path, bytes = content.len(), "Writing file");
    (|| {
        let mut file = File::create(path)?;
        file.write_all(content.as_bytes())?;
        file.flush()
    })()
    .map_err(|error| SyncError::Io {
        action: IoAction::Write,
        path: path.to_owned(),
        error,
    })
    .traced()
}

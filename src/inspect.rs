use std::path::{Path, PathBuf};

use derive_getters::Getters;
use log::debug;
use strum_macros::Display;

use crate::error::InspectError;
use crate::kind::{classify, FileKind};
use crate::resolve::resolve;

/// Diagnostic strings are cut at this many characters so failure payloads
/// never balloon for large files.
const TRUNCATE_AT: usize = 255;
const TRUNCATE_MARKER: char = '…';

/// Text encoding used to decode file content for substring checks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Encoding {
    /// Lossy UTF-8: invalid sequences become replacement characters instead
    /// of aborting the assertion, so arbitrary bytes always decode.
    #[default]
    Utf8,
    /// Each byte maps to the identical code point.
    Latin1,
}

impl Encoding {
    fn decode(self, bytes: &[u8]) -> String {
        match self {
            Self::Utf8 => String::from_utf8_lossy(bytes).into_owned(),
            Self::Latin1 => bytes.iter().map(|&byte| char::from(byte)).collect(),
        }
    }
}

/// A chainable inspection context bound to one subject path.
///
/// The subject is resolved against `base` (the directory of the code that
/// created the context) on every call, and the filesystem is re-queried every
/// time, so nothing observed by one assertion is carried into the next.
/// Successful assertions return `Ok(&self)`, the same context:
///
/// ```no_run
/// use inspectfs::FileInspector;
///
/// # fn main() -> Result<(), inspectfs::InspectError> {
/// let insp = FileInspector::new("/srv/fixtures", "out/report.txt");
/// insp.is_file()?.contains("status: ok")?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Getters)]
pub struct FileInspector {
    base: PathBuf,
    subject: PathBuf,
    encoding: Encoding,
}

impl FileInspector {
    pub fn new(base: impl Into<PathBuf>, subject: impl Into<PathBuf>) -> Self {
        Self {
            base: base.into(),
            subject: subject.into(),
            encoding: Encoding::default(),
        }
    }

    #[must_use]
    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// The absolute, normalized subject path. Recomputed on every call.
    pub fn resolved(&self) -> PathBuf {
        resolve(&self.base, &self.subject)
    }

    /// Classify the subject without asserting anything.
    pub fn kind(&self) -> FileKind {
        classify(self.resolved())
    }

    /// Pass if the subject is accessible at all, whatever its kind.
    ///
    /// Uses a plain accessibility probe rather than the classifier, so a
    /// dangling symlink counts as not existing here even though [`kind`]
    /// reports it as a symbolic link.
    ///
    /// [`kind`]: Self::kind
    pub fn exists(&self) -> Result<&Self, InspectError> {
        let path = self.resolved();
        if accessible(&path) {
            Ok(self)
        } else {
            Err(InspectError::new(format!("{path:?} does not exist")))
        }
    }

    /// Pass if the subject is not accessible.
    pub fn not_exists(&self) -> Result<&Self, InspectError> {
        let path = self.resolved();
        if accessible(&path) {
            Err(InspectError::new(format!("{path:?} exists")))
        } else {
            Ok(self)
        }
    }

    pub fn is_file(&self) -> Result<&Self, InspectError> {
        self.is_kind(FileKind::File)
    }

    /// Pass for anything that is not a regular file, absent subjects
    /// included.
    pub fn is_not_file(&self) -> Result<&Self, InspectError> {
        self.is_not_kind(FileKind::File)
    }

    pub fn is_directory(&self) -> Result<&Self, InspectError> {
        self.is_kind(FileKind::Directory)
    }

    /// Pass for anything that is not a directory, absent subjects included.
    pub fn is_not_directory(&self) -> Result<&Self, InspectError> {
        self.is_not_kind(FileKind::Directory)
    }

    /// Pass if the decoded content of the subject has `needle` as a literal
    /// substring. Fails for absent subjects and for directories.
    pub fn contains(&self, needle: &str) -> Result<&Self, InspectError> {
        let path = self.resolved();
        let content = self.searchable_content(&path)?;
        if content.contains(needle) {
            Ok(self)
        } else {
            Err(InspectError::with_diff(
                format!("{path:?} does not contain the expected text"),
                truncate(&content),
                truncate(needle),
            ))
        }
    }

    /// Logical negation of [`contains`], except on absent subjects, where
    /// both differ: `contains` fails, `not_contains` passes without reading
    /// anything.
    ///
    /// [`contains`]: Self::contains
    pub fn not_contains(&self, needle: &str) -> Result<&Self, InspectError> {
        let path = self.resolved();
        if classify(&path) == FileKind::Absent {
            return Ok(self);
        }
        let content = self.searchable_content(&path)?;
        if content.contains(needle) {
            Err(InspectError::with_diff(
                format!("{path:?} contains the unexpected text"),
                truncate(&content),
                truncate(needle),
            ))
        } else {
            Ok(self)
        }
    }

    fn is_kind(&self, expected: FileKind) -> Result<&Self, InspectError> {
        let path = self.resolved();
        match classify(&path) {
            kind if kind == expected => Ok(self),
            FileKind::Absent => Err(InspectError::new(format!("{path:?} does not exist"))),
            kind => Err(InspectError::with_diff(
                format!("{path:?} is not a {expected}"),
                kind.to_string(),
                expected.to_string(),
            )),
        }
    }

    fn is_not_kind(&self, unexpected: FileKind) -> Result<&Self, InspectError> {
        let path = self.resolved();
        let kind = classify(&path);
        if kind == unexpected {
            Err(InspectError::with_diff(
                format!("{path:?} is a {unexpected}"),
                kind.to_string(),
                format!("not a {unexpected}"),
            ))
        } else {
            Ok(self)
        }
    }

    /// Decoded content of the subject, for the substring checks. Directories
    /// and absent entries have nothing searchable; read failures are wrapped
    /// into [`InspectError`] rather than surfaced as raw I/O errors, keeping
    /// the error taxonomy uniform.
    fn searchable_content(&self, path: &Path) -> Result<String, InspectError> {
        match classify(path) {
            FileKind::Absent => Err(InspectError::new(format!(
                "{path:?} does not exist, cannot search its content"
            ))),
            FileKind::Directory => Err(InspectError::with_actual(
                format!("{path:?} is a directory, cannot search its content"),
                FileKind::Directory.to_string(),
            )),
            kind => {
                debug!("{path:?}: reading content of {kind} as {}", self.encoding);
                let bytes = std::fs::read(path).map_err(|err| {
                    InspectError::new(format!("{path:?} could not be read: {err}"))
                })?;
                Ok(self.encoding.decode(&bytes))
            }
        }
    }
}

// `try_exists` follows symlinks; probe errors count as not accessible, the
// same as a missing entry.
fn accessible(path: &Path) -> bool {
    path.try_exists().unwrap_or(false)
}

fn truncate(text: &str) -> String {
    if text.chars().count() <= TRUNCATE_AT {
        text.to_owned()
    } else {
        let mut cut: String = text.chars().take(TRUNCATE_AT).collect();
        cut.push(TRUNCATE_MARKER);
        cut
    }
}

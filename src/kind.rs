use std::fs::FileType;
use std::path::Path;

use log::{debug, warn};
use strum_macros::{Display, IntoStaticStr};

/// Classification of a filesystem entry, as observed at query time.
///
/// The `Display` strings ("file", "block device", ...) are exactly what ends
/// up in the `actual`/`expected` fields of an [`InspectError`].
///
/// [`InspectError`]: crate::InspectError
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum FileKind {
    File,
    Directory,
    #[strum(serialize = "block device")]
    BlockDevice,
    #[strum(serialize = "character device")]
    CharacterDevice,
    #[strum(serialize = "symbolic link")]
    SymbolicLink,
    Fifo,
    Socket,
    /// The entry could not be statted at all: missing, permission denied, or
    /// an unreadable parent. The causes are deliberately not distinguished.
    Absent,
}

impl FileKind {
    pub fn is_present(self) -> bool {
        self != Self::Absent
    }

    fn from_file_type(file_type: FileType) -> Self {
        // symlink first: the stat is link-aware, so a link never reports as
        // its target's kind
        if file_type.is_symlink() {
            return Self::SymbolicLink;
        }
        if file_type.is_file() {
            return Self::File;
        }
        if file_type.is_dir() {
            return Self::Directory;
        }
        #[cfg(unix)]
        {
            use std::os::unix::fs::FileTypeExt;
            if file_type.is_block_device() {
                return Self::BlockDevice;
            }
            if file_type.is_char_device() {
                return Self::CharacterDevice;
            }
            if file_type.is_fifo() {
                return Self::Fifo;
            }
            if file_type.is_socket() {
                return Self::Socket;
            }
        }
        warn!("unrecognized file type {file_type:?}, reporting as absent");
        Self::Absent
    }
}

/// State the entry at `path` without following symlinks.
///
/// Total: every stat failure degrades to [`FileKind::Absent`] instead of
/// propagating, since callers test existence and kind together. Nothing is
/// cached; calling twice may observe different kinds if the filesystem
/// changed in between.
pub fn classify(path: impl AsRef<Path>) -> FileKind {
    let path = path.as_ref();
    match path.symlink_metadata() {
        Ok(metadata) => {
            let kind = FileKind::from_file_type(metadata.file_type());
            debug!("{path:?}: classified as {kind}");
            kind
        }
        Err(err) => {
            debug!("{path:?}: stat failed ({err}), classifying as absent");
            FileKind::Absent
        }
    }
}

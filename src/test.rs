use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use once_cell::sync::Lazy;
use tempfile::TempDir;

static LOGGING: Lazy<()> = Lazy::new(|| {
    let _ = env_logger::builder().is_test(true).try_init();
});

/// Fresh scratch directory, removed on drop. Also wires up test logging.
pub fn scratch_dir() -> Result<TempDir> {
    Lazy::force(&LOGGING);
    Ok(tempfile::tempdir()?)
}

pub fn write_file(dir: &Path, name: &str, content: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    fs::write(&path, content)?;
    Ok(path)
}

#[cfg(unix)]
pub fn make_fifo(path: &Path) -> Result<()> {
    use std::ffi::CString;
    use std::os::unix::ffi::OsStrExt;

    let c_path = CString::new(path.as_os_str().as_bytes())?;
    let rc = unsafe { libc::mkfifo(c_path.as_ptr(), 0o644) };
    anyhow::ensure!(
        rc == 0,
        "mkfifo({path:?}) failed: {}",
        std::io::Error::last_os_error()
    );
    Ok(())
}

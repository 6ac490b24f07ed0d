use std::path::{Component, Path, PathBuf};

/// Resolve `subject` against `base`, normalizing `.` and `..` segments.
///
/// Pure and infallible: no filesystem access, so symlinks are not followed
/// and `..` is collapsed lexically. `base` is expected to be absolute (the
/// directory of the code that built the inspection context); an absolute
/// `subject` ignores `base` entirely.
pub fn resolve(base: impl AsRef<Path>, subject: impl AsRef<Path>) -> PathBuf {
    let subject = subject.as_ref();
    if subject.is_absolute() {
        normalize(subject)
    } else {
        normalize(&base.as_ref().join(subject))
    }
}

fn normalize(path: &Path) -> PathBuf {
    let mut components = path.components().peekable();
    let mut out = if let Some(component @ Component::Prefix(..)) = components.peek().copied() {
        components.next();
        PathBuf::from(component.as_os_str())
    } else {
        PathBuf::new()
    };

    for component in components {
        match component {
            // prefix can only be the first component
            Component::Prefix(..) => unreachable!(),
            Component::RootDir => out.push(component.as_os_str()),
            Component::CurDir => {}
            // pop is a no-op at the root, so "/.." stays "/"
            Component::ParentDir => {
                out.pop();
            }
            Component::Normal(segment) => out.push(segment),
        }
    }
    out
}

#[cfg(test)]
mod test {
    use assert2::check;

    use super::*;

    #[test]
    fn relative_subject_joins_base() {
        check!(resolve("/base/dir", "a.txt") == Path::new("/base/dir/a.txt"));
        check!(resolve("/base/dir", "sub/a.txt") == Path::new("/base/dir/sub/a.txt"));
    }

    #[test]
    fn absolute_subject_ignores_base() {
        check!(resolve("/base/dir", "/etc/hosts") == Path::new("/etc/hosts"));
    }

    #[test]
    fn dot_segments_are_collapsed() {
        check!(resolve("/base", "./a/./b") == Path::new("/base/a/b"));
        check!(resolve("/base/dir", "../a.txt") == Path::new("/base/a.txt"));
        check!(resolve("/base", "a/../b") == Path::new("/base/b"));
    }

    #[test]
    fn parent_of_root_stays_root() {
        check!(resolve("/", "../../x") == Path::new("/x"));
        check!(resolve("/base", "/../x") == Path::new("/x"));
    }

    #[test]
    fn resolution_is_deterministic_without_io() {
        // the path does not have to exist
        let first = resolve("/nowhere", "ghost/../phantom.txt");
        let second = resolve("/nowhere", "ghost/../phantom.txt");
        check!(first == second);
        check!(first == Path::new("/nowhere/phantom.txt"));
    }
}

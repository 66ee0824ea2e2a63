use std::path::Path;

use crate::error::LoadError;

/// Something that can populate itself from the resource at a path.
///
/// The path is only borrowed for the duration of the call. How it is
/// interpreted, which formats are accepted and whether a second load
/// replaces or merges state are decided by each implementor and
/// documented on the implementing type. Every call may fail, so callers
/// holding a `dyn FileLoadable` must check the result.
///
/// Loading is synchronous and may block on I/O. Callers that need it off
/// the current thread move the entity to a worker and call this there.
pub trait FileLoadable {
    fn load_from_path(&mut self, path: &Path) -> Result<(), LoadError>;
}

impl<T: FileLoadable + ?Sized> FileLoadable for Box<T> {
    fn load_from_path(&mut self, path: &Path) -> Result<(), LoadError> {
        (**self).load_from_path(path)
    }
}

/// Builds a default `T` and loads it from `path`.
pub fn load_new<T, P>(path: P) -> Result<T, LoadError>
where
    T: FileLoadable + Default,
    P: AsRef<Path>,
{
    let mut value = T::default();
    value.load_from_path(path.as_ref())?;
    Ok(value)
}

/// Rejects paths whose extension is not one of `extensions` (ASCII case-insensitive).
pub fn check_extension(path: &Path, extensions: &[&str]) -> Result<(), LoadError> {
    let matches = path
        .extension()
        .and_then(|extension| extension.to_str())
        .map(|extension| {
            extensions
                .iter()
                .any(|expected| expected.eq_ignore_ascii_case(extension))
        })
        .unwrap_or(false);

    if matches {
        Ok(())
    } else {
        Err(LoadError::UnsupportedExtension {
            path: path.to_path_buf(),
            expected: extensions.iter().map(|e| e.to_string()).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::{check_extension, load_new, FileLoadable};
    use crate::error::LoadError;

    #[derive(Default)]
    struct Counter {
        loads: usize,
        last: String,
    }

    impl FileLoadable for Counter {
        fn load_from_path(&mut self, path: &Path) -> Result<(), LoadError> {
            if path.as_os_str().is_empty() {
                return Err(LoadError::NotFound {
                    path: path.to_path_buf(),
                });
            }
            self.loads += 1;
            self.last = path.display().to_string();
            Ok(())
        }
    }

    #[test]
    fn dispatches_through_trait_objects() {
        let mut boxed: Box<dyn FileLoadable> = Box::new(Counter::default());
        boxed.load_from_path(Path::new("a")).unwrap();
        boxed.load_from_path(Path::new("b")).unwrap();
        assert!(boxed.load_from_path(Path::new("")).is_err());
    }

    #[test]
    fn load_new_builds_then_loads() {
        let counter: Counter = load_new("scene.txt").unwrap();
        assert_eq!(1, counter.loads);
        assert_eq!("scene.txt", counter.last);

        let error = load_new::<Counter, _>("").err().unwrap();
        assert!(error.is_not_found());
    }

    #[test]
    fn extension_check_ignores_case() {
        assert!(check_extension(Path::new("sky.HDR"), &["hdr"]).is_ok());
        assert!(check_extension(Path::new("config.yml"), &["yaml", "yml"]).is_ok());

        match check_extension(Path::new("noext"), &["yaml", "yml"]) {
            Err(LoadError::UnsupportedExtension { expected, .. }) => {
                assert_eq!(vec!["yaml".to_string(), "yml".to_string()], expected)
            }
            other => panic!("unexpected result {other:?}"),
        }
    }
}

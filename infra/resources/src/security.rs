use crate::error::ResourceError;
use std::io;
use std::path::{Component, Path, PathBuf};

fn rejected(key: &str, reason: &'static str) -> ResourceError {
    ResourceError::Read {
        key: key.to_owned().into(),
        source: io::Error::new(io::ErrorKind::PermissionDenied, reason),
        context: Some("Key rejected by sandbox".into()),
    }
}

/// Collapse `.` / `..` lexically; a key may never climb above the store root.
fn normalize_key(key: &str) -> Result<PathBuf, ResourceError> {
    let mut out = PathBuf::new();

    for c in Path::new(key).components() {
        match c {
            Component::CurDir => {},
            Component::Normal(seg) => out.push(seg),
            Component::ParentDir => {
                if !out.pop() {
                    return Err(rejected(key, "key escapes the resource root via '..'"));
                }
            },
            Component::RootDir | Component::Prefix(_) => {
                return Err(rejected(key, "absolute keys are not allowed"));
            },
        }
    }

    if out.as_os_str().is_empty() {
        return Err(rejected(key, "key does not name a resource"));
    }

    Ok(out)
}

/// Maps a resource key onto a physical path inside the canonical `root`.
///
/// Missing files are reported as [`ResourceError::NotFound`]; existing files are
/// canonicalized so that symlinks pointing outside the root are refused.
pub(crate) fn resolve_key(root: &Path, key: &str) -> Result<PathBuf, ResourceError> {
    let joined = root.join(normalize_key(key)?);

    match joined.canonicalize() {
        Ok(canonical) if canonical.starts_with(root) => Ok(canonical),
        Ok(_) => Err(rejected(key, "resource resolves outside the resource root")),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            Err(ResourceError::NotFound { key: key.to_owned().into(), context: None })
        },
        Err(e) => Err(ResourceError::Read {
            key: key.to_owned().into(),
            source: e,
            context: Some(format!("Failed to resolve {}", joined.display()).into()),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_collapses_inner_parent_segments() {
        let path = normalize_key("i18n/./black/../gold/en-US.json").expect("valid key");
        assert_eq!(path, PathBuf::from("i18n/gold/en-US.json"));
    }

    #[test]
    fn normalize_rejects_escapes_and_absolute_keys() {
        assert!(normalize_key("../secrets.json").is_err());
        assert!(normalize_key("i18n/../../secrets.json").is_err());
        assert!(normalize_key("/etc/passwd").is_err());
        assert!(normalize_key("").is_err());
        assert!(normalize_key(".").is_err());
    }
}

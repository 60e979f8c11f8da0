//! file:// URI to filesystem path conversion

use crate::error::{Error, Result};
use std::path::PathBuf;

/// Convert a Banshee file URI into a native absolute path
///
/// Only `file://` URIs with an absolute path are accepted; gvfs and other
/// remote schemes fail with [`Error::UnsupportedUri`]. The path component
/// is percent-decoded and the resulting bytes are interpreted in the
/// platform's filesystem encoding.
pub fn to_path(uri: &str) -> Result<PathBuf> {
    let encoded = uri
        .strip_prefix("file://")
        .filter(|rest| rest.starts_with('/'))
        .ok_or_else(|| Error::UnsupportedUri {
            uri: uri.to_string(),
        })?;

    let bytes = urlencoding::decode_binary(encoded.as_bytes());

    #[cfg(unix)]
    {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;
        Ok(PathBuf::from(OsStr::from_bytes(&bytes)))
    }

    #[cfg(not(unix))]
    {
        let decoded =
            String::from_utf8(bytes.into_owned()).map_err(|_| Error::UnsupportedUri {
                uri: uri.to_string(),
            })?;
        Ok(PathBuf::from(decoded))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_percent_escapes() {
        let path = to_path("file:///home/u/My%20Song.mp3").unwrap();
        assert_eq!(path, PathBuf::from("/home/u/My Song.mp3"));
    }

    #[test]
    fn test_plain_uri_passes_through() {
        let path = to_path("file:///music/track.ogg").unwrap();
        assert_eq!(path, PathBuf::from("/music/track.ogg"));
    }

    #[test]
    fn test_rejects_other_schemes() {
        let err = to_path("smb://server/share/x.mp3").unwrap_err();
        assert!(matches!(err, Error::UnsupportedUri { .. }));
    }

    #[test]
    fn test_rejects_relative_file_uri() {
        // file://host/... or a missing leading slash is not a local
        // absolute path
        assert!(to_path("file://music/x.mp3").is_err());
    }

    #[test]
    fn test_reports_offending_uri() {
        let err = to_path("sftp://box/a.flac").unwrap_err();
        assert!(err.to_string().contains("sftp://box/a.flac"));
    }
}

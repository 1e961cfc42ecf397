//! Caller location resolution.

use std::panic::Location;
use std::path::Path;

/// Degraded location emitted when no call-site information is available.
pub const UNKNOWN_LOCATION: &str = "?:?";

/// Returns `file:line` of the function invocation on the calling thread,
/// with the file reduced to its basename.
///
/// Location data is threaded through `#[track_caller]` rather than taken
/// from the runtime stack: an annotated caller forwards its own caller's
/// location, which gives the same skip semantics as an explicit frame count.
#[track_caller]
pub fn caller() -> String {
    let loc = Location::caller();
    location(Some(loc.file()), Some(loc.line()))
}

/// Format an optional `file`/`line` pair as `basename(file):line`, falling
/// back to [`UNKNOWN_LOCATION`] when either component is missing.
pub fn location(file: Option<&str>, line: Option<u32>) -> String {
    match (file, line) {
        (Some(file), Some(line)) => {
            let base = Path::new(file)
                .file_name()
                .map(|f| f.to_string_lossy())
                .unwrap_or_else(|| file.into());
            format!("{}:{}", base, line)
        }
        _ => UNKNOWN_LOCATION.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caller_resolves_to_this_file() {
        let at = caller();
        assert!(at.starts_with("callsite.rs:"), "got {}", at);
    }

    #[test]
    fn file_reduced_to_basename() {
        assert_eq!(location(Some("src/net/http.rs"), Some(12)), "http.rs:12");
        assert_eq!(location(Some("plain.rs"), Some(3)), "plain.rs:3");
    }

    #[test]
    fn missing_components_degrade() {
        assert_eq!(location(None, Some(3)), UNKNOWN_LOCATION);
        assert_eq!(location(Some("a.rs"), None), UNKNOWN_LOCATION);
        assert_eq!(location(None, None), UNKNOWN_LOCATION);
    }
}

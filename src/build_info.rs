//! Commit and date baked in by `build.rs`, shown by `oche --version`.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// `"<version> (<date> <commit>)"`
pub fn version_string() -> String {
    format!(
        "{} ({} {})",
        env!("CARGO_PKG_VERSION"),
        BUILD_DATE,
        BUILD_COMMIT
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_constants_present() {
        assert!(BUILD_COMMIT == "unknown" || BUILD_COMMIT.len() == 7);
        assert!(BUILD_DATE == "unknown" || BUILD_DATE.len() == 10);
    }

    #[test]
    fn test_version_string_contains_commit() {
        let version = version_string();
        assert!(version.starts_with(env!("CARGO_PKG_VERSION")));
        assert!(version.contains(BUILD_COMMIT));
    }
}

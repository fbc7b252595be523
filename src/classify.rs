use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::ffi::OsStr;
use std::path::Path;

/// The closed set of filename extensions whose content is never inlined.
/// Classification is by name only; file bytes are never inspected.
pub const BINARY_EXTENSIONS: &[&str] = &[
    // Images
    "png", "jpg", "jpeg", "gif", "svg", "ico", "webp", "bmp", "tiff", "tif",
    // Video
    "mp4", "avi", "mov", "wmv", "flv", "webm", "mkv", "m4v",
    // Audio
    "mp3", "wav", "flac", "aac", "ogg", "wma", "m4a",
    // Archives
    "zip", "rar", "7z", "tar", "gz", "bz2", "xz",
    // Executables and shared objects
    "exe", "dll", "so", "dylib", "bin",
    // Binary document formats
    "pdf", "doc", "docx", "xls", "xlsx", "ppt", "pptx",
    // Databases, design files, disk images, packages
    "db", "sqlite", "sqlite3", "mdb", "accdb", "psd", "ai", "sketch", "fig",
    "iso", "img", "dmg", "pkg", "deb", "rpm",
];

static BINARY_EXTENSION_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| BINARY_EXTENSIONS.iter().copied().collect());

/// Whether a file's content should be replaced by the binary placeholder,
/// decided purely by its extension, case-insensitively.
pub fn is_binary(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .map(|ext| BINARY_EXTENSION_SET.contains(ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn flags_known_binary_extensions() {
        assert!(is_binary(&PathBuf::from("/d/logo.png")));
        assert!(is_binary(&PathBuf::from("report.PDF")));
        assert!(is_binary(&PathBuf::from("backup.tar")));
    }

    #[test]
    fn never_flags_text_or_unknown_extensions() {
        assert!(!is_binary(&PathBuf::from("a.txt")));
        assert!(!is_binary(&PathBuf::from("src/main.rs")));
        assert!(!is_binary(&PathBuf::from("Makefile")));
    }
}

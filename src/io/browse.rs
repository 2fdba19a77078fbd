//! Directory browsing
//!
//! A folder open is a non-recursive listing filtered to the recognized
//! font extensions. The extension match is case-insensitive but nothing
//! else is; entries keep the order the directory enumeration returns.

use std::fs;
use std::path::Path;

/// Recognized font file extensions, lower case, without the dot.
pub const FONT_EXTENSIONS: &[&str] = &["ttf", "otf", "ttc", "otc"];

/// Whether a file name carries one of the recognized font extensions.
pub fn has_font_extension(file_name: &str) -> bool {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            FONT_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// List the font files directly inside `dir`, in enumeration order.
///
/// Subdirectories and files with other extensions are skipped; file names
/// that are not valid Unicode are skipped as well since the list is for
/// display.
pub fn list_font_files(dir: &Path) -> std::io::Result<Vec<String>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            if has_font_extension(name) {
                files.push(name.to_string());
            }
        }
    }
    Ok(files)
}

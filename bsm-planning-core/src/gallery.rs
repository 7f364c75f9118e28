//! Photo-gallery image list generation.
//!
//! Walks the gallery directory under `public/` and emits the site-relative
//! image paths the gallery view loads at runtime.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::StoreError;

/// Extensions treated as images, matched case-insensitively.
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "bmp", "svg"];

/// Recursively collect image paths under `dir`.
///
/// Paths are `/`-separated, prefixed with `/`, and relative to `dir`'s
/// parent: scanning `public/gallery` yields `/gallery/sub/img.png`, which is
/// how the site addresses files under `public/`. Entries are visited in
/// file-name order per directory so the output is deterministic.
pub fn scan_gallery(dir: &Path) -> io::Result<Vec<String>> {
    let root = dir
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_default();

    let mut images = Vec::new();
    collect_images(dir, &format!("/{root}"), &mut images)?;
    Ok(images)
}

fn collect_images(dir: &Path, prefix: &str, images: &mut Vec<String>) -> io::Result<()> {
    let mut entries: Vec<_> = fs::read_dir(dir)?.filter_map(|e| e.ok()).collect();
    entries.sort_by_key(|entry| entry.file_name());

    for entry in entries {
        let path = entry.path();
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };

        if path.is_dir() {
            collect_images(&path, &format!("{prefix}/{name}"), images)?;
        } else if is_image(&path) {
            images.push(format!("{prefix}/{name}"));
        }
    }

    Ok(())
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
}

/// Write the image list as a pretty-printed JSON array.
pub fn write_image_list(path: &Path, images: &[String]) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| StoreError::io(path, e))?;
        }
    }
    let contents = serde_json::to_string_pretty(images)?;
    fs::write(path, contents).map_err(|e| StoreError::io(path, e))?;
    Ok(())
}

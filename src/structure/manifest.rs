use std::io;
use std::path::Path;

use walkdir::WalkDir;

/// List every entry below `dir` as a relative, `/`-separated path, sorted by
/// name. Directories carry a trailing `/`. `dir` itself is not listed.
pub fn manifest(dir: &Path) -> io::Result<Vec<String>> {
    let mut out = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .follow_links(false)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| {
            let msg = e.to_string();
            e.into_io_error().unwrap_or_else(|| io::Error::other(msg))
        })?;
        let rel = entry
            .path()
            .strip_prefix(dir)
            .map_err(io::Error::other)?
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join("/");
        if entry.file_type().is_dir() {
            out.push(format!("{}/", rel));
        } else {
            out.push(rel);
        }
    }
    Ok(out)
}

//! Output file naming

use std::path::{Path, PathBuf};

/// Output paths for `count` subpaths converted from `source`
///
/// One subpath writes `dir/name.<ext>`; more write `dir/name_shape0.<ext>`,
/// `dir/name_shape1.<ext>`, and so on. The source's last extension is
/// dropped, so `a.b.svg` becomes `a.b.path`.
pub fn output_names(source: &Path, count: usize, extension: &str) -> Vec<PathBuf> {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let dir = source.parent().unwrap_or_else(|| Path::new(""));

    match count {
        0 => Vec::new(),
        1 => vec![dir.join(format!("{}.{}", stem, extension))],
        n => (0..n)
            .map(|i| dir.join(format!("{}_shape{}.{}", stem, i, extension)))
            .collect(),
    }
}

use crate::utils::error::Result;
use ignore::WalkBuilder;
use std::path::Path;

/// Visits every entry under `root` depth-first, calling `visit` with the
/// entry's file name and its path relative to `root`. The root itself is not
/// reported. The first per-entry error aborts the whole walk.
pub fn walk_tree<F>(root: &Path, mut visit: F) -> Result<()>
where
    F: FnMut(&str, &Path),
{
    // 不套用隱藏檔或 gitignore 過濾，全部走訪
    let walker = WalkBuilder::new(root).standard_filters(false).build();

    for result in walker {
        let entry = result?;
        if entry.depth() == 0 {
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        let rel = entry.path().strip_prefix(root).unwrap_or_else(|_| entry.path());
        visit(&name, rel);
    }

    Ok(())
}

//! core::paths
//!
//! Mapping between document titles and relative file paths.
//!
//! A title doubles as a relative path: slashes in the category become
//! directory separators and the file gets a `.md` suffix. The codec itself
//! never sees the suffix; it is attached and stripped here.

use std::path::{Path, PathBuf};

/// File suffix for document bodies.
pub const MD_SUFFIX: &str = ".md";

/// Convert a title into the relative path of its local file.
///
/// Splits on `/` so the category becomes directories on any platform, and
/// appends the `.md` suffix to the leaf.
///
/// # Example
///
/// ```
/// use std::path::PathBuf;
/// use quire::core::paths::title_to_rel_path;
///
/// let rel = title_to_rel_path("ops/runbooks/oncall [id:7]");
/// let expected: PathBuf = ["ops", "runbooks", "oncall [id:7].md"].iter().collect();
/// assert_eq!(rel, expected);
/// ```
pub fn title_to_rel_path(title: &str) -> PathBuf {
    let mut path = PathBuf::new();
    let mut segments = title.split('/').peekable();
    while let Some(segment) = segments.next() {
        if segments.peek().is_some() {
            path.push(segment);
        } else {
            path.push(format!("{}{}", segment, MD_SUFFIX));
        }
    }
    path
}

/// Recover a title from the relative path of a local file.
///
/// Joins the path components with `/` and strips a trailing `.md` suffix
/// if present; a file without the suffix keeps its full name as the title.
///
/// # Example
///
/// ```
/// use std::path::Path;
/// use quire::core::paths::title_from_rel_path;
///
/// let title = title_from_rel_path(Path::new("ops/oncall [id:7].md"));
/// assert_eq!(title, "ops/oncall [id:7]");
/// ```
pub fn title_from_rel_path(path: &Path) -> String {
    let joined = path
        .iter()
        .map(|part| part.to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");
    joined
        .strip_suffix(MD_SUFFIX)
        .map(str::to_string)
        .unwrap_or(joined)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rel_path_appends_suffix_to_leaf_only() {
        let rel = title_to_rel_path("cate/gory/title");
        let expected: PathBuf = ["cate", "gory", "title.md"].iter().collect();
        assert_eq!(rel, expected);
    }

    #[test]
    fn rel_path_without_category_is_flat() {
        assert_eq!(title_to_rel_path("title"), PathBuf::from("title.md"));
    }

    #[test]
    fn rel_path_keeps_dots_in_title() {
        // A dotted title must not be treated as having an extension.
        assert_eq!(
            title_to_rel_path("notes v1.2"),
            PathBuf::from("notes v1.2.md")
        );
    }

    #[test]
    fn title_strips_md_suffix() {
        assert_eq!(
            title_from_rel_path(Path::new("cate/gory/title.md")),
            "cate/gory/title"
        );
    }

    #[test]
    fn title_without_suffix_is_kept() {
        assert_eq!(title_from_rel_path(Path::new("title.txt")), "title.txt");
    }

    #[test]
    fn titles_round_trip_through_paths() {
        for title in ["title", "cate/gory/title  title #tag [id:1]", "a/b"] {
            assert_eq!(title_from_rel_path(&title_to_rel_path(title)), title);
        }
    }
}

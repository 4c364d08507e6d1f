//! Collection loading from the filesystem.
//!
//! A collection is a directory tree of `.md` / `.mdx` files, each starting
//! with a YAML frontmatter block:
//!
//! ```text
//! ---
//! title: EBITDA
//! category: cours
//! description: Earnings before interest, taxes, depreciation and amortization
//! ---
//! # EBITDA
//! ```
//!
//! Hidden files and directories are skipped. Documents come back sorted by
//! relative path so load order is stable across platforms.

use std::fs;
use std::path::{Path, PathBuf};

use academy_markup::HeadingExtractor;
use serde::Deserialize;

use crate::document::{Collection, Document, SourceDocument};

/// Extensions accepted as documents.
const EXTENSIONS: [&str; 2] = ["md", "mdx"];

/// Frontmatter delimiter line.
const DELIMITER: &str = "---";

/// Error returned when a collection cannot be loaded.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// I/O error reading a file or directory.
    #[error("I/O error reading {}: {source}", path.display())]
    Io {
        /// File or directory being read.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
    /// The file has no `---` frontmatter block.
    #[error("Missing frontmatter in {}", .0.display())]
    MissingFrontmatter(PathBuf),
    /// The frontmatter is not valid or lacks a title.
    #[error("Invalid frontmatter in {}: {message}", path.display())]
    Frontmatter {
        /// Offending file.
        path: PathBuf,
        /// Parser message.
        message: String,
    },
}

/// Frontmatter fields read from each document.
#[derive(Debug, Deserialize)]
struct Frontmatter {
    title: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    disabled: bool,
}

/// Loads one content collection.
#[derive(Clone, Debug)]
pub struct CollectionLoader {
    root: PathBuf,
    collection: Collection,
    extractor: HeadingExtractor,
}

impl CollectionLoader {
    /// Create a loader for the collection rooted at `root`.
    ///
    /// Headings are extracted with `extractor`, which must use the same
    /// placeholders as the renderer.
    #[must_use]
    pub fn new(root: PathBuf, collection: Collection, extractor: HeadingExtractor) -> Self {
        Self {
            root,
            collection,
            extractor,
        }
    }

    /// Load every document in the collection.
    ///
    /// A missing root directory yields an empty collection.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] on I/O failure or invalid frontmatter.
    pub fn load(&self) -> Result<Vec<SourceDocument>, LoadError> {
        if !self.root.is_dir() {
            tracing::info!(
                collection = self.collection.as_str(),
                root = %self.root.display(),
                "Collection directory not found, treating as empty"
            );
            return Ok(Vec::new());
        }

        let mut files = Vec::new();
        scan_directory(&self.root, &mut files)?;
        files.sort();

        let documents = files
            .iter()
            .map(|file| self.load_file(file))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::info!(
            collection = self.collection.as_str(),
            count = documents.len(),
            "Loaded collection"
        );

        Ok(documents)
    }

    fn load_file(&self, file: &Path) -> Result<SourceDocument, LoadError> {
        let content = fs::read_to_string(file).map_err(|source| LoadError::Io {
            path: file.to_path_buf(),
            source,
        })?;

        let (yaml, body) =
            split_frontmatter(&content).ok_or_else(|| LoadError::MissingFrontmatter(file.to_path_buf()))?;

        let frontmatter: Frontmatter =
            serde_yaml::from_str(yaml).map_err(|e| LoadError::Frontmatter {
                path: file.to_path_buf(),
                message: e.to_string(),
            })?;

        let document = Document {
            path: document_path(&self.root, file),
            title: frontmatter.title,
            description: frontmatter.description,
            category: frontmatter.category,
            headings: self.extractor.extract(body),
            disabled: frontmatter.disabled,
            collection: self.collection,
        };

        Ok(SourceDocument::new(document, body))
    }
}

/// Recursively collect document files, skipping hidden entries.
fn scan_directory(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), LoadError> {
    let entries = fs::read_dir(dir).map_err(|source| LoadError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    for entry in entries.filter_map(Result::ok) {
        if entry.file_name().to_string_lossy().starts_with('.') {
            continue;
        }

        let path = entry.path();
        if entry.file_type().is_ok_and(|t| t.is_dir()) {
            scan_directory(&path, files)?;
        } else if path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| EXTENSIONS.contains(&e))
        {
            files.push(path);
        }
    }

    Ok(())
}

/// Split `---` frontmatter from the body.
///
/// Returns `None` if the content does not open with a delimiter line or the
/// block is never closed.
fn split_frontmatter(content: &str) -> Option<(&str, &str)> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let after = content.strip_prefix(DELIMITER)?;
    let rest = after
        .strip_prefix('\n')
        .or_else(|| after.strip_prefix("\r\n"))?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == DELIMITER {
            let yaml = &rest[..offset];
            let body = &rest[offset + line.len()..];
            return Some((yaml, body));
        }
        offset += line.len();
    }

    None
}

/// Relative path without extension, `/`-separated.
fn document_path(root: &Path, file: &Path) -> String {
    let relative = file.strip_prefix(root).unwrap_or(file).with_extension("");
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use academy_markup::Placeholders;
    use pretty_assertions::assert_eq;

    use super::*;

    fn write(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn loader(root: &Path) -> CollectionLoader {
        CollectionLoader::new(
            root.to_path_buf(),
            Collection::Docs,
            HeadingExtractor::default(),
        )
    }

    #[test]
    fn test_split_frontmatter() {
        let (yaml, body) = split_frontmatter("---\ntitle: A\n---\n# Body\n").unwrap();
        assert_eq!(yaml, "title: A\n");
        assert_eq!(body, "# Body\n");
    }

    #[test]
    fn test_split_frontmatter_crlf() {
        let (yaml, body) = split_frontmatter("---\r\ntitle: A\r\n---\r\nBody").unwrap();
        assert_eq!(yaml, "title: A\r\n");
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_split_frontmatter_missing() {
        assert!(split_frontmatter("# No frontmatter").is_none());
        assert!(split_frontmatter("---\ntitle: unclosed\n").is_none());
    }

    #[test]
    fn test_document_path() {
        let root = Path::new("/content/docs");
        assert_eq!(
            document_path(root, Path::new("/content/docs/cours/ebitda.mdx")),
            "cours/ebitda"
        );
        assert_eq!(document_path(root, Path::new("/content/docs/faq.md")), "faq");
    }

    #[test]
    fn test_load_collection() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "cours/ebitda.mdx",
            "---\ntitle: EBITDA\ncategory: cours\ndescription: Marge\n---\n# EBITDA\n\n## Calcul\n",
        );
        write(dir.path(), "faq.md", "---\ntitle: FAQ\ndisabled: true\n---\nBody\n");

        let docs = loader(dir.path()).load().unwrap();

        assert_eq!(docs.len(), 2);
        let ebitda = &docs[0].document;
        assert_eq!(ebitda.path, "cours/ebitda");
        assert_eq!(ebitda.title, "EBITDA");
        assert_eq!(ebitda.category.as_deref(), Some("cours"));
        assert_eq!(ebitda.description.as_deref(), Some("Marge"));
        assert_eq!(ebitda.headings.len(), 2);
        assert_eq!(ebitda.headings[1].slug, "calcul");
        assert_eq!(docs[0].body, "# EBITDA\n\n## Calcul\n");

        let faq = &docs[1].document;
        assert_eq!(faq.path, "faq");
        assert!(faq.disabled);
        assert!(faq.category.is_none());
    }

    #[test]
    fn test_load_sorted_by_path() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["c.md", "a.md", "b/z.md", "b/a.md"] {
            write(dir.path(), name, "---\ntitle: T\n---\n");
        }

        let paths: Vec<String> = loader(dir.path())
            .load()
            .unwrap()
            .into_iter()
            .map(|d| d.document.path)
            .collect();

        assert_eq!(paths, vec!["a", "b/a", "b/z", "c"]);
    }

    #[test]
    fn test_load_skips_hidden_and_other_files() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "visible.md", "---\ntitle: V\n---\n");
        write(dir.path(), ".draft.md", "---\ntitle: H\n---\n");
        write(dir.path(), ".git/notes.md", "---\ntitle: G\n---\n");
        write(dir.path(), "image.png", "binary");

        let docs = loader(dir.path()).load().unwrap();

        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].document.path, "visible");
    }

    #[test]
    fn test_load_missing_directory_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let docs = loader(&dir.path().join("missing")).load().unwrap();
        assert!(docs.is_empty());
    }

    #[test]
    fn test_load_missing_title_is_error() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "bad.md", "---\ncategory: cours\n---\n");

        let err = loader(dir.path()).load().unwrap_err();

        assert!(matches!(err, LoadError::Frontmatter { .. }));
        assert!(err.to_string().contains("bad.md"));
    }

    #[test]
    fn test_load_missing_frontmatter_is_error() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "plain.md", "# Just markdown\n");

        let err = loader(dir.path()).load().unwrap_err();

        assert!(matches!(err, LoadError::MissingFrontmatter(_)));
    }

    #[test]
    fn test_load_substitutes_placeholders_in_headings() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "intro.md",
            "---\ntitle: Intro\n---\n# Bienvenue sur {APP.LONG_NAME}\n",
        );
        let loader = CollectionLoader::new(
            dir.path().to_path_buf(),
            Collection::Pages,
            HeadingExtractor::new(Placeholders::new().with("LONG_NAME", "Fintech Academy")),
        );

        let docs = loader.load().unwrap();

        assert_eq!(docs[0].document.collection, Collection::Pages);
        assert_eq!(
            docs[0].document.headings[0].slug,
            "bienvenue-sur-fintech-academy"
        );
    }
}

//! File system repository

use crate::error::{ChaptersError, Result};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Abstract repository for markdown documents
pub trait DocumentRepository {
    /// Get the directory documents are resolved against
    fn root(&self) -> &Path;

    /// List markdown documents, relative to the root, in sorted order
    fn discover_documents(&self, recursive: bool) -> Result<Vec<PathBuf>>;

    /// Read a document's full content
    fn read_document(&self, path: &Path) -> Result<String>;

    /// Replace a document's content
    fn write_document(&self, path: &Path, content: &str) -> Result<()>;
}

/// File system implementation of DocumentRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Create a repository, checking that the root is an existing directory
    pub fn open(root: PathBuf) -> Result<Self> {
        if !root.is_dir() {
            return Err(ChaptersError::DirectoryNotFound(root));
        }
        Ok(FileSystemRepository::new(root))
    }

    /// Check if a path names a markdown file
    pub fn is_markdown(path: &Path) -> bool {
        path.extension().and_then(|ext| ext.to_str()) == Some("md")
    }

    fn is_hidden(name: &std::ffi::OsStr) -> bool {
        name.to_str().is_some_and(|name| name.starts_with('.'))
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }

    fn collect_root_documents(&self) -> Result<Vec<PathBuf>> {
        let entries = fs::read_dir(&self.root)?;
        let mut documents = Vec::new();

        for entry in entries {
            let Ok(entry) = entry else {
                continue;
            };
            let path = entry.path();
            if !path.is_file() || Self::is_hidden(&entry.file_name()) {
                continue;
            }
            if !Self::is_markdown(&path) {
                continue;
            }
            if let Ok(rel) = path.strip_prefix(&self.root) {
                documents.push(rel.to_path_buf());
            }
        }

        Ok(documents)
    }

    fn collect_recursive_documents(&self) -> Vec<PathBuf> {
        let mut documents = Vec::new();

        let walker = WalkDir::new(&self.root).into_iter().filter_entry(|entry| {
            entry.depth() == 0 || !Self::is_hidden(entry.file_name())
        });

        for entry in walker {
            let Ok(entry) = entry else {
                continue;
            };
            if !entry.file_type().is_file() || !Self::is_markdown(entry.path()) {
                continue;
            }
            if let Ok(rel) = entry.path().strip_prefix(&self.root) {
                documents.push(rel.to_path_buf());
            }
        }

        documents
    }
}

impl DocumentRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn discover_documents(&self, recursive: bool) -> Result<Vec<PathBuf>> {
        let mut documents = if recursive {
            self.collect_recursive_documents()
        } else {
            self.collect_root_documents()?
        };
        documents.sort();
        debug!(
            "Found {} markdown file(s) in {}",
            documents.len(),
            self.root.display()
        );
        Ok(documents)
    }

    fn read_document(&self, path: &Path) -> Result<String> {
        let full = self.resolve(path);
        fs::read_to_string(&full).map_err(|source| ChaptersError::Read {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Overwrite the document in place, following symlinks. A read-only
    /// document is a write error.
    fn write_document(&self, path: &Path, content: &str) -> Result<()> {
        let full = self.resolve(path);
        fs::write(&full, content).map_err(|source| ChaptersError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

use std::fs;
use std::path::{Path, PathBuf};

use relative_path::RelativePath;

use crate::parsing::{self, blocks::Block};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("Document not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid documents directory: {0}")]
    InvalidDocumentsDir(String),
}

/// Read a markdown document and return its content
pub fn read_document(relative_path: &RelativePath, root: &Path) -> Result<String, IoError> {
    let absolute_path = relative_path.to_path(root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    fs::read_to_string(&absolute_path).map_err(IoError::Io)
}

/// Write content to a markdown document, creating parent directories
pub fn write_document(
    relative_path: &RelativePath,
    root: &Path,
    content: &str,
) -> Result<(), IoError> {
    let absolute_path = relative_path.to_path(root);

    if let Some(parent) = absolute_path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(&absolute_path, content).map_err(IoError::Io)
}

/// Read a document and parse it into blocks.
///
/// Only the read can fail; parsing is total. Callers report the error to the
/// user and keep the viewer running.
pub fn load_blocks(relative_path: &RelativePath, root: &Path) -> Result<Vec<Block>, IoError> {
    let content = read_document(relative_path, root)?;
    Ok(parsing::parse(&content))
}

/// Scan for markdown documents under the documents directory, sorted
pub fn scan_documents(root: &Path) -> Result<Vec<PathBuf>, IoError> {
    if !root.exists() {
        return Err(IoError::InvalidDocumentsDir(
            "documents directory not found".to_string(),
        ));
    }

    let mut documents = Vec::new();
    scan_directory_recursive(root, &mut documents)?;
    documents.sort();
    Ok(documents)
}

fn scan_directory_recursive(dir: &Path, documents: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, documents)?;
        } else if let Some(ext) = path.extension()
            && ext == "md"
        {
            documents.push(path);
        }
    }

    Ok(())
}

pub fn validate_documents_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidDocumentsDir(
            "Directory does not exist".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use relative_path::RelativePath;
    use tempfile::TempDir;

    fn create_document(dir: &TempDir, name: &str, content: &str) {
        let path = dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }

    #[test]
    fn scan_finds_markdown_documents_sorted() {
        // Given a documents directory with markdown and other files
        let dir = TempDir::new().unwrap();
        create_document(&dir, "b.md", "# B");
        create_document(&dir, "a.md", "# A");
        create_document(&dir, "image.png", "not markdown");
        create_document(&dir, "nested/deep.md", "# Deep");

        // When scanning
        let documents = scan_documents(dir.path()).unwrap();

        // Then only .md files are found, in sorted order
        let names: Vec<_> = documents
            .iter()
            .map(|p| p.strip_prefix(dir.path()).unwrap().to_path_buf())
            .collect();
        assert_eq!(
            names,
            vec![
                PathBuf::from("a.md"),
                PathBuf::from("b.md"),
                PathBuf::from("nested/deep.md"),
            ]
        );
    }

    #[test]
    fn scan_rejects_missing_directory() {
        let result = scan_documents(Path::new("/this/path/does/not/exist"));
        assert!(matches!(result, Err(IoError::InvalidDocumentsDir(_))));
    }

    #[test]
    fn read_document_success() {
        let dir = TempDir::new().unwrap();
        create_document(&dir, "doc.md", "# Title\n\nBody");

        let content = read_document(RelativePath::new("doc.md"), dir.path()).unwrap();
        assert_eq!(content, "# Title\n\nBody");
    }

    #[test]
    fn read_document_not_found() {
        let dir = TempDir::new().unwrap();
        let result = read_document(RelativePath::new("missing.md"), dir.path());
        assert!(matches!(result, Err(IoError::NotFound(_))));
    }

    #[test]
    fn write_document_creates_parents_and_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = RelativePath::new("folder/sub/new.md");

        write_document(path, dir.path(), "# New").unwrap();

        assert_eq!(read_document(path, dir.path()).unwrap(), "# New");
    }

    #[test]
    fn write_document_overwrites() {
        let dir = TempDir::new().unwrap();
        let path = RelativePath::new("doc.md");

        write_document(path, dir.path(), "first").unwrap();
        write_document(path, dir.path(), "second").unwrap();

        assert_eq!(read_document(path, dir.path()).unwrap(), "second");
    }

    #[test]
    fn load_blocks_reads_and_parses() {
        let dir = TempDir::new().unwrap();
        create_document(&dir, "doc.md", "# Title\n\ntext");

        let blocks = load_blocks(RelativePath::new("doc.md"), dir.path()).unwrap();
        assert_eq!(blocks.len(), 2);
        assert!(matches!(blocks[0], Block::Heading { level: 1, .. }));
    }

    #[test]
    fn validate_documents_dir_accepts_existing() {
        let dir = TempDir::new().unwrap();
        assert!(validate_documents_dir(dir.path()).is_ok());
    }

    #[test]
    fn validate_documents_dir_rejects_missing() {
        let result = validate_documents_dir(Path::new("/nonexistent/path"));
        assert!(matches!(result, Err(IoError::InvalidDocumentsDir(_))));
    }
}

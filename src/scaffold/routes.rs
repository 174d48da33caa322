//! The shared routes file: append on generate, exact strip on rollback.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use crate::error::ScaffoldError;
use crate::scaffold::naming::EntityName;

/// Exact route-registration block for one entity.
///
/// The block is the unit both operations agree on: generate appends exactly
/// these bytes and rollback removes exactly these bytes, so a generate
/// followed by a rollback leaves the routes file byte-for-byte as it was. The
/// leading newline separates the block from whatever the file ended with; the
/// comment line carries the studly name.
///
/// ```
/// use modgen::scaffold::naming::EntityName;
/// use modgen::scaffold::routes::RoutePattern;
///
/// let name = EntityName::parse("blog post")?;
/// let pattern = RoutePattern::for_entity(&name);
/// assert!(pattern.block().contains("// Routes for BlogPost"));
/// assert!(pattern.block().contains("\"blog_posts\""));
/// # Ok::<(), modgen::ScaffoldError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    block: String,
}

impl RoutePattern {
    /// Build the pattern for an entity.
    #[must_use]
    pub fn for_entity(name: &EntityName) -> Self {
        let block = format!(
            "\n// Routes for {studly}\nroutes.resource(\"{plural}\", app::Modules::{studly}::Controllers::{studly}Controller::routes());\n",
            studly = name.studly(),
            plural = name.snake_plural(),
        );
        Self { block }
    }

    /// The exact block text, leading and trailing newline included.
    #[must_use]
    pub fn block(&self) -> &str {
        &self.block
    }

    /// Remove the first exact occurrence of the block from `content`.
    ///
    /// Returns `None` when the block is not present. Matching is plain
    /// substring equality, so neighboring registrations are never touched.
    #[must_use]
    pub fn strip(&self, content: &str) -> Option<String> {
        let start = content.find(&self.block)?;
        let mut stripped = String::with_capacity(content.len() - self.block.len());
        stripped.push_str(&content[..start]);
        stripped.push_str(&content[start + self.block.len()..]);
        Some(stripped)
    }
}

/// Outcome of a route-block removal attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// Block found and removed.
    Removed,
    /// The file exists but contains no matching block.
    BlockNotFound,
    /// The routes file itself does not exist.
    FileMissing,
}

/// Handle over the shared routes file.
///
/// The file is externally owned: implementations only append blocks and strip
/// previously appended blocks, leaving everything else intact. Tests
/// substitute [`MemoryRoutesFile`].
pub trait RoutesFile {
    /// Append a block, creating the file (and its parent directory) if
    /// needed.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::Filesystem`] when the file cannot be created
    /// or written.
    fn append_block(&mut self, pattern: &RoutePattern) -> Result<(), ScaffoldError>;

    /// Strip the block matching `pattern`, rewriting the file.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::Filesystem`] when the file cannot be read or
    /// rewritten. A missing file or block is an outcome, not an error.
    fn remove_block(&mut self, pattern: &RoutePattern) -> Result<RemoveOutcome, ScaffoldError>;
}

/// Disk-backed routes file.
#[derive(Debug, Clone)]
pub struct DiskRoutesFile {
    path: PathBuf,
}

impl DiskRoutesFile {
    /// Handle for the routes file at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RoutesFile for DiskRoutesFile {
    fn append_block(&mut self, pattern: &RoutePattern) -> Result<(), ScaffoldError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ScaffoldError::fs("create directory", parent, e))?;
        }

        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| ScaffoldError::fs("open", &self.path, e))?;
        file.write_all(pattern.block().as_bytes())
            .map_err(|e| ScaffoldError::fs("append to", &self.path, e))?;
        Ok(())
    }

    fn remove_block(&mut self, pattern: &RoutePattern) -> Result<RemoveOutcome, ScaffoldError> {
        if !self.path.exists() {
            return Ok(RemoveOutcome::FileMissing);
        }

        let content = fs::read_to_string(&self.path)
            .map_err(|e| ScaffoldError::fs("read", &self.path, e))?;

        match pattern.strip(&content) {
            Some(stripped) => {
                fs::write(&self.path, stripped)
                    .map_err(|e| ScaffoldError::fs("rewrite", &self.path, e))?;
                Ok(RemoveOutcome::Removed)
            }
            None => Ok(RemoveOutcome::BlockNotFound),
        }
    }
}

/// In-memory routes buffer for tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryRoutesFile {
    content: String,
}

impl MemoryRoutesFile {
    /// Empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffer seeded with existing content.
    #[must_use]
    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Current buffer content.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl RoutesFile for MemoryRoutesFile {
    fn append_block(&mut self, pattern: &RoutePattern) -> Result<(), ScaffoldError> {
        self.content.push_str(pattern.block());
        Ok(())
    }

    fn remove_block(&mut self, pattern: &RoutePattern) -> Result<RemoveOutcome, ScaffoldError> {
        match pattern.strip(&self.content) {
            Some(stripped) => {
                self.content = stripped;
                Ok(RemoveOutcome::Removed)
            }
            None => Ok(RemoveOutcome::BlockNotFound),
        }
    }
}

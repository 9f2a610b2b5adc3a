use crate::error::IntrospectError;
use std::collections::hash_map::{Entry, HashMap, OccupiedEntry};
use std::path::{Path, PathBuf};

/// # Source of call-site files
///
/// Resolves a [location](crate::SourceLocation) to the text of its line
pub trait FileCacher {
    type FileRecord<'s>: AsRef<str>
    where
        Self: 's;
    fn read_file(&mut self, path: impl AsRef<Path>)
    -> Result<Self::FileRecord<'_>, std::io::Error>;

    /// # Get the 1-based `line_number` of the file at `path`
    fn get_line(
        &mut self,
        path: impl AsRef<Path>,
        line_number: usize,
    ) -> Result<String, IntrospectError> {
        let path = path.as_ref();
        let entry = self
            .read_file(path)
            .map_err(|source| IntrospectError::CantReadFile {
                path: path.to_path_buf(),
                source,
            })?;
        let lines: Vec<&str> = entry.as_ref().lines().collect();
        if line_number < 1 || line_number > lines.len() {
            return Err(IntrospectError::LineOutOfRange {
                path: path.to_path_buf(),
                line: line_number,
                total: lines.len(),
            });
        }
        Ok(lines[line_number - 1].to_owned())
    }
}

/// # Caching system for files
///
/// Read-through cache, each file is read once per [`CacheHelper`]
#[derive(Default)]
pub struct CacheHelper {
    files: HashMap<PathBuf, String>,
}

impl CacheHelper {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

pub struct CachedFile<'s>(OccupiedEntry<'s, PathBuf, String>);

impl AsRef<str> for CachedFile<'_> {
    fn as_ref(&self) -> &str {
        self.0.get()
    }
}

impl FileCacher for CacheHelper {
    type FileRecord<'s> = CachedFile<'s>;
    fn read_file(
        &mut self,
        path: impl AsRef<Path>,
    ) -> Result<Self::FileRecord<'_>, std::io::Error> {
        let entry = self.files.entry(path.as_ref().to_path_buf());
        let entry = match entry {
            Entry::Occupied(entry) => entry,
            Entry::Vacant(entry) => {
                let cont = std::fs::read_to_string(path)?;
                entry.insert_entry(cont)
            }
        };
        Ok(CachedFile(entry))
    }
}

/// Re-reads the file on every call
#[derive(Default, Clone, Copy)]
pub struct NoCache;
impl FileCacher for NoCache {
    type FileRecord<'s> = String;
    fn read_file(
        &mut self,
        path: impl AsRef<Path>,
    ) -> Result<Self::FileRecord<'_>, std::io::Error> {
        std::fs::read_to_string(path)
    }
}

/// # In-memory files
///
/// Only serves files added with [`MockFileCacher::mock_file`]
#[derive(Default)]
pub struct MockFileCacher(HashMap<PathBuf, String>);

impl MockFileCacher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
    pub fn mock_file(&mut self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.0.insert(path.into(), content.into());
    }
}

impl FileCacher for MockFileCacher {
    type FileRecord<'s> = &'s String;
    fn read_file(
        &mut self,
        path: impl AsRef<Path>,
    ) -> Result<Self::FileRecord<'_>, std::io::Error> {
        self.0.get(path.as_ref()).ok_or(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "File wasn't mocked",
        ))
    }
}

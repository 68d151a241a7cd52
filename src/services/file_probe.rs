// File-existence checks used while navigating.
// Files may be deleted between sessions; navigation skips them instead of failing.

use std::path::Path;

/// Answers whether a bookmarked file is still there.
pub trait FileProbe {
    fn exists(&self, path: &str) -> bool;
}

/// Checks the local file system.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskProbe;

impl FileProbe for DiskProbe {
    fn exists(&self, path: &str) -> bool {
        Path::new(path).exists()
    }
}

impl<F> FileProbe for F
where
    F: Fn(&str) -> bool,
{
    fn exists(&self, path: &str) -> bool {
        self(path)
    }
}

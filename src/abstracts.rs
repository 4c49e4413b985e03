//! Per-type abstract files.
//!
//! Users can keep overview prose for a type in a separate file (for example
//! `docs/abstracts/Networking.md`). The configured globs are expanded once;
//! a declaration matches a file whose stem equals its name or URL name.

use glob::glob;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Looks up supplementary prose by candidate names. First match wins.
pub trait AbstractLookup {
    fn find(&self, names: &[&str]) -> Option<String>;
}

/// Lookup that never finds anything.
pub struct NoAbstracts;

impl AbstractLookup for NoAbstracts {
    fn find(&self, _names: &[&str]) -> Option<String> {
        None
    }
}

/// Lookup over the files matched by a set of glob patterns.
pub struct GlobAbstracts {
    files: Vec<PathBuf>,
}

impl GlobAbstracts {
    pub fn new(patterns: &[String]) -> Self {
        let mut files = Vec::new();
        for pattern in patterns {
            match glob(pattern) {
                Ok(paths) => files.extend(paths.filter_map(|r| r.ok()).filter(|p| p.is_file())),
                Err(e) => warn!("invalid abstract glob {}: {}", pattern, e),
            }
        }
        // Sort for deterministic first-match
        files.sort();
        files.dedup();
        debug!("{} abstract files available", files.len());
        Self { files }
    }

    fn stem_matches(path: &std::path::Path, names: &[&str]) -> bool {
        let stem = path
            .file_name()
            .and_then(|n| n.to_str())
            .and_then(|n| n.split('.').next());
        stem.is_some_and(|stem| names.contains(&stem))
    }
}

impl AbstractLookup for GlobAbstracts {
    fn find(&self, names: &[&str]) -> Option<String> {
        let path = self.files.iter().find(|p| Self::stem_matches(p, names))?;
        match fs::read_to_string(path) {
            Ok(text) => Some(text),
            Err(e) => {
                warn!("failed to read abstract {}: {}", path.display(), e);
                None
            }
        }
    }
}

//! NC program scanner
//!
//! Walks a directory tree, picks out NC/MPF program files by name, and reports
//! every file that contains a feed-rate line matching the configured pattern.
//! Only the first matching line of each file is reported.

use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;
use walkdir::WalkDir;

use crate::config::ScannerConfig;
use crate::error::Result;

/// First matching line found in a program file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedMatch {
    pub path: PathBuf,
    /// 1-based
    pub line_number: usize,
    pub line: String,
}

/// Result of scanning one directory tree
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    pub candidates: usize,
    pub matches: Vec<FeedMatch>,
}

pub struct NcScanner {
    name_markers: Vec<String>,
    pattern: Regex,
}

impl NcScanner {
    pub fn new(config: &ScannerConfig) -> Result<Self> {
        Ok(Self {
            name_markers: config.name_markers.clone(),
            pattern: Regex::new(&config.feed_pattern)?,
        })
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Whether a file name contains any marker as a plain substring
    pub fn is_candidate(&self, file_name: &str) -> bool {
        self.name_markers
            .iter()
            .any(|marker| file_name.contains(marker.as_str()))
    }

    /// All candidate files under `root`, sorted by path
    pub fn collect_files(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = entry?;
            // Follows links, so symlinked programs are scanned too.
            if !entry.path().is_file() {
                continue;
            }
            if self.is_candidate(&entry.file_name().to_string_lossy()) {
                files.push(entry.into_path());
            }
        }
        log::debug!("Found {} candidate files under {}", files.len(), root.display());
        Ok(files)
    }

    /// First line of `path` matching the feed pattern, if any
    pub fn scan_file(&self, path: &Path) -> Result<Option<FeedMatch>> {
        let content = fs::read_to_string(path)?;
        let found = content
            .lines()
            .enumerate()
            .find(|(_, line)| self.pattern.is_match(line))
            .map(|(index, line)| FeedMatch {
                path: path.to_path_buf(),
                line_number: index + 1,
                line: line.to_string(),
            });
        Ok(found)
    }

    pub fn scan(&self, root: &Path) -> Result<ScanReport> {
        self.scan_with(root, |_| {})
    }

    /// Scan every candidate file, reporting each match through `on_match`
    pub fn scan_with<F>(&self, root: &Path, mut on_match: F) -> Result<ScanReport>
    where
        F: FnMut(&FeedMatch),
    {
        let files = self.collect_files(root)?;
        let mut report = ScanReport {
            candidates: files.len(),
            matches: Vec::new(),
        };

        for path in &files {
            if let Some(found) = self.scan_file(path)? {
                log::info!("Feed match in {}:{}", found.path.display(), found.line_number);
                on_match(&found);
                report.matches.push(found);
            }
        }

        log::info!(
            "Scanned {} files under {}, {} matched",
            report.candidates,
            root.display(),
            report.matches.len()
        );
        Ok(report)
    }
}

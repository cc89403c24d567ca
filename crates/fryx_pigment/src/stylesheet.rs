//! Append-only stylesheet output.
//!
//! A full generation truncates the file and writes the prologue followed by
//! every rule. An incremental generation appends the rules of the recompiled
//! files to the end, even when identical text is already present: a later
//! occurrence wins the cascade, so re-emitting a file's rules keeps their
//! relative order correct without rewriting the whole sheet.
//!
//! Each open-write-close span holds a process-wide lock keyed by the
//! file's canonical path, so writers never interleave their rules even when
//! they hold separate [`Stylesheet`] values for the same file.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use fryx_carton::FxHashMap;
use once_cell::sync::Lazy;
use parking_lot::Mutex;

use crate::prologue::PROLOGUE;
use crate::rule::CssRule;

/// Errors raised while writing a stylesheet.
#[derive(Debug, thiserror::Error)]
pub enum StylesheetError {
    #[error("failed to write stylesheet {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

static WRITE_LOCKS: Lazy<Mutex<FxHashMap<PathBuf, Arc<Mutex<()>>>>> =
    Lazy::new(|| Mutex::new(FxHashMap::default()));

/// The writer lock shared by every stylesheet at `path`.
fn write_lock(path: &Path) -> Arc<Mutex<()>> {
    let key = match (path.parent(), path.file_name()) {
        (Some(parent), Some(name)) if !parent.as_os_str().is_empty() => parent
            .canonicalize()
            .map(|parent| parent.join(name))
            .unwrap_or_else(|_| path.to_path_buf()),
        _ => path.to_path_buf(),
    };
    WRITE_LOCKS.lock().entry(key).or_default().clone()
}

/// A stylesheet file with single-writer discipline.
#[derive(Debug, Clone)]
pub struct Stylesheet {
    path: PathBuf,
}

impl Stylesheet {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replace the file with the prologue and `rules`. Returns the number of
    /// rules written.
    pub fn write_full(&self, rules: &[CssRule]) -> Result<usize, StylesheetError> {
        let (text, count) = rules_text(rules);
        self.write(true, |file| {
            file.write_all(PROLOGUE.as_bytes())?;
            file.write_all(text.as_bytes())
        })?;
        tracing::debug!(path = %self.path.display(), rules = count, "wrote stylesheet");
        Ok(count)
    }

    /// Append `rules` after whatever the file already holds.
    pub fn append(&self, rules: &[CssRule]) -> Result<usize, StylesheetError> {
        let (text, count) = rules_text(rules);
        self.write(false, |file| file.write_all(text.as_bytes()))?;
        tracing::debug!(path = %self.path.display(), rules = count, "appended to stylesheet");
        Ok(count)
    }

    fn write(
        &self,
        truncate: bool,
        body: impl FnOnce(&mut fs::File) -> std::io::Result<()>,
    ) -> Result<(), StylesheetError> {
        let io_error = |source: std::io::Error| StylesheetError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(io_error)?;
            }
        }
        let lock = write_lock(&self.path);
        let _guard = lock.lock();
        let mut options = OpenOptions::new();
        if truncate {
            options.write(true).create(true).truncate(true);
        } else {
            options.append(true).create(true);
        }
        let mut file = options.open(&self.path).map_err(io_error)?;
        body(&mut file).map_err(io_error)?;
        file.flush().map_err(io_error)
    }
}

/// Text of the valid `rules`, stably sorted by cascade order, and how many
/// were included.
pub fn rules_text(rules: &[CssRule]) -> (String, usize) {
    let mut valid: Vec<&CssRule> = Vec::with_capacity(rules.len());
    for rule in rules {
        if rule.valid {
            valid.push(rule);
        } else {
            tracing::warn!(key = %rule.key, value = %rule.value, "skipping invalid utility");
        }
    }
    valid.sort_by_key(|rule| rule.order);

    let mut text = String::new();
    for rule in &valid {
        text.push_str(&rule.text());
    }
    (text, valid.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve;

    #[test]
    fn test_rules_text_sorted_and_filtered() {
        let rules = vec![
            resolve("", "md:p-1"),
            resolve("", "bogus-1"),
            resolve("", "m-1"),
        ];
        let (text, count) = rules_text(&rules);
        assert_eq!(count, 2);
        let margin = text.find(".m-1").unwrap();
        let padding = text.find(".md\\:p-1").unwrap();
        assert!(margin < padding);
        assert!(!text.contains("bogus"));
    }

    #[test]
    fn test_full_then_append() {
        let dir = tempfile::tempdir().unwrap();
        let sheet = Stylesheet::new(dir.path().join("css").join("styles.css"));

        assert_eq!(sheet.write_full(&[resolve("", "p-4")]).unwrap(), 1);
        let full = fs::read_to_string(sheet.path()).unwrap();
        assert!(full.starts_with(PROLOGUE));
        assert!(full.ends_with(".p-4 {\n  padding: 1rem;\n}\n\n"));

        sheet.append(&[resolve("", "p-4")]).unwrap();
        let appended = fs::read_to_string(sheet.path()).unwrap();
        assert_eq!(appended.matches(".p-4 {").count(), 2);
        assert_eq!(appended.matches("--fry-shadow-colored: 0 0 #0000;").count(), 1);

        sheet.write_full(&[]).unwrap();
        assert_eq!(fs::read_to_string(sheet.path()).unwrap(), PROLOGUE);
    }

    #[test]
    fn test_separate_handles_share_lock() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("styles.css");
        let a = Stylesheet::new(&path);
        let b = Stylesheet::new(dir.path().join(".").join("styles.css"));
        a.write_full(&[]).unwrap();
        assert!(Arc::ptr_eq(&write_lock(a.path()), &write_lock(b.path())));
    }

    #[test]
    fn test_concurrent_appends_do_not_interleave() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("styles.css");
        Stylesheet::new(&path).write_full(&[]).unwrap();

        let rules: Vec<CssRule> = (1..=8).map(|n| resolve("", &format!("p-{n}"))).collect();
        std::thread::scope(|scope| {
            for _ in 0..8 {
                let sheet = Stylesheet::new(&path);
                let rules = &rules;
                scope.spawn(move || {
                    for _ in 0..20 {
                        sheet.append(rules).unwrap();
                    }
                });
            }
        });

        let (block, _) = rules_text(&rules);
        let text = fs::read_to_string(&path).unwrap();
        let body = text.strip_prefix(PROLOGUE).unwrap();
        assert_eq!(body.len(), block.len() * 160);
        assert_eq!(body, block.repeat(160));
    }
}

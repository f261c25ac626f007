//! The on-disk skillrank store
//!
//! A store is a directory (default `.skillrank/`) holding:
//! - `config.toml`: corpus location, result limit and colony parameters
//! - `feedback.json`: feedback counters and accuracy history
//!
//! Commands open the store once and pass it down; nothing lives in globals.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::candidate::Course;
use crate::config::StoreConfig;
use crate::corpus;
use crate::error::{Result, SkillrankError};
use crate::feedback::FeedbackStore;

/// Default store directory name
pub const STORE_DIR: &str = ".skillrank";
pub const CONFIG_FILE: &str = "config.toml";
pub const FEEDBACK_FILE: &str = "feedback.json";

#[derive(Debug, Clone)]
pub struct Store {
    root: PathBuf,
    config: StoreConfig,
}

impl Store {
    /// Create a new store at `root` with `config`
    pub fn init(root: &Path, config: StoreConfig) -> Result<Self> {
        let config_path = root.join(CONFIG_FILE);
        if config_path.exists() {
            return Err(SkillrankError::already_exists("store", root.display()));
        }

        fs::create_dir_all(root)
            .map_err(|e| SkillrankError::io_operation("create store", root.display(), e))?;
        config.save(&config_path)?;

        debug!(root = %root.display(), "init_store");
        Ok(Store {
            root: root.to_path_buf(),
            config,
        })
    }

    /// Open an existing store
    pub fn open(root: &Path) -> Result<Self> {
        let config_path = root.join(CONFIG_FILE);
        if !config_path.is_file() {
            return Err(SkillrankError::StoreNotFound {
                path: root.to_path_buf(),
            });
        }

        let config = StoreConfig::load(&config_path)?;
        debug!(root = %root.display(), "open_store");
        Ok(Store {
            root: root.to_path_buf(),
            config,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Resolve a corpus path: absolute paths as-is, relative ones against
    /// the directory containing the store
    pub fn resolve_corpus_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            return path.to_path_buf();
        }
        match self.root.parent() {
            Some(parent) => parent.join(path),
            None => path.to_path_buf(),
        }
    }

    /// Configured corpus location
    pub fn corpus_path(&self) -> PathBuf {
        self.resolve_corpus_path(&self.config.corpus)
    }

    /// Load the corpus, optionally overriding the configured file
    pub fn load_corpus(&self, override_path: Option<&Path>) -> Result<Vec<Course>> {
        let path = match override_path {
            Some(p) => self.resolve_corpus_path(p),
            None => self.corpus_path(),
        };
        corpus::load(&path)
    }

    pub fn feedback_path(&self) -> PathBuf {
        self.root.join(FEEDBACK_FILE)
    }

    pub fn load_feedback(&self) -> Result<FeedbackStore> {
        FeedbackStore::load(&self.feedback_path())
    }

    pub fn save_feedback(&self, feedback: &FeedbackStore) -> Result<()> {
        feedback.save(&self.feedback_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_init_then_open() {
        let dir = tempdir().unwrap();
        let root = dir.path().join(STORE_DIR);

        let created = Store::init(&root, StoreConfig::default()).unwrap();
        assert!(root.join(CONFIG_FILE).is_file());

        let opened = Store::open(&root).unwrap();
        assert_eq!(opened.config(), created.config());
    }

    #[test]
    fn test_init_twice_fails() {
        let dir = tempdir().unwrap();
        let root = dir.path().join(STORE_DIR);
        Store::init(&root, StoreConfig::default()).unwrap();

        assert!(matches!(
            Store::init(&root, StoreConfig::default()),
            Err(SkillrankError::AlreadyExists { .. })
        ));
    }

    #[test]
    fn test_open_missing_store() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            Store::open(&dir.path().join(STORE_DIR)),
            Err(SkillrankError::StoreNotFound { .. })
        ));
    }

    #[test]
    fn test_corpus_path_resolution() {
        let dir = tempdir().unwrap();
        let root = dir.path().join(STORE_DIR);
        let store = Store::init(&root, StoreConfig::default()).unwrap();

        assert_eq!(store.corpus_path(), dir.path().join("coursera-courses.csv"));
        assert_eq!(
            store.resolve_corpus_path(Path::new("/data/c.json")),
            PathBuf::from("/data/c.json")
        );
    }

    #[test]
    fn test_feedback_roundtrip_through_store() {
        let dir = tempdir().unwrap();
        let store = Store::init(&dir.path().join(STORE_DIR), StoreConfig::default()).unwrap();

        let mut feedback = store.load_feedback().unwrap();
        assert!(feedback.is_empty());
        feedback.record(2, true);
        store.save_feedback(&feedback).unwrap();

        assert_eq!(store.load_feedback().unwrap().accuracy(), 100.0);
    }

    #[test]
    fn test_load_corpus_from_store() {
        let dir = tempdir().unwrap();
        let store = Store::init(&dir.path().join(STORE_DIR), StoreConfig::default()).unwrap();
        fs::write(
            dir.path().join("coursera-courses.csv"),
            "course_name,course_provided_by,skills\nRust,Ferris,\"['Rust']\"\n",
        )
        .unwrap();

        let courses = store.load_corpus(None).unwrap();
        assert_eq!(courses.len(), 1);
        assert!(courses[0].skills.contains("rust"));
    }
}

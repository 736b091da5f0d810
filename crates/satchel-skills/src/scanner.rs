use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, warn};

use crate::document;

/// Well-known document filename inside each skill directory.
pub const SKILL_FILE: &str = "SKILL.md";

/// One discovered skill directory.
///
/// Entries are value objects built fresh on every scan and discarded once
/// the bootstrap text is produced. An entry without a `SKILL.md` is inert:
/// it carries metadata only and contributes nothing to injection.
#[derive(Debug, Clone, Serialize)]
pub struct SkillEntry {
    /// Effective name: the header `name` field when non-empty, else the
    /// directory name.
    pub name: String,
    /// Header `description` field, or empty.
    pub description: String,
    /// The skill directory itself.
    pub dir: PathBuf,
    /// Path to the `SKILL.md`, absent when the directory has none.
    pub document_path: Option<PathBuf>,
}

impl SkillEntry {
    /// Whether this entry carries a document that can be injected.
    pub fn is_inert(&self) -> bool {
        self.document_path.is_none()
    }
}

/// Enumerates skill directories under one explicit root.
///
/// The root is threaded in at construction — there is no implicit
/// current-directory resolution, so the scanner can be pointed at any
/// directory in tests. A missing root is not an error; it scans to nothing.
#[derive(Debug, Clone)]
pub struct SkillScanner {
    root: PathBuf,
}

impl SkillScanner {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The skills root this scanner reads from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Enumerate skills for injection.
    ///
    /// Directories named with a leading `_` are templates/scaffolding and
    /// are excluded. Entries are sorted by directory name so the bootstrap
    /// output is stable across runs.
    pub fn scan(&self) -> Vec<SkillEntry> {
        self.scan_inner(false)
    }

    /// Enumerate every skill directory, templates included.
    ///
    /// This is the authoring/listing view. It must stay distinct from
    /// [`scan`](Self::scan): injection never sees `_`-prefixed directories,
    /// tooling always does.
    pub fn scan_all(&self) -> Vec<SkillEntry> {
        self.scan_inner(true)
    }

    fn scan_inner(&self, include_reserved: bool) -> Vec<SkillEntry> {
        if !self.root.is_dir() {
            debug!(root = ?self.root, "skills root does not exist, nothing to scan");
            return Vec::new();
        }

        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) => {
                // Root exists but cannot be listed (permissions). Hosts
                // treat this as "skills unavailable this session".
                warn!(root = ?self.root, error = %e, "failed to read skills root");
                return Vec::new();
            }
        };

        let mut dirs: Vec<PathBuf> = entries
            .filter_map(|entry| {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(e) => {
                        warn!(root = ?self.root, error = %e, "failed to read directory entry");
                        return None;
                    }
                };
                let path = entry.path();
                if !path.is_dir() {
                    return None;
                }
                let name = entry.file_name();
                if !include_reserved && name.to_string_lossy().starts_with('_') {
                    debug!(dir = ?path, "skipping reserved skill directory");
                    return None;
                }
                Some(path)
            })
            .collect();

        // Sort by directory name for deterministic output.
        dirs.sort_by_key(|p| p.file_name().map(|n| n.to_os_string()));

        dirs.iter().map(|dir| self.entry_for(dir)).collect()
    }

    /// Build the entry for one skill directory, reading its document header
    /// when present. Unreadable or malformed documents degrade to directory
    /// -name defaults; this never fails.
    fn entry_for(&self, dir: &Path) -> SkillEntry {
        let dir_name = dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let skill_file = dir.join(SKILL_FILE);
        if !skill_file.is_file() {
            debug!(dir = ?dir, "skill directory has no SKILL.md");
            return SkillEntry {
                name: dir_name,
                description: String::new(),
                dir: dir.to_path_buf(),
                document_path: None,
            };
        }

        let doc = match fs::read_to_string(&skill_file) {
            Ok(raw) => document::parse(&raw),
            Err(e) => {
                warn!(path = ?skill_file, error = %e, "failed to read skill document");
                document::ParsedDocument::default()
            }
        };

        let name = doc
            .field("name")
            .map(str::to_string)
            .unwrap_or_else(|| dir_name.clone());
        let description = doc.field("description").unwrap_or_default().to_string();

        SkillEntry {
            name,
            description,
            dir: dir.to_path_buf(),
            document_path: Some(skill_file),
        }
    }
}

//! Claude Code SessionStart hook adapter.
//!
//! Claude Code runs the hook as a shell command and reads one JSON object
//! from its stdout. The payload here is the raw skill documents labeled by
//! root-relative path — the host model parses the front matter itself, so
//! this adapter deliberately skips the parsed-body path the in-process
//! adapters use.

use std::io::Write;
use std::path::PathBuf;

use tracing::warn;

use satchel_skills::bootstrap::{CONTEXT_CLOSE, CONTEXT_OPEN};
use satchel_skills::SkillScanner;

use crate::escape::escape_context;

/// Hook event this adapter answers.
pub const HOOK_EVENT: &str = "SessionStart";

/// Session-start hook for Claude Code.
#[derive(Debug)]
pub struct ClaudeHook {
    scanner: SkillScanner,
}

impl ClaudeHook {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            scanner: SkillScanner::new(root),
        }
    }

    /// The context string before escaping: raw documents wrapped in the
    /// sentinels, or an explicit "not found" note. The hook always reports
    /// something — the host must be able to tell "looked and found none"
    /// apart from "skills unsupported".
    fn context(&self) -> String {
        let root = self.scanner.root().to_path_buf();
        let mut sections = Vec::new();

        for entry in self.scanner.scan() {
            let Some(path) = &entry.document_path else {
                continue;
            };
            let raw = match std::fs::read_to_string(path) {
                Ok(raw) => raw,
                Err(e) => {
                    warn!(path = ?path, error = %e, "skill document unreadable, skipping");
                    continue;
                }
            };
            let label = path
                .strip_prefix(&root)
                .unwrap_or(path)
                .display()
                .to_string();
            sections.push(format!("## {label}\n\n{}", raw.trim_end()));
        }

        if sections.is_empty() {
            return format!("No skills found under {}.", root.display());
        }

        format!(
            "{CONTEXT_OPEN}\n{}\n{CONTEXT_CLOSE}",
            sections.join("\n\n")
        )
    }

    /// The single JSON line the hook protocol expects.
    pub fn session_start_line(&self) -> String {
        format!(
            r#"{{"hookSpecificOutput":{{"hookEventName":"{HOOK_EVENT}","additionalContext":"{}"}}}}"#,
            escape_context(&self.context())
        )
    }

    /// Write the hook record. Stdout must carry nothing but this line.
    pub fn write_session_start(&self, out: &mut impl Write) -> satchel_core::Result<()> {
        writeln!(out, "{}", self.session_start_line()).map_err(|e| {
            satchel_core::SatchelError::Host {
                host: "claude".into(),
                reason: e.to_string(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    fn write_skill(root: &Path, dir: &str, content: &str) {
        let skill_dir = root.join(dir);
        fs::create_dir_all(&skill_dir).expect("create skill dir");
        fs::write(skill_dir.join("SKILL.md"), content).expect("write SKILL.md");
    }

    fn context_of(line: &str) -> String {
        let value: serde_json::Value = serde_json::from_str(line).expect("hook line is JSON");
        value["hookSpecificOutput"]["additionalContext"]
            .as_str()
            .expect("additionalContext is a string")
            .to_string()
    }

    #[test]
    fn emits_single_valid_json_line() {
        let root = tempdir().unwrap();
        write_skill(
            root.path(),
            "foo",
            "---\nname: Foo\ndescription: \"has \\ and quotes\"\n---\nHello",
        );

        let mut out = Vec::new();
        ClaudeHook::new(root.path())
            .write_session_start(&mut out)
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 1);

        let value: serde_json::Value = serde_json::from_str(text.trim_end()).unwrap();
        assert_eq!(value["hookSpecificOutput"]["hookEventName"], "SessionStart");
    }

    #[test]
    fn payload_carries_raw_document_labeled_by_relative_path() {
        let root = tempdir().unwrap();
        write_skill(root.path(), "foo", "---\nname: Foo\n---\nHello");

        let hook = ClaudeHook::new(root.path());
        let context = context_of(&hook.session_start_line());

        // Raw file contents, front matter included, not the parsed body.
        assert!(context.contains("## foo/SKILL.md"));
        assert!(context.contains("name: Foo"));
        assert!(context.contains("Hello"));
        assert!(context.starts_with("<skills-context>"));
        assert!(context.ends_with("</skills-context>"));
    }

    #[test]
    fn templates_and_inert_dirs_excluded() {
        let root = tempdir().unwrap();
        write_skill(root.path(), "real", "---\nname: real\n---\nBody.");
        write_skill(root.path(), "_wip", "---\nname: wip\n---\nDraft.");
        fs::create_dir(root.path().join("bare")).unwrap();

        let context = context_of(&ClaudeHook::new(root.path()).session_start_line());
        assert!(context.contains("real/SKILL.md"));
        assert!(!context.contains("_wip"));
        assert!(!context.contains("bare"));
    }

    #[test]
    fn missing_root_reports_not_found() {
        let hook = ClaudeHook::new("/no/such/skills/root");
        let context = context_of(&hook.session_start_line());
        assert!(context.starts_with("No skills found under"));
        assert!(context.contains("/no/such/skills/root"));
    }

    #[test]
    fn root_with_no_documents_reports_not_found() {
        let root = tempdir().unwrap();
        fs::create_dir(root.path().join("bare")).unwrap();
        fs::create_dir(root.path().join("_templates")).unwrap();

        let context = context_of(&ClaudeHook::new(root.path()).session_start_line());
        assert!(context.starts_with("No skills found under"));
    }
}

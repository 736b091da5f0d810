//! # satchel-skills
//!
//! Skills are prompt-injected instructions that teach an LLM host how to use
//! its existing tools for specific workflows. Each skill is a directory
//! containing a `SKILL.md` file (Markdown with an optional `key: value`
//! front-matter header).
//!
//! Satchel does NOT interpret or execute skill content. It discovers skill
//! directories, parses their documents, and merges the bodies into one
//! labeled context block that a host adapter hands to its runtime at session
//! start.
//!
//! ## SKILL.md format
//!
//! ```markdown
//! ---
//! name: server-management
//! description: Manage remote servers via SSH
//! ---
//!
//! # Server Management
//!
//! ## When to use this skill
//! When the user asks you to manage or troubleshoot a remote server.
//! ```
//!
//! ## Pipeline
//!
//! 1. [`SkillScanner::scan`] enumerates skill directories under one root
//!    (directories named with a leading `_` are templates and are excluded)
//! 2. [`document::parse`] splits each document into header fields and body;
//!    parsing is total and never fails
//! 3. [`bootstrap::build`] merges the bodies into a [`BootstrapContext`]
//!    whose `rendered` text is `None` when there is nothing to inject
//!
//! Every invocation is a fresh synchronous scan — there is no cache, so the
//! output always reflects the current on-disk skill set.

pub mod bootstrap;
pub mod document;
pub mod scanner;

pub use bootstrap::BootstrapContext;
pub use document::ParsedDocument;
pub use scanner::{SkillEntry, SkillScanner, SKILL_FILE};

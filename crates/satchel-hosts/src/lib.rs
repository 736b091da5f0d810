//! # satchel-hosts
//!
//! One module per host runtime, each a thin translation of the core
//! scan/parse/build pipeline into that host's context-injection mechanism:
//!
//! - [`opencode`] — chat-transform plugin: appends the rendered block to the
//!   host's ordered list of system-context strings
//! - [`pi`] — session-start extension: contributes an `Option<String>` the
//!   host concatenates into its system prompt
//! - [`claude`] — session-start shell hook: emits one JSON line on stdout
//!   with the escaped bootstrap text as `additionalContext`
//!
//! The adapters own no parsing or exclusion logic of their own — everything
//! above the delivery seam lives in `satchel-skills`, so the three variants
//! cannot drift apart.

pub mod claude;
pub mod escape;
pub mod opencode;
pub mod pi;

pub use claude::ClaudeHook;
pub use opencode::OpenCodeTransform;
pub use pi::PiExtension;

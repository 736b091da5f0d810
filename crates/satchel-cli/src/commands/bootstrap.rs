use std::path::Path;

use satchel_hosts::{ClaudeHook, OpenCodeTransform, PiExtension};

use super::HostKind;

/// Emit the bootstrap context in the target host's delivery format.
///
/// `claude` writes the hook JSON line to stdout so the host's shell hook
/// can be just `satchel bootstrap claude`. The in-process hosts consume the
/// adapter types directly; their subcommands exist for inspection and print
/// the rendered block (or a note on stderr when there is nothing to inject,
/// matching the silent in-process contract).
pub(super) fn cmd_bootstrap(skills_root: &Path, host: HostKind) -> satchel_core::Result<()> {
    match host {
        HostKind::Claude => {
            ClaudeHook::new(skills_root).write_session_start(&mut std::io::stdout())
        }
        HostKind::Opencode => {
            let mut parts = Vec::new();
            OpenCodeTransform::new(skills_root).apply(&mut parts);
            match parts.pop() {
                Some(rendered) => println!("{rendered}"),
                None => eprintln!("No skills to inject from {}", skills_root.display()),
            }
            Ok(())
        }
        HostKind::Pi => {
            match PiExtension::new(skills_root).session_context() {
                Some(rendered) => println!("{rendered}"),
                None => eprintln!("No skills to inject from {}", skills_root.display()),
            }
            Ok(())
        }
    }
}

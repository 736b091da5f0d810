use std::path::Path;

use satchel_skills::{document, SkillScanner, SKILL_FILE};

pub(super) fn cmd_list(skills_root: &Path, all: bool, json: bool) -> satchel_core::Result<()> {
    let scanner = SkillScanner::new(skills_root);
    let entries = if all { scanner.scan_all() } else { scanner.scan() };

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&entries)
                .map_err(satchel_core::SatchelError::Serialization)?
        );
        return Ok(());
    }

    if entries.is_empty() {
        println!("No skills found in {}", skills_root.display());
        println!("  Create one with: satchel create <name>");
        return Ok(());
    }

    println!("\x1b[1mAvailable Skills ({}):\x1b[0m\n", entries.len());
    for entry in entries {
        let marker = if entry.is_inert() { " (no SKILL.md)" } else { "" };
        println!("  \x1b[36m{}\x1b[0m{}", entry.name, marker);
        if !entry.description.is_empty() {
            println!("    {}", entry.description);
        }
        println!("    Dir: {}", entry.dir.display());
        println!();
    }
    Ok(())
}

pub(super) fn cmd_show(skills_root: &Path, name: &str) -> satchel_core::Result<()> {
    let scanner = SkillScanner::new(skills_root);
    let Some(entry) = scanner.scan_all().into_iter().find(|e| e.name == name) else {
        println!("Skill '{name}' not found.");
        return Ok(());
    };

    println!("\x1b[1m{}\x1b[0m", entry.name);
    if !entry.description.is_empty() {
        println!("  {}", entry.description);
    }
    println!("  Dir: {}", entry.dir.display());

    match &entry.document_path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)?;
            let doc = document::parse(&raw);
            println!("\n  \x1b[1mInstructions:\x1b[0m");
            for line in doc.body.lines() {
                println!("    {line}");
            }
        }
        None => {
            println!("\n  This directory has no {SKILL_FILE}; nothing is injected for it.");
        }
    }
    Ok(())
}

pub(super) fn cmd_create(skills_root: &Path, name: &str) -> satchel_core::Result<()> {
    let skill_dir = skills_root.join(name);
    if skill_dir.exists() {
        return Err(satchel_core::SatchelError::Skill(format!(
            "skill '{}' already exists at {}",
            name,
            skill_dir.display()
        )));
    }

    std::fs::create_dir_all(&skill_dir)?;
    let skill_path = skill_dir.join(SKILL_FILE);

    let template = format!(
        r#"---
name: {name}
description: Describe what this skill does
---

# {name}

## When to use this skill

Describe when this skill should be applied.

## Instructions

1. First, do this
2. Then check the result
3. Finally, report back to the user
"#
    );

    std::fs::write(&skill_path, template)?;
    println!("✅ Created skill template at {}", skill_path.display());
    println!("   Edit the SKILL.md — the next session bootstrap picks it up automatically.");
    Ok(())
}

use anyhow::Result;
use colored::Colorize;
use serde_json::json;
use std::io::Write;

use basepath_core::{Environment, HeadChild, MemoryHead, Profile, ProfileTable};

pub fn write_profile(
    out: &mut dyn Write,
    environment: Environment,
    profile: &Profile,
    json: bool,
) -> Result<()> {
    if json {
        let payload = json!({ "environment": environment, "profile": profile });
        serde_json::to_writer_pretty(&mut *out, &payload)?;
        writeln!(out)?;
        return Ok(());
    }
    writeln!(out, "{} {}", "environment:".bold(), environment.as_str().bright_cyan())?;
    write_fields(out, profile)
}

pub fn write_asset(
    out: &mut dyn Write,
    environment: Environment,
    field: &str,
    url: &str,
    json: bool,
) -> Result<()> {
    if json {
        let payload = json!({ "environment": environment, "field": field, "url": url });
        serde_json::to_writer_pretty(&mut *out, &payload)?;
        writeln!(out)?;
    } else {
        // Plain URL so the output can be captured by scripts.
        writeln!(out, "{url}")?;
    }
    Ok(())
}

pub fn write_table(out: &mut dyn Write, table: &ProfileTable, json: bool) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, table)?;
        writeln!(out)?;
        return Ok(());
    }
    for (environment, profile) in table.iter() {
        writeln!(out, "{}", environment.as_str().bright_cyan().bold())?;
        write_fields(out, profile)?;
    }
    Ok(())
}

pub fn write_patch(
    out: &mut dyn Write,
    profile: &Profile,
    head: &MemoryHead,
    json: bool,
) -> Result<()> {
    let children: Vec<String> = head.children().iter().map(render_child).collect();
    if json {
        let payload = json!({ "profile": profile, "head": children });
        serde_json::to_writer_pretty(&mut *out, &payload)?;
        writeln!(out)?;
        return Ok(());
    }
    writeln!(out, "{} {}", "base path set to".green(), profile.base)?;
    writeln!(out, "{}", "<head>".dimmed())?;
    for child in &children {
        writeln!(out, "  {child}")?;
    }
    writeln!(out, "{}", "</head>".dimmed())?;
    Ok(())
}

fn write_fields(out: &mut dyn Write, profile: &Profile) -> Result<()> {
    writeln!(out, "  base   {}", profile.base)?;
    for (label, value) in [("assets", &profile.assets), ("games", &profile.games)] {
        match value {
            Some(prefix) => writeln!(out, "  {label:6} {prefix}")?,
            None => writeln!(out, "  {label:6} {}", "(falls back to base)".dimmed())?,
        }
    }
    Ok(())
}

fn render_child(child: &HeadChild) -> String {
    match child {
        HeadChild::Base { href } => format!("<base href=\"{href}\">"),
        HeadChild::Other(tag) => format!("<{tag}>"),
    }
}

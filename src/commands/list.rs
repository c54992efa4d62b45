use serde::Serialize;

use crate::context::AppContext;
use crate::error::AppResult;
use crate::profile::ProfileStore;

#[derive(Debug, Serialize)]
struct ProfileEntry {
    name: String,
    current: bool,
}

pub fn run(ctx: &AppContext) -> AppResult<()> {
    let entries = profile_entries(ctx.store.list()?, ctx.profile_name());

    let lines: Vec<String> = if entries.is_empty() {
        vec!["0 profiles".to_string()]
    } else {
        entries
            .iter()
            .map(|entry| {
                let marker = if entry.current { "*" } else { " " };
                format!("{marker} {}", entry.name)
            })
            .collect()
    };

    ctx.output.emit_lines(&lines, &entries)
}

/// Persisted names plus the current profile, which may not be saved yet.
fn profile_entries(mut names: Vec<String>, current: &str) -> Vec<ProfileEntry> {
    if !names.iter().any(|name| name == current) {
        names.push(current.to_string());
        names.sort();
    }

    names
        .into_iter()
        .map(|name| ProfileEntry {
            current: name == current,
            name,
        })
        .collect()
}

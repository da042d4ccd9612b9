// File: ./src/model/parser.rs
// Discovers checklist items from a task-list file
use crate::model::item::Item;
use anyhow::{Result, bail};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Reads Markdown task-list lines (`- [ ] label`, `* [x] label`, ...) in file order.
/// Anything that is not a task-list line is skipped.
pub fn parse_checklist(text: &str) -> Vec<Item> {
    text.lines()
        .filter_map(parse_task_line)
        .enumerate()
        .map(|(index, (label, completed))| Item::new(index, label, completed))
        .collect()
}

fn parse_task_line(line: &str) -> Option<(String, bool)> {
    let rest = line.trim_start();
    let rest = rest
        .strip_prefix("- ")
        .or_else(|| rest.strip_prefix("* "))
        .or_else(|| rest.strip_prefix("+ "))?
        .trim_start();

    let (completed, label) = if let Some(l) = rest.strip_prefix("[ ]") {
        (false, l)
    } else if let Some(l) = rest
        .strip_prefix("[x]")
        .or_else(|| rest.strip_prefix("[X]"))
    {
        (true, l)
    } else {
        return None;
    };

    // "[x]foo" is not a task marker
    if !label.is_empty() && !label.starts_with(char::is_whitespace) {
        return None;
    }
    Some((label.trim().to_string(), completed))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonEntry {
    Label(String),
    Full {
        label: String,
        #[serde(default)]
        completed: bool,
    },
}

/// Reads a JSON array of labels or `{ "label", "completed" }` objects.
pub fn parse_checklist_json(text: &str) -> Result<Vec<Item>> {
    let entries: Vec<JsonEntry> = serde_json::from_str(text)?;
    Ok(entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| match entry {
            JsonEntry::Label(label) => Item::new(index, label, false),
            JsonEntry::Full { label, completed } => Item::new(index, label, completed),
        })
        .collect())
}

pub fn load_checklist<P: AsRef<Path>>(path: P) -> Result<Vec<Item>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("cannot read {}: {}", path.display(), e))?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let items = if is_json {
        parse_checklist_json(&text)?
    } else {
        parse_checklist(&text)
    };

    if items.is_empty() {
        bail!("no checklist items found in {}", path.display());
    }
    log::info!("Loaded {} items from {}", items.len(), path.display());
    Ok(items)
}

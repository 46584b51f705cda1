//! Shared output formatting helpers for commands

use notespark_core::error::Result;
use notespark_core::note::Note;
use serde::Serialize;
use serde_json::json;

/// Print any serializable value as pretty JSON
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print a JSON status message with extra fields
///
/// # Examples
/// ```ignore
/// print_json_status("ok", &[("notes_indexed", json!(12))])?;
/// ```
pub fn print_json_status(status: &str, extra_fields: &[(&str, serde_json::Value)]) -> Result<()> {
    let mut output = json!({ "status": status });

    for (key, value) in extra_fields {
        if let Some(obj) = output.as_object_mut() {
            obj.insert(key.to_string(), value.clone());
        }
    }

    print_json(&output)
}

/// Comma-separated list, or "-" when empty
pub fn join_or_dash<'a>(items: impl IntoIterator<Item = &'a String>) -> String {
    let joined = items
        .into_iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    if joined.is_empty() {
        "-".to_string()
    } else {
        joined
    }
}

/// Human-readable block for one note of a pair
pub fn print_note_block(label: &str, note: &Note, show_summary: bool) {
    println!("{}: {}", label, note.path);
    let folder = if note.folder.is_empty() {
        "(root)"
    } else {
        note.folder.as_str()
    };
    println!("   folder:   {}", folder);
    println!("   tags:     {}", join_or_dash(&note.tags));
    println!("   keywords: {}", join_or_dash(&note.keywords));
    if show_summary && !note.summary.is_empty() {
        let first_line = note.summary.lines().next().unwrap_or_default();
        println!("   summary:  {}", first_line);
    }
}

use std::io::{self, Write};

use colored::*;

/// Prints `label: ` and reads one trimmed line from stdin.
pub fn line(label: &str) -> anyhow::Result<String> {
    ask(&format!("{}: ", label.bold()))
}

/// Like [`line`], but falls back to `default` on an empty answer.
pub fn line_or(label: &str, default: &str) -> anyhow::Result<String> {
    let answer = ask(&format!("{} [{}]: ", label.bold(), default.bright_black()))?;
    if answer.is_empty() {
        return Ok(default.to_string());
    }
    Ok(answer)
}

/// Empty answers become `None`.
pub fn optional(label: &str) -> anyhow::Result<Option<String>> {
    let answer = ask(&format!("{} (blank to skip): ", label.bold()))?;
    Ok((!answer.is_empty()).then_some(answer))
}

/// y/N style confirmation; any answer starting with 'y' is a yes.
pub fn confirm(label: &str, default: bool) -> anyhow::Result<bool> {
    let hint = if default { "Y/n" } else { "y/N" };
    let answer = ask(&format!("{} [{}]: ", label.bold(), hint.bright_black()))?;
    if answer.is_empty() {
        return Ok(default);
    }
    Ok(answer.to_ascii_lowercase().starts_with('y'))
}

fn ask(prompt_text: &str) -> anyhow::Result<String> {
    print!("{prompt_text}");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

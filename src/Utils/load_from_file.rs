use log::{error, info, warn};
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// header lines consist only of uppercase letters and '_': "CHEMICALS", "REACTIONS", "RULES"
pub fn is_header(line: &str) -> bool {
    let trimmed = line.trim();
    !trimmed.is_empty() && trimmed.chars().all(|c| c.is_uppercase() || c == '_')
}

/// Parses a sectioned document: every header line is followed by one JSON value that runs until
/// the next header or the end of the document.
/// Returns a HashMap from each requested header found in the document to its parsed JSON value;
/// requested headers that are absent are simply not in the map.
pub fn parse_sections(text: &str, headers: &[&str]) -> Result<HashMap<String, Value>, String> {
    let lines: Vec<&str> = text.lines().collect();
    let mut sections = HashMap::new();
    let mut i = 0;
    while i < lines.len() {
        if !is_header(lines[i]) {
            i += 1;
            continue;
        }
        let header = lines[i].trim().to_string();
        let start_index = i + 1;
        // Find the end index (next header or end of document)
        let end_index = (start_index..lines.len())
            .find(|&j| is_header(lines[j]))
            .unwrap_or(lines.len());
        i = end_index;

        if !headers.contains(&header.as_str()) {
            warn!("Unknown section '{}' skipped", header);
            continue;
        }
        if sections.contains_key(&header) {
            return Err(format!("Section '{}' appears more than once", header));
        }
        let section = lines[start_index..end_index].join("\n");
        let value = parse_section_json(&header, &section, &lines, start_index)?;
        sections.insert(header, value);
    }
    Ok(sections)
}

fn parse_section_json(
    header: &str,
    section: &str,
    lines: &[&str],
    start_index: usize,
) -> Result<Value, String> {
    match serde_json::from_str::<Value>(section) {
        Ok(value) => Ok(value),
        Err(e) => {
            // Find the line and column where the error occurred
            let error_line = e.line();
            let error_column = e.column();

            // Calculate the actual line number in the document
            let actual_line = start_index + error_line.saturating_sub(1);

            let error_msg = format!(
                "Error parsing section '{}' at line {}, column {} (line {} in file): {}",
                header,
                error_line,
                error_column,
                actual_line + 1,
                e
            );
            error!("{}", error_msg);

            // If possible, show the problematic line
            if let Some(problem_line) = lines.get(actual_line) {
                error!("Problematic line: {}", problem_line);
                if error_column >= 1 && error_column <= problem_line.len() {
                    let pointer = " ".repeat(error_column - 1) + "^";
                    error!("{}", pointer);
                }
            }
            Err(error_msg)
        }
    }
}

/// Loads a sectioned document from a file, see [`parse_sections`]
pub fn load_sections_from_file(
    file_name: &str,
    headers: &[&str],
) -> Result<HashMap<String, Value>, String> {
    let path = Path::new(file_name);
    if !path.exists() {
        return Err(format!("File '{}' does not exist", file_name));
    }

    // a file that is not valid UTF-8 fails as a whole, no section is dropped
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            error!("Failed to read file '{}': {}", file_name, e);
            return Err(format!("Failed to read file '{}': {}", file_name, e));
        }
    };
    let sections = parse_sections(&text, headers)?;
    if sections.is_empty() {
        warn!("No known section found in file '{}'", file_name);
    }
    info!(
        "Loaded sections {:?} from file '{}'",
        sections.keys().collect::<Vec<_>>(),
        file_name
    );
    Ok(sections)
}

use crate::{
    functions::escape_template,
    read::Xxh3IndexSet,
    statics::{
        EMPTY_SLOT_COUNT, JOYSTICK_LINES, QUIT_CONFIRM_LINE, SOURCE_MARKER, TRANSLATION_MARKER,
    },
    types::TextUnit,
};
use indexmap::IndexSet;
use std::{
    fs::{read_to_string, write, File, OpenOptions},
    io::Write,
    path::Path,
};

fn write_record(file: &mut File, source: &str, fill: bool, terminator: &str) {
    let escaped: String = escape_template(source);
    let translation: &str = if fill { &escaped } else { "" };

    write!(file, "< {escaped}{terminator}> {translation}{terminator}{terminator}").unwrap();
}

/// Creates the template file and writes its UI section: the label and
/// button texts extracted from the UI source, the save-slot captions, the
/// quit confirmation and the joystick screen captions. This section
/// historically uses plain LF line endings; the final deduplication pass
/// normalizes them.
pub fn write_ui_section(output_path: &Path, labels: &[TextUnit], fill: bool) {
    let mut file: File = File::create(output_path).unwrap();

    for label in labels {
        write_record(&mut file, label.text(), fill, "\n");
    }

    for slot in 1..=EMPTY_SLOT_COUNT {
        write_record(&mut file, &format!(" {slot}. Empty Slot."), fill, "\n");
    }

    write_record(&mut file, QUIT_CONFIRM_LINE, fill, "\n");

    for line in JOYSTICK_LINES {
        write_record(&mut file, line, fill, "\n");
    }
}

/// Appends one record per unique dialogue text to the template file, with
/// CRLF line endings.
pub fn append_script_section(output_path: &Path, texts: &Xxh3IndexSet, fill: bool) {
    let mut file: File = OpenOptions::new().append(true).open(output_path).unwrap();

    for text in texts {
        write_record(&mut file, text, fill, "\r\n");
    }
}

/// Rewrites the template in place, dropping every record whose source
/// payload was already seen. The UI and script sections are written in two
/// separate passes and may repeat each other's lines.
///
/// Single scan with one-line lookahead: a kept source line takes its
/// translation line and the blank lines after it along; a dropped source
/// line drops them. Everything else passes through untouched. All emitted
/// lines are normalized to CRLF termination.
pub fn deduplicate_template(path: &Path) {
    let content: String = read_to_string(path).unwrap();
    let ends_with_newline: bool = content.ends_with('\n');
    let lines: Vec<&str> = content.lines().collect();

    let mut seen: Xxh3IndexSet = IndexSet::default();
    let mut kept: Vec<&str> = Vec::with_capacity(lines.len());
    let mut i: usize = 0;

    while i < lines.len() {
        let line: &str = lines[i];

        let payload: &str = match line.strip_prefix(SOURCE_MARKER) {
            Some(payload) => payload.trim_end(),
            None => {
                kept.push(line);
                i += 1;
                continue;
            }
        };

        if seen.insert(payload.to_string()) {
            kept.push(line);
            i += 1;

            if i < lines.len() && lines[i].starts_with(TRANSLATION_MARKER) {
                kept.push(lines[i]);
                i += 1;
            }

            while i < lines.len() && lines[i].trim().is_empty() {
                kept.push(lines[i]);
                i += 1;
            }
        } else {
            i += 1;

            while i < lines.len()
                && (lines[i].starts_with(TRANSLATION_MARKER) || lines[i].trim().is_empty())
            {
                i += 1;
            }
        }
    }

    let mut output: String = kept.join("\r\n");

    if ends_with_newline {
        output.push_str("\r\n");
    }

    write(path, output).unwrap();
}

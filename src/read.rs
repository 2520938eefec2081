use crate::{
    functions::unescape_literal,
    statics::{DEFINE_RE, MENU_CHOICE_RE, SCREEN_TEXT_RE},
    types::TextUnit,
};
use indexmap::IndexSet;
use regex::Regex;
use std::{hash::BuildHasherDefault, path::PathBuf, process::exit};
use xxhash_rust::xxh3::Xxh3;

pub type Xxh3IndexSet = IndexSet<String, BuildHasherDefault<Xxh3>>;

/// Scans the given sources for character definition statements and collects
/// the defined short names, deduplicated, in source order, file order, then
/// line order within file.
/// # Parameters
/// * `sources` - source files as (path, content) pairs, in processing order
pub fn gather_char_names(sources: &[(PathBuf, String)]) -> Vec<String> {
    let mut names: Xxh3IndexSet = IndexSet::default();

    for (_, content) in sources {
        for captures in DEFINE_RE.captures_iter(content) {
            names.insert(captures[1].to_string());
        }
    }

    names.into_iter().collect()
}

/// Builds the single- and multi-line dialogue patterns for the given
/// character names. The names parametrize both patterns, so dialogue can
/// only be matched once at least one definition was found.
pub fn build_patterns(char_names: &[String]) -> (Regex, Regex) {
    let pattern: String = char_names
        .iter()
        .map(|name| regex::escape(name))
        .collect::<Vec<String>>()
        .join("|");

    let single_re: Regex =
        Regex::new(&format!(r#"(?m)^\s*(?:{pattern})\s+"((?:[^"\\]|\\.)*)""#)).unwrap();
    let multi_re: Regex =
        Regex::new(&format!(r#"(?ms)^\s*(?:{pattern})\s+"""\s*\n(.*?)\s*""""#)).unwrap();

    (single_re, multi_re)
}

/// Extracts the translatable text units of one script source: single-line
/// dialogue, then triple-quoted multi-line dialogue, then menu choices.
/// Each form is matched in its own pass over the whole source, so the
/// result is ordered per form, not in document order.
pub fn extract_dialogues(
    content: &str,
    single_re: &Regex,
    multi_re: &Regex,
    malformed_escape_msg: &str,
) -> Vec<TextUnit> {
    let mut dialogues: Vec<TextUnit> = Vec::new();

    for captures in single_re.captures_iter(content) {
        let raw: &str = &captures[1];

        let decoded: String = match unescape_literal(raw) {
            Some(decoded) => decoded,
            None => {
                eprintln!("{malformed_escape_msg} \"{raw}\"");
                exit(1);
            }
        };

        dialogues.push(TextUnit::SingleLine(decoded.trim().to_string()));
    }

    for captures in multi_re.captures_iter(content) {
        let lines: Vec<&str> = captures[1].lines().map(|line| line.trim_end()).collect();

        dialogues.push(TextUnit::MultiLine(lines.join("\n").trim().to_string()));
    }

    // Menu choices carry no character name, so any '"text":' line matches,
    // key-value-looking lines included.
    for captures in MENU_CHOICE_RE.captures_iter(content) {
        dialogues.push(TextUnit::MenuChoice(captures[1].trim().to_string()));
    }

    dialogues
}

/// Extracts all label and textbutton texts wrapped in _() from the UI
/// source, in document order.
pub fn extract_screen_texts(content: &str) -> Vec<TextUnit> {
    SCREEN_TEXT_RE
        .captures_iter(content)
        .map(|captures| TextUnit::Label(captures[1].to_string()))
        .collect()
}

/// Collapses extracted units into the unique non-empty text sequence fed to
/// the writer, preserving first-occurrence order across all sources.
pub fn unique_texts(units: Vec<TextUnit>) -> Xxh3IndexSet {
    let mut texts: Xxh3IndexSet = IndexSet::default();

    for unit in units {
        let text: String = unit.into_text();

        if !text.is_empty() {
            texts.insert(text);
        }
    }

    texts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sources(contents: &[&str]) -> Vec<(PathBuf, String)> {
        contents
            .iter()
            .enumerate()
            .map(|(i, content)| (PathBuf::from(format!("{i}.rpy")), content.to_string()))
            .collect()
    }

    fn extract(content: &str, names: &[&str]) -> Vec<TextUnit> {
        let names: Vec<String> = names.iter().map(|name| name.to_string()).collect();
        let (single_re, multi_re) = build_patterns(&names);
        extract_dialogues(content, &single_re, &multi_re, "")
    }

    #[test]
    fn char_names_are_gathered_across_files_in_first_definition_order() {
        let sources = sources(&[
            "define eve = Character(\"Eve\")\n$ narrator = Character(None)\n",
            "define adam = Character(\"Adam\")\ndefine eve = Character(\"Eve again\")\n",
        ]);

        assert_eq!(gather_char_names(&sources), ["eve", "narrator", "adam"]);
    }

    #[test]
    fn char_names_require_a_character_constructor() {
        let sources = sources(&["define volume = 0.5\n$ flag = True\ndefine e = Solid(\"#fff\")\n"]);

        assert!(gather_char_names(&sources).is_empty());
    }

    #[test]
    fn single_line_dialogue_is_unescaped_and_trimmed() {
        let units = extract("    eve \"  Hello\\nWorld  \"\n", &["eve"]);

        assert_eq!(units, [TextUnit::SingleLine("Hello\nWorld".to_string())]);
    }

    #[test]
    fn single_line_dialogue_supports_escaped_quotes() {
        let units = extract("eve \"She said \\\"hi\\\" to me.\"\n", &["eve"]);

        assert_eq!(
            units,
            [TextUnit::SingleLine("She said \"hi\" to me.".to_string())]
        );
    }

    #[test]
    fn identifier_matching_is_case_sensitive() {
        let units = extract("Eve \"wrong case\"\neve \"right case\"\n", &["eve"]);

        assert_eq!(units, [TextUnit::SingleLine("right case".to_string())]);
    }

    #[test]
    fn narration_and_unknown_speakers_are_ignored() {
        let script = "\"Plain narration stays out.\"\nbob \"not a known name\"\neve \"kept\"\n";
        let units = extract(script, &["eve"]);

        assert_eq!(units, [TextUnit::SingleLine("kept".to_string())]);
    }

    #[test]
    fn multi_line_block_strips_trailing_whitespace_and_rejoins() {
        let script = "eve \"\"\"\n    First line   \n      indented second\n    \"\"\"\n";
        let units = extract(script, &["eve"]);

        // The leading empty unit is the single-line pattern matching the
        // first two quotes of the opening delimiter.
        assert_eq!(
            units,
            [
                TextUnit::SingleLine(String::new()),
                TextUnit::MultiLine("First line\n      indented second".to_string()),
            ]
        );
    }

    #[test]
    fn multi_line_block_with_one_internal_line_has_no_embedded_newline() {
        let script = "eve \"\"\"\n    Just one line.    \n    \"\"\"\n";
        let units = extract(script, &["eve"]);

        assert_eq!(
            units,
            [
                TextUnit::SingleLine(String::new()),
                TextUnit::MultiLine("Just one line.".to_string()),
            ]
        );
    }

    #[test]
    fn menu_choices_are_captured_without_a_character_name() {
        let script = "menu:\n    \"Go left.\":\n        jump left\n    \"Go right.\" :\n        jump right\n";
        let units = extract(script, &["eve"]);

        assert_eq!(
            units,
            [
                TextUnit::MenuChoice("Go left.".to_string()),
                TextUnit::MenuChoice("Go right.".to_string()),
            ]
        );
    }

    #[test]
    fn menu_pattern_overcaptures_key_value_lines() {
        // Known over-capture, kept for compatibility with the template's
        // historical contents.
        let units = extract("\"config\": True\n", &["eve"]);

        assert_eq!(units, [TextUnit::MenuChoice("config".to_string())]);
    }

    #[test]
    fn dialogue_forms_are_extracted_in_fixed_order() {
        // Per-form passes, not document order: all single-line dialogue
        // first, then multi-line blocks, then menu choices.
        let script = "menu:\n    \"A choice.\":\n        pass\neve \"\"\"\n    A block.\n    \"\"\"\neve \"A line.\"\n";
        let units = extract(script, &["eve"]);

        assert_eq!(
            units,
            [
                TextUnit::SingleLine(String::new()),
                TextUnit::SingleLine("A line.".to_string()),
                TextUnit::MultiLine("A block.".to_string()),
                TextUnit::MenuChoice("A choice.".to_string()),
            ]
        );
    }

    #[test]
    fn screen_texts_are_captured_in_document_order() {
        let screens = "screen main_menu():\n    label _(\"Start Game\")\n    textbutton _(\"Quit\") action Quit()\n    textbutton \"untranslated\" action None\n";

        assert_eq!(
            extract_screen_texts(screens),
            [
                TextUnit::Label("Start Game".to_string()),
                TextUnit::Label("Quit".to_string()),
            ]
        );
    }

    #[test]
    fn unique_texts_drops_empties_and_keeps_first_occurrence_order() {
        let units = vec![
            TextUnit::SingleLine("one".to_string()),
            TextUnit::SingleLine(String::new()),
            TextUnit::MenuChoice("two".to_string()),
            TextUnit::MultiLine("one".to_string()),
        ];

        let texts: Vec<String> = unique_texts(units).into_iter().collect();
        assert_eq!(texts, ["one", "two"]);
    }

    #[test]
    fn triple_quote_opener_yields_only_an_empty_single_line_unit() {
        // The single-line pattern also matches the first two quotes of a
        // triple-quote delimiter as an empty literal; unique_texts is what
        // filters the empty unit out.
        let script = "eve \"\"\"\n    Block text.\n    \"\"\"\n";
        let units = extract(script, &["eve"]);

        assert!(units.contains(&TextUnit::SingleLine(String::new())));
        let texts: Vec<String> = unique_texts(units).into_iter().collect();
        assert_eq!(texts, ["Block text."]);
    }
}

use std::{fs::read, path::Path, process::exit};

/// Escapes a string for the .rpt format: backslashes are doubled, then
/// literal newlines become the two-character sequence "\n". No other
/// characters are altered.
pub fn escape_template(text: &str) -> String {
    text.replace('\\', r"\\").replace('\n', r"\n")
}

/// Decodes the escape sequences of a double-quoted script string literal.
///
/// This is not the inverse of [`escape_template`]: literal bodies captured
/// from sources follow the script's own escaping conventions, so the full
/// grammar has to be interpreted. Unknown escapes are kept verbatim, the
/// way the scripting runtime itself treats them. Returns `None` when the
/// literal ends in a lone backslash or carries a truncated or non-hex
/// `\x`/`\u` payload.
pub fn unescape_literal(raw: &str) -> Option<String> {
    let mut decoded: String = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(char) = chars.next() {
        if char != '\\' {
            decoded.push(char);
            continue;
        }

        match chars.next()? {
            'n' => decoded.push('\n'),
            't' => decoded.push('\t'),
            'r' => decoded.push('\r'),
            '0' => decoded.push('\0'),
            '"' => decoded.push('"'),
            '\'' => decoded.push('\''),
            '\\' => decoded.push('\\'),
            'x' => decoded.push(decode_hex_escape(&mut chars, 2)?),
            'u' => decoded.push(decode_hex_escape(&mut chars, 4)?),
            other => {
                decoded.push('\\');
                decoded.push(other);
            }
        }
    }

    Some(decoded)
}

fn decode_hex_escape(chars: &mut std::str::Chars, digits: usize) -> Option<char> {
    let payload: String = (0..digits).map(|_| chars.next()).collect::<Option<String>>()?;
    char::from_u32(u32::from_str_radix(&payload, 16).ok()?)
}

/// Reads a source file as strict UTF-8, stripping the BOM if it's present.
/// Malformed byte sequences terminate the run.
pub fn read_source(path: &Path, decode_error_msg: &str) -> String {
    let bytes: Vec<u8> = read(path).unwrap();
    let (decoded, _, had_errors) = encoding_rs::UTF_8.decode(&bytes);

    if had_errors {
        eprintln!("{decode_error_msg} {}", path.display());
        exit(1);
    }

    decoded.into_owned()
}

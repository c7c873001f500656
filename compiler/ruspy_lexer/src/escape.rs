//! String literal escapes.
//!
//! Recognized: `\n \r \t \0 \\ \" \'`, `\xHH` and `\u{H..H}` (1 to 6 hex
//! digits, `_` allowed). Anything else is kept literally, backslash
//! included.

fn simple_escape(c: char) -> Option<char> {
    match c {
        'n' => Some('\n'),
        'r' => Some('\r'),
        't' => Some('\t'),
        '0' => Some('\0'),
        '\\' => Some('\\'),
        '"' => Some('"'),
        '\'' => Some('\''),
        _ => None,
    }
}

/// Decode the body of a string literal (quotes already stripped).
pub(crate) fn unescape_string(body: &str) -> String {
    let mut out = String::with_capacity(body.len());
    let mut rest = body;

    while let Some(pos) = rest.find('\\') {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];
        let consumed = decode_escape(after, &mut out);
        rest = &after[consumed..];
    }
    out.push_str(rest);
    out
}

/// Decode one escape whose backslash has been consumed; returns how many
/// bytes of `after` were used.
fn decode_escape(after: &str, out: &mut String) -> usize {
    let Some(first) = after.chars().next() else {
        out.push('\\');
        return 0;
    };

    if let Some(c) = simple_escape(first) {
        out.push(c);
        return 1;
    }

    match first {
        'x' => {
            let digits = after.get(1..3).filter(|d| d.len() == 2);
            if let Some(c) = digits
                .and_then(|d| u8::from_str_radix(d, 16).ok())
                .filter(u8::is_ascii)
            {
                out.push(char::from(c));
                return 3;
            }
        }
        'u' => {
            if let Some(body) = after.strip_prefix("u{") {
                if let Some(close) = body.find('}') {
                    let hex: String = body[..close].chars().filter(|&c| c != '_').collect();
                    let decoded = (1..=6)
                        .contains(&hex.len())
                        .then(|| u32::from_str_radix(&hex, 16).ok())
                        .flatten()
                        .and_then(char::from_u32);
                    if let Some(c) = decoded {
                        out.push(c);
                        return 2 + close + 1;
                    }
                }
            }
        }
        _ => {}
    }

    out.push('\\');
    out.push(first);
    first.len_utf8()
}

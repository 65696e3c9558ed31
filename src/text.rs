//! Line splitting shared by both tools.

/// Split `text` into lines, accepting `\n`, `\r\n` and a lone `\r` as line
/// endings. A trailing terminator does not produce an extra empty line.
///
/// ```text
/// "a\r\nb\rc\n"  -> ["a", "b", "c"]
/// "a\n\nb"       -> ["a", "", "b"]
/// ```
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        match rest.find(['\r', '\n']) {
            Some(end) => {
                lines.push(&rest[..end]);
                let terminator = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[end + terminator..];
            }
            None => {
                lines.push(rest);
                break;
            }
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_terminators() {
        assert_eq!(split_lines("a\r\nb\rc\nd"), ["a", "b", "c", "d"]);
    }

    #[test]
    fn test_lone_cr_only() {
        assert_eq!(split_lines("one\rtwo\rthree\r"), ["one", "two", "three"]);
    }

    #[test]
    fn test_blank_lines_kept() {
        assert_eq!(split_lines("a\n\n\r\rb"), ["a", "", "", "b"]);
    }

    #[test]
    fn test_trailing_terminator_and_empty() {
        assert_eq!(split_lines("a\n"), ["a"]);
        assert_eq!(split_lines("\n"), [""]);
        assert!(split_lines("").is_empty());
    }
}

use super::LINE_BREAK;

/// `**bold**` → `<strong>`, `*italic*` → `<em>`, newline → `<br>`.
///
/// Markers only pair up within one line. Unterminated or empty pairs stay
/// literal, and an italic pair never crosses a `<strong>` boundary.
pub(super) fn render(escaped: &str) -> String {
    escaped
        .split('\n')
        .map(|line| wrap_italic(&wrap_delimited(line, "**", "strong")))
        .collect::<Vec<_>>()
        .join(LINE_BREAK)
}

/// Italic pass over the text between tags. Input is escaped, so every `<`
/// starts a tag emitted by the bold pass.
fn wrap_italic(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut rest = line;

    while let Some(open) = rest.find('<') {
        out.push_str(&wrap_delimited(&rest[..open], "*", "em"));
        let close = rest[open..].find('>').map_or(rest.len(), |i| open + i + 1);
        out.push_str(&rest[open..close]);
        rest = &rest[close..];
    }

    out.push_str(&wrap_delimited(rest, "*", "em"));
    out
}

fn wrap_delimited(line: &str, marker: &str, tag: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut rest = line;

    while let Some(start) = rest.find(marker) {
        let after = &rest[start + marker.len()..];
        match after.find(marker) {
            // empty pair, keep the opening marker and retry from the second one
            Some(0) => {
                out.push_str(&rest[..start + marker.len()]);
                rest = after;
            }
            Some(end) => {
                out.push_str(&rest[..start]);
                out.push_str(&format!("<{tag}>{}</{tag}>", &after[..end]));
                rest = &after[end + marker.len()..];
            }
            None => break,
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bold_and_italic() {
        assert_eq!(render("**Important**"), "<strong>Important</strong>");
        assert_eq!(render("a *minor* note"), "a <em>minor</em> note");
        assert_eq!(
            render("**Termination** requires *written* notice"),
            "<strong>Termination</strong> requires <em>written</em> notice"
        );
    }

    #[test]
    fn test_newlines_become_breaks() {
        assert_eq!(render("one\ntwo"), "one<br>two");
        assert_eq!(render("**a**\n*b*"), "<strong>a</strong><br><em>b</em>");
    }

    #[test]
    fn test_unterminated_markers_stay_literal() {
        assert_eq!(render("**dangling"), "**dangling");
        assert_eq!(render("5 * 3"), "5 * 3");
        assert_eq!(render("* item one\n* item two"), "* item one<br>* item two");
        assert_eq!(render("****"), "****");
    }

    #[test]
    fn test_markers_do_not_span_lines() {
        assert_eq!(render("**start\nend**"), "**start<br>end**");
    }

    #[test]
    fn test_italic_nests_inside_bold() {
        assert_eq!(
            render("**a *b* c**"),
            "<strong>a <em>b</em> c</strong>"
        );
    }

    #[test]
    fn test_overlapping_markers_keep_nesting_valid() {
        assert_eq!(render("**a *b** c*"), "<strong>a *b</strong> c*");
    }
}

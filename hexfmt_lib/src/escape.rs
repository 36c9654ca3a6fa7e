//! Escaping policies for the annotation column.

/// Plain text annotation: characters outside printable ASCII become '.'.
/// With `extended`, only 0x00-0x1f are replaced so the upper half renders as
/// whatever the output encoding shows for those code points.
pub(crate) fn plain(raw: &str, extended: bool) -> String {
    raw.chars()
        .map(|ch| {
            let code = ch as u32;
            let printable = if extended {
                code > 0x1f
            } else {
                (0x20..=0x7f).contains(&code)
            };
            if printable {
                ch
            } else {
                '.'
            }
        })
        .collect()
}

/// Hypertext annotation: markup metacharacters always become named entities.
/// With `extended`, quotes become named entities too and everything else
/// outside printable ASCII becomes a numeric entity; without it, '.'.
pub(crate) fn hypertext(raw: &str, extended: bool) -> String {
    let mut out = String::with_capacity(raw.len());

    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\'' if extended => out.push_str("&apos;"),
            '"' if extended => out.push_str("&quot;"),
            ch if (0x20..=0x7f).contains(&(ch as u32)) => out.push(ch),
            ch if extended => out.push_str(&format!("&#x{:x};", ch as u32)),
            _ => out.push('.'),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_replaces_non_printable() {
        assert_eq!("...@S.", plain("\u{0}\u{1}\u{8}@S\u{ff}", false));
        assert_eq!("<>&'\"", plain("<>&'\"", false));
    }

    #[test]
    fn test_plain_extended_keeps_upper_half() {
        assert_eq!("..@S\u{ff}", plain("\u{0}\u{1f}@S\u{ff}", true));
    }

    #[test]
    fn test_hypertext_escapes_markup() {
        assert_eq!("&lt;stdio.h&gt;", hypertext("<stdio.h>", false));
        assert_eq!("a&amp;b", hypertext("a&b", false));
        assert_eq!("x.y", hypertext("x\u{d2}y", false));
    }

    #[test]
    fn test_hypertext_extended_uses_entities() {
        assert_eq!("&apos;&quot;", hypertext("'\"", true));
        assert_eq!("hello&#xd2;world", hypertext("hello\u{d2}world", true));
        assert_eq!("&#x1f;", hypertext("\u{1f}", true));
    }
}

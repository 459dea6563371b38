//! Placeholder normalization.
//!
//! Both MySQL and SQLite accept `?` as a positional argument marker, so
//! queries written with `$` or `$N` markers are rewritten to `?`. Quoted
//! regions (`'...'`, `"..."` and `` `...` ``) are copied verbatim so that
//! literals and identifiers containing `$` survive. Inside a quoted region a
//! backslash escapes the following character, as in MySQL string literals.

/// Rewrite `$` and `$N` argument markers outside quoted regions into `?`.
///
/// Numbered markers are assumed to appear in order; `$2, $1` becomes `?, ?`.
pub fn normalize_placeholders(query: &str) -> String {
    let mut out = String::with_capacity(query.len());
    let mut quote: Option<char> = None;
    let mut chars = query.chars().peekable();

    while let Some(c) = chars.next() {
        match quote {
            Some(q) => {
                out.push(c);
                if c == '\\' {
                    // escaped pair, the next char cannot close the quote
                    if let Some(escaped) = chars.next() {
                        out.push(escaped);
                    }
                } else if c == q {
                    quote = None;
                }
            }
            None => match c {
                '\'' | '"' | '`' => {
                    quote = Some(c);
                    out.push(c);
                }
                '$' => {
                    while chars.next_if(|d| d.is_ascii_digit()).is_some() {}
                    out.push('?');
                }
                _ => out.push(c),
            },
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbered_placeholders() {
        assert_eq!(
            normalize_placeholders("SELECT * FROM users WHERE id = $1 AND org = $2"),
            "SELECT * FROM users WHERE id = ? AND org = ?"
        );
        assert_eq!(
            normalize_placeholders("INSERT INTO t VALUES ($10, $11)"),
            "INSERT INTO t VALUES (?, ?)"
        );
    }

    #[test]
    fn test_bare_dollar_placeholders() {
        assert_eq!(
            normalize_placeholders("UPDATE t SET a = $ WHERE b = $"),
            "UPDATE t SET a = ? WHERE b = ?"
        );
    }

    #[test]
    fn test_question_marks_untouched() {
        let query = "SELECT name FROM sqlite_master WHERE type = 'table' AND name = ?";
        assert_eq!(normalize_placeholders(query), query);
    }

    #[test]
    fn test_quoted_regions_preserved() {
        assert_eq!(
            normalize_placeholders("SELECT '$1 off', \"$col\", `$x` FROM t WHERE p = $1"),
            "SELECT '$1 off', \"$col\", `$x` FROM t WHERE p = ?"
        );
        // doubled quote inside a literal
        assert_eq!(
            normalize_placeholders("SELECT 'it''s $5' WHERE a = $1"),
            "SELECT 'it''s $5' WHERE a = ?"
        );
    }

    #[test]
    fn test_backslash_escaped_quotes() {
        assert_eq!(
            normalize_placeholders(r"SELECT 'it\'s $5' WHERE a = $1"),
            r"SELECT 'it\'s $5' WHERE a = ?"
        );
        assert_eq!(
            normalize_placeholders(r#"SELECT "say \"$x\"" WHERE b = $2"#),
            r#"SELECT "say \"$x\"" WHERE b = ?"#
        );
        // escaped backslash right before the closing quote
        assert_eq!(
            normalize_placeholders(r"SELECT 'dir\\' WHERE c = $3"),
            r"SELECT 'dir\\' WHERE c = ?"
        );
    }

    #[test]
    fn test_empty_query() {
        assert_eq!(normalize_placeholders(""), "");
    }
}

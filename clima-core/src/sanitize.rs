//! Cleanup of free-text city input before it is used as a query value.

/// Characters that are stripped from city input.
pub const DENYLIST: &[char] = &['<', '>', '"', '\'', '`', '{', '}', '(', ')', '[', ']', '\\', ';'];

/// Strip markup and injection-relevant characters, then trim whitespace.
///
/// The result is meant to be percent-encoded by the caller. No attempt is made
/// to check that it names a real place. Removal happens before trimming so the
/// function is idempotent (`"< Rio"` becomes `"Rio"` in one pass).
pub fn sanitize(raw: &str) -> String {
    raw.chars()
        .filter(|c| !DENYLIST.contains(c))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Like [`sanitize`], for input that may be absent (an unset form field).
pub fn sanitize_opt(raw: Option<&str>) -> String {
    raw.map(sanitize).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_blank_inputs_become_empty() {
        assert_eq!(sanitize(""), "");
        assert_eq!(sanitize("   \t\n"), "");
        assert_eq!(sanitize_opt(None), "");
    }

    #[test]
    fn strips_denied_characters_and_trims() {
        assert_eq!(sanitize("  São Paulo  "), "São Paulo");
        assert_eq!(sanitize("<script>alert('x')</script>"), "scriptalertx/script");
        assert_eq!(sanitize("Rio; DROP {table}"), "Rio DROP table");
        assert_eq!(sanitize("`[\\]`"), "");
        assert_eq!(sanitize_opt(Some(" \"Lisboa\" ")), "Lisboa");
    }

    #[test]
    fn keeps_ordinary_place_name_punctuation() {
        assert_eq!(sanitize("Saint-Étienne"), "Saint-Étienne");
        assert_eq!(sanitize("St. John's"), "St. Johns");
        assert_eq!(sanitize("Washington, D.C."), "Washington, D.C.");
    }

    #[test]
    fn is_idempotent() {
        let inputs = [
            "",
            "  Paris ",
            "< Rio >",
            " ( Porto ) ",
            "a;\tb",
            "\"  \"",
            "Xyz123",
            "  {[(<>)]}  Belo Horizonte ;",
        ];
        for input in inputs {
            let once = sanitize(input);
            assert_eq!(sanitize(&once), once, "input {input:?}");
        }
    }
}

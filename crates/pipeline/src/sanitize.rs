//! Strips markdown wrapping that models add around JSON output.
//!
//! Completion text unpredictably arrives as bare JSON, JSON inside a
//! ```` ```json ```` fence, or JSON under a stray `json` tag line. One
//! idempotent pass normalizes all of them; text that matches none of the
//! patterns is returned unchanged, so well-formed JSON is never altered.

/// Remove code-fence and language-tag wrapping from completion text.
///
/// Idempotent: re-sanitizing already-sanitized text is a no-op.
pub fn sanitize(raw: &str) -> &str {
    let mut text = raw.trim();

    if let Some(body) = strip_fences(text) {
        text = body.trim();
    }

    // A bare `json` tag on its own first line — seen when the model drops
    // the fence but keeps the language tag.
    if let Some(rest) = strip_tag_line(text) {
        text = rest.trim();
    }

    text
}

/// Strip an opening fence (with optional `json` tag) and a closing fence.
/// Returns `None` when the text is not fenced, or is fenced as some other
/// language.
fn strip_fences(text: &str) -> Option<&str> {
    let rest = text.strip_prefix("```")?;

    let body = match rest.split_once('\n') {
        Some((tag, body)) => {
            let tag = tag.trim();
            if tag.is_empty() || tag.eq_ignore_ascii_case("json") {
                body
            } else {
                return None;
            }
        }
        // Single-line fence: ```{...}``` or ```json {...}```
        None => {
            let rest = rest.trim_start();
            rest.strip_prefix("json")
                .or_else(|| rest.strip_prefix("JSON"))
                .map(str::trim_start)
                .unwrap_or(rest)
        }
    };

    let body = body.trim_end();
    Some(body.strip_suffix("```").map(str::trim_end).unwrap_or(body))
}

fn strip_tag_line(text: &str) -> Option<&str> {
    let (first, rest) = text.split_once('\n')?;
    first.trim().eq_ignore_ascii_case("json").then_some(rest)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLEAN: &str = r#"{"destination": "Miami", "duration_days": 5}"#;

    #[test]
    fn clean_json_passes_through_unchanged() {
        assert_eq!(sanitize(CLEAN), CLEAN);
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let wrapped = format!("\n  {CLEAN}  \n");
        assert_eq!(sanitize(&wrapped), CLEAN);
    }

    #[test]
    fn strips_json_fence() {
        let wrapped = format!("```json\n{CLEAN}\n```");
        assert_eq!(sanitize(&wrapped), CLEAN);
    }

    #[test]
    fn strips_uppercase_json_fence() {
        let wrapped = format!("```JSON\n{CLEAN}\n```");
        assert_eq!(sanitize(&wrapped), CLEAN);
    }

    #[test]
    fn strips_untagged_fence() {
        let wrapped = format!("```\n{CLEAN}\n```");
        assert_eq!(sanitize(&wrapped), CLEAN);
    }

    #[test]
    fn strips_single_line_fence() {
        let wrapped = format!("```{CLEAN}```");
        assert_eq!(sanitize(&wrapped), CLEAN);
    }

    #[test]
    fn strips_opening_fence_without_closing() {
        let wrapped = format!("```json\n{CLEAN}");
        assert_eq!(sanitize(&wrapped), CLEAN);
    }

    #[test]
    fn strips_bare_json_tag_line() {
        let wrapped = format!("json\n{CLEAN}");
        assert_eq!(sanitize(&wrapped), CLEAN);
    }

    #[test]
    fn strips_fence_then_tag_line() {
        // Both wrappings at once, as produced by some models
        let wrapped = format!("```\njson\n{CLEAN}\n```");
        assert_eq!(sanitize(&wrapped), CLEAN);
    }

    #[test]
    fn leaves_other_language_fences_alone() {
        let wrapped = "```python\nprint('hi')\n```";
        assert_eq!(sanitize(wrapped), wrapped);
    }

    #[test]
    fn sanitize_is_idempotent() {
        for input in [
            CLEAN.to_string(),
            format!("```json\n{CLEAN}\n```"),
            format!("```\n{CLEAN}\n```"),
            format!("json\n{CLEAN}"),
            format!("  {CLEAN}  "),
        ] {
            let once = sanitize(&input);
            assert_eq!(sanitize(once), once, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn does_not_eat_json_valued_strings() {
        // A field value containing the word "json" must survive
        let text = r#"{"notes": "respond in json"}"#;
        assert_eq!(sanitize(text), text);
    }
}

use std::sync::OnceLock;

use regex::Regex;

static RESERVED: OnceLock<Regex> = OnceLock::new();

fn reserved() -> &'static Regex {
    RESERVED.get_or_init(|| Regex::new(r#"[\\/:*?"<>|]"#).expect("reserved character class"))
}

/// Replace every character that is illegal in a path segment on common
/// filesystems with `_`. Everything else, including non-ASCII scripts, passes
/// through unchanged.
pub fn sanitize(name: &str) -> String {
    reserved().replace_all(name, "_").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_every_reserved_character() {
        assert_eq!(sanitize(r#"\/:*?"<>|"#), "_________");
    }

    #[test]
    fn keeps_safe_characters_in_order_and_count() {
        let input = "家有大貓 Nekojishi — side.b (v2)";
        assert_eq!(sanitize(input), input);
        assert_eq!(sanitize(input).chars().count(), input.chars().count());
    }

    #[test]
    fn colon_in_title_becomes_underscore() {
        assert_eq!(
            sanitize("fault - milestone two side:above"),
            "fault - milestone two side_above"
        );
    }

    #[test]
    fn idempotent() {
        let once = sanitize(r#"Angels with Scaly Wings™ / 鱗羽の天使"#);
        assert_eq!(sanitize(&once), once);
    }

    #[test]
    fn empty_input_is_fine() {
        assert_eq!(sanitize(""), "");
    }
}

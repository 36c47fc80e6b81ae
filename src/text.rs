//! Small text transformations shared by the renderers.
//!
//! Everything here is char-aware: titles and excerpts routinely contain
//! non-ASCII text, so byte slicing is never used for truncation.

/// Truncate `text` to at most `max` characters, appending `...` when cut.
///
/// Cuts on the last word boundary inside the limit when there is one, so
/// excerpts don't end mid-word.
pub fn truncate(text: &str, max: usize) -> String {
    let text = text.trim();
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max).collect();
    let cut = match cut.rfind(char::is_whitespace) {
        Some(pos) if pos > 0 => &cut[..pos],
        _ => cut.as_str(),
    };
    format!("{}...", cut.trim_end())
}

/// Up to two uppercase initials from a title, `??` for an empty one.
///
/// - `"Fitness Tracker App"` → `"FT"`
/// - `"ada"` → `"A"`
pub fn initials(title: &str) -> String {
    let initials: String = title
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect();
    if initials.is_empty() {
        "??".to_string()
    } else {
        initials
    }
}

/// Page slug: letters and digits (any script) lowercased, every other run
/// of characters collapsed to one dash.
///
/// - `"Chat Messenger"` → `"chat-messenger"`
/// - `"Привет Мир"` → `"привет-мир"`
/// - `"  ***  "` → `"item"`
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for c in text.trim().chars() {
        if c.is_alphanumeric() || c == '_' {
            slug.extend(c.to_lowercase());
        } else if !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let slug = slug.trim_matches('-');
    if slug.is_empty() {
        "item".to_string()
    } else {
        slug.to_string()
    }
}

/// Title-case a raw label: dashes and underscores become spaces, each word
/// capitalized. `"machine-learning"` → `"Machine Learning"`.
pub fn title_case(raw: &str) -> String {
    raw.split(['-', '_', ' '])
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Word count of a Markdown/HTML body, ignoring tags.
pub fn word_count(body: &str) -> usize {
    let mut plain = String::with_capacity(body.len());
    let mut in_tag = false;
    for c in body.chars() {
        match c {
            '<' => in_tag = true,
            '>' => {
                in_tag = false;
                plain.push(' ');
            }
            _ if !in_tag => plain.push(c),
            _ => {}
        }
    }
    plain.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_short_text_untouched() {
        assert_eq!(truncate("short", 10), "short");
    }

    #[test]
    fn truncate_exact_length_untouched() {
        assert_eq!(truncate("12345", 5), "12345");
    }

    #[test]
    fn truncate_cuts_on_word_boundary() {
        assert_eq!(
            truncate("A full-featured online store with cart", 20),
            "A full-featured..."
        );
    }

    #[test]
    fn truncate_single_long_word() {
        assert_eq!(truncate("abcdefghij", 4), "abcd...");
    }

    #[test]
    fn truncate_is_char_safe() {
        assert_eq!(truncate("ééééé", 3), "ééé...");
    }

    #[test]
    fn initials_two_words() {
        assert_eq!(initials("Fitness Tracker App"), "FT");
    }

    #[test]
    fn initials_single_word_lowercase() {
        assert_eq!(initials("ada"), "A");
    }

    #[test]
    fn initials_empty() {
        assert_eq!(initials("   "), "??");
    }

    #[test]
    fn slugify_spaces_and_symbols() {
        assert_eq!(slugify("Chat Messenger!"), "chat-messenger");
        assert_eq!(slugify("a  --  b"), "a-b");
    }

    #[test]
    fn slugify_empty_falls_back() {
        assert_eq!(slugify("  ***  "), "item");
    }

    #[test]
    fn slugify_keeps_non_latin_letters() {
        assert_eq!(slugify("Привет Мир"), "привет-мир");
        assert_eq!(slugify("日本語"), "日本語");
        assert_ne!(slugify("привет"), slugify("мир"));
    }

    #[test]
    fn title_case_dashes() {
        assert_eq!(title_case("machine-learning"), "Machine Learning");
        assert_eq!(title_case("web"), "Web");
    }

    #[test]
    fn word_count_ignores_tags() {
        assert_eq!(word_count("<p>one two</p><p>three</p>"), 3);
        assert_eq!(word_count(""), 0);
    }
}

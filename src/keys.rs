/// Keyboard shortcuts understood by the viewer page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shortcut {
    GoHome,
    ToggleDayNight,
}

#[inline]
pub fn shortcut_for_key(key: &str) -> Option<Shortcut> {
    match key {
        "h" | "H" => Some(Shortcut::GoHome),
        "n" | "N" => Some(Shortcut::ToggleDayNight),
        _ => None,
    }
}

/// Text entry elements keep their keystrokes.
#[inline]
pub fn is_text_entry(tag_name: &str, content_editable: bool) -> bool {
    content_editable
        || tag_name.eq_ignore_ascii_case("input")
        || tag_name.eq_ignore_ascii_case("textarea")
        || tag_name.eq_ignore_ascii_case("select")
}

/// Resolve a keydown into a shortcut. Auto-repeat and keys typed into text
/// entry elements are ignored.
pub fn shortcut_for_keydown(
    key: &str,
    repeat: bool,
    target_tag: Option<&str>,
    content_editable: bool,
) -> Option<Shortcut> {
    if repeat {
        return None;
    }
    if let Some(tag) = target_tag {
        if is_text_entry(tag, content_editable) {
            return None;
        }
    }
    shortcut_for_key(key)
}

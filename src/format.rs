//! Pure text helpers used by the renderers.

pub const DEFAULT_WRAP_WIDTH: usize = 80;

/// Highlight colours, indexed by the store's style code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightColor {
    Gray,
    Green,
    Blue,
    Yellow,
    Pink,
    Violet,
}

impl HighlightColor {
    pub fn name(self) -> &'static str {
        match self {
            Self::Gray => "gray",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Yellow => "yellow",
            Self::Pink => "pink",
            Self::Violet => "violet",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Gray => "b_gray",
            Self::Green => "b_green",
            Self::Blue => "b_blue",
            Self::Yellow => "b_yellow",
            Self::Pink => "b_pink",
            Self::Violet => "b_violet",
        }
    }
}

/// Unknown codes fall back to gray.
pub fn get_color(style: i64) -> HighlightColor {
    match style {
        1 => HighlightColor::Green,
        2 => HighlightColor::Blue,
        3 => HighlightColor::Yellow,
        4 => HighlightColor::Pink,
        5 => HighlightColor::Violet,
        _ => HighlightColor::Gray,
    }
}

/// Folds `num` into the mind-map palette range `2..=7` once it passes 7.
pub fn get_mm_color(num: i64) -> i64 {
    if num > 7 {
        (num - 2).rem_euclid(6) + 2
    } else {
        num
    }
}

/// Splits `representative` around the first occurrence of `selected`.
///
/// Returns `None` when `selected` is empty or does not occur, so callers can
/// fall back to the plain passage.
pub fn split_emphasis<'a>(
    selected: &str,
    representative: &'a str,
) -> Option<(&'a str, &'a str, &'a str)> {
    if selected.is_empty() {
        return None;
    }
    let left = representative.find(selected)?;
    let right = left + selected.len();
    Some((
        &representative[..left],
        &representative[left..right],
        &representative[right..],
    ))
}

/// Wraps the first occurrence of `selected` inside `representative` in `<b>`.
pub fn bold_text(selected: &str, representative: &str) -> String {
    match split_emphasis(selected, representative) {
        Some((before, span, after)) => format!("{before}<b>{span}</b>{after}"),
        None => representative.to_string(),
    }
}

/// Breaks `text` into lines of at most `width` characters, ignoring word
/// boundaries. A zero width leaves the text as is.
pub fn wrap_text(text: &str, width: usize) -> String {
    if width == 0 {
        return text.to_string();
    }
    let chars: Vec<char> = text.chars().collect();
    chars
        .chunks(width)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_documented_style_codes() {
        let expected = ["gray", "green", "blue", "yellow", "pink", "violet"];
        for (code, name) in expected.iter().enumerate() {
            assert_eq!(get_color(code as i64).name(), *name);
        }
        assert_eq!(get_color(3).css_class(), "b_yellow");
    }

    #[test]
    fn unknown_style_codes_are_gray() {
        for code in [-100, -1, 6, 7, 42, i64::MAX] {
            assert_eq!(get_color(code), HighlightColor::Gray);
        }
    }

    #[test]
    fn mm_color_stays_in_palette() {
        for n in 8..500 {
            let color = get_mm_color(n);
            assert!((2..=7).contains(&color), "{n} -> {color}");
        }
        assert_eq!(get_mm_color(8), 2);
        assert_eq!(get_mm_color(13), 7);
        assert_eq!(get_mm_color(14), 2);
    }

    #[test]
    fn mm_color_passes_small_values_through() {
        for n in -5..=7 {
            assert_eq!(get_mm_color(n), n);
        }
    }

    #[test]
    fn wrap_rejoins_to_original() {
        let text = "The spice must flow. Fear is the mind-killer, the little death.";
        for width in 1..=text.len() + 3 {
            let wrapped = wrap_text(text, width);
            assert_eq!(wrapped.replace('\n', ""), text);
            assert!(wrapped.lines().all(|line| line.chars().count() <= width));
        }
    }

    #[test]
    fn wrap_counts_characters_not_bytes() {
        assert_eq!(wrap_text("ééééé", 2), "éé\néé\né");
        assert_eq!(wrap_text("", 80), "");
        assert_eq!(wrap_text("abc", 0), "abc");
    }

    #[test]
    fn bolds_first_occurrence_only() {
        let rep = "the cat saw the cat";
        let out = bold_text("cat", rep);
        assert_eq!(out, "the <b>cat</b> saw the cat");
        assert_eq!(out.replacen("<b>", "", 1).replacen("</b>", "", 1), rep);
    }

    #[test]
    fn bold_handles_whole_passage_and_edges() {
        assert_eq!(bold_text("abc", "abc"), "<b>abc</b>");
        assert_eq!(bold_text("a", "abc"), "<b>a</b>bc");
        assert_eq!(bold_text("c", "abc"), "ab<b>c</b>");
    }

    #[test]
    fn bold_leaves_passage_alone_when_selection_missing() {
        assert_eq!(bold_text("", "a passage"), "a passage");
        assert_eq!(bold_text("elsewhere", "a passage"), "a passage");
        assert!(split_emphasis("x", "a passage").is_none());
    }
}

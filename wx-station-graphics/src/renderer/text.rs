//! Text measurement and the line-splitting helpers the layout relies on.

use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::mono_font::iso_8859_1::{FONT_6X10, FONT_8X13, FONT_10X20};
use wx_station_common::FontSize;

pub fn font_for(size: FontSize) -> &'static MonoFont<'static> {
    match size {
        FontSize::Small => &FONT_6X10,
        FontSize::Medium => &FONT_8X13,
        FontSize::Large => &FONT_10X20,
    }
}

/// Pixel widths of rendered text. Kept behind a trait so layouts can be
/// checked against fonts with uneven advances.
pub trait TextMetrics {
    fn char_advance(&self, ch: char, font: FontSize) -> u32;

    fn line_height(&self, font: FontSize) -> u32;

    fn text_width(&self, text: &str, font: FontSize) -> u32 {
        text.chars().map(|ch| self.char_advance(ch, font)).sum()
    }
}

/// Metrics of the ISO-8859-1 mono fonts the display backend draws with.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonoMetrics;

impl TextMetrics for MonoMetrics {
    fn char_advance(&self, _ch: char, font: FontSize) -> u32 {
        let font = font_for(font);
        font.character_size.width + font.character_spacing
    }

    fn line_height(&self, font: FontSize) -> u32 {
        font_for(font).character_size.height
    }
}

/// Byte index of the last space at or before the middle of `text`, or 0
/// when no space qualifies.
pub fn split_index(text: &str) -> usize {
    let midpoint = text.len() / 2;
    let mut split = 0;
    for (index, ch) in text.char_indices() {
        if index > midpoint {
            break;
        }
        if ch == ' ' {
            split = index;
        }
    }
    split
}

/// Splits `text` in two at [`split_index`], dropping the space. Returns the
/// whole text and an empty second line when there is no split point.
pub fn split_lines(text: &str) -> (&str, &str) {
    match split_index(text) {
        0 => (text, ""),
        index => (&text[..index], &text[index + 1..]),
    }
}

/// Right edge for right-aligned `text` so that its first `:` starts at
/// `colon_x`. Text without a colon is centred on `colon_x`.
pub fn colon_anchor_x<M: TextMetrics>(
    text: &str,
    colon_x: i32,
    font: FontSize,
    metrics: &M,
) -> i32 {
    match text.find(':') {
        Some(colon) => colon_x + metrics.text_width(&text[colon..], font) as i32,
        None => colon_x + metrics.text_width(text, font) as i32 / 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Proportional stand-in: digits are wide, punctuation narrow.
    struct Proportional;

    impl TextMetrics for Proportional {
        fn char_advance(&self, ch: char, _font: FontSize) -> u32 {
            match ch {
                '1' => 5,
                ':' | '.' => 3,
                _ => 9,
            }
        }

        fn line_height(&self, _font: FontSize) -> u32 {
            12
        }
    }

    #[test]
    fn split_at_last_space_before_midpoint() {
        let text = "Partly cloudy with a chance of rain";
        assert_eq!(text.len(), 35);
        assert_eq!(split_index(text), 13);
        assert_eq!(split_lines(text), ("Partly cloudy", "with a chance of rain"));
    }

    #[test]
    fn no_space_before_midpoint_means_no_split() {
        assert_eq!(split_index("Thunderstorm"), 0);
        assert_eq!(split_index("Overcast skies"), 0);
        assert_eq!(split_index(""), 0);
        assert_eq!(split_lines("Fog"), ("Fog", ""));
    }

    #[test]
    fn space_exactly_at_midpoint_counts() {
        // len 8, midpoint 4, space at 4.
        assert_eq!(split_index("Waxi ngs"), 4);
    }

    #[test]
    fn multibyte_text_splits_on_char_boundary() {
        let text = "Zürich Zürich Zürich";
        let (first, second) = split_lines(text);
        assert_eq!(first, "Zürich");
        assert_eq!(second, "Zürich Zürich");
    }

    #[test]
    fn colon_lands_on_fixed_column_with_proportional_digits() {
        let metrics = Proportional;
        for text in ["11:11", "08:45", "21:09"] {
            let right = colon_anchor_x(text, 200, FontSize::Large, &metrics);
            let width = metrics.text_width(text, FontSize::Large) as i32;
            let colon = text.find(':').unwrap();
            let prefix = metrics.text_width(&text[..colon], FontSize::Large) as i32;
            assert_eq!(right - width + prefix, 200, "{text}");
        }
    }

    #[test]
    fn mono_metrics_count_chars_not_bytes() {
        let metrics = MonoMetrics;
        assert_eq!(metrics.text_width("15°C", FontSize::Small), 24);
        assert_eq!(metrics.line_height(FontSize::Large), 20);
    }
}

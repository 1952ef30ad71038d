//! Rectangle-only glyph rasterizer.
//!
//! Maps characters to deterministic sets of filled axis-aligned rectangles:
//! letters come from hand-placed shape tables, digits from a seven-segment
//! lookup. Space emits nothing and any unsupported character emits a filled
//! square placeholder. Output is pure data; the caller decides how to fill
//! the rectangles.

pub mod tables;

mod geom;

pub use geom::Aabb;
pub use tables::{GlyphRect, THICKNESS};

use glam::Vec2;

/// Append the rectangles for `c` drawn at top-left `origin` with em `size`.
pub fn char_rects(c: char, origin: Vec2, size: f32, out: &mut Vec<Aabb>) {
    if c == ' ' {
        return;
    }
    if let Some(digit) = c.to_digit(10) {
        let lit = &tables::SEGMENTS[digit as usize];
        for (on, seg) in lit.iter().zip(tables::SEGMENT_RECTS.iter()) {
            if *on {
                out.push(scaled(seg, origin, size));
            }
        }
        return;
    }
    let shape = tables::letter(c).unwrap_or(&tables::PLACEHOLDER);
    for rect in shape {
        out.push(scaled(rect, origin, size));
    }
}

/// Append the rectangles for `text`, advancing `size + spacing` per character.
pub fn text_rects(text: &str, origin: Vec2, size: f32, spacing: f32, out: &mut Vec<Aabb>) {
    let mut x = origin.x;
    for c in text.chars() {
        char_rects(c, Vec2::new(x, origin.y), size, out);
        x += size + spacing;
    }
}

/// Append the rectangles for `value` in decimal, one seven-segment digit per
/// position.
pub fn number_rects(value: u32, origin: Vec2, size: f32, spacing: f32, out: &mut Vec<Aabb>) {
    text_rects(&value.to_string(), origin, size, spacing, out);
}

/// Width of `text` laid out at `size` with `spacing` between characters
pub fn text_width(text: &str, size: f32, spacing: f32) -> f32 {
    let count = text.chars().count() as f32;
    if count == 0.0 {
        return 0.0;
    }
    count * size + (count - 1.0) * spacing
}

fn scaled(rect: &GlyphRect, origin: Vec2, size: f32) -> Aabb {
    Aabb::from_origin_size(
        origin + Vec2::new(rect.x, rect.y) * size,
        Vec2::new(rect.w, rect.h) * size,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rects_for(c: char) -> Vec<Aabb> {
        let mut out = Vec::new();
        char_rects(c, Vec2::ZERO, 1.0, &mut out);
        out
    }

    #[test]
    fn test_space_emits_nothing() {
        assert!(rects_for(' ').is_empty());
    }

    #[test]
    fn test_unsupported_char_is_placeholder_square() {
        for c in ['>', 'Q', '?', '#'] {
            let rects = rects_for(c);
            assert_eq!(rects.len(), 1, "placeholder for {c:?}");
            assert_eq!(rects[0].min, Vec2::ZERO);
            assert_eq!(rects[0].max, Vec2::new(1.0, 1.0));
        }
    }

    #[test]
    fn test_digit_rect_counts_follow_segment_table() {
        for digit in 0..10u32 {
            let c = char::from_digit(digit, 10).unwrap();
            let lit = tables::SEGMENTS[digit as usize]
                .iter()
                .filter(|on| **on)
                .count();
            assert_eq!(rects_for(c).len(), lit, "digit {digit}");
        }
        // spot-check the table itself
        assert_eq!(rects_for('8').len(), 7);
        assert_eq!(rects_for('1').len(), 2);
        assert_eq!(rects_for('0').len(), 6);
    }

    #[test]
    fn test_all_glyphs_stay_inside_em_box() {
        let em = Aabb::from_origin_size(Vec2::ZERO, Vec2::new(1.0, 1.0));
        for c in "AEGIJLNOPRSTX0123456789?".chars() {
            for rect in rects_for(c) {
                assert!(
                    em.contains(rect.min) && em.contains(rect.max),
                    "{c:?} rect {rect:?} escapes the em box"
                );
            }
        }
    }

    #[test]
    fn test_glyphs_scale_and_translate() {
        let mut out = Vec::new();
        char_rects('L', Vec2::new(100.0, 50.0), 40.0, &mut out);
        // vertical bar of the L
        assert_eq!(out[0].min, Vec2::new(100.0, 50.0));
        assert_eq!(out[0].max, Vec2::new(108.0, 90.0));
    }

    #[test]
    fn test_text_advance() {
        let mut out = Vec::new();
        text_rects("LL", Vec2::ZERO, 30.0, 5.0, &mut out);
        assert_eq!(out.len(), 4);
        // second L starts one advance to the right
        assert_eq!(out[2].min.x - out[0].min.x, 35.0);
        assert_eq!(out[2].min.y, out[0].min.y);
    }

    #[test]
    fn test_number_layout_multiple_digits() {
        let mut out = Vec::new();
        number_rects(10, Vec2::ZERO, 30.0, 5.0, &mut out);
        // '1' has two segments, '0' has six
        assert_eq!(out.len(), 8);
    }

    #[test]
    fn test_text_width() {
        assert_eq!(text_width("", 30.0, 5.0), 0.0);
        assert_eq!(text_width("X", 30.0, 5.0), 30.0);
        assert_eq!(text_width("XX", 30.0, 5.0), 65.0);
    }
}

use std::path::Path;

use ab_glyph::{point, Font as _, FontArc, PxScale, ScaleFont as _};
use anyhow::Context as _;
use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_text_mut;

use crate::error::ToonstripResult;

pub const FONT_SIZE: f32 = 14.0;
pub const TITLE_FONT_SIZE: f32 = 32.0;

const NORMAL_FONT_FILE: &str = "comic-book.otf";
const ITALIC_FONT_FILE: &str = "comic-book-italic.otf";
const BOLD_FONT_FILE: &str = "comic-book-bold.otf";
const TITLE_FONT_FILE: &str = "komikax.ttf";

/// Pixel-metrics and line-drawing seam the layout code depends on.
///
/// Width is the ink extent of the widest `\n`-separated line; height is the
/// bottom ink extent of the laid-out text plus the font's descent, so
/// blocks stacked by measured height never clip descenders. `draw_line`
/// places a single line with its top-left at `(x, y)`.
pub trait FontFace {
    fn measure_width(&self, text: &str) -> u32;
    fn measure_height(&self, text: &str) -> u32;
    fn draw_line(&self, canvas: &mut RgbaImage, x: i32, y: i32, color: Rgba<u8>, line: &str);
}

/// A TrueType/OpenType face at a fixed pixel size.
pub struct TtfFont {
    font: FontArc,
    scale: PxScale,
}

impl TtfFont {
    pub fn new(font: FontArc, px_size: f32) -> Self {
        Self {
            font,
            scale: PxScale::from(px_size.max(1.0)),
        }
    }

    pub fn from_bytes(bytes: Vec<u8>, px_size: f32) -> ToonstripResult<Self> {
        let font = FontArc::try_from_vec(bytes).context("parse font data")?;
        Ok(Self::new(font, px_size))
    }

    pub fn from_path(path: &Path, px_size: f32) -> ToonstripResult<Self> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("read font file {}", path.display()))?;
        Self::from_bytes(bytes, px_size)
    }

    /// Ink extents of one line laid out with its baseline at `baseline_y`:
    /// `(rightmost ink x, bottommost ink y)`.
    fn line_ink_extents(&self, line: &str, baseline_y: f32) -> (f32, f32) {
        let scaled = self.font.as_scaled(self.scale);
        let mut caret = 0.0_f32;
        let mut last = None;
        let mut max_right = 0.0_f32;
        let mut max_bottom = 0.0_f32;
        for ch in line.chars() {
            let id = self.font.glyph_id(ch);
            if let Some(prev) = last {
                caret += scaled.kern(prev, id);
            }
            let glyph = id.with_scale_and_position(self.scale, point(caret, baseline_y));
            if let Some(outlined) = self.font.outline_glyph(glyph) {
                let bounds = outlined.px_bounds();
                max_right = max_right.max(bounds.max.x);
                max_bottom = max_bottom.max(bounds.max.y);
            }
            caret += scaled.h_advance(id);
            last = Some(id);
        }
        (max_right, max_bottom)
    }
}

impl FontFace for TtfFont {
    fn measure_width(&self, text: &str) -> u32 {
        let scaled = self.font.as_scaled(self.scale);
        let ascent = scaled.ascent();
        let mut widest = 0.0_f32;
        for line in text.split('\n') {
            let (right, _) = self.line_ink_extents(line, ascent);
            widest = widest.max(right);
        }
        widest.ceil() as u32
    }

    fn measure_height(&self, text: &str) -> u32 {
        let scaled = self.font.as_scaled(self.scale);
        let ascent = scaled.ascent();
        let descent = (-scaled.descent()).max(0.0);
        let line_advance = scaled.height() + scaled.line_gap();

        let mut bottom = 0.0_f32;
        for (i, line) in text.split('\n').enumerate() {
            let baseline = ascent + line_advance * i as f32;
            let (_, line_bottom) = self.line_ink_extents(line, baseline);
            // Ink-free lines (all whitespace) still occupy a nominal line box.
            bottom = bottom.max(line_bottom).max(baseline);
        }
        (bottom + descent).ceil() as u32
    }

    fn draw_line(&self, canvas: &mut RgbaImage, x: i32, y: i32, color: Rgba<u8>, line: &str) {
        draw_text_mut(canvas, color, x, y, self.scale, &self.font, line);
    }
}

/// The four faces a strip needs: dialogue, narration, speaker labels, title.
pub struct FontSet<F: FontFace> {
    pub normal: F,
    pub italic: F,
    pub bold: F,
    pub title: F,
}

impl FontSet<TtfFont> {
    /// Loads the strip's faces from a directory laid out like the original
    /// asset bundle (`comic-book[-italic|-bold].otf`, `komikax.ttf`).
    pub fn load_dir(dir: &Path) -> ToonstripResult<Self> {
        Ok(Self {
            normal: TtfFont::from_path(&dir.join(NORMAL_FONT_FILE), FONT_SIZE)?,
            italic: TtfFont::from_path(&dir.join(ITALIC_FONT_FILE), FONT_SIZE)?,
            bold: TtfFont::from_path(&dir.join(BOLD_FONT_FILE), FONT_SIZE)?,
            title: TtfFont::from_path(&dir.join(TITLE_FONT_FILE), TITLE_FONT_SIZE)?,
        })
    }
}

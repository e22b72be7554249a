use image::{Rgba, RgbaImage};
use toonstrip::{CartoonStrip, CartoonStripCell, FontFace, FontSet, SpeechBubble};

pub const CHAR_W: u32 = 10;
pub const LINE_H: u32 = 12;

/// Ink colors the [`MarkedFont`] faces stamp, so tests can tell which face
/// drew a given line.
pub const NORMAL_INK: Rgba<u8> = Rgba([10, 10, 10, 255]);
pub const ITALIC_INK: Rgba<u8> = Rgba([20, 20, 20, 255]);
pub const BOLD_INK: Rgba<u8> = Rgba([30, 30, 30, 255]);
pub const TITLE_INK: Rgba<u8> = Rgba([40, 40, 40, 255]);

fn fill_line_box(canvas: &mut RgbaImage, x: i32, y: i32, chars: u32, color: Rgba<u8>) {
    for dx in 0..chars * CHAR_W {
        for dy in 0..LINE_H {
            let px = x + dx as i32;
            let py = y + dy as i32;
            if px >= 0 && py >= 0 && (px as u32) < canvas.width() && (py as u32) < canvas.height() {
                canvas.put_pixel(px as u32, py as u32, color);
            }
        }
    }
}

fn fixed_width(text: &str) -> u32 {
    text.split('\n')
        .map(|line| line.chars().count() as u32 * CHAR_W)
        .max()
        .unwrap_or(0)
}

fn fixed_height(text: &str) -> u32 {
    text.split('\n').count() as u32 * LINE_H
}

/// Deterministic metrics fake: every char advances [`CHAR_W`] px, every
/// line is [`LINE_H`] px tall, and drawing fills the line's box solid so
/// tests can assert where ink landed.
pub struct FixedFont;

impl FontFace for FixedFont {
    fn measure_width(&self, text: &str) -> u32 {
        fixed_width(text)
    }

    fn measure_height(&self, text: &str) -> u32 {
        fixed_height(text)
    }

    fn draw_line(&self, canvas: &mut RgbaImage, x: i32, y: i32, color: Rgba<u8>, line: &str) {
        fill_line_box(canvas, x, y, line.chars().count() as u32, color);
    }
}

/// Same metrics as [`FixedFont`], but draws in its own marker color instead
/// of the requested one, so a test can detect which face of a
/// [`FontSet`] rendered each line.
pub struct MarkedFont(pub Rgba<u8>);

impl FontFace for MarkedFont {
    fn measure_width(&self, text: &str) -> u32 {
        fixed_width(text)
    }

    fn measure_height(&self, text: &str) -> u32 {
        fixed_height(text)
    }

    fn draw_line(&self, canvas: &mut RgbaImage, x: i32, y: i32, _color: Rgba<u8>, line: &str) {
        fill_line_box(canvas, x, y, line.chars().count() as u32, self.0);
    }
}

pub fn fixed_fonts() -> FontSet<FixedFont> {
    FontSet {
        normal: FixedFont,
        italic: FixedFont,
        bold: FixedFont,
        title: FixedFont,
    }
}

pub fn marked_fonts() -> FontSet<MarkedFont> {
    FontSet {
        normal: MarkedFont(NORMAL_INK),
        italic: MarkedFont(ITALIC_INK),
        bold: MarkedFont(BOLD_INK),
        title: MarkedFont(TITLE_INK),
    }
}

pub fn bubble(person: &str, text: &str) -> SpeechBubble {
    SpeechBubble {
        person: person.to_string(),
        text: text.to_string(),
    }
}

pub fn cell_with(bubbles: Vec<SpeechBubble>) -> CartoonStripCell {
    CartoonStripCell {
        speech_bubbles: bubbles,
        image_description: "en tegning".to_string(),
        image_url: Some("http://example.test/panel.png".to_string()),
    }
}

pub fn four_cell_strip(title: &str, bubbles_per_cell: [Vec<SpeechBubble>; 4]) -> CartoonStrip {
    CartoonStrip {
        title: title.to_string(),
        cells: bubbles_per_cell.into_iter().map(cell_with).collect(),
    }
}

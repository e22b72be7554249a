use image::{Rgba, RgbaImage};

use crate::compose::StripStyle;
use crate::error::ToonstripResult;
use crate::font::{FontFace, FontSet};
use crate::model::SpeechBubble;
use crate::wrap::{n_lines, wrap_text};

pub(crate) const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
pub(crate) const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Breathing room between the bold speaker prefix and the first line.
const PREFIX_GAP: u32 = 5;

/// Renders one speech bubble into a panel-wide white block of exactly the
/// height its wrapped lines need plus the border padding.
///
/// Narration uses the italic face with no prefix. Dialogue draws the bold
/// `"Person: "` prefix at the border inset; the first body line starts one
/// prefix width to its right, continuation lines return to the border
/// margin.
pub fn render_text_block<F: FontFace>(
    bubble: &SpeechBubble,
    fonts: &FontSet<F>,
    style: &StripStyle,
) -> ToonstripResult<RgbaImage> {
    let font = if bubble.is_narrator() {
        &fonts.italic
    } else {
        &fonts.normal
    };

    let wrapped = wrap_text(&bubble.full_text(), font, style.text_width())?;
    // Line height comes from a single-line sample of the wrapped text so
    // every line advances by the same amount.
    let line_height = font.measure_height(&wrapped.replace('\n', " "));
    let height = n_lines(&wrapped) as u32 * line_height + 2 * style.border;

    let mut image = RgbaImage::from_pixel(style.panel_size, height, WHITE);

    let prefix_width = if bubble.is_narrator() {
        0
    } else {
        let prefix = bubble.person_prefix();
        fonts.bold.draw_line(
            &mut image,
            style.border as i32,
            style.border as i32,
            BLACK,
            &prefix,
        );
        fonts.bold.measure_width(&prefix) + PREFIX_GAP
    };

    let mut x = style.border + prefix_width;
    let mut y = style.border;
    for line in bubble.remove_person_prefix(&wrapped).split('\n') {
        font.draw_line(&mut image, x as i32, y as i32, BLACK, line);
        x = style.border;
        y += line_height;
    }

    Ok(image)
}

/// Renders the strip title into an auto-sized white block.
pub fn render_title<F: FontFace>(title: &str, font: &F, style: &StripStyle) -> RgbaImage {
    let width = font.measure_width(title) + 2 * style.border;
    let height = font.measure_height(title) + 2 * style.border;
    let mut image = RgbaImage::from_pixel(width, height, WHITE);
    font.draw_line(
        &mut image,
        style.border as i32,
        style.border as i32,
        BLACK,
        title,
    );
    image
}

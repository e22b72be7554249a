use image::imageops;
use image::{Rgba, RgbaImage};

use crate::error::{ToonstripError, ToonstripResult};
use crate::font::{FontFace, FontSet};
use crate::model::CartoonStrip;
use crate::panel::decorate_panel;
use crate::text::{render_text_block, render_title, WHITE};

/// Fixed pixel geometry of a composed strip.
#[derive(Clone, Copy, Debug)]
pub struct StripStyle {
    pub panel_size: u32,
    pub border: u32,
    pub outline_width: u32,
    pub outline_color: Rgba<u8>,
}

impl Default for StripStyle {
    fn default() -> Self {
        Self {
            panel_size: 300,
            border: 10,
            outline_width: 3,
            outline_color: Rgba([0, 0, 0, 255]),
        }
    }
}

impl StripStyle {
    /// Horizontal pixel budget for wrapped bubble text inside a panel.
    pub fn text_width(&self) -> u32 {
        self.panel_size - 2 * self.border
    }

    /// A usable style leaves room inside the border and outline rings; the
    /// composer checks this up front so degenerate geometry fails like any
    /// other precondition instead of underflowing mid-layout.
    pub fn validate(&self) -> ToonstripResult<()> {
        if self.panel_size <= 2 * (self.border + self.outline_width) {
            return Err(ToonstripError::malformed(format!(
                "panel size {} leaves no room inside border {} and outline {}",
                self.panel_size, self.border, self.outline_width
            )));
        }
        Ok(())
    }
}

/// Composes a validated strip and its already-decoded panel illustrations
/// into the final image: title block on top, decorated panels in a row,
/// each panel's text blocks stacked gaplessly beneath it.
///
/// Adjacent panels are placed at `x = i * (panel_size - border)` so their
/// white borders merge into a single seam, which is why the canvas is
/// `S*n - (n-1)*B` wide rather than `S*n`.
#[tracing::instrument(skip_all, fields(title = %strip.title, panels = panel_images.len()))]
pub fn compose_strip<F: FontFace>(
    strip: &CartoonStrip,
    panel_images: &[RgbaImage],
    fonts: &FontSet<F>,
    style: &StripStyle,
) -> ToonstripResult<RgbaImage> {
    strip.validate()?;
    style.validate()?;
    if panel_images.len() != strip.cells.len() {
        return Err(ToonstripError::malformed(format!(
            "{} cells but {} panel images",
            strip.cells.len(),
            panel_images.len()
        )));
    }

    let text_blocks = strip
        .cells
        .iter()
        .map(|cell| {
            cell.speech_bubbles
                .iter()
                .map(|bubble| render_text_block(bubble, fonts, style))
                .collect::<ToonstripResult<Vec<_>>>()
        })
        .collect::<ToonstripResult<Vec<_>>>()?;

    // Every panel's text column shares the tallest stack's height; shorter
    // stacks just leave white space below.
    let text_boxes_height = text_blocks
        .iter()
        .map(|blocks| blocks.iter().map(|b| b.height()).sum::<u32>())
        .max()
        .unwrap_or(0);

    let title = render_title(&strip.title, &fonts.title, style);

    let n = panel_images.len() as u32;
    let s = style.panel_size;
    let b = style.border;
    let width = s * n - (n - 1) * b;
    let height = title.height() + s + text_boxes_height;
    tracing::debug!(width, height, text_boxes_height, "composing strip canvas");

    let mut canvas = RgbaImage::from_pixel(width, height, WHITE);
    imageops::replace(&mut canvas, &title, 0, 0);

    for (i, source) in panel_images.iter().enumerate() {
        let x = i as u32 * (s - b);
        let panel = decorate_panel(source, s, style.outline_width, b, style.outline_color);
        imageops::replace(&mut canvas, &panel, x as i64, title.height() as i64);

        let mut y = title.height() + s;
        for block in &text_blocks[i] {
            imageops::replace(&mut canvas, block, x as i64, y as i64);
            y += block.height();
        }
    }

    Ok(canvas)
}

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};

use crate::text::WHITE;

/// Decorates an illustration to an exact `(total_size, total_size)` square:
/// the source is stretch-resized (no cropping) to the inner square, ringed
/// by an outline of `outline_color`, then padded by a white border. Each
/// ring has a fixed pixel thickness regardless of the source's dimensions.
pub fn decorate_panel(
    source: &RgbaImage,
    total_size: u32,
    outline_width: u32,
    border: u32,
    outline_color: Rgba<u8>,
) -> RgbaImage {
    let inner_size = total_size
        .saturating_sub(2 * outline_width + 2 * border)
        .max(1);
    let resized = imageops::resize(source, inner_size, inner_size, FilterType::CatmullRom);

    let outlined_size = total_size.saturating_sub(2 * border).max(1);
    let mut outlined = RgbaImage::from_pixel(outlined_size, outlined_size, outline_color);
    imageops::replace(&mut outlined, &resized, outline_width as i64, outline_width as i64);

    let mut bordered = RgbaImage::from_pixel(total_size, total_size, WHITE);
    imageops::replace(&mut bordered, &outlined, border as i64, border as i64);
    bordered
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
    const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

    #[test]
    fn output_is_exactly_square_for_wide_and_tall_sources() {
        for (w, h) in [(10, 500), (500, 10)] {
            let source = RgbaImage::from_pixel(w, h, RED);
            let decorated = decorate_panel(&source, 300, 3, 10, BLACK);
            assert_eq!(decorated.dimensions(), (300, 300));
        }
    }

    #[test]
    fn rings_are_concentric() {
        let source = RgbaImage::from_pixel(10, 500, RED);
        let decorated = decorate_panel(&source, 300, 3, 10, BLACK);
        // border, outline, stretched source
        assert_eq!(*decorated.get_pixel(0, 0), WHITE);
        assert_eq!(*decorated.get_pixel(5, 5), WHITE);
        assert_eq!(*decorated.get_pixel(11, 11), BLACK);
        assert_eq!(*decorated.get_pixel(150, 150), RED);
        assert_eq!(*decorated.get_pixel(299, 299), WHITE);
        assert_eq!(*decorated.get_pixel(288, 288), BLACK);
    }
}

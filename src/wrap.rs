use crate::error::{ToonstripError, ToonstripResult};
use crate::font::FontFace;

/// Wraps `text` so its widest rendered line stays inside `target_px`.
///
/// The search uses a character count as a proxy for pixel width: seed at
/// `chars / ceil(full_width / target_px)`, grow the candidate width while
/// the widest wrapped line still measures under the target, then emit the
/// greedy wrap one step back. It is an approximation: lines may under- or
/// over-fit by a few pixels, and a single word wider than the target is
/// kept whole rather than hyphenated.
pub fn wrap_text<F: FontFace>(text: &str, font: &F, target_px: u32) -> ToonstripResult<String> {
    if target_px == 0 {
        return Err(ToonstripError::layout("wrap target width must be > 0"));
    }

    let full_width = font.measure_width(text);
    if full_width < target_px {
        return Ok(text.to_string());
    }

    let n_chars = text.chars().count();
    let max_lines = (full_width as usize).div_ceil(target_px as usize);
    let mut wrap_width = (n_chars / max_lines).max(1);

    let mut steps = 0usize;
    while max_line_width(text, font, wrap_width) < target_px {
        wrap_width += 1;
        steps += 1;
        // At wrap_width = n_chars the whole text is one line whose width we
        // already know meets the target, so the search cannot legitimately
        // get past it.
        if steps > n_chars + 1 {
            return Err(ToonstripError::layout(format!(
                "wrap width search did not converge for {n_chars}-char text at {target_px}px"
            )));
        }
    }

    Ok(fill(text, wrap_width.saturating_sub(1).max(1)))
}

/// Pixel width of the widest line after greedy wrapping at `wrap_width` chars.
fn max_line_width<F: FontFace>(text: &str, font: &F, wrap_width: usize) -> u32 {
    wrap_lines(text, wrap_width)
        .iter()
        .map(|line| font.measure_width(line))
        .max()
        .unwrap_or(0)
}

/// Greedy word wrap at whitespace boundaries. Words longer than `width`
/// land alone on their own line, never split.
fn wrap_lines(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_chars = 0usize;
    for word in text.split_whitespace() {
        let word_chars = word.chars().count();
        if current.is_empty() {
            current.push_str(word);
            current_chars = word_chars;
        } else if current_chars + 1 + word_chars <= width {
            current.push(' ');
            current.push_str(word);
            current_chars += 1 + word_chars;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_chars = word_chars;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

fn fill(text: &str, width: usize) -> String {
    wrap_lines(text, width).join("\n")
}

pub fn n_lines(text: &str) -> usize {
    text.matches('\n').count() + 1
}

use anyhow::{bail, Context as _};
use image::RgbaImage;
use rayon::prelude::*;

use crate::error::{ToonstripError, ToonstripResult};
use crate::model::CartoonStrip;

/// Fetches and decodes one panel illustration. A non-success status or
/// undecodable body is a fetch error tagged with the panel index; no
/// retries, no placeholder images.
pub fn fetch_panel_image(panel: usize, url: &str) -> ToonstripResult<RgbaImage> {
    get_and_decode(url).map_err(|err| ToonstripError::fetch(panel, format!("{err:#}")))
}

/// Fetches every panel illustration, in parallel, merged by panel index so
/// completion order never changes the output order.
#[tracing::instrument(skip(strip), fields(title = %strip.title))]
pub fn fetch_strip_images(strip: &CartoonStrip) -> ToonstripResult<Vec<RgbaImage>> {
    strip.validate()?;
    strip
        .cells
        .par_iter()
        .enumerate()
        .map(|(i, cell)| {
            let url = cell
                .image_url
                .as_deref()
                .ok_or_else(|| ToonstripError::malformed(format!("cell {i} has no image url")))?;
            tracing::info!(panel = i, url, "fetching panel illustration");
            fetch_panel_image(i, url)
        })
        .collect()
}

fn get_and_decode(url: &str) -> anyhow::Result<RgbaImage> {
    let response = reqwest::blocking::get(url).with_context(|| format!("GET {url}"))?;
    let status = response.status();
    if !status.is_success() {
        bail!("GET {url} returned {status}");
    }
    let bytes = response
        .bytes()
        .with_context(|| format!("read body of {url}"))?;
    let image = image::load_from_memory(&bytes).context("decode illustration bytes")?;
    Ok(image.to_rgba8())
}

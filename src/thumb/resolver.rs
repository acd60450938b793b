/// Remote thumbnail resolution
///
/// One bounded fetch per detail view: gate the URL, GET it with a fixed
/// timeout, decode, and scale to the display width. Every failure along the
/// way collapses into `ResolvedImage::Unavailable`; callers never see an
/// error, only the outcome.

use image::imageops::FilterType;
use log::warn;
use thiserror::Error;
use tokio::task;
use std::time::Duration;

/// Width every loaded thumbnail is scaled to, in pixels
pub const DISPLAY_WIDTH: u32 = 300;

/// Total budget for the single GET (connect, redirects, and body)
const FETCH_TIMEOUT: Duration = Duration::from_secs(5);

/// Outcome of resolving a record's thumbnail URL.
#[derive(Debug, Clone)]
pub enum ResolvedImage {
    /// Fetched, decoded, and scaled to `DISPLAY_WIDTH`
    Loaded(ScaledBitmap),
    /// No usable URL, or the fetch or decode failed
    Unavailable,
}

/// RGBA8 pixels of a thumbnail scaled to the display width.
#[derive(Debug, Clone)]
pub struct ScaledBitmap {
    pub width: u32,
    pub height: u32,
    /// Tightly packed RGBA8, `width * height * 4` bytes
    pub pixels: Vec<u8>,
}

/// Everything that can go wrong between the GET and the scaled bitmap.
/// Never leaves this module; it exists to get one useful warn line.
#[derive(Debug, Error)]
enum ResolveError {
    #[error("fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("body is not a decodable image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("decode task failed: {0}")]
    Join(#[from] task::JoinError),
}

/// Check whether a URL is worth a network attempt.
///
/// Thumbnail fields in the wild carry empty strings, bare filenames, and
/// the odd ftp:// URL; only http(s) locations are ever fetched.
pub fn eligible(url: &str) -> bool {
    url.starts_with("http")
}

/// Resolve an optional thumbnail URL to a displayable bitmap.
///
/// Makes at most one GET, bounded by `FETCH_TIMEOUT`. Any failure resolves
/// to `Unavailable`; there is no retry and no partial result.
pub async fn resolve(url: Option<String>) -> ResolvedImage {
    let Some(url) = url.filter(|candidate| eligible(candidate)) else {
        return ResolvedImage::Unavailable;
    };

    match fetch_and_scale(&url).await {
        Ok(bitmap) => ResolvedImage::Loaded(bitmap),
        Err(err) => {
            warn!("thumbnail unavailable ({url}): {err}");
            ResolvedImage::Unavailable
        }
    }
}

/// Fetch the URL and scale the response body to the display width.
async fn fetch_and_scale(url: &str) -> Result<ScaledBitmap, ResolveError> {
    // Fresh client per call: each view owns its one fetch, nothing is shared
    let client = reqwest::Client::builder().timeout(FETCH_TIMEOUT).build()?;

    let bytes = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .bytes()
        .await?;

    // Decoding and Lanczos resampling are CPU-heavy, keep them off the
    // executor threads
    let bitmap = task::spawn_blocking(move || scale_to_width(&bytes)).await??;

    Ok(bitmap)
}

/// Decode image bytes and scale them to exactly `DISPLAY_WIDTH`, preserving
/// the aspect ratio. Height rounds to the nearest pixel with a floor of one.
fn scale_to_width(bytes: &[u8]) -> Result<ScaledBitmap, image::ImageError> {
    let decoded = image::load_from_memory(bytes)?;

    let height = ((DISPLAY_WIDTH as f32 * decoded.height() as f32 / decoded.width() as f32)
        .round() as u32)
        .max(1);

    let scaled = decoded
        .resize_exact(DISPLAY_WIDTH, height, FilterType::Lanczos3)
        .to_rgba8();

    Ok(ScaledBitmap {
        width: scaled.width(),
        height: scaled.height(),
        pixels: scaled.into_raw(),
    })
}

//! Image Loader
//!
//! One blocking HTTP GET per image, meant to run on GPUI's background
//! executor. No retry and no caching.

use std::sync::Arc;
use std::time::Duration;

use gpui::{Image, ImageFormat};
use reqwest::header::CONTENT_TYPE;
use snafu::{OptionExt, ResultExt, ensure};
use tracing::{debug, info};

use crate::constants::IMAGE_FETCH_TIMEOUT_SECS;
use crate::error::{EmptyBodySnafu, HttpSnafu, Result, UnsupportedImageSnafu};

/// Fetch `url` and wrap the body as a GPUI image
pub fn fetch_image(url: &str) -> Result<Arc<Image>> {
    debug!(url, "Fetching remote image");

    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(IMAGE_FETCH_TIMEOUT_SECS))
        .build()
        .context(HttpSnafu { url })?;

    let response = client
        .get(url)
        .send()
        .and_then(|response| response.error_for_status())
        .context(HttpSnafu { url })?;

    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);

    let bytes = response.bytes().context(HttpSnafu { url })?;
    ensure!(!bytes.is_empty(), EmptyBodySnafu { url });

    let format = sniff_format(&bytes)
        .or_else(|| content_type.as_deref().and_then(format_from_content_type))
        .context(UnsupportedImageSnafu { url })?;

    info!(url, size = bytes.len(), format = ?format, "Remote image loaded");
    Ok(Arc::new(Image::from_bytes(format, bytes.to_vec())))
}

/// Detect the image format from its leading magic bytes
pub fn sniff_format(bytes: &[u8]) -> Option<ImageFormat> {
    if bytes.starts_with(&[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a]) {
        Some(ImageFormat::Png)
    } else if bytes.starts_with(&[0xff, 0xd8, 0xff]) {
        Some(ImageFormat::Jpeg)
    } else if bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a") {
        Some(ImageFormat::Gif)
    } else if bytes.len() >= 12 && &bytes[0..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
        Some(ImageFormat::Webp)
    } else if bytes.starts_with(b"BM") {
        Some(ImageFormat::Bmp)
    } else {
        None
    }
}

/// Map a `Content-Type` header value to an image format
pub fn format_from_content_type(content_type: &str) -> Option<ImageFormat> {
    let mime = content_type.split(';').next()?.trim().to_ascii_lowercase();
    match mime.as_str() {
        "image/png" => Some(ImageFormat::Png),
        "image/jpeg" | "image/jpg" => Some(ImageFormat::Jpeg),
        "image/gif" => Some(ImageFormat::Gif),
        "image/webp" => Some(ImageFormat::Webp),
        "image/bmp" => Some(ImageFormat::Bmp),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sniff_known_formats() {
        assert!(matches!(
            sniff_format(&[0xff, 0xd8, 0xff, 0xe0, 0x00, 0x10]),
            Some(ImageFormat::Jpeg)
        ));
        assert!(matches!(
            sniff_format(b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR"),
            Some(ImageFormat::Png)
        ));
        assert!(matches!(sniff_format(b"GIF89a\x01\0"), Some(ImageFormat::Gif)));
        assert!(matches!(
            sniff_format(b"RIFF\x24\0\0\0WEBPVP8 "),
            Some(ImageFormat::Webp)
        ));
    }

    #[test]
    fn test_sniff_rejects_non_images() {
        assert!(sniff_format(b"").is_none());
        assert!(sniff_format(b"<!DOCTYPE html>").is_none());
        assert!(sniff_format(b"RIFF").is_none());
    }

    #[test]
    fn test_content_type_fallback() {
        assert!(matches!(
            format_from_content_type("image/jpeg"),
            Some(ImageFormat::Jpeg)
        ));
        assert!(matches!(
            format_from_content_type("Image/PNG; charset=binary"),
            Some(ImageFormat::Png)
        ));
        assert!(format_from_content_type("text/html; charset=utf-8").is_none());
    }
}

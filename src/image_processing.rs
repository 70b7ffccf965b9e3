use base64::Engine;
use std::path::Path;

use crate::error::AppError;

/// Simple MIME type from the file extension
pub(crate) fn guess_mime_from_ext(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_ascii_lowercase())
        .as_deref()
    {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        Some("bmp") => "image/bmp",
        Some("heic") | Some("heif") => "image/heic",
        _ => "image/jpeg",
    }
}

/// Pixel dimensions of an image file, read from the header only
pub fn image_dimensions(path: &Path) -> Result<(u32, u32), AppError> {
    image::image_dimensions(path)
        .map_err(|e| AppError::ImageProcessing(format!("Failed to read dimensions: {}", e)))
}

/// Reads an image from `path` and returns it as a Base64 data URL for
/// inline display
pub fn image_path_to_data_url(path: &str) -> Result<String, AppError> {
    let p = Path::new(path);
    let mime = guess_mime_from_ext(p);
    let data = std::fs::read(p)
        .map_err(|e| AppError::ImageProcessing(format!("Failed to read image: {}", e)))?;
    let b64 = base64::engine::general_purpose::STANDARD.encode(data);

    Ok(format!("data:{};base64,{}", mime, b64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_guess() {
        assert_eq!(guess_mime_from_ext(Path::new("a.JPG")), "image/jpeg");
        assert_eq!(guess_mime_from_ext(Path::new("a.png")), "image/png");
        assert_eq!(guess_mime_from_ext(Path::new("a.webp")), "image/webp");
        // unknown extensions fall back to jpeg
        assert_eq!(guess_mime_from_ext(Path::new("a")), "image/jpeg");
    }

    #[test]
    fn test_dimensions_of_generated_image() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pixel.png");
        image::RgbImage::new(12, 8).save(&path).unwrap();

        assert_eq!(image_dimensions(&path).unwrap(), (12, 8));
    }

    #[test]
    fn test_data_url_prefix() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pixel.png");
        image::RgbImage::new(1, 1).save(&path).unwrap();

        let url = image_path_to_data_url(path.to_str().unwrap()).unwrap();
        assert!(url.starts_with("data:image/png;base64,"));
    }
}

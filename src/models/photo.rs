use std::path::Path;

use crate::format::format_size;

/// A photo picked from the device library, queued for upload.
#[derive(Debug, Clone, PartialEq)]
pub struct PhotoAttachment {
    /// Local URI of the picked asset; assumed unique within a draft
    pub source_uri: String,
    /// File name of the asset, used as the upload filename
    pub title: String,
    /// Human-readable size estimate shown next to the title
    pub size_label: String,
}

impl PhotoAttachment {
    /// Builds an attachment from a picked asset and its pixel dimensions.
    ///
    /// The size label is an estimate from the pixel count at 16 bits per
    /// pixel, like the preview line in the registration form shows.
    pub fn from_picked(path: &Path, width: u32, height: u32) -> Self {
        let source_uri = path.to_string_lossy().to_string();
        let title = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("foto.jpg")
            .to_string();
        let bytes = u64::from(width) * u64::from(height) * 16 / 8;

        Self {
            source_uri,
            title,
            size_label: format_size(bytes, 0),
        }
    }
}

/// Drops every attachment whose `source_uri` matches, keeping the order
/// of the rest. Unknown URIs are a no-op.
pub fn remove_by_source(photos: &mut Vec<PhotoAttachment>, source_uri: &str) {
    photos.retain(|photo| photo.source_uri != source_uri);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn photo(uri: &str) -> PhotoAttachment {
        PhotoAttachment {
            source_uri: uri.to_string(),
            title: format!("{}.jpg", uri),
            size_label: "1kb".to_string(),
        }
    }

    #[test]
    fn test_from_picked_derives_title_and_size() {
        let path = PathBuf::from("/storage/pictures/abrigo.jpg");
        let attachment = PhotoAttachment::from_picked(&path, 1024, 512);

        assert_eq!(attachment.source_uri, "/storage/pictures/abrigo.jpg");
        assert_eq!(attachment.title, "abrigo.jpg");
        // 1024 * 512 * 2 bytes = 1mb
        assert_eq!(attachment.size_label, "1mb");
    }

    #[test]
    fn test_remove_keeps_order_of_rest() {
        let mut photos = vec![photo("a"), photo("b"), photo("c")];
        remove_by_source(&mut photos, "b");

        let uris: Vec<&str> = photos.iter().map(|p| p.source_uri.as_str()).collect();
        assert_eq!(uris, vec!["a", "c"]);
    }

    #[test]
    fn test_remove_unknown_uri_is_noop() {
        let mut photos = vec![photo("a"), photo("b")];
        remove_by_source(&mut photos, "missing");
        assert_eq!(photos.len(), 2);
    }
}

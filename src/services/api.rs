use reqwest::multipart::{Form, Part};
use reqwest::StatusCode;

use crate::error::AppError;
use crate::image_processing::guess_mime_from_ext;
use crate::models::{OrphanageRecord, OrphanageSummary, RegistrationDraft};

/// Default Happy backend address; override with HAPPY_API_URL.
const DEFAULT_BASE_URL: &str = "http://localhost:3333";

/// Thin client for the orphanage backend. One request per call, no
/// retry and no caching; screens fetch on every mount.
pub struct OrphanageApi {
    base_url: String,
    client: reqwest::Client,
}

impl OrphanageApi {
    pub fn new(base_url: impl Into<String>) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(60))
            .connect_timeout(std::time::Duration::from_secs(10))
            .user_agent("Happy/0.1.0")
            .build()
            .map_err(|e| AppError::Network(format!("Client build failed: {}", e)))?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn from_env() -> Result<Self, AppError> {
        let base_url =
            std::env::var("HAPPY_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    /// Lists the registered orphanages (summary fields only).
    pub async fn list_created(&self) -> Result<Vec<OrphanageSummary>, AppError> {
        let url = format!("{}/orphanages/created", self.base_url);
        log::debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        ensure_success(response.status())?;

        response
            .json::<Vec<OrphanageSummary>>()
            .await
            .map_err(|e| AppError::Other(format!("Failed to parse orphanage list: {}", e)))
    }

    /// Fetches one orphanage with its full fields.
    pub async fn fetch_by_id(&self, id: i64) -> Result<OrphanageRecord, AppError> {
        let url = format!("{}/orphanages/created/{}", self.base_url, id);
        log::debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        ensure_success(response.status())?;

        response
            .json::<OrphanageRecord>()
            .await
            .map_err(|e| AppError::Other(format!("Failed to parse orphanage: {}", e)))
    }

    /// Submits a completed draft as a single multipart request.
    pub async fn create(&self, draft: &RegistrationDraft) -> Result<(), AppError> {
        let url = format!("{}/orphanages", self.base_url);
        let form = build_form(draft)?;
        log::info!(
            "POST {} ({} photo(s), name={:?})",
            url,
            draft.photos.len(),
            draft.name
        );

        let response = self.client.post(&url).multipart(form).send().await?;
        ensure_success(response.status())?;

        Ok(())
    }
}

fn ensure_success(status: StatusCode) -> Result<(), AppError> {
    if status.is_success() {
        Ok(())
    } else {
        Err(AppError::Server(status.as_u16()))
    }
}

/// The eight scalar fields of the create request, stringified the way
/// the backend expects them.
fn scalar_fields(draft: &RegistrationDraft) -> Vec<(&'static str, String)> {
    vec![
        ("name", draft.name.clone()),
        ("about", draft.about.clone()),
        ("instructions", draft.instructions.clone()),
        ("whatsapp", draft.whatsapp.clone()),
        ("latitude", draft.position.latitude.to_string()),
        ("longitude", draft.position.longitude.to_string()),
        ("opening_hours", draft.opening_hours.clone()),
        ("open_on_weekends", draft.open_on_weekends.to_string()),
    ]
}

/// Assembles the multipart body: scalar fields plus one `images` part
/// per photo, the remembered title as filename.
fn build_form(draft: &RegistrationDraft) -> Result<Form, AppError> {
    let mut form = Form::new();

    for (key, value) in scalar_fields(draft) {
        form = form.text(key, value);
    }

    for photo in &draft.photos {
        let data = std::fs::read(&photo.source_uri)?;
        let part = Part::bytes(data)
            .file_name(photo.title.clone())
            .mime_str(guess_mime_from_ext(std::path::Path::new(&photo.source_uri)))
            .map_err(|e| AppError::Other(format!("Invalid photo part: {}", e)))?;
        form = form.part("images", part);
    }

    Ok(form)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GeoPosition, PhotoAttachment};
    use std::io::Write;

    fn draft_without_photos() -> RegistrationDraft {
        RegistrationDraft {
            position: GeoPosition {
                latitude: -9.4,
                longitude: -36.6,
            },
            name: "Abrigo Sol".to_string(),
            about: "Texto".to_string(),
            whatsapp: "5599999999999".to_string(),
            photos: Vec::new(),
            instructions: "Chegar de manhã".to_string(),
            opening_hours: "08:00 às 18:00".to_string(),
            open_on_weekends: true,
        }
    }

    #[test]
    fn test_scalar_fields_exactly_eight() {
        let fields = scalar_fields(&draft_without_photos());
        let keys: Vec<&str> = fields.iter().map(|(k, _)| *k).collect();
        assert_eq!(
            keys,
            vec![
                "name",
                "about",
                "instructions",
                "whatsapp",
                "latitude",
                "longitude",
                "opening_hours",
                "open_on_weekends"
            ]
        );
    }

    #[test]
    fn test_scalar_fields_stringification() {
        let fields = scalar_fields(&draft_without_photos());
        let get = |key: &str| {
            fields
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.clone())
                .unwrap()
        };

        assert_eq!(get("latitude"), "-9.4");
        assert_eq!(get("longitude"), "-36.6");
        assert_eq!(get("open_on_weekends"), "true");
        assert_eq!(get("opening_hours"), "08:00 às 18:00");
    }

    #[test]
    fn test_build_form_reads_photo_files() {
        let dir = tempfile::tempdir().unwrap();
        let photo_path = dir.path().join("frente.jpg");
        let mut file = std::fs::File::create(&photo_path).unwrap();
        file.write_all(b"not really a jpeg").unwrap();

        let mut draft = draft_without_photos();
        draft.photos.push(PhotoAttachment::from_picked(
            &photo_path,
            640,
            480,
        ));

        assert!(build_form(&draft).is_ok());
    }

    #[test]
    fn test_build_form_missing_photo_is_a_filesystem_error() {
        let mut draft = draft_without_photos();
        draft.photos.push(PhotoAttachment {
            source_uri: "/nonexistent/foto.jpg".to_string(),
            title: "foto.jpg".to_string(),
            size_label: "1kb".to_string(),
        });

        assert!(matches!(
            build_form(&draft),
            Err(AppError::Filesystem(_))
        ));
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let api = OrphanageApi::new("http://localhost:3333/").unwrap();
        assert_eq!(api.base_url, "http://localhost:3333");
    }

    #[test]
    fn test_ensure_success() {
        assert!(ensure_success(StatusCode::OK).is_ok());
        assert!(ensure_success(StatusCode::CREATED).is_ok());
        assert!(matches!(
            ensure_success(StatusCode::BAD_REQUEST),
            Err(AppError::Server(400))
        ));
        assert!(matches!(
            ensure_success(StatusCode::INTERNAL_SERVER_ERROR),
            Err(AppError::Server(500))
        ));
    }
}

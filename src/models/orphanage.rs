use serde::Deserialize;

use crate::error::AppError;
use crate::models::position::GeoPosition;

/// Summary entry from `GET /orphanages/created`, enough for a map pin.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OrphanageSummary {
    pub id: i64,
    pub name: String,
    pub latitude: String,
    pub longitude: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OrphanageImage {
    pub id: i64,
    pub url: String,
}

/// Full record from `GET /orphanages/created/{id}`. Read-only from the
/// client's perspective; the backend sends coordinates as strings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OrphanageRecord {
    pub id: i64,
    pub name: String,
    pub latitude: String,
    pub longitude: String,
    pub whatsapp: String,
    pub about: String,
    pub open_on_weekends: bool,
    pub opening_hours: String,
    pub instructions: String,
    pub images: Vec<OrphanageImage>,
}

fn parse_position(latitude: &str, longitude: &str) -> Result<GeoPosition, AppError> {
    let latitude = latitude
        .parse::<f64>()
        .map_err(|e| AppError::Validation(format!("Invalid latitude: {}", e)))?;
    let longitude = longitude
        .parse::<f64>()
        .map_err(|e| AppError::Validation(format!("Invalid longitude: {}", e)))?;

    Ok(GeoPosition {
        latitude,
        longitude,
    })
}

impl OrphanageSummary {
    pub fn position(&self) -> Result<GeoPosition, AppError> {
        parse_position(&self.latitude, &self.longitude)
    }
}

impl OrphanageRecord {
    pub fn position(&self) -> Result<GeoPosition, AppError> {
        parse_position(&self.latitude, &self.longitude)
    }

    /// Deep link opening a WhatsApp chat with the orphanage.
    pub fn whatsapp_url(&self) -> String {
        format!(
            "whatsapp://send?phone=+55{}&text=Olá! Gostaria de saber mais sobre o {}. Podemos conversar?",
            self.whatsapp, self.name
        )
    }

    /// Deep link with driving directions to the orphanage.
    pub fn routes_url(&self) -> String {
        format!(
            "https://www.google.com/maps/dir/?api=1&destination={},{}",
            self.latitude, self.longitude
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> OrphanageRecord {
        OrphanageRecord {
            id: 7,
            name: "Abrigo Sol".to_string(),
            latitude: "-9.414112".to_string(),
            longitude: "-36.6328008".to_string(),
            whatsapp: "5599999999999".to_string(),
            about: "Texto".to_string(),
            open_on_weekends: true,
            opening_hours: "08:00 às 18:00".to_string(),
            instructions: "Chegar de manhã".to_string(),
            images: Vec::new(),
        }
    }

    #[test]
    fn test_deserializes_summary_list() {
        let body = r#"[{"id":1,"name":"Abrigo Sol","latitude":"-9.41","longitude":"-36.63"}]"#;
        let list: Vec<OrphanageSummary> = serde_json::from_str(body).unwrap();

        assert_eq!(list.len(), 1);
        assert_eq!(list[0].name, "Abrigo Sol");
        let pos = list[0].position().unwrap();
        assert!((pos.latitude - -9.41).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_coordinate_is_a_validation_error() {
        let summary = OrphanageSummary {
            id: 1,
            name: "x".to_string(),
            latitude: "not-a-number".to_string(),
            longitude: "0".to_string(),
        };
        assert!(matches!(
            summary.position(),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_deep_links() {
        let record = record();
        assert!(record
            .whatsapp_url()
            .starts_with("whatsapp://send?phone=+555599999999999"));
        assert!(record.whatsapp_url().contains("Abrigo Sol"));
        assert_eq!(
            record.routes_url(),
            "https://www.google.com/maps/dir/?api=1&destination=-9.414112,-36.6328008"
        );
    }
}

use crate::error::AppError;
use crate::models::photo::PhotoAttachment;
use crate::models::position::GeoPosition;

/// The in-progress registration record, assembled across the wizard
/// steps and submitted exactly once.
///
/// A draft is built in two stages: [`RegistrationDraft::new`] captures
/// the output of the location and data steps and validates the minimum
/// viable draft, [`RegistrationDraft::with_visitation`] adds the final
/// step. Values move forward through navigation parameters only; a
/// cancelled draft is simply never forwarded.
#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationDraft {
    pub position: GeoPosition,
    pub name: String,
    pub about: String,
    pub whatsapp: String,
    pub photos: Vec<PhotoAttachment>,
    pub instructions: String,
    pub opening_hours: String,
    pub open_on_weekends: bool,
}

/// The data-step gate: name, about and whatsapp filled in and at least
/// one photo attached. Drives the "Próximo" button and the boundary
/// check in [`RegistrationDraft::new`].
pub fn data_complete(name: &str, about: &str, whatsapp: &str, photo_count: usize) -> bool {
    !name.is_empty() && !about.is_empty() && !whatsapp.is_empty() && photo_count > 0
}

impl RegistrationDraft {
    /// Creates a draft from the location and data steps.
    ///
    /// Visitation fields start at their defaults (weekend toggle "yes").
    pub fn new(
        position: GeoPosition,
        name: String,
        about: String,
        whatsapp: String,
        photos: Vec<PhotoAttachment>,
    ) -> Result<Self, AppError> {
        if !data_complete(&name, &about, &whatsapp, photos.len()) {
            return Err(AppError::Validation(
                "Preencha nome, sobre, whatsapp e adicione ao menos uma foto.".to_string(),
            ));
        }

        Ok(Self {
            position,
            name,
            about,
            whatsapp,
            photos,
            instructions: String::new(),
            opening_hours: String::new(),
            open_on_weekends: true,
        })
    }

    /// Fills in the visitation step, producing the submittable draft.
    pub fn with_visitation(
        mut self,
        instructions: String,
        opening_hours: String,
        open_on_weekends: bool,
    ) -> Self {
        self.instructions = instructions;
        self.opening_hours = opening_hours;
        self.open_on_weekends = open_on_weekends;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn position() -> GeoPosition {
        GeoPosition {
            latitude: -9.4,
            longitude: -36.6,
        }
    }

    fn one_photo() -> Vec<PhotoAttachment> {
        vec![PhotoAttachment::from_picked(
            &PathBuf::from("/tmp/foto.jpg"),
            100,
            100,
        )]
    }

    #[test]
    fn test_gate_requires_every_field() {
        // all sixteen presence combinations; only the full one passes
        for mask in 0u8..16 {
            let name = if mask & 1 != 0 { "Abrigo Sol" } else { "" };
            let about = if mask & 2 != 0 { "Texto" } else { "" };
            let whatsapp = if mask & 4 != 0 { "5599999999999" } else { "" };
            let photos = if mask & 8 != 0 { 1 } else { 0 };

            assert_eq!(
                data_complete(name, about, whatsapp, photos),
                mask == 0b1111,
                "mask={:04b}",
                mask
            );
        }
    }

    #[test]
    fn test_new_rejects_incomplete_draft() {
        let result = RegistrationDraft::new(
            position(),
            "Abrigo Sol".to_string(),
            String::new(),
            "5599999999999".to_string(),
            one_photo(),
        );
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_visitation_defaults_and_override() {
        let draft = RegistrationDraft::new(
            position(),
            "Abrigo Sol".to_string(),
            "Texto".to_string(),
            "5599999999999".to_string(),
            one_photo(),
        )
        .unwrap();

        assert!(draft.open_on_weekends);
        assert!(draft.instructions.is_empty());

        let draft = draft.with_visitation(
            "Chegar de manhã".to_string(),
            "08:00 às 18:00".to_string(),
            false,
        );
        assert_eq!(draft.instructions, "Chegar de manhã");
        assert_eq!(draft.opening_hours, "08:00 às 18:00");
        assert!(!draft.open_on_weekends);
        // earlier steps are untouched
        assert_eq!(draft.name, "Abrigo Sol");
        assert_eq!(draft.photos.len(), 1);
    }
}

pub mod draft;
pub mod orphanage;
pub mod photo;
pub mod position;

pub use draft::RegistrationDraft;
pub use orphanage::{OrphanageRecord, OrphanageSummary};
pub use photo::PhotoAttachment;
pub use position::{GeoPosition, MapRegion};

pub mod cancel_confirmation;
pub mod header;
pub mod map_surface;
pub mod onboarding;
pub mod orphanage_created;
pub mod orphanage_data;
pub mod orphanage_details;
pub mod orphanage_visitation;
pub mod orphanages_map;
pub mod select_map_position;

pub use cancel_confirmation::CancelConfirmation;
pub use header::Header;
pub use map_surface::{MapMarker, MapSurface};
pub use onboarding::OnboardingScreen;
pub use orphanage_created::OrphanageCreatedScreen;
pub use orphanage_data::OrphanageDataScreen;
pub use orphanage_details::OrphanageDetailsScreen;
pub use orphanage_visitation::OrphanageVisitationScreen;
pub use orphanages_map::OrphanagesMapScreen;
pub use select_map_position::SelectMapPositionScreen;

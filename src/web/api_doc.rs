use utoipa::OpenApi;

use super::api::error::ErrorResponse;
use super::api::features::SelectFeatureRequest;
use super::api::solar::CsvLoadResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        super::api::features::select,
        super::api::features::current,
        super::api::tracker::status,
        super::api::tracker::scene,
        super::api::tracker::alerts,
        super::api::viewer::set_position,
        super::api::solar::series,
        super::api::solar::upload_csv,
    ),
    components(
        schemas(
            SelectFeatureRequest,
            CsvLoadResponse,
            ErrorResponse,
            crate::features::Feature,
            crate::geo::GeoPoint,
            crate::alert::Banner,
            crate::scene::SceneSnapshot,
            crate::scene::Link,
            crate::scene::LinkColor,
            crate::scene::MapView,
            crate::solar::SolarSeries,
            crate::tracker::PollerStatus,
            crate::tracker::PollerMode,
            crate::tracker::ProximitySnapshot,
            crate::tracker::PositionFix,
            crate::tracker::FixOrigin,
        )
    ),
    info(
        title = "Overhead Dashboard API",
        description = "API behind the live-tracking and solar dashboard page",
        version = "0.1.0"
    ),
    tags(
        (name = "features", description = "Section visibility"),
        (name = "tracker", description = "Live position tracking"),
        (name = "viewer", description = "Viewer geolocation"),
        (name = "solar", description = "Solar production chart")
    )
)]
pub struct ApiDoc;

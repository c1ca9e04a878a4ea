use utoipa::OpenApi;

use crate::application::http::recipes::router::RecipesApiDoc;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "FridgeChef API"
    ),
    nest(
        (path = "/api/recipes", api = RecipesApiDoc)
    )
)]
pub struct ApiDoc;

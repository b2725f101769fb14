use crate::application::http::{
    ingredient::router::IngredientApiDoc, product::router::ProductApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "SkinScan API"
    ),
    nest(
        (path = "/ingredients", api = IngredientApiDoc),
        (path = "/products", api = ProductApiDoc),
    )
)]
pub struct ApiDoc;

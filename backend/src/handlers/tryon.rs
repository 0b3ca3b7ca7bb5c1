use axum::{extract::State, Json};
use tracing::info;

use crate::{
    error::{AppError, AppResult},
    models::{Product, VirtualTryOnRequest, VirtualTryOnResponse},
    random::RandomSource,
    AppState,
};

pub const FIT_RATINGS: [&str; 4] = ["Perfect Fit", "Good Fit", "Slightly Loose", "Slightly Tight"];
pub const RECOMMENDATIONS: [&str; 3] = ["Looks great!", "Try a different size", "Perfect match!"];

/// Mock try-on: the preview is the product's own image and the fit verdict
/// is two independent uniform picks.
pub fn mock_tryon(
    product: Option<&Product>,
    request: &VirtualTryOnRequest,
    rng: &dyn RandomSource,
) -> AppResult<VirtualTryOnResponse> {
    let product = product.ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;
    let user_image = request
        .user_image_url
        .as_deref()
        .filter(|url| !url.is_empty())
        .ok_or_else(|| {
            AppError::BadRequest(
                "Please provide user_image_url (uploaded image) for try-on".to_string(),
            )
        })?;

    let fit_rating = FIT_RATINGS[rng.pick(FIT_RATINGS.len())];
    let recommendation = RECOMMENDATIONS[rng.pick(RECOMMENDATIONS.len())];

    Ok(VirtualTryOnResponse {
        product_id: product.id,
        product_name: product.name.clone(),
        tryon_status: "success".to_string(),
        preview_url: product.image.clone(),
        user_image_url: user_image.to_string(),
        message: format!(
            "Virtual try-on preview generated for {} using your photo",
            product.name
        ),
        fit_rating: fit_rating.to_string(),
        recommendation: recommendation.to_string(),
    })
}

// ── POST /virtual-tryon-mock ─────────────────────────────────────────────────

pub async fn virtual_tryon(
    State(state): State<AppState>,
    Json(payload): Json<VirtualTryOnRequest>,
) -> AppResult<Json<VirtualTryOnResponse>> {
    let product = state.catalog.fetch_product_by_id(payload.product_id).await?;
    let response = mock_tryon(product.as_ref(), &payload, state.rng.as_ref())?;

    info!(
        product_id = response.product_id,
        fit_rating = %response.fit_rating,
        model_image = payload.model_image_url.is_some(),
        "Generated try-on preview"
    );

    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::random::{testing::FixedRandom, StdRandom};
    use crate::seed;

    fn request(user_image: Option<&str>) -> VirtualTryOnRequest {
        VirtualTryOnRequest {
            product_id: 1,
            model_image_url: None,
            user_image_url: user_image.map(String::from),
        }
    }

    #[test]
    fn missing_image_rejected_even_for_valid_product() {
        let product = &seed::demo_products()[0];
        let rng = StdRandom::seeded(1);
        for image in [None, Some("")] {
            let err = mock_tryon(Some(product), &request(image), &rng).unwrap_err();
            assert!(matches!(err, AppError::BadRequest(_)));
        }
    }

    #[test]
    fn unknown_product_checked_before_image() {
        let rng = StdRandom::seeded(1);
        let err = mock_tryon(None, &request(None), &rng).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn preview_echoes_product_image() {
        let product = &seed::demo_products()[2];
        let rng = FixedRandom::new(0.0, 2);
        let resp = mock_tryon(Some(product), &request(Some("blob:me.png")), &rng).unwrap();
        assert_eq!(resp.preview_url, product.image);
        assert_eq!(resp.user_image_url, "blob:me.png");
        assert_eq!(resp.fit_rating, "Slightly Loose");
        assert_eq!(resp.recommendation, "Perfect match!");
        assert_eq!(rng.calls(), vec!["range", "range"]);
    }

    #[test]
    fn random_picks_cover_every_option() {
        let product = &seed::demo_products()[0];
        let rng = StdRandom::seeded(5);
        let mut fits = HashSet::new();
        let mut recs = HashSet::new();
        for _ in 0..400 {
            let resp = mock_tryon(Some(product), &request(Some("u.png")), &rng).unwrap();
            fits.insert(resp.fit_rating);
            recs.insert(resp.recommendation);
        }
        assert_eq!(fits.len(), FIT_RATINGS.len());
        assert_eq!(recs.len(), RECOMMENDATIONS.len());
    }
}

use axum::{extract::State, Json};
use tracing::info;

use crate::{
    error::AppResult,
    models::{Product, RecommendationRequest, RecommendationResponse, UserProfile},
    random::RandomSource,
    AppState,
};

/// Upper bound on products returned to the caller.
pub const MAX_RECOMMENDATIONS: usize = 5;
/// Size of the random sample used when nothing matched.
pub const FALLBACK_SAMPLE: usize = 3;

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Pick products by explicit category, then keyword, then profile
/// preferences; sample at random when the chosen branch found nothing.
pub fn recommend(
    products: &[Product],
    profile: Option<&UserProfile>,
    request: &RecommendationRequest,
    rng: &dyn RandomSource,
) -> RecommendationResponse {
    let mut matched: Vec<&Product> = if let Some(category) = present(&request.category) {
        products.iter().filter(|p| p.in_category(category)).collect()
    } else if let Some(input) = present(&request.user_input) {
        let needle = input.to_lowercase();
        products.iter().filter(|p| p.matches_keyword(&needle)).collect()
    } else if let Some(profile) = profile {
        products.iter().filter(|p| profile.prefers(&p.category)).collect()
    } else {
        Vec::new()
    };

    if matched.is_empty() {
        matched = rng
            .sample_indices(products.len(), FALLBACK_SAMPLE)
            .into_iter()
            .map(|i| &products[i])
            .collect();
    }

    let message = format!("Found {} recommendations for you!", matched.len());
    RecommendationResponse {
        recommendations: matched.into_iter().take(MAX_RECOMMENDATIONS).cloned().collect(),
        message,
    }
}

// ── POST /recommend ──────────────────────────────────────────────────────────

pub async fn recommend_products(
    State(state): State<AppState>,
    Json(payload): Json<RecommendationRequest>,
) -> AppResult<Json<RecommendationResponse>> {
    let products = state.catalog.fetch_all_products().await?;
    let profile = state.catalog.fetch_user_by_id(payload.user_id()).await?;

    let response = recommend(&products, profile.as_ref(), &payload, state.rng.as_ref());

    info!(
        category = ?payload.category,
        user_id = payload.user_id(),
        returned = response.recommendations.len(),
        "Recommended products"
    );

    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{testing::FixedRandom, StdRandom};
    use crate::seed;

    fn request(category: Option<&str>, user_input: Option<&str>, user_id: &str) -> RecommendationRequest {
        RecommendationRequest {
            category: category.map(String::from),
            user_input: user_input.map(String::from),
            user_id: Some(user_id.to_string()),
        }
    }

    fn ids(resp: &RecommendationResponse) -> Vec<i64> {
        resp.recommendations.iter().map(|p| p.id).collect()
    }

    #[test]
    fn category_match_is_case_insensitive() {
        let products = seed::demo_products();
        let rng = StdRandom::seeded(1);
        let a = recommend(&products, None, &request(Some("Shirts"), None, "x"), &rng);
        let b = recommend(&products, None, &request(Some("shirts"), None, "x"), &rng);
        let c = recommend(&products, None, &request(Some("SHIRTS"), None, "x"), &rng);
        assert_eq!(ids(&a), vec![1, 2, 3]);
        assert_eq!(ids(&a), ids(&b));
        assert_eq!(ids(&a), ids(&c));
    }

    #[test]
    fn category_takes_priority_over_keyword_and_profile() {
        let products = seed::demo_products();
        let users = seed::demo_users();
        let rng = FixedRandom::new(0.5, 0);
        let resp = recommend(
            &products,
            Some(&users[0]),
            &request(Some("Jeans"), Some("kurta"), "user_001"),
            &rng,
        );
        assert_eq!(ids(&resp), vec![6, 7]);
        assert!(rng.calls().is_empty(), "no random draw when the filter matched");
    }

    #[test]
    fn keyword_searches_name_category_and_color() {
        let products = seed::demo_products();
        let rng = StdRandom::seeded(1);

        // "shirt" hits Shirts and T-Shirts, capped at five in catalog order.
        let resp = recommend(&products, None, &request(None, Some("SHIRT"), "x"), &rng);
        assert_eq!(ids(&resp), vec![1, 2, 3, 4, 5]);
        assert_eq!(resp.message, "Found 5 recommendations for you!");

        let resp = recommend(&products, None, &request(None, Some("maroon"), "x"), &rng);
        assert_eq!(ids(&resp), vec![9]);
    }

    #[test]
    fn message_counts_full_list_before_truncation() {
        let mut products = seed::demo_products();
        for i in 0..4 {
            let mut extra = products[0].clone();
            extra.id = 100 + i;
            products.push(extra);
        }
        let rng = StdRandom::seeded(1);
        let resp = recommend(&products, None, &request(Some("shirts"), None, "x"), &rng);
        assert_eq!(resp.recommendations.len(), MAX_RECOMMENDATIONS);
        assert_eq!(resp.message, "Found 7 recommendations for you!");
    }

    #[test]
    fn profile_preferences_apply_without_category_or_input() {
        let products = seed::demo_products();
        let users = seed::demo_users();
        let rng = StdRandom::seeded(1);
        let resp = recommend(&products, Some(&users[1]), &request(None, None, "user_002"), &rng);
        assert_eq!(ids(&resp), vec![10, 11, 12]);
    }

    #[test]
    fn empty_strings_fall_through_to_next_branch() {
        let products = seed::demo_products();
        let users = seed::demo_users();
        let rng = StdRandom::seeded(1);
        let resp = recommend(&products, Some(&users[0]), &request(Some(""), Some(""), "user_001"), &rng);
        assert_eq!(ids(&resp), vec![1, 2, 3, 8, 9]);
    }

    #[test]
    fn unmatched_category_falls_back_to_random_sample() {
        let products = seed::demo_products();
        for seed in 0..50 {
            let rng = StdRandom::seeded(seed);
            let resp = recommend(&products, None, &request(Some("Sarees"), None, "x"), &rng);
            assert_eq!(resp.recommendations.len(), FALLBACK_SAMPLE);
            assert!(resp.recommendations.iter().all(|p| products.contains(p)));
        }
    }

    #[test]
    fn no_inputs_and_no_profile_samples() {
        let products = seed::demo_products();
        let rng = FixedRandom::new(0.5, 0);
        let resp = recommend(&products, None, &request(None, None, "ghost"), &rng);
        assert_eq!(ids(&resp), vec![1, 2, 3]);
        assert_eq!(rng.calls(), vec!["sample"]);
    }

    #[test]
    fn small_catalog_samples_what_exists() {
        let products: Vec<Product> = seed::demo_products().into_iter().take(2).collect();
        let rng = StdRandom::seeded(9);
        let resp = recommend(&products, None, &request(Some("none"), None, "x"), &rng);
        assert_eq!(resp.recommendations.len(), 2);

        let resp = recommend(&[], None, &request(Some("none"), None, "x"), &rng);
        assert!(resp.recommendations.is_empty());
    }
}

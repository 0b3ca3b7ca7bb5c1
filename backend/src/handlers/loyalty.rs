use axum::{extract::State, Json};
use tracing::info;

use crate::{
    error::AppResult,
    models::{LoyaltyRequest, LoyaltyResponse, UserProfile},
    AppState,
};

/// Currency value of one loyalty point.
pub const POINT_VALUE: f64 = 0.5;
/// Largest share of the order the discount may cover.
pub const MAX_DISCOUNT_SHARE: f64 = 0.3;

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Discount is capped at 30% of the order whatever the point balance.
pub fn apply_loyalty(profile: Option<&UserProfile>, order_amount: f64) -> LoyaltyResponse {
    let Some(profile) = profile else {
        return LoyaltyResponse::NoProfile {
            loyalty_points: 0,
            discount: 0.0,
            discount_amount: 0.0,
            final_amount: order_amount,
            message: "No loyalty points available".to_string(),
        };
    };

    let points = profile.loyalty_points;
    let discount = (points as f64 * POINT_VALUE)
        .min(order_amount * MAX_DISCOUNT_SHARE)
        .max(0.0);
    let points_used = (discount / POINT_VALUE).floor() as u64;

    LoyaltyResponse::Applied {
        loyalty_points: points,
        discount_points_used: points_used,
        discount_amount: round2(discount),
        final_amount: round2(order_amount - discount),
        message: format!(
            "Applied {} loyalty points for ₹{:.2} discount",
            points_used, discount
        ),
    }
}

// ── POST /apply-loyalty ──────────────────────────────────────────────────────

pub async fn apply_loyalty_discount(
    State(state): State<AppState>,
    Json(payload): Json<LoyaltyRequest>,
) -> AppResult<Json<LoyaltyResponse>> {
    let profile = state.catalog.fetch_user_by_id(&payload.user_id).await?;
    let response = apply_loyalty(profile.as_ref(), payload.order_amount);

    info!(
        user_id = %payload.user_id,
        order_amount = payload.order_amount,
        has_profile = profile.is_some(),
        "Applied loyalty"
    );

    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(points: u64) -> UserProfile {
        serde_json::from_value(serde_json::json!({
            "user_id": "user_x",
            "loyalty_points": points,
        }))
        .unwrap()
    }

    fn applied(resp: LoyaltyResponse) -> (u64, u64, f64, f64, String) {
        match resp {
            LoyaltyResponse::Applied {
                loyalty_points,
                discount_points_used,
                discount_amount,
                final_amount,
                message,
            } => (loyalty_points, discount_points_used, discount_amount, final_amount, message),
            other => panic!("expected applied discount, got {:?}", other),
        }
    }

    #[test]
    fn discount_capped_at_thirty_percent() {
        let (points, used, discount, total, message) = applied(apply_loyalty(Some(&profile(1000)), 100.0));
        assert_eq!(points, 1000);
        assert_eq!(used, 60);
        assert!((discount - 30.0).abs() < 1e-9);
        assert!((total - 70.0).abs() < 1e-9);
        assert_eq!(message, "Applied 60 loyalty points for ₹30.00 discount");
    }

    #[test]
    fn small_balance_is_fully_spent() {
        let (_, used, discount, total, _) = applied(apply_loyalty(Some(&profile(20)), 1000.0));
        assert_eq!(used, 20);
        assert!((discount - 10.0).abs() < 1e-9);
        assert!((total - 990.0).abs() < 1e-9);
    }

    #[test]
    fn amounts_round_to_two_decimals() {
        // 30% of 33.33 = 9.999 → 10.00; final 23.331 → 23.33
        let (_, used, discount, total, _) = applied(apply_loyalty(Some(&profile(1000)), 33.33));
        assert_eq!(used, 19);
        assert!((discount - 10.0).abs() < 1e-9);
        assert!((total - 23.33).abs() < 1e-9);
    }

    #[test]
    fn zero_points_gives_zero_discount() {
        let (_, used, discount, total, _) = applied(apply_loyalty(Some(&profile(0)), 250.0));
        assert_eq!(used, 0);
        assert_eq!(discount, 0.0);
        assert!((total - 250.0).abs() < 1e-9);
    }

    #[test]
    fn unknown_user_gets_no_discount() {
        let resp = apply_loyalty(None, 100.0);
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["loyalty_points"], 0);
        assert_eq!(json["discount_amount"], 0.0);
        assert_eq!(json["message"], "No loyalty points available");
        assert_eq!(json["final_amount"], 100.0);
    }
}

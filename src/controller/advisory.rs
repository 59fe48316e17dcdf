use std::collections::HashMap;
use std::sync::Mutex;

use actix_web::web::{self, Data};
use actix_web::{HttpResponse, Responder};
use serde_json::json;

use crate::controller::random::{RandomSource, ThreadRandom};
use crate::error::ClutchError;
use crate::model::{AdvisoryCategory, AdvisoryResult, AppState, Sport, View};
use crate::view::status::{render_advisory_panel, render_status_tab};

pub const DEFAULT_GO_BELOW: f64 = 0.40;
pub const DEFAULT_STAY_BELOW: f64 = 0.70;

/// Category cut points for the advisory roll. These are presentation
/// choices, not physical constants, so they are tunable from the CLI.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AdvisoryThresholds {
    pub go_below: f64,
    pub stay_below: f64,
}

impl AdvisoryThresholds {
    /// # Errors
    ///
    /// Returns `Err` unless `0 < go_below < stay_below <= 1`.
    pub fn new(go_below: f64, stay_below: f64) -> Result<Self, String> {
        if !(go_below > 0.0 && go_below < stay_below && stay_below <= 1.0) {
            return Err(format!(
                "thresholds must satisfy 0 < go-below < stay-below <= 1, got {go_below} and {stay_below}"
            ));
        }
        Ok(Self {
            go_below,
            stay_below,
        })
    }
}

impl Default for AdvisoryThresholds {
    fn default() -> Self {
        Self {
            go_below: DEFAULT_GO_BELOW,
            stay_below: DEFAULT_STAY_BELOW,
        }
    }
}

/// Roll once and map the draw to a go / stay / prepare advisory for the
/// given sport. Memoryless: every call is a fresh draw.
///
/// # Errors
///
/// Returns `ClutchError::RandomSource` if the draw fails; no advisory is
/// produced in that case.
pub fn scan(
    sport: Sport,
    thresholds: &AdvisoryThresholds,
    rng: &mut dyn RandomSource,
) -> Result<AdvisoryResult, ClutchError> {
    let roll = rng.next_unit()?;
    let category = if roll < thresholds.go_below {
        AdvisoryCategory::GoNow
    } else if roll < thresholds.stay_below {
        AdvisoryCategory::StaySeated
    } else {
        AdvisoryCategory::Prepare
    };

    Ok(AdvisoryResult {
        category,
        headline: category.headline().to_string(),
        detail: detail_for(sport, category).to_string(),
    })
}

fn detail_for(sport: Sport, category: AdvisoryCategory) -> &'static str {
    match category {
        AdvisoryCategory::GoNow => match sport {
            Sport::AmericanFootball => "stoppage likely (television timeout)",
            Sport::Basketball => "official review in progress, ~3 minute estimate",
            Sport::Baseball => "pitching change detected",
        },
        AdvisoryCategory::StaySeated => match sport {
            Sport::AmericanFootball => "scoring opportunity in progress",
            Sport::Basketball => "close game, final two minutes",
            Sport::Baseball => "bases loaded, full count",
        },
        AdvisoryCategory::Prepare => "action is slowing; prepare to move",
    }
}

/// GET /status: switch the active tab and render it. An optional `sport`
/// query parameter updates the selection without triggering a scan.
pub async fn status_tab(
    query: web::Query<HashMap<String, String>>,
    state: Data<Mutex<AppState>>,
) -> impl Responder {
    let mut st = match state.lock() {
        Ok(guard) => guard,
        Err(_) => {
            return HttpResponse::InternalServerError().json(json!({"error": "state lock poisoned"}));
        }
    };

    if let Some(raw) = query.get("sport") {
        match raw.parse::<Sport>() {
            Ok(sport) => st.selected_sport = sport,
            Err(e) => {
                return HttpResponse::BadRequest().json(json!({"error": e.to_string()}));
            }
        }
    }
    st.active_view = View::Status;

    HttpResponse::Ok()
        .content_type("text/html")
        .body(render_status_tab(&st).into_string())
}

/// GET /status/scan: run one advisory scan for the selected sport, replace
/// the stored result, and return the refreshed panel (or JSON with
/// `json=1`).
pub async fn scan_status(
    query: web::Query<HashMap<String, String>>,
    state: Data<Mutex<AppState>>,
    thresholds: Data<AdvisoryThresholds>,
) -> impl Responder {
    fn get_param_str<'a>(query: &'a HashMap<String, String>, key: &str) -> &'a str {
        query.get(key).map(|s| s.as_str()).unwrap_or("")
    }

    let as_json = matches!(get_param_str(&query, "json"), "1");

    let mut st = match state.lock() {
        Ok(guard) => guard,
        Err(_) => {
            return HttpResponse::InternalServerError().json(json!({"error": "state lock poisoned"}));
        }
    };

    if let Some(raw) = query.get("sport") {
        match raw.parse::<Sport>() {
            Ok(sport) => st.selected_sport = sport,
            Err(e) => {
                return HttpResponse::BadRequest().json(json!({"error": e.to_string()}));
            }
        }
    }

    let mut rng = ThreadRandom;
    match scan(st.selected_sport, thresholds.get_ref(), &mut rng) {
        Ok(result) => {
            log::info!(
                "scan: {} -> {}",
                st.selected_sport.slug(),
                result.headline
            );
            st.last_advisory = Some(result);
            if as_json {
                HttpResponse::Ok().json(&st.last_advisory)
            } else {
                HttpResponse::Ok()
                    .content_type("text/html")
                    .body(render_advisory_panel(st.last_advisory.as_ref()).into_string())
            }
        }
        Err(e) => {
            log::error!("scan failed: {e}");
            HttpResponse::InternalServerError().json(json!({"error": e.to_string()}))
        }
    }
}

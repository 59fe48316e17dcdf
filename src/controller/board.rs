use std::collections::HashMap;
use std::sync::Mutex;

use actix_web::web::{self, Data};
use actix_web::{HttpResponse, Responder};
use serde_json::json;

use crate::controller::random::{RandomSource, ThreadRandom};
use crate::error::ClutchError;
use crate::model::{AppState, BoardSnapshot, Facility, FacilityStatus, Recommendation, View};
use crate::view::board::{render_board_panel, render_board_tab};

/// A facility reads as busy when its draw lands strictly above this.
pub const BUSY_CUTOFF: f64 = 0.5;
pub const BUSY_WAIT_MINUTES: (u16, u16) = (10, 30);
pub const IDLE_WAIT_MINUTES: (u16, u16) = (1, 5);

/// Re-roll every facility on the board. Statuses come back in catalog order
/// together with the recommendation derived from them, so a caller can never
/// pair a mapping from one refresh with a recommendation from another.
///
/// # Errors
///
/// Returns `ClutchError::RandomSource` if any draw fails; no partial board
/// is produced in that case.
pub fn refresh(
    catalog: &[Facility],
    rng: &mut dyn RandomSource,
) -> Result<(Vec<FacilityStatus>, Recommendation), ClutchError> {
    let mut statuses = Vec::with_capacity(catalog.len());
    for facility in catalog {
        let is_busy = rng.next_unit()? > BUSY_CUTOFF;
        let (min, max) = if is_busy {
            BUSY_WAIT_MINUTES
        } else {
            IDLE_WAIT_MINUTES
        };
        statuses.push(FacilityStatus {
            facility_id: facility.id.to_string(),
            is_busy,
            wait_minutes: rng.next_wait(min, max)?,
        });
    }

    let recommendation = catalog
        .iter()
        .zip(&statuses)
        .find(|(_, status)| !status.is_busy)
        .map_or(Recommendation::AllBusy, |(facility, _)| {
            Recommendation::Spot {
                facility_id: facility.id.to_string(),
                display_name: facility.display_name.to_string(),
            }
        });

    Ok((statuses, recommendation))
}

/// GET /board: switch the active tab and render it. No computation happens
/// here; the stored snapshot (if any) is shown as-is.
pub async fn board_tab(state: Data<Mutex<AppState>>) -> impl Responder {
    let mut st = match state.lock() {
        Ok(guard) => guard,
        Err(_) => {
            return HttpResponse::InternalServerError().json(json!({"error": "state lock poisoned"}));
        }
    };
    st.active_view = View::Board;

    HttpResponse::Ok()
        .content_type("text/html")
        .body(render_board_tab(&st).into_string())
}

/// GET /board/refresh: re-roll the whole board, replace the stored snapshot,
/// and return the refreshed panel (or JSON with `json=1`).
pub async fn refresh_lines(
    query: web::Query<HashMap<String, String>>,
    state: Data<Mutex<AppState>>,
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

    let mut rng = ThreadRandom;
    match refresh(&crate::model::CATALOG, &mut rng) {
        Ok((statuses, recommendation)) => {
            log::info!(
                "board refresh: {} open of {}",
                statuses.iter().filter(|s| !s.is_busy).count(),
                statuses.len()
            );
            st.last_board = Some(BoardSnapshot::new(statuses, recommendation));
            if as_json {
                HttpResponse::Ok().json(&st.last_board)
            } else {
                HttpResponse::Ok()
                    .content_type("text/html")
                    .body(render_board_panel(st.last_board.as_ref()).into_string())
            }
        }
        Err(e) => {
            log::error!("board refresh failed: {e}");
            HttpResponse::InternalServerError().json(json!({"error": e.to_string()}))
        }
    }
}

use maud::{Markup, html};

use crate::model::{AppState, BoardSnapshot, CATALOG, Facility, FacilityStatus, Recommendation};

#[must_use]
pub fn render_board_tab(state: &AppState) -> Markup {
    html! {
        div class="board-caption" { "📊 Live Wait Times • Section 100 Level" }
        div id="board-panel" {
            (render_board_panel(state.last_board.as_ref()))
        }
        button class="action-button"
            hx-get="/board/refresh"
            hx-target="#board-panel"
            hx-swap="innerHTML"
            hx-indicator="#board-indicator" {
            "🔄 Refresh Line Data"
        }
        img id="board-indicator" alt="Refreshing..." class="htmx-indicator" width="60"
            src="https://htmx.org/img/bars.svg";
    }
}

/// Facility grid, recommendation and legend, the fragment swapped in by a
/// refresh. Before the first refresh there is nothing to show but a prompt.
#[must_use]
pub fn render_board_panel(snapshot: Option<&BoardSnapshot>) -> Markup {
    html! {
        @if let Some(snapshot) = snapshot {
            div class="board-updated" { "updated " (snapshot.refreshed_at) }
            div class="facility-grid" {
                @for (facility, status) in CATALOG.iter().zip(&snapshot.statuses) {
                    (render_facility_card(facility, status))
                }
            }
            (render_recommendation(&snapshot.recommendation))
            div class="legend" {
                span { "🟢 Empty (<2m)" }
                span { "🔴 Full (>10m)" }
            }
        } @else {
            div class="board-empty" { "📊 Click 'Refresh Line Data' to see live wait times" }
        }
    }
}

fn render_facility_card(facility: &Facility, status: &FacilityStatus) -> Markup {
    let (glyph, line, class) = if status.is_busy {
        (
            "🔴",
            format!("FULL ({}+ min)", status.wait_minutes),
            "facility-item busy",
        )
    } else {
        (
            "🟢",
            format!("EMPTY (<{} min)", status.wait_minutes),
            "facility-item open",
        )
    };
    html! {
        div class=(class) {
            div class="facility-emoji" { (facility.category.emoji()) }
            div class="facility-name" { (facility.display_name) }
            div class="facility-status" { (glyph) " " (line) }
        }
    }
}

fn render_recommendation(recommendation: &Recommendation) -> Markup {
    match recommendation {
        Recommendation::Spot { display_name, .. } => html! {
            div class="recommendation-box" {
                div class="recommendation-label" { "✅ CLUTCHQ RECOMMENDATION" }
                div class="recommendation-text" {
                    strong { (display_name) }
                    " is empty right now."
                    br;
                    "Walk time: 2 mins."
                }
            }
        },
        Recommendation::AllBusy => html! {
            div class="recommendation-box" {
                div class="recommendation-label" { "⚠️ CLUTCHQ RECOMMENDATION" }
                div class="recommendation-text" {
                    strong { "Everything is busy." }
                    br;
                    "Wait 5 minutes for lines to clear."
                }
            }
        },
    }
}

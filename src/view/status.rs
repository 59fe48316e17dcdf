use maud::{Markup, html};

use crate::model::{AdvisoryCategory, AdvisoryResult, AppState, Sport};

#[must_use]
pub fn render_status_tab(state: &AppState) -> Markup {
    html! {
        div class="status-container" {
            (render_sport_selector(state.selected_sport))
            div id="advisory-panel" {
                (render_advisory_panel(state.last_advisory.as_ref()))
            }
            button class="action-button"
                hx-get="/status/scan"
                hx-include="#sport-select"
                hx-target="#advisory-panel"
                hx-swap="innerHTML"
                hx-indicator="#scan-indicator" {
                "📊 Scan Game Status"
            }
            img id="scan-indicator" alt="Analyzing..." class="htmx-indicator" width="60"
                src="https://htmx.org/img/bars.svg";
        }
    }
}

fn render_sport_selector(selected: Sport) -> Markup {
    html! {
        select id="sport-select" name="sport" class="sport-select"
            hx-get="/status" hx-target="#tab-content" hx-swap="innerHTML" {
            @for sport in Sport::ALL {
                option value=(sport.slug()) selected[sport == selected] {
                    (sport.emoji()) " " (sport.display_name())
                }
            }
        }
    }
}

/// Traffic lights plus the advisory card, the fragment swapped in by a scan.
#[must_use]
pub fn render_advisory_panel(result: Option<&AdvisoryResult>) -> Markup {
    html! {
        (render_traffic_lights(result.map(|r| r.category)))
        @if let Some(result) = result {
            div class=(format!("status-light {}", result.category.css_class())) {
                (result.category.light())
            }
            div class="status-text-main" { (result.headline) }
            div class="status-text-sub" { (result.detail) }
        }
    }
}

fn render_traffic_lights(active: Option<AdvisoryCategory>) -> Markup {
    // display order matches the stadium board: red, yellow, green
    let lights = [
        AdvisoryCategory::StaySeated,
        AdvisoryCategory::Prepare,
        AdvisoryCategory::GoNow,
    ];
    html! {
        div class="traffic-lights" {
            @for category in lights {
                @let class = if active == Some(category) { "light active" } else { "light" };
                span class=(class) { (category.light()) }
            }
        }
    }
}

use maud::{Markup, html};

use crate::HTMX_PATH;
use crate::model::{AppState, View};
use crate::view::{board, status};

#[must_use]
pub fn render_index_template(state: &AppState) -> Markup {
    html! {
        (maud::DOCTYPE)
        head {
            meta charset="UTF-8";
            meta name="viewport" content="width=device-width, initial-scale=1.0";
            link rel="stylesheet" type="text/css" href="static/styles.css";
            title { "ClutchQ" }
            script src=(HTMX_PATH) {}
        }
        body {
            h1 class="header-title" { "Clutch" span class="accent" { "Q" } }
            div class="tab-nav" {
                button hx-get="/status" hx-target="#tab-content" hx-swap="innerHTML" {
                    "🎮 Game Flow"
                }
                button hx-get="/board" hx-target="#tab-content" hx-swap="innerHTML" {
                    "📍 Map & Lines"
                }
            }
            div id="tab-content" {
                @if state.active_view == View::Status {
                    (status::render_status_tab(state))
                } @else {
                    (board::render_board_tab(state))
                }
            }
            div class="footer" { "ClutchQ v3.0 • Stadium Line Management" }
        }
    }
}

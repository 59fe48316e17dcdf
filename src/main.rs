use std::sync::Mutex;

use actix_files::Files;
use actix_web::web::Data;
use actix_web::{App, HttpResponse, HttpServer, Responder, web};
use serde_json::json;

use clutchq::args;
use clutchq::controller::{advisory, board};
use clutchq::model::AppState;
use clutchq::view;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = args::args_checks();

    let thresholds = match args.thresholds() {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let state = Data::new(Mutex::new(AppState::new()));
    log::info!("clutchq listening on {}:{}", args.bind_addr, args.port);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .app_data(Data::new(thresholds))
            .route("/", web::get().to(index))
            .route("/status", web::get().to(advisory::status_tab))
            .route("/status/scan", web::get().to(advisory::scan_status))
            .route("/board", web::get().to(board::board_tab))
            .route("/board/refresh", web::get().to(board::refresh_lines))
            .route("/health", web::get().to(HttpResponse::Ok))
            .service(Files::new("/static", "./static")) // Serve the static files
    })
    .bind((args.bind_addr.as_str(), args.port))?
    .run()
    .await?;
    Ok(())
}

async fn index(state: Data<Mutex<AppState>>) -> impl Responder {
    let markup = match state.lock() {
        Ok(st) => view::index::render_index_template(&st),
        Err(_) => {
            return HttpResponse::InternalServerError().json(json!({"error": "state lock poisoned"}));
        }
    };
    HttpResponse::Ok()
        .content_type("text/html")
        .body(markup.into_string())
}

pub mod routing;

use routing::{compare_page, get_geometries, index_page};

use actix_web::{web, App, HttpServer};
use std::path::PathBuf;

pub struct AppState {
    pub csv_path: PathBuf,
}

pub async fn start_server(csv_path: PathBuf, port: u16) -> std::io::Result<()> {
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(AppState {
                csv_path: csv_path.clone(),
            }))
            .route("/", web::get().to(index_page))
            .route("/compare/{uuid}", web::get().to(compare_page))
            .route("/api/get-geometries/{uuid}", web::get().to(get_geometries))
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}

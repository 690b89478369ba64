use serde::Serialize;

use super::AppState;
use crate::dataset::lookup_record;
use crate::html;
use crate::MyError;

use actix_web::http::StatusCode;
use actix_web::web::{Data, Path};
use actix_web::{HttpResponse, ResponseError};
use tracing::error;

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl ResponseError for MyError {
    fn status_code(&self) -> StatusCode {
        match self {
            MyError::DataSourceMissing | MyError::UuidNotFound => StatusCode::NOT_FOUND,
            MyError::MalformedHeader | MyError::MalformedPayload { .. } => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            MyError::Io(err) => {
                error!("error reading geometries: {}", err);
                "Internal server error".to_owned()
            }
            other => other.to_string(),
        };

        HttpResponse::build(self.status_code()).json(ErrorResponse { error })
    }
}

pub async fn get_geometries(
    state: Data<AppState>,
    uuid: Path<String>,
) -> Result<HttpResponse, MyError> {
    let record = lookup_record(&state.csv_path, uuid.as_str())?;

    Ok(HttpResponse::Ok().json(record))
}

pub async fn index_page() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html::index::INDEX_HTML)
}

pub async fn compare_page() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html::compare::COMPARE_HTML)
}

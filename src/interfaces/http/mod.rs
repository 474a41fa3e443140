use actix_cors::Cors;
use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::http::StatusCode;
use actix_web::{
    dev::Server, get, post, web, App, HttpResponse, HttpServer, Responder, ResponseError,
};
use serde::{Deserialize, Serialize};

use crate::application::CsvNormalizerUseCase;
use crate::domain::error::AppError;
use crate::infrastructure::config::Settings;

pub const SERVICE_NAME: &str = "CSV Normalizer";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Default)]
pub struct HttpState {
    pub normalizer: CsvNormalizerUseCase,
}

impl HttpState {
    pub fn new() -> Self {
        Self {
            normalizer: CsvNormalizerUseCase::new(),
        }
    }
}

#[derive(Deserialize)]
pub struct NormalizeCsvRequest {
    pub csv_content: String,
}

#[derive(Serialize)]
pub struct ServiceDescription {
    pub message: &'static str,
    pub service: &'static str,
    pub endpoints: Endpoints,
}

#[derive(Serialize)]
pub struct Endpoints {
    pub normalizar_csv: &'static str,
    pub health_check: &'static str,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub service: &'static str,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        if self.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            detail: format!("Error: {}", self),
        })
    }
}

#[get("/")]
async fn home() -> impl Responder {
    HttpResponse::Ok().json(ServiceDescription {
        message: "¡API de normalización CSV activa!",
        service: SERVICE_NAME,
        endpoints: Endpoints {
            normalizar_csv: "POST /normalize-csv",
            health_check: "GET /health",
        },
    })
}

#[get("/health")]
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        version: VERSION,
        service: SERVICE_NAME,
    })
}

#[post("/normalize-csv")]
async fn normalize_csv(
    data: web::Data<HttpState>,
    req: web::Json<NormalizeCsvRequest>,
) -> Result<HttpResponse, AppError> {
    match data.normalizer.execute(&req.csv_content) {
        Ok(normalized) => {
            tracing::info!(
                rows = normalized.row_count,
                columns = normalized.column_count,
                text_columns = normalized.normalized_columns.len(),
                phone_column = normalized.phone_column_applied,
                elapsed_ms = normalized.processing_time_ms,
                "Normalized CSV"
            );

            Ok(HttpResponse::Ok()
                .content_type("text/plain; charset=utf-8")
                .body(normalized.content))
        }
        Err(e) => {
            if e.is_client_error() {
                tracing::warn!(error = %e, "Rejected CSV");
            } else {
                tracing::error!(error = %e, "CSV normalization failed");
            }
            Err(e)
        }
    }
}

/// JSON body extraction: oversized bodies get 413, anything else that
/// does not deserialize into the request type gets 422.
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err, _req| {
            let status = match err {
                JsonPayloadError::Overflow { .. }
                | JsonPayloadError::OverflowKnownLength { .. } => StatusCode::PAYLOAD_TOO_LARGE,
                _ => StatusCode::UNPROCESSABLE_ENTITY,
            };
            tracing::warn!(error = %err, status = status.as_u16(), "Invalid request body");

            let response = HttpResponse::build(status).json(ErrorResponse {
                detail: err.to_string(),
            });
            InternalError::from_response(err, response).into()
        })
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(home)
        .service(health_check)
        .service(normalize_csv);
}

pub fn start_server(settings: &Settings) -> std::io::Result<Server> {
    let state = web::Data::new(HttpState::new());
    let payload_limit = settings.payload_limit_bytes;

    let mut server = HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .app_data(state.clone())
            .app_data(json_config(payload_limit))
            .configure(configure)
    });

    if let Some(workers) = settings.workers {
        server = server.workers(workers);
    }

    Ok(server.bind(settings.bind_address())?.run())
}

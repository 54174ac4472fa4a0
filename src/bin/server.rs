use std::net::SocketAddr;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing::post};
use base64::Engine;
use image::ImageEncoder;
use image::codecs::png::PngEncoder;
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use noise_rng::config::Params;
use noise_rng::field::Stats;
use noise_rng::{Scale, SequentialNoiseGenerator, telemetry};

struct ApiError(StatusCode, String);

impl From<noise_rng::Error> for ApiError {
    fn from(e: noise_rng::Error) -> Self {
        ApiError(StatusCode::BAD_REQUEST, e.to_string())
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(e: tokio::task::JoinError) -> Self {
        ApiError(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
    }
}

impl From<image::ImageError> for ApiError {
    fn from(e: image::ImageError) -> Self {
        ApiError(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::warn!(status = %self.0, "{}", self.1);
        (self.0, Json(serde_json::json!({ "error": self.1 }))).into_response()
    }
}

type ApiResult<T> = Result<Json<T>, ApiError>;

/// Generator selection shared by the sequential endpoints. `seed` wins over
/// `seed_text`; neither means a clock seed.
#[derive(Deserialize, Default)]
struct GeneratorRequest {
    seed: Option<u32>,
    seed_text: Option<String>,
    position: Option<i32>,
}

impl GeneratorRequest {
    fn build(&self) -> SequentialNoiseGenerator {
        let position = self.position.unwrap_or(0);
        match (self.seed, &self.seed_text) {
            (Some(seed), _) => SequentialNoiseGenerator::new(seed, position),
            (None, Some(text)) => SequentialNoiseGenerator::from_text(text, position),
            (None, None) => {
                let mut rng = SequentialNoiseGenerator::from_clock();
                rng.set_cursor(position);
                rng
            }
        }
    }
}

#[derive(Deserialize)]
struct ValueRequest {
    #[serde(flatten)]
    generator: GeneratorRequest,
    count: Option<usize>,
}

#[derive(Deserialize)]
struct RangeRequest<T> {
    #[serde(flatten)]
    generator: GeneratorRequest,
    min: T,
    max: T,
}

#[derive(Serialize)]
struct Draw<T> {
    seed: u32,
    cursor: i32,
    value: T,
}

#[derive(Deserialize)]
struct NoiseRequest {
    coords: Vec<i32>,
    #[serde(default)]
    seed: u32,
    #[serde(default)]
    scale: Scale,
}

/// `value` is omitted for `Scale::Unit`, where `word` is already the exact result.
#[derive(Serialize)]
struct NoiseResponse {
    word: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<f32>,
}

#[derive(Serialize)]
struct FieldResponse {
    data_url: String,
    stats: Stats,
    timings: Vec<TimingEntry>,
    width: usize,
    height: usize,
}

#[derive(Serialize)]
struct TimingEntry {
    name: String,
    ms: f64,
}

const MAX_VALUES: usize = 4096;

fn encode_png(rgba: &[u8], w: usize, h: usize) -> Result<String, ApiError> {
    let mut buf = Vec::new();
    let encoder = PngEncoder::new(&mut buf);
    encoder.write_image(rgba, w as u32, h as u32, image::ExtendedColorType::Rgba8)?;
    let b64 = base64::engine::general_purpose::STANDARD.encode(&buf);
    Ok(format!("data:image/png;base64,{}", b64))
}

async fn value_handler(Json(req): Json<ValueRequest>) -> ApiResult<Draw<Vec<f32>>> {
    let mut rng = req.generator.build();
    let seed = rng.seed();
    let count = req.count.unwrap_or(1).clamp(1, MAX_VALUES);
    let value: Vec<f32> = rng.by_ref().take(count).collect();
    Ok(Json(Draw {
        seed,
        cursor: rng.cursor(),
        value,
    }))
}

async fn range_int_handler(Json(req): Json<RangeRequest<i32>>) -> ApiResult<Draw<i32>> {
    let mut rng = req.generator.build();
    let value = rng.range_int(req.min, req.max)?;
    Ok(Json(Draw {
        seed: rng.seed(),
        cursor: rng.cursor(),
        value,
    }))
}

async fn range_float_handler(Json(req): Json<RangeRequest<f32>>) -> ApiResult<Draw<f32>> {
    let mut rng = req.generator.build();
    let value = rng.range_float(req.min, req.max)?;
    Ok(Json(Draw {
        seed: rng.seed(),
        cursor: rng.cursor(),
        value,
    }))
}

async fn noise_handler(Json(req): Json<NoiseRequest>) -> ApiResult<NoiseResponse> {
    let word = noise_rng::noise_unit(&req.coords, req.seed)?;
    Ok(Json(NoiseResponse {
        word,
        value: (req.scale != Scale::Unit).then(|| req.scale.apply(word)),
    }))
}

async fn field_handler(Json(params): Json<Params>) -> ApiResult<FieldResponse> {
    let response = tokio::task::spawn_blocking(move || -> Result<FieldResponse, ApiError> {
        let (field, timings) = noise_rng::generate(&params)?;
        let timings = timings
            .iter()
            .map(|t| TimingEntry {
                name: t.name.to_string(),
                ms: t.ms,
            })
            .collect();
        Ok(FieldResponse {
            data_url: encode_png(&field.rgba, field.w, field.h)?,
            stats: field.stats,
            timings,
            width: field.w,
            height: field.h,
        })
    })
    .await??;

    Ok(Json(response))
}

fn router() -> Router {
    Router::new()
        .route("/api/value", post(value_handler))
        .route("/api/range_int", post(range_int_handler))
        .route("/api/range_float", post(range_float_handler))
        .route("/api/noise", post(noise_handler))
        .route("/api/field", post(field_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    telemetry::install();

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    tracing::info!("noise-rng server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router()).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(seed: u32, position: i32) -> GeneratorRequest {
        GeneratorRequest {
            seed: Some(seed),
            position: Some(position),
            ..GeneratorRequest::default()
        }
    }

    #[tokio::test]
    async fn value_draws_advance_cursor() {
        let req = ValueRequest {
            generator: seeded(200, 0),
            count: Some(3),
        };
        let Ok(Json(draw)) = value_handler(Json(req)).await else {
            panic!("value request failed");
        };
        assert_eq!(draw.seed, 200);
        assert_eq!(draw.cursor, 3);
        assert_eq!(draw.value[0], noise_rng::noise_1d_zero_to_one(0, 200));
    }

    #[tokio::test]
    async fn range_int_matches_generator() {
        let req = RangeRequest {
            generator: seeded(200, 2),
            min: 20,
            max: 40,
        };
        let Ok(Json(draw)) = range_int_handler(Json(req)).await else {
            panic!("range request failed");
        };
        assert_eq!(draw.value, 36);
        assert_eq!(draw.cursor, 3);
    }

    #[tokio::test]
    async fn inverted_range_is_bad_request() {
        let req = RangeRequest {
            generator: seeded(1, 0),
            min: 2.0,
            max: 1.0,
        };
        let Err(ApiError(status, _)) = range_float_handler(Json(req)).await else {
            panic!("expected an error");
        };
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn noise_rejects_five_coordinates() {
        let req = NoiseRequest {
            coords: vec![1, 2, 3, 4, 5],
            seed: 0,
            scale: Scale::Unit,
        };
        assert!(noise_handler(Json(req)).await.is_err());

        let req = NoiseRequest {
            coords: vec![0],
            seed: 0,
            scale: Scale::Unit,
        };
        let Ok(Json(resp)) = noise_handler(Json(req)).await else {
            panic!("noise request failed");
        };
        assert_eq!(resp.word, 0x1679_1E00);
        assert_eq!(resp.value, None);
        let body = serde_json::to_value(&resp).unwrap();
        assert_eq!(body, serde_json::json!({ "word": 0x1679_1E00u32 }));
    }

    #[tokio::test]
    async fn noise_rescales_non_unit_scales() {
        let req = NoiseRequest {
            coords: vec![3, 4],
            seed: 9,
            scale: Scale::ZeroToOne,
        };
        let Ok(Json(resp)) = noise_handler(Json(req)).await else {
            panic!("noise request failed");
        };
        assert_eq!(resp.word, noise_rng::noise_2d_unit(3, 4, 9));
        assert_eq!(resp.value, Some(noise_rng::noise_2d_zero_to_one(3, 4, 9)));
    }

    #[tokio::test]
    async fn field_returns_png() {
        let params = Params {
            width: 8,
            height: 8,
            ..Params::default()
        };
        let Ok(Json(resp)) = field_handler(Json(params)).await else {
            panic!("field request failed");
        };
        assert!(resp.data_url.starts_with("data:image/png;base64,"));
        assert_eq!(resp.width, 8);
    }
}

// tests/support/helpers.rs
use super::mocks::{FixedClock, InMemoryMediaStorage, ScriptedSuffixes};
use axum::body::{self, Body};
use axum::http::{Request, Response};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use image::{DynamicImage, ImageFormat, RgbImage, RgbaImage};
use quill_cms::application::{
    commands::ImageChange,
    pipeline::SlugPolicy,
    services::{ApplicationServices, Ports},
};
use quill_cms::domain::media::ImageUpload;
use quill_cms::infrastructure::{
    database,
    imaging::{ImageCrateCodec, PngUploadValidator},
    repositories::sqlite_repositories,
    util::DefaultSlugGenerator,
};
use quill_cms::presentation::http::{
    routes::{RouterOptions, build_router},
    state::HttpState,
};
use serde_json::Value;
use sqlx::SqlitePool;
use std::io::Cursor;
use std::sync::Arc;

pub struct TestApp {
    pub services: Arc<ApplicationServices>,
    pub storage: Arc<InMemoryMediaStorage>,
    pub pool: SqlitePool,
}

pub async fn test_pool() -> SqlitePool {
    let pool = database::init_memory_pool().await.expect("memory pool");
    database::run_migrations(&pool).await.expect("migrations");
    pool
}

pub async fn build_app(suffixes: ScriptedSuffixes, policy: SlugPolicy) -> TestApp {
    build_app_with_storage(suffixes, policy, InMemoryMediaStorage::default()).await
}

pub async fn build_app_with_storage(
    suffixes: ScriptedSuffixes,
    policy: SlugPolicy,
    storage: InMemoryMediaStorage,
) -> TestApp {
    let pool = test_pool().await;
    let storage = Arc::new(storage);
    let ports = Ports {
        storage: storage.clone(),
        codec: Arc::new(ImageCrateCodec),
        favicon_validator: Arc::new(PngUploadValidator),
        clock: Arc::new(FixedClock),
        slugger: Arc::new(DefaultSlugGenerator),
        suffixes: Arc::new(suffixes),
    };
    let services = Arc::new(ApplicationServices::new(
        sqlite_repositories(&pool),
        ports,
        policy,
    ));
    TestApp {
        services,
        storage,
        pool,
    }
}

pub async fn default_app() -> TestApp {
    build_app(
        ScriptedSuffixes::new(&["ab12", "cd34", "ef56", "gh78"], "zz99"),
        SlugPolicy::default(),
    )
    .await
}

pub fn make_test_router(app: &TestApp) -> axum::Router {
    let state = HttpState {
        services: Arc::clone(&app.services),
        max_upload_bytes: 10 * 1024 * 1024,
    };
    build_router(state, &RouterOptions::default())
}

pub fn encode_image(image: &DynamicImage, format: ImageFormat) -> Vec<u8> {
    let mut buffer = Cursor::new(Vec::new());
    image.write_to(&mut buffer, format).expect("encode test image");
    buffer.into_inner()
}

pub fn jpeg_bytes(width: u32, height: u32) -> Vec<u8> {
    let image = DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, image::Rgb([200, 40, 40])));
    encode_image(&image, ImageFormat::Jpeg)
}

pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let image =
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(width, height, image::Rgba([10, 120, 200, 255])));
    encode_image(&image, ImageFormat::Png)
}

pub fn upload(filename: &str, bytes: Vec<u8>) -> ImageChange {
    ImageChange::Replace(ImageUpload::new(filename, bytes).expect("valid upload"))
}

pub fn base64_image(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

pub fn image_dimensions(bytes: &[u8]) -> (u32, u32) {
    let image = image::load_from_memory(bytes).expect("stored image decodes");
    (image.width(), image.height())
}

pub async fn json_body(response: Response<Body>) -> Value {
    let bytes = body::to_bytes(response.into_body(), 4 * 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}

pub fn json_request(method: &str, uri: &str, payload: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .expect("request")
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("request")
}

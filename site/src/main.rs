mod api;
mod config;
mod error;
mod remote_images;
mod rewrites;
mod state;

use actix_files::{Files, NamedFile};
use actix_web::dev::{ServiceRequest, ServiceResponse, fn_service};
use actix_web::{App, HttpServer, middleware::Logger, web};

use crate::config::SiteConfig;
use crate::state::AppState;

/// Routes shared by the server and the tests.
fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(api::projects::projects)
        .service(api::image::optimize)
        // ① analytics reverse proxy, every method
        .route("/ingest", web::route().to(api::ingest::ingest))
        .route("/ingest/{tail:.*}", web::route().to(api::ingest::ingest));
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = SiteConfig::from_env()?;
    let bind = (config.host.clone(), config.port);
    log::info!(
        "serving {} on http://{}:{}",
        config.dist_dir.display(),
        bind.0,
        bind.1
    );

    let state = web::Data::new(AppState::new(config)?);

    HttpServer::new(move || {
        let dist = state.config.dist_dir.clone();
        let index = dist.join("index.html");

        App::new()
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(configure)
            // ② top-level static assets
            .service(Files::new("/assets", state.config.assets_dir.clone()))
            // ③ the client bundle, falling back to the SPA for any other path
            .service(Files::new("/", dist).index_file("index.html").default_handler(
                fn_service(move |req: ServiceRequest| {
                    let index = index.clone();
                    async move {
                        let (req, _) = req.into_parts();
                        let file = NamedFile::open_async(index).await?;
                        let res = file.into_response(&req);
                        Ok::<_, actix_web::Error>(ServiceResponse::new(req, res))
                    }
                }),
            ))
    })
    .bind(bind)?
    .run()
    .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test as atest};

    #[actix_web::test]
    async fn projects_without_token_is_unavailable() {
        let state = web::Data::new(AppState::new(SiteConfig::default()).unwrap());
        let app = atest::init_service(App::new().app_data(state).configure(configure)).await;

        let req = atest::TestRequest::get().uri("/api/projects").to_request();
        let resp = atest::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[actix_web::test]
    async fn image_with_bad_width_is_rejected() {
        let state = web::Data::new(AppState::new(SiteConfig::default()).unwrap());
        let app = atest::init_service(App::new().app_data(state).configure(configure)).await;

        let req = atest::TestRequest::get()
            .uri("/_image?url=https%3A%2F%2Fraw.githubusercontent.com%2Fhenrikkvamme%2Fportfolio%2Flogo.png&w=1")
            .to_request();
        let resp = atest::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}

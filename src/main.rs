use caddy_score::args;
use caddy_score::build_tee_service;
use caddy_score::controller::score::configure;

use actix_web::web::{Data, JsonConfig};
use actix_web::{App, HttpServer};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("caddy_score=info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let args = match args::args_checks() {
        Ok(args) => args,
        Err(e) => {
            error!("invalid arguments: {e}");
            std::process::exit(2);
        }
    };

    let tee_service = build_tee_service(&args)?;
    if !tee_service.is_configured() {
        info!("no course API configured, tee lookups will use the default table");
    }

    let (host, port) = args.bind_addr.clone();
    info!(%host, port, "starting score service");

    HttpServer::new(move || {
        App::new()
            .app_data(Data::new(tee_service.clone()))
            .app_data(JsonConfig::default().limit(256 * 1024))
            .configure(configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await?;
    Ok(())
}

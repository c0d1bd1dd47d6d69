use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use clap::Parser;
use invitation_server::config::{Cli, ServerConfig};
use invitation_server::handler::serve_static;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ServerConfig::from(Cli::parse());
    config.validate()?;
    let site = web::Data::new(config.site_root()?);
    log::info!("Serving files from {}", site.dir().display());

    let server = HttpServer::new(move || {
        App::new()
            .app_data(site.clone())
            .wrap(Logger::default())
            .default_service(web::to(serve_static))
    })
    .bind(config.bind_addr())?; // loopback only

    log::info!("Invitation server running at {}", config.url());
    server.run().await?;
    Ok(())
}

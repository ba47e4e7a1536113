use std::net::TcpListener;

use actix_web::{
    dev::Server,
    middleware::Logger,
    web::{self, Data},
    App, HttpServer,
};

use crate::{
    routes::{analyze_route, default_route},
    services::{LlmClient, UsageTracker},
};

pub fn run(
    listener: TcpListener,
    llm_client: LlmClient,
    usage_tracker: Data<UsageTracker>,
) -> Result<Server, std::io::Error> {
    let llm_client = web::Data::new(llm_client);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .service(default_route::default)
            .service(default_route::health_check)
            .service(web::scope("/analyze").service(analyze_route::analyze))
            .app_data(llm_client.clone())
            .app_data(usage_tracker.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}

//! Server module.

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::Logger,
    web::{self, Data},
    App, HttpResponse, HttpServer,
};
use reviewbot_aiapi_google::GoogleAiService;
use reviewbot_aiapi_interface::AiService;
use reviewbot_aiapi_null::NullAiService;
use reviewbot_config::{AiDriver, ApiDriver, Config};
use reviewbot_ghapi_github::GithubApiService;
use reviewbot_ghapi_interface::ApiService;
use reviewbot_ghapi_null::NullApiService;
use tracing::{info, warn};

use crate::{
    health::health_check_route, middlewares::VerifySignature, webhook::configure_webhook_handlers,
    Result, ServerError,
};

/// App context.
pub struct AppContext {
    /// Config.
    pub config: Config,
    /// GitHub API adapter.
    pub api_service: Box<dyn ApiService>,
    /// AI generation adapter.
    pub ai_service: Box<dyn AiService>,
}

impl AppContext {
    /// Create a new app context, wiring adapters from the configured drivers.
    pub fn new(config: Config) -> Self {
        let api_service: Box<dyn ApiService> = match config.api.driver {
            ApiDriver::GitHub => Box::new(GithubApiService::new(config.clone())),
            ApiDriver::Null => Box::new(NullApiService::new()),
        };

        let ai_service: Box<dyn AiService> = match config.ai.driver {
            AiDriver::Google => match GoogleAiService::new(config.clone()) {
                Ok(service) => Box::new(service),
                Err(err) => {
                    warn!(
                        error = %err,
                        message = "Could not build AI service, text generation is disabled"
                    );
                    Box::new(NullAiService::new())
                }
            },
            AiDriver::Null => Box::new(NullAiService::new()),
        };

        Self {
            config,
            api_service,
            ai_service,
        }
    }

    /// Create a new app context using adapters.
    pub fn new_with_adapters(
        config: Config,
        api_service: Box<dyn ApiService>,
        ai_service: Box<dyn AiService>,
    ) -> Self {
        Self {
            config,
            api_service,
            ai_service,
        }
    }
}

/// Build Actix app.
pub fn build_actix_app(
    context: Data<AppContext>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody<Error = Box<dyn std::error::Error>>>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let config = context.config.clone();

    App::new()
        .app_data(context.clone())
        .wrap(Logger::default())
        .service(
            web::scope(&config.server.webhook_path)
                .wrap(VerifySignature::new(&config))
                .configure(configure_webhook_handlers),
        )
        .route(
            &config.server.health_check_path,
            web::get().to(health_check_route),
        )
        .route(
            "/",
            web::get().to(move || {
                let config = config.clone();
                async move {
                    HttpResponse::Ok().json(serde_json::json!({
                        "message": format!("Welcome to {}", config.name),
                        "version": config.version,
                        "webhook_url": config.server.webhook_path,
                    }))
                }
            }),
        )
}

/// Run bot server.
pub async fn run_bot_server(context: AppContext) -> Result<()> {
    let address = get_bind_address(&context.config);

    info!(
        version = context.config.version,
        address = %address,
        message = "Starting bot server",
    );

    run_bot_server_internal(address, context).await
}

fn get_bind_address(config: &Config) -> String {
    format!("{}:{}", config.server.bind_ip, config.server.bind_port)
}

async fn run_bot_server_internal(ip_with_port: String, context: AppContext) -> Result<()> {
    let context = Data::new(context);
    let cloned_context = context.clone();

    let mut server = HttpServer::new(move || build_actix_app(context.clone()));

    if let Some(workers) = cloned_context.config.server.workers_count {
        server = server.workers(workers as usize);
    }

    server
        .bind(ip_with_port)
        .map_err(|e| ServerError::IoError { source: e })?
        .run()
        .await
        .map_err(|e| ServerError::IoError { source: e })
}

use std::net::SocketAddr;

use folio_api_rest::{RestServer, RestServerConfig};
use folio_config::Config;
use folio_core_contact_impl::{ContactServiceConfig, ContactServiceImpl};
use folio_core_health_impl::{HealthServiceConfig, HealthServiceImpl};
use folio_email_contracts::EmailService;
use folio_templates_impl::TemplateServiceImpl;
use tracing::info;

use crate::email;

pub async fn serve(config: Config) -> anyhow::Result<()> {
    info!("Connecting to smtp server");
    let email = email::connect(&config.email).await?;
    email.ping().await?;

    let templates = TemplateServiceImpl::new();

    let contact = ContactServiceImpl::new(
        email.clone(),
        templates,
        ContactServiceConfig {
            recipient: config.contact.recipient,
        },
    );
    let health = HealthServiceImpl::new(
        email,
        HealthServiceConfig {
            cache_ttl: config.health.cache_ttl.into(),
        },
    );

    let addr = SocketAddr::from((config.http.host, config.http.port));
    let server = RestServer::new(
        health,
        contact,
        RestServerConfig {
            addr,
            allowed_origins: config.http.allowed_origins,
        },
    );

    info!("Starting http server on {addr}");
    server.serve().await
}

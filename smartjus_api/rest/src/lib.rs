use std::{net::IpAddr, sync::Arc};

use anyhow::Context;
use axum::Router;
use smartjus_core_lead_contracts::LeadFeatureService;
use tokio::net::TcpListener;

mod middlewares;
mod models;
mod routes;

pub use routes::lead::LEAD_ROUTE;

#[derive(Debug, Clone)]
pub struct RestServer<Lead> {
    lead: Lead,
    config: RestServerConfig,
}

#[derive(Debug, Clone)]
pub struct RestServerConfig {
    /// Origins allowed to submit leads from a browser. CORS is disabled if
    /// empty.
    pub allowed_origins: Arc<[String]>,
}

impl<Lead> RestServer<Lead>
where
    Lead: LeadFeatureService,
{
    pub fn new(lead: Lead, config: RestServerConfig) -> Self {
        Self { lead, config }
    }

    pub async fn serve(self, host: IpAddr, port: u16) -> anyhow::Result<()> {
        let router = self.router()?;
        let listener = TcpListener::bind((host, port))
            .await
            .with_context(|| format!("Failed to bind to {host}:{port}"))?;
        axum::serve(listener, router).await.map_err(Into::into)
    }

    pub fn router(self) -> anyhow::Result<Router<()>> {
        let cors = middlewares::cors::add(&self.config.allowed_origins)?;

        let router = routes::lead::router(self.lead.into());
        let router = middlewares::panic_handler::add(router);
        let router = middlewares::trace::add(router);
        let router = middlewares::request_id::add(router);
        Ok(cors(router))
    }
}

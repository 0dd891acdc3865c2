use std::net::IpAddr;

use axum::Router;
use folio_core_health_contracts::HealthFeatureService;
use folio_core_pages_contracts::PageFeatureService;
use folio_core_submission_contracts::SubmissionFeatureService;
use tokio::net::TcpListener;

mod middlewares;
mod models;
mod routes;

#[derive(Debug, Clone)]
pub struct RestServer<Health, Pages, Submission> {
    health: Health,
    pages: Pages,
    submission: Submission,
}

impl<Health, Pages, Submission> RestServer<Health, Pages, Submission>
where
    Health: HealthFeatureService,
    Pages: PageFeatureService,
    Submission: SubmissionFeatureService,
{
    pub fn new(health: Health, pages: Pages, submission: Submission) -> Self {
        Self {
            health,
            pages,
            submission,
        }
    }

    pub async fn serve(self, host: IpAddr, port: u16) -> anyhow::Result<()> {
        let router = self.router();
        let listener = TcpListener::bind((host, port)).await?;
        axum::serve(listener, router).await.map_err(Into::into)
    }

    fn router(self) -> Router<()> {
        let router = Router::new()
            .merge(routes::health::router(self.health.into()))
            .merge(routes::pages::router(self.pages.into()))
            .merge(routes::contact::router(self.submission.into()));

        // The trace span reads the request id extension, so the request id
        // layer must wrap the trace layer. The panic handler wraps both.
        let router = middlewares::trace::add(router);
        let router = middlewares::request_id::add(router);
        middlewares::panic_handler::add(router)
    }
}

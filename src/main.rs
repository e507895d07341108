use product_recommender::{
    api::{create_router, AppState},
    catalog::{self, BuiltinCatalog, CatalogSource, JsonFileCatalog},
    config::Config,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("product_recommender=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;

    let source: Box<dyn CatalogSource> = match &config.catalog_path {
        Some(path) => Box::new(JsonFileCatalog::new(path)),
        None => Box::new(BuiltinCatalog),
    };
    let catalog = catalog::load_catalog(source.as_ref()).await?;

    // Create the router with all routes
    let app = create_router(AppState::new(catalog));

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    tracing::info!(address = %config.bind_address(), "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}

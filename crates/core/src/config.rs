use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub router: RouterConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RouterConfig {
    /// Deployment base path the route table is anchored at, e.g. "/" or "/app".
    pub base_path: String,
}

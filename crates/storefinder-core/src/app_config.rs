use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub dataset_path: PathBuf,
    /// Selection applied when a locator session starts. An empty state means
    /// "all states".
    pub default_state: String,
    pub default_city: String,
    pub default_center_lat: f64,
    pub default_center_lng: f64,
    pub default_zoom: f64,
    pub single_store_zoom: f64,
    pub marker_focus_zoom: f64,
    pub all_states_zoom_ceiling: f64,
    pub state_zoom_ceiling: f64,
    pub maps_api_key: Option<String>,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("dataset_path", &self.dataset_path)
            .field("default_state", &self.default_state)
            .field("default_city", &self.default_city)
            .field("default_center_lat", &self.default_center_lat)
            .field("default_center_lng", &self.default_center_lng)
            .field("default_zoom", &self.default_zoom)
            .field("single_store_zoom", &self.single_store_zoom)
            .field("marker_focus_zoom", &self.marker_focus_zoom)
            .field("all_states_zoom_ceiling", &self.all_states_zoom_ceiling)
            .field("state_zoom_ceiling", &self.state_zoom_ceiling)
            .field(
                "maps_api_key",
                &self.maps_api_key.as_ref().map(|_| "[redacted]"),
            )
            .finish()
    }
}

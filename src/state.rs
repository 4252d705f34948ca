use std::sync::Arc;

use reqwest::Client;
use tera::Tera;

use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub templates: Arc<Tera>,
    pub client: Client,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, tera::Error> {
        let templates = Tera::new(&config.templates_glob)?;

        Ok(Self {
            config: Arc::new(config),
            templates: Arc::new(templates),
            client: Client::new(),
        })
    }
}

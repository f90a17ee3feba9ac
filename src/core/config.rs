//! Application configuration loaded from environment variables.
use envconfig::Envconfig;
use humantime::Duration;
use reqwest::Url;

pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");

#[derive(Envconfig)]
pub struct Config {
    #[allow(dead_code)]
    #[envconfig(from = "APP_LOG", default = "error")]
    pub app_log: String,
    #[allow(dead_code)]
    #[envconfig(from = "APP_LOG_STYLE", default = "always")]
    pub app_log_style: String,
    #[envconfig(from = "OIGCLOUD_URL", default = "https://www.oigpower.cz/cez/")]
    pub oigcloud_url: Url,
    #[envconfig(from = "OIGCLOUD_USERNAME")]
    pub oigcloud_username: String,
    #[envconfig(from = "OIGCLOUD_PASSWORD")]
    pub oigcloud_password: String,
    #[envconfig(from = "HOMEASSISTANT_URL")]
    pub homeassistant_url: Url,
    #[envconfig(from = "HOMEASSISTANT_TOKEN")]
    pub homeassistant_token: String,
    #[envconfig(from = "HOMEASSISTANT_LANGUAGE", default = "en")]
    pub homeassistant_language: String,
    #[envconfig(from = "UPDATE_INTERVAL", default = "60s")]
    pub update_interval: Duration,
}

pub fn configure_logger() {
    let env = env_logger::Env::default()
        .filter_or("APP_LOG", "info")
        .write_style_or("APP_LOG_STYLE", "always");
    env_logger::init_from_env(env);
}

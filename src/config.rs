use std::env;

pub const DEFAULT_ADMIN_EMAIL: &str = "admin@shopmate.com";
pub const DEFAULT_SHIPPING_ADDRESS: &str = "서울특별시 강남구 테헤란로 123";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub admin_email: String,
    pub shipping_address: String,
    pub seed_demo_data: bool,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);
        let admin_email =
            env::var("ADMIN_EMAIL").unwrap_or_else(|_| DEFAULT_ADMIN_EMAIL.to_string());
        let shipping_address =
            env::var("SHIPPING_ADDRESS").unwrap_or_else(|_| DEFAULT_SHIPPING_ADDRESS.to_string());
        let seed_demo_data = match env::var("SEED_DEMO_DATA") {
            Ok(raw) => parse_flag(&raw)?,
            Err(_) => true,
        };
        Ok(Self {
            host,
            port,
            admin_email,
            shipping_address,
            seed_demo_data,
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            admin_email: DEFAULT_ADMIN_EMAIL.to_string(),
            shipping_address: DEFAULT_SHIPPING_ADDRESS.to_string(),
            seed_demo_data: true,
        }
    }
}

fn parse_flag(raw: &str) -> anyhow::Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => anyhow::bail!("SEED_DEMO_DATA must be a boolean, got {other:?}"),
    }
}

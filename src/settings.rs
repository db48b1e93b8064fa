use crate::common::env::FromEnv;
use std::net::{IpAddr, Ipv4Addr};
use std::ops::Deref;
use std::sync::LazyLock;
use std::time::Duration;
use tracing::Level;

pub struct AppSettings {
    pub level: Level,
    pub app_host: IpAddr,
    pub app_port: u16,

    pub database_url: String,
    pub db_max_connections: usize,
    pub db_wait_timeout: Duration,
}

impl AppSettings {
    pub fn load_from_env() -> anyhow::Result<Self> {
        let _ = dotenv::dotenv();

        let level = Level::from_env_or("LOG_LEVEL", Level::INFO)?;
        let app_host = IpAddr::from_env_or("APP_HOST", IpAddr::V4(Ipv4Addr::LOCALHOST))?;
        let app_port = u16::from_env_or("APP_PORT", 8080)?;

        let database_url =
            String::from_env_or("DATABASE_URL", "sqlite:microblog.db?mode=rwc".to_owned())?;
        let db_max_connections = usize::from_env_or("DB_MAX_CONNECTIONS", 5)?;
        let db_wait_timeout_secs = u64::from_env_or("DB_WAIT_TIMEOUT_SECS", 10)?;
        let db_wait_timeout = Duration::from_secs(db_wait_timeout_secs);

        Ok(AppSettings {
            level,
            app_host,
            app_port,

            database_url,
            db_max_connections,
            db_wait_timeout,
        })
    }

    pub fn get() -> &'static AppSettings {
        settings()
    }
}

pub fn settings() -> &'static AppSettings {
    static SETTINGS: LazyLock<AppSettings> =
        LazyLock::new(|| AppSettings::load_from_env().expect("Failed to load settings"));
    SETTINGS.deref()
}

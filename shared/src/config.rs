use std::path::PathBuf;

use anyhow::Result;

pub struct AppConfig {
    pub server: ServerConfig,
    pub storage: StorageConfig,
}

impl AppConfig {
    pub fn new() -> Result<AppConfig> {
        let server = ServerConfig {
            port: match std::env::var("PORT") {
                Ok(v) => v.parse()?,
                Err(_) => 8080,
            },
        };
        let storage = StorageConfig {
            snapshot_path: std::env::var("SNAPSHOT_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("reserva_pro_data.json")),
        };
        Ok(AppConfig { server, storage })
    }
}

pub struct ServerConfig {
    pub port: u16,
}

pub struct StorageConfig {
    /// Where the `{ reservations, residents }` snapshot is kept between runs.
    pub snapshot_path: PathBuf,
}

use bb8::Pool;
use bb8_tiberius::ConnectionManager;
use tiberius::{AuthMethod, Config};
use tracing::info;

use crate::Error;

#[derive(Clone)]
pub struct Database {
    pub(crate) pool: Pool<ConnectionManager>
}

impl Database {
    pub async fn new(ip: &str, port: u16, username: &str, password: &str) -> Result<Self, Error> {
        let mut config = Config::new();
        config.host(ip);
        config.port(port);
        config.authentication(AuthMethod::sql_server(username, password));
        config.trust_cert();

        let manager = ConnectionManager::new(config);
        let pool = Pool::builder()
            .max_size(8)
            .build(manager)
            .await?;

        info!("Connected to SQL Server at {}:{}", ip, port);

        Ok(Self { pool })
    }
}

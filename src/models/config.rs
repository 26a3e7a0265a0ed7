use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub token: String,
    pub cmd_prefix: String,
    #[serde(default)]
    pub sql_server_ip: String,
    #[serde(default = "default_sql_port")]
    pub sql_server_port: u16,
    #[serde(default)]
    pub sql_server_username: String,
    #[serde(default)]
    pub sql_server_password: String,
    #[serde(default)]
    pub uptime_api_key: String,
    #[serde(default)]
    pub developers: Vec<u64>,
    pub bug_channel: Option<u64>,
    pub suggestion_channel: Option<u64>,
    #[serde(default)]
    pub links: Links
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Links {
    pub support: String,
    pub website: String,
    pub bot_site: String,
    pub source: String,
    pub invite: String,
    pub status: String
}

impl Default for Links {
    fn default() -> Self {
        Self {
            support: "discord.gg/F3fn57f".to_string(),
            website: "https://fellowhashbrown.com".to_string(),
            bot_site: "https://omegapsi.fellowhashbrown.com".to_string(),
            source: "https://github.com/FellowHashbrown/Omega-Psi".to_string(),
            invite: "https://discord.com/oauth2/authorize?client_id=535587516816949248&scope=bot&permissions=519232".to_string(),
            status: "https://status.omegapsi.fellowhashbrown.com".to_string()
        }
    }
}

fn default_sql_port() -> u16 {
    1433
}

impl Config {
    pub fn sql_enabled(&self) -> bool {
        !self.sql_server_ip.is_empty()
    }
}

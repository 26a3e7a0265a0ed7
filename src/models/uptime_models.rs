use serde::Deserialize;
use serde_json::Value;
use num_derive::FromPrimitive;

#[derive(Debug, Deserialize)]
pub struct MonitorsResponse {
    pub stat: String,
    #[serde(default)]
    pub monitors: Vec<Monitor>,
    pub error: Option<Value>
}

#[derive(Debug, Deserialize)]
pub struct Monitor {
    #[serde(default)]
    pub logs: Vec<MonitorLog>
}

#[derive(Debug, Clone, Deserialize)]
pub struct MonitorLog {
    #[serde(rename = "type")]
    pub kind: u8,
    /// Unix seconds.
    pub datetime: i64,
    /// Seconds.
    pub duration: i64
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromPrimitive)]
pub enum LogType {
    Down = 1,
    Up = 2,
    Started = 98,
    Paused = 99
}

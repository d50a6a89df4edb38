use serde::{Deserialize, Serialize};

use crate::default::{
    get_default_capacity, get_default_capacity_config, get_default_capacity_max,
    get_default_capacity_min, get_default_capacity_source, get_default_load_balancing,
    get_default_log, get_default_log_level, get_default_num_servers, get_default_pool,
    get_default_requests,
};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    #[serde(default = "get_default_pool")]
    pub pool: Pool,

    #[serde(default = "get_default_load_balancing")]
    pub load_balancing: LoadBalancing,

    // number of simulated requests the demo driver sends
    #[serde(default = "get_default_requests")]
    pub requests: u64,

    #[serde(default = "get_default_log")]
    pub log: Log,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pool: get_default_pool(),
            load_balancing: get_default_load_balancing(),
            requests: get_default_requests(),
            log: get_default_log(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Pool {
    #[serde(default = "get_default_num_servers")]
    pub num_servers: usize, // 5

    #[serde(default = "get_default_capacity_config")]
    pub capacity: Capacity,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Capacity {
    #[serde(default = "get_default_capacity_source")]
    pub source: String, // fixed | random

    // used by the "fixed" source
    #[serde(default = "get_default_capacity")]
    pub default: u32,

    // inclusive range used by the "random" source
    #[serde(default = "get_default_capacity_min")]
    pub min: u32,

    #[serde(default = "get_default_capacity_max")]
    pub max: u32,

    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoadBalancing {
    #[serde(rename = "type")]
    pub lb_type: String, // "round-robin", "weighted-round-robin"
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Log {
    #[serde(default = "get_default_log_level")]
    pub level: String, // "trace, debug, info, warn, error, off"

    // stderr when unset
    #[serde(default)]
    pub file: Option<String>,
}

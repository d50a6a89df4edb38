use crate::config::{Capacity, LoadBalancing, Log, Pool};

pub const DEFAULT_NUM_SERVERS: usize = 5;
pub const DEFAULT_CAPACITY: u32 = 3;

// default values
pub fn get_default_num_servers() -> usize {
    DEFAULT_NUM_SERVERS
}

pub fn get_default_capacity() -> u32 {
    DEFAULT_CAPACITY
}

pub fn get_default_capacity_source() -> String {
    String::from("fixed")
}

pub fn get_default_capacity_min() -> u32 {
    1
}

pub fn get_default_capacity_max() -> u32 {
    5
}

pub fn get_default_requests() -> u64 {
    10
}

pub fn get_default_log_level() -> String {
    String::from("info")
}

pub fn get_default_capacity_config() -> Capacity {
    Capacity {
        source: get_default_capacity_source(),
        default: get_default_capacity(),
        min: get_default_capacity_min(),
        max: get_default_capacity_max(),
        seed: None,
    }
}

pub fn get_default_pool() -> Pool {
    Pool {
        num_servers: get_default_num_servers(),
        capacity: get_default_capacity_config(),
    }
}

pub fn get_default_load_balancing() -> LoadBalancing {
    LoadBalancing { lb_type: String::from("round-robin") }
}

pub fn get_default_log() -> Log {
    Log {
        level: get_default_log_level(),
        file: None,
    }
}

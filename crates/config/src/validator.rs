use crate::config::Config;
use log::{error, info};

pub const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

pub const VALID_LB_TYPES: &[&str] = &[
    "round-robin",
    "round_robin",
    "rr",
    "weighted-round-robin",
    "weighted_round_robin",
    "wrr",
];

pub const VALID_CAPACITY_SOURCES: &[&str] = &["fixed", "random"];

pub fn validate(config: &Config) -> bool {
    info!("Starting configuration validation...");

    // --- Validate Log level ---
    if !VALID_LOG_LEVELS
        .iter()
        .any(|lvl| lvl.eq_ignore_ascii_case(&config.log.level))
    {
        error!("Invalid log level: {}", config.log.level);
        return false;
    }

    // --- Validate load balancing type ---
    if !VALID_LB_TYPES
        .iter()
        .any(|lb| lb.eq_ignore_ascii_case(config.load_balancing.lb_type.trim()))
    {
        error!(
            "Invalid load balancing type: {}",
            config.load_balancing.lb_type
        );
        return false;
    }

    // --- Validate pool ---
    if config.pool.num_servers == 0 {
        error!("Invalid number of servers: 0 (must be at least 1)");
        return false;
    }

    let capacity = &config.pool.capacity;
    if !VALID_CAPACITY_SOURCES
        .iter()
        .any(|src| src.eq_ignore_ascii_case(capacity.source.trim()))
    {
        error!("Invalid capacity source: {}", capacity.source);
        return false;
    }

    if capacity.default == 0 {
        error!("Default capacity is invalid (0)");
        return false;
    }

    if capacity.min == 0 {
        error!("Random capacity lower bound is invalid (0)");
        return false;
    }

    if capacity.min > capacity.max {
        error!(
            "Random capacity range is empty: min {} > max {}",
            capacity.min, capacity.max
        );
        return false;
    }

    info!("Configuration validation passed successfully");

    true
}

//! Roundabout - request dispatch simulator
//!
//! Builds a server pool and a dispatch policy from configuration, sends a
//! number of simulated requests through it and prints every routing decision.

use clap::Parser;
use log::{error, info};
use rand::{SeedableRng, rngs::StdRng};

use roundabout_config::config::Config;
use roundabout_config::validator::validate as validate_config;
use roundabout_lb::{CapacitySource, DispatchPolicy, LoadBalancing, ServerPool};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// YAML config file; built-in defaults are used when omitted
    #[arg(short, long)]
    config: Option<String>,

    /// Dispatch policy: round-robin | weighted-round-robin
    #[arg(short, long)]
    policy: Option<String>,

    /// Number of servers in the pool
    #[arg(short = 'n', long)]
    servers: Option<usize>,

    /// Number of requests to dispatch
    #[arg(short, long)]
    requests: Option<u64>,

    /// Seed for randomized capacities
    #[arg(long)]
    seed: Option<u64>,
}

impl Cli {
    fn apply(&self, config: &mut Config) {
        if let Some(policy) = &self.policy {
            config.load_balancing.lb_type = policy.clone();
        }
        if let Some(servers) = self.servers {
            config.pool.num_servers = servers;
        }
        if let Some(requests) = self.requests {
            config.requests = requests;
        }
        if let Some(seed) = self.seed {
            config.pool.capacity.seed = Some(seed);
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => match roundabout_config::loader::read_config(path) {
            Ok(cfg) => cfg,
            Err(err_msg) => {
                eprintln!("Error loading config: {}", err_msg);
                std::process::exit(1);
            }
        },
        None => Config::default(),
    };
    cli.apply(&mut config);

    // Initialize the Logger
    if let Err(err_msg) =
        roundabout_utils::logger::init_logger(&config.log.level, config.log.file.as_deref())
    {
        eprintln!("Error initialising logger: {}", err_msg);
        std::process::exit(1);
    }

    // Validate Configurations
    if !validate_config(&config) {
        error!("Configuration validation failed. Exiting...");
        std::process::exit(1);
    }

    if let Err(err_msg) = run(&config) {
        error!("{}", err_msg);
        std::process::exit(1);
    }
}

fn build_policy(config: &Config) -> Result<LoadBalancing, String> {
    let source = CapacitySource::from_config(&config.pool.capacity)?;
    let rng = match config.pool.capacity.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let pool = ServerPool::new(config.pool.num_servers, source.assigner(rng))
        .map_err(|err| err.to_string())?;

    LoadBalancing::from_config(&config.load_balancing.lb_type, pool)
}

fn run(config: &Config) -> Result<(), String> {
    let mut policy = build_policy(config)?;
    info!(
        "Dispatching {} requests over {} servers with {}",
        config.requests,
        policy.pool().len(),
        policy.name()
    );

    for request in 0..config.requests {
        let dispatch = policy.dispatch();
        println!(
            "request {:>4} -> server {} (load {}, capacity {})",
            request, dispatch.server_id, dispatch.load, dispatch.capacity
        );
    }

    println!("summary:");
    for server in policy.pool().iter() {
        println!(
            "  server {}: load {}, capacity {}",
            server.id(),
            server.load(),
            server.capacity()
        );
    }

    Ok(())
}

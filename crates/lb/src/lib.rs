use std::fmt;

use log::info;

pub mod capacity;
pub mod round_robin;
pub mod shared;
pub mod weighted;

pub use capacity::CapacitySource;
pub use round_robin::RoundRobin;
pub use shared::SharedDispatcher;
pub use weighted::WeightedRoundRobin;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PoolError {
    InvalidConfiguration(String),
    OutOfRange { id: usize, size: usize },
}

impl fmt::Display for PoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PoolError::InvalidConfiguration(msg) => write!(f, "invalid configuration: {msg}"),
            PoolError::OutOfRange { id, size } => {
                write!(f, "server id {id} out of range for pool of {size}")
            }
        }
    }
}

impl std::error::Error for PoolError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Server {
    id: usize,
    load: u64,
    capacity: u32,
}

impl Server {
    pub fn id(&self) -> usize {
        self.id
    }

    /// Total requests ever routed to this server.
    pub fn load(&self) -> u64 {
        self.load
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }
}

/// Fixed set of servers. Ids are the 0-based positions in the pool and never change.
#[derive(Debug, Clone)]
pub struct ServerPool {
    servers: Vec<Server>,
}

impl ServerPool {
    /// Builds `num_servers` servers, asking `capacity_fn` for each id's capacity.
    ///
    /// Fails without building anything when the pool would be empty or any
    /// capacity comes back as zero.
    pub fn new<F>(num_servers: usize, mut capacity_fn: F) -> Result<Self, PoolError>
    where
        F: FnMut(usize) -> u32,
    {
        if num_servers == 0 {
            return Err(PoolError::InvalidConfiguration(
                "pool needs at least one server".to_string(),
            ));
        }

        let mut servers = Vec::with_capacity(num_servers);
        for id in 0..num_servers {
            let capacity = capacity_fn(id);
            if capacity == 0 {
                return Err(PoolError::InvalidConfiguration(format!(
                    "server {id} was assigned capacity 0"
                )));
            }
            servers.push(Server {
                id,
                load: 0,
                capacity,
            });
        }

        info!(
            "Built server pool with {} servers, capacities {:?}",
            servers.len(),
            servers.iter().map(|s| s.capacity).collect::<Vec<_>>()
        );
        Ok(Self { servers })
    }

    pub fn with_capacity(num_servers: usize, capacity: u32) -> Result<Self, PoolError> {
        Self::new(num_servers, |_| capacity)
    }

    pub fn len(&self) -> usize {
        self.servers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.servers.is_empty()
    }

    pub fn get(&self, id: usize) -> Result<&Server, PoolError> {
        self.servers.get(id).ok_or(PoolError::OutOfRange {
            id,
            size: self.servers.len(),
        })
    }

    pub fn record_dispatch(&mut self, id: usize) -> Result<&Server, PoolError> {
        if id >= self.servers.len() {
            return Err(PoolError::OutOfRange {
                id,
                size: self.servers.len(),
            });
        }
        Ok(self.record_at(id))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Server> {
        self.servers.iter()
    }

    pub fn loads(&self) -> Vec<u64> {
        self.servers.iter().map(|s| s.load).collect()
    }

    pub fn total_load(&self) -> u64 {
        self.servers.iter().map(|s| s.load).sum()
    }

    // policies only pass indices reduced modulo len()
    pub(crate) fn capacity_at(&self, index: usize) -> u32 {
        self.servers[index].capacity
    }

    pub(crate) fn record_at(&mut self, index: usize) -> &Server {
        let server = &mut self.servers[index];
        server.load = server.load.saturating_add(1);
        server
    }
}

/// Outcome of a single dispatch: the chosen server as it looks after the request was recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dispatch {
    pub server_id: usize,
    pub load: u64,
    pub capacity: u32,
}

impl From<&Server> for Dispatch {
    fn from(server: &Server) -> Self {
        Self {
            server_id: server.id,
            load: server.load,
            capacity: server.capacity,
        }
    }
}

/// A selection algorithm that owns a pool and routes one request per `dispatch` call.
pub trait DispatchPolicy {
    fn name(&self) -> &'static str;

    /// Selects the next server, records the request against it and reports the choice.
    fn dispatch(&mut self) -> Dispatch;

    fn pool(&self) -> &ServerPool;
}

pub enum LoadBalancing {
    RoundRobin(RoundRobin),
    WeightedRoundRobin(WeightedRoundRobin),
}

impl LoadBalancing {
    pub fn from_config(value: &str, pool: ServerPool) -> Result<Self, String> {
        let mode = value.trim().to_lowercase();
        match mode.as_str() {
            "round-robin" | "round_robin" | "rr" => Ok(Self::RoundRobin(RoundRobin::new(pool))),
            "weighted-round-robin" | "weighted_round_robin" | "wrr" => {
                Ok(Self::WeightedRoundRobin(WeightedRoundRobin::new(pool)))
            }
            _ => Err(format!("unsupported load balancing type: {value}")),
        }
    }

    pub fn into_pool(self) -> ServerPool {
        match self {
            LoadBalancing::RoundRobin(rr) => rr.into_pool(),
            LoadBalancing::WeightedRoundRobin(wrr) => wrr.into_pool(),
        }
    }
}

impl DispatchPolicy for LoadBalancing {
    fn name(&self) -> &'static str {
        match self {
            LoadBalancing::RoundRobin(rr) => rr.name(),
            LoadBalancing::WeightedRoundRobin(wrr) => wrr.name(),
        }
    }

    fn dispatch(&mut self) -> Dispatch {
        match self {
            LoadBalancing::RoundRobin(rr) => rr.dispatch(),
            LoadBalancing::WeightedRoundRobin(wrr) => wrr.dispatch(),
        }
    }

    fn pool(&self) -> &ServerPool {
        match self {
            LoadBalancing::RoundRobin(rr) => rr.pool(),
            LoadBalancing::WeightedRoundRobin(wrr) => wrr.pool(),
        }
    }
}

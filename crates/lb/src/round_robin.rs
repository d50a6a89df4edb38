use log::debug;

use crate::{Dispatch, DispatchPolicy, ServerPool};

/// Visits servers in strict cyclic order. Capacity is reported but never consulted.
pub struct RoundRobin {
    pool: ServerPool,
    counter: usize,
}

impl RoundRobin {
    pub fn new(pool: ServerPool) -> Self {
        Self { pool, counter: 0 }
    }

    pub fn counter(&self) -> usize {
        self.counter
    }

    pub fn into_pool(self) -> ServerPool {
        self.pool
    }
}

impl DispatchPolicy for RoundRobin {
    fn name(&self) -> &'static str {
        "round-robin"
    }

    fn dispatch(&mut self) -> Dispatch {
        let target = self.counter % self.pool.len();
        self.counter = self.counter.wrapping_add(1);

        let dispatch = Dispatch::from(self.pool.record_at(target));
        debug!(
            "round-robin selected server {} (load {}, capacity {})",
            dispatch.server_id, dispatch.load, dispatch.capacity
        );
        dispatch
    }

    fn pool(&self) -> &ServerPool {
        &self.pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_robin_cycles() {
        let pool = ServerPool::with_capacity(3, 2).unwrap();
        let mut rr = RoundRobin::new(pool);

        let picks: Vec<usize> = (0..7).map(|_| rr.dispatch().server_id).collect();
        assert_eq!(picks, vec![0, 1, 2, 0, 1, 2, 0]);
        assert_eq!(rr.pool().loads(), vec![3, 2, 2]);
        assert_eq!(rr.counter(), 7);
    }

    #[test]
    fn capacity_is_ignored() {
        let pool = ServerPool::new(2, |id| if id == 0 { 1 } else { 10 }).unwrap();
        let mut rr = RoundRobin::new(pool);

        let picks: Vec<usize> = (0..4).map(|_| rr.dispatch().server_id).collect();
        assert_eq!(picks, vec![0, 1, 0, 1]);
    }

    #[test]
    fn dispatch_reports_load_after_recording() {
        let mut rr = RoundRobin::new(ServerPool::with_capacity(1, 4).unwrap());

        let first = rr.dispatch();
        let second = rr.dispatch();
        assert_eq!(
            first,
            Dispatch {
                server_id: 0,
                load: 1,
                capacity: 4
            }
        );
        assert_eq!(second.load, 2);
    }
}

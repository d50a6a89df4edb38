use log::{debug, trace};

use crate::{Dispatch, DispatchPolicy, ServerPool};

/// Capacity-weighted round robin.
///
/// The current server keeps receiving requests until it has been picked
/// `capacity` times in a row; its quota is then reset and the cycle moves on
/// to the next server. This is a burst allocator: with capacities `[2, 3]`
/// the sequence is `0, 0, 1, 1, 1, 0, 0, ...`, not an interleaved one.
///
/// Termination relies on every capacity being at least 1, which
/// [`ServerPool::new`] enforces.
pub struct WeightedRoundRobin {
    pool: ServerPool,
    counter: usize,
    seen_count: Vec<u32>,
}

impl WeightedRoundRobin {
    pub fn new(pool: ServerPool) -> Self {
        let seen_count = vec![0; pool.len()];
        Self {
            pool,
            counter: 0,
            seen_count,
        }
    }

    pub fn counter(&self) -> usize {
        self.counter
    }

    /// Times `id` has been picked since its quota was last reset.
    pub fn seen_count(&self, id: usize) -> Option<u32> {
        self.seen_count.get(id).copied()
    }

    pub fn into_pool(self) -> ServerPool {
        self.pool
    }
}

impl DispatchPolicy for WeightedRoundRobin {
    fn name(&self) -> &'static str {
        "weighted-round-robin"
    }

    fn dispatch(&mut self) -> Dispatch {
        let size = self.pool.len();
        let target = loop {
            let target = self.counter % size;
            if self.seen_count[target] < self.pool.capacity_at(target) {
                break target;
            }

            trace!(
                "server {} exhausted its quota of {}, advancing",
                target,
                self.pool.capacity_at(target)
            );
            self.seen_count[target] = 0;
            self.counter = self.counter.wrapping_add(1);
        };

        self.seen_count[target] += 1;

        let dispatch = Dispatch::from(self.pool.record_at(target));
        debug!(
            "weighted-round-robin selected server {} (turn {}/{}, load {})",
            dispatch.server_id, self.seen_count[target], dispatch.capacity, dispatch.load
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

    fn policy(capacities: &[u32]) -> WeightedRoundRobin {
        let pool = ServerPool::new(capacities.len(), |id| capacities[id]).unwrap();
        WeightedRoundRobin::new(pool)
    }

    #[test]
    fn bursts_up_to_capacity() {
        let mut wrr = policy(&[2, 3]);

        let picks: Vec<usize> = (0..5).map(|_| wrr.dispatch().server_id).collect();
        assert_eq!(picks, vec![0, 0, 1, 1, 1]);
        assert_eq!(wrr.pool().loads(), vec![2, 3]);
    }

    #[test]
    fn unit_capacities_match_round_robin() {
        let mut wrr = policy(&[1, 1]);

        let picks: Vec<usize> = (0..4).map(|_| wrr.dispatch().server_id).collect();
        assert_eq!(picks, vec![0, 1, 0, 1]);
    }

    #[test]
    fn counter_advances_only_on_exhaustion() {
        let mut wrr = policy(&[3, 1]);

        wrr.dispatch();
        wrr.dispatch();
        assert_eq!(wrr.counter(), 0);
        assert_eq!(wrr.seen_count(0), Some(2));

        wrr.dispatch();
        assert_eq!(wrr.counter(), 0);
        assert_eq!(wrr.seen_count(0), Some(3));

        // quota of server 0 is spent; this call resets it and moves on
        let next = wrr.dispatch();
        assert_eq!(next.server_id, 1);
        assert_eq!(wrr.counter(), 1);
        assert_eq!(wrr.seen_count(0), Some(0));
        assert_eq!(wrr.seen_count(1), Some(1));
    }

    #[test]
    fn wraps_back_to_first_server() {
        let mut wrr = policy(&[1, 2]);

        let picks: Vec<usize> = (0..6).map(|_| wrr.dispatch().server_id).collect();
        assert_eq!(picks, vec![0, 1, 1, 0, 1, 1]);
        assert_eq!(wrr.counter(), 3);
    }

    #[test]
    fn seen_count_out_of_range() {
        let wrr = policy(&[1]);
        assert_eq!(wrr.seen_count(1), None);
    }
}

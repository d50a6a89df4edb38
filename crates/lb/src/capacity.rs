use rand::Rng;
use roundabout_config::config::Capacity;

/// Where each server's capacity comes from when a pool is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapacitySource {
    Fixed(u32),
    // inclusive on both ends
    Random { min: u32, max: u32 },
}

impl CapacitySource {
    pub fn from_config(capacity: &Capacity) -> Result<Self, String> {
        let source = capacity.source.trim().to_lowercase();
        match source.as_str() {
            "fixed" => {
                if capacity.default == 0 {
                    return Err("fixed capacity must be at least 1".to_string());
                }
                Ok(Self::Fixed(capacity.default))
            }
            "random" => {
                if capacity.min == 0 || capacity.min > capacity.max {
                    return Err(format!(
                        "invalid random capacity range {}..={}",
                        capacity.min, capacity.max
                    ));
                }
                Ok(Self::Random {
                    min: capacity.min,
                    max: capacity.max,
                })
            }
            _ => Err(format!("unsupported capacity source: {}", capacity.source)),
        }
    }

    /// Returns a per-server capacity function for [`crate::ServerPool::new`].
    ///
    /// Randomness is drawn from `rng` only, so a seeded generator gives a
    /// reproducible pool.
    pub fn assigner<R: Rng>(self, mut rng: R) -> impl FnMut(usize) -> u32 {
        move |_id| match self {
            CapacitySource::Fixed(capacity) => capacity,
            CapacitySource::Random { min, max } => rng.gen_range(min.min(max)..=min.max(max)),
        }
    }
}

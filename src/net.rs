use std::collections::HashSet;
use std::sync::Mutex;
use std::thread;
use std::time::Duration;

/// Latency simulation hook the contact book calls before each operation.
///
/// A `Some(key)` call models a cacheable read: slow the first time a key is
/// seen, instant afterwards. A `None` call models a mutation: it clears the
/// seen-set (so the next read is slow again) and always delays.
pub trait Network {
    fn simulate(&self, key: Option<&str>);
}

/// Memoizing fake network: uniformly random delay up to `max_delay` on the
/// first access of each key.
pub struct FakeNetwork {
    seen: Mutex<HashSet<String>>,
    max_delay: Duration,
}

/// No-op gate for tests and `--no-delay` runs; every operation is instant.
pub struct NoNetwork;

impl FakeNetwork {
    pub fn new(max_delay: Duration) -> Self {
        Self {
            seen: Mutex::new(HashSet::new()),
            max_delay,
        }
    }

    /// Whether a key has already paid its first-access delay.
    pub fn remembers(&self, key: &str) -> bool {
        self.seen_set().contains(key)
    }

    fn seen_set(&self) -> std::sync::MutexGuard<'_, HashSet<String>> {
        // The set is only a memo; a poisoned lock just loses memoized keys.
        match self.seen.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl Default for FakeNetwork {
    fn default() -> Self {
        Self::new(Duration::from_millis(800))
    }
}

impl Network for FakeNetwork {
    fn simulate(&self, key: Option<&str>) {
        {
            let mut seen = self.seen_set();

            match key {
                None => seen.clear(),
                Some(key) => {
                    if !seen.insert(key.to_string()) {
                        return;
                    }
                }
            }
        }

        thread::sleep(self.max_delay.mul_f64(rand::random::<f64>()));
    }
}

impl Network for NoNetwork {
    fn simulate(&self, _key: Option<&str>) {}
}

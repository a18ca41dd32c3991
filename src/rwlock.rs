use std::any::type_name;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;
use tokio::sync::RwLock;
use tracing::{debug, warn};

// Lock acquisitions slower than this are reported
const SLOW_LOCK_SECS: u64 = 5;

/// Tokio RwLock wrapper that knows the name of the guarded type and reports
/// contended or slow acquisitions.
#[derive(Debug, Default)]
pub struct CustomRwLock<T> {
    name: String,
    lock: RwLock<T>,
    write_locked: AtomicBool,
}

impl<T> CustomRwLock<T> {
    pub fn new(data: T) -> Self {
        Self {
            name: type_name::<T>().to_string(),
            lock: RwLock::new(data),
            write_locked: AtomicBool::new(false),
        }
    }

    pub async fn read(&self) -> tokio::sync::RwLockReadGuard<'_, T> {
        let start = Instant::now();
        if self.write_locked.load(Ordering::SeqCst) {
            debug!(
                "Read lock '{}' is waiting for a write lock to be released",
                self.name
            );
        }
        let guard = self.lock.read().await;
        let duration = start.elapsed();
        if duration.as_secs() > SLOW_LOCK_SECS {
            warn!(
                "Read lock '{}' took too long to acquire: {:?}",
                self.name, duration
            );
        }
        guard
    }

    pub async fn write(&self) -> tokio::sync::RwLockWriteGuard<'_, T> {
        let start = Instant::now();
        if self.write_locked.load(Ordering::SeqCst) {
            debug!(
                "Write lock '{}' requested while another write lock is active",
                self.name
            );
        }
        self.write_locked.store(true, Ordering::SeqCst);
        let guard = self.lock.write().await;
        self.write_locked.store(false, Ordering::SeqCst);
        let duration = start.elapsed();
        if duration.as_secs() > SLOW_LOCK_SECS {
            warn!(
                "Write lock '{}' took too long to acquire: {:?}",
                self.name, duration
            );
        }
        guard
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn read_after_write_sees_the_new_value() {
        let lock = CustomRwLock::new(1u32);
        {
            let mut guard = lock.write().await;
            *guard = 2;
        }
        assert_eq!(*lock.read().await, 2);
    }
}

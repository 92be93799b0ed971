//! Thread pinning for stable timing measurements.
//!
//! Keeps the measuring thread on one core so the scheduler cannot migrate it
//! mid-sample. Real pinning exists only on Linux; elsewhere the guard is a
//! no-op and measurements simply carry more scheduler noise.

#[cfg(target_os = "linux")]
mod platform {
    /// Pin the calling thread to the core it currently runs on.
    pub fn pin_current() -> Option<usize> {
        unsafe {
            let cpu = libc::sched_getcpu();
            let core = if cpu >= 0 { cpu as usize } else { 0 };

            let mut set: libc::cpu_set_t = std::mem::zeroed();
            libc::CPU_ZERO(&mut set);
            libc::CPU_SET(core, &mut set);

            if libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &set) == 0 {
                Some(core)
            } else {
                None
            }
        }
    }

    /// Widen the affinity mask back to every online core.
    pub fn unpin() {
        unsafe {
            let online = libc::sysconf(libc::_SC_NPROCESSORS_ONLN);
            let cores = if online > 0 { online as usize } else { 1 };

            let mut set: libc::cpu_set_t = std::mem::zeroed();
            libc::CPU_ZERO(&mut set);
            for core in 0..cores.min(libc::CPU_SETSIZE as usize) {
                libc::CPU_SET(core, &mut set);
            }
            libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &set);
        }
    }
}

#[cfg(not(target_os = "linux"))]
mod platform {
    pub fn pin_current() -> Option<usize> {
        None
    }

    pub fn unpin() {}
}

/// RAII guard: pins on creation, releases the pin on drop.
pub struct CpuPinGuard {
    core: Option<usize>,
}

impl CpuPinGuard {
    pub fn new() -> Self {
        Self {
            core: platform::pin_current(),
        }
    }

    pub fn core_id(&self) -> Option<usize> {
        self.core
    }

    pub fn is_pinned(&self) -> bool {
        self.core.is_some()
    }
}

impl Drop for CpuPinGuard {
    fn drop(&mut self) {
        if self.core.is_some() {
            platform::unpin();
        }
    }
}

impl Default for CpuPinGuard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_pin_unpin_cycle() {
        let guard = CpuPinGuard::new();
        if guard.is_pinned() {
            assert!(guard.core_id().is_some());
        }
        drop(guard);
    }
}

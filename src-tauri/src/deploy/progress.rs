use std::sync::atomic::{AtomicBool, Ordering};

/// The deploy form's in-progress flag.
#[derive(Debug, Default)]
pub struct DeployProgress {
    active: AtomicBool,
}

impl DeployProgress {
    /// Marks a deployment as in flight. `None` if one already is.
    ///
    /// The flag is cleared when the returned guard drops, on every exit path.
    pub fn begin(&self) -> Option<ProgressGuard<'_>> {
        self.active
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| ProgressGuard { progress: self })
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }
}

#[must_use = "dropping the guard ends the deployment immediately"]
#[derive(Debug)]
pub struct ProgressGuard<'a> {
    progress: &'a DeployProgress,
}

impl Drop for ProgressGuard<'_> {
    fn drop(&mut self) {
        self.progress.active.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_deployment_at_a_time() {
        let progress = DeployProgress::default();
        let guard = progress.begin().unwrap();
        assert!(progress.is_active());
        assert!(progress.begin().is_none());

        drop(guard);
        assert!(!progress.is_active());
        assert!(progress.begin().is_some());
    }

    #[test]
    fn cleared_when_unwinding() {
        let progress = DeployProgress::default();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = progress.begin().unwrap();
            panic!("request blew up");
        }));
        assert!(result.is_err());
        assert!(!progress.is_active());
    }
}

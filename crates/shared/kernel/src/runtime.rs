//! Tokio runtime construction from [`RuntimeConfig`].

use sdui_domain::config::RuntimeConfig;
use std::num::NonZero;
use std::thread::available_parallelism;
use std::time::Duration;
use tokio::runtime::{Builder, Runtime};
use tracing::debug;

/// Used when parallelism detection fails.
const DEFAULT_WORKER_THREADS: usize = 4;
const MIN_STACK_SIZE: usize = 1024 * 1024;
const MAX_STACK_SIZE: usize = 16 * 1024 * 1024;
const MAX_WORKER_THREADS: usize = 1024;
const THREAD_KEEP_ALIVE: Duration = Duration::from_secs(60);

/// Effective runtime parameters after clamping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeProfile {
    pub worker_threads: usize,
    pub stack_size: usize,
    pub thread_name: String,
}

impl RuntimeProfile {
    /// Resolves `auto` worker threads and clamps values into safe bounds.
    #[must_use]
    pub fn from_config(config: &RuntimeConfig) -> Self {
        let worker_threads = config
            .worker_threads
            .unwrap_or_else(|| {
                available_parallelism().map(NonZero::get).unwrap_or(DEFAULT_WORKER_THREADS)
            })
            .clamp(1, MAX_WORKER_THREADS);

        let thread_name = match config.thread_name.trim() {
            "" => "sdui-worker".to_owned(),
            name => name.to_owned(),
        };

        Self {
            worker_threads,
            stack_size: config.stack_size.clamp(MIN_STACK_SIZE, MAX_STACK_SIZE),
            thread_name,
        }
    }
}

/// Builds the multi-threaded runtime the server runs on.
///
/// # Errors
/// Returns the I/O error Tokio reports when the OS refuses the worker threads.
pub fn build_runtime(config: &RuntimeConfig) -> std::io::Result<Runtime> {
    let profile = RuntimeProfile::from_config(config);
    debug!(profile = ?profile, "Building tokio runtime");

    Builder::new_multi_thread()
        .worker_threads(profile.worker_threads)
        .thread_name(&profile.thread_name)
        .thread_stack_size(profile.stack_size)
        .thread_keep_alive(THREAD_KEEP_ALIVE)
        .enable_all()
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_are_clamped() {
        let profile = RuntimeProfile::from_config(&RuntimeConfig {
            worker_threads: Some(5000),
            stack_size: 100,
            thread_name: "  ".to_owned(),
        });
        assert_eq!(profile.worker_threads, MAX_WORKER_THREADS);
        assert_eq!(profile.stack_size, MIN_STACK_SIZE);
        assert_eq!(profile.thread_name, "sdui-worker");
    }

    #[test]
    fn auto_threads_resolve_to_at_least_one() {
        let profile = RuntimeProfile::from_config(&RuntimeConfig::default());
        assert!(profile.worker_threads >= 1);
        assert_eq!(profile.stack_size, 3 * 1024 * 1024);
    }

    #[test]
    fn runtime_executes_work() {
        let runtime = build_runtime(&RuntimeConfig { worker_threads: Some(1), ..RuntimeConfig::default() })
            .expect("runtime builds");
        assert_eq!(runtime.block_on(async { 21 * 2 }), 42);
    }
}

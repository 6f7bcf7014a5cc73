//! Timing scopes for the load and refresh paths.
//!
//! Disabled unless `STOCKLENS_PROFILE=1` (or `true`) is set and [`init`] has
//! been called. Timings are emitted as `tracing` info events on the
//! `stocklens::profile` target; the binaries decide where they go.
//!
//! Durations from [`profile`] are returned either way, so the dashboard can
//! show refresh time without enabling output.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

static PROFILING_ENABLED: AtomicBool = AtomicBool::new(false);

/// Read `STOCKLENS_PROFILE` and enable logging accordingly.
pub fn init() {
    let enabled = std::env::var("STOCKLENS_PROFILE")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    PROFILING_ENABLED.store(enabled, Ordering::Relaxed);
}

#[inline]
pub fn is_enabled() -> bool {
    PROFILING_ENABLED.load(Ordering::Relaxed)
}

/// Logs its lifetime on drop when profiling is enabled.
pub struct ProfileScope {
    name: &'static str,
    start: Instant,
}

impl ProfileScope {
    #[inline]
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            start: Instant::now(),
        }
    }

    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Drop for ProfileScope {
    fn drop(&mut self) {
        if is_enabled() {
            report(self.name, self.start.elapsed());
        }
    }
}

/// Run `f`, returning its result and how long it took.
pub fn profile<F, R>(name: &'static str, f: F) -> (R, Duration)
where
    F: FnOnce() -> R,
{
    let start = Instant::now();
    let result = f();
    let duration = start.elapsed();

    if is_enabled() {
        report(name, duration);
    }

    (result, duration)
}

fn report(name: &str, duration: Duration) {
    tracing::info!(
        target: "stocklens::profile",
        scope = name,
        ms = duration.as_secs_f64() * 1000.0,
        "timing"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    #[test]
    fn profile_returns_closure_result() {
        let (result, _duration) = profile("sum", || (1..=10).sum::<u32>());
        assert_eq!(result, 55);
    }

    #[test]
    fn scope_elapsed_is_monotonic() {
        let scope = ProfileScope::new("scope");
        let first = scope.elapsed();
        let second = scope.elapsed();
        assert!(second >= first);
    }

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Capture {
        type Writer = Capture;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[test]
    fn timings_are_tracing_events() {
        let capture = Capture::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(capture.clone())
            .with_ansi(false)
            .finish();
        tracing::subscriber::with_default(subscriber, || {
            report("pipeline.render", Duration::from_millis(3));
        });

        let out = String::from_utf8(capture.0.lock().unwrap().clone()).unwrap();
        assert!(out.contains("INFO"), "{out}");
        assert!(out.contains("stocklens::profile"), "{out}");
        assert!(out.contains("pipeline.render"), "{out}");
        assert!(out.contains("timing"), "{out}");
    }
}

//! Shared helpers for procrun's integration tests.
//!
//! - [`init_tracing`] installs a process-wide subscriber whose output the
//!   test harness captures.
//! - [`LogCapture`] records formatted events into memory, for tests that
//!   assert on what the runner logged.
//! - [`with_timeout`] turns a hung child process into a test failure.

pub mod builders;
pub mod scripts;

use std::io::Write;
use std::sync::{Arc, Mutex, Once};
use std::time::Duration;

use tracing::subscriber::DefaultGuard;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{EnvFilter, fmt};

static INIT: Once = Once::new();

/// Upper bound for any single process a test runs.
pub const PROCESS_TIMEOUT: Duration = Duration::from_secs(30);

/// Install a global subscriber writing through the test harness.
///
/// `RUST_LOG` overrides the default of `procrun=debug`; run with
/// `-- --nocapture` to see the output of passing tests.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("procrun=debug"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .init();
    });
}

/// Fail the test if `f` doesn't finish within [`PROCESS_TIMEOUT`].
pub async fn with_timeout<F, T>(f: F) -> T
where
    F: std::future::Future<Output = T>,
{
    tokio::time::timeout(PROCESS_TIMEOUT, f)
        .await
        .unwrap_or_else(|_| panic!("no result within {PROCESS_TIMEOUT:?}; child process hung?"))
}

/// In-memory log sink installed as the current thread's default subscriber.
///
/// Only events emitted on the installing thread are recorded, so async tests
/// using it must run on a current-thread runtime (the `#[tokio::test]`
/// default).
pub struct LogCapture {
    buf: Arc<Mutex<Vec<u8>>>,
    _guard: DefaultGuard,
}

impl LogCapture {
    /// Record every event matching `directives` until the capture is dropped.
    pub fn start(directives: &str) -> Self {
        let buf = Arc::new(Mutex::new(Vec::new()));
        let subscriber = fmt()
            .with_env_filter(EnvFilter::new(directives))
            .with_writer(SharedBuf(Arc::clone(&buf)))
            .with_ansi(false)
            .finish();

        Self {
            buf,
            _guard: tracing::subscriber::set_default(subscriber),
        }
    }

    /// Everything logged so far.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buf.lock().unwrap()).into_owned()
    }
}

#[derive(Clone)]
struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl Write for SharedBuf {
    fn write(&mut self, data: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for SharedBuf {
    type Writer = SharedBuf;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

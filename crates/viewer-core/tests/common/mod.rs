// Shared helpers for the viewer-core integration tests.
#![allow(dead_code)]

use instant::Instant;
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::task::{Context, Poll, Wake, Waker};
use std::time::Duration;
use viewer_core::{MemoryStorage, ViewController, ViewerConfig};

pub const EPS: f32 = 1e-4;

pub fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPS
}

pub fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[derive(Default)]
pub struct CountingWake {
    pub wakes: AtomicUsize,
}

impl Wake for CountingWake {
    fn wake(self: Arc<Self>) {
        self.wakes.fetch_add(1, Ordering::SeqCst);
    }
}

impl CountingWake {
    pub fn count(&self) -> usize {
        self.wakes.load(Ordering::SeqCst)
    }
}

/// Poll a future once with the given wake counter.
pub fn poll_with<F: Future + Unpin>(fut: &mut F, wake: &Arc<CountingWake>) -> Poll<F::Output> {
    let waker = Waker::from(wake.clone());
    let mut cx = Context::from_waker(&waker);
    Pin::new(fut).poll(&mut cx)
}

pub fn poll_once<F: Future + Unpin>(fut: &mut F) -> Poll<F::Output> {
    poll_with(fut, &Arc::new(CountingWake::default()))
}

pub fn fresh_controller() -> (ViewController<MemoryStorage>, Instant) {
    init_logging();
    (
        ViewController::new(MemoryStorage::new(), ViewerConfig::default()),
        Instant::now(),
    )
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

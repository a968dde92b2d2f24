//! Time-boxed camera moves driven by the frame clock.
//!
//! At most one tween is in flight. Starting another, or calling
//! [`CameraTweener::cancel`], resolves the previous [`TweenHandle`] with
//! [`TweenOutcome::Cancelled`] and nothing else happens for it.

use crate::pose::{ease_in_out_quad, Pose};
use instant::Instant;
use std::cell::RefCell;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll, Waker};
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TweenOutcome {
    Arrived,
    Cancelled,
}

impl TweenOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            TweenOutcome::Arrived => "arrived",
            TweenOutcome::Cancelled => "cancelled",
        }
    }
}

#[derive(Default)]
struct Completion {
    outcome: Option<TweenOutcome>,
    waker: Option<Waker>,
}

fn resolve(shared: &Rc<RefCell<Completion>>, outcome: TweenOutcome) {
    let waker = {
        let mut c = shared.borrow_mut();
        if c.outcome.is_some() {
            return;
        }
        c.outcome = Some(outcome);
        c.waker.take()
    };
    if let Some(w) = waker {
        w.wake();
    }
}

/// Awaitable end of one camera move. Cloning shares the same completion.
#[derive(Clone)]
pub struct TweenHandle {
    shared: Rc<RefCell<Completion>>,
}

impl TweenHandle {
    fn pending() -> Self {
        Self {
            shared: Rc::new(RefCell::new(Completion::default())),
        }
    }

    /// A handle that is already resolved, for moves that finish on the spot.
    pub fn resolved(outcome: TweenOutcome) -> Self {
        let handle = Self::pending();
        resolve(&handle.shared, outcome);
        handle
    }

    pub fn outcome(&self) -> Option<TweenOutcome> {
        self.shared.borrow().outcome
    }

    pub fn is_finished(&self) -> bool {
        self.outcome().is_some()
    }
}

impl std::fmt::Debug for TweenHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TweenHandle")
            .field("outcome", &self.outcome())
            .finish()
    }
}

impl Future for TweenHandle {
    type Output = TweenOutcome;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<TweenOutcome> {
        let mut c = self.shared.borrow_mut();
        match c.outcome {
            Some(outcome) => Poll::Ready(outcome),
            None => {
                c.waker = Some(cx.waker().clone());
                Poll::Pending
            }
        }
    }
}

struct Tween {
    start: Pose,
    end: Pose,
    started_at: Instant,
    duration: Duration,
    completion: Rc<RefCell<Completion>>,
}

/// Result of advancing the tweener by one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TweenStep {
    Idle,
    Moving,
    Arrived,
}

#[derive(Default)]
pub struct CameraTweener {
    active: Option<Tween>,
}

impl CameraTweener {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin moving `camera` to `end`. A zero duration places the camera at
    /// `end` right away and returns an already-arrived handle.
    pub fn start(
        &mut self,
        camera: &mut Pose,
        end: Pose,
        duration: Duration,
        now: Instant,
    ) -> TweenHandle {
        self.cancel();
        if duration.is_zero() {
            *camera = end;
            return TweenHandle::resolved(TweenOutcome::Arrived);
        }
        let handle = TweenHandle::pending();
        log::debug!("[tween] start {:?} over {}ms", end, duration.as_millis());
        self.active = Some(Tween {
            start: *camera,
            end,
            started_at: now,
            duration,
            completion: handle.shared.clone(),
        });
        handle
    }

    /// Drop the in-flight tween, if any, resolving its handle as cancelled.
    /// Returns whether something was cancelled.
    pub fn cancel(&mut self) -> bool {
        match self.active.take() {
            Some(tween) => {
                log::debug!("[tween] cancelled before reaching {:?}", tween.end);
                resolve(&tween.completion, TweenOutcome::Cancelled);
                true
            }
            None => false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Write the pose for `now` into `camera`.
    pub fn step(&mut self, camera: &mut Pose, now: Instant) -> TweenStep {
        let Some(tween) = &self.active else {
            return TweenStep::Idle;
        };
        let elapsed = if now > tween.started_at {
            now - tween.started_at
        } else {
            Duration::ZERO
        };
        let t = (elapsed.as_secs_f32() / tween.duration.as_secs_f32()).min(1.0);
        if t < 1.0 {
            *camera = tween.start.lerp(&tween.end, ease_in_out_quad(t));
            return TweenStep::Moving;
        }
        *camera = tween.end;
        if let Some(done) = self.active.take() {
            log::debug!("[tween] arrived at {:?}", done.end);
            resolve(&done.completion, TweenOutcome::Arrived);
        }
        TweenStep::Arrived
    }
}

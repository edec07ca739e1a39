//! Frame clock for the backdrop surface.
//!
//! The clock is mounted together with the rendering surface and reports
//! elapsed seconds since mount on every tick. Unmounting stops it for good;
//! after that every tick yields `None` and the host loop must stop scheduling
//! frames. A suspended clock also yields `None` but can be resumed, for pages
//! parked in the back/forward cache.

use instant::Instant;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameTime {
    /// Seconds since the surface was mounted, never decreasing.
    pub elapsed: f32,
}

#[derive(Debug)]
pub struct AnimationClock {
    mounted_at: Instant,
    last: Duration,
    frames: u64,
    mounted: bool,
    suspended: bool,
}

impl AnimationClock {
    pub fn mount() -> Self {
        Self::mount_at(Instant::now())
    }

    pub fn mount_at(now: Instant) -> Self {
        Self {
            mounted_at: now,
            last: Duration::ZERO,
            frames: 0,
            mounted: true,
            suspended: false,
        }
    }

    pub fn tick(&mut self) -> Option<FrameTime> {
        self.tick_at(Instant::now())
    }

    /// Advance to `now`. Instants earlier than the previous tick are treated
    /// as the previous tick so `elapsed` stays monotonic.
    pub fn tick_at(&mut self, now: Instant) -> Option<FrameTime> {
        if !self.is_running() {
            return None;
        }
        let since_mount = now.saturating_duration_since(self.mounted_at).max(self.last);
        self.last = since_mount;
        self.frames += 1;
        Some(FrameTime {
            elapsed: since_mount.as_secs_f32(),
        })
    }

    pub fn unmount(&mut self) {
        if self.mounted {
            log::info!("[clock] unmounted after {} frames", self.frames);
        }
        self.mounted = false;
    }

    /// Stop ticking without unmounting. Returns whether anything changed.
    pub fn suspend(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.suspended = true;
        log::info!("[clock] suspended after {} frames", self.frames);
        true
    }

    /// Undo [`suspend`](Self::suspend). Elapsed time keeps counting from the
    /// original mount, so the field picks up where wall-clock time is now.
    /// An unmounted clock stays stopped.
    pub fn resume(&mut self) -> bool {
        if !self.mounted || !self.suspended {
            return false;
        }
        self.suspended = false;
        log::info!("[clock] resumed");
        true
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn is_running(&self) -> bool {
        self.mounted && !self.suspended
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

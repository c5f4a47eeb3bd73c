//! Edge-triggered pass scheduling.
//!
//! Configuration mutations never do work inline. They arm one of two flags,
//! `needs_rebuild` or `needs_recolor`, and only the transition from unarmed
//! to armed queues a pass. Any number of mutations within one turn of the
//! host event loop therefore collapse into at most one pass of each kind,
//! and that pass reads the configuration as it is when it runs.
//!
//! A pass clears its own flag just before it runs, so a mutation made while
//! the pass executes re-arms the flag and queues a fresh pass for the next
//! turn.
//!
//! Every rebuild ends with a recolor, so when both flags are armed the
//! rebuild is taken first and clears the recolor flag with its own.

use std::fmt;

use crate::log::debug;

/// Deferred work on a step progress container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pass {
    /// Tear down and rebuild every node, then recolor
    Rebuild,
    /// Repaint existing nodes
    Recolor,
}

/// Called once per newly armed pass so the host can schedule a turn
pub type WakeFn = Box<dyn FnMut(Pass)>;

#[derive(Default)]
pub struct PassScheduler {
    needs_rebuild: bool,
    needs_recolor: bool,
    wake: Option<WakeFn>,
}

impl fmt::Debug for PassScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PassScheduler")
            .field("needs_rebuild", &self.needs_rebuild)
            .field("needs_recolor", &self.needs_recolor)
            .field("wake", &self.wake.is_some())
            .finish()
    }
}

impl PassScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the host wake hook, replacing any previous one.
    pub fn set_wake(&mut self, wake: impl FnMut(Pass) + 'static) {
        self.wake = Some(Box::new(wake));
    }

    fn flag_mut(&mut self, pass: Pass) -> &mut bool {
        match pass {
            Pass::Rebuild => &mut self.needs_rebuild,
            Pass::Recolor => &mut self.needs_recolor,
        }
    }

    /// Arm `pass`. Returns `true` when this call queued it, `false` when it
    /// was already pending and the request was coalesced.
    pub fn request(&mut self, pass: Pass) -> bool {
        let flag = self.flag_mut(pass);
        if *flag {
            debug!(?pass, "coalesced into pending pass");
            return false;
        }
        *flag = true;
        debug!(?pass, "pass scheduled");
        if let Some(wake) = self.wake.as_mut() {
            wake(pass);
        }
        true
    }

    pub fn is_pending(&self, pass: Pass) -> bool {
        match pass {
            Pass::Rebuild => self.needs_rebuild,
            Pass::Recolor => self.needs_recolor,
        }
    }

    pub fn is_idle(&self) -> bool {
        !self.needs_rebuild && !self.needs_recolor
    }

    /// Number of passes armed right now
    pub fn queued(&self) -> usize {
        usize::from(self.needs_rebuild) + usize::from(self.needs_recolor)
    }

    /// Disarm and return the next pass. An armed rebuild goes first and
    /// absorbs an armed recolor.
    pub fn take_next(&mut self) -> Option<Pass> {
        if self.needs_rebuild {
            if self.needs_recolor {
                debug!("recolor absorbed by rebuild");
            }
            self.needs_rebuild = false;
            self.needs_recolor = false;
            Some(Pass::Rebuild)
        } else if self.needs_recolor {
            self.needs_recolor = false;
            Some(Pass::Recolor)
        } else {
            None
        }
    }
}

/// Executed pass counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PassStats {
    pub rebuilds: usize,
    /// Standalone recolor passes. The recolor at the end of a rebuild, and
    /// any recolor it absorbed, count as part of the rebuild
    pub recolors: usize,
}

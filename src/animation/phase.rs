use crate::{
    animation::ease::Ease,
    foundation::error::{BloomError, BloomResult},
};

/// One named, timed segment of a multi-step animation.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct PhaseSpec {
    /// Phase identifier, e.g. `"expanding"`.
    pub name: String,
    /// Phase length in seconds. Negative values are clamped to zero.
    pub duration_secs: f64,
    /// Easing curve applied to this phase's progress.
    pub ease: Ease,
}

impl PhaseSpec {
    /// Build a phase spec.
    pub fn new(name: impl Into<String>, duration_secs: f64, ease: Ease) -> Self {
        Self {
            name: name.into(),
            duration_secs,
            ease,
        }
    }
}

/// Whether the machine stops at the terminal phase or loops forever.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum PhaseRun {
    /// Advance through each phase once, then report finished.
    Once,
    /// Wrap back to the first phase after the last; never finishes on its own.
    Cycle,
}

/// Snapshot of the machine for one tick, fed to a renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhaseSample {
    /// Index of the phase this sample belongs to.
    pub phase_index: usize,
    /// Linear progress through the phase in `[0, 1]`.
    pub progress: f64,
    /// Progress after the phase's easing curve.
    pub eased: f64,
    /// True on the first sample of a phase.
    pub just_entered: bool,
    /// True once a `Once` machine has left its terminal phase.
    pub finished: bool,
}

/// Ordered sequence of timed phases advanced by wall-clock elapsed time.
///
/// The caller owns the clock: every tick it passes total elapsed seconds
/// since the machine started and receives the sample to render. A phase with
/// zero duration yields exactly one sample at `progress = 1` before the
/// machine moves on, so no phase ever skips its render call.
#[derive(Clone, Debug)]
pub struct PhaseMachine {
    specs: Vec<PhaseSpec>,
    run: PhaseRun,
    current: usize,
    entered_at: f64,
    entered_this_tick: bool,
    finished: bool,
}

impl PhaseMachine {
    /// Build a machine from an ordered, non-empty phase list.
    pub fn new(specs: Vec<PhaseSpec>, run: PhaseRun) -> BloomResult<Self> {
        if specs.is_empty() {
            return Err(BloomError::validation("phase list must be non-empty"));
        }
        let specs = specs
            .into_iter()
            .map(|mut s| {
                s.duration_secs = s.duration_secs.max(0.0);
                s
            })
            .collect();
        Ok(Self {
            specs,
            run,
            current: 0,
            entered_at: 0.0,
            entered_this_tick: true,
            finished: false,
        })
    }

    /// Name of the phase at `index`, if it exists.
    pub fn phase_name(&self, index: usize) -> Option<&str> {
        self.specs.get(index).map(|s| s.name.as_str())
    }

    /// Index of the current phase.
    pub fn current_phase(&self) -> usize {
        self.current
    }

    /// True once a `Once` machine has completed its terminal phase.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advance to `elapsed_secs` (total seconds since start) and sample.
    ///
    /// Phase entry timestamps accumulate configured durations exactly, so the
    /// time spent across all non-terminal phases matches their configured
    /// durations to within one tick.
    pub fn tick(&mut self, elapsed_secs: f64) -> PhaseSample {
        if self.finished {
            let last = self.specs.len() - 1;
            return PhaseSample {
                phase_index: last,
                progress: 1.0,
                eased: self.specs[last].ease.apply(1.0),
                just_entered: false,
                finished: true,
            };
        }

        let spec = &self.specs[self.current];
        let duration = spec.duration_secs;
        let progress = if duration <= 0.0 {
            1.0
        } else {
            ((elapsed_secs - self.entered_at) / duration).clamp(0.0, 1.0)
        };

        let sample = PhaseSample {
            phase_index: self.current,
            progress,
            eased: spec.ease.apply(progress),
            just_entered: self.entered_this_tick,
            finished: false,
        };
        self.entered_this_tick = false;

        if progress >= 1.0 {
            self.advance();
        }
        sample
    }

    fn advance(&mut self) {
        // Credit exactly the configured duration so per-phase accounting
        // never drifts by partial-frame remainders.
        self.entered_at += self.specs[self.current].duration_secs;
        self.entered_this_tick = true;
        if self.current + 1 < self.specs.len() {
            self.current += 1;
        } else {
            match self.run {
                PhaseRun::Once => self.finished = true,
                PhaseRun::Cycle => self.current = 0,
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/phase.rs"]
mod tests;

//! Playback controls for a precomputed step trace.

use std::time::Duration;

use algostory_steps::{Step, Trace};
use serde::{Deserialize, Serialize};

/// Playback speed multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaybackSpeed {
    /// 0.25x speed
    Quarter,
    /// 0.5x speed
    Half,
    /// Normal speed (1x)
    #[default]
    Normal,
    /// 2x speed
    Double,
    /// 4x speed
    Quadruple,
}

impl PlaybackSpeed {
    /// Get the speed multiplier.
    pub fn multiplier(&self) -> f64 {
        match self {
            PlaybackSpeed::Quarter => 0.25,
            PlaybackSpeed::Half => 0.5,
            PlaybackSpeed::Normal => 1.0,
            PlaybackSpeed::Double => 2.0,
            PlaybackSpeed::Quadruple => 4.0,
        }
    }

    /// Tick interval at this speed for a given base interval.
    pub fn interval(&self, base: Duration) -> Duration {
        base.div_f64(self.multiplier())
    }

    /// Parse the names used in configuration ("half", "2x", ...).
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "quarter" | "0.25x" => Some(PlaybackSpeed::Quarter),
            "half" | "0.5x" => Some(PlaybackSpeed::Half),
            "normal" | "1x" => Some(PlaybackSpeed::Normal),
            "double" | "2x" => Some(PlaybackSpeed::Double),
            "quadruple" | "4x" => Some(PlaybackSpeed::Quadruple),
            _ => None,
        }
    }
}

/// Current state of playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaybackState {
    /// Playback is at the beginning and idle
    Stopped,
    /// Playback is advancing on every tick
    Playing,
    /// Playback is held mid-trace
    Paused,
    /// The cursor reached the last step
    Finished,
}

/// Cursor over a fixed trace with transport controls.
///
/// The cursor is always a valid index, and the controller is only ever
/// `Playing` while there is a step left to advance to.
#[derive(Debug, Clone)]
pub struct Playback<S> {
    trace: Trace<S>,
    cursor: usize,
    state: PlaybackState,
    speed: PlaybackSpeed,
}

impl<S> Playback<S> {
    /// Create a new playback controller.
    pub fn new(trace: Trace<S>) -> Self {
        Self {
            trace,
            cursor: 0,
            state: PlaybackState::Stopped,
            speed: PlaybackSpeed::Normal,
        }
    }

    /// Get the current step index.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Get the number of steps.
    pub fn total(&self) -> usize {
        self.trace.len()
    }

    fn last_index(&self) -> usize {
        self.trace.len() - 1
    }

    /// Get the current playback state.
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Whether ticks currently advance the cursor.
    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    /// Whether the cursor sits on the last step.
    pub fn at_end(&self) -> bool {
        self.cursor == self.last_index()
    }

    /// Get the current playback speed.
    pub fn speed(&self) -> PlaybackSpeed {
        self.speed
    }

    /// The whole trace.
    pub fn trace(&self) -> &Trace<S> {
        &self.trace
    }

    /// The step under the cursor.
    pub fn current_step(&self) -> &Step<S> {
        &self.trace[self.cursor]
    }

    /// Start playback, rewinding first if already at the end.
    pub fn play(&mut self) {
        if self.at_end() {
            self.cursor = 0;
        }
        self.state = PlaybackState::Playing;
        // A one-step trace has nothing to advance to.
        if self.at_end() {
            self.state = PlaybackState::Finished;
        }
    }

    /// Pause playback.
    pub fn pause(&mut self) {
        if self.is_playing() {
            self.state = PlaybackState::Paused;
        }
    }

    /// Stop playback and return to the first step.
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.state = PlaybackState::Stopped;
    }

    /// Advance one step if playing. Returns whether the cursor moved.
    pub fn tick(&mut self) -> bool {
        if !self.is_playing() || self.at_end() {
            return false;
        }
        self.cursor += 1;
        if self.at_end() {
            self.state = PlaybackState::Finished;
        }
        true
    }

    /// Move the cursor to `index`, clamped to the trace.
    ///
    /// The play state is kept, except that landing on the last step while
    /// playing finishes playback.
    pub fn jump_to(&mut self, index: usize) -> usize {
        self.cursor = index.min(self.last_index());
        if self.at_end() && self.is_playing() {
            self.state = PlaybackState::Finished;
        }
        self.cursor
    }

    /// Step forward one step and hold there.
    pub fn step_forward(&mut self) -> Option<&Step<S>> {
        if self.at_end() {
            return None;
        }
        self.cursor += 1;
        self.state = if self.at_end() {
            PlaybackState::Finished
        } else {
            PlaybackState::Paused
        };
        Some(self.current_step())
    }

    /// Step backward one step and hold there.
    pub fn step_backward(&mut self) -> Option<&Step<S>> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        self.state = PlaybackState::Paused;
        Some(self.current_step())
    }

    /// Set playback speed.
    pub fn set_speed(&mut self, speed: PlaybackSpeed) {
        self.speed = speed;
    }

    /// Calculate progress through the trace (0.0 - 1.0).
    pub fn progress(&self) -> f64 {
        if self.last_index() == 0 {
            1.0
        } else {
            self.cursor as f64 / self.last_index() as f64
        }
    }

    /// Status for the render layer.
    pub fn status(&self) -> PlaybackStatus {
        PlaybackStatus::from(self)
    }
}

impl<S: Clone> Playback<S> {
    /// Current step plus status, owned, for publishing.
    pub fn frame(&self) -> Frame<S> {
        Frame {
            step: self.current_step().clone(),
            status: self.status(),
        }
    }
}

/// Playback status for sending to the render layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybackStatus {
    pub cursor: usize,
    pub total: usize,
    pub is_playing: bool,
    pub state: PlaybackState,
    pub speed: PlaybackSpeed,
    pub progress: f64,
}

impl<S> From<&Playback<S>> for PlaybackStatus {
    fn from(playback: &Playback<S>) -> Self {
        Self {
            cursor: playback.cursor,
            total: playback.total(),
            is_playing: playback.is_playing(),
            state: playback.state,
            speed: playback.speed,
            progress: playback.progress(),
        }
    }
}

/// What the render layer draws on each tick.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame<S> {
    pub step: Step<S>,
    pub status: PlaybackStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use algostory_steps::{Action, Outcome};

    fn make_trace(count: usize) -> Trace<usize> {
        let mut steps: Vec<Step<usize>> = (0..count - 1)
            .map(|i| Step::new(i, Action::Compare, format!("step {i}")))
            .collect();
        steps.push(Step::new(count - 1, Action::Done(Outcome::Sorted), "done"));
        Trace::new(steps).unwrap()
    }

    #[test]
    fn playback_starts_at_zero() {
        let playback = Playback::new(make_trace(10));
        assert_eq!(playback.cursor(), 0);
        assert_eq!(playback.state(), PlaybackState::Stopped);
        assert!(!playback.is_playing());
    }

    #[test]
    fn ticks_reach_the_end_and_stop() {
        for n in 1..8 {
            let mut playback = Playback::new(make_trace(n));
            playback.play();
            for _ in 0..n - 1 {
                assert!(playback.tick());
            }
            assert_eq!(playback.cursor(), n - 1);
            assert!(!playback.is_playing());
            assert!(!playback.tick());
            assert_eq!(playback.cursor(), n - 1);
        }
    }

    #[test]
    fn ticks_visit_every_step_in_order() {
        let mut playback = Playback::new(make_trace(6));
        playback.play();
        let mut seen = vec![playback.current_step().sequence];
        while playback.tick() {
            seen.push(playback.current_step().sequence);
        }
        assert_eq!(seen, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn tick_does_nothing_unless_playing() {
        let mut playback = Playback::new(make_trace(5));
        assert!(!playback.tick());
        assert_eq!(playback.cursor(), 0);
    }

    #[test]
    fn play_at_end_restarts() {
        let mut playback = Playback::new(make_trace(4));
        playback.jump_to(3);
        playback.play();
        assert_eq!(playback.cursor(), 0);
        assert!(playback.is_playing());
    }

    #[test]
    fn single_step_play_finishes_immediately() {
        let mut playback = Playback::new(make_trace(1));
        playback.play();
        assert!(!playback.is_playing());
        assert_eq!(playback.state(), PlaybackState::Finished);
        assert_eq!(playback.progress(), 1.0);
    }

    #[test]
    fn reset_from_any_state() {
        let mut playback = Playback::new(make_trace(5));
        playback.play();
        playback.tick();
        playback.tick();
        playback.reset();
        assert_eq!(playback.cursor(), 0);
        assert!(!playback.is_playing());

        playback.jump_to(4);
        playback.reset();
        assert_eq!(playback.cursor(), 0);
        assert_eq!(playback.state(), PlaybackState::Stopped);
    }

    #[test]
    fn pause_is_idempotent() {
        let mut playback = Playback::new(make_trace(5));
        playback.play();
        playback.tick();

        playback.pause();
        let once = playback.status();
        playback.pause();
        assert_eq!(playback.status(), once);
        assert_eq!(once.cursor, 1);
        assert!(!once.is_playing);
    }

    #[test]
    fn jump_clamps_to_bounds() {
        let mut playback = Playback::new(make_trace(10));

        assert_eq!(playback.jump_to(5), 5);
        assert_eq!(playback.jump_to(100), 9);
        assert_eq!(playback.jump_to(0), 0);
    }

    #[test]
    fn jump_keeps_play_state_until_the_end() {
        let mut playback = Playback::new(make_trace(10));
        playback.play();
        playback.jump_to(4);
        assert!(playback.is_playing());

        playback.jump_to(9);
        assert!(!playback.is_playing());
        assert_eq!(playback.state(), PlaybackState::Finished);
    }

    #[test]
    fn manual_stepping() {
        let mut playback = Playback::new(make_trace(3));
        assert!(playback.step_backward().is_none());

        assert_eq!(playback.step_forward().map(|s| s.sequence), Some(1));
        assert_eq!(playback.state(), PlaybackState::Paused);
        assert_eq!(playback.step_forward().map(|s| s.sequence), Some(2));
        assert_eq!(playback.state(), PlaybackState::Finished);
        assert!(playback.step_forward().is_none());

        assert_eq!(playback.step_backward().map(|s| s.sequence), Some(1));
        assert_eq!(playback.state(), PlaybackState::Paused);
    }

    #[test]
    fn progress_calculation() {
        let mut playback = Playback::new(make_trace(5));
        assert_eq!(playback.progress(), 0.0);
        playback.jump_to(2);
        assert_eq!(playback.progress(), 0.5);
        playback.jump_to(4);
        assert_eq!(playback.progress(), 1.0);
    }

    #[test]
    fn speed_intervals() {
        let base = Duration::from_millis(1000);
        assert_eq!(PlaybackSpeed::Normal.interval(base), base);
        assert_eq!(PlaybackSpeed::Double.interval(base), Duration::from_millis(500));
        assert_eq!(PlaybackSpeed::Half.interval(base), Duration::from_millis(2000));
        assert_eq!(PlaybackSpeed::parse("4x"), Some(PlaybackSpeed::Quadruple));
        assert_eq!(PlaybackSpeed::parse(" Quarter "), Some(PlaybackSpeed::Quarter));
        assert_eq!(PlaybackSpeed::parse("warp"), None);
    }

    #[test]
    fn status_conversion() {
        let mut playback = Playback::new(make_trace(10));
        playback.jump_to(3);
        playback.set_speed(PlaybackSpeed::Double);

        let status: PlaybackStatus = (&playback).into();
        assert_eq!(status.cursor, 3);
        assert_eq!(status.total, 10);
        assert_eq!(status.speed, PlaybackSpeed::Double);
    }

    #[test]
    fn trace_is_untouched_by_playback() {
        let mut playback = Playback::new(make_trace(4));
        playback.play();
        playback.tick();
        playback.step_backward();

        assert_eq!(playback.trace().len(), playback.total());
        assert_eq!(playback.trace().initial().sequence, 0);
        assert_eq!(playback.trace().outcome(), Outcome::Sorted);
    }

    #[test]
    fn frame_serialization() {
        let playback = Playback::new(make_trace(3));
        let json = serde_json::to_string(&playback.frame()).unwrap();
        assert!(json.contains("\"cursor\":0"));
        assert!(json.contains("\"total\":3"));
        assert!(json.contains("\"is_playing\":false"));
    }
}

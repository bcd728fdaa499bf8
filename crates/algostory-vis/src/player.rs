//! Timer-driven playback.
//!
//! A [`Player`] owns a [`Playback`] behind a lock and, while playing, one
//! ticker task that advances it on a fixed interval and publishes every
//! [`Frame`] on a watch channel. Control calls stop the ticker before they
//! touch the cursor, so a tick scheduled under the old state never lands.

use std::sync::Arc;
use std::time::Duration;

use algostory_steps::Trace;
use tokio::sync::{watch, RwLock};
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::playback::{Frame, Playback, PlaybackSpeed, PlaybackStatus};

/// Drives a [`Playback`] from a tokio timer.
pub struct Player<S> {
    playback: Arc<RwLock<Playback<S>>>,
    frames: Arc<watch::Sender<Frame<S>>>,
    base_interval: Duration,
    ticker: Option<JoinHandle<()>>,
}

impl<S> Player<S>
where
    S: Clone + Send + Sync + 'static,
{
    /// Create a stopped player over `trace`.
    pub fn new(trace: Trace<S>, base_interval: Duration) -> Self {
        Self::from_playback(Playback::new(trace), base_interval)
    }

    /// Wrap an already configured controller.
    pub fn from_playback(playback: Playback<S>, base_interval: Duration) -> Self {
        let (frames, _) = watch::channel(playback.frame());
        Self {
            playback: Arc::new(RwLock::new(playback)),
            frames: Arc::new(frames),
            base_interval,
            ticker: None,
        }
    }

    /// Receive a frame every time the cursor or play state changes.
    pub fn subscribe(&self) -> watch::Receiver<Frame<S>> {
        self.frames.subscribe()
    }

    /// Interval between ticks at normal speed.
    pub fn base_interval(&self) -> Duration {
        self.base_interval
    }

    pub async fn status(&self) -> PlaybackStatus {
        self.playback.read().await.status()
    }

    pub async fn frame(&self) -> Frame<S> {
        self.playback.read().await.frame()
    }

    /// Start playing, rewinding first if the cursor is on the last step.
    pub async fn play(&mut self) {
        self.halt().await;
        let playing = {
            let mut playback = self.playback.write().await;
            playback.play();
            self.frames.send_replace(playback.frame());
            info!(cursor = playback.cursor(), total = playback.total(), "playback started");
            playback.is_playing()
        };
        if playing {
            self.spawn_ticker();
        }
    }

    pub async fn pause(&mut self) {
        self.halt().await;
        let mut playback = self.playback.write().await;
        playback.pause();
        self.frames.send_replace(playback.frame());
    }

    /// Stop and return to the first step.
    pub async fn reset(&mut self) {
        self.halt().await;
        let mut playback = self.playback.write().await;
        playback.reset();
        self.frames.send_replace(playback.frame());
    }

    /// Move the cursor, keeping the play state.
    pub async fn jump_to(&mut self, index: usize) -> usize {
        self.halt().await;
        let (cursor, playing) = {
            let mut playback = self.playback.write().await;
            let cursor = playback.jump_to(index);
            self.frames.send_replace(playback.frame());
            (cursor, playback.is_playing())
        };
        if playing {
            self.spawn_ticker();
        }
        cursor
    }

    /// Pause and advance one step. Returns whether the cursor moved.
    pub async fn step_forward(&mut self) -> bool {
        self.halt().await;
        let mut playback = self.playback.write().await;
        let moved = playback.step_forward().is_some();
        self.frames.send_replace(playback.frame());
        moved
    }

    /// Pause and go back one step. Returns whether the cursor moved.
    pub async fn step_backward(&mut self) -> bool {
        self.halt().await;
        let mut playback = self.playback.write().await;
        let moved = playback.step_backward().is_some();
        self.frames.send_replace(playback.frame());
        moved
    }

    /// Change speed; a running ticker restarts at the new interval.
    pub async fn set_speed(&mut self, speed: PlaybackSpeed) {
        self.halt().await;
        let playing = {
            let mut playback = self.playback.write().await;
            playback.set_speed(speed);
            self.frames.send_replace(playback.frame());
            playback.is_playing()
        };
        if playing {
            self.spawn_ticker();
        }
    }

    fn spawn_ticker(&mut self) {
        let playback = self.playback.clone();
        let frames = self.frames.clone();
        let base = self.base_interval;
        self.ticker = Some(tokio::spawn(run_ticker(playback, frames, base)));
    }

    /// Abort the ticker and wait until it is gone.
    async fn halt(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.abort();
            let _ = ticker.await;
        }
    }
}

impl<S> Drop for Player<S> {
    fn drop(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.abort();
        }
    }
}

async fn run_ticker<S: Clone>(
    playback: Arc<RwLock<Playback<S>>>,
    frames: Arc<watch::Sender<Frame<S>>>,
    base: Duration,
) {
    loop {
        let interval = playback.read().await.speed().interval(base);
        tokio::time::sleep(interval).await;

        let mut state = playback.write().await;
        if !state.tick() {
            break;
        }
        debug!(cursor = state.cursor(), action = %state.current_step().action, "tick");
        frames.send_replace(state.frame());

        if !state.is_playing() {
            info!(total = state.total(), "playback finished");
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playback::PlaybackState;
    use algostory_steps::{Action, Outcome, Step};
    use tokio::time::Instant;

    const BASE: Duration = Duration::from_millis(100);

    fn make_trace(count: usize) -> Trace<usize> {
        let mut steps: Vec<Step<usize>> = (0..count - 1)
            .map(|i| Step::new(i, Action::Compare, format!("step {i}")))
            .collect();
        steps.push(Step::new(count - 1, Action::Done(Outcome::Sorted), "done"));
        Trace::new(steps).unwrap()
    }

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::new("debug"))
            .with_test_writer()
            .try_init();
    }

    #[tokio::test(start_paused = true)]
    async fn plays_to_the_end() {
        init_tracing();
        let mut player = Player::new(make_trace(5), BASE);
        let mut frames = player.subscribe();
        let started = Instant::now();

        player.play().await;
        let mut cursors = Vec::new();
        loop {
            frames.changed().await.unwrap();
            let frame = frames.borrow_and_update().clone();
            cursors.push(frame.status.cursor);
            if frame.status.state == PlaybackState::Finished {
                break;
            }
        }

        // The first frame is the play() acknowledgement.
        assert_eq!(cursors, vec![0, 1, 2, 3, 4]);
        assert_eq!(started.elapsed(), BASE * 4);
        assert!(!player.status().await.is_playing);
    }

    #[tokio::test(start_paused = true)]
    async fn pause_stops_ticks() {
        let mut player = Player::new(make_trace(10), BASE);
        player.play().await;

        tokio::time::sleep(BASE + BASE / 2).await;
        player.pause().await;
        assert_eq!(player.status().await.cursor, 1);

        tokio::time::sleep(BASE * 20).await;
        let status = player.status().await;
        assert_eq!(status.cursor, 1);
        assert_eq!(status.state, PlaybackState::Paused);
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_player_cancels_ticks() {
        let mut player = Player::new(make_trace(10), BASE);
        let mut frames = player.subscribe();
        player.play().await;
        assert_eq!(frames.borrow_and_update().status.cursor, 0);

        drop(player);
        tokio::time::sleep(BASE * 10).await;

        assert!(frames.has_changed().is_err());
        assert!(frames.changed().await.is_err());
        assert_eq!(frames.borrow().status.cursor, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn reset_cancels_pending_tick() {
        let mut player = Player::new(make_trace(10), BASE);
        player.play().await;
        tokio::time::sleep(BASE * 3 + BASE / 2).await;

        player.reset().await;
        tokio::time::sleep(BASE * 5).await;

        let status = player.status().await;
        assert_eq!(status.cursor, 0);
        assert_eq!(status.state, PlaybackState::Stopped);
    }

    #[tokio::test(start_paused = true)]
    async fn speed_change_rescales_interval() {
        let mut player = Player::new(make_trace(10), BASE);
        player.set_speed(PlaybackSpeed::Double).await;
        player.play().await;

        tokio::time::sleep(BASE * 2 + BASE / 4).await;
        assert_eq!(player.status().await.cursor, 4);

        player.set_speed(PlaybackSpeed::Half).await;
        tokio::time::sleep(BASE * 2 + BASE / 2).await;
        assert_eq!(player.status().await.cursor, 5);
    }

    #[tokio::test(start_paused = true)]
    async fn jump_while_playing_keeps_playing() {
        let mut player = Player::new(make_trace(10), BASE);
        player.play().await;

        assert_eq!(player.jump_to(7).await, 7);
        tokio::time::sleep(BASE + BASE / 2).await;
        assert_eq!(player.status().await.cursor, 8);

        assert_eq!(player.jump_to(50).await, 9);
        assert_eq!(player.status().await.state, PlaybackState::Finished);
    }

    #[tokio::test(start_paused = true)]
    async fn single_step_trace_never_ticks() {
        let mut player = Player::new(make_trace(1), BASE);
        player.play().await;
        tokio::time::sleep(BASE * 5).await;

        let status = player.status().await;
        assert_eq!(status.cursor, 0);
        assert_eq!(status.state, PlaybackState::Finished);
    }

    #[test]
    fn manual_stepping_without_timer() {
        tokio_test::block_on(async {
            let mut player = Player::new(make_trace(3), BASE);
            let frames = player.subscribe();

            assert!(player.step_forward().await);
            assert!(player.step_forward().await);
            assert!(!player.step_forward().await);
            assert_eq!(frames.borrow().status.cursor, 2);

            assert!(player.step_backward().await);
            assert_eq!(player.frame().await.step.sequence, 1);
            assert_eq!(player.jump_to(0).await, 0);
            assert_eq!(player.status().await.state, PlaybackState::Paused);
        });
    }
}

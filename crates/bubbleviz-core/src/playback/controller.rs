//! Playback controller state machine
//!
//! A tick runs: highlight the next pair → wait → step → (if swapped: animate
//! the swap → wait) → clear the highlight → start the next tick if still
//! running. Pausing is cooperative and only takes effect at tick boundaries,
//! so a tick that has started always completes its comparison. Reset is the
//! one preemptive operation: it drops the in-flight tick and its timer.

use std::time::Duration;

use crate::config::VisualizerConfig;
use crate::engine::SortEngine;
use crate::render::{Highlight, Renderer, Transition};

use super::error::{PlaybackError, PlaybackResult};

/// Identity of one armed timer
///
/// Tokens are never reused, so a timer that fires after a reset can be told
/// apart from the one the controller is waiting for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken(u64);

/// A suspension point the caller must turn into a real timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wait {
    /// Pass back to [`PlaybackController::on_timer`] once `delay` has elapsed
    pub token: TimerToken,
    pub delay: Duration,
}

/// Externally visible playback state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    /// Nothing in flight; stepping is allowed
    #[default]
    Idle,
    /// Autoplay on, exactly one tick in flight
    Running,
    /// Autoplay off, but a tick (paused mid-wait, or a manual step) is
    /// still completing
    Finishing,
}

/// Where the in-flight tick currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TickPhase {
    /// Pair highlighted, waiting before the comparison
    Comparing { pair: (usize, usize) },
    /// Pair swapped and animating, waiting before the highlight clears
    Swapping { pair: (usize, usize) },
}

/// Drives a [`SortEngine`] one tick at a time
#[derive(Debug)]
pub struct PlaybackController {
    engine: SortEngine,
    /// Length used when regenerating on reset
    dataset_len: usize,
    speed: Duration,
    running: bool,
    tick: Option<TickPhase>,
    pending: Option<TimerToken>,
    next_token: u64,
}

impl PlaybackController {
    /// Create a controller with a fresh dataset from `config`
    pub fn new(config: &VisualizerConfig) -> Self {
        let engine = SortEngine::new(&config.dataset);
        Self::with_engine(engine, config.playback.validated_speed_ms())
    }

    /// Wrap an existing engine; its current length becomes the reset length
    pub fn with_engine(engine: SortEngine, speed_ms: u32) -> Self {
        let dataset_len = engine.len();
        Self {
            engine,
            dataset_len,
            speed: speed_from_ms(speed_ms),
            running: false,
            tick: None,
            pending: None,
            next_token: 0,
        }
    }

    pub fn state(&self) -> PlaybackState {
        match (self.running, self.tick) {
            (true, _) => PlaybackState::Running,
            (false, Some(_)) => PlaybackState::Finishing,
            (false, None) => PlaybackState::Idle,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn engine(&self) -> &SortEngine {
        &self.engine
    }

    /// Delay applied to waits armed from now on
    pub fn speed(&self) -> Duration {
        self.speed
    }

    /// Token of the timer the controller is waiting on, if any
    pub fn pending_timer(&self) -> Option<TimerToken> {
        self.pending
    }

    /// Start autoplay
    ///
    /// No-op when already running or when the dataset is sorted. If a tick is
    /// still finishing, it picks autoplay back up when it completes instead of
    /// arming a second timer.
    pub fn play<R: Renderer + ?Sized>(&mut self, renderer: &mut R) -> Option<Wait> {
        if self.running {
            log::debug!("play: already running");
            return None;
        }
        if self.engine.is_sorted() {
            log::info!("play: dataset already sorted, nothing to play");
            return None;
        }

        self.running = true;
        if self.tick.is_some() {
            log::debug!("play: resuming, in-flight tick will reschedule");
            return None;
        }

        log::info!("play: autoplay started at {:?} per phase", self.speed);
        self.begin_tick(renderer)
    }

    /// Stop autoplay at the next tick boundary
    ///
    /// The in-flight wait is left to elapse and its tick finishes normally.
    pub fn pause(&mut self) {
        if !self.running {
            return;
        }
        self.running = false;
        log::info!(
            "pause: autoplay stopped at cursor {:?}{}",
            self.engine.cursor(),
            if self.tick.is_some() { " (finishing current tick)" } else { "" }
        );
    }

    /// Run exactly one tick without rescheduling
    ///
    /// Only allowed while [`PlaybackState::Idle`].
    pub fn step_once<R: Renderer + ?Sized>(&mut self, renderer: &mut R) -> PlaybackResult<Wait> {
        if self.running || self.tick.is_some() {
            return Err(PlaybackError::Busy);
        }
        if self.engine.is_sorted() {
            return Err(PlaybackError::AlreadySorted);
        }

        log::debug!("step_once: cursor {:?}", self.engine.cursor());
        self.begin_tick(renderer).ok_or(PlaybackError::AlreadySorted)
    }

    /// Stop everything, regenerate the dataset and draw it
    ///
    /// Returns the token of the timer that was abandoned, if one was pending.
    pub fn reset<R: Renderer + ?Sized>(&mut self, renderer: &mut R) -> Option<TimerToken> {
        let cancelled = self.pending.take();
        if let Some(token) = cancelled {
            log::debug!("reset: abandoning pending timer {:?}", token);
        }
        self.running = false;
        self.tick = None;

        self.engine.reset(self.dataset_len);
        renderer.draw(self.engine.values(), None, Transition::Instant);
        log::info!("reset: new dataset of {} values", self.engine.len());

        cancelled
    }

    /// Change the delay for waits armed after this call
    ///
    /// A wait that is already armed keeps its delay.
    pub fn set_speed(&mut self, speed_ms: u32) {
        self.speed = speed_from_ms(speed_ms);
        log::debug!("set_speed: {:?}", self.speed);
    }

    /// Resume the in-flight tick after its wait elapsed
    ///
    /// Tokens other than the pending one are stale (the tick they belonged to
    /// was reset away) and are ignored.
    pub fn on_timer<R: Renderer + ?Sized>(
        &mut self,
        token: TimerToken,
        renderer: &mut R,
    ) -> Option<Wait> {
        if self.pending != Some(token) {
            log::debug!("on_timer: ignoring stale timer {:?}", token);
            return None;
        }
        self.pending = None;

        match self.tick.take() {
            Some(TickPhase::Comparing { .. }) => {
                let Some(outcome) = self.engine.step() else {
                    return self.finish_tick(renderer);
                };
                log::debug!(
                    "tick: compared {:?}, swapped={}, cursor now {:?}",
                    outcome.pair,
                    outcome.swapped,
                    outcome.cursor
                );

                if outcome.swapped {
                    renderer.draw(
                        self.engine.values(),
                        Some(Highlight::swap(outcome.pair)),
                        Transition::Animated(self.speed),
                    );
                    self.tick = Some(TickPhase::Swapping { pair: outcome.pair });
                    return Some(self.arm());
                }
                self.finish_tick(renderer)
            }
            Some(TickPhase::Swapping { .. }) => self.finish_tick(renderer),
            None => {
                log::warn!("on_timer: timer {:?} fired with no tick in flight", token);
                None
            }
        }
    }

    /// Draw the current values and highlight without changing anything
    pub fn redraw<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        let highlight = self.tick.map(|phase| match phase {
            TickPhase::Comparing { pair } => Highlight::compare(pair),
            TickPhase::Swapping { pair } => Highlight::swap(pair),
        });
        renderer.draw(self.engine.values(), highlight, Transition::Instant);
    }

    fn begin_tick<R: Renderer + ?Sized>(&mut self, renderer: &mut R) -> Option<Wait> {
        let pair = self.engine.next_pair()?;
        renderer.draw(
            self.engine.values(),
            Some(Highlight::compare(pair)),
            Transition::Instant,
        );
        self.tick = Some(TickPhase::Comparing { pair });
        Some(self.arm())
    }

    fn finish_tick<R: Renderer + ?Sized>(&mut self, renderer: &mut R) -> Option<Wait> {
        self.tick = None;
        renderer.draw(self.engine.values(), None, Transition::Instant);

        if self.engine.is_sorted() {
            let stats = self.engine.stats();
            log::info!(
                "sorted: {} comparisons, {} swaps",
                stats.comparisons,
                stats.swaps
            );
            self.running = false;
            return None;
        }

        if self.running {
            self.begin_tick(renderer)
        } else {
            log::debug!("tick finished, idle at cursor {:?}", self.engine.cursor());
            None
        }
    }

    fn arm(&mut self) -> Wait {
        let token = TimerToken(self.next_token);
        self.next_token += 1;
        self.pending = Some(token);
        Wait {
            token,
            delay: self.speed,
        }
    }
}

fn speed_from_ms(speed_ms: u32) -> Duration {
    Duration::from_millis(u64::from(speed_ms.max(1)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DatasetConfig;
    use crate::render::HighlightKind;
    use crate::types::Cursor;

    #[derive(Debug, Default)]
    struct RecordingRenderer {
        frames: Vec<(Vec<u32>, Option<Highlight>, Transition)>,
    }

    impl Renderer for RecordingRenderer {
        fn draw(&mut self, values: &[u32], highlight: Option<Highlight>, transition: Transition) {
            self.frames.push((values.to_vec(), highlight, transition));
        }
    }

    impl RecordingRenderer {
        fn last(&self) -> &(Vec<u32>, Option<Highlight>, Transition) {
            self.frames.last().expect("nothing drawn")
        }
    }

    fn controller(values: Vec<u32>) -> PlaybackController {
        PlaybackController::with_engine(SortEngine::from_values(values), 500)
    }

    /// Fire timers until the controller stops asking for them
    fn drain(
        controller: &mut PlaybackController,
        renderer: &mut RecordingRenderer,
        mut wait: Option<Wait>,
    ) -> usize {
        let mut fired = 0;
        while let Some(w) = wait {
            wait = controller.on_timer(w.token, renderer);
            fired += 1;
        }
        fired
    }

    #[test]
    fn test_play_highlights_first_pair_and_waits() {
        let mut c = controller(vec![5, 3, 4]);
        let mut r = RecordingRenderer::default();

        let wait = c.play(&mut r).unwrap();
        assert_eq!(wait.delay, Duration::from_millis(500));
        assert_eq!(c.state(), PlaybackState::Running);
        assert_eq!(c.pending_timer(), Some(wait.token));

        let (values, highlight, transition) = r.last();
        assert_eq!(values, &vec![5, 3, 4]);
        assert_eq!(*highlight, Some(Highlight::compare((0, 1))));
        assert_eq!(*transition, Transition::Instant);
    }

    #[test]
    fn test_play_twice_arms_one_timer() {
        let mut c = controller(vec![5, 3, 4]);
        let mut r = RecordingRenderer::default();

        let first = c.play(&mut r);
        assert!(first.is_some());
        assert!(c.play(&mut r).is_none());
        assert_eq!(c.pending_timer(), first.map(|w| w.token));
    }

    #[test]
    fn test_autoplay_runs_until_sorted() {
        let config = VisualizerConfig {
            dataset: DatasetConfig {
                seed: Some(3),
                ..Default::default()
            },
            ..Default::default()
        };
        let mut c = PlaybackController::new(&config);
        let mut r = RecordingRenderer::default();

        let first = c.play(&mut r);
        let fired = drain(&mut c, &mut r, first);

        let n = c.engine().len();
        let stats = c.engine().stats();
        assert!(c.engine().is_sorted());
        assert_eq!(c.state(), PlaybackState::Idle);
        assert_eq!(c.pending_timer(), None);
        assert_eq!(stats.comparisons, n * (n - 1) / 2);
        assert_eq!(fired, stats.comparisons + stats.swaps);
        assert!(c.engine().values().windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(r.last().1, None);
    }

    #[test]
    fn test_swap_is_animated_at_current_speed() {
        let mut c = controller(vec![5, 3, 4]);
        let mut r = RecordingRenderer::default();

        let wait = c.play(&mut r).unwrap();
        let swap_wait = c.on_timer(wait.token, &mut r).unwrap();

        let (values, highlight, transition) = r.last();
        assert_eq!(values, &vec![3, 5, 4]);
        assert_eq!(highlight.map(|h| h.kind), Some(HighlightKind::Swap));
        assert_eq!(*transition, Transition::Animated(Duration::from_millis(500)));
        assert_eq!(swap_wait.delay, Duration::from_millis(500));
    }

    #[test]
    fn test_no_swap_means_no_second_wait() {
        let mut c = controller(vec![1, 2, 3]);
        let mut r = RecordingRenderer::default();

        let wait = c.step_once(&mut r).unwrap();
        assert!(c.on_timer(wait.token, &mut r).is_none());
        assert_eq!(c.engine().cursor(), Cursor::new(0, 1));
        assert_eq!(c.state(), PlaybackState::Idle);
        assert_eq!(r.last().1, None);
    }

    #[test]
    fn test_pause_mid_wait_finishes_tick_then_step_resumes() {
        let mut c = controller(vec![5, 3, 4]);
        let mut r = RecordingRenderer::default();

        let wait = c.play(&mut r).unwrap();
        c.pause();
        assert_eq!(c.state(), PlaybackState::Finishing);
        assert!(!c.is_running());

        // The compare wait elapses and the step still happens
        let swap_wait = c.on_timer(wait.token, &mut r).unwrap();
        assert_eq!(c.engine().values(), &[3, 5, 4]);
        assert!(c.on_timer(swap_wait.token, &mut r).is_none());
        assert_eq!(c.state(), PlaybackState::Idle);
        assert_eq!(c.engine().cursor(), Cursor::new(0, 1));

        // A manual step picks up exactly where autoplay left off
        let wait = c.step_once(&mut r).unwrap();
        assert_eq!(r.last().1, Some(Highlight::compare((1, 2))));
        drain(&mut c, &mut r, Some(wait));
        assert_eq!(c.engine().values(), &[3, 4, 5]);
        assert_eq!(c.engine().cursor(), Cursor::new(1, 0));
        assert_eq!(c.state(), PlaybackState::Idle);
    }

    #[test]
    fn test_play_while_finishing_resumes_without_second_timer() {
        let mut c = controller(vec![4, 3, 2, 1]);
        let mut r = RecordingRenderer::default();

        let wait = c.play(&mut r);
        c.pause();
        assert!(c.play(&mut r).is_none());
        assert_eq!(c.state(), PlaybackState::Running);

        drain(&mut c, &mut r, wait);
        assert!(c.engine().is_sorted());
        assert_eq!(c.engine().values(), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_step_once_rejected_while_busy() {
        let mut c = controller(vec![5, 3, 4]);
        let mut r = RecordingRenderer::default();

        c.play(&mut r);
        let frames = r.frames.len();
        assert_eq!(c.step_once(&mut r), Err(PlaybackError::Busy));

        c.pause();
        assert_eq!(c.step_once(&mut r), Err(PlaybackError::Busy));
        assert_eq!(r.frames.len(), frames);
        assert_eq!(c.engine().values(), &[5, 3, 4]);
    }

    #[test]
    fn test_sorted_dataset_rejects_step_and_ignores_play() {
        let mut c = controller(vec![2, 1]);
        let mut r = RecordingRenderer::default();

        let wait = c.step_once(&mut r);
        drain(&mut c, &mut r, wait.ok());
        assert!(c.engine().is_sorted());

        assert_eq!(c.step_once(&mut r), Err(PlaybackError::AlreadySorted));
        assert!(c.play(&mut r).is_none());
        assert_eq!(c.state(), PlaybackState::Idle);
        assert_eq!(c.engine().values(), &[1, 2]);
    }

    #[test]
    fn test_reset_while_running_discards_tick() {
        let config = VisualizerConfig::default();
        let mut c = PlaybackController::new(&config);
        let mut r = RecordingRenderer::default();

        let wait = c.play(&mut r).unwrap();
        let swap_or_next = c.on_timer(wait.token, &mut r).unwrap();

        let cancelled = c.reset(&mut r);
        assert_eq!(cancelled, Some(swap_or_next.token));
        assert_eq!(c.state(), PlaybackState::Idle);
        assert_eq!(c.engine().cursor(), Cursor::START);
        assert_eq!(c.engine().len(), 30);
        assert_eq!(c.pending_timer(), None);

        let (values, highlight, transition) = r.last().clone();
        assert_eq!(values, c.engine().values());
        assert_eq!(highlight, None);
        assert_eq!(transition, Transition::Instant);

        // The abandoned timer firing late changes nothing
        let frames = r.frames.len();
        assert!(c.on_timer(swap_or_next.token, &mut r).is_none());
        assert_eq!(r.frames.len(), frames);
        assert_eq!(c.engine().cursor(), Cursor::START);
    }

    #[test]
    fn test_reset_when_idle_regenerates() {
        let mut c = controller(vec![9, 8, 7, 6]);
        let mut r = RecordingRenderer::default();

        assert_eq!(c.reset(&mut r), None);
        assert_eq!(c.engine().len(), 4);
        assert_eq!(c.engine().cursor(), Cursor::START);
        assert!(c.engine().values().iter().all(|v| (10..=100).contains(v)));
    }

    #[test]
    fn test_speed_change_applies_to_next_wait_only() {
        let mut c = controller(vec![5, 3, 4]);
        let mut r = RecordingRenderer::default();

        let wait = c.play(&mut r).unwrap();
        c.set_speed(50);
        assert_eq!(wait.delay, Duration::from_millis(500));
        assert_eq!(c.pending_timer(), Some(wait.token));

        let next = c.on_timer(wait.token, &mut r).unwrap();
        assert_eq!(next.delay, Duration::from_millis(50));
        assert_eq!(r.last().2, Transition::Animated(Duration::from_millis(50)));
    }

    #[test]
    fn test_zero_speed_is_clamped() {
        let mut c = controller(vec![2, 1]);
        c.set_speed(0);
        assert_eq!(c.speed(), Duration::from_millis(1));
    }

    #[test]
    fn test_redraw_reflects_tick_phase() {
        let mut c = controller(vec![5, 3, 4]);
        let mut r = RecordingRenderer::default();

        c.redraw(&mut r);
        assert_eq!(r.last().1, None);

        c.play(&mut r);
        c.redraw(&mut r);
        assert_eq!(r.last().1, Some(Highlight::compare((0, 1))));
    }
}

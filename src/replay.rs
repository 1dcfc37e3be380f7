use crate::window_search::{SearchResult, SearchStep};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReplaySpeed {
    Slow,
    Normal,
    #[default]
    Fast,
    VeryFast,
}

impl ReplaySpeed {
    /// Interval a downstream timer loop should wait between ticks.
    pub fn interval_ms(&self) -> u64 {
        match self {
            ReplaySpeed::Slow => 2000,
            ReplaySpeed::Normal => 1200,
            ReplaySpeed::Fast => 800,
            ReplaySpeed::VeryFast => 400,
        }
    }
}

/// Navigation cursor over a finished trace. The trace itself is never
/// mutated; the cursor only tracks a position and the play/pause state.
/// It owns no timer: whatever animates the trace calls `tick` at the
/// pace given by `speed().interval_ms()`.
#[derive(Clone, Debug)]
pub struct TraceReplay {
    result: SearchResult,
    position: usize,
    playing: bool,
    speed: ReplaySpeed,
}

impl TraceReplay {
    pub fn new(result: SearchResult) -> Self {
        Self {
            result,
            position: 0,
            playing: false,
            speed: ReplaySpeed::default(),
        }
    }

    #[inline(always)]
    pub fn result(&self) -> &SearchResult {
        &self.result
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.result.steps.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.result.steps.is_empty()
    }

    #[inline(always)]
    pub fn current_index(&self) -> usize {
        self.position
    }

    pub fn current_step(&self) -> Option<&SearchStep> {
        self.result.steps.get(self.position)
    }

    pub fn at_end(&self) -> bool {
        self.position + 1 >= self.len()
    }

    pub fn advance(&mut self) -> bool {
        if self.at_end() {
            return false;
        }
        self.position += 1;
        true
    }

    pub fn step_back(&mut self) -> bool {
        if self.position == 0 {
            return false;
        }
        self.position -= 1;
        true
    }

    pub fn seek(&mut self, index: usize) -> bool {
        if index >= self.len() {
            return false;
        }
        self.position = index;
        true
    }

    pub fn reset(&mut self) {
        self.position = 0;
        self.playing = false;
    }

    pub fn play(&mut self) {
        self.playing = true;
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    #[inline(always)]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    #[inline(always)]
    pub fn speed(&self) -> ReplaySpeed {
        self.speed
    }

    pub fn set_speed(&mut self, speed: ReplaySpeed) {
        self.speed = speed;
    }

    /// One timer tick: advances while playing and pauses on the last step.
    /// Returns whether the position moved.
    pub fn tick(&mut self) -> bool {
        if !self.playing {
            return false;
        }
        let moved = self.advance();
        if self.at_end() {
            self.playing = false;
        }
        moved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window_search::WindowSearch;

    fn replay() -> TraceReplay {
        TraceReplay::new(WindowSearch::search("ADOBECODEBANC", "ABC"))
    }

    #[test]
    fn test_navigation_bounds() {
        let mut replay = replay();
        assert_eq!(replay.current_index(), 0);
        assert!(!replay.step_back());
        assert!(replay.advance());
        assert_eq!(replay.current_index(), 1);
        assert!(replay.step_back());
        assert_eq!(replay.current_index(), 0);

        let last = replay.len() - 1;
        assert!(replay.seek(last));
        assert!(replay.at_end());
        assert!(!replay.advance());
        assert!(!replay.seek(replay.len()));
        assert_eq!(replay.current_index(), last);
    }

    #[test]
    fn test_reset() {
        let mut replay = replay();
        replay.seek(3);
        replay.play();
        replay.reset();
        assert_eq!(replay.current_index(), 0);
        assert!(!replay.is_playing());
    }

    #[test]
    fn test_tick_runs_to_end_and_pauses() {
        let mut replay = replay();
        replay.play();
        let mut moves = 0;
        while replay.tick() {
            moves += 1;
            assert!(moves <= replay.len());
        }
        assert!(replay.at_end());
        assert!(!replay.is_playing());
        assert_eq!(moves, replay.len() - 1);
    }

    #[test]
    fn test_tick_when_paused_is_noop() {
        let mut replay = replay();
        assert!(!replay.tick());
        assert_eq!(replay.current_index(), 0);
    }

    #[test]
    fn test_empty_trace() {
        let mut replay = TraceReplay::new(WindowSearch::search("", "a"));
        assert!(replay.is_empty());
        assert!(replay.current_step().is_none());
        assert!(replay.at_end());
        assert!(!replay.advance());
        assert!(!replay.seek(0));
    }

    #[test]
    fn test_speed_intervals() {
        assert_eq!(ReplaySpeed::Slow.interval_ms(), 2000);
        assert_eq!(ReplaySpeed::Normal.interval_ms(), 1200);
        assert_eq!(ReplaySpeed::Fast.interval_ms(), 800);
        assert_eq!(ReplaySpeed::VeryFast.interval_ms(), 400);
        assert_eq!(ReplaySpeed::default(), ReplaySpeed::Fast);
    }
}

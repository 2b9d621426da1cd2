//! Channel selector behind the Work section's "TV" carousel.
//!
//! The selector owns a single active index over a fixed list of items and
//! knows nothing about the DOM. Time is passed in explicitly as milliseconds,
//! so the browser driver decides what "now" is and the tests can step a
//! virtual clock. Every pending timer is represented as a deadline; the
//! driver arms one timeout for [`ChannelSelector::next_deadline`] and calls
//! [`ChannelSelector::advance`] when it fires.

use thiserror::Error;

/// Milliseconds on whatever clock the caller uses.
pub type Millis = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectorConfig {
    /// Length of the static-noise window before a flip is committed.
    pub flip_ms: Millis,
    /// How long the channel badge stays up after a commit.
    pub badge_ms: Millis,
    /// Auto-advance period while idle and not paused.
    pub auto_ms: Millis,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            flip_ms: 400,
            badge_ms: 1800,
            auto_ms: 2000,
        }
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorError {
    #[error("a channel selector needs at least one item")]
    Empty,
    #[error("channel {target} is out of range ({len} channels)")]
    OutOfRange { target: usize, len: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle {
        active: usize,
    },
    Transitioning {
        from: usize,
        to: usize,
        commit_at: Millis,
    },
}

/// What the view layer renders from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectorState {
    pub active_index: usize,
    pub is_transitioning: bool,
    pub show_badge: bool,
    pub last_change: Millis,
}

/// Logical keyboard directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Advance,
    Retreat,
}

impl Direction {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" | "ArrowRight" => Some(Self::Advance),
            "ArrowDown" | "ArrowLeft" => Some(Self::Retreat),
            _ => None,
        }
    }
}

/// Two-digit, one-based channel number as printed on the badge ("CH 03").
pub fn channel_number(index: usize) -> String {
    format!("{:02}", index + 1)
}

#[derive(Debug, Clone)]
pub struct ChannelSelector {
    len: usize,
    config: SelectorConfig,
    phase: Phase,
    show_badge: bool,
    badge_until: Option<Millis>,
    auto_at: Option<Millis>,
    paused: bool,
    mounted: bool,
    last_change: Millis,
}

impl ChannelSelector {
    pub fn new(len: usize, mut config: SelectorConfig, now: Millis) -> Result<Self, SelectorError> {
        if len == 0 {
            return Err(SelectorError::Empty);
        }
        // a zero period would never let `advance` catch up
        config.auto_ms = config.auto_ms.max(1);
        let mut selector = Self {
            len,
            config,
            phase: Phase::Idle { active: 0 },
            show_badge: false,
            badge_until: None,
            auto_at: None,
            paused: false,
            mounted: true,
            last_change: now,
        };
        selector.arm_auto(now);
        Ok(selector)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn config(&self) -> SelectorConfig {
        self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The committed index. While transitioning this is still the channel
    /// being flipped away from.
    pub fn active_index(&self) -> usize {
        match self.phase {
            Phase::Idle { active } => active,
            Phase::Transitioning { from, .. } => from,
        }
    }

    pub fn is_transitioning(&self) -> bool {
        matches!(self.phase, Phase::Transitioning { .. })
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn state(&self) -> SelectorState {
        SelectorState {
            active_index: self.active_index(),
            is_transitioning: self.is_transitioning(),
            show_badge: self.show_badge,
            last_change: self.last_change,
        }
    }

    /// Start a flip to `target`.
    ///
    /// Returns `Ok(true)` when a transition started and `Ok(false)` when the
    /// request was dropped (same channel, a flip already running, or the
    /// selector was unmounted). Out-of-range targets are rejected.
    pub fn request_channel(&mut self, target: usize, now: Millis) -> Result<bool, SelectorError> {
        if !self.mounted {
            return Ok(false);
        }
        if target >= self.len {
            return Err(SelectorError::OutOfRange {
                target,
                len: self.len,
            });
        }
        let active = match self.phase {
            Phase::Idle { active } if active != target => active,
            _ => return Ok(false),
        };
        self.phase = Phase::Transitioning {
            from: active,
            to: target,
            commit_at: now + self.config.flip_ms,
        };
        self.show_badge = true;
        self.badge_until = None;
        self.auto_at = None;
        self.last_change = now;
        log::debug!("channel flip {active} -> {target}");
        Ok(true)
    }

    pub fn next(&mut self, now: Millis) -> bool {
        let target = (self.active_index() + 1) % self.len;
        self.request_channel(target, now).unwrap_or(false)
    }

    pub fn previous(&mut self, now: Millis) -> bool {
        let target = (self.active_index() + self.len - 1) % self.len;
        self.request_channel(target, now).unwrap_or(false)
    }

    pub fn step(&mut self, direction: Direction, now: Millis) -> bool {
        match direction {
            Direction::Advance => self.next(now),
            Direction::Retreat => self.previous(now),
        }
    }

    /// Pause or resume auto-advance. Resuming re-arms a full period from
    /// `now`.
    pub fn set_paused(&mut self, paused: bool, now: Millis) {
        if !self.mounted || self.paused == paused {
            return;
        }
        self.paused = paused;
        if paused {
            self.auto_at = None;
        } else if !self.is_transitioning() {
            self.arm_auto(now);
        }
    }

    /// Earliest pending deadline, if any.
    pub fn next_deadline(&self) -> Option<Millis> {
        if !self.mounted {
            return None;
        }
        let commit = match self.phase {
            Phase::Transitioning { commit_at, .. } => Some(commit_at),
            Phase::Idle { .. } => None,
        };
        [commit, self.badge_until, self.auto_at]
            .into_iter()
            .flatten()
            .min()
    }

    /// Fire every deadline due at or before `now`. Returns whether the
    /// observable state changed.
    pub fn advance(&mut self, now: Millis) -> bool {
        let before = self.state();
        while let Some(due) = self.next_deadline() {
            if due > now {
                break;
            }
            self.fire(due, now);
        }
        self.state() != before
    }

    /// Cancel every pending deadline. Nothing mutates afterwards.
    pub fn unmount(&mut self) {
        self.mounted = false;
        self.show_badge = false;
        self.badge_until = None;
        self.auto_at = None;
        if let Phase::Transitioning { from, .. } = self.phase {
            self.phase = Phase::Idle { active: from };
        }
    }

    fn fire(&mut self, due: Millis, now: Millis) {
        if let Phase::Transitioning { to, commit_at, .. } = self.phase {
            if commit_at == due {
                self.phase = Phase::Idle { active: to };
                self.last_change = due;
                self.badge_until = Some(due + self.config.badge_ms);
                self.arm_auto(due);
                log::debug!("channel {to} committed");
                return;
            }
        }
        if self.badge_until == Some(due) {
            self.badge_until = None;
            self.show_badge = false;
            return;
        }
        if self.auto_at == Some(due) {
            self.auto_at = None;
            // a tab that slept through whole periods gets one flip, not a backlog
            let at = if now - due > self.config.auto_ms {
                now
            } else {
                due
            };
            if !self.next(at) {
                self.arm_auto(at);
            }
        }
    }

    fn arm_auto(&mut self, from: Millis) {
        self.auto_at = if self.paused || self.len < 2 {
            None
        } else {
            Some(from + self.config.auto_ms)
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FLIP: Millis = 400;
    const BADGE: Millis = 1800;
    const AUTO: Millis = 2000;

    fn selector(len: usize) -> ChannelSelector {
        ChannelSelector::new(len, SelectorConfig::default(), 0).expect("non-empty selector")
    }

    #[test]
    fn test_starts_idle_on_first_channel() {
        let s = selector(4);
        assert_eq!(s.phase(), Phase::Idle { active: 0 });
        assert_eq!(s.state(), SelectorState::default());
        assert_eq!(s.next_deadline(), Some(AUTO));
    }

    #[test]
    fn test_empty_list_is_rejected() {
        let res = ChannelSelector::new(0, SelectorConfig::default(), 0);
        assert_eq!(res.unwrap_err(), SelectorError::Empty);
    }

    #[test]
    fn test_request_transitions_then_commits() {
        let mut s = selector(4);
        assert_eq!(s.request_channel(2, 100), Ok(true));

        let state = s.state();
        assert!(state.is_transitioning);
        assert!(state.show_badge);
        assert_eq!(state.active_index, 0);
        assert_eq!(state.last_change, 100);
        assert_eq!(s.next_deadline(), Some(100 + FLIP));

        assert!(!s.advance(100 + FLIP - 1));
        assert!(s.is_transitioning());

        assert!(s.advance(100 + FLIP));
        assert_eq!(s.phase(), Phase::Idle { active: 2 });
        assert_eq!(s.state().last_change, 100 + FLIP);
    }

    #[test]
    fn test_every_other_channel_commits() {
        for target in 1..4 {
            let mut s = selector(4);
            assert_eq!(s.request_channel(target, 0), Ok(true));
            s.advance(FLIP);
            assert_eq!(s.active_index(), target);
            assert!(!s.is_transitioning());
        }
    }

    #[test]
    fn test_request_same_channel_is_noop() {
        let mut s = selector(4);
        let deadline = s.next_deadline();
        assert_eq!(s.request_channel(0, 10), Ok(false));
        assert_eq!(s.state(), SelectorState::default());
        assert_eq!(s.next_deadline(), deadline);
    }

    #[test]
    fn test_request_while_transitioning_is_dropped() {
        let mut s = selector(4);
        s.request_channel(1, 0).unwrap();
        let state = s.state();
        let deadline = s.next_deadline();

        for target in 0..4 {
            assert_eq!(s.request_channel(target, 50), Ok(false));
        }
        assert!(!s.next(60));
        assert!(!s.previous(70));

        assert_eq!(s.state(), state);
        assert_eq!(s.next_deadline(), deadline);

        s.advance(FLIP);
        assert_eq!(s.active_index(), 1);
    }

    #[test]
    fn test_out_of_range_is_rejected() {
        let mut s = selector(4);
        assert_eq!(
            s.request_channel(4, 0),
            Err(SelectorError::OutOfRange { target: 4, len: 4 })
        );
        assert_eq!(s.state(), SelectorState::default());
    }

    #[test]
    fn test_next_wraps_around() {
        let mut s = selector(4);
        s.request_channel(3, 0).unwrap();
        s.advance(FLIP);
        assert!(s.next(FLIP + 10));
        s.advance(2 * FLIP + 10);
        assert_eq!(s.active_index(), 0);
    }

    #[test]
    fn test_previous_wraps_around() {
        let mut s = selector(4);
        assert!(s.previous(0));
        s.advance(FLIP);
        assert_eq!(s.active_index(), 3);
    }

    #[test]
    fn test_scenario_four_items() {
        let mut s = selector(4);
        s.request_channel(2, 0).unwrap();
        assert!(s.state().is_transitioning);
        s.advance(FLIP);
        assert_eq!(s.active_index(), 2);
        assert!(!s.state().is_transitioning);

        assert!(s.next(500));
        s.advance(500 + FLIP);
        assert_eq!(s.active_index(), 3);

        assert!(s.next(1000));
        s.advance(1000 + FLIP);
        assert_eq!(s.active_index(), 0);
    }

    #[test]
    fn test_badge_hides_after_window() {
        let mut s = selector(4);
        s.request_channel(1, 0).unwrap();
        s.advance(FLIP);
        assert!(s.state().show_badge);
        s.advance(FLIP + BADGE - 1);
        assert!(s.state().show_badge);
        s.advance(FLIP + BADGE);
        assert!(!s.state().show_badge);
    }

    #[test]
    fn test_auto_advance_once_per_period() {
        let mut s = selector(4);
        s.advance(AUTO - 1);
        assert_eq!(s.active_index(), 0);
        assert!(!s.is_transitioning());

        s.advance(AUTO);
        assert!(s.is_transitioning());
        s.advance(AUTO + FLIP);
        assert_eq!(s.active_index(), 1);

        // next period counts from the commit
        assert_eq!(s.next_deadline(), Some(AUTO + FLIP + BADGE));
        s.advance(AUTO + FLIP + AUTO - 1);
        assert_eq!(s.active_index(), 1);
        assert!(!s.is_transitioning());
        s.advance(AUTO + FLIP + AUTO);
        assert!(s.is_transitioning());
        s.advance(2 * (AUTO + FLIP));
        assert_eq!(s.active_index(), 2);
    }

    #[test]
    fn test_auto_advance_suspended_while_paused() {
        let mut s = selector(4);
        s.set_paused(true, 500);
        assert!(s.is_paused());
        assert_eq!(s.next_deadline(), None);
        assert!(!s.advance(60_000));
        assert_eq!(s.active_index(), 0);
    }

    #[test]
    fn test_unpause_rearms_a_full_period() {
        let mut s = selector(4);
        s.set_paused(true, 1500);
        s.set_paused(false, 10_000);
        assert_eq!(s.next_deadline(), Some(10_000 + AUTO));

        s.advance(10_000 + AUTO - 1);
        assert!(!s.is_transitioning());
        s.advance(10_000 + AUTO);
        assert!(s.is_transitioning());

        // only one flip came out of that period
        s.advance(10_000 + AUTO + FLIP);
        assert_eq!(s.active_index(), 1);
        assert_eq!(s.next_deadline(), Some(10_000 + AUTO + FLIP + BADGE));
    }

    #[test]
    fn test_repeated_pause_calls_do_not_shift_deadline() {
        let mut s = selector(4);
        s.set_paused(false, 1500);
        assert_eq!(s.next_deadline(), Some(AUTO));
    }

    #[test]
    fn test_pause_during_flip_keeps_commit() {
        let mut s = selector(4);
        s.request_channel(2, 0).unwrap();
        s.set_paused(true, 100);
        s.advance(FLIP);
        assert_eq!(s.active_index(), 2);
        s.advance(FLIP + BADGE);
        assert_eq!(s.next_deadline(), None);

        s.set_paused(false, 5000);
        assert_eq!(s.next_deadline(), Some(5000 + AUTO));
    }

    #[test]
    fn test_manual_flip_rearms_auto_advance() {
        let mut s = selector(4);
        s.request_channel(3, 1900).unwrap();
        // the pending auto deadline at 2000 must not fire mid-flip
        s.advance(2000);
        assert!(s.is_transitioning());
        s.advance(1900 + FLIP);
        assert_eq!(s.active_index(), 3);
        s.advance(1900 + FLIP + AUTO - 1);
        assert!(!s.is_transitioning());
        s.advance(1900 + FLIP + AUTO);
        assert!(s.is_transitioning());
    }

    #[test]
    fn test_long_sleep_coalesces_to_one_flip() {
        let mut s = selector(4);
        s.advance(1_000_000);
        assert!(s.is_transitioning());
        assert_eq!(s.active_index(), 0);
        assert_eq!(s.next_deadline(), Some(1_000_000 + FLIP));
    }

    #[test]
    fn test_single_item_never_auto_advances() {
        let mut s = selector(1);
        assert_eq!(s.next_deadline(), None);
        assert!(!s.next(0));
        assert!(!s.previous(0));
        assert_eq!(s.active_index(), 0);
    }

    #[test]
    fn test_unmount_mid_flip_stops_everything() {
        let mut s = selector(4);
        s.request_channel(2, 0).unwrap();
        s.unmount();
        let state = s.state();

        assert!(!s.is_mounted());
        assert_eq!(s.next_deadline(), None);
        assert!(!s.advance(1_000_000));
        assert_eq!(s.request_channel(1, 10), Ok(false));
        s.set_paused(true, 20);
        assert!(!s.is_paused());
        assert_eq!(s.state(), state);
        assert_eq!(s.active_index(), 0);
    }

    #[test]
    fn test_keyboard_directions() {
        assert_eq!(Direction::from_key("ArrowUp"), Some(Direction::Advance));
        assert_eq!(Direction::from_key("ArrowRight"), Some(Direction::Advance));
        assert_eq!(Direction::from_key("ArrowDown"), Some(Direction::Retreat));
        assert_eq!(Direction::from_key("ArrowLeft"), Some(Direction::Retreat));
        assert_eq!(Direction::from_key("Enter"), None);

        let mut s = selector(4);
        assert!(s.step(Direction::Retreat, 0));
        assert!(!s.step(Direction::Advance, 10));
        s.advance(FLIP);
        assert_eq!(s.active_index(), 3);
    }

    #[test]
    fn test_channel_number() {
        assert_eq!(channel_number(0), "01");
        assert_eq!(channel_number(9), "10");
        assert_eq!(channel_number(123), "124");
    }
}

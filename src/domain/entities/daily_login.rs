//! The 7-day daily login reward cycle

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Packs granted on each day of the 7-day login cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardSchedule(pub [u32; 7]);

impl RewardSchedule {
    /// Packs for a 1-indexed cycle day.
    pub fn packs_for_day(&self, day: u8) -> u32 {
        self.0[usize::from(day.clamp(1, 7)) - 1]
    }
}

/// Outcome of one successful claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClaimGrant {
    /// Cycle day the grant paid out for (after any reset).
    pub day: u8,
    pub packs: u32,
    pub streak: u32,
}

/// Daily login reward progress.
///
/// `day_in_cycle` is the 1-indexed day the next claim pays out, wrapping
/// 7 → 1. A missed day breaks the streak and sends the cycle back to day 1.
/// `last_claim` only ever moves forward, and only on a successful claim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyLoginState {
    pub last_claim: Option<NaiveDate>,
    pub day_in_cycle: u8,
    pub streak: u32,
}

impl Default for DailyLoginState {
    fn default() -> Self {
        Self {
            last_claim: None,
            day_in_cycle: 1,
            streak: 0,
        }
    }
}

impl DailyLoginState {
    pub fn new() -> Self {
        Self::default()
    }

    /// True iff today's reward has not been taken yet.
    pub fn can_claim(&self, today: NaiveDate) -> bool {
        self.last_claim != Some(today)
    }

    /// Run the claim state machine. Returns `None` and leaves the state
    /// untouched when today's reward was already taken.
    pub fn claim(&mut self, today: NaiveDate, schedule: &RewardSchedule) -> Option<ClaimGrant> {
        if !self.can_claim(today) {
            return None;
        }
        let consecutive = self
            .last_claim
            .is_some_and(|last| last.succ_opt() == Some(today));
        if consecutive {
            self.streak += 1;
        } else {
            // First-ever claim or a broken streak: back to day 1.
            self.day_in_cycle = 1;
            self.streak = 1;
        }
        let day = self.day_in_cycle;
        let packs = schedule.packs_for_day(day);
        self.day_in_cycle = if self.day_in_cycle >= 7 {
            1
        } else {
            self.day_in_cycle + 1
        };
        self.last_claim = Some(today);
        Some(ClaimGrant {
            day,
            packs,
            streak: self.streak,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHEDULE: RewardSchedule = RewardSchedule([1, 1, 2, 1, 1, 2, 3]);

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, day).unwrap()
    }

    #[test]
    fn first_claim_starts_the_cycle() {
        let mut state = DailyLoginState::new();
        let grant = state.claim(date(1), &SCHEDULE).unwrap();
        assert_eq!(grant, ClaimGrant { day: 1, packs: 1, streak: 1 });
        assert_eq!(state.day_in_cycle, 2);
        assert_eq!(state.streak, 1);
        assert_eq!(state.last_claim, Some(date(1)));
    }

    #[test]
    fn second_claim_same_day_is_a_no_op() {
        let mut state = DailyLoginState::new();
        state.claim(date(1), &SCHEDULE).unwrap();
        let before = state.clone();
        assert!(state.claim(date(1), &SCHEDULE).is_none());
        assert_eq!(state, before);
    }

    #[test]
    fn consecutive_days_extend_the_streak() {
        let mut state = DailyLoginState::new();
        state.claim(date(1), &SCHEDULE).unwrap();
        state.claim(date(2), &SCHEDULE).unwrap();
        let grant = state.claim(date(3), &SCHEDULE).unwrap();
        assert_eq!(grant, ClaimGrant { day: 3, packs: 2, streak: 3 });
        assert_eq!(state.day_in_cycle, 4);
    }

    #[test]
    fn a_missed_day_resets_cycle_and_streak() {
        let mut state = DailyLoginState::new();
        state.claim(date(1), &SCHEDULE).unwrap();
        state.claim(date(2), &SCHEDULE).unwrap();
        // Two days later: claim succeeds but the streak is broken.
        let grant = state.claim(date(4), &SCHEDULE).unwrap();
        assert_eq!(grant, ClaimGrant { day: 1, packs: 1, streak: 1 });
        assert_eq!(state.day_in_cycle, 2);
    }

    #[test]
    fn day_seven_wraps_back_to_day_one() {
        let mut state = DailyLoginState::new();
        for day in 1..=7 {
            state.claim(date(day), &SCHEDULE).unwrap();
        }
        assert_eq!(state.day_in_cycle, 1);
        assert_eq!(state.streak, 7);
        let grant = state.claim(date(8), &SCHEDULE).unwrap();
        assert_eq!(grant, ClaimGrant { day: 1, packs: 1, streak: 8 });
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Time remaining until the nearest promotion deadline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Remaining time decomposed for display. Never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeLeft {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl TimeLeft {
    pub const ZERO: Self = Self {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// Decomposes a signed second count; negative values clamp to zero.
    #[must_use]
    pub fn from_seconds(total: i64) -> Self {
        let r = u64::try_from(total).unwrap_or(0);
        Self {
            days: r / 86_400,
            hours: (r / 3_600) % 24,
            minutes: (r / 60) % 60,
            seconds: r % 60,
        }
    }

    /// Remaining time from `now` until `target`.
    #[must_use]
    pub fn between(now: DateTime<Utc>, target: DateTime<Utc>) -> Self {
        Self::from_seconds((target - now).num_seconds())
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

/// How the active deadline is chosen over time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TargetPolicy {
    /// Re-derive the earliest future deadline on every tick.
    #[default]
    NearestUpcoming,
    /// Pick once at construction and hold at zero afterwards.
    Fixed,
}

/// Earliest deadline strictly after `now`.
#[must_use]
pub fn nearest_upcoming(targets: &[DateTime<Utc>], now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    targets.iter().copied().filter(|t| *t > now).min()
}

#[derive(Debug, Clone)]
pub struct Countdown {
    targets: Vec<DateTime<Utc>>,
    policy: TargetPolicy,
    active: Option<DateTime<Utc>>,
    remaining: TimeLeft,
    /// Time of the last recompute.
    now: DateTime<Utc>,
}

impl Countdown {
    #[must_use]
    pub fn new(targets: Vec<DateTime<Utc>>, policy: TargetPolicy, now: DateTime<Utc>) -> Self {
        let mut countdown = Self {
            active: nearest_upcoming(&targets, now),
            targets,
            policy,
            remaining: TimeLeft::ZERO,
            now,
        };
        countdown.recompute(now);
        countdown
    }

    /// Advances the display to `now`.
    pub fn tick(&mut self, now: DateTime<Utc>) {
        if self.policy == TargetPolicy::NearestUpcoming {
            let next = nearest_upcoming(&self.targets, now);
            if next != self.active {
                match next {
                    Some(target) => log::debug!("countdown target moved to {target}"),
                    None => log::debug!("countdown has no upcoming deadline"),
                }
                self.active = next;
            }
        }
        self.recompute(now);
    }

    fn recompute(&mut self, now: DateTime<Utc>) {
        self.now = now;
        self.remaining = self
            .active
            .map_or(TimeLeft::ZERO, |target| TimeLeft::between(now, target));
    }

    #[must_use]
    pub fn remaining(&self) -> TimeLeft {
        self.remaining
    }

    #[must_use]
    pub fn active_target(&self) -> Option<DateTime<Utc>> {
        self.active
    }

    #[must_use]
    pub fn policy(&self) -> TargetPolicy {
        self.policy
    }

    /// Whether the tick subscription is still needed.
    ///
    /// Follows the active deadline rather than the displayed value, which
    /// already reads zero during the last second before a deadline.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.active.is_some_and(|target| target > self.now)
    }
}

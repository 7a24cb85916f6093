use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::app::util::time::DAY_IN_MILLIS;

pub const DEFAULT_TRIAL_DAYS: i64 = 7;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Subscription {
    pub user_id: String,
    pub is_subscribed: bool,
    pub trial_ends_at: Option<i64>,
    pub customer_id: Option<String>,
    pub subscription_id: Option<String>,
    pub created_at: i64,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct SubscriptionStatus {
    pub is_subscribed: bool,
    pub trial_ends_at: Option<i64>,
    pub days_left_in_trial: Option<i64>,
    pub has_access: bool,
}

impl Subscription {
    pub fn new_trial(user_id: &str, trial_days: i64, now: i64) -> Self {
        Self {
            user_id: user_id.to_string(),
            is_subscribed: false,
            trial_ends_at: Some(now + trial_days * DAY_IN_MILLIS),
            customer_id: None,
            subscription_id: None,
            created_at: now,
        }
    }

    /// Whole days left, rounded up. `None` once subscribed or when no trial
    /// was ever started.
    pub fn days_left_in_trial(&self, now: i64) -> Option<i64> {
        if self.is_subscribed {
            return None;
        }

        let remaining = self.trial_ends_at? - now;
        if remaining <= 0 {
            return Some(0);
        }

        Some((remaining + DAY_IN_MILLIS - 1) / DAY_IN_MILLIS)
    }

    pub fn has_access(&self, now: i64) -> bool {
        if self.is_subscribed {
            return true;
        }

        match self.trial_ends_at {
            Some(trial_ends_at) => now < trial_ends_at,
            None => false,
        }
    }

    pub fn status(&self, now: i64) -> SubscriptionStatus {
        SubscriptionStatus {
            is_subscribed: self.is_subscribed,
            trial_ends_at: self.trial_ends_at,
            days_left_in_trial: self.days_left_in_trial(now),
            has_access: self.has_access(now),
        }
    }
}

use std::sync::Mutex;

/// Limits come from configuration; the tracker itself is constructed once in
/// `main` and shared through `web::Data`.
pub struct UsageLimits {
    pub daily_request_limit: u32,
    pub monthly_budget_cents: u32,
    pub analysis_cost_cents: u32,
}

#[derive(Default)]
struct UsageState {
    requests_today: u32,
    spent_this_month_cents: u32,
}

pub struct UsageTracker {
    limits: UsageLimits,
    state: Mutex<UsageState>,
}

impl UsageTracker {
    pub fn new(limits: UsageLimits) -> Self {
        UsageTracker {
            limits,
            state: Mutex::new(UsageState::default()),
        }
    }

    pub fn allowed(&self) -> bool {
        let state = self.state.lock().unwrap();
        state.requests_today < self.limits.daily_request_limit
    }

    pub fn within_budget(&self) -> bool {
        let state = self.state.lock().unwrap();
        state.spent_this_month_cents + self.limits.analysis_cost_cents
            <= self.limits.monthly_budget_cents
    }

    pub fn record_analysis(&self) {
        let mut state = self.state.lock().unwrap();
        state.requests_today += 1;
        state.spent_this_month_cents += self.limits.analysis_cost_cents;
        log::info!(
            "Usage: {}/{} requests today, {}c/{}c this month",
            state.requests_today,
            self.limits.daily_request_limit,
            state.spent_this_month_cents,
            self.limits.monthly_budget_cents
        );
    }

    pub fn reset(&self) {
        let mut state = self.state.lock().unwrap();
        state.requests_today = 0;
        state.spent_this_month_cents = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::{UsageLimits, UsageTracker};

    fn tracker(daily: u32, budget: u32, cost: u32) -> UsageTracker {
        UsageTracker::new(UsageLimits {
            daily_request_limit: daily,
            monthly_budget_cents: budget,
            analysis_cost_cents: cost,
        })
    }

    #[test]
    fn allowed_until_daily_limit() {
        let tracker = tracker(2, 1000, 10);
        assert!(tracker.allowed());
        tracker.record_analysis();
        assert!(tracker.allowed());
        tracker.record_analysis();
        assert!(!tracker.allowed());
    }

    #[test]
    fn budget_gate_counts_the_next_analysis() {
        let tracker = tracker(100, 25, 10);
        assert!(tracker.within_budget());
        tracker.record_analysis();
        assert!(tracker.within_budget());
        tracker.record_analysis();
        // 20c spent, next analysis would hit 30c > 25c.
        assert!(!tracker.within_budget());
    }

    #[test]
    fn reset_clears_both_counters() {
        let tracker = tracker(1, 10, 10);
        tracker.record_analysis();
        assert!(!tracker.allowed());
        assert!(!tracker.within_budget());

        tracker.reset();
        assert!(tracker.allowed());
        assert!(tracker.within_budget());
    }
}

//! Analytics module - derived views recomputed on demand, never persisted.

mod analytics_model;
mod analytics_service;

pub use analytics_model::{CategoryTotal, PeriodTotal, SpendingSummary};
pub use analytics_service::{
    budget_used_percent, category_totals, daily_totals, expense_total, goal_progress_percent,
    income_total, monthly_totals, recent_expenses, savings_rate, AnalyticsService,
    AnalyticsServiceTrait,
};

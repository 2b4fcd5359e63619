use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use log::debug;
use num_traits::Zero;
use rust_decimal::Decimal;

use crate::analytics::analytics_model::{CategoryTotal, PeriodTotal, SpendingSummary};
use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::errors::Result;
use crate::expenses::{Expense, ExpenseRepositoryTrait};
use crate::incomes::{Income, IncomeRepositoryTrait};

/// Sum of all expense amounts in the snapshot.
pub fn expense_total(expenses: &[Expense]) -> Decimal {
    expenses.iter().map(|expense| expense.amount).sum()
}

/// Sum of all income amounts in the snapshot.
pub fn income_total(incomes: &[Income]) -> Decimal {
    incomes.iter().map(|income| income.amount).sum()
}

/// Spend grouped by category, largest total first.
pub fn category_totals(expenses: &[Expense]) -> Vec<CategoryTotal> {
    let mut totals: HashMap<&str, Decimal> = HashMap::new();
    for expense in expenses {
        *totals.entry(expense.category.as_str()).or_insert_with(Decimal::zero) += expense.amount;
    }

    let mut grouped: Vec<CategoryTotal> = totals
        .into_iter()
        .map(|(category, total)| CategoryTotal {
            category: category.to_string(),
            total,
        })
        .collect();
    grouped.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.category.cmp(&b.category)));
    grouped
}

/// `(income - expenses) / income * 100`; exactly 0 when income is 0.
///
/// Spending above income yields a negative rate.
pub fn savings_rate(income: Decimal, expenses: Decimal) -> Decimal {
    if income.is_zero() {
        return Decimal::zero();
    }
    ((income - expenses) / income * Decimal::ONE_HUNDRED).round_dp(DISPLAY_DECIMAL_PRECISION)
}

/// `min(expenses / income * 100, 100)`; exactly 0 when income is 0.
pub fn budget_used_percent(income: Decimal, expenses: Decimal) -> Decimal {
    if income.is_zero() {
        return Decimal::zero();
    }
    let percent = (expenses / income * Decimal::ONE_HUNDRED).round_dp(DISPLAY_DECIMAL_PRECISION);
    percent.min(Decimal::ONE_HUNDRED)
}

/// Spend bucketed by `YYYY-MM`, chronological.
pub fn monthly_totals(expenses: &[Expense]) -> Vec<PeriodTotal> {
    bucket_totals(expenses, "%Y-%m")
}

/// Spend bucketed by `YYYY-MM-DD`, chronological.
pub fn daily_totals(expenses: &[Expense]) -> Vec<PeriodTotal> {
    bucket_totals(expenses, "%Y-%m-%d")
}

fn bucket_totals(expenses: &[Expense], format: &str) -> Vec<PeriodTotal> {
    let mut totals: BTreeMap<String, Decimal> = BTreeMap::new();
    for expense in expenses {
        let bucket = expense.date.format(format).to_string();
        *totals.entry(bucket).or_insert_with(Decimal::zero) += expense.amount;
    }
    totals
        .into_iter()
        .map(|(period, total)| PeriodTotal { period, total })
        .collect()
}

/// Most recent expenses first (by date, then by creation time).
pub fn recent_expenses(expenses: &[Expense], limit: usize) -> Vec<Expense> {
    let mut recent = expenses.to_vec();
    recent.sort_by(|a, b| {
        b.date
            .cmp(&a.date)
            .then_with(|| b.created_at.cmp(&a.created_at))
    });
    recent.truncate(limit);
    recent
}

/// `min(current / target * 100, 100)`; 0 for a non-positive target.
pub fn goal_progress_percent(current: Decimal, target: Decimal) -> Decimal {
    if target <= Decimal::zero() {
        return Decimal::zero();
    }
    let percent = (current / target * Decimal::ONE_HUNDRED).round_dp(DISPLAY_DECIMAL_PRECISION);
    percent.min(Decimal::ONE_HUNDRED)
}

/// Trait for the derived-analytics service
pub trait AnalyticsServiceTrait: Send + Sync {
    fn get_spending_summary(&self, user_id: &str) -> Result<SpendingSummary>;
    fn get_category_totals(&self, user_id: &str) -> Result<Vec<CategoryTotal>>;
    fn get_monthly_totals(&self, user_id: &str) -> Result<Vec<PeriodTotal>>;
    fn get_daily_totals(&self, user_id: &str) -> Result<Vec<PeriodTotal>>;
}

/// Computes derived views over the expense and income ledgers.
pub struct AnalyticsService {
    expense_repo: Arc<dyn ExpenseRepositoryTrait>,
    income_repo: Arc<dyn IncomeRepositoryTrait>,
}

impl AnalyticsService {
    pub fn new(
        expense_repo: Arc<dyn ExpenseRepositoryTrait>,
        income_repo: Arc<dyn IncomeRepositoryTrait>,
    ) -> Self {
        AnalyticsService {
            expense_repo,
            income_repo,
        }
    }
}

impl AnalyticsServiceTrait for AnalyticsService {
    fn get_spending_summary(&self, user_id: &str) -> Result<SpendingSummary> {
        debug!("Computing spending summary for user {}", user_id);
        let expenses = self.expense_repo.load_expenses(user_id)?;
        let incomes = self.income_repo.load_incomes(user_id)?;

        let income = income_total(&incomes);
        let spent = expense_total(&expenses);

        Ok(SpendingSummary {
            income_total: income,
            expense_total: spent,
            savings_rate: savings_rate(income, spent),
            budget_used_percent: budget_used_percent(income, spent),
        })
    }

    fn get_category_totals(&self, user_id: &str) -> Result<Vec<CategoryTotal>> {
        Ok(category_totals(&self.expense_repo.load_expenses(user_id)?))
    }

    fn get_monthly_totals(&self, user_id: &str) -> Result<Vec<PeriodTotal>> {
        Ok(monthly_totals(&self.expense_repo.load_expenses(user_id)?))
    }

    fn get_daily_totals(&self, user_id: &str) -> Result<Vec<PeriodTotal>> {
        Ok(daily_totals(&self.expense_repo.load_expenses(user_id)?))
    }
}

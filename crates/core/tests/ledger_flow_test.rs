use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use fintrack_core::analytics::{AnalyticsService, AnalyticsServiceTrait};
use fintrack_core::auth::{AuthService, AuthServiceTrait, NewUser, UserRepository};
use fintrack_core::expenses::{ExpenseRepository, ExpenseService, ExpenseServiceTrait, NewExpense};
use fintrack_core::family::{
    FamilyRepository, FamilyService, FamilyServiceTrait, NewFamilyGoal, NewFamilyMember,
    NewFamilyTask,
};
use fintrack_core::goals::{GoalRepository, GoalService, GoalServiceTrait, NewGoal};
use fintrack_core::incomes::{IncomeRepository, IncomeService, IncomeServiceTrait, NewIncome};
use fintrack_core::store::{LedgerStore, MemoryStore};

fn june(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, day).unwrap()
}

#[test]
fn test_full_ledger_flow() {
    let store = LedgerStore::new(Arc::new(MemoryStore::new()));

    let auth = AuthService::new(Arc::new(UserRepository::new(store.clone())));
    let expense_repo = Arc::new(ExpenseRepository::new(store.clone()));
    let income_repo = Arc::new(IncomeRepository::new(store.clone()));
    let expenses = ExpenseService::new(expense_repo.clone());
    let incomes = IncomeService::new(income_repo.clone());
    let analytics = AnalyticsService::new(expense_repo, income_repo);
    let goals = GoalService::new(Arc::new(GoalRepository::new(store.clone())));

    // Sign up and use the session's user id to scope the ledger.
    let profile = auth
        .signup(NewUser {
            email: "dana@example.com".to_string(),
            password: "a long password".to_string(),
            name: "Dana".to_string(),
        })
        .unwrap();
    let user_id = auth.current_user().unwrap().unwrap().id;
    assert_eq!(user_id, profile.id);

    // Record a month of activity.
    incomes
        .create_income(
            &user_id,
            NewIncome {
                amount: dec!(1000),
                source: "Salary".to_string(),
                date: june(1),
                note: None,
            },
        )
        .unwrap();
    expenses
        .create_expense(
            &user_id,
            NewExpense {
                amount: dec!(300),
                category: "Rent".to_string(),
                date: june(2),
                note: None,
            },
        )
        .unwrap();

    // Derived views match the ledger.
    let summary = analytics.get_spending_summary(&user_id).unwrap();
    assert_eq!(summary.budget_used_percent, dec!(30));
    assert_eq!(summary.savings_rate, dec!(70));

    let categories = analytics.get_category_totals(&user_id).unwrap();
    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0].category, "Rent");
    assert_eq!(categories[0].total, dec!(300));

    // A personal goal tracks progress without ever persisting the flag.
    let goal = goals
        .create_goal(
            &user_id,
            NewGoal {
                name: "Emergency fund".to_string(),
                target_amount: dec!(500),
                current_amount: dec!(0),
                deadline: None,
            },
        )
        .unwrap();
    assert!(!goal.is_achieved());

    // Another user's ledger is empty.
    assert!(expenses.get_expenses("someone-else").unwrap().is_empty());
}

#[test]
fn test_family_chore_to_goal_flow() {
    let store = LedgerStore::new(Arc::new(MemoryStore::new()));
    let family = FamilyService::new(Arc::new(FamilyRepository::new(store)));

    let kid = family
        .add_member(NewFamilyMember {
            name: "Sam".to_string(),
            balance: dec!(0),
        })
        .unwrap();
    let goal = family
        .add_goal(NewFamilyGoal {
            name: "Bike".to_string(),
            target_amount: dec!(10),
        })
        .unwrap();

    // Earn a reward through the one-way task lifecycle.
    let task = family
        .add_task(NewFamilyTask {
            title: "Mow the lawn".to_string(),
            assigned_to: kid.id.clone(),
            reward: dec!(10),
        })
        .unwrap();
    family.complete_task(&task.id).unwrap();
    family.approve_task(&task.id).unwrap();

    // A second approval must not pay out again.
    assert!(family.approve_task(&task.id).is_err());

    // Spend the whole balance on the shared goal.
    let funded = family
        .contribute_to_goal(&kid.id, &goal.id, dec!(10))
        .unwrap();
    assert!(funded.is_achieved());

    let members = family.get_members().unwrap();
    assert_eq!(members[0].balance, dec!(0));
}

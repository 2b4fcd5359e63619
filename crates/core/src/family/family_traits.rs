use rust_decimal::Decimal;

use crate::errors::Result;
use crate::family::family_model::{
    FamilyGoal, FamilyMember, FamilyTask, NewFamilyGoal, NewFamilyMember, NewFamilyTask,
};

/// Trait for family ledger repository operations.
///
/// The family collections are household-shared, not user-scoped.
pub trait FamilyRepositoryTrait: Send + Sync {
    fn load_members(&self) -> Result<Vec<FamilyMember>>;
    fn get_member(&self, member_id: &str) -> Result<FamilyMember>;
    fn insert_member(&self, new_member: NewFamilyMember) -> Result<FamilyMember>;
    fn update_member(&self, member: FamilyMember) -> Result<FamilyMember>;
    fn delete_member(&self, member_id: &str) -> Result<usize>;

    fn load_tasks(&self) -> Result<Vec<FamilyTask>>;
    fn get_task(&self, task_id: &str) -> Result<FamilyTask>;
    fn insert_task(&self, new_task: NewFamilyTask) -> Result<FamilyTask>;
    fn update_task(&self, task: FamilyTask) -> Result<FamilyTask>;
    fn delete_task(&self, task_id: &str) -> Result<usize>;

    fn load_goals(&self) -> Result<Vec<FamilyGoal>>;
    fn get_goal(&self, goal_id: &str) -> Result<FamilyGoal>;
    fn insert_goal(&self, new_goal: NewFamilyGoal) -> Result<FamilyGoal>;
    fn update_goal(&self, goal: FamilyGoal) -> Result<FamilyGoal>;
    fn delete_goal(&self, goal_id: &str) -> Result<usize>;
}

/// Trait for family ledger service operations
pub trait FamilyServiceTrait: Send + Sync {
    fn get_members(&self) -> Result<Vec<FamilyMember>>;
    fn add_member(&self, new_member: NewFamilyMember) -> Result<FamilyMember>;
    fn remove_member(&self, member_id: &str) -> Result<usize>;

    fn get_tasks(&self) -> Result<Vec<FamilyTask>>;
    fn add_task(&self, new_task: NewFamilyTask) -> Result<FamilyTask>;
    fn remove_task(&self, task_id: &str) -> Result<usize>;

    /// `Open -> Done`; any other current status is an invalid transition.
    fn complete_task(&self, task_id: &str) -> Result<FamilyTask>;

    /// `Done -> Approved`; credits the assigned member's balance with the
    /// task reward exactly once. Any other current status is an invalid
    /// transition and leaves the store unchanged.
    fn approve_task(&self, task_id: &str) -> Result<FamilyTask>;

    fn get_goals(&self) -> Result<Vec<FamilyGoal>>;
    fn add_goal(&self, new_goal: NewFamilyGoal) -> Result<FamilyGoal>;
    fn remove_goal(&self, goal_id: &str) -> Result<usize>;

    /// Transfers `amount` from the member's balance into the goal's
    /// progress. Fails without mutating anything when the amount is not
    /// positive or exceeds the member's balance.
    fn contribute_to_goal(
        &self,
        member_id: &str,
        goal_id: &str,
        amount: Decimal,
    ) -> Result<FamilyGoal>;
}

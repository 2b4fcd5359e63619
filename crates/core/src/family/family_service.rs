use std::sync::Arc;

use log::debug;
use rust_decimal::Decimal;

use crate::errors::{Error, Result, ValidationError};
use crate::family::family_errors::FamilyError;
use crate::family::family_model::{
    FamilyGoal, FamilyMember, FamilyTask, NewFamilyGoal, NewFamilyMember, NewFamilyTask,
    TaskStatus,
};
use crate::family::family_traits::{FamilyRepositoryTrait, FamilyServiceTrait};

/// Service for the shared household ledger
pub struct FamilyService {
    family_repo: Arc<dyn FamilyRepositoryTrait>,
}

impl FamilyService {
    pub fn new(family_repo: Arc<dyn FamilyRepositoryTrait>) -> Self {
        FamilyService { family_repo }
    }
}

impl FamilyServiceTrait for FamilyService {
    fn get_members(&self) -> Result<Vec<FamilyMember>> {
        self.family_repo.load_members()
    }

    fn add_member(&self, new_member: NewFamilyMember) -> Result<FamilyMember> {
        new_member.validate()?;
        self.family_repo.insert_member(new_member)
    }

    fn remove_member(&self, member_id: &str) -> Result<usize> {
        self.family_repo.delete_member(member_id)
    }

    fn get_tasks(&self) -> Result<Vec<FamilyTask>> {
        self.family_repo.load_tasks()
    }

    fn add_task(&self, new_task: NewFamilyTask) -> Result<FamilyTask> {
        new_task.validate()?;
        // The assignee must exist before a reward can ever be credited.
        self.family_repo.get_member(&new_task.assigned_to)?;
        self.family_repo.insert_task(new_task)
    }

    fn remove_task(&self, task_id: &str) -> Result<usize> {
        self.family_repo.delete_task(task_id)
    }

    fn complete_task(&self, task_id: &str) -> Result<FamilyTask> {
        let mut task = self.family_repo.get_task(task_id)?;
        if task.status != TaskStatus::Open {
            return Err(Error::Family(FamilyError::InvalidTransition {
                task_id: task_id.to_string(),
                current: task.status.to_string(),
                requested: TaskStatus::Done.to_string(),
            }));
        }
        task.status = TaskStatus::Done;
        self.family_repo.update_task(task)
    }

    fn approve_task(&self, task_id: &str) -> Result<FamilyTask> {
        let task = self.family_repo.get_task(task_id)?;
        if task.status != TaskStatus::Done {
            return Err(Error::Family(FamilyError::InvalidTransition {
                task_id: task_id.to_string(),
                current: task.status.to_string(),
                requested: TaskStatus::Approved.to_string(),
            }));
        }

        let mut member = self.family_repo.get_member(&task.assigned_to)?;
        debug!(
            "Approving task '{}': crediting {} to member {}",
            task.title, task.reward, member.id
        );

        // Status change is recorded first: an Approved task never credits again.
        let mut approved = task;
        approved.status = TaskStatus::Approved;
        let approved = self.family_repo.update_task(approved)?;

        member.balance += approved.reward;
        self.family_repo.update_member(member)?;
        Ok(approved)
    }

    fn get_goals(&self) -> Result<Vec<FamilyGoal>> {
        self.family_repo.load_goals()
    }

    fn add_goal(&self, new_goal: NewFamilyGoal) -> Result<FamilyGoal> {
        new_goal.validate()?;
        self.family_repo.insert_goal(new_goal)
    }

    fn remove_goal(&self, goal_id: &str) -> Result<usize> {
        self.family_repo.delete_goal(goal_id)
    }

    fn contribute_to_goal(
        &self,
        member_id: &str,
        goal_id: &str,
        amount: Decimal,
    ) -> Result<FamilyGoal> {
        if amount <= Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Contribution amount must be positive".to_string(),
            )));
        }

        let mut member = self.family_repo.get_member(member_id)?;
        let mut goal = self.family_repo.get_goal(goal_id)?;

        if member.balance < amount {
            return Err(Error::Family(FamilyError::InsufficientBalance {
                member_id: member_id.to_string(),
                balance: member.balance,
                required: amount,
            }));
        }

        debug!(
            "Contributing {} from member {} to goal '{}'",
            amount, member.id, goal.name
        );

        // Debit before credit: value is moved, never created.
        member.balance -= amount;
        self.family_repo.update_member(member)?;

        goal.current_amount += amount;
        self.family_repo.update_goal(goal)
    }
}

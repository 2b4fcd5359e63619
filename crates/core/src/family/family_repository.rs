use chrono::Utc;
use uuid::Uuid;

use crate::constants::{FAMILY_GOALS_KEY, FAMILY_MEMBERS_KEY, FAMILY_TASKS_KEY};
use crate::errors::{Error, Result};
use crate::family::family_model::{
    FamilyGoal, FamilyMember, FamilyTask, NewFamilyGoal, NewFamilyMember, NewFamilyTask,
    TaskStatus,
};
use crate::family::family_traits::FamilyRepositoryTrait;
use crate::store::LedgerStore;

pub struct FamilyRepository {
    store: LedgerStore,
}

impl FamilyRepository {
    pub fn new(store: LedgerStore) -> Self {
        FamilyRepository { store }
    }
}

impl FamilyRepositoryTrait for FamilyRepository {
    fn load_members(&self) -> Result<Vec<FamilyMember>> {
        self.store.get_collection(FAMILY_MEMBERS_KEY)
    }

    fn get_member(&self, member_id: &str) -> Result<FamilyMember> {
        self.load_members()?
            .into_iter()
            .find(|member| member.id == member_id)
            .ok_or_else(|| Error::NotFound(format!("Family member '{}'", member_id)))
    }

    fn insert_member(&self, new_member: NewFamilyMember) -> Result<FamilyMember> {
        let mut members = self.load_members()?;
        let member = FamilyMember {
            id: Uuid::new_v4().to_string(),
            name: new_member.name,
            balance: new_member.balance,
            created_at: Utc::now(),
        };
        members.push(member.clone());
        self.store.put_collection(FAMILY_MEMBERS_KEY, &members)?;
        Ok(member)
    }

    fn update_member(&self, member: FamilyMember) -> Result<FamilyMember> {
        let mut members = self.load_members()?;
        let existing = members
            .iter_mut()
            .find(|candidate| candidate.id == member.id)
            .ok_or_else(|| Error::NotFound(format!("Family member '{}'", member.id)))?;
        *existing = member.clone();
        self.store.put_collection(FAMILY_MEMBERS_KEY, &members)?;
        Ok(member)
    }

    fn delete_member(&self, member_id: &str) -> Result<usize> {
        let mut members = self.load_members()?;
        let before = members.len();
        members.retain(|member| member.id != member_id);
        let removed = before - members.len();
        if removed > 0 {
            self.store.put_collection(FAMILY_MEMBERS_KEY, &members)?;
        }
        Ok(removed)
    }

    fn load_tasks(&self) -> Result<Vec<FamilyTask>> {
        self.store.get_collection(FAMILY_TASKS_KEY)
    }

    fn get_task(&self, task_id: &str) -> Result<FamilyTask> {
        self.load_tasks()?
            .into_iter()
            .find(|task| task.id == task_id)
            .ok_or_else(|| Error::NotFound(format!("Family task '{}'", task_id)))
    }

    fn insert_task(&self, new_task: NewFamilyTask) -> Result<FamilyTask> {
        let mut tasks = self.load_tasks()?;
        let task = FamilyTask {
            id: Uuid::new_v4().to_string(),
            title: new_task.title,
            assigned_to: new_task.assigned_to,
            reward: new_task.reward,
            status: TaskStatus::Open,
            created_at: Utc::now(),
        };
        tasks.push(task.clone());
        self.store.put_collection(FAMILY_TASKS_KEY, &tasks)?;
        Ok(task)
    }

    fn update_task(&self, task: FamilyTask) -> Result<FamilyTask> {
        let mut tasks = self.load_tasks()?;
        let existing = tasks
            .iter_mut()
            .find(|candidate| candidate.id == task.id)
            .ok_or_else(|| Error::NotFound(format!("Family task '{}'", task.id)))?;
        *existing = task.clone();
        self.store.put_collection(FAMILY_TASKS_KEY, &tasks)?;
        Ok(task)
    }

    fn delete_task(&self, task_id: &str) -> Result<usize> {
        let mut tasks = self.load_tasks()?;
        let before = tasks.len();
        tasks.retain(|task| task.id != task_id);
        let removed = before - tasks.len();
        if removed > 0 {
            self.store.put_collection(FAMILY_TASKS_KEY, &tasks)?;
        }
        Ok(removed)
    }

    fn load_goals(&self) -> Result<Vec<FamilyGoal>> {
        self.store.get_collection(FAMILY_GOALS_KEY)
    }

    fn get_goal(&self, goal_id: &str) -> Result<FamilyGoal> {
        self.load_goals()?
            .into_iter()
            .find(|goal| goal.id == goal_id)
            .ok_or_else(|| Error::NotFound(format!("Family goal '{}'", goal_id)))
    }

    fn insert_goal(&self, new_goal: NewFamilyGoal) -> Result<FamilyGoal> {
        let mut goals = self.load_goals()?;
        let goal = FamilyGoal {
            id: Uuid::new_v4().to_string(),
            name: new_goal.name,
            target_amount: new_goal.target_amount,
            current_amount: rust_decimal::Decimal::ZERO,
            created_at: Utc::now(),
        };
        goals.push(goal.clone());
        self.store.put_collection(FAMILY_GOALS_KEY, &goals)?;
        Ok(goal)
    }

    fn update_goal(&self, goal: FamilyGoal) -> Result<FamilyGoal> {
        let mut goals = self.load_goals()?;
        let existing = goals
            .iter_mut()
            .find(|candidate| candidate.id == goal.id)
            .ok_or_else(|| Error::NotFound(format!("Family goal '{}'", goal.id)))?;
        *existing = goal.clone();
        self.store.put_collection(FAMILY_GOALS_KEY, &goals)?;
        Ok(goal)
    }

    fn delete_goal(&self, goal_id: &str) -> Result<usize> {
        let mut goals = self.load_goals()?;
        let before = goals.len();
        goals.retain(|goal| goal.id != goal_id);
        let removed = before - goals.len();
        if removed > 0 {
            self.store.put_collection(FAMILY_GOALS_KEY, &goals)?;
        }
        Ok(removed)
    }
}

use chrono::Utc;
use uuid::Uuid;

use crate::constants::GOALS_KEY_PREFIX;
use crate::errors::{Error, Result};
use crate::goals::goals_model::{Goal, GoalUpdate, NewGoal};
use crate::goals::goals_traits::GoalRepositoryTrait;
use crate::store::LedgerStore;

pub struct GoalRepository {
    store: LedgerStore,
}

impl GoalRepository {
    pub fn new(store: LedgerStore) -> Self {
        GoalRepository { store }
    }

    fn key(user_id: &str) -> String {
        LedgerStore::user_key(GOALS_KEY_PREFIX, user_id)
    }
}

impl GoalRepositoryTrait for GoalRepository {
    fn load_goals(&self, user_id: &str) -> Result<Vec<Goal>> {
        self.store.get_collection(&Self::key(user_id))
    }

    fn get_goal(&self, user_id: &str, goal_id: &str) -> Result<Goal> {
        self.load_goals(user_id)?
            .into_iter()
            .find(|goal| goal.id == goal_id)
            .ok_or_else(|| Error::NotFound(format!("Goal '{}'", goal_id)))
    }

    fn insert_goal(&self, user_id: &str, new_goal: NewGoal) -> Result<Goal> {
        let key = Self::key(user_id);
        let mut goals: Vec<Goal> = self.store.get_collection(&key)?;

        let goal = Goal {
            id: Uuid::new_v4().to_string(),
            name: new_goal.name,
            target_amount: new_goal.target_amount,
            current_amount: new_goal.current_amount,
            deadline: new_goal.deadline,
            user_id: user_id.to_string(),
            created_at: Utc::now(),
        };

        goals.push(goal.clone());
        self.store.put_collection(&key, &goals)?;
        Ok(goal)
    }

    fn update_goal(&self, user_id: &str, goal_update: GoalUpdate) -> Result<Goal> {
        let key = Self::key(user_id);
        let mut goals: Vec<Goal> = self.store.get_collection(&key)?;

        let existing = goals
            .iter_mut()
            .find(|goal| goal.id == goal_update.id)
            .ok_or_else(|| Error::NotFound(format!("Goal '{}'", goal_update.id)))?;

        existing.name = goal_update.name;
        existing.target_amount = goal_update.target_amount;
        existing.current_amount = goal_update.current_amount;
        existing.deadline = goal_update.deadline;
        let updated = existing.clone();

        self.store.put_collection(&key, &goals)?;
        Ok(updated)
    }

    fn delete_goal(&self, user_id: &str, goal_id: &str) -> Result<usize> {
        let key = Self::key(user_id);
        let mut goals: Vec<Goal> = self.store.get_collection(&key)?;

        let before = goals.len();
        goals.retain(|goal| goal.id != goal_id);
        let removed = before - goals.len();

        if removed > 0 {
            self.store.put_collection(&key, &goals)?;
        }
        Ok(removed)
    }
}

use std::sync::Arc;

use log::debug;

use crate::errors::Result;
use crate::goals::goals_model::{Goal, GoalUpdate, NewGoal};
use crate::goals::goals_traits::{GoalRepositoryTrait, GoalServiceTrait};

/// Service for managing personal savings goals
pub struct GoalService {
    goal_repo: Arc<dyn GoalRepositoryTrait>,
}

impl GoalService {
    pub fn new(goal_repo: Arc<dyn GoalRepositoryTrait>) -> Self {
        GoalService { goal_repo }
    }
}

impl GoalServiceTrait for GoalService {
    fn get_goals(&self, user_id: &str) -> Result<Vec<Goal>> {
        self.goal_repo.load_goals(user_id)
    }

    fn get_goal(&self, user_id: &str, goal_id: &str) -> Result<Goal> {
        self.goal_repo.get_goal(user_id, goal_id)
    }

    fn create_goal(&self, user_id: &str, new_goal: NewGoal) -> Result<Goal> {
        debug!("Creating goal '{}' for user {}", new_goal.name, user_id);
        new_goal.validate()?;
        self.goal_repo.insert_goal(user_id, new_goal)
    }

    fn update_goal(&self, user_id: &str, goal_update: GoalUpdate) -> Result<Goal> {
        goal_update.validate()?;
        self.goal_repo.update_goal(user_id, goal_update)
    }

    fn delete_goal(&self, user_id: &str, goal_id: &str) -> Result<usize> {
        self.goal_repo.delete_goal(user_id, goal_id)
    }
}

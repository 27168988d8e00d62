//! A hero with a task list.

use std::cmp::Ordering;

use crate::processing::{filter, map};
use crate::types::{Food, Task, TaskField};

/// Health every hero starts with.
pub const STARTING_HEALTH: f64 = 100.0;

/// Multiplier applied to food that matches the hero's favourite.
pub const FAVOURITE_FOOD_BONUS: f64 = 1.5;

/// Poisoned food costs this many times its replenish value.
pub const POISON_PENALTY: f64 = 4.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Hero {
    pub name: String,
    pub health: f64,
    pub favourite_food: String,
    tasks: Vec<Task>,
}

impl Hero {
    pub fn new(name: impl Into<String>, favourite_food: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            health: STARTING_HEALTH,
            favourite_food: favourite_food.into(),
            tasks: Vec::new(),
        }
    }

    pub fn talk(&self) -> String {
        format!("I am {}", self.name)
    }

    pub fn add_task(&mut self, task: Task) {
        self.tasks.push(task);
    }

    pub fn amount_of_tasks(&self) -> usize {
        self.tasks.len()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Restore health from `food`, with a bonus if it is the hero's favourite.
    ///
    /// Poisoned food takes health away instead, favourite or not.
    pub fn eat(&mut self, food: &Food) {
        if food.poisonous {
            self.health -= food.replenish_value * POISON_PENALTY;
        } else if food.name == self.favourite_food {
            self.health += food.replenish_value * FAVOURITE_FOOD_BONUS;
        } else {
            self.health += food.replenish_value;
        }
    }

    /// Tasks ordered by `field`, highest first.
    ///
    /// Tasks with equal keys keep their insertion order. The hero's own list is not reordered.
    pub fn sort_tasks(&self, field: TaskField) -> Vec<Task> {
        let mut sorted = map(&self.tasks, Task::clone);
        sorted.sort_by(|a, b| compare_desc(a, b, field));
        sorted
    }

    /// Mark the task at `index` as completed. Returns `false` if there is no such task.
    pub fn complete_task(&mut self, index: usize) -> bool {
        match self.tasks.get_mut(index) {
            Some(task) => {
                task.completed = true;
                true
            }
            None => false,
        }
    }

    pub fn tasks_by_completion(&self, completed: bool) -> Vec<Task> {
        filter(&self.tasks, |task| task.completed == completed)
    }
}

fn compare_desc(a: &Task, b: &Task, field: TaskField) -> Ordering {
    match field {
        TaskField::Difficulty => b.difficulty.cmp(&a.difficulty),
        TaskField::Urgency => b.urgency.cmp(&a.urgency),
        TaskField::Reward => b.reward.cmp(&a.reward),
    }
}

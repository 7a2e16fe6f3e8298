use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::task::{DEFAULT_REWARD_TOKEN, Reward};
use crate::errors::CoreError;

const DEFAULT_PRIORITY: &str = "medium";
const DEFAULT_CATEGORY: &str = "other";

/// Fields supplied when creating a task. The creator travels separately as
/// the caller address.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub priority: Option<String>,
    pub category: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub estimated_hours: Option<f64>,
    pub reward: Reward,
    pub tags: Vec<String>,
}

impl NewTask {
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            priority: None,
            category: None,
            due_date: None,
            estimated_hours: None,
            reward: Reward::default(),
            tags: Vec::new(),
        }
    }

    #[must_use]
    pub fn priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    #[must_use]
    pub const fn due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    #[must_use]
    pub const fn estimated_hours(mut self, hours: f64) -> Self {
        self.estimated_hours = Some(hours);
        self
    }

    #[must_use]
    pub fn reward(mut self, amount: f64, token: impl Into<String>) -> Self {
        self.reward = Reward {
            amount,
            token: token.into(),
        };
        self
    }

    #[must_use]
    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Check required fields and normalize the rest.
    ///
    /// Trims text, fills in default priority, category and reward token, drops
    /// blank tags. Tags may not contain commas: the store joins them with one.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` on a blank title or description, a tag
    /// containing a comma, or a negative/non-finite number.
    pub fn validate(self) -> Result<Self, CoreError> {
        let title = self.title.trim().to_string();
        if title.is_empty() {
            return Err(CoreError::Validation("title is required".into()));
        }
        let description = self.description.trim().to_string();
        if description.is_empty() {
            return Err(CoreError::Validation("description is required".into()));
        }

        let mut tags = Vec::with_capacity(self.tags.len());
        for tag in self.tags {
            let tag = tag.trim();
            if tag.is_empty() {
                continue;
            }
            if tag.contains(',') {
                return Err(CoreError::Validation(format!(
                    "tag '{tag}' must not contain a comma"
                )));
            }
            tags.push(tag.to_string());
        }

        if let Some(hours) = self.estimated_hours {
            if !hours.is_finite() || hours < 0.0 {
                return Err(CoreError::Validation(format!(
                    "estimated hours must be a non-negative number, got {hours}"
                )));
            }
        }
        if !self.reward.amount.is_finite() || self.reward.amount < 0.0 {
            return Err(CoreError::Validation(format!(
                "reward amount must be a non-negative number, got {}",
                self.reward.amount
            )));
        }
        let token = self.reward.token.trim();
        let reward = Reward {
            amount: self.reward.amount,
            token: if token.is_empty() {
                DEFAULT_REWARD_TOKEN.to_string()
            } else {
                token.to_string()
            },
        };

        Ok(Self {
            title,
            description,
            priority: Some(non_blank_or(self.priority, DEFAULT_PRIORITY)),
            category: Some(non_blank_or(self.category, DEFAULT_CATEGORY)),
            due_date: self.due_date,
            estimated_hours: self.estimated_hours,
            reward,
            tags,
        })
    }
}

fn non_blank_or(value: Option<String>, fallback: &str) -> String {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

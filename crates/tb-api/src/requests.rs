//! Request bodies and query strings.
//!
//! Create bodies use the dashboard's camelCase field names. Numeric fields
//! arrive either as JSON numbers or as form strings (`"2.5"`, `""`), so they go
//! through `flexible_number`.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use tb_core::CoreError;
use tb_core::entities::{NewTask, Reward};
use tb_core::enums::TaskStatus;
use tb_db::TaskFilter;

#[derive(Debug, Default, Deserialize)]
pub struct RewardRequest {
    #[serde(default, deserialize_with = "flexible_number")]
    pub amount: Option<f64>,
    #[serde(default)]
    pub token: Option<String>,
}

/// Body of `POST /tasks`.
///
/// `assignee` is accepted for compatibility with older clients and ignored:
/// new tasks are always unassigned.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub creator: Option<String>,
    #[serde(default)]
    pub assignee: Option<String>,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default, deserialize_with = "flexible_number")]
    pub estimated_hours: Option<f64>,
    #[serde(default)]
    pub reward: Option<RewardRequest>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl CreateTaskRequest {
    /// Convert into domain input. Validation of the values happens in the service.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` for a due date that is not `YYYY-MM-DD`.
    pub fn into_new_task(self) -> Result<NewTask, CoreError> {
        let due_date = match self.due_date.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
                CoreError::Validation(format!("dueDate must be YYYY-MM-DD, got '{raw}'"))
            })?),
        };
        let reward = self.reward.unwrap_or_default();

        Ok(NewTask {
            title: self.title,
            description: self.description,
            priority: self.priority,
            category: self.category,
            due_date,
            estimated_hours: self.estimated_hours,
            reward: Reward {
                amount: reward.amount.unwrap_or_default(),
                token: reward.token.unwrap_or_default(),
            },
            tags: self.tags,
        })
    }
}

/// Body of `PUT /tasks/:id`.
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: TaskStatus,
}

/// Query string of `GET /tasks`.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub status: Option<String>,
    pub priority: Option<String>,
    pub category: Option<String>,
    pub assignee: Option<String>,
    pub creator: Option<String>,
    pub search: Option<String>,
    pub limit: Option<u32>,
}

impl ListQuery {
    /// # Errors
    ///
    /// Returns `CoreError::Validation` for an unknown status. `all` and an
    /// empty value mean no status filter.
    pub fn into_filter(self) -> Result<TaskFilter, CoreError> {
        let status = match self.status.as_deref().map(str::trim) {
            None | Some("" | "all") => None,
            Some(raw) => Some(raw.parse::<TaskStatus>()?),
        };
        Ok(TaskFilter {
            status,
            priority: self.priority,
            category: self.category,
            assignee: self.assignee,
            creator: self.creator,
            search: self.search,
            limit: self.limit,
        })
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(f64),
    Text(String),
}

/// Accept `2.5`, `"2.5"`, `""` and `null`. Blank strings read as absent.
fn flexible_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrString::Number(n)) => Ok(Some(n)),
        Some(NumberOrString::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(NumberOrString::Text(s)) => s
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("expected a number, got '{s}'"))),
    }
}

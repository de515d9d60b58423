use serde::{Deserialize, Serialize};

/// A job posting as seen by the salary estimator.
///
/// `level`, `size` and `job_category` come from the job feed and are often
/// missing; an empty string is treated the same as an absent value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobDescriptor {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub category: String,
    /// Intern | Engineer | Manager | Executive
    #[serde(default)]
    pub level: Option<String>,
    /// xs | s | m | l | xl
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub job_category: Option<String>,
}

impl JobDescriptor {
    pub fn level(&self) -> Option<&str> {
        present(&self.level)
    }

    pub fn size(&self) -> Option<&str> {
        present(&self.size)
    }

    pub fn job_category(&self) -> Option<&str> {
        present(&self.job_category)
    }

    /// Cache key shared by every API-backed lookup for this posting.
    pub fn cache_key(&self) -> String {
        format!(
            "{}-{}",
            self.company.to_lowercase(),
            self.title.to_lowercase()
        )
    }
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|v| !v.is_empty())
}

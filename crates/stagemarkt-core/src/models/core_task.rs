use serde::{Deserialize, Serialize};

use super::de::{lenient_u32, nullable};

/// Core task (kerntaak) of a qualification
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreTask {
    #[serde(deserialize_with = "nullable")]
    pub id: String,
    #[serde(deserialize_with = "nullable")]
    pub code: String,
    #[serde(rename(deserialize = "naam"), deserialize_with = "nullable")]
    pub name: String,
    #[serde(rename(deserialize = "aantalSubtaken"), deserialize_with = "lenient_u32")]
    pub subtask_count: u32,
    #[serde(rename(deserialize = "aantalUitvoerbaar"), deserialize_with = "lenient_u32")]
    pub executable_count: u32,
    #[serde(rename(deserialize = "subtaken"), deserialize_with = "nullable")]
    pub subtasks: Vec<Subtask>,
}

impl CoreTask {
    /// Subtasks that can be carried out at this workplace
    pub fn executable_subtasks(&self) -> impl Iterator<Item = &Subtask> {
        self.subtasks.iter().filter(|s| s.executable)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Subtask {
    #[serde(deserialize_with = "nullable")]
    pub id: String,
    #[serde(deserialize_with = "nullable")]
    pub code: String,
    #[serde(rename(deserialize = "naam"), deserialize_with = "nullable")]
    pub name: String,
    #[serde(rename(deserialize = "uitvoerbaar"), deserialize_with = "nullable")]
    pub executable: bool,
}

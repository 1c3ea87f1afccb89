use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Which of the two presentations a session is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ViewMode {
    #[default]
    Questionnaire,
    Results,
}

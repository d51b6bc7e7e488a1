use serde::{Deserialize, Serialize};

/// Identifier scoping a held grouping to one user session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub String);

/// One formed group; member order is placement order and carries no meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub members: Vec<String>,
}

impl Group {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Ordered sequence of groups covering the roster exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partition {
    pub groups: Vec<Group>,
}

impl Partition {
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub fn member_count(&self) -> usize {
        self.groups.iter().map(Group::len).sum()
    }
}

/// Inputs for one generate action. Both text fields accept newline-, comma-,
/// or semicolon-separated names.
#[derive(Debug, Clone, Deserialize)]
pub struct GroupingRequest {
    pub names_text: String,
    #[serde(default)]
    pub separation_text: String,
    pub group_size: usize,
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Display payload for one rendered group.
#[derive(Debug, Clone, Serialize)]
pub struct GroupView {
    pub index: usize,
    pub size: usize,
    pub color: String,
    pub members: Vec<String>,
}

/// User-input failures raised while forming groups. All are local to one
/// generate action and safe to retry with corrected input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GroupingError {
    #[error("the roster is empty; paste at least one name")]
    EmptyRoster,
    #[error(
        "{separated} names require separation but only {groups} groups are planned; \
         lower the group size or shorten the separation list"
    )]
    TooManySeparated { separated: usize, groups: usize },
    #[error("no group has room left for a separation-required name within the planned sizes")]
    NoRoomForSeparated,
    #[error("separation list contains a name that is not on the roster: {0}")]
    UnknownSeparated(String),
}

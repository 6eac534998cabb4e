use crate::domain::skills::GROUP_COUNT;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SorterError {
    #[error("invalid skill string `{value}`: {reason}")]
    InvalidSkillString { value: String, reason: String },

    #[error("unknown skill `{skill}`")]
    UnknownSkill { skill: char },

    #[error("no skill at index {index}")]
    SkillIndexOutOfRange { index: usize },

    #[error("group is full (capacity {capacity})")]
    GroupFull { capacity: usize },

    #[error("group index {index} is out of range [0, {})", GROUP_COUNT)]
    InvalidGroupIndex { index: usize },

    #[error("no volunteer with skills `{skills}` in group {group}")]
    SkillSetNotFound { skills: String, group: usize },

    #[error("cannot add volunteer: all groups are full")]
    AllocationImpossible,

    #[error("expected {expected} serialized groups, found {found}")]
    GroupCountMismatch { expected: usize, found: usize },

    #[error("malformed serialized data: {message}")]
    DeserializationMalformed { message: String },

    #[error("variance of an empty data set is undefined")]
    EmptyDataSet,

    #[error("configuration error: {message}")]
    ConfigError { message: String },

    #[error("invalid value `{value}` for {field}: {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SorterError>;

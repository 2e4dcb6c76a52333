use serde::{Deserialize, Serialize};
use std::{fmt, num::ParseIntError, str::FromStr};

/// Identifier of a task, assigned by the server on creation.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for TaskId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_id_roundtrip() {
        let parsed: TaskId = "42".parse().unwrap_or_else(|err| panic!("must parse id: {err}"));
        assert_eq!(parsed, TaskId(42));
        assert_eq!(parsed.to_string(), "42");
    }

    #[test]
    fn task_id_serializes_as_plain_number() {
        let json = serde_json::to_string(&TaskId(7)).unwrap_or_else(|err| panic!("serialize: {err}"));
        assert_eq!(json, "7");
    }

    #[test]
    fn task_id_rejects_garbage() {
        assert!("abc".parse::<TaskId>().is_err());
    }
}

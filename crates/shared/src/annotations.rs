use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Annotation keys written on every processed frame.
pub mod keys {
    pub const LEDGE_GRAB_COUNT: &str = "ledge_grab_count";
    pub const TECH_LOCKOUT: &str = "tech_lockout";
    pub const METEOR_JUMP_LOCKOUT: &str = "meteor_jump_lockout";
    pub const METEOR_FF_LOCKOUT: &str = "meteor_ff_lockout";
    pub const POWERSHIELDED_LAST: &str = "powershielded_last";

    pub const REQUIRED: [&str; 5] = [
        LEDGE_GRAB_COUNT,
        TECH_LOCKOUT,
        METEOR_JUMP_LOCKOUT,
        METEOR_FF_LOCKOUT,
        POWERSHIELDED_LAST,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Annotation {
    Bool(bool),
    Int(i64),
}

/// Facts derived by the perception pipeline, keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Annotations(BTreeMap<String, Annotation>);

impl Annotations {
    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn set_int(&mut self, key: &str, value: i64) {
        self.0.insert(key.to_string(), Annotation::Int(value));
    }

    pub fn set_bool(&mut self, key: &str, value: bool) {
        self.0.insert(key.to_string(), Annotation::Bool(value));
    }

    pub fn get(&self, key: &str) -> Option<Annotation> {
        self.0.get(key).copied()
    }

    pub fn int(&self, key: &str) -> Option<i64> {
        match self.get(key)? {
            Annotation::Int(v) => Some(v),
            Annotation::Bool(_) => None,
        }
    }

    pub fn flag(&self, key: &str) -> Option<bool> {
        match self.get(key)? {
            Annotation::Bool(v) => Some(v),
            Annotation::Int(_) => None,
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Annotation)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

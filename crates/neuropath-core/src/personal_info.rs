//! Parent/child details entered on the personal info form.
//!
//! Each field is its own persisted value (a JSON scalar under its own key),
//! read and written independently. The store does not range-check the age;
//! the form constrains it to [`AGE_RANGE`] before calling a setter.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ValidationError};
use crate::storage::{
    load_json_or_default, save_json, KeyValueStore, AGE_KEY, CHILD_NAME_KEY, GENDER_KEY,
    PARENT_NAME_KEY,
};

/// Ages offered by the form.
pub const AGE_RANGE: RangeInclusive<u32> = 1..=18;

pub const DEFAULT_AGE: u32 = 3;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Gender::ALL
            .into_iter()
            .find(|g| g.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ValidationError::UnknownGender(s.to_string()))
    }
}

/// The whole form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub parent_name: String,
    pub child_name: String,
    pub gender: Gender,
    pub age: u32,
}

impl Default for PersonalInfo {
    fn default() -> Self {
        Self {
            parent_name: String::new(),
            child_name: String::new(),
            gender: Gender::default(),
            age: DEFAULT_AGE,
        }
    }
}

/// Range check for form input.
pub fn validate_age(age: u32) -> Result<u32, ValidationError> {
    if AGE_RANGE.contains(&age) {
        Ok(age)
    } else {
        Err(ValidationError::InvalidValue {
            field: "age".to_string(),
            message: format!(
                "must be between {} and {}",
                AGE_RANGE.start(),
                AGE_RANGE.end()
            ),
        })
    }
}

/// Per-field access to the persisted form values.
pub struct PersonalInfoStore<S> {
    store: S,
}

impl<S: KeyValueStore> PersonalInfoStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn parent_name(&self) -> String {
        load_json_or_default(&self.store, PARENT_NAME_KEY)
    }

    pub fn set_parent_name(&self, name: &str) -> Result<()> {
        save_json(&self.store, PARENT_NAME_KEY, name)
    }

    pub fn child_name(&self) -> String {
        load_json_or_default(&self.store, CHILD_NAME_KEY)
    }

    pub fn set_child_name(&self, name: &str) -> Result<()> {
        save_json(&self.store, CHILD_NAME_KEY, name)
    }

    pub fn gender(&self) -> Gender {
        load_json_or_default(&self.store, GENDER_KEY)
    }

    pub fn set_gender(&self, gender: Gender) -> Result<()> {
        save_json(&self.store, GENDER_KEY, &gender)
    }

    /// Stored age, [`DEFAULT_AGE`] when missing or unreadable.
    pub fn age(&self) -> u32 {
        let age: Option<u32> = load_json_or_default(&self.store, AGE_KEY);
        age.unwrap_or(DEFAULT_AGE)
    }

    pub fn set_age(&self, age: u32) -> Result<()> {
        save_json(&self.store, AGE_KEY, &age)
    }

    /// Assemble the form from its four values.
    pub fn load(&self) -> PersonalInfo {
        PersonalInfo {
            parent_name: self.parent_name(),
            child_name: self.child_name(),
            gender: self.gender(),
            age: self.age(),
        }
    }

    /// Write all four values.
    pub fn save(&self, info: &PersonalInfo) -> Result<()> {
        self.set_parent_name(&info.parent_name)?;
        self.set_child_name(&info.child_name)?;
        self.set_gender(info.gender)?;
        self.set_age(info.age)?;
        Ok(())
    }
}

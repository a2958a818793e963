use std::fmt;

use chrono::{Local, Timelike};

use crate::constants::MEAL_HOURS;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Category {
    pub name: String,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Category { name: name.into() }
    }
}

/// A single row of the menu list.
///
/// `category` is matched against [`Category::name`] by exact string
/// comparison and `meal_type` is kept verbatim, so rows with an unknown
/// meal type are only reachable through the category-only fallback.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub category: String,
    pub meal_type: String,
}

impl Recipe {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        meal_type: impl Into<String>,
    ) -> Self {
        Recipe {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            meal_type: meal_type.into(),
        }
    }

    pub fn bucket(&self) -> Option<MealBucket> {
        MealBucket::from_code(&self.meal_type)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MealBucket {
    Morning,
    Lunch,
    Dinner,
}

impl MealBucket {
    pub const ALL: [MealBucket; 3] = [MealBucket::Morning, MealBucket::Lunch, MealBucket::Dinner];

    pub fn from_hour(hour: u32) -> Self {
        let hour = hour % 24;
        if (MEAL_HOURS.morning_start..MEAL_HOURS.lunch_start).contains(&hour) {
            MealBucket::Morning
        } else if (MEAL_HOURS.lunch_start..MEAL_HOURS.dinner_start).contains(&hour) {
            MealBucket::Lunch
        } else {
            MealBucket::Dinner
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "M" => Some(MealBucket::Morning),
            "L" => Some(MealBucket::Lunch),
            "D" => Some(MealBucket::Dinner),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            MealBucket::Morning => "M",
            MealBucket::Lunch => "L",
            MealBucket::Dinner => "D",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MealBucket::Morning => "breakfast",
            MealBucket::Lunch => "lunch",
            MealBucket::Dinner => "dinner",
        }
    }
}

impl fmt::Display for MealBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Source of the local hour used for bucket and theme decisions.
pub trait HourSource {
    fn current_hour(&self) -> u32;

    fn current_bucket(&self) -> MealBucket {
        MealBucket::from_hour(self.current_hour())
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct LocalClock;

impl HourSource for LocalClock {
    fn current_hour(&self) -> u32 {
        Local::now().hour()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedHour(pub u32);

impl HourSource for FixedHour {
    fn current_hour(&self) -> u32 {
        self.0
    }
}

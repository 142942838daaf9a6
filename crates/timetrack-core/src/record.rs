//! Person records placed on the timeline.
//!
//! A [`PersonRecord`] is the single data entity of TimeTrack: a historical
//! figure with a validated life span. Records are immutable once built;
//! every constructor path, including deserialization, goes through
//! [`PersonRecord::new`] so the life-span invariant always holds.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Date format shared by the CSV and JSON representations.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Date format used in human-readable tooltips.
const DISPLAY_DATE_FORMAT: &str = "%d/%m/%Y";

/// Reasons a record cannot be created.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("death date {death} is earlier than birth date {birth}")]
    DeathBeforeBirth { birth: NaiveDate, death: NaiveDate },
}

/// A historical figure with a name, a life span and a free-text description.
///
/// # Examples
///
/// ```
/// # use chrono::NaiveDate;
/// # use timetrack_core::record::PersonRecord;
/// let born = NaiveDate::from_ymd_opt(1879, 3, 14).unwrap();
/// let died = NaiveDate::from_ymd_opt(1955, 4, 18).unwrap();
///
/// let einstein = PersonRecord::new("Albert Einstein", born, Some(died), "Physicist").unwrap();
/// assert_eq!(einstein.age_at_death(), Some(76));
/// assert_eq!(einstein.to_string(), "Albert Einstein (1879 - 1955)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPersonRecord")]
pub struct PersonRecord {
    name: String,
    birth_date: NaiveDate,
    death_date: Option<NaiveDate>,
    description: String,
}

/// Unvalidated shape of a serialized record.
#[derive(Deserialize)]
struct RawPersonRecord {
    name: String,
    birth_date: NaiveDate,
    #[serde(default)]
    death_date: Option<NaiveDate>,
    #[serde(default)]
    description: String,
}

impl TryFrom<RawPersonRecord> for PersonRecord {
    type Error = RecordError;

    fn try_from(raw: RawPersonRecord) -> Result<Self, Self::Error> {
        Self::new(raw.name, raw.birth_date, raw.death_date, raw.description)
    }
}

impl PersonRecord {
    /// Creates a validated record.
    ///
    /// The name is trimmed; the description is kept verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::EmptyName`] when the trimmed name is empty and
    /// [`RecordError::DeathBeforeBirth`] when the death date precedes the
    /// birth date.
    pub fn new(
        name: impl Into<String>,
        birth_date: NaiveDate,
        death_date: Option<NaiveDate>,
        description: impl Into<String>,
    ) -> Result<Self, RecordError> {
        let name = name.into();
        let name = name.trim();
        if name.is_empty() {
            return Err(RecordError::EmptyName);
        }

        if let Some(death) = death_date
            && death < birth_date
        {
            return Err(RecordError::DeathBeforeBirth {
                birth: birth_date,
                death,
            });
        }

        Ok(Self {
            name: name.to_string(),
            birth_date,
            death_date,
            description: description.into(),
        })
    }

    /// Returns the person's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the birth date.
    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    /// Returns the death date, or `None` for a living person.
    pub fn death_date(&self) -> Option<NaiveDate> {
        self.death_date
    }

    /// Returns the free-text description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns `true` when no death date is recorded.
    pub fn is_living(&self) -> bool {
        self.death_date.is_none()
    }

    /// Returns `true` if this record has the given identity.
    ///
    /// Two records are the same person when both the name and the birth
    /// date match exactly.
    pub fn has_identity(&self, name: &str, birth_date: NaiveDate) -> bool {
        self.name == name && self.birth_date == birth_date
    }

    /// Age in completed years at the date of death.
    ///
    /// The age is one less than the difference in years when the death
    /// anniversary had not yet been reached. Returns `None` for the living.
    ///
    /// # Examples
    ///
    /// ```
    /// # use chrono::NaiveDate;
    /// # use timetrack_core::record::PersonRecord;
    /// let born = NaiveDate::from_ymd_opt(1900, 6, 15).unwrap();
    /// let day_before = NaiveDate::from_ymd_opt(1980, 6, 14).unwrap();
    ///
    /// let person = PersonRecord::new("A", born, Some(day_before), "").unwrap();
    /// assert_eq!(person.age_at_death(), Some(79));
    /// ```
    pub fn age_at_death(&self) -> Option<u32> {
        let death = self.death_date?;
        let mut age = death.year() - self.birth_date.year();
        if (death.month(), death.day()) < (self.birth_date.month(), self.birth_date.day()) {
            age -= 1;
        }
        u32::try_from(age).ok()
    }

    /// Age at death, or `-1` for the living.
    pub fn age_at_death_or_sentinel(&self) -> i32 {
        self.age_at_death()
            .and_then(|age| i32::try_from(age).ok())
            .unwrap_or(-1)
    }

    /// Multi-line text shown when hovering the person on the timeline.
    pub fn tooltip(&self) -> String {
        let died = self
            .death_date
            .map(|date| format!("Died: {}", date.format(DISPLAY_DATE_FORMAT)))
            .unwrap_or_else(|| "Still living".to_string());

        format!(
            "{}\nBorn: {}\n{}\n{}",
            self.name,
            self.birth_date.format(DISPLAY_DATE_FORMAT),
            died,
            self.description
        )
    }
}

impl fmt::Display for PersonRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} - ", self.name, self.birth_date.year())?;
        match self.death_date {
            Some(death) => write!(f, "{})", death.year()),
            None => write!(f, "present)"),
        }
    }
}

//! User configuration for a cost estimate
//!
//! A `UserConfig` is created by the caller (form, CLI flags, test fixture)
//! and is immutable for the duration of one resolve/compute pass. The
//! calculator itself is total over the whole input domain; `validate` is
//! the range check a UI layer applies before calling the engine.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{
    BASE_CURRENCY, BIG_CITY_MULTIPLIER, DEFAULT_COUNTRY, MAX_HOLIDAY_WEEKS, MID_SIZED_MULTIPLIER,
    SMALL_TOWN_MULTIPLIER,
};

/// Errors from `UserConfig::validate` (caller-side range checks)
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("duration must be positive, got {got}")]
    DurationNotPositive { got: f64 },

    #[error("hourly wage must be non-negative, got {got}")]
    NegativeWage { got: f64 },

    #[error("holiday work weeks must be at most {max}, got {got}")]
    HolidayWeeksOutOfRange { got: u32, max: u32 },
}

/// Errors from parsing enum fields out of user-facing strings
#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("unknown student origin '{0}' (expected 'EU' or 'Non-EU')")]
    UnknownOrigin(String),

    #[error("unknown course level '{0}'")]
    UnknownCourseLevel(String),

    #[error("unknown city tier '{0}' (expected 'Big City', 'Mid-sized' or 'Small Town')")]
    UnknownCityTier(String),
}

/// Student origin, which selects tuition rates and legal work-hour caps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StudentOrigin {
    #[serde(rename = "EU")]
    Eu,
    #[serde(rename = "Non-EU")]
    NonEu,
}

impl std::fmt::Display for StudentOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StudentOrigin::Eu => write!(f, "EU"),
            StudentOrigin::NonEu => write!(f, "Non-EU"),
        }
    }
}

impl std::str::FromStr for StudentOrigin {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "eu" => Ok(StudentOrigin::Eu),
            "non-eu" | "non_eu" | "noneu" => Ok(StudentOrigin::NonEu),
            _ => Err(ParseError::UnknownOrigin(s.to_string())),
        }
    }
}

/// Course level of the planned program
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CourseLevel {
    Undergraduate,
    Masters,
    #[serde(rename = "PhD")]
    Phd,
    #[serde(rename = "Short-term")]
    ShortTerm,
    #[serde(rename = "Language Course")]
    LanguageCourse,
}

impl std::fmt::Display for CourseLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CourseLevel::Undergraduate => write!(f, "Undergraduate"),
            CourseLevel::Masters => write!(f, "Masters"),
            CourseLevel::Phd => write!(f, "PhD"),
            CourseLevel::ShortTerm => write!(f, "Short-term"),
            CourseLevel::LanguageCourse => write!(f, "Language Course"),
        }
    }
}

impl std::str::FromStr for CourseLevel {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "undergraduate" => Ok(CourseLevel::Undergraduate),
            "masters" => Ok(CourseLevel::Masters),
            "phd" => Ok(CourseLevel::Phd),
            "short-term" | "short term" => Ok(CourseLevel::ShortTerm),
            "language course" | "language-course" => Ok(CourseLevel::LanguageCourse),
            _ => Err(ParseError::UnknownCourseLevel(s.to_string())),
        }
    }
}

/// Coarse cost-of-living bucket applied to housing and food
///
/// # Example
/// ```
/// use eurostudy_core_rs::CityTier;
///
/// assert_eq!(CityTier::MidSized.multiplier(), 1.0);
/// assert!(CityTier::BigCity.multiplier() > CityTier::SmallTown.multiplier());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CityTier {
    #[serde(rename = "Big City")]
    BigCity,
    #[serde(rename = "Mid-sized")]
    MidSized,
    #[serde(rename = "Small Town")]
    SmallTown,
}

impl CityTier {
    /// Housing cost multiplier for this tier
    pub fn multiplier(self) -> f64 {
        match self {
            CityTier::BigCity => BIG_CITY_MULTIPLIER,
            CityTier::MidSized => MID_SIZED_MULTIPLIER,
            CityTier::SmallTown => SMALL_TOWN_MULTIPLIER,
        }
    }
}

impl std::fmt::Display for CityTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CityTier::BigCity => write!(f, "Big City"),
            CityTier::MidSized => write!(f, "Mid-sized"),
            CityTier::SmallTown => write!(f, "Small Town"),
        }
    }
}

impl std::str::FromStr for CityTier {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "big city" | "big-city" => Ok(CityTier::BigCity),
            "mid-sized" | "mid sized" | "midsized" => Ok(CityTier::MidSized),
            "small town" | "small-town" => Ok(CityTier::SmallTown),
            _ => Err(ParseError::UnknownCityTier(s.to_string())),
        }
    }
}

/// One estimation request, immutable per calculation call
///
/// # Example
/// ```
/// use eurostudy_core_rs::UserConfig;
///
/// let config = UserConfig::default();
/// assert_eq!(config.country, "Austria");
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserConfig {
    /// Reference-store lookup key (exact country name)
    pub country: String,
    pub student_origin: StudentOrigin,
    pub course_level: CourseLevel,
    /// Program length in years; may be fractional and below 1
    pub duration_years: f64,
    pub city_tier: CityTier,
    /// Display currency code (ISO-style, e.g. "EUR", "USD")
    pub target_currency: String,
    /// Planned term-time work hours per week
    pub work_hours_per_week: u32,
    /// Expected hourly wage in euros
    pub hourly_wage: f64,
    /// Weeks of full-time work during holidays (0..=18)
    pub holiday_work_weeks: u32,
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            country: DEFAULT_COUNTRY.to_string(),
            student_origin: StudentOrigin::NonEu,
            course_level: CourseLevel::Undergraduate,
            duration_years: 3.0,
            city_tier: CityTier::MidSized,
            target_currency: BASE_CURRENCY.to_string(),
            work_hours_per_week: 0,
            hourly_wage: 12.0,
            holiday_work_weeks: 0,
        }
    }
}

impl UserConfig {
    /// Range-check the configuration.
    ///
    /// This is the check a UI layer runs before calling the engine. The
    /// engine itself tolerates out-of-range input and simply computes with
    /// it; nothing in `resolve` or `compute_metrics` requires a validated
    /// config.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.duration_years > 0.0) {
            return Err(ConfigError::DurationNotPositive {
                got: self.duration_years,
            });
        }
        if self.hourly_wage < 0.0 {
            return Err(ConfigError::NegativeWage {
                got: self.hourly_wage,
            });
        }
        if self.holiday_work_weeks > MAX_HOLIDAY_WEEKS {
            return Err(ConfigError::HolidayWeeksOutOfRange {
                got: self.holiday_work_weeks,
                max: MAX_HOLIDAY_WEEKS,
            });
        }
        Ok(())
    }

    /// True when no work at all is planned (term-time or holidays).
    ///
    /// Zero planned work is a distinct affordability state, not 0% coverage.
    pub fn plans_no_work(&self) -> bool {
        self.work_hours_per_week == 0 && self.holiday_work_weeks == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_round_trip() {
        assert_eq!("EU".parse::<StudentOrigin>(), Ok(StudentOrigin::Eu));
        assert_eq!("Non-EU".parse::<StudentOrigin>(), Ok(StudentOrigin::NonEu));
        assert_eq!(StudentOrigin::NonEu.to_string(), "Non-EU");
        assert!("Martian".parse::<StudentOrigin>().is_err());
    }

    #[test]
    fn test_city_tier_parse() {
        assert_eq!("Big City".parse::<CityTier>(), Ok(CityTier::BigCity));
        assert_eq!("mid-sized".parse::<CityTier>(), Ok(CityTier::MidSized));
        assert_eq!("small-town".parse::<CityTier>(), Ok(CityTier::SmallTown));
    }

    #[test]
    fn test_course_level_serde_names() {
        let json = serde_json::to_string(&CourseLevel::ShortTerm).unwrap();
        assert_eq!(json, "\"Short-term\"");
        let level: CourseLevel = serde_json::from_str("\"PhD\"").unwrap();
        assert_eq!(level, CourseLevel::Phd);
    }

    #[test]
    fn test_validate_rejects_bad_ranges() {
        let mut config = UserConfig::default();
        config.duration_years = 0.0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::DurationNotPositive { got: 0.0 })
        );

        let mut config = UserConfig::default();
        config.hourly_wage = -1.0;
        assert!(config.validate().is_err());

        let mut config = UserConfig::default();
        config.holiday_work_weeks = 19;
        assert_eq!(
            config.validate(),
            Err(ConfigError::HolidayWeeksOutOfRange { got: 19, max: 18 })
        );
    }

    #[test]
    fn test_plans_no_work() {
        let mut config = UserConfig::default();
        assert!(config.plans_no_work());

        config.work_hours_per_week = 10;
        assert!(!config.plans_no_work());

        config.work_hours_per_week = 0;
        config.holiday_work_weeks = 4;
        assert!(!config.plans_no_work());
    }
}

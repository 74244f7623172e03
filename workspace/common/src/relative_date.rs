//! Relative date strings such as `"hoje às 12:00"` or `"last Friday at 9:05 AM"`.
//!
//! A date is classified by its calendar-day distance from a base date
//! (both in the same time zone) and rendered with the locale's table:
//!
//! | distance in days | rendering        |
//! |------------------|------------------|
//! | `< -6`           | short date       |
//! | `-6 ..= -2`      | last `<weekday>` |
//! | `-1`             | yesterday        |
//! | `0`              | today            |
//! | `1`              | tomorrow         |
//! | `2 ..= 6`        | `<weekday>`      |
//! | `> 6`            | short date       |

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, TimeZone, Weekday};

use crate::error::DisplayError;

/// Locale used for relative dates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DateLocale {
    /// Portuguese
    #[default]
    Pt,
    /// English (United States)
    EnUs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RelativeToken {
    LastWeek,
    Yesterday,
    Today,
    Tomorrow,
    NextWeek,
    Other,
}

impl RelativeToken {
    fn from_day_difference(diff: i64) -> Self {
        if diff < -6 {
            RelativeToken::Other
        } else if diff < -1 {
            RelativeToken::LastWeek
        } else if diff < 0 {
            RelativeToken::Yesterday
        } else if diff < 1 {
            RelativeToken::Today
        } else if diff < 2 {
            RelativeToken::Tomorrow
        } else if diff < 7 {
            RelativeToken::NextWeek
        } else {
            RelativeToken::Other
        }
    }
}

impl DateLocale {
    fn weekday_name(&self, weekday: Weekday) -> &'static str {
        match self {
            DateLocale::Pt => match weekday {
                Weekday::Sun => "domingo",
                Weekday::Mon => "segunda-feira",
                Weekday::Tue => "terça-feira",
                Weekday::Wed => "quarta-feira",
                Weekday::Thu => "quinta-feira",
                Weekday::Fri => "sexta-feira",
                Weekday::Sat => "sábado",
            },
            DateLocale::EnUs => match weekday {
                Weekday::Sun => "Sunday",
                Weekday::Mon => "Monday",
                Weekday::Tue => "Tuesday",
                Weekday::Wed => "Wednesday",
                Weekday::Thu => "Thursday",
                Weekday::Fri => "Friday",
                Weekday::Sat => "Saturday",
            },
        }
    }

    fn time_pattern(&self) -> &'static str {
        match self {
            DateLocale::Pt => "%H:%M",
            DateLocale::EnUs => "%-I:%M %p",
        }
    }

    fn short_date_pattern(&self) -> &'static str {
        match self {
            DateLocale::Pt => "%d/%m/%Y",
            DateLocale::EnUs => "%m/%d/%Y",
        }
    }

    fn render<Tz>(&self, token: RelativeToken, date: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let time = date.format(self.time_pattern());
        let weekday = self.weekday_name(date.weekday());

        match (self, token) {
            (_, RelativeToken::Other) => date.format(self.short_date_pattern()).to_string(),

            (DateLocale::Pt, RelativeToken::LastWeek) => {
                // "sábado" and "domingo" are masculine
                let last = match date.weekday() {
                    Weekday::Sat | Weekday::Sun => "último",
                    _ => "última",
                };
                format!("{} {} às {}", last, weekday, time)
            }
            (DateLocale::Pt, RelativeToken::Yesterday) => format!("ontem às {}", time),
            (DateLocale::Pt, RelativeToken::Today) => format!("hoje às {}", time),
            (DateLocale::Pt, RelativeToken::Tomorrow) => format!("amanhã às {}", time),
            (DateLocale::Pt, RelativeToken::NextWeek) => format!("{} às {}", weekday, time),

            (DateLocale::EnUs, RelativeToken::LastWeek) => format!("last {} at {}", weekday, time),
            (DateLocale::EnUs, RelativeToken::Yesterday) => format!("yesterday at {}", time),
            (DateLocale::EnUs, RelativeToken::Today) => format!("today at {}", time),
            (DateLocale::EnUs, RelativeToken::Tomorrow) => format!("tomorrow at {}", time),
            (DateLocale::EnUs, RelativeToken::NextWeek) => format!("{} at {}", weekday, time),
        }
    }
}

impl FromStr for DateLocale {
    type Err = DisplayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "pt" | "pt-br" | "pt-pt" => Ok(DateLocale::Pt),
            "en" | "en-us" => Ok(DateLocale::EnUs),
            _ => Err(DisplayError::UnknownLocale(s.to_string())),
        }
    }
}

impl fmt::Display for DateLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateLocale::Pt => write!(f, "pt"),
            DateLocale::EnUs => write!(f, "en-US"),
        }
    }
}

/// Describe `date` relative to `base` in the given locale.
pub fn format_relative<Tz>(date: &DateTime<Tz>, base: &DateTime<Tz>, locale: DateLocale) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let diff = (date.date_naive() - base.date_naive()).num_days();
    locale.render(RelativeToken::from_day_difference(diff), date)
}

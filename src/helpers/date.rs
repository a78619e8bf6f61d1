//! Date helper functions

use chrono::{DateTime, Utc};

/// Format a date using a Moment.js-compatible format string
///
/// # Examples
/// ```ignore
/// format_date(&date, "YYYY-MM-DD") // -> "2021-03-15"
/// ```
pub fn format_date(date: &DateTime<Utc>, format: &str) -> String {
    let chrono_format = moment_to_chrono_format(format);
    date.format(&chrono_format).to_string()
}

/// Convert the Moment.js tokens the templates use to chrono tokens
fn moment_to_chrono_format(format: &str) -> String {
    let mut result = String::new();
    let mut chars = format.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            'Y' => {
                // YYYY -> %Y, YY -> %y
                let mut count = 1;
                while chars.peek() == Some(&'Y') {
                    chars.next();
                    count += 1;
                }
                result.push_str(if count >= 4 { "%Y" } else { "%y" });
            }
            'M' => {
                // MMMM -> %B, MMM -> %b, MM -> %m
                let mut count = 1;
                while chars.peek() == Some(&'M') {
                    chars.next();
                    count += 1;
                }
                result.push_str(match count {
                    1 | 2 => "%m",
                    3 => "%b",
                    _ => "%B",
                });
            }
            'D' => {
                while chars.peek() == Some(&'D') {
                    chars.next();
                }
                result.push_str("%d");
            }
            'H' => {
                while chars.peek() == Some(&'H') {
                    chars.next();
                }
                result.push_str("%H");
            }
            'm' => {
                while chars.peek() == Some(&'m') {
                    chars.next();
                }
                result.push_str("%M");
            }
            's' => {
                while chars.peek() == Some(&'s') {
                    chars.next();
                }
                result.push_str("%S");
            }
            other => result.push(other),
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2021, 3, 15, 19, 25, 28).unwrap()
    }

    #[test]
    fn test_format_date_iso() {
        assert_eq!(format_date(&date(), "YYYY-MM-DD"), "2021-03-15");
    }

    #[test]
    fn test_format_date_abbreviated_month() {
        assert_eq!(format_date(&date(), "DD MMM YYYY"), "15 Mar 2021");
    }

    #[test]
    fn test_format_date_time_tokens() {
        assert_eq!(format_date(&date(), "HH:mm:ss"), "19:25:28");
    }

}

//! Time-window expansion into discrete trigger instants.

use std::fmt;

/// A derived (hour, minute) firing point. Never authored directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerInstant {
    pub hour: u8,
    pub minute: u8,
}

impl fmt::Display for TriggerInstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Expand a time-of-day window into the ordered instants at which jobs
/// fire.
///
/// Steps from the start to the end in `interval_minutes` increments,
/// both bounds inclusive; the end is emitted only when it lands exactly
/// on a step. A step that would cross midnight truncates the sequence at
/// 23:59 rather than wrapping to the next day.
///
/// Validated input (start strictly before end, interval at least 1)
/// always produces at least one instant; an empty result signals a
/// violated invariant upstream.
pub fn expand(
    start_hour: u8,
    start_min: u8,
    end_hour: u8,
    end_min: u8,
    interval_minutes: u32,
) -> Vec<TriggerInstant> {
    if interval_minutes == 0 {
        return Vec::new();
    }
    let start = u32::from(start_hour) * 60 + u32::from(start_min);
    let end = u32::from(end_hour) * 60 + u32::from(end_min);

    let mut instants = Vec::new();
    let mut current = start;
    while current <= end {
        let hour = current / 60;
        if hour > 23 {
            break;
        }
        instants.push(TriggerInstant {
            hour: hour as u8,
            minute: (current % 60) as u8,
        });
        current += interval_minutes;
    }
    instants
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instants(pairs: &[(u8, u8)]) -> Vec<TriggerInstant> {
        pairs
            .iter()
            .map(|&(hour, minute)| TriggerInstant { hour, minute })
            .collect()
    }

    #[test]
    fn morning_window_every_fifteen_minutes() {
        assert_eq!(
            expand(6, 0, 9, 0, 15),
            instants(&[
                (6, 0),
                (6, 15),
                (6, 30),
                (6, 45),
                (7, 0),
                (7, 15),
                (7, 30),
                (7, 45),
                (8, 0),
                (8, 15),
                (8, 30),
                (8, 45),
                (9, 0),
            ])
        );
    }

    #[test]
    fn end_included_only_on_step_boundary() {
        // 07:50 is past the last step that fits (07:45), and is not on a
        // 20-minute boundary from 07:05 either.
        assert_eq!(
            expand(7, 5, 7, 50, 20),
            instants(&[(7, 5), (7, 25), (7, 45)])
        );
        // Exact landing on the end is emitted.
        assert_eq!(
            expand(7, 0, 8, 0, 30),
            instants(&[(7, 0), (7, 30), (8, 0)])
        );
    }

    #[test]
    fn truncates_at_midnight_instead_of_wrapping() {
        assert_eq!(expand(23, 50, 23, 59, 5), instants(&[(23, 50), (23, 55)]));
    }

    #[test]
    fn single_step_larger_than_window() {
        assert_eq!(expand(6, 0, 6, 30, 1440), instants(&[(6, 0)]));
    }

    #[test]
    fn zero_interval_yields_nothing() {
        assert!(expand(6, 0, 7, 0, 0).is_empty());
    }

    #[test]
    fn sequence_is_strictly_increasing_by_interval() {
        let result = expand(5, 10, 22, 47, 7);
        assert_eq!(result[0], TriggerInstant { hour: 5, minute: 10 });
        for pair in result.windows(2) {
            let previous = u32::from(pair[0].hour) * 60 + u32::from(pair[0].minute);
            let next = u32::from(pair[1].hour) * 60 + u32::from(pair[1].minute);
            assert_eq!(next, previous + 7);
        }
        let last = result.last().unwrap();
        assert!(u32::from(last.hour) * 60 + u32::from(last.minute) <= 22 * 60 + 47);
    }
}

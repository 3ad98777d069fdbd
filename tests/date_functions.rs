#[cfg(test)]
mod tests {
    use weekplan::libs::date::{reduce_encoded, Date, MAX_YEAR, YEAR_RADIX};
    use weekplan::libs::error::PlannerError;
    use weekplan::libs::item::Repetition;

    #[test]
    fn test_encode_concrete_values() {
        // Jan 1 2001 is the epoch and encodes to zero; one year is 372
        // encoded "days".
        assert_eq!(Date::new(0, 0, 0).encode().unwrap(), 0);
        assert_eq!(Date::new(1, 0, 0).encode().unwrap(), 372);
    }

    #[test]
    fn test_round_trip_over_all_components() {
        for year in [0, 1, 3, 4, 23, 100, MAX_YEAR] {
            for month in 0..12 {
                for day in 0..31 {
                    let date = Date::new(year, month, day);
                    let encoded = date.encode().unwrap();
                    assert_eq!(Date::decode(encoded), date);
                }
            }
        }
    }

    #[test]
    fn test_encoding_preserves_ordering() {
        // Lexicographic (year, month, day) order and integer order agree.
        let mut previous = -1;
        for year in 0..4 {
            for month in 0..12 {
                for day in 0..31 {
                    let encoded = Date::new(year, month, day).encode().unwrap();
                    assert!(encoded > previous);
                    previous = encoded;
                }
            }
        }
    }

    #[test]
    fn test_encode_rejects_out_of_range_components() {
        let bad = [
            Date::new(0, 0, -1),
            Date::new(0, -1, 0),
            Date::new(-1, 0, 0),
            Date::new(0, 0, 31),
            Date::new(0, 12, 0),
            Date::new(MAX_YEAR + 1, 0, 0),
        ];
        for date in bad {
            assert!(
                matches!(date.encode(), Err(PlannerError::OutOfRange(_, _))),
                "{:?} should not encode",
                date
            );
        }
    }

    #[test]
    fn test_format_renders_human_year() {
        assert_eq!(Date::new(3, 5, 21).to_string(), "2004-06-22");
    }

    #[test]
    fn test_next_within_month() {
        assert_eq!(Date::new(23, 7, 15).next().to_string(), "2024-08-17");
    }

    #[test]
    fn test_next_across_february_in_leap_year() {
        let feb28 = Date::new(23, 1, 27); // Feb 28 2024
        let feb29 = feb28.next();
        assert_eq!(feb29.to_string(), "2024-02-29");
        assert_eq!(feb29.next().to_string(), "2024-03-01");
    }

    #[test]
    fn test_next_across_february_in_common_year() {
        let feb28 = Date::new(22, 1, 27); // Feb 28 2023
        assert_eq!(feb28.next().to_string(), "2023-03-01");
    }

    #[test]
    fn test_next_across_30_day_month() {
        let apr30 = Date::new(23, 3, 29); // Apr 30 2024
        assert_eq!(apr30.next().to_string(), "2024-05-01");
    }

    #[test]
    fn test_next_across_year_boundary() {
        let dec31 = Date::new(23, 11, 30); // Dec 31 2024
        assert_eq!(dec31.next().to_string(), "2025-01-01");
    }

    #[test]
    fn test_prev_across_year_boundary() {
        assert_eq!(Date::new(23, 0, 0).prev().to_string(), "2023-12-31");
    }

    #[test]
    fn test_prev_into_february() {
        // Mar 1 back into February lands on the 29th only in leap years.
        assert_eq!(Date::new(23, 2, 0).prev().to_string(), "2024-02-29");
        assert_eq!(Date::new(22, 2, 0).prev().to_string(), "2023-02-28");
    }

    #[test]
    fn test_prev_into_30_day_month() {
        let may1 = Date::new(23, 4, 0); // May 1 2024
        assert_eq!(may1.prev().to_string(), "2024-04-30");
    }

    #[test]
    fn test_next_and_prev_are_inverse() {
        // Walk two full years spanning a leap year and check the inverse
        // both ways at each step.
        let mut date = Date::new(22, 0, 0);
        for _ in 0..731 {
            assert_eq!(date.next().prev(), date);
            assert_eq!(date.prev().next(), date);
            date = date.next();
        }
    }

    #[test]
    fn test_weekday() {
        assert_eq!(Date::new(21, 2, 17).weekday(), 5); // Mar 18 2022, Friday
        assert_eq!(Date::new(23, 10, 28).weekday(), 5); // Nov 29 2024, Friday
        assert_eq!(Date::new(23, 11, 0).weekday(), 0); // Dec 1 2024, Sunday
    }

    #[test]
    fn test_week_start() {
        assert_eq!(Date::new(23, 10, 28).week_start().to_string(), "2024-11-24");

        // A Sunday is its own week start.
        let sunday = Date::new(23, 10, 23); // Nov 24 2024
        assert_eq!(sunday.week_start(), sunday);

        // Always at most six days back, never forward.
        let date = Date::new(22, 4, 12);
        let start = date.week_start();
        assert_eq!(start.weekday(), 0);
        assert!(start.encode().unwrap() <= date.encode().unwrap());
        assert!(date.encode().unwrap() - start.encode().unwrap() <= 6);
    }

    #[test]
    fn test_reduce_encoded_none_is_identity() {
        let encoded = Date::new(22, 6, 4).encode().unwrap();
        assert_eq!(reduce_encoded(encoded, Repetition::None), encoded);
    }

    #[test]
    fn test_reduce_encoded_yearly_strips_year() {
        // Same day-of-year in different years reduces identically.
        let a = Date::new(22, 6, 4).encode().unwrap();
        let b = Date::new(25, 6, 4).encode().unwrap();
        assert_eq!(reduce_encoded(a, Repetition::Yearly), reduce_encoded(b, Repetition::Yearly));
        assert_eq!(reduce_encoded(a, Repetition::Yearly), a % YEAR_RADIX);

        // Different day-of-year does not.
        let c = Date::new(25, 6, 5).encode().unwrap();
        assert_ne!(reduce_encoded(a, Repetition::Yearly), reduce_encoded(c, Repetition::Yearly));
    }
}

//! Unit tests for tt-core primitives.

#[cfg(test)]
mod ids {
    use crate::{ActivityId, TrackId};

    #[test]
    fn ordering() {
        assert!(ActivityId(0) < ActivityId(1));
        assert!(TrackId(100) > TrackId(99));
    }

    #[test]
    fn display() {
        assert_eq!(ActivityId(7).to_string(), "ActivityId(7)");
    }
}

#[cfg(test)]
mod time {
    use chrono::{NaiveTime, Timelike};

    use crate::{normalize_time, parse_time, DayBoundary, Minute, TtError};

    #[test]
    fn boundary_hour_is_not_wrapped() {
        assert_eq!(normalize_time("08:00:00").unwrap(), Minute(480));
    }

    #[test]
    fn just_before_boundary_wraps_to_next_day() {
        assert_eq!(normalize_time("07:59:00").unwrap(), Minute(24 * 60 + 7 * 60 + 59));
        assert_eq!(normalize_time("07:59:00").unwrap(), Minute(1919));
    }

    #[test]
    fn evening_is_same_day() {
        assert_eq!(normalize_time("23:30:00").unwrap(), Minute(1410));
    }

    #[test]
    fn midnight_sorts_after_late_evening() {
        let late = normalize_time("23:59:00").unwrap();
        let midnight = normalize_time("00:00:00").unwrap();
        assert_eq!(midnight, Minute(1440));
        assert!(late < midnight);
    }

    #[test]
    fn seconds_are_ignored() {
        assert_eq!(normalize_time("17:00:45").unwrap(), normalize_time("17:00:00").unwrap());
    }

    #[test]
    fn single_digit_fields_accepted() {
        assert_eq!(normalize_time("9:5:0").unwrap(), Minute(9 * 60 + 5));
    }

    #[test]
    fn malformed_strings_are_format_errors() {
        for bad in ["", "17:00", "17:00:00:00", "24:00:00", "12:60:00", "ab:00:00",
                    "123:00:00", "12::00", "-1:00:00", "20h00"] {
            match normalize_time(bad) {
                Err(TtError::Format { input, .. }) => assert_eq!(input, bad),
                other => panic!("{bad:?} should be a format error, got {other:?}"),
            }
        }
    }

    #[test]
    fn custom_boundary() {
        let b = DayBoundary::new(6).unwrap();
        assert_eq!(b.normalize_str("05:00:00").unwrap(), Minute(1440 + 300));
        assert_eq!(b.normalize_str("07:00:00").unwrap(), Minute(420));
    }

    #[test]
    fn zero_boundary_never_wraps() {
        let b = DayBoundary::new(0).unwrap();
        assert_eq!(b.normalize_str("00:30:00").unwrap(), Minute(30));
    }

    #[test]
    fn boundary_out_of_range_rejected() {
        assert!(matches!(DayBoundary::new(24), Err(TtError::Config(_))));
    }

    #[test]
    fn parse_time_keeps_components() {
        let t = parse_time("7:05:30").unwrap();
        assert_eq!(t, NaiveTime::from_hms_opt(7, 5, 30).unwrap());
        assert_eq!((t.hour(), t.minute()), (7, 5));
    }

    #[test]
    fn normalize_accepts_parsed_time() {
        let t = NaiveTime::from_hms_opt(1, 15, 0).unwrap();
        assert_eq!(DayBoundary::default().normalize(t), Minute(1440 + 75));
    }

    #[test]
    fn minute_display() {
        assert_eq!(Minute(1410).to_string(), "+0 23:30");
        assert_eq!(Minute(1919).to_string(), "+1 07:59");
    }
}

#[cfg(test)]
mod span {
    use crate::{Minute, Span, TtError};

    #[test]
    fn overlapping_spans() {
        let a = Span::new(0, 60);
        let b = Span::new(30, 90);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn touching_spans_do_not_overlap() {
        let a = Span::new(0, 60);
        let b = Span::new(60, 120);
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn containment_overlaps() {
        let outer = Span::new(0, 100);
        let inner = Span::new(40, 50);
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn empty_spans() {
        assert!(Span { start: Minute(10), end: Minute(10) }.is_empty());
        assert!(Span { start: Minute(11), end: Minute(10) }.is_empty());
        assert!(!Span::new(Minute(10), Minute(20)).is_empty());
    }

    #[test]
    fn display_uses_timeline_minutes() {
        assert_eq!(Span::new(Minute(1410), Minute(1500)).to_string(), "[+0 23:30, +1 01:00)");
    }

    #[test]
    fn try_new_rejects_empty_and_inverted() {
        assert!(matches!(Span::try_new(5, 5), Err(TtError::Validation(_))));
        assert!(matches!(Span::try_new(6, 5), Err(TtError::Validation(_))));
        assert_eq!(Span::try_new(5, 6).unwrap(), Span::new(5, 6));
    }
}

#[cfg(test)]
mod config {
    use crate::{DayBoundary, PlannerConfig, TtError};

    #[test]
    fn default_is_valid() {
        let cfg = PlannerConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.day_boundary().unwrap(), DayBoundary::default());
        assert_eq!(cfg.match_count, 10);
        assert_eq!(cfg.sample_size, 8);
    }

    #[test]
    fn sample_size_bounds() {
        let cfg = PlannerConfig { sample_size: 0, ..Default::default() };
        assert!(matches!(cfg.validate(), Err(TtError::Config(_))));
        let cfg = PlannerConfig { sample_size: 11, match_count: 10, ..Default::default() };
        assert!(matches!(cfg.validate(), Err(TtError::Config(_))));
    }

    #[test]
    fn boundary_hour_bounds() {
        let cfg = PlannerConfig { day_boundary_hour: 24, ..Default::default() };
        assert!(cfg.validate().is_err());
        assert!(cfg.day_boundary().is_err());
    }
}

#[cfg(test)]
mod rng {
    use rand::RngCore;

    use crate::SampleRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SampleRng::new(12345);
        let mut r2 = SampleRng::new(12345);
        for _ in 0..100 {
            assert_eq!(r1.inner().next_u64(), r2.inner().next_u64());
        }
    }

    #[test]
    fn children_diverge() {
        let mut root = SampleRng::new(1);
        let mut c0 = root.child(0);
        let mut c1 = root.child(1);
        assert_ne!(c0.inner().next_u64(), c1.inner().next_u64());
    }

    #[test]
    fn children_reproducible_from_same_root() {
        let a = SampleRng::new(9).child(3).inner().next_u64();
        let b = SampleRng::new(9).child(3).inner().next_u64();
        assert_eq!(a, b);
    }
}

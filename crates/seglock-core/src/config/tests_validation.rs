//! Validation-focused tests for configuration

#[cfg(test)]
mod validation_tests {
    use crate::config::{Config, LockLimits, LoggingConfig};
    use crate::Error;

    fn limits(edit: impl FnOnce(&mut LockLimits)) -> LockLimits {
        let mut limits = LockLimits::default();
        edit(&mut limits);
        limits
    }

    #[test]
    fn test_defaults_are_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_default_limits_match_protocol_bounds() {
        let limits = LockLimits::default();
        assert_eq!(limits.min_segments, 2);
        assert_eq!(limits.max_segments, 6);
        assert_eq!(limits.min_segment_length, 1);
        assert_eq!(limits.max_segment_length, 4);
        assert_eq!(limits.max_lock_flags, 1);
    }

    #[test]
    fn test_zero_min_segments_rejected() {
        let result = limits(|l| l.min_segments = 0).validate();
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_inverted_segment_range_rejected() {
        let result = limits(|l| {
            l.min_segments = 4;
            l.max_segments = 3;
        })
        .validate();
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_seven_segments_cannot_be_allowed() {
        let result = limits(|l| l.max_segments = 7).validate();
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_single_segment_cannot_be_allowed() {
        let result = limits(|l| l.min_segments = 1).validate();
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_segment_length_five_cannot_be_allowed() {
        assert!(limits(|l| l.max_segment_length = 4).validate().is_ok());
        let result = limits(|l| l.max_segment_length = 5).validate();
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_lock_flag_count_is_fixed_at_one() {
        let none = limits(|l| l.max_lock_flags = 0).validate();
        assert!(matches!(none, Err(Error::InvalidConfig(_))));
        let two = limits(|l| l.max_lock_flags = 2).validate();
        assert!(matches!(two, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_narrower_bounds_are_accepted() {
        let narrowed = limits(|l| {
            l.min_segments = 3;
            l.max_segments = 4;
            l.min_segment_length = 2;
            l.max_segment_length = 3;
        });
        assert!(narrowed.validate().is_ok());
    }

    #[test]
    fn test_inverted_length_range_rejected() {
        let result = limits(|l| {
            l.min_segment_length = 3;
            l.max_segment_length = 2;
        })
        .validate();
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_zero_min_segment_length_rejected() {
        let result = limits(|l| l.min_segment_length = 0).validate();
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_blank_log_level_rejected() {
        let config = Config {
            logging: LoggingConfig {
                level: "  ".to_string(),
            },
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }
}

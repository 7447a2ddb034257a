mod booking;
mod booking_status;
mod facility;
mod time_of_day;

pub use booking::*;
pub use booking_status::*;
pub use facility::*;
pub use time_of_day::*;

use crate::BookingError;

pub trait Validator {
    fn validate(&self) -> Result<(), BookingError>;
}

/// Open-interval overlap test: two ranges overlap iff they share any
/// sub-interval. Touching endpoints do not count.
pub fn time_overlap(a_start: TimeOfDay, a_end: TimeOfDay, b_start: TimeOfDay, b_end: TimeOfDay) -> bool {
    a_start < b_end && a_end > b_start
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> TimeOfDay {
        s.parse().unwrap()
    }

    #[test]
    fn overlap_shares_subinterval() {
        assert!(time_overlap(t("09:00"), t("10:00"), t("09:30"), t("11:00")));
        assert!(time_overlap(t("09:00"), t("10:00"), t("08:00"), t("12:00")));
    }

    #[test]
    fn touching_endpoints_do_not_overlap() {
        assert!(!time_overlap(t("09:00"), t("10:00"), t("10:00"), t("11:00")));
        assert!(!time_overlap(t("10:00"), t("11:00"), t("09:00"), t("10:00")));
    }
}

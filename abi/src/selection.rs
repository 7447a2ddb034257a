use crate::{BookingError, FacilityKind, Slot, TimeOfDay};

/// Two-click range selection over the daily slot grid.
///
/// The first pick anchors the range, the second completes it. Every
/// transition is validated up front; a rejected pick leaves the previous
/// state exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Empty,
    Anchor(usize),
    Range {
        lo: usize,
        hi: usize,
    },
}

impl Selection {
    pub fn clear(&mut self) {
        *self = Selection::Empty;
    }

    /// Pick the slot at `idx`. On the anchor pick the slot must be
    /// available; on the completing pick every slot of the inclusive range
    /// must be available and the wall-clock span from the range's first
    /// start to its last end must fit the facility-kind ceiling. Picking
    /// the current anchor again clears the selection.
    pub fn pick(&mut self, idx: usize, slots: &[Slot], kind: FacilityKind) -> Result<(), BookingError> {
        let slot = slots
            .get(idx)
            .ok_or_else(|| BookingError::InvalidInput(format!("no slot at index {}", idx)))?;

        match *self {
            Selection::Anchor(anchor) if anchor == idx => {
                *self = Selection::Empty;
                Ok(())
            }
            Selection::Anchor(anchor) => {
                let (lo, hi) = if anchor <= idx { (anchor, idx) } else { (idx, anchor) };

                if let Some(blocked) = slots[lo..=hi].iter().find(|s| !s.available) {
                    return Err(BookingError::SlotUnavailable(blocked.start));
                }

                let span = slots[lo].start.minutes_until(slots[hi].end);
                if span > kind.max_minutes() {
                    return Err(BookingError::DurationTooLong(kind.max_minutes()));
                }

                *self = Selection::Range { lo, hi };
                Ok(())
            }
            // Empty, or starting over from a completed range.
            _ => {
                if !slot.available {
                    return Err(BookingError::SlotUnavailable(slot.start));
                }
                *self = Selection::Anchor(idx);
                Ok(())
            }
        }
    }

    /// The bookable `[start, end)` window of a completed range.
    pub fn window(&self, slots: &[Slot]) -> Option<(TimeOfDay, TimeOfDay)> {
        match *self {
            Selection::Range { lo, hi } => Some((slots.get(lo)?.start, slots.get(hi)?.end)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slot_grid;

    fn t(s: &str) -> TimeOfDay {
        s.parse().unwrap()
    }

    fn all_free() -> Vec<Slot> {
        slot_grid()
            .into_iter()
            .map(|(start, end)| Slot { start, end, available: true })
            .collect()
    }

    fn index_of(slots: &[Slot], start: &str) -> usize {
        let start = t(start);
        slots.iter().position(|s| s.start == start).unwrap()
    }

    #[test]
    fn two_hour_academic_range_is_accepted() {
        let slots = all_free();
        let mut sel = Selection::default();
        sel.pick(index_of(&slots, "09:00"), &slots, FacilityKind::Academic).unwrap();
        sel.pick(index_of(&slots, "11:00"), &slots, FacilityKind::Academic).unwrap();
        assert_eq!(sel.window(&slots), Some((t("09:00"), t("11:30"))));
    }

    #[test]
    fn academic_range_past_six_hours_is_rejected_without_state_change() {
        let slots = all_free();
        let mut sel = Selection::default();
        sel.pick(index_of(&slots, "09:00"), &slots, FacilityKind::Academic).unwrap();

        let before = sel;
        let err = sel
            .pick(index_of(&slots, "16:00"), &slots, FacilityKind::Academic)
            .unwrap_err();
        assert_eq!(err, BookingError::DurationTooLong(360));
        assert_eq!(sel, before);
    }

    #[test]
    fn residential_ceiling_admits_the_whole_day() {
        let slots = all_free();
        let mut sel = Selection::default();
        sel.pick(0, &slots, FacilityKind::Residential).unwrap();
        sel.pick(slots.len() - 1, &slots, FacilityKind::Residential).unwrap();
        assert_eq!(sel.window(&slots), Some((t("08:00"), t("20:00"))));
    }

    #[test]
    fn repicking_the_anchor_clears_the_selection() {
        let slots = all_free();
        let mut sel = Selection::default();
        let idx = index_of(&slots, "09:00");
        sel.pick(idx, &slots, FacilityKind::Academic).unwrap();
        sel.pick(idx, &slots, FacilityKind::Academic).unwrap();
        assert_eq!(sel, Selection::Empty);
    }

    #[test]
    fn unavailable_slot_inside_the_range_rejects_the_pick() {
        let mut slots = all_free();
        let blocked = index_of(&slots, "10:00");
        slots[blocked].available = false;

        let mut sel = Selection::default();
        sel.pick(index_of(&slots, "09:00"), &slots, FacilityKind::Academic).unwrap();
        let before = sel;
        let err = sel
            .pick(index_of(&slots, "11:00"), &slots, FacilityKind::Academic)
            .unwrap_err();
        assert_eq!(err, BookingError::SlotUnavailable(t("10:00")));
        assert_eq!(sel, before);
    }

    #[test]
    fn anchor_on_unavailable_slot_is_rejected() {
        let mut slots = all_free();
        slots[0].available = false;

        let mut sel = Selection::default();
        let err = sel.pick(0, &slots, FacilityKind::Academic).unwrap_err();
        assert_eq!(err, BookingError::SlotUnavailable(t("08:00")));
        assert_eq!(sel, Selection::Empty);
    }

    #[test]
    fn reversed_pick_order_still_forms_the_range() {
        let slots = all_free();
        let mut sel = Selection::default();
        sel.pick(index_of(&slots, "11:00"), &slots, FacilityKind::Academic).unwrap();
        sel.pick(index_of(&slots, "09:00"), &slots, FacilityKind::Academic).unwrap();
        assert_eq!(sel.window(&slots), Some((t("09:00"), t("11:30"))));
    }

    #[test]
    fn picking_after_a_completed_range_starts_over() {
        let slots = all_free();
        let mut sel = Selection::default();
        sel.pick(2, &slots, FacilityKind::Academic).unwrap();
        sel.pick(4, &slots, FacilityKind::Academic).unwrap();
        sel.pick(6, &slots, FacilityKind::Academic).unwrap();
        assert_eq!(sel, Selection::Anchor(6));
    }
}

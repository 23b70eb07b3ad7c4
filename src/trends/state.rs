use crate::TrendState;

impl TrendState {
    /// Day-over-day classification. A topic quiet both today and yesterday
    /// but active earlier is reported as steady, same as a plateau.
    pub fn classify(is_new_today: bool, today: u64, yesterday: u64) -> Self {
        if is_new_today {
            TrendState::New
        } else if today > yesterday {
            TrendState::Rising
        } else if today < yesterday && yesterday > 0 {
            TrendState::Fading
        } else {
            TrendState::Steady
        }
    }
}

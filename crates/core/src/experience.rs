//! Experience level buckets shared by seeker profiles, jobs and alerts.

use crate::choice::define_choice_enum;

define_choice_enum! {
    /// Seniority bucket derived from years of experience.
    #[derive(Default)]
    ExperienceLevel {
        /// Under 2 years.
        #[default]
        Entry => "entry",
        /// 2-4 years.
        Mid => "mid",
        /// 5-9 years.
        Senior => "senior",
        /// 10+ years.
        Expert => "expert",
    }
}

/// Lower bound (inclusive) in years for the `mid` bucket.
pub const MID_LEVEL_MIN_YEARS: u32 = 2;

/// Lower bound (inclusive) in years for the `senior` bucket.
pub const SENIOR_LEVEL_MIN_YEARS: u32 = 5;

/// Lower bound (inclusive) in years for the `expert` bucket.
pub const EXPERT_LEVEL_MIN_YEARS: u32 = 10;

impl ExperienceLevel {
    /// Bucket a number of years: `<2` entry, `2-4` mid, `5-9` senior, `>=10` expert.
    pub fn for_years(years: u32) -> Self {
        if years >= EXPERT_LEVEL_MIN_YEARS {
            Self::Expert
        } else if years >= SENIOR_LEVEL_MIN_YEARS {
            Self::Senior
        } else if years >= MID_LEVEL_MIN_YEARS {
            Self::Mid
        } else {
            Self::Entry
        }
    }
}

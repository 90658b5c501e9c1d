//! Daily verse quotas and per-day section windows.

use std::num::NonZeroU32;

use lectio_canon::{CanonTable, SectionName};

use crate::window::VerseWindow;

/// One section's share of the daily quota.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionQuota {
    section: SectionName,
    total_verses: u32,
    verses_per_day: u32,
}

impl SectionQuota {
    /// Returns the section label.
    pub fn section(&self) -> SectionName {
        self.section
    }

    /// Returns the section's declared verse total.
    pub fn total_verses(&self) -> u32 {
        self.total_verses
    }

    /// Returns the section's rounded-up daily share.
    pub fn verses_per_day(&self) -> u32 {
        self.verses_per_day
    }

    /// Returns the section-local window for 1-indexed `day`.
    ///
    /// Day `d` covers `[(d - 1) * share + 1, min(d * share, total)]`.
    /// Returns `None` for day 0 and for days after the section is
    /// exhausted.
    pub fn window(&self, day: u32) -> Option<VerseWindow> {
        let day = u64::from(day);
        let share = u64::from(self.verses_per_day);
        let total = u64::from(self.total_verses);
        if day == 0 {
            return None;
        }
        let start = (day - 1) * share + 1;
        if start > total {
            return None;
        }
        let end = (day * share).min(total);
        // Both bounds are at most `total`, which fits in u32.
        VerseWindow::new(start as u32, end as u32)
    }

    /// Returns the last day on which this section has a window.
    ///
    /// When the declared total exceeds what the books hold, the final
    /// windows collect nothing and the section is last read earlier; see
    /// `StudyPlan::section_finish_day` for the day actually reached.
    pub fn finish_day(&self) -> u32 {
        self.total_verses.div_ceil(self.verses_per_day)
    }
}

/// The quotas that drive plan generation.
///
/// All arithmetic uses the declared section totals, not the sums of the
/// books. `verses_per_day` is `ceil(total / days)`. Each section's share is
/// `ceil(section_total / total * verses_per_day)`, computed in floating
/// point; stored plans depend on the exact day boundaries this yields.
/// Shares are not reconciled against `verses_per_day`, so the combined
/// daily reading drifts by a few verses from day to day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanQuota {
    days: u32,
    total_verses: u32,
    verses_per_day: u32,
    sections: Vec<SectionQuota>,
}

impl PlanQuota {
    /// Computes the quotas for reading `canon` over `days` days.
    pub fn compute(canon: &CanonTable, days: NonZeroU32) -> Self {
        let total_verses = canon.total_verses();
        let verses_per_day = total_verses.div_ceil(days.get());
        let sections = canon
            .sections()
            .iter()
            .map(|section| {
                let fraction = f64::from(section.total_verses()) / f64::from(total_verses);
                let share = (fraction * f64::from(verses_per_day)).ceil() as u32;
                SectionQuota {
                    section: section.name(),
                    total_verses: section.total_verses(),
                    verses_per_day: share.max(1),
                }
            })
            .collect();
        Self {
            days: days.get(),
            total_verses,
            verses_per_day,
            sections,
        }
    }

    /// Returns the plan length in days.
    pub fn days(&self) -> u32 {
        self.days
    }

    /// Returns the declared verse total across all sections.
    pub fn total_verses(&self) -> u32 {
        self.total_verses
    }

    /// Returns the nominal daily verse quota.
    pub fn verses_per_day(&self) -> u32 {
        self.verses_per_day
    }

    /// Returns the per-section quotas in canonical order.
    pub fn sections(&self) -> &[SectionQuota] {
        &self.sections
    }

    /// Looks up one section's quota.
    pub fn section(&self, name: SectionName) -> Option<&SectionQuota> {
        self.sections.iter().find(|q| q.section == name)
    }

    /// Returns one section's daily share, or `None` if it is not in the canon.
    pub fn section_verses_per_day(&self, name: SectionName) -> Option<u32> {
        self.section(name).map(SectionQuota::verses_per_day)
    }

    /// Returns one section's window for 1-indexed `day`.
    pub fn section_window(&self, name: SectionName, day: u32) -> Option<VerseWindow> {
        self.section(name)?.window(day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lectio_canon::{Book, Section};

    fn days(n: u32) -> NonZeroU32 {
        NonZeroU32::new(n).unwrap()
    }

    fn one_section(total: u32) -> CanonTable {
        CanonTable::new(vec![
            Section::new(
                SectionName::History,
                vec![Book::new("Genesis", vec![total]).unwrap()],
            )
            .unwrap(),
        ])
        .unwrap()
    }

    #[test]
    fn even_split() {
        let quota = PlanQuota::compute(&one_section(100), days(2));
        assert_eq!(quota.total_verses(), 100);
        assert_eq!(quota.verses_per_day(), 50);
        assert_eq!(quota.sections()[0].verses_per_day(), 50);
    }

    #[test]
    fn rounds_up() {
        let quota = PlanQuota::compute(&one_section(100), days(3));
        assert_eq!(quota.verses_per_day(), 34);
        let share = quota.section(SectionName::History).unwrap();
        assert_eq!(share.window(1), VerseWindow::new(1, 34));
        assert_eq!(share.window(3), VerseWindow::new(69, 100));
        assert_eq!(share.window(4), None);
        assert_eq!(share.finish_day(), 3);
        assert_eq!(quota.section_window(SectionName::History, 2), VerseWindow::new(35, 68));
        assert_eq!(quota.section_window(SectionName::Psalms, 1), None);
    }

    #[test]
    fn window_day_zero() {
        let quota = PlanQuota::compute(&one_section(10), days(1));
        assert_eq!(quota.sections()[0].window(0), None);
    }

    #[test]
    fn standard_year_shares() {
        let quota = PlanQuota::compute(CanonTable::standard(), days(365));
        assert_eq!(quota.total_verses(), 34062);
        assert_eq!(quota.verses_per_day(), 94);
        let shares: Vec<u32> = quota.sections().iter().map(|q| q.verses_per_day()).collect();
        assert_eq!(shares, vec![40, 7, 6, 20, 22, 2]);
        // Shares sum to 97, not 94.
        assert_eq!(shares.iter().sum::<u32>(), 97);
        assert_eq!(quota.section_verses_per_day(SectionName::Prophets), Some(20));
        // Windows run to the declared total, past the last Wisdom verse.
        let wisdom = quota.section(SectionName::Wisdom).unwrap();
        assert_eq!(wisdom.total_verses(), 2169);
        assert_eq!(wisdom.finish_day(), 362);
    }

    #[test]
    fn single_day_covers_everything() {
        let quota = PlanQuota::compute(CanonTable::standard(), days(1));
        for q in quota.sections() {
            let window = q.window(1).unwrap();
            assert_eq!(window.start(), 1);
            assert_eq!(window.end(), q.total_verses());
            assert_eq!(q.window(2), None);
        }
    }

    #[test]
    fn declared_total_sets_the_share() {
        let canon = CanonTable::new(vec![
            Section::with_declared_total(
                SectionName::Psalms,
                vec![Book::new("Psalms", vec![15; 150]).unwrap()],
                2461,
            )
            .unwrap(),
        ])
        .unwrap();
        let quota = PlanQuota::compute(&canon, days(365));
        assert_eq!(quota.total_verses(), 2461);
        let share = &quota.sections()[0];
        assert_eq!(share.verses_per_day(), 7);
        assert_eq!(share.finish_day(), 352);
        assert_eq!(share.window(352), VerseWindow::new(2458, 2461));
        assert_eq!(share.window(353), None);
    }

    #[test]
    fn more_days_than_verses() {
        let quota = PlanQuota::compute(&one_section(5), days(1000));
        let share = &quota.sections()[0];
        assert_eq!(share.verses_per_day(), 1);
        assert_eq!(share.finish_day(), 5);
        assert_eq!(share.window(5), VerseWindow::new(5, 5));
        assert_eq!(share.window(6), None);
    }
}

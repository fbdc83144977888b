//! Number formatting and weekly aggregates for the stat panels.

use crate::types::DailyStat;

/// Format a count with K/M suffixes, one decimal place kept.
pub fn format_count(value: u64) -> String {
    if value >= 1_000_000 {
        format!("{:.1}M", value as f64 / 1_000_000.0)
    } else if value >= 1_000 {
        format!("{:.1}K", value as f64 / 1_000.0)
    } else {
        value.to_string()
    }
}

/// Format a dollar amount with K/M suffixes.
pub fn format_revenue(value: u64) -> String {
    format!("${}", format_count(value))
}

/// Format a percentage with one decimal place.
pub fn format_percent(value: f32) -> String {
    format!("{value:.1}%")
}

/// Aggregate totals over a run of daily stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekTotals {
    /// Summed views.
    pub views: u64,
    /// Summed engagement events.
    pub engagement: u64,
    /// Summed shares.
    pub shares: u64,
    /// Summed comments.
    pub comments: u64,
}

/// Sum a slice of daily stats into period totals.
pub fn week_totals(stats: &[DailyStat]) -> WeekTotals {
    WeekTotals {
        views: stats.iter().map(|day| day.views).sum(),
        engagement: stats.iter().map(|day| day.engagement).sum(),
        shares: stats.iter().map(|day| day.shares).sum(),
        comments: stats.iter().map(|day| day.comments).sum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn counts_format_with_suffixes() {
        assert_eq!(format_count(950), "950");
        assert_eq!(format_count(12_400), "12.4K");
        assert_eq!(format_count(2_400_000), "2.4M");
        assert_eq!(format_count(2_000), "2.0K");
    }

    #[test]
    fn revenue_formats_with_dollar_sign() {
        assert_eq!(format_revenue(3_240), "$3.2K");
        assert_eq!(format_revenue(890), "$890");
    }

    #[test]
    fn totals_sum_each_series() {
        let stats = vec![
            DailyStat {
                label: "Mon".to_string(),
                views: 10,
                engagement: 2,
                shares: 1,
                comments: 0,
            },
            DailyStat {
                label: "Tue".to_string(),
                views: 20,
                engagement: 3,
                shares: 4,
                comments: 5,
            },
        ];
        let totals = week_totals(&stats);
        assert_eq!(totals.views, 30);
        assert_eq!(totals.engagement, 5);
        assert_eq!(totals.shares, 5);
        assert_eq!(totals.comments, 5);
    }
}

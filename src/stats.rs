use crate::models::{
    A2zProgress, DailyLog, DsaSummary, Habit, HabitEntry, HabitStreak, HabitSummary, LogTotals,
    Profile,
};
use chrono::{Duration, Local, NaiveDate};

/// Habit tracking always looks at the trailing 10 calendar days.
pub const HABIT_WINDOW_DAYS: i64 = 10;

/// Ascending window of the trailing `n` days ending at `today`.
pub fn last_n_days(today: NaiveDate, n: i64) -> Vec<NaiveDate> {
    (0..n).rev().map(|offset| today - Duration::days(offset)).collect()
}

pub fn build_habit_summary(habits: &[Habit], entries: &[HabitEntry]) -> HabitSummary {
    build_habit_summary_at(Local::now().date_naive(), habits, entries)
}

pub fn build_habit_summary_at(
    today: NaiveDate,
    habits: &[Habit],
    entries: &[HabitEntry],
) -> HabitSummary {
    let window = last_n_days(today, HABIT_WINDOW_DAYS);
    let streaks = habits
        .iter()
        .map(|habit| HabitStreak {
            habit_id: habit.id.clone(),
            name: habit.name.clone(),
            streak: habit_streak(&habit.id, &window, entries),
        })
        .collect();

    HabitSummary {
        completion_percent: completion_percent(habits, &window, entries),
        window_start: today - Duration::days(HABIT_WINDOW_DAYS - 1),
        window_end: today,
        streaks,
    }
}

/// Completed slots over total slots (habits x window days), rounded.
/// Absent entries count as not completed.
pub fn completion_percent(habits: &[Habit], window: &[NaiveDate], entries: &[HabitEntry]) -> u32 {
    let slots = habits.len() * window.len();
    if slots == 0 {
        return 0;
    }

    let completed = entries
        .iter()
        .filter(|entry| {
            entry.completed
                && window.contains(&entry.date)
                && habits.iter().any(|habit| habit.id == entry.habit_id)
        })
        .count();

    ((completed as f64 / slots as f64) * 100.0).round() as u32
}

/// Consecutive completed days walking backward from the most recent day in
/// the window. A false or missing entry breaks the run.
pub fn habit_streak(habit_id: &str, window: &[NaiveDate], entries: &[HabitEntry]) -> u32 {
    let mut streak = 0;
    for date in window.iter().rev() {
        let done = entries
            .iter()
            .any(|entry| entry.habit_id == habit_id && entry.date == *date && entry.completed);
        if done {
            streak += 1;
        } else {
            break;
        }
    }
    streak
}

pub fn build_log_totals(profile: Profile, logs: &[DailyLog]) -> LogTotals {
    build_log_totals_at(Local::now().date_naive(), profile, logs)
}

pub fn build_log_totals_at(today: NaiveDate, profile: Profile, logs: &[DailyLog]) -> LogTotals {
    let cutoff = today - Duration::days(7);
    let mut weekly_total = 0;
    let mut overall_total = 0;

    for log in logs.iter().filter(|log| log.profile() == profile) {
        let total = log.total();
        overall_total += total;
        if log.date() >= cutoff {
            weekly_total += total;
        }
    }

    LogTotals {
        weekly_total,
        overall_total,
    }
}

pub fn progress_percent(solved: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    ((solved as f64 / total as f64) * 100.0).round() as u32
}

pub fn build_dsa_summary(progress: &A2zProgress) -> DsaSummary {
    let solved = progress.easy_solved + progress.medium_solved + progress.hard_solved;
    let total = progress.easy_total + progress.medium_total + progress.hard_total;

    DsaSummary {
        easy_percent: progress_percent(progress.easy_solved, progress.easy_total),
        medium_percent: progress_percent(progress.medium_solved, progress.medium_total),
        hard_percent: progress_percent(progress.hard_solved, progress.hard_total),
        overall_percent: progress_percent(solved, total),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{new_id, PiyushDailyLog, ShrutiDailyLog};

    fn habit(id: &str, name: &str) -> Habit {
        Habit {
            id: id.to_string(),
            profile: Profile::Piyush,
            name: name.to_string(),
            sort_order: 0,
        }
    }

    fn entry(habit_id: &str, date: NaiveDate, completed: bool) -> HabitEntry {
        HabitEntry {
            id: new_id(),
            habit_id: habit_id.to_string(),
            date,
            completed,
        }
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn all_true_window_scores_full_completion_and_streaks() {
        let today = day(2026, 8, 28);
        let habits = vec![habit("a", "DSA"), habit("b", "CP"), habit("c", "Revision")];
        let mut entries = Vec::new();
        for habit in &habits {
            for date in last_n_days(today, HABIT_WINDOW_DAYS) {
                entries.push(entry(&habit.id, date, true));
            }
        }

        let summary = build_habit_summary_at(today, &habits, &entries);
        assert_eq!(summary.completion_percent, 100);
        assert_eq!(summary.streaks.len(), 3);
        for streak in &summary.streaks {
            assert_eq!(streak.streak, 10);
        }
    }

    #[test]
    fn completion_is_zero_without_habits() {
        let today = day(2026, 8, 28);
        let entries = vec![entry("ghost", today, true)];
        let summary = build_habit_summary_at(today, &[], &entries);
        assert_eq!(summary.completion_percent, 0);
        assert!(summary.streaks.is_empty());
    }

    #[test]
    fn completion_ignores_entries_outside_window_and_unknown_habits() {
        let today = day(2026, 8, 28);
        let habits = vec![habit("a", "DSA")];
        let entries = vec![
            entry("a", today, true),
            entry("a", today - Duration::days(20), true),
            entry("deleted", today, true),
        ];

        // 1 completed slot out of 10.
        let summary = build_habit_summary_at(today, &habits, &entries);
        assert_eq!(summary.completion_percent, 10);
    }

    #[test]
    fn completion_rounds_to_nearest() {
        let today = day(2026, 8, 28);
        let habits = vec![habit("a", "DSA"), habit("b", "CP"), habit("c", "Contest")];
        // 4 of 30 slots -> 13.33 -> 13
        let entries: Vec<_> = (0..4)
            .map(|offset| entry("a", today - Duration::days(offset), true))
            .collect();
        let summary = build_habit_summary_at(today, &habits, &entries);
        assert_eq!(summary.completion_percent, 13);
    }

    #[test]
    fn streak_counts_back_from_today_until_first_gap() {
        let today = day(2026, 8, 28);
        let window = last_n_days(today, HABIT_WINDOW_DAYS);
        let entries = vec![
            entry("a", today, true),
            entry("a", today - Duration::days(1), true),
            entry("a", today - Duration::days(2), false),
            entry("a", today - Duration::days(3), true),
        ];
        assert_eq!(habit_streak("a", &window, &entries), 2);
    }

    #[test]
    fn streak_is_zero_when_latest_day_is_false_or_absent() {
        let today = day(2026, 8, 28);
        let window = last_n_days(today, HABIT_WINDOW_DAYS);

        let absent = vec![entry("a", today - Duration::days(1), true)];
        assert_eq!(habit_streak("a", &window, &absent), 0);

        let explicit_false = vec![
            entry("a", today, false),
            entry("a", today - Duration::days(1), true),
        ];
        assert_eq!(habit_streak("a", &window, &explicit_false), 0);
    }

    fn piyush_log(date: NaiveDate, striver: u32, leetcode: u32) -> DailyLog {
        let mut log = PiyushDailyLog {
            id: new_id(),
            date,
            striver,
            leetcode,
            codeforces: 0,
            codechef: 0,
            others: 0,
            total: 0,
            notes: None,
        };
        log.total = log.platform_sum();
        DailyLog::Piyush(log)
    }

    fn shruti_log(date: NaiveDate, python: u32, sql: u32) -> DailyLog {
        DailyLog::Shruti(ShrutiDailyLog {
            id: new_id(),
            date,
            python_questions: python,
            sql_questions: sql,
            notes: None,
        })
    }

    #[test]
    fn weekly_total_counts_only_recent_logs() {
        let today = day(2026, 8, 28);
        let logs = vec![
            piyush_log(today, 2, 1),
            piyush_log(today - Duration::days(7), 4, 0),
            piyush_log(today - Duration::days(8), 5, 0),
        ];

        let totals = build_log_totals_at(today, Profile::Piyush, &logs);
        // The day exactly 7 days back is still inside the window.
        assert_eq!(totals.weekly_total, 7);
        assert_eq!(totals.overall_total, 12);
        assert!(totals.weekly_total <= totals.overall_total);
    }

    #[test]
    fn log_totals_are_scoped_to_one_profile() {
        let today = day(2026, 8, 28);
        let logs = vec![
            piyush_log(today, 3, 0),
            shruti_log(today, 5, 3),
            shruti_log(today - Duration::days(30), 2, 2),
        ];

        let piyush = build_log_totals_at(today, Profile::Piyush, &logs);
        assert_eq!(piyush.overall_total, 3);

        let shruti = build_log_totals_at(today, Profile::Shruti, &logs);
        assert_eq!(shruti.weekly_total, 8);
        assert_eq!(shruti.overall_total, 12);
    }

    #[test]
    fn progress_percent_handles_zero_total_and_rounds() {
        assert_eq!(progress_percent(5, 0), 0);
        assert_eq!(progress_percent(0, 80), 0);
        assert_eq!(progress_percent(1, 3), 33);
        assert_eq!(progress_percent(2, 3), 67);
        assert_eq!(progress_percent(80, 80), 100);
    }

    #[test]
    fn progress_percent_is_non_decreasing_in_solved() {
        let mut last = 0;
        for solved in 0..=150 {
            let percent = progress_percent(solved, 150);
            assert!(percent >= last);
            last = percent;
        }
    }

    #[test]
    fn dsa_summary_combines_buckets() {
        let progress = A2zProgress {
            easy_total: 100,
            easy_solved: 80,
            medium_total: 150,
            medium_solved: 60,
            hard_total: 50,
            hard_solved: 10,
        };

        let summary = build_dsa_summary(&progress);
        assert_eq!(summary.easy_percent, 80);
        assert_eq!(summary.medium_percent, 40);
        assert_eq!(summary.hard_percent, 20);
        // 150 solved of 300 total.
        assert_eq!(summary.overall_percent, 50);
    }
}

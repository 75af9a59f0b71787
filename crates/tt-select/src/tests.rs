//! Unit tests for tt-select.

use std::collections::HashMap;

use tt_core::{ActivityId, QuizId};
use tt_schedule::RawTrackActivity;

use crate::{ActivitySource, Candidate, DisplayLookup, DisplayRecord, SelectError, SelectResult};

// ── Fakes ─────────────────────────────────────────────────────────────────────

#[derive(Default)]
struct FakeSource {
    ranked:     HashMap<u64, Vec<RawTrackActivity>>,
    candidates: Vec<Candidate>,
}

impl ActivitySource for FakeSource {
    fn ranked_activities(&self, quiz: QuizId) -> SelectResult<Vec<RawTrackActivity>> {
        self.ranked
            .get(&quiz.0)
            .cloned()
            .ok_or_else(|| SelectError::Source(format!("unknown quiz {}", quiz.0)))
    }

    fn matching_candidates(&self, _quiz: QuizId, match_count: usize) -> SelectResult<Vec<Candidate>> {
        Ok(self.candidates.iter().take(match_count).cloned().collect())
    }
}

/// Returns records in reverse id order, like an unordered `IN (...)` query.
struct FakeLookup;

impl DisplayLookup for FakeLookup {
    fn display_records(&self, ids: &[ActivityId]) -> SelectResult<Vec<DisplayRecord>> {
        let mut out: Vec<DisplayRecord> = ids
            .iter()
            .filter(|id| id.0 != 404)
            .map(|&id| record(id.0))
            .collect();
        out.sort_by_key(|r| std::cmp::Reverse(r.id));
        Ok(out)
    }
}

fn record(id: u32) -> DisplayRecord {
    DisplayRecord {
        id:          ActivityId(id),
        title:       format!("set {id}"),
        description: String::new(),
        image_uri:   None,
        start_time:  String::new(),
        end_time:    String::new(),
        track_title: Some("Stage".into()),
    }
}

fn candidates(n: u32) -> Vec<Candidate> {
    (0..n).map(|i| Candidate { id: ActivityId(i), score: 1.0 - i as f64 / 100.0 }).collect()
}

// ── Sampling ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod sampling {
    use tt_core::SampleRng;

    use crate::{roulette_sample, uniform_sample, SelectError};

    fn assert_distinct_sorted(picked: &[usize], n: usize, k: usize) {
        assert_eq!(picked.len(), k);
        assert!(picked.windows(2).all(|w| w[0] < w[1]));
        assert!(picked.iter().all(|&i| i < n));
    }

    #[test]
    fn uniform_distinct_sorted() {
        let mut rng = SampleRng::new(1);
        for _ in 0..100 {
            assert_distinct_sorted(&uniform_sample(10, 8, &mut rng).unwrap(), 10, 8);
        }
    }

    #[test]
    fn roulette_distinct_sorted() {
        let mut rng = SampleRng::new(2);
        for _ in 0..100 {
            assert_distinct_sorted(&roulette_sample(10, 8, &mut rng).unwrap(), 10, 8);
        }
    }

    #[test]
    fn full_draw_returns_everything() {
        let mut rng = SampleRng::new(3);
        assert_eq!(roulette_sample(5, 5, &mut rng).unwrap(), vec![0, 1, 2, 3, 4]);
        assert_eq!(uniform_sample(5, 5, &mut rng).unwrap(), vec![0, 1, 2, 3, 4]);
        assert!(roulette_sample(5, 0, &mut rng).unwrap().is_empty());
    }

    #[test]
    fn oversampling_is_an_error() {
        let mut rng = SampleRng::new(4);
        assert!(matches!(uniform_sample(3, 4, &mut rng), Err(SelectError::Sample(_))));
        assert!(matches!(roulette_sample(3, 4, &mut rng), Err(SelectError::Sample(_))));
    }

    #[test]
    fn same_seed_same_sample() {
        let a = roulette_sample(10, 4, &mut SampleRng::new(99)).unwrap();
        let b = roulette_sample(10, 4, &mut SampleRng::new(99)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn roulette_favours_top_ranks() {
        // Single draws from 10: index 0 has weight 10/55, index 9 has 1/55.
        let mut rng = SampleRng::new(5);
        let mut counts = [0u32; 10];
        for _ in 0..5_000 {
            counts[roulette_sample(10, 1, &mut rng).unwrap()[0]] += 1;
        }
        assert!(counts[0] > counts[9] * 4, "counts {counts:?}");
        assert!(counts[0] > counts[5], "counts {counts:?}");
    }
}

// ── Ordering ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod ordering {
    use super::*;
    use crate::order_by_selection;

    #[test]
    fn follows_selection_order() {
        let ids = [ActivityId(5), ActivityId(1), ActivityId(3)];
        let records = vec![record(1), record(3), record(5)];
        let ordered: Vec<u32> = order_by_selection(records, &ids).iter().map(|r| r.id.0).collect();
        assert_eq!(ordered, vec![5, 1, 3]);
    }

    #[test]
    fn drops_unselected_and_tolerates_missing() {
        let ids = [ActivityId(2), ActivityId(7)];
        let records = vec![record(9), record(2)];
        let ordered: Vec<u32> = order_by_selection(records, &ids).iter().map(|r| r.id.0).collect();
        assert_eq!(ordered, vec![2]);
    }
}

// ── Planner ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod planner {
    use super::*;
    use crate::Planner;
    use tt_core::{PlannerConfig, SampleRng, TtError};

    fn festival_source() -> FakeSource {
        let mut source = FakeSource { candidates: candidates(10), ..Default::default() };
        source.ranked.insert(
            1,
            vec![
                RawTrackActivity::new(10, 1, "23:00:00", "00:30:00"),
                RawTrackActivity::new(11, 1, "00:00:00", "01:00:00"),
                RawTrackActivity::new(12, 2, "22:00:00", "23:00:00"),
                RawTrackActivity::new(13, 1, "22:00:00", "23:00:00"),
                RawTrackActivity::new(14, 1, "01:00:00", "02:30:00"),
            ],
        );
        source.ranked.insert(2, vec![RawTrackActivity::new(1, 1, "nope", "01:00:00")]);
        source.ranked.insert(3, Vec::new());
        source.ranked.insert(4, vec![RawTrackActivity::new(404, 1, "20:00:00", "21:00:00")]);
        source
    }

    fn planner(config: PlannerConfig) -> Planner<FakeSource, FakeLookup> {
        Planner::new(festival_source(), FakeLookup, config).unwrap()
    }

    #[test]
    fn timetable_packs_across_midnight() {
        let p = planner(PlannerConfig::default());
        // Track 1: 10 (23:00–00:30) wins; 11 overlaps it; 13 (22:00–23:00)
        // and 14 (01:00–02:30) fit.  Track 2 holds only 12.
        let ids: Vec<u32> = p.timetable_ids(QuizId(1)).unwrap().iter().map(|i| i.0).collect();
        assert_eq!(ids, vec![13, 10, 14, 12]);
    }

    #[test]
    fn timetable_records_follow_selection_order() {
        let p = planner(PlannerConfig::default());
        let titles: Vec<String> = p.timetable(QuizId(1)).unwrap().into_iter().map(|r| r.title).collect();
        assert_eq!(titles, vec!["set 13", "set 10", "set 14", "set 12"]);
    }

    #[test]
    fn timetable_is_idempotent() {
        let p = planner(PlannerConfig::default());
        assert_eq!(p.timetable(QuizId(1)).unwrap(), p.timetable(QuizId(1)).unwrap());
    }

    #[test]
    fn format_error_propagates() {
        let p = planner(PlannerConfig::default());
        assert!(matches!(
            p.timetable(QuizId(2)),
            Err(SelectError::Core(TtError::Format { .. }))
        ));
    }

    #[test]
    fn source_error_propagates() {
        let p = planner(PlannerConfig::default());
        assert!(matches!(p.timetable(QuizId(77)), Err(SelectError::Source(_))));
    }

    #[test]
    fn empty_source_gives_empty_timetable() {
        let p = planner(PlannerConfig::default());
        assert!(p.timetable(QuizId(3)).unwrap().is_empty());
    }

    #[test]
    fn lookup_omissions_are_skipped() {
        let p = planner(PlannerConfig::default());
        assert!(p.timetable(QuizId(4)).unwrap().is_empty());
    }

    #[test]
    fn invalid_config_rejected() {
        let config = PlannerConfig { sample_size: 20, ..Default::default() };
        assert!(matches!(
            Planner::new(festival_source(), FakeLookup, config),
            Err(SelectError::Core(TtError::Config(_)))
        ));
    }

    #[test]
    fn swipes_uniform_and_roulette() {
        for roulette in [false, true] {
            let p = planner(PlannerConfig { roulette, ..Default::default() });
            let mut rng = SampleRng::new(7);
            let picked = p.swipes(QuizId(1), &mut rng).unwrap();
            assert_eq!(picked.len(), 8);
            assert!(picked.windows(2).all(|w| w[0].id < w[1].id), "rank order kept");
        }
    }

    #[test]
    fn swipes_reproducible_per_seed_and_quiz() {
        let p = planner(PlannerConfig { roulette: true, ..Default::default() });
        let draw = |seed: u64, quiz: u64| -> Vec<ActivityId> {
            let picked = p.swipes(QuizId(quiz), &mut SampleRng::new(seed)).unwrap();
            picked.into_iter().map(|c| c.id).collect()
        };
        assert_eq!(draw(7, 1), draw(7, 1));
        assert_eq!(draw(7, 2), draw(7, 2));
    }

    #[test]
    fn swipes_need_enough_candidates() {
        let mut source = festival_source();
        source.candidates.truncate(5);
        let p = Planner::new(source, FakeLookup, PlannerConfig::default()).unwrap();
        assert!(matches!(
            p.swipes(QuizId(1), &mut SampleRng::new(0)),
            Err(SelectError::Sample(_))
        ));
    }
}

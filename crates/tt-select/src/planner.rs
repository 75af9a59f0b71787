//! `Planner`: request-level orchestration over injected collaborators.
//!
//! A `Planner` holds its collaborators and a validated config, nothing
//! else.  Each call fetches, computes and returns; the working sets of the
//! scheduling algorithms live only for the duration of that call.

use rustc_hash::FxHashMap;
use tracing::{info, warn};

use tt_core::{ActivityId, DayBoundary, PlannerConfig, QuizId, SampleRng};
use tt_schedule::{pack_tracks, prepare_tracks};

use crate::sampling::{roulette_sample, uniform_sample};
use crate::{ActivitySource, Candidate, DisplayLookup, DisplayRecord, SelectError, SelectResult};

pub struct Planner<S: ActivitySource, L: DisplayLookup> {
    source:   S,
    lookup:   L,
    config:   PlannerConfig,
    boundary: DayBoundary,
}

impl<S: ActivitySource, L: DisplayLookup> Planner<S, L> {
    /// Create a planner, rejecting an invalid `config`.
    pub fn new(source: S, lookup: L, config: PlannerConfig) -> SelectResult<Self> {
        config.validate()?;
        let boundary = config.day_boundary()?;
        Ok(Self { source, lookup, config, boundary })
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Ids of the personalized timetable for `quiz`, in packer order (per
    /// track by start time).
    pub fn timetable_ids(&self, quiz: QuizId) -> SelectResult<Vec<ActivityId>> {
        let raw = self.source.ranked_activities(quiz)?;
        let activities = prepare_tracks(&raw, &self.boundary)?;
        Ok(pack_tracks(&activities))
    }

    /// The personalized timetable for `quiz`, ready for display.
    ///
    /// Records come back in the order of [`Planner::timetable_ids`]
    /// regardless of the order the lookup returns them in.
    pub fn timetable(&self, quiz: QuizId) -> SelectResult<Vec<DisplayRecord>> {
        let ids = self.timetable_ids(quiz)?;
        if ids.is_empty() {
            info!(quiz = quiz.0, "no activities to schedule");
            return Ok(Vec::new());
        }
        let records = self.lookup.display_records(&ids)?;
        let ordered = order_by_selection(records, &ids);
        info!(quiz = quiz.0, selected = ids.len(), shown = ordered.len(), "timetable built");
        Ok(ordered)
    }

    /// A sample of `sample_size` swipe candidates out of the best
    /// `match_count`, in rank order.
    ///
    /// Draws from a stream derived from `rng` and `quiz`, so two quizzes
    /// served from the same root generator get independent samples.
    pub fn swipes(&self, quiz: QuizId, rng: &mut SampleRng) -> SelectResult<Vec<Candidate>> {
        let mut rng = rng.child(quiz.0);
        let mut candidates = self.source.matching_candidates(quiz, self.config.match_count)?;
        candidates.truncate(self.config.match_count);

        let n = candidates.len();
        let k = self.config.sample_size;
        if n < k {
            return Err(SelectError::Sample(format!(
                "quiz {} has {n} candidates, need {k}",
                quiz.0
            )));
        }

        let picked = if self.config.roulette {
            roulette_sample(n, k, &mut rng)?
        } else {
            uniform_sample(n, k, &mut rng)?
        };

        info!(quiz = quiz.0, candidates = n, picked = k, roulette = self.config.roulette, "swipes sampled");
        Ok(picked.into_iter().map(|i| candidates[i].clone()).collect())
    }
}

/// Sort `records` by the position of their id in `ids`.
///
/// Records whose id is not in `ids` are dropped.  Ids with no record are
/// skipped with a warning.
pub fn order_by_selection(records: Vec<DisplayRecord>, ids: &[ActivityId]) -> Vec<DisplayRecord> {
    let position: FxHashMap<ActivityId, usize> =
        ids.iter().enumerate().map(|(pos, &id)| (id, pos)).collect();

    let mut ordered: Vec<(usize, DisplayRecord)> = records
        .into_iter()
        .filter_map(|r| position.get(&r.id).map(|&pos| (pos, r)))
        .collect();
    ordered.sort_by_key(|&(pos, _)| pos);
    ordered.dedup_by_key(|&mut (pos, _)| pos);

    if ordered.len() < ids.len() {
        warn!(
            selected = ids.len(),
            found = ordered.len(),
            "display lookup omitted selected activities"
        );
    }
    ordered.into_iter().map(|(_, r)| r).collect()
}

//! festival: smallest end-to-end example for the rust_tt planner.
//!
//! Two stages of an overnight programme (22:00 → 03:30), ranked for one user,
//! packed into a conflict-free timetable; then a weighted single-room plan
//! and a swipe deck drawn from the same candidates.
//!
//! Run with `RUST_LOG=debug` to see the packer and solver summaries.

use std::io::Cursor;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tt_core::{ActivityId, PlannerConfig, QuizId, SampleRng};
use tt_schedule::{
    load_track_reader, load_weighted_reader, prepare_weighted, solve_weighted, RawTrackActivity,
};
use tt_select::{
    ActivitySource, Candidate, DisplayLookup, DisplayRecord, Planner, SelectError, SelectResult,
};

// ── Constants ─────────────────────────────────────────────────────────────────

const QUIZ: QuizId = QuizId(1);

// Descending priority for QUIZ.  Times after midnight wrap to the next day.
const RANKED_CSV: &str = "\
id,schedule_id,start_time,end_time,rank\n\
3,1,23:30:00,01:00:00,0\n\
7,2,00:00:00,01:30:00,1\n\
1,1,22:00:00,23:30:00,2\n\
4,1,00:30:00,02:00:00,3\n\
8,2,01:30:00,03:30:00,4\n\
5,1,01:00:00,02:30:00,5\n\
6,2,22:30:00,00:15:00,6\n\
";

const WEIGHTED_CSV: &str = "\
id,start_time,end_time,value\n\
1,0,5,5\n\
2,3,8,6\n\
3,6,10,5\n\
";

const TITLES: [(u32, &str, &str); 8] = [
    (1, "Opening DJ", "Main"),
    (3, "Headliner", "Main"),
    (4, "Late set", "Main"),
    (5, "Closing set", "Main"),
    (6, "Live AV", "Dome"),
    (7, "Modular jam", "Dome"),
    (8, "Ambient sunrise", "Dome"),
    (9, "Talk", "Dome"),
];

// ── In-memory collaborators ───────────────────────────────────────────────────

struct MemorySource {
    ranked: Vec<RawTrackActivity>,
}

impl ActivitySource for MemorySource {
    fn ranked_activities(&self, quiz: QuizId) -> SelectResult<Vec<RawTrackActivity>> {
        if quiz != QUIZ {
            return Err(SelectError::Source(format!("no ranking for quiz {}", quiz.0)));
        }
        Ok(self.ranked.clone())
    }

    fn matching_candidates(&self, _quiz: QuizId, match_count: usize) -> SelectResult<Vec<Candidate>> {
        Ok(TITLES
            .iter()
            .enumerate()
            .take(match_count)
            .map(|(rank, &(id, _, _))| Candidate { id: ActivityId(id), score: 1.0 / (rank + 1) as f64 })
            .collect())
    }
}

struct MemoryLookup;

impl DisplayLookup for MemoryLookup {
    fn display_records(&self, ids: &[ActivityId]) -> SelectResult<Vec<DisplayRecord>> {
        Ok(TITLES
            .iter()
            .filter(|(id, _, _)| ids.contains(&ActivityId(*id)))
            .map(|&(id, title, stage)| DisplayRecord {
                id:          ActivityId(id),
                title:       title.to_owned(),
                description: String::new(),
                image_uri:   None,
                start_time:  String::new(),
                end_time:    String::new(),
                track_title: Some(stage.to_owned()),
            })
            .collect())
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let ranked = load_track_reader(Cursor::new(RANKED_CSV)).context("loading ranked activities")?;
    let config = PlannerConfig { match_count: 8, sample_size: 4, roulette: true, seed: 42, ..Default::default() };
    let mut rng = SampleRng::new(config.seed);
    let planner = Planner::new(MemorySource { ranked }, MemoryLookup, config)?;

    info!("timetable for quiz {}", QUIZ.0);
    for record in planner.timetable(QUIZ)? {
        println!(
            "  {:<16} {}",
            record.title,
            record.track_title.as_deref().unwrap_or("-")
        );
    }

    info!("swipe deck");
    for candidate in planner.swipes(QUIZ, &mut rng)? {
        println!("  {} (score {:.2})", candidate.id, candidate.score);
    }

    let weighted = prepare_weighted(&load_weighted_reader(Cursor::new(WEIGHTED_CSV))?)?;
    let schedule = solve_weighted(&weighted);
    let mut chronological = schedule.ids.clone();
    chronological.reverse();
    info!("weighted plan: {:?} (total value {})", chronological, schedule.total);

    Ok(())
}

use std::cmp::Ordering;

use hashbrown::HashSet;
use log::debug;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::grade_scale::{GradeScale, Rank};
use crate::logbook::{GradedRoute, LogbookEntry};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    pub unique_route_count: usize,
    pub failed_attempts: i64,
    pub mean_grade: String,
    pub hardest_grade: String,
    pub furthest_routes: Vec<GradedRoute>,
}

struct RankSummary {
    min: Rank,
    max: Rank,
    sum: i64,
    count: i64,
}

impl RankSummary {
    fn new(ranks: &[Rank]) -> Result<Self> {
        if ranks.is_empty() {
            return Err(Error::EmptyLogbook);
        }

        let mut summary = Self {
            min: Rank::MAX,
            max: Rank::MIN,
            sum: 0,
            count: 0,
        };

        for &rank in ranks {
            summary.min = summary.min.min(rank);
            summary.max = summary.max.max(rank);
            summary.sum += i64::from(rank);
            summary.count += 1;
        }

        Ok(summary)
    }

    /// Mean rounded half-up, `floor(sum / count + 1/2)`, without leaving
    /// integers. Lies within `[min, max]`.
    fn rounded_mean(&self) -> i64 {
        (2 * self.sum + self.count).div_euclid(2 * self.count)
    }
}

fn ranks(entries: &[LogbookEntry], scale: &GradeScale) -> Result<Vec<Rank>> {
    entries
        .iter()
        .map(|entry| scale.to_rank(&entry.grade))
        .collect()
}

/// Distinct route names, compared exactly.
pub fn unique_route_count(entries: &[LogbookEntry]) -> usize {
    entries
        .iter()
        .map(|entry| entry.route_name.as_str())
        .collect::<HashSet<_>>()
        .len()
}

/// Every entry is one send, so anything beyond one attempt per entry failed.
pub fn failed_attempts(entries: &[LogbookEntry]) -> i64 {
    let total: i64 = entries.iter().map(|entry| i64::from(entry.attempts)).sum();
    total - entries.len() as i64
}

/// Mean rank rounded half-up, e.g. 11.5 becomes 12.
pub fn mean_grade(entries: &[LogbookEntry], scale: &GradeScale) -> Result<String> {
    let summary = RankSummary::new(&ranks(entries, scale)?)?;
    let rounded = summary.rounded_mean() as Rank;

    Ok(scale.to_label(rounded)?.to_string())
}

pub fn hardest_grade(entries: &[LogbookEntry], scale: &GradeScale) -> Result<String> {
    let summary = RankSummary::new(&ranks(entries, scale)?)?;
    Ok(scale.to_label(summary.max)?.to_string())
}

/// Entries at whichever end of the observed range lies further from the
/// unrounded mean, or at both ends when they are equally far. Input order and
/// repeated routes are kept.
pub fn furthest_from_average(
    entries: &[LogbookEntry],
    scale: &GradeScale,
) -> Result<Vec<GradedRoute>> {
    let ranks = ranks(entries, scale)?;
    let summary = RankSummary::new(&ranks)?;

    // max - mean vs mean - min, scaled by count to stay in integers
    let ends = summary.count * (i64::from(summary.max) + i64::from(summary.min));
    let (take_max, take_min) = match ends.cmp(&(2 * summary.sum)) {
        Ordering::Greater => (true, false),
        Ordering::Less => (false, true),
        Ordering::Equal => (true, true),
    };

    Ok(entries
        .iter()
        .zip(ranks)
        .filter(|&(_, rank)| {
            (take_max && rank == summary.max) || (take_min && rank == summary.min)
        })
        .map(|(entry, _)| GradedRoute::from(entry))
        .collect())
}

pub fn analyze(entries: &[LogbookEntry], scale: &GradeScale) -> Result<AnalysisResult> {
    let unique_route_count = unique_route_count(entries);
    let failed_attempts = failed_attempts(entries);
    let mean_grade = mean_grade(entries, scale)?;
    let hardest_grade = hardest_grade(entries, scale)?;
    let furthest_routes = furthest_from_average(entries, scale)?;

    debug!(
        "analyzed {} entries: {} routes, mean {}, hardest {}",
        entries.len(),
        unique_route_count,
        mean_grade,
        hardest_grade
    );

    Ok(AnalysisResult {
        unique_route_count,
        failed_attempts,
        mean_grade,
        hardest_grade,
        furthest_routes,
    })
}

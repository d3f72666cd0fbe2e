use statrs::statistics::Statistics;

use crate::config::Number;
use crate::error::CompareError;
use crate::report::render_markdown;
use crate::source::{ReportSink, VectorSource};
use crate::vector_entry::{CandidateEntry, ModelEmbeddings};
use crate::vector_ops::{compute_difference, l2_norm, normalize_vector};

#[derive(Debug, Clone, PartialEq)]
pub struct Overview {
    pub left_count: usize,
    pub right_count: usize,
    /// Length of the first reference vector, 0 when there is none.
    pub dimensions: usize,
    pub model: String,
}

/// A pair that was comparable: the normalized candidate, the untouched reference and
/// their difference score.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonRow {
    pub index: usize,
    pub normalized: Vec<Number>,
    pub reference: Vec<Number>,
    pub difference: Number,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SummaryStatistics {
    pub valid_count: usize,
    pub total: Number,
    pub mean: Number,
    pub min: Option<Number>,
    pub max: Option<Number>,
    pub std_dev: Option<Number>,
}

impl SummaryStatistics {
    pub fn from_scores(scores: &[Number]) -> Self {
        let valid_count = scores.len();
        let total: Number = scores.iter().fold(0.0, |acc, &score| acc + score);
        let mean = if valid_count > 0 {
            total / valid_count as Number
        } else {
            0.0
        };

        let (min, max) = if valid_count > 0 {
            (
                Some(Statistics::min(scores.iter())),
                Some(Statistics::max(scores.iter())),
            )
        } else {
            (None, None)
        };
        let std_dev = Some(Statistics::std_dev(scores.iter())).filter(|s| s.is_finite());

        Self {
            valid_count,
            total,
            mean,
            min,
            max,
            std_dev,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonReport {
    pub overview: Overview,
    pub rows: Vec<ComparisonRow>,
    pub summary: SummaryStatistics,
}

/// Compare the first candidate vector of each entry, normalized, against the reference
/// vector at the same position.
///
/// Only `min(entries.len(), reference.embeddings.len())` pairs are visited. Pairs whose
/// dimensions differ, or whose entry has no candidate vector, are left out of both the
/// rows and the statistics.
pub fn compare_collections(
    entries: &[CandidateEntry],
    reference: &ModelEmbeddings,
) -> ComparisonReport {
    let overview = Overview {
        left_count: entries.len(),
        right_count: reference.embeddings.len(),
        dimensions: reference.embeddings.first().map_or(0, Vec::len),
        model: reference.model.clone(),
    };

    let pair_count = entries.len().min(reference.embeddings.len());
    tracing::debug!(
        "Comparing {} pairs against model '{}'",
        pair_count,
        overview.model
    );

    let rows: Vec<ComparisonRow> = entries
        .iter()
        .zip(&reference.embeddings)
        .enumerate()
        .filter_map(|(index, (entry, reference_vector))| {
            compare_pair(index, entry, reference_vector)
        })
        .collect();

    let scores: Vec<Number> = rows.iter().map(|row| row.difference).collect();
    let summary = SummaryStatistics::from_scores(&scores);

    tracing::debug!(
        "{} of {} pairs comparable, mean difference {:.4}%",
        summary.valid_count,
        pair_count,
        summary.mean
    );

    ComparisonReport {
        overview,
        rows,
        summary,
    }
}

/// Load both inputs, compare them and hand the rendered report to `sink`.
///
/// Any load failure aborts before the sink is touched.
pub fn run_comparison<L, R, S>(
    left: &L,
    right: &R,
    sink: &S,
) -> Result<ComparisonReport, CompareError>
where
    L: VectorSource<Collection = Vec<CandidateEntry>>,
    R: VectorSource<Collection = ModelEmbeddings>,
    S: ReportSink,
{
    let entries = left.load()?;
    let reference = right.load()?;
    tracing::info!(
        "Loaded {} candidate entries and {} reference vectors",
        entries.len(),
        reference.embeddings.len()
    );

    let report = compare_collections(&entries, &reference);
    sink.write_report(&render_markdown(&report))?;
    Ok(report)
}

fn compare_pair(
    index: usize,
    entry: &CandidateEntry,
    reference_vector: &[Number],
) -> Option<ComparisonRow> {
    let Some(candidate) = entry.first_candidate() else {
        tracing::debug!("Entry {} has no embedding, skipping", entry.index);
        return None;
    };

    let normalized = normalize_vector(candidate);
    tracing::info!(
        index,
        norm = l2_norm(&normalized),
        "normalized vector: {:?}",
        normalized
    );

    let difference = compute_difference(&normalized, reference_vector);
    if difference.is_none() {
        tracing::debug!(
            "Pair {} not comparable: {} vs {} dimensions",
            index,
            normalized.len(),
            reference_vector.len()
        );
    }

    difference.map(|difference| ComparisonRow {
        index,
        normalized,
        reference: reference_vector.to_vec(),
        difference,
    })
}

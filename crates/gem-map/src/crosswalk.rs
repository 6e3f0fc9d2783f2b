//! Per-family crosswalk: matchers and secondary expansion.

use gem_model::{CodeFamily, Direction, EquivalenceTable, MappingResult};
use gem_standards::{DirectionalIndex, FamilySources, KeyColumn, load_table};
use indexmap::IndexSet;
use serde::Serialize;
use tracing::{debug, info, info_span};

use crate::pipeline::MatchPipeline;

/// One of the four lookups a crosswalk keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexView {
    /// Forward table keyed by I9 code.
    ForwardBySource,
    /// Forward table keyed by I10 code.
    ForwardByTarget,
    /// Backward table keyed by I10 code.
    BackwardByTarget,
    /// Backward table keyed by I9 code.
    BackwardBySource,
}

impl IndexView {
    pub const ALL: [IndexView; 4] = [
        IndexView::ForwardBySource,
        IndexView::ForwardByTarget,
        IndexView::BackwardByTarget,
        IndexView::BackwardBySource,
    ];

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::ForwardBySource => "forward (I9 key)",
            Self::ForwardByTarget => "forward (I10 key)",
            Self::BackwardByTarget => "backward (I10 key)",
            Self::BackwardBySource => "backward (I9 key)",
        }
    }
}

/// Result of running a [`MatchPipeline`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MatchOutcome {
    pub result: MappingResult,
    /// Codes pulled in by secondary expansion, in discovery order.
    /// Empty unless the pipeline expands.
    pub secondary_codes: Vec<String>,
}

/// Forward and backward GEM tables of one family, indexed both ways.
///
/// The backward table is published separately and is not the inverse of the
/// forward table, so each direction has its own pair of indexes. Indexes are
/// built eagerly and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Crosswalk {
    family: CodeFamily,
    forward: DirectionalIndex,
    forward_by_target: DirectionalIndex,
    backward: DirectionalIndex,
    backward_by_source: DirectionalIndex,
}

impl Crosswalk {
    /// Builds all four indexes.
    ///
    /// `backward` is laid out as published: I10 code first, I9 code second.
    pub fn from_tables(
        family: CodeFamily,
        forward: &EquivalenceTable,
        backward: &EquivalenceTable,
    ) -> Self {
        let crosswalk = Self {
            family,
            forward: DirectionalIndex::build(forward, KeyColumn::Source),
            forward_by_target: DirectionalIndex::build(forward, KeyColumn::Target),
            backward: DirectionalIndex::build(backward, KeyColumn::Source),
            backward_by_source: DirectionalIndex::build(backward, KeyColumn::Target),
        };
        info!(
            family = %family,
            forward_rows = crosswalk.forward.row_count(),
            forward_codes = crosswalk.forward.key_count(),
            backward_rows = crosswalk.backward.row_count(),
            backward_codes = crosswalk.backward.key_count(),
            "crosswalk indexed"
        );
        crosswalk
    }

    /// Loads both tables of a family and indexes them.
    ///
    /// # Errors
    ///
    /// Fails when either table is missing or malformed.
    pub fn load(family: CodeFamily, sources: &FamilySources) -> crate::Result<Self> {
        let span = info_span!("load_crosswalk", family = %family);
        let _guard = span.enter();
        let forward = load_table(sources.path(Direction::Forward))?;
        let backward = load_table(sources.path(Direction::Backward))?;
        Ok(Self::from_tables(family, &forward, &backward))
    }

    pub fn family(&self) -> CodeFamily {
        self.family
    }

    pub fn index(&self, view: IndexView) -> &DirectionalIndex {
        match view {
            IndexView::ForwardBySource => &self.forward,
            IndexView::ForwardByTarget => &self.forward_by_target,
            IndexView::BackwardByTarget => &self.backward,
            IndexView::BackwardBySource => &self.backward_by_source,
        }
    }

    /// I9 → I10 using the forward table. Every code becomes a key.
    pub fn forward_match<S: AsRef<str>>(&self, codes: &[S]) -> MappingResult {
        match_with(&self.forward, codes)
    }

    /// I10 → I9 using the backward table. Every code becomes a key.
    pub fn backward_match<S: AsRef<str>>(&self, codes: &[S]) -> MappingResult {
        match_with(&self.backward, codes)
    }

    /// Forward and backward matches of the same codes, merged.
    pub fn forward_backward<S: AsRef<str>>(&self, codes: &[S]) -> MappingResult {
        self.forward_match(codes).merge(self.backward_match(codes))
    }

    /// I9 codes sharing a related code with anything in `primary`.
    ///
    /// Scans the forward table's I10 column, then the backward table's I10
    /// column, for every related code in `primary`.
    pub fn secondary_codes(&self, primary: &MappingResult) -> IndexSet<String> {
        let shared = primary.related_codes();
        let from_forward = shared
            .iter()
            .flat_map(|code| self.forward_by_target.lookup(code));
        let from_backward = shared.iter().flat_map(|code| self.backward.lookup(code));
        from_forward
            .chain(from_backward)
            .map(|pair| pair.code.clone())
            .collect()
    }

    /// Forward-backward match widened by exactly one hop.
    ///
    /// Codes reached only through a second shared target are not included;
    /// callers wanting more can expand again on the result's codes.
    pub fn expand<S: AsRef<str>>(&self, codes: &[S]) -> MatchOutcome {
        let primary = self.forward_backward(codes);
        let secondary: Vec<String> = self.secondary_codes(&primary).into_iter().collect();
        info!(
            family = %self.family,
            count = secondary.len(),
            codes = ?secondary,
            "secondary codes"
        );
        let result = primary.merge(self.forward_backward(&secondary));
        MatchOutcome {
            result,
            secondary_codes: secondary,
        }
    }

    pub fn run<S: AsRef<str>>(&self, pipeline: MatchPipeline, codes: &[S]) -> MatchOutcome {
        let outcome = match pipeline {
            MatchPipeline::Forward => MatchOutcome {
                result: self.forward_match(codes),
                secondary_codes: Vec::new(),
            },
            MatchPipeline::ForwardBackward => MatchOutcome {
                result: self.forward_backward(codes),
                secondary_codes: Vec::new(),
            },
            MatchPipeline::Secondary => self.expand(codes),
        };
        debug!(
            family = %self.family,
            %pipeline,
            queried = codes.len(),
            keys = outcome.result.len(),
            matched = outcome.result.matched_count(),
            pairs = outcome.result.pair_count(),
            "query complete"
        );
        outcome
    }
}

fn match_with<S: AsRef<str>>(index: &DirectionalIndex, codes: &[S]) -> MappingResult {
    let mut result = MappingResult::new();
    for code in codes {
        let code = code.as_ref();
        result.insert_empty(code);
        result.insert_pairs(code, index.lookup(code).iter().cloned());
    }
    result
}

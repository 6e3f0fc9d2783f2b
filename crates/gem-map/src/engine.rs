//! Both crosswalk families, loaded once at startup.

use gem_model::CodeFamily;
use gem_standards::GemSources;
use tracing::{info_span, warn};

use crate::crosswalk::{Crosswalk, MatchOutcome};
use crate::pipeline::MatchPipeline;

/// CM and PCS crosswalks. Families never consult each other.
#[derive(Debug, Clone)]
pub struct GemEngine {
    cm: Crosswalk,
    pcs: Crosswalk,
}

impl GemEngine {
    /// Loads and indexes all four tables.
    ///
    /// # Errors
    ///
    /// Fails on the first missing or malformed table.
    pub fn load(sources: &GemSources) -> crate::Result<Self> {
        let span = info_span!("load_tables");
        let _guard = span.enter();
        let cm = Crosswalk::load(CodeFamily::Cm, &sources.cm)?;
        let pcs = Crosswalk::load(CodeFamily::Pcs, &sources.pcs)?;
        Ok(Self { cm, pcs })
    }

    pub fn from_crosswalks(cm: Crosswalk, pcs: Crosswalk) -> Self {
        Self { cm, pcs }
    }

    pub fn crosswalk(&self, family: CodeFamily) -> &Crosswalk {
        match family {
            CodeFamily::Cm => &self.cm,
            CodeFamily::Pcs => &self.pcs,
        }
    }

    /// Runs a query selected by a raw mode string (`cm` or `pcs`).
    ///
    /// An unrecognized mode is not an error: it yields an empty outcome.
    pub fn run_mode<S: AsRef<str>>(
        &self,
        mode: &str,
        pipeline: MatchPipeline,
        codes: &[S],
    ) -> MatchOutcome {
        match CodeFamily::parse(mode) {
            Some(family) => self.crosswalk(family).run(pipeline, codes),
            None => {
                warn!(mode, "unrecognized mode selector, returning empty result");
                MatchOutcome::default()
            }
        }
    }
}

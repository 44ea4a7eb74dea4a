//! ConsensusEngine: weighted reconciliation of independent agent votes.
//!
//! Formula: each agent's weight is `confidence × relevance`, so a highly
//! confident agent with nothing relevant to say barely moves the outcome.
//!
//! ```text
//! weighted_score       = Σ wᵢ·voteᵢ / Σ wᵢ          (vote: delete = 1)
//! final_decision       = weighted_score ≥ 0.5
//! agreement_level      = Σ wᵢ[voteᵢ = final] / Σ wᵢ
//! consensus_confidence = (Σ wᵢ·confidenceᵢ / Σ wᵢ) × agreement_level
//! ```
//!
//! Worked example: confidences [0.9, 0.8, 0.2], relevances [1.0, 1.0, 0.1],
//! votes [delete, delete, keep]: weights ≈ [0.9, 0.8, 0.02], weighted score
//! 1.7/1.72 ≈ 0.99 ⇒ delete, agreement ≈ 0.99, and the dissenting keep vote
//! lands in `minority_views`.
//!
//! Multiplying the weighted mean confidence by the agreement level makes low
//! agreement impossible to pair with high reported confidence. A unanimous
//! vote has agreement exactly 1.0; a single agent trivially agrees with
//! itself, so its confidence passes through undiscounted.

use mnemo_core::config::ConsensusConfig;
use mnemo_core::errors::{AnalysisError, CuratorResult};
use mnemo_core::models::{AgentAnalysis, ConsensusResult, MinorityView};

/// Pure, synchronous reduction of agent analyses into one verdict.
pub struct ConsensusEngine {
    config: ConsensusConfig,
}

impl ConsensusEngine {
    pub fn new(config: ConsensusConfig) -> Self {
        Self { config }
    }

    /// Combine the analyses for one record. `quality_score` feeds the
    /// borderline-quality leg of the human-review flag.
    pub fn combine(
        &self,
        analyses: &[AgentAnalysis],
        quality_score: f64,
    ) -> CuratorResult<ConsensusResult> {
        if analyses.is_empty() {
            return Err(AnalysisError::EmptyConsensusInput.into());
        }

        let mut weights: Vec<f64> = analyses
            .iter()
            .map(|a| {
                (a.confidence_score.clamp(0.0, 1.0) * a.relevance_score.clamp(0.0, 1.0)).max(0.0)
            })
            .collect();

        // Degenerate all-zero-weight input: fall back to uniform weights so
        // a decision is still produced.
        let total: f64 = weights.iter().sum();
        if total <= f64::EPSILON {
            weights.iter_mut().for_each(|w| *w = 1.0);
        }
        let total: f64 = weights.iter().sum();

        let delete_weight: f64 = analyses
            .iter()
            .zip(&weights)
            .filter(|(a, _)| a.delete_recommendation)
            .map(|(_, w)| w)
            .sum();

        let weighted_score = delete_weight / total;
        let final_decision = weighted_score >= 0.5;

        let agreeing_weight: f64 = analyses
            .iter()
            .zip(&weights)
            .filter(|(a, _)| a.delete_recommendation == final_decision)
            .map(|(_, w)| w)
            .sum();
        let agreement_level = (agreeing_weight / total).clamp(0.0, 1.0);

        let mean_confidence: f64 = analyses
            .iter()
            .zip(&weights)
            .map(|(a, w)| a.confidence_score.clamp(0.0, 1.0) * w)
            .sum::<f64>()
            / total;
        let consensus_confidence = (mean_confidence * agreement_level).clamp(0.0, 1.0);

        let minority_views: Vec<MinorityView> = analyses
            .iter()
            .filter(|a| a.delete_recommendation != final_decision)
            .map(|a| MinorityView {
                agent_role: a.agent_role,
                reasoning: a.reasoning.clone(),
            })
            .collect();

        let borderline_quality = quality_score >= self.config.borderline_quality_low
            && quality_score <= self.config.borderline_quality_high;
        let requires_human_review = consensus_confidence < self.config.review_confidence_threshold
            || agreement_level < self.config.agreement_threshold
            || (!minority_views.is_empty() && borderline_quality);

        Ok(ConsensusResult {
            final_decision,
            consensus_confidence,
            agreement_level,
            weighted_score,
            requires_human_review,
            minority_views,
        })
    }
}

impl Default for ConsensusEngine {
    fn default() -> Self {
        Self::new(ConsensusConfig::default())
    }
}

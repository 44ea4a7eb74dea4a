//! Property tests for the consensus engine's bounds and monotonicity.

use proptest::prelude::*;

use mnemo_agents::ConsensusEngine;
use mnemo_core::models::{AgentAnalysis, AgentRole};

fn analysis(confidence: f64, relevance: f64, delete: bool) -> AgentAnalysis {
    AgentAnalysis {
        agent_role: AgentRole::General,
        confidence_score: confidence,
        relevance_score: relevance,
        findings: vec![],
        delete_recommendation: delete,
        reasoning: "generated".to_string(),
        specialized_insights: vec![],
    }
}

fn arb_analyses() -> impl Strategy<Value = Vec<AgentAnalysis>> {
    prop::collection::vec(
        (0.0f64..=1.0, 0.0f64..=1.0, any::<bool>()),
        1..8,
    )
    .prop_map(|specs| {
        specs
            .into_iter()
            .map(|(c, r, d)| analysis(c, r, d))
            .collect()
    })
}

proptest! {
    #[test]
    fn confidence_and_agreement_stay_bounded(
        analyses in arb_analyses(),
        quality in 0.0f64..=100.0,
    ) {
        let result = ConsensusEngine::default().combine(&analyses, quality).unwrap();
        prop_assert!((0.0..=1.0).contains(&result.consensus_confidence));
        prop_assert!((0.0..=1.0).contains(&result.agreement_level));
        prop_assert!((0.0..=1.0).contains(&result.weighted_score));
    }

    #[test]
    fn unanimous_votes_agree_fully(
        specs in prop::collection::vec((0.0f64..=1.0, 0.0f64..=1.0), 1..8),
        vote in any::<bool>(),
    ) {
        let analyses: Vec<_> = specs
            .into_iter()
            .map(|(c, r)| analysis(c, r, vote))
            .collect();
        let result = ConsensusEngine::default().combine(&analyses, 70.0).unwrap();
        prop_assert!((result.agreement_level - 1.0).abs() < 1e-12);
        prop_assert_eq!(result.final_decision, vote);
        prop_assert!(result.minority_views.is_empty());
    }

    #[test]
    fn decision_is_monotonic_in_weighted_score(
        analyses in arb_analyses(),
        quality in 0.0f64..=100.0,
    ) {
        let result = ConsensusEngine::default().combine(&analyses, quality).unwrap();
        // The decision is exactly `weighted_score >= 0.5`; values below
        // never produce a delete.
        prop_assert_eq!(result.final_decision, result.weighted_score >= 0.5);
    }

    #[test]
    fn minority_views_match_dissenters(
        analyses in arb_analyses(),
    ) {
        let result = ConsensusEngine::default().combine(&analyses, 70.0).unwrap();
        let dissenters = analyses
            .iter()
            .filter(|a| a.delete_recommendation != result.final_decision)
            .count();
        prop_assert_eq!(result.minority_views.len(), dissenters);
    }
}

//! TriageManager, the operator-facing surface of the curation core.
//!
//! Every mutating operation loads the persisted session, applies one state
//! transition, and persists the whole session back. That load-mutate-save
//! round trip is the critical section: one operator, one live session per
//! store location.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::instrument;

use mnemo_agents::AnalysisPipeline;
use mnemo_core::config::CurationConfig;
use mnemo_core::errors::{CuratorError, CuratorResult, SessionError};
use mnemo_core::models::{
    CurationSession, ItemDetails, QueueStatus, SessionSummary, StatusReport, StepOutcome,
    TriageAction, TriageMode,
};
use mnemo_core::traits::{ICurationAgent, IRecordStore, ISessionStore, ITriageEventSink, TriageEvent};

use crate::executor::{ActionExecutor, ExecutionOutcome};
use crate::extract::extract_items;
use crate::machine;

/// Options accepted by `start`.
#[derive(Debug, Clone, Default)]
pub struct StartOptions {
    /// Records to pull into the analysis batch. Defaults from config.
    pub limit: Option<usize>,
    /// Enable dangling-reference checking against a codebase.
    pub check_against_codebase: bool,
    /// Root the reference check resolves paths under.
    pub codebase_root: Option<PathBuf>,
}

pub struct TriageManager {
    record_store: Arc<dyn IRecordStore>,
    session_store: Box<dyn ISessionStore>,
    events: Box<dyn ITriageEventSink>,
    config: CurationConfig,
    pipeline: AnalysisPipeline,
}

impl TriageManager {
    pub fn new(
        record_store: Arc<dyn IRecordStore>,
        session_store: Box<dyn ISessionStore>,
        events: Box<dyn ITriageEventSink>,
        config: CurationConfig,
        agents: Vec<Box<dyn ICurationAgent>>,
    ) -> Self {
        let pipeline = AnalysisPipeline::new(&config, agents);
        Self {
            record_store,
            session_store,
            events,
            config,
            pipeline,
        }
    }

    fn load_session(&self) -> CuratorResult<CurationSession> {
        self.session_store
            .load()?
            .ok_or_else(|| CuratorError::from(SessionError::NoActiveSession))
    }

    fn persist(&self, session: &CurationSession) -> CuratorResult<()> {
        self.session_store.save(session)?;
        self.events.emit(TriageEvent::SessionPersisted {
            session_id: session.session_id.clone(),
        });
        Ok(())
    }

    fn summarize(&self, session: &CurationSession, resumed: bool) -> SessionSummary {
        let count = |tag: &str| {
            session
                .items
                .iter()
                .filter(|i| i.kind.tag() == tag)
                .count()
        };
        SessionSummary {
            session_id: session.session_id.clone(),
            resumed,
            records_analyzed: session.analyses.len(),
            unanalyzable: session.unanalyzable.clone(),
            delete_items: count("delete"),
            connect_items: count("connect"),
            enhance_items: count("enhance"),
            pattern_items: count("extract-pattern"),
        }
    }

    /// Resume the persisted session if one exists, otherwise run a fresh
    /// batch analysis and build a new session from it.
    #[instrument(skip(self))]
    pub fn start(&mut self, options: StartOptions) -> CuratorResult<SessionSummary> {
        if let Some(session) = self.session_store.load()? {
            self.events.emit(TriageEvent::SessionResumed {
                session_id: session.session_id.clone(),
                pending: session.pending_in_mode(TriageMode::All),
            });
            return Ok(self.summarize(&session, true));
        }

        let mut quality = self.config.quality.clone();
        quality.check_against_codebase = options.check_against_codebase;
        if options.codebase_root.is_some() {
            quality.codebase_root = options.codebase_root.clone();
        }
        self.pipeline
            .set_quality_config(quality, &self.config.analysis);

        let limit = options
            .limit
            .unwrap_or(self.config.analysis.default_record_limit);
        let records = self.record_store.list(Some(limit))?;
        let batch = self.pipeline.analyze_batch(&records, &*self.record_store);
        let items = extract_items(&batch.analyses);

        let session = CurationSession::new(batch.analyses, batch.unanalyzable, items);
        self.persist(&session)?;
        self.events.emit(TriageEvent::SessionStarted {
            session_id: session.session_id.clone(),
            items: session.items.len(),
        });
        Ok(self.summarize(&session, false))
    }

    /// Apply an optional action to the current item, then present the next
    /// pending item in the current mode.
    #[instrument(skip(self))]
    pub fn next(&self, action: Option<TriageAction>) -> CuratorResult<StepOutcome> {
        let mut session = self.load_session()?;

        if let Some(action) = action {
            let item_id = machine::apply_action(&mut session, action)?;
            self.events
                .emit(TriageEvent::ActionApplied { item_id, action });
        }

        let outcome = machine::advance(&mut session);
        match &outcome {
            StepOutcome::Item { item, .. } => {
                self.events.emit(TriageEvent::ItemPresented {
                    item_id: item.item_id,
                });
            }
            StepOutcome::ModeExhausted { mode, .. } => {
                self.events.emit(TriageEvent::ModeExhausted { mode: *mode });
            }
        }

        self.persist(&session)?;
        Ok(outcome)
    }

    /// Full context for the current item: record excerpt, issues, and all
    /// agent reasoning.
    pub fn details(&self) -> CuratorResult<ItemDetails> {
        let session = self.load_session()?;
        let item_id = session
            .triage
            .current_item
            .ok_or(SessionError::NoCurrentItem)?;
        let item = session
            .item(item_id)
            .ok_or(SessionError::UnknownItem { item_id })?;

        let record_id = item.kind.record_id();
        let record_excerpt = self
            .record_store
            .get(record_id)?
            .map(|record| record.excerpt(240));

        let analysis = session.analyses.iter().find(|a| a.record_id == record_id);
        let agent_reasoning = analysis
            .map(|a| {
                a.agent_analyses
                    .iter()
                    .map(|aa| format!("{}: {}", aa.agent_role, aa.reasoning))
                    .collect()
            })
            .unwrap_or_default();

        Ok(ItemDetails {
            item: item.clone(),
            record_excerpt,
            issues: analysis.map(|a| a.issues.clone()).unwrap_or_default(),
            agent_reasoning,
            consensus_confidence: analysis.map(|a| a.consensus.consensus_confidence),
            quality_score: analysis.map(|a| a.quality_score),
        })
    }

    /// Switch the mode filter and present the first pending item in it.
    #[instrument(skip(self))]
    pub fn mode(&self, new_mode: TriageMode) -> CuratorResult<StepOutcome> {
        let mut session = self.load_session()?;
        let outcome = machine::switch_mode(&mut session, new_mode);
        self.events.emit(TriageEvent::ModeSwitched { mode: new_mode });
        if let StepOutcome::ModeExhausted { mode, .. } = &outcome {
            self.events.emit(TriageEvent::ModeExhausted { mode: *mode });
        }
        self.persist(&session)?;
        Ok(outcome)
    }

    fn queue_status_of(session: &CurationSession) -> QueueStatus {
        QueueStatus {
            deletions: session.queues.deletions.len(),
            connections: session.queues.connections.len(),
            enhancements: session.queues.enhancements.len(),
            patterns: session.queues.patterns.len(),
            viewed_items: Vec::new(),
        }
    }

    /// Queue sizes across all four buckets.
    pub fn queue_status(&self) -> CuratorResult<QueueStatus> {
        Ok(Self::queue_status_of(&self.load_session()?))
    }

    /// Queue sizes plus the items of one named queue.
    pub fn queue_view(&self, name: &str) -> CuratorResult<QueueStatus> {
        let session = self.load_session()?;
        let bucket = session
            .queues
            .bucket_by_name(name)
            .ok_or_else(|| SessionError::UnknownQueue {
                name: name.to_string(),
            })?;

        let mut status = Self::queue_status_of(&session);
        status.viewed_items = bucket
            .iter()
            .filter_map(|id| session.item(*id).cloned())
            .collect();
        Ok(status)
    }

    /// Empty a named queue, resetting its items to pending.
    #[instrument(skip(self))]
    pub fn queue_clear(&self, name: &str) -> CuratorResult<QueueStatus> {
        let mut session = self.load_session()?;
        let reset_items = machine::clear_queue(&mut session, name)?;
        self.events.emit(TriageEvent::QueueCleared {
            queue: name.to_string(),
            reset_items,
        });
        self.persist(&session)?;
        Ok(Self::queue_status_of(&session))
    }

    /// Reset one queued item back to pending.
    #[instrument(skip(self))]
    pub fn unqueue(&self, item_id: u32) -> CuratorResult<QueueStatus> {
        let mut session = self.load_session()?;
        machine::unqueue(&mut session, item_id)?;
        self.events.emit(TriageEvent::ItemUnqueued { item_id });
        self.persist(&session)?;
        Ok(Self::queue_status_of(&session))
    }

    /// Aggregate progress across all modes and queues.
    pub fn status(&self) -> CuratorResult<StatusReport> {
        let session = self.load_session()?;
        let (pending, queued, skipped, rejected) = session.status_counts();
        let pending_per_mode = [
            TriageMode::Delete,
            TriageMode::Connect,
            TriageMode::Enhance,
            TriageMode::ExtractPattern,
        ]
        .into_iter()
        .map(|mode| (mode, session.pending_in_mode(mode)))
        .collect();

        Ok(StatusReport {
            session_id: session.session_id.clone(),
            total_items: session.items.len(),
            pending,
            queued,
            skipped,
            rejected,
            pending_per_mode,
            queues: Self::queue_status_of(&session),
        })
    }

    /// Dry-run plan, or confirmed execution of the action queues.
    ///
    /// A confirmed run that completes without failures discards the session.
    /// Failed deletions stay queued and the session is kept, so the operator
    /// can retry or unqueue them; only the items that succeeded are removed.
    #[instrument(skip(self))]
    pub fn execute(&self, confirm: bool) -> CuratorResult<ExecutionOutcome> {
        let mut session = self.load_session()?;
        let outcome = ActionExecutor::new(&*self.record_store).execute(&session, confirm)?;

        if let ExecutionOutcome::Completed(report) = &outcome {
            if report.errors.is_empty() {
                self.session_store.delete()?;
                self.events.emit(TriageEvent::SessionDiscarded {
                    session_id: session.session_id.clone(),
                });
            } else {
                let failed: Vec<u32> = report.errors.iter().map(|e| e.item_id).collect();
                let executed: Vec<u32> = session
                    .queues
                    .deletions
                    .iter()
                    .copied()
                    .filter(|id| !failed.contains(id))
                    .collect();
                session.queues.deletions.retain(|id| failed.contains(id));
                session.items.retain(|item| !executed.contains(&item.item_id));
                self.persist(&session)?;
            }
        }
        Ok(outcome)
    }
}

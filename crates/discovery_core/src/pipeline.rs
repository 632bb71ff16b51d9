use crate::PipelineId;

/// Progress added by every simulator tick.
pub const PROGRESS_STEP: u8 = 10;
/// Progress at which a job is complete.
pub const PROGRESS_COMPLETE: u8 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStatus {
    InProgress,
    Complete,
}

impl PipelineStatus {
    pub fn label(self) -> &'static str {
        match self {
            PipelineStatus::InProgress => "In Progress",
            PipelineStatus::Complete => "Complete",
        }
    }
}

/// One simulated enrichment task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineJob {
    pub id: PipelineId,
    pub campaign_name: String,
    pub source_name: String,
    pub status: PipelineStatus,
    /// 0..=100
    pub progress: u8,
    pub submitted_at: String,
}

/// Result of applying one tick to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Progress moved but the job is still running.
    Advanced { progress: u8 },
    /// This tick completed the job.
    Completed,
    /// Unknown or already complete job; nothing changed.
    Ignored,
}

/// Pipeline jobs, newest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineBoard {
    jobs: Vec<PipelineJob>,
    next_id: PipelineId,
}

impl Default for PipelineBoard {
    fn default() -> Self {
        Self {
            jobs: Vec::new(),
            next_id: 1,
        }
    }
}

impl PipelineBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Board pre-filled with [`demo_jobs`].
    pub fn with_demo_jobs() -> Self {
        let mut board = Self::new();
        for job in demo_jobs() {
            board.seed(job);
        }
        board
    }

    /// Creates an in-progress job at 0% and prepends it.
    pub fn submit(
        &mut self,
        campaign_name: impl Into<String>,
        source_name: impl Into<String>,
        submitted_at: impl Into<String>,
    ) -> PipelineId {
        let id = self.next_id;
        self.next_id += 1;
        self.jobs.insert(
            0,
            PipelineJob {
                id,
                campaign_name: campaign_name.into(),
                source_name: source_name.into(),
                status: PipelineStatus::InProgress,
                progress: 0,
                submitted_at: submitted_at.into(),
            },
        );
        id
    }

    /// Appends an existing job at the bottom, keeping later ids unique.
    pub fn seed(&mut self, job: PipelineJob) {
        self.next_id = self.next_id.max(job.id + 1);
        self.jobs.push(job);
    }

    /// Applies one simulator tick to job `id`.
    pub fn advance(&mut self, id: PipelineId) -> TickOutcome {
        let Some(job) = self.jobs.iter_mut().find(|job| job.id == id) else {
            return TickOutcome::Ignored;
        };
        if job.status == PipelineStatus::Complete {
            return TickOutcome::Ignored;
        }

        job.progress = job
            .progress
            .saturating_add(PROGRESS_STEP)
            .min(PROGRESS_COMPLETE);
        if job.progress >= PROGRESS_COMPLETE {
            job.status = PipelineStatus::Complete;
            TickOutcome::Completed
        } else {
            TickOutcome::Advanced {
                progress: job.progress,
            }
        }
    }

    pub fn get(&self, id: PipelineId) -> Option<&PipelineJob> {
        self.jobs.iter().find(|job| job.id == id)
    }

    pub fn jobs(&self) -> &[PipelineJob] {
        &self.jobs
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}

/// The two jobs the dashboard shows before anything is submitted.
pub fn demo_jobs() -> Vec<PipelineJob> {
    vec![
        PipelineJob {
            id: 1,
            campaign_name: "Summer Sale 2024".to_string(),
            source_name: "Google Analytics".to_string(),
            status: PipelineStatus::Complete,
            progress: 100,
            submitted_at: "2024-01-15 10:30".to_string(),
        },
        PipelineJob {
            id: 2,
            campaign_name: "Holiday Promo".to_string(),
            source_name: "Facebook Ads".to_string(),
            status: PipelineStatus::InProgress,
            progress: 65,
            submitted_at: "2024-01-15 11:45".to_string(),
        },
    ]
}

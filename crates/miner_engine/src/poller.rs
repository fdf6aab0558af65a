use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use miner_core::{
    map_analysis_error, AnalysisErrorMapper, AnalysisPhase, AnalysisStatusData, AnalysisView,
    DisplayError,
};
use miner_logging::{miner_debug, miner_info, miner_warn};
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::{map_analysis_api_error, AnalysisApi, AnalysisFailureMapper, ApiError, PollSettings};

/// Polls one analysis job at a time. Every `start`, `stop` and `close` bumps
/// the session counter; a response captured under an older session is dropped.
pub struct JobPoller {
    inner: Arc<PollerInner>,
}

struct PendingTimer {
    session: u64,
    handle: JoinHandle<()>,
}

struct PollerInner {
    api: Arc<dyn AnalysisApi>,
    settings: PollSettings,
    map_failure: AnalysisFailureMapper,
    map_status_error: AnalysisErrorMapper,
    session: AtomicU64,
    open: AtomicBool,
    timer: Mutex<Option<PendingTimer>>,
    target: Mutex<Option<String>>,
    view: watch::Sender<AnalysisView>,
}

impl JobPoller {
    pub fn new(api: Arc<dyn AnalysisApi>, settings: PollSettings) -> Self {
        let (view, _) = watch::channel(AnalysisView::default());
        Self {
            inner: Arc::new(PollerInner {
                api,
                settings,
                map_failure: map_analysis_api_error,
                map_status_error: map_analysis_error,
                session: AtomicU64::new(0),
                open: AtomicBool::new(false),
                timer: Mutex::new(None),
                target: Mutex::new(None),
                view,
            }),
        }
    }

    /// Replaces the mapping of failed calls. Only takes effect before the
    /// first `start`, while no timer task shares the poller.
    pub fn with_failure_mapper(mut self, map_failure: AnalysisFailureMapper) -> Self {
        match Arc::get_mut(&mut self.inner) {
            Some(inner) => inner.map_failure = map_failure,
            None => miner_warn!("failure mapper ignored, the poller is already running"),
        }
        self
    }

    /// Replaces the mapping of failed job statuses; same constraint as
    /// `with_failure_mapper`.
    pub fn with_status_error_mapper(mut self, map_status_error: AnalysisErrorMapper) -> Self {
        match Arc::get_mut(&mut self.inner) {
            Some(inner) => inner.map_status_error = map_status_error,
            None => miner_warn!("status error mapper ignored, the poller is already running"),
        }
        self
    }

    pub fn subscribe(&self) -> watch::Receiver<AnalysisView> {
        self.inner.view.subscribe()
    }

    pub fn view(&self) -> AnalysisView {
        self.inner.view.borrow().clone()
    }

    pub fn session(&self) -> u64 {
        self.inner.session.load(Ordering::SeqCst)
    }

    pub fn is_open(&self) -> bool {
        self.inner.open.load(Ordering::SeqCst)
    }

    pub fn has_pending_timer(&self) -> bool {
        self.inner.lock_timer().is_some()
    }

    pub fn selected_target(&self) -> Option<String> {
        self.inner.lock_target().clone()
    }

    /// The analyze action stays disabled while an open panel is loading.
    pub fn is_action_disabled(&self) -> bool {
        self.is_open() && self.inner.view.borrow().phase == AnalysisPhase::Loading
    }

    /// Opens the panel for `target` and submits a new job. Any earlier
    /// session is cancelled first.
    pub async fn start(&self, target: &str, force_refresh: bool) {
        self.inner.start(target, force_refresh).await;
    }

    /// Cancels the session and the pending timer. The view is left as is.
    pub fn stop(&self) {
        self.inner.stop();
    }

    /// Closes the panel; responses still in flight are discarded.
    pub fn close(&self) {
        self.inner.open.store(false, Ordering::SeqCst);
        self.inner.stop();
        miner_debug!("analysis panel closed");
    }

    /// Restarts the last target with a forced refresh.
    pub async fn retry(&self) {
        let target = self.inner.lock_target().clone();
        match target {
            Some(target) => self.inner.start(&target, true).await,
            None => {
                miner_warn!("analysis retry without a selected target");
                self.inner.view.send_modify(|view| view.fail(DisplayError::generic()));
            }
        }
    }
}

impl Drop for JobPoller {
    fn drop(&mut self) {
        self.inner.stop();
    }
}

impl PollerInner {
    fn lock_timer(&self) -> MutexGuard<'_, Option<PendingTimer>> {
        self.timer.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_target(&self) -> MutexGuard<'_, Option<String>> {
        self.target.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn stop(&self) {
        let session = self.session.fetch_add(1, Ordering::SeqCst) + 1;
        self.clear_timer();
        miner_debug!("analysis session {} cancelled", session - 1);
    }

    fn clear_timer(&self) {
        if let Some(pending) = self.lock_timer().take() {
            pending.handle.abort();
        }
    }

    /// Clears the slot only if it still belongs to `session`.
    fn clear_timer_for(&self, session: u64) {
        let mut slot = self.lock_timer();
        if slot.as_ref().is_some_and(|pending| pending.session == session) {
            if let Some(pending) = slot.take() {
                pending.handle.abort();
            }
        }
    }

    fn is_current(&self, session: u64) -> bool {
        self.open.load(Ordering::SeqCst) && self.session.load(Ordering::SeqCst) == session
    }

    async fn start(self: &Arc<Self>, target: &str, force_refresh: bool) {
        self.stop();
        *self.lock_target() = Some(target.to_string());
        self.open.store(true, Ordering::SeqCst);
        let session = self.session.load(Ordering::SeqCst);
        self.view.send_modify(AnalysisView::begin);
        miner_info!("analysis requested for {} (session {})", target, session);

        let created = self.api.create_job(target, force_refresh).await;
        self.handle_response(created, None, session);
    }

    /// Applies a create or poll response if its session is still current and
    /// schedules the next poll while the job is unfinished.
    fn handle_response(
        self: &Arc<Self>,
        response: Result<AnalysisStatusData, ApiError>,
        polled_job: Option<&str>,
        session: u64,
    ) {
        match response {
            Ok(data) => {
                let map_error = self.map_status_error;
                let applied = self.view.send_if_modified(|view| {
                    if !self.is_current(session) {
                        return false;
                    }
                    view.apply_status(&data, map_error);
                    true
                });
                if !applied {
                    miner_debug!("discarded status for stale session {}", session);
                    return;
                }
                if data.needs_polling() {
                    let job_id = polled_job.unwrap_or(&data.job_id).to_string();
                    self.schedule(job_id, session);
                } else {
                    miner_info!("analysis job {} settled as {:?}", data.job_id, data.status);
                    self.clear_timer_for(session);
                }
            }
            Err(err) => {
                let display = (self.map_failure)(&err);
                let applied = self.view.send_if_modified(|view| {
                    if !self.is_current(session) {
                        return false;
                    }
                    view.fail(display);
                    true
                });
                if applied {
                    miner_warn!("analysis failed: {}", err);
                    self.clear_timer_for(session);
                } else {
                    miner_debug!("discarded failure for stale session {}", session);
                }
            }
        }
    }

    fn schedule(self: &Arc<Self>, job_id: String, session: u64) {
        let mut slot = self.lock_timer();
        // Checked under the lock: `stop` bumps the session before it clears
        // the slot, so a newer session's timer is never replaced.
        if !self.is_current(session) {
            miner_debug!("not scheduling a poll for stale session {}", session);
            return;
        }
        if let Some(previous) = slot.take() {
            previous.handle.abort();
        }
        let inner = Arc::clone(self);
        let interval = self.settings.interval;
        // The slot stays locked until the handle is stored, so the task cannot
        // observe the slot before its own entry is in place.
        let handle = tokio::spawn(async move {
            tokio::time::sleep(interval).await;
            inner.timer_fired(session);
            inner.poll(&job_id, session).await;
        });
        *slot = Some(PendingTimer { session, handle });
    }

    /// Detaches the firing timer's own handle so clearing the slot later
    /// cannot abort the poll it is running.
    fn timer_fired(&self, session: u64) {
        let mut slot = self.lock_timer();
        if slot.as_ref().is_some_and(|pending| pending.session == session) {
            slot.take();
        }
    }

    async fn poll(self: &Arc<Self>, job_id: &str, session: u64) {
        if !self.is_current(session) {
            return;
        }
        let polled = self.api.get_job_status(job_id).await;
        self.handle_response(polled, Some(job_id), session);
    }
}

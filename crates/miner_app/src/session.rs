use std::path::PathBuf;
use std::sync::Arc;

use miner_core::{apply_core_preset, AnalysisPhase, AttentionTracker, SearchFilters, SearchQuery};
use miner_engine::{
    JobPoller, Location, MemoryHistory, QuerySyncController, ReqwestApiClient, RequestExecutor,
    SearchController,
};
use miner_logging::{miner_info, miner_warn};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::command::{self, Command, HELP};
use crate::config::AppConfig;
use crate::render::{describe_analysis, describe_search};

const SHARE_ORIGIN: &str = "http://localhost:5173";
const SHARE_PATH: &str = "/";

/// The interactive shell: one search surface, one analysis panel and the
/// location they are mirrored into.
pub struct Session {
    search: SearchController,
    poller: JobPoller,
    sync: QuerySyncController<MemoryHistory>,
    filters: SearchFilters,
    attention: AttentionTracker,
    config: AppConfig,
    config_path: PathBuf,
}

impl Session {
    pub fn new(
        client: Arc<ReqwestApiClient>,
        config: AppConfig,
        config_path: PathBuf,
        initial_location: &str,
    ) -> Self {
        let executor = RequestExecutor::new(client.clone(), config.executor_settings());
        let history = MemoryHistory::new(SHARE_ORIGIN, SHARE_PATH, initial_location);
        let mut sync = QuerySyncController::new(history, config.auto_search_on_navigation);
        if initial_location.trim().is_empty() {
            sync.set_view_mode(config.view_mode);
        }
        Self {
            search: SearchController::new(executor, Vec::new()),
            poller: JobPoller::new(client, config.poll_settings()),
            sync,
            filters: SearchFilters::default(),
            attention: AttentionTracker::new(),
            config,
            config_path,
        }
    }

    pub async fn run(mut self) -> anyhow::Result<()> {
        let _progress = self.spawn_analysis_printer();
        println!("{HELP}");
        if !self.sync.query().is_blank() {
            self.run_search(self.sync.query().clone()).await;
        }

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Some(line) = lines.next_line().await? {
            match command::parse(&line) {
                Ok(Command::Quit) => break,
                Ok(command) => self.handle(command).await,
                Err(message) => println!("{message}"),
            }
        }

        self.poller.close();
        miner_info!("session finished");
        Ok(())
    }

    async fn handle(&mut self, command: Command) {
        match command {
            Command::Search(keyword) => {
                let query = SearchQuery {
                    keyword,
                    ..self.sync.query().clone()
                };
                self.edit_and_search(query).await;
            }
            Command::Channel(channel) => {
                let query = SearchQuery {
                    channel,
                    ..self.sync.query().clone()
                };
                self.edit_and_search(query).await;
            }
            Command::Topic(topic) => {
                let query = SearchQuery {
                    topic,
                    ..self.sync.query().clone()
                };
                self.edit_and_search(query).await;
            }
            Command::Limit(result_limit) => {
                let query = SearchQuery {
                    result_limit,
                    ..self.sync.query().clone()
                };
                self.edit_and_search(query).await;
            }
            Command::View(view_mode) => {
                self.sync.set_view_mode(view_mode);
                self.config.view_mode = view_mode;
                self.save_config();
                self.print_search();
            }
            Command::Sort(sort) => {
                self.filters.sort = sort;
                self.rerun().await;
            }
            Command::Period(period) => {
                self.filters.period = period;
                self.rerun().await;
            }
            Command::Preset(preset) => {
                self.filters = apply_core_preset(&self.filters, preset);
                self.rerun().await;
            }
            Command::Open(search) => {
                self.sync.location_mut().push(&search);
                self.navigated().await;
            }
            Command::Back => {
                if self.sync.location_mut().back() {
                    self.navigated().await;
                } else {
                    println!("No earlier entry.");
                }
            }
            Command::Forward => {
                if self.sync.location_mut().forward() {
                    self.navigated().await;
                } else {
                    println!("No later entry.");
                }
            }
            Command::Share => println!("{}", self.sync.location().share_url()),
            Command::Analyze(video_id) => {
                if self.poller.is_action_disabled() {
                    println!("An analysis is already running; close it first.");
                    return;
                }
                self.poller.start(&video_id, false).await;
            }
            Command::Retry => {
                if self.poller.view().phase == AnalysisPhase::Error {
                    self.poller.retry().await;
                } else if self.search.view().retryable {
                    self.rerun().await;
                }
            }
            Command::Close => self.poller.close(),
            Command::Reset => {
                self.search.reset_search();
                self.print_search();
            }
            Command::Keys(keys) => {
                println!("Using {} API key(s).", keys.len());
                self.config.api_keys = keys;
                self.save_config();
            }
            Command::AutoSearch(enabled) => {
                self.sync.set_auto_search(enabled);
                self.config.auto_search_on_navigation = enabled;
                self.save_config();
            }
            Command::Status => {
                println!("location: {:?}", self.sync.location().search());
                self.print_search();
                if self.poller.is_open() {
                    println!("{}", describe_analysis(&self.poller.view()));
                }
            }
            Command::Help => println!("{HELP}"),
            Command::Quit => {}
        }
    }

    async fn edit_and_search(&mut self, query: SearchQuery) {
        self.sync.set_query(query.clone());
        self.run_search(query).await;
    }

    async fn rerun(&mut self) {
        self.run_search(self.sync.query().clone()).await;
    }

    async fn navigated(&mut self) {
        match self.sync.handle_navigation() {
            Some(query) => {
                if let Some(notice) = self.sync.notice() {
                    println!("{}", notice.message());
                }
                self.run_search(query).await;
            }
            None => self.print_search(),
        }
    }

    async fn run_search(&mut self, query: SearchQuery) {
        if query.is_blank() {
            println!("Enter a keyword or a channel name to search.");
            return;
        }
        self.search
            .run_search(&query, &self.filters, &self.config.api_keys)
            .await;
        self.print_search();
        if self.attention.observe(self.search.view().attention_snapshot()) {
            println!("> Check the search input before trying again.");
        }
    }

    fn print_search(&self) {
        println!("{}", describe_search(&self.search.view(), self.sync.view_mode()));
    }

    fn save_config(&self) {
        if let Err(err) = self.config.save(&self.config_path) {
            miner_warn!("Failed to save preferences to {:?}: {}", self.config_path, err);
        }
    }

    /// Prints analysis progress as it arrives from the poller.
    fn spawn_analysis_printer(&self) -> tokio::task::JoinHandle<()> {
        let mut rx = self.poller.subscribe();
        tokio::spawn(async move {
            while rx.changed().await.is_ok() {
                let text = describe_analysis(&rx.borrow_and_update());
                println!("{text}");
            }
        })
    }
}

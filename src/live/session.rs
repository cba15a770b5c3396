use std::{sync::Arc, time::Duration};

use tokio::sync::mpsc;

use crate::{
    error::ApiResult,
    models::{MoviePage, RecommendationSet},
    screens::{home_link, MovieBrowser, RecommendationsPanel},
    services::backend::{MovieBackend, RecommendationQuery},
};

use super::{
    debounce::Debouncer,
    messages::{ClientMessage, ServerMessage},
};

/// Tunables of a live session
#[derive(Debug, Clone, Copy)]
pub struct SessionSettings {
    pub page_size: u32,
    pub recommendation_count: u32,
    pub search_debounce: Duration,
}

/// Where the browser tab was when it connected
#[derive(Debug, Clone, Default)]
pub struct SessionStart {
    pub page: u32,
    pub search: String,
    pub selected: Option<u64>,
}

/// A finished backend call, tagged with the generation it was issued under
#[derive(Debug)]
enum Loaded {
    Movies {
        generation: u64,
        result: ApiResult<MoviePage>,
    },
    Recommendations {
        generation: u64,
        result: ApiResult<RecommendationSet>,
    },
}

/// Interactive state of one home screen tab.
///
/// The session consumes [`ClientMessage`]s, debounces search input, issues
/// backend calls on spawned tasks and pushes re-rendered fragments back as
/// [`ServerMessage`]s. Each request kind carries a generation counter and a
/// response is only applied if no newer request of that kind was issued.
pub struct BrowseSession {
    backend: Arc<dyn MovieBackend>,
    browser: MovieBrowser,
    panel: RecommendationsPanel,
    debouncer: Debouncer<String>,
    movies_generation: u64,
    recommendations_generation: u64,
    /// Page requested before the first movie page arrived, when page bounds
    /// are still unknown
    deferred_page: Option<u32>,
    first_page_loaded: bool,
}

impl BrowseSession {
    pub fn new(
        backend: Arc<dyn MovieBackend>,
        settings: SessionSettings,
        start: SessionStart,
    ) -> Self {
        Self {
            backend,
            browser: MovieBrowser::restore(
                settings.page_size,
                start.page,
                &start.search,
                start.selected,
            ),
            panel: RecommendationsPanel::new(settings.recommendation_count),
            debouncer: Debouncer::new(settings.search_debounce),
            movies_generation: 0,
            recommendations_generation: 0,
            deferred_page: None,
            first_page_loaded: false,
        }
    }

    /// Drives the session until the client goes away
    pub async fn run(
        mut self,
        mut inbox: mpsc::Receiver<ClientMessage>,
        outbox: mpsc::Sender<ServerMessage>,
    ) {
        let (loaded_tx, mut loaded_rx) = mpsc::channel::<Loaded>(16);

        // The page was rendered server-side; reload silently so that page
        // bounds and selection lookups work from the first interaction.
        self.start_movies_load(&loaded_tx);
        if let Some(query) = self.panel.select(self.browser.selected(), None) {
            self.start_recommendations_load(query, &loaded_tx);
        }

        loop {
            let delivered = tokio::select! {
                msg = inbox.recv() => match msg {
                    Some(msg) => self.handle_message(msg, &loaded_tx, &outbox).await,
                    None => break,
                },
                text = self.debouncer.settled() => {
                    self.handle_search(text, &loaded_tx, &outbox).await
                }
                Some(loaded) = loaded_rx.recv() => self.apply(loaded, &loaded_tx, &outbox).await,
            };

            if !delivered {
                tracing::debug!("Live session client went away");
                break;
            }
        }
    }

    async fn handle_message(
        &mut self,
        msg: ClientMessage,
        loaded_tx: &mpsc::Sender<Loaded>,
        outbox: &mpsc::Sender<ServerMessage>,
    ) -> bool {
        match msg {
            ClientMessage::Search { text } => {
                self.debouncer.push(text);
                true
            }
            ClientMessage::Page { page } => {
                if !self.first_page_loaded {
                    tracing::debug!(page, "Deferring page change until bounds are known");
                    self.deferred_page = Some(page);
                    return true;
                }
                if !self.browser.set_page(page) {
                    tracing::debug!(
                        page,
                        total_pages = self.browser.total_pages(),
                        "Ignoring page change"
                    );
                    return true;
                }
                self.start_movies_load(loaded_tx);
                self.send_movies(outbox).await
            }
            ClientMessage::Select { movie_id } => {
                let known = self
                    .browser
                    .find_movie(movie_id)
                    .or_else(|| self.panel.find_movie(movie_id))
                    .cloned();
                self.browser.select(Some(movie_id));
                if let Some(query) = self.panel.select(Some(movie_id), known.as_ref()) {
                    self.start_recommendations_load(query, loaded_tx);
                }
                self.send_movies(outbox).await && self.send_recommendations(outbox).await
            }
            ClientMessage::Clear => {
                self.browser.select(None);
                self.panel.select(None, None);
                self.recommendations_generation += 1;
                self.send_movies(outbox).await && self.send_recommendations(outbox).await
            }
        }
    }

    async fn handle_search(
        &mut self,
        text: String,
        loaded_tx: &mpsc::Sender<Loaded>,
        outbox: &mpsc::Sender<ServerMessage>,
    ) -> bool {
        if !self.browser.apply_search(&text) {
            return true;
        }
        tracing::debug!(search = %self.browser.search(), "Search settled");
        self.start_movies_load(loaded_tx);
        self.send_movies(outbox).await
    }

    fn start_movies_load(&mut self, loaded_tx: &mpsc::Sender<Loaded>) {
        self.movies_generation += 1;
        let generation = self.movies_generation;
        let query = self.browser.begin_load();
        let backend = self.backend.clone();
        let loaded_tx = loaded_tx.clone();

        tokio::spawn(async move {
            let result = backend.list_movies(query).await;
            let _ = loaded_tx.send(Loaded::Movies { generation, result }).await;
        });
    }

    fn start_recommendations_load(
        &mut self,
        query: RecommendationQuery,
        loaded_tx: &mpsc::Sender<Loaded>,
    ) {
        self.recommendations_generation += 1;
        let generation = self.recommendations_generation;
        let backend = self.backend.clone();
        let loaded_tx = loaded_tx.clone();

        tokio::spawn(async move {
            let result = backend.recommendations(query).await;
            let _ = loaded_tx
                .send(Loaded::Recommendations { generation, result })
                .await;
        });
    }

    async fn apply(
        &mut self,
        loaded: Loaded,
        loaded_tx: &mpsc::Sender<Loaded>,
        outbox: &mpsc::Sender<ServerMessage>,
    ) -> bool {
        match loaded {
            Loaded::Movies { generation, result } => {
                if generation != self.movies_generation {
                    tracing::debug!(
                        generation,
                        current = self.movies_generation,
                        "Dropping superseded movie page"
                    );
                    return true;
                }
                self.browser.finish_load(result);
                self.first_page_loaded = true;
                if !self.send_movies(outbox).await {
                    return false;
                }

                match self.deferred_page.take() {
                    Some(page) if self.browser.set_page(page) => {
                        self.start_movies_load(loaded_tx);
                        self.send_movies(outbox).await
                    }
                    _ => true,
                }
            }
            Loaded::Recommendations { generation, result } => {
                if generation != self.recommendations_generation {
                    tracing::debug!(
                        generation,
                        current = self.recommendations_generation,
                        "Dropping superseded recommendations"
                    );
                    return true;
                }
                self.panel.finish_load(result);
                self.send_recommendations(outbox).await
            }
        }
    }

    async fn send_movies(&self, outbox: &mpsc::Sender<ServerMessage>) -> bool {
        let html = self.browser.render();
        outbox.send(ServerMessage::Movies { html }).await.is_ok()
    }

    async fn send_recommendations(&self, outbox: &mpsc::Sender<ServerMessage>) -> bool {
        let page = self.browser.page();
        let search = self.browser.search();
        let html = self.panel.render(|id| home_link(page, search, Some(id)));
        outbox
            .send(ServerMessage::Recommendations { html })
            .await
            .is_ok()
    }
}

use crate::{
    conf::Conf,
    db,
    static_routes::*,
    store::{ArticleRepository, CozoStore, HabitRepository},
    trace::request_trace_layer,
    views::Views,
};

use anyhow::Context;
use axum::{
    routing::{get, post},
    Router,
};
use axum_sessions::{async_session::CookieStore, SessionLayer};
use secrecy::ExposeSecret;
use std::{future::Future, sync::Arc};

#[derive(Clone)]
pub struct AppState {
    pub articles: Arc<dyn ArticleRepository>,
    pub habits: Arc<dyn HabitRepository>,
    pub views: Arc<Views>,
    pub conf: Conf,
}

pub fn router(state: AppState) -> Router {
    use crate::routes::*;

    // the whole session lives in the signed cookie
    let session_layer = SessionLayer::new(
        CookieStore::new(),
        state.conf.session_secret.expose_secret().as_bytes(),
    )
    .with_cookie_name("habitboard.sid")
    .with_secure(state.conf.env.prod());

    Router::new()
        .route(HOME, get(home))
        .route(HABIT, get(habit_page).post(new_habit))
        .route(HABIT_COMPLETE, get(complete_habit))
        .route(ADMIN, get(admin_page).post(login))
        .route(ADMIN_ADD_ARTICLE, post(add_article))
        .route(ADMIN_ADD_HABIT, post(add_habit))
        .route(LOGOUT, get(logout))
        .route(HEALTH_CHECK, get(health_check))
        .layer(session_layer)
        .layer(request_trace_layer())
        .with_state(state)
}

pub struct Application {
    listener: std::net::TcpListener,
    state: AppState,
    host: String,
    port: u16,
}

impl Application {
    pub fn build(conf: &Conf) -> anyhow::Result<Self> {
        conf.validate()?;

        let db = db::start_db(&conf.db).context("Failed to start the database")?;
        let store = Arc::new(CozoStore::new(db));
        let views = Arc::new(Views::new().context("Failed to compile templates")?);

        let address = format!("{}:{}", conf.host, conf.port);
        let listener = std::net::TcpListener::bind(&address)
            .with_context(|| format!("Failed to bind {address}"))?;
        let port = listener.local_addr()?.port();
        tracing::info!("Listening on http://{}:{}", conf.host, port);

        let state = AppState {
            articles: store.clone(),
            habits: store,
            views,
            conf: conf.clone(),
        };

        Ok(Self {
            listener,
            state,
            host: conf.host.clone(),
            port,
        })
    }

    /// Serves requests until `shutdown` resolves.
    pub async fn server(self, shutdown: impl Future<Output = ()> + Send + 'static) -> hyper::Result<()> {
        let app = router(self.state);

        axum::Server::from_tcp(self.listener)?
            .serve(app.into_make_service())
            .with_graceful_shutdown(shutdown)
            .await
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn articles(&self) -> Arc<dyn ArticleRepository> {
        self.state.articles.clone()
    }

    pub fn habits(&self) -> Arc<dyn HabitRepository> {
        self.state.habits.clone()
    }
}

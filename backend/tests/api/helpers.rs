use habitboard::conf::{Conf, Env, EnvConf};
use habitboard::startup::Application;
use habitboard::static_routes;
use habitboard::store::{ArticleRepository, HabitRepository};
use habitboard::trace::TracingSubscriber;
use hyper::StatusCode;
use once_cell::sync::Lazy;
use reqwest::{RequestBuilder, Response};
use secrecy::SecretString;
use std::sync::Arc;

pub const ADMIN_PASSWORD: &str = "adminpass";

static TRACING: Lazy<()> = Lazy::new(|| {
    let subscriber = TracingSubscriber::new().name("test");

    if std::env::var("TEST_LOG").is_ok() {
        subscriber.set_global_default(std::io::stdout);
    } else {
        subscriber.set_global_default(std::io::sink);
    };
});

pub async fn spawn_app() -> TestApp {
    Lazy::force(&TRACING);

    let mut env_conf = EnvConf::test_default();
    env_conf.session_secret = SecretString::new(hex::encode([7_u8; 64]));
    env_conf.admin_password = SecretString::new(ADMIN_PASSWORD.into());

    let conf = Conf::new(Env::Local, env_conf);

    let application = Application::build(&conf).expect("Failed to build application.");

    let address = format!("http://{}:{}", application.host(), application.port());
    let articles = application.articles();
    let habits = application.habits();

    let _ = tokio::spawn(application.server(std::future::pending()));

    let api_client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .cookie_store(true)
        .build()
        .unwrap();

    TestApp {
        address,
        api_client,
        articles,
        habits,
    }
}

pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub articles: Arc<dyn ArticleRepository>,
    pub habits: Arc<dyn HabitRepository>,
}

impl TestApp {
    pub fn get(&self, path: impl AsRef<str>) -> RequestBuilder {
        self.api_client
            .get(format!("{}{}", self.address, path.as_ref()))
    }

    pub fn post(&self, path: impl AsRef<str>) -> RequestBuilder {
        self.api_client
            .post(format!("{}{}", self.address, path.as_ref()))
    }

    pub async fn get_home_html(&self) -> String {
        self.get(static_routes::HOME)
            .send()
            .await
            .expect("Failed to execute request.")
            .text()
            .await
            .unwrap()
    }

    pub async fn get_habit_page(&self) -> Response {
        self.get(static_routes::HABIT)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_habit<Body>(&self, body: &Body) -> Response
    where
        Body: serde::Serialize + ?Sized,
    {
        self.post(static_routes::HABIT)
            .form(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn complete_habit(&self, id: i64) -> Response {
        self.get(static_routes::habit_complete(id))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_admin(&self) -> Response {
        self.get(static_routes::ADMIN)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_admin_html(&self) -> String {
        self.get_admin().await.text().await.unwrap()
    }

    pub async fn post_login(&self, password: &str) -> Response {
        self.post(static_routes::ADMIN)
            .form(&[("password", password)])
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn login(&self) {
        let response = self.post_login(ADMIN_PASSWORD).await;
        assert_is_redirect_to(&response, static_routes::ADMIN);
    }

    pub async fn post_add_article<Body>(&self, body: &Body) -> Response
    where
        Body: serde::Serialize + ?Sized,
    {
        self.post(static_routes::ADMIN_ADD_ARTICLE)
            .form(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_add_habit<Body>(&self, body: &Body) -> Response
    where
        Body: serde::Serialize + ?Sized,
    {
        self.post(static_routes::ADMIN_ADD_HABIT)
            .form(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_logout(&self) -> Response {
        self.get(static_routes::LOGOUT)
            .send()
            .await
            .expect("Failed to execute request.")
    }
}

pub fn assert_is_redirect_to(response: &Response, location: &str) {
    assert_eq!(StatusCode::SEE_OTHER, response.status());
    assert_eq!(response.headers()["Location"], location);
}

use crate::helpers::{assert_is_redirect_to, spawn_app, ADMIN_PASSWORD};
use habitboard::db::Order;
use habitboard::store::{ArticleRepository, HabitRepository};
use habitboard::static_routes;
use hyper::StatusCode;

static INCORRECT_PASSWORD: &str = "incorrect password";

#[tokio::test]
async fn anonymous_admin_page_shows_login_form() {
    let app = spawn_app().await;

    let response = app.get_admin().await;

    assert_eq!(StatusCode::OK, response.status());
    let html = response.text().await.unwrap();
    assert!(html.contains(r#"name="password""#));
    assert!(!html.contains(INCORRECT_PASSWORD));
    assert!(!html.contains("Admin dashboard"));
}

#[tokio::test]
async fn redirect_to_admin_dashboard_after_login_success() {
    let app = spawn_app().await;

    // Act - Part 1 - Login
    let response = app.post_login(ADMIN_PASSWORD).await;
    assert_is_redirect_to(&response, static_routes::ADMIN);

    // Act - Part 2 - Follow the redirect
    let html_page = app.get_admin_html().await;
    assert!(html_page.contains("Admin dashboard"));

    // Act - Part 3 - Posting the form again keeps the dashboard
    let response = app.post_login(ADMIN_PASSWORD).await;
    assert_eq!(StatusCode::OK, response.status());
    assert!(response.text().await.unwrap().contains("Admin dashboard"));
}

#[tokio::test]
async fn wrong_password_shows_error_and_keeps_session_anonymous() {
    let app = spawn_app().await;

    let response = app.post_login("wrong").await;
    assert_eq!(StatusCode::OK, response.status());
    let html = response.text().await.unwrap();
    assert!(html.contains(INCORRECT_PASSWORD));

    let html = app.get_admin_html().await;
    assert!(!html.contains("Admin dashboard"));
    assert!(!html.contains(INCORRECT_PASSWORD));
}

#[tokio::test]
async fn missing_password_is_a_failed_login() {
    let app = spawn_app().await;

    let response = app
        .post(static_routes::ADMIN)
        .form(&[("user", "admin")])
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(StatusCode::OK, response.status());
    assert!(response.text().await.unwrap().contains(INCORRECT_PASSWORD));
}

#[tokio::test]
async fn dashboard_lists_habits_and_articles_newest_first() {
    let app = spawn_app().await;
    app.login().await;

    for name in ["Read", "Walk"] {
        app.post_add_habit(&[("name", name)]).await;
    }
    for title in ["Old news", "Fresh news"] {
        app.post_add_article(&[("title", title), ("content", "body")])
            .await;
    }

    let html = app.get_admin_html().await;

    assert!(html.find("Walk").unwrap() < html.find("Read").unwrap());
    assert!(html.find("Fresh news").unwrap() < html.find("Old news").unwrap());
}

#[tokio::test]
async fn anonymous_users_cannot_add_articles() {
    let app = spawn_app().await;

    let response = app
        .post_add_article(&[("title", "Nudges"), ("content", "Small pushes")])
        .await;

    assert_is_redirect_to(&response, static_routes::ADMIN);
    assert!(app.articles.list_all(Order::Stored).await.unwrap().is_empty());

    let html = app.get_admin_html().await;
    assert!(html.contains(r#"name="password""#));
}

#[tokio::test]
async fn anonymous_users_cannot_add_habits() {
    let app = spawn_app().await;

    let response = app.post_add_habit(&[("name", "Read")]).await;

    assert_is_redirect_to(&response, static_routes::ADMIN);
    assert!(app.habits.list_all(Order::Stored).await.unwrap().is_empty());
}

#[tokio::test]
async fn admin_adds_an_article() {
    let app = spawn_app().await;
    app.login().await;

    let response = app
        .post_add_article(&[("title", "Nudges"), ("content", "Small pushes")])
        .await;

    assert_is_redirect_to(&response, static_routes::ADMIN);
    let articles = app.articles.list_all(Order::Stored).await.unwrap();
    assert_eq!(articles.len(), 1);
    assert_eq!(articles[0].title, "Nudges");
    assert_eq!(articles[0].content, "Small pushes");
    assert!(app.get_home_html().await.contains("Nudges"));
}

#[tokio::test]
async fn incomplete_articles_are_skipped() {
    let app = spawn_app().await;
    app.login().await;

    let test_cases: [&[(&str, &str)]; 3] = [
        &[("title", "Nudges")],
        &[("content", "Small pushes")],
        &[("title", ""), ("content", "Small pushes")],
    ];

    for body in test_cases {
        let response = app.post_add_article(body).await;
        assert_is_redirect_to(&response, static_routes::ADMIN);
    }

    assert!(app.articles.list_all(Order::Stored).await.unwrap().is_empty());
}

#[tokio::test]
async fn admin_adds_a_habit() {
    let app = spawn_app().await;
    app.login().await;

    let response = app
        .post_add_habit(&[("name", "Meditate"), ("description", "")])
        .await;
    assert_is_redirect_to(&response, static_routes::ADMIN);

    let response = app.post_add_habit(&[("description", "no name")]).await;
    assert_is_redirect_to(&response, static_routes::ADMIN);

    let habits = app.habits.list_all(Order::Stored).await.unwrap();
    assert_eq!(habits.len(), 1);
    assert_eq!(habits[0].name, "Meditate");
    assert_eq!(habits[0].description, None);
    assert!(!habits[0].completed);
}

#[tokio::test]
async fn logout_clears_the_session() {
    let app = spawn_app().await;
    app.login().await;

    let response = app.get_logout().await;
    assert_is_redirect_to(&response, static_routes::HOME);

    let html = app.get_admin_html().await;
    assert!(!html.contains("Admin dashboard"));

    let response = app.post_add_habit(&[("name", "Read")]).await;
    assert_is_redirect_to(&response, static_routes::ADMIN);
    assert!(app.habits.list_all(Order::Stored).await.unwrap().is_empty());
}

#[tokio::test]
async fn logout_without_session_still_redirects() {
    let app = spawn_app().await;

    let response = app.get_logout().await;

    assert_is_redirect_to(&response, static_routes::HOME);
}

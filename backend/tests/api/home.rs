use crate::helpers::spawn_app;
use habitboard::db::Order;
use habitboard::store::ArticleRepository;
use interfacing::NewArticle;

#[tokio::test]
async fn home_without_articles() {
    let app = spawn_app().await;

    let html = app.get_home_html().await;

    assert!(html.contains("No articles yet."));
}

#[tokio::test]
async fn home_lists_articles_newest_first() {
    let app = spawn_app().await;
    for title in ["Habit loops", "Tiny habits", "Nudge theory"] {
        app.articles
            .create(NewArticle {
                title: title.into(),
                content: format!("About {title}"),
            })
            .await
            .unwrap();
    }

    let html = app.get_home_html().await;

    let positions: Vec<_> = ["Nudge theory", "Tiny habits", "Habit loops"]
        .iter()
        .map(|title| html.find(title).expect("article is listed"))
        .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    assert_eq!(app.articles.list_all(Order::Stored).await.unwrap().len(), 3);
}

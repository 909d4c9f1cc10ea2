// tests/publisher_service_unit.rs
use serde_json::json;

mod support;

use newsin::application::commands::publishers::RegisterPublisherCommand;
use support::SeedArticle;

#[tokio::test]
async fn duplicate_publisher_name_is_a_soft_no_op() {
    let ctx = support::build_test_context();

    let first = ctx
        .services
        .publisher_commands
        .register_publisher(RegisterPublisherCommand {
            name: "Daily Planet".into(),
            metadata: json!({"logo": "https://example.com/dp.png"}),
        })
        .await
        .unwrap();
    assert!(first.inserted_id.is_some());

    let second = ctx
        .services
        .publisher_commands
        .register_publisher(RegisterPublisherCommand {
            name: "Daily Planet".into(),
            metadata: json!({"logo": "https://example.com/other.png"}),
        })
        .await
        .unwrap();
    assert!(second.inserted_id.is_none());
    assert_eq!(second.message.as_deref(), Some("publisher already inserted"));
    assert_eq!(ctx.store.publisher_count(), 1);
}

#[tokio::test]
async fn listing_returns_every_publisher_with_metadata() {
    let ctx = support::build_test_context();
    for name in ["Daily Planet", "The Gazette"] {
        ctx.services
            .publisher_commands
            .register_publisher(RegisterPublisherCommand {
                name: name.into(),
                metadata: json!({"logo": format!("https://example.com/{name}.png")}),
            })
            .await
            .unwrap();
    }

    let publishers = ctx
        .services
        .publisher_queries
        .list_publishers()
        .await
        .unwrap();
    assert_eq!(publishers.len(), 2);
    assert!(publishers.iter().all(|p| p.metadata.get("logo").is_some()));
}

#[tokio::test]
async fn publication_stats_join_articles_by_name_value() {
    let ctx = support::build_test_context();
    for name in ["Daily Planet", "The Gazette"] {
        ctx.services
            .publisher_commands
            .register_publisher(RegisterPublisherCommand {
                name: name.into(),
                metadata: json!({}),
            })
            .await
            .unwrap();
    }
    for _ in 0..3 {
        ctx.store.seed_article(SeedArticle {
            publisher: "Daily Planet".into(),
            ..SeedArticle::default()
        });
    }
    // articles naming an unregistered publisher count for nobody
    ctx.store.seed_article(SeedArticle {
        publisher: "Unregistered Weekly".into(),
        ..SeedArticle::default()
    });

    let stats = ctx
        .services
        .publisher_queries
        .publication_stats()
        .await
        .unwrap();
    assert_eq!(stats.len(), 2);
    assert_eq!(stats[0].publication, "Daily Planet");
    assert_eq!(stats[0].article_count, 3);
    assert_eq!(stats[1].publication, "The Gazette");
    assert_eq!(stats[1].article_count, 0);
}

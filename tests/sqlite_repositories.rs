// tests/sqlite_repositories.rs
use quill_cms::application::{
    ApplicationError,
    commands::{
        ImageChange,
        blog::{SavePageCommand, SavePostCommand, SaveTermCommand},
    },
    queries::{admin::AdminListQuery, blog::PublicPostsQuery},
};
use quill_cms::domain::blog::{ContentKind, ListFilter, PostRepository, Slug};
use quill_cms::infrastructure::repositories::SqlitePostRepository;

mod support;

fn term(name: &str) -> SaveTermCommand {
    SaveTermCommand {
        name: name.into(),
        slug: None,
    }
}

fn post(title: &str, published: bool, category: Option<i64>, tags: Vec<i64>) -> SavePostCommand {
    SavePostCommand {
        title: title.into(),
        slug: None,
        excerpt: format!("About {title}"),
        content: format!("{title} body"),
        is_published: published,
        cover_in_post_content: true,
        category_id: category,
        tag_ids: tags,
        cover: ImageChange::Keep,
    }
}

#[tokio::test]
async fn deleting_category_detaches_posts() {
    let app = support::default_app().await;
    let commands = &app.services.blog_commands;

    let category = commands.create_category(term("Travel")).await.unwrap();
    let created = commands
        .create_post(None, post("Lisbon", true, Some(category.id), vec![]))
        .await
        .unwrap();
    assert_eq!(created.category_id, Some(category.id));

    commands.delete_category(category.id).await.unwrap();

    let reloaded = app.services.blog_queries.get_post(created.id).await.unwrap();
    assert_eq!(reloaded.category_id, None);
}

#[tokio::test]
async fn deleting_tag_removes_it_from_posts() {
    let app = support::default_app().await;
    let commands = &app.services.blog_commands;

    let rust = commands.create_tag(term("Rust")).await.unwrap();
    let sql = commands.create_tag(term("SQL")).await.unwrap();
    let created = commands
        .create_post(None, post("Both", true, None, vec![sql.id, rust.id, rust.id]))
        .await
        .unwrap();
    let mut expected = vec![rust.id, sql.id];
    expected.sort_unstable();
    assert_eq!(created.tag_ids, expected);

    commands.delete_tag(rust.id).await.unwrap();

    let reloaded = app.services.blog_queries.get_post(created.id).await.unwrap();
    assert_eq!(reloaded.tag_ids, vec![sql.id]);
}

#[tokio::test]
async fn post_with_unknown_category_is_rejected() {
    let app = support::default_app().await;

    let err = app
        .services
        .blog_commands
        .create_post(None, post("Orphan", true, Some(404), vec![]))
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Validation(_)), "{err:?}");
}

#[tokio::test]
async fn repository_finds_posts_by_slug_with_tags() {
    let app = support::default_app().await;
    let commands = &app.services.blog_commands;

    let tag = commands.create_tag(term("Rust")).await.unwrap();
    let created = commands
        .create_post(None, post("Ownership", false, None, vec![tag.id]))
        .await
        .unwrap();

    let repo = SqlitePostRepository::new(app.pool.clone());
    let found = repo
        .find_by_slug(&Slug::new(created.slug.clone()).unwrap())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(i64::from(found.id), created.id);
    assert_eq!(found.tag_ids.len(), 1);
    assert!(!found.is_published);

    let (unpublished, total) = repo
        .list(&ListFilter {
            published: Some(false),
            ..ListFilter::page(10, 1)
        })
        .await
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(unpublished[0].tag_ids, found.tag_ids);
}

#[tokio::test]
async fn public_listing_filters_by_search_category_and_tag() {
    let app = support::default_app().await;
    let commands = &app.services.blog_commands;

    let travel = commands.create_category(term("Travel")).await.unwrap();
    let food = commands.create_tag(term("Food")).await.unwrap();
    commands
        .create_post(None, post("Porto Harbour", true, Some(travel.id), vec![food.id]))
        .await
        .unwrap();
    commands
        .create_post(None, post("Porto Draft", false, Some(travel.id), vec![]))
        .await
        .unwrap();
    commands
        .create_post(None, post("Baking bread", true, None, vec![food.id]))
        .await
        .unwrap();

    let queries = &app.services.blog_queries;
    let search = queries
        .list_public_posts(PublicPostsQuery {
            page: 1,
            q: Some("porto".into()),
            category: None,
            tag: None,
        })
        .await
        .unwrap();
    assert_eq!(search.total, 1);
    assert_eq!(search.items[0].title, "Porto Harbour");

    let by_category = queries
        .list_public_posts(PublicPostsQuery {
            page: 1,
            q: None,
            category: Some(travel.slug.clone()),
            tag: None,
        })
        .await
        .unwrap();
    assert_eq!(by_category.total, 1);

    let by_tag = queries
        .list_public_posts(PublicPostsQuery {
            page: 1,
            q: None,
            category: None,
            tag: Some(food.slug.clone()),
        })
        .await
        .unwrap();
    assert_eq!(by_tag.total, 2);
    assert_eq!(by_tag.items[0].title, "Baking bread");

    let unknown = queries
        .list_public_posts(PublicPostsQuery {
            page: 1,
            q: None,
            category: Some("no-such-category".into()),
            tag: None,
        })
        .await
        .unwrap();
    assert_eq!(unknown.total, 0);
}

#[tokio::test]
async fn public_page_hides_drafts() {
    let app = support::default_app().await;
    let commands = &app.services.blog_commands;

    let draft = commands
        .create_page(SavePageCommand {
            title: "Draft".into(),
            slug: Some("draft".into()),
            content: String::new(),
            is_published: false,
        })
        .await
        .unwrap();

    assert!(app.services.blog_queries.public_page(draft.slug.clone()).await.is_err());

    commands.set_page_published(draft.id, true).await.unwrap();
    let page = app.services.blog_queries.public_page(draft.slug).await.unwrap();
    assert!(page.is_published);
}

#[tokio::test]
async fn admin_search_matches_ids_and_text() {
    let app = support::default_app().await;
    let commands = &app.services.blog_commands;

    let first = commands.create_tag(term("Databases")).await.unwrap();
    commands.create_tag(term("Networking")).await.unwrap();

    let admin = &app.services.admin_queries;
    let by_text = admin
        .list(
            ContentKind::Tag,
            AdminListQuery {
                q: Some("DATA".into()),
                page: 1,
                ..AdminListQuery::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(by_text.total, 1);
    assert_eq!(by_text.rows[0]["name"], "Databases");

    let by_id = admin
        .list(
            ContentKind::Tag,
            AdminListQuery {
                q: Some(first.id.to_string()),
                page: 1,
                ..AdminListQuery::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(by_id.total, 1);
    assert_eq!(by_id.rows[0]["id"], first.id);
}

#[tokio::test]
async fn admin_search_treats_like_wildcards_literally() {
    let app = support::default_app().await;
    let commands = &app.services.blog_commands;

    commands.create_tag(term("Databases")).await.unwrap();
    commands.create_tag(term("Networking")).await.unwrap();
    commands.create_tag(term("100% Rust")).await.unwrap();

    let admin = &app.services.admin_queries;
    let search = |q: &str| AdminListQuery {
        q: Some(q.into()),
        page: 1,
        ..AdminListQuery::default()
    };

    let percent = admin.list(ContentKind::Tag, search("%")).await.unwrap();
    assert_eq!(percent.total, 1);
    assert_eq!(percent.rows[0]["name"], "100% Rust");

    let underscore = admin.list(ContentKind::Tag, search("_")).await.unwrap();
    assert_eq!(underscore.total, 0);
}

#[tokio::test]
async fn admin_rejects_filters_a_kind_does_not_offer() {
    let app = support::default_app().await;

    let result = app
        .services
        .admin_queries
        .list(
            ContentKind::Tag,
            AdminListQuery {
                is_published: Some(true),
                page: 1,
                ..AdminListQuery::default()
            },
        )
        .await;
    assert!(result.is_err());
}

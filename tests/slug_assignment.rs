// tests/slug_assignment.rs
use quill_cms::application::{
    ApplicationError,
    commands::blog::{SavePageCommand, SaveTermCommand},
    pipeline::SlugPolicy,
};
use quill_cms::domain::blog::ContentKind;

mod support;

fn term(name: &str) -> SaveTermCommand {
    SaveTermCommand {
        name: name.into(),
        slug: None,
    }
}

#[tokio::test]
async fn same_name_gets_distinct_slugs() {
    let app = support::build_app(
        support::ScriptedSuffixes::new(&["aaaa", "aaaa", "bbbb"], "zzzz"),
        SlugPolicy::default(),
    )
    .await;
    let commands = &app.services.blog_commands;

    let first = commands.create_tag(term("Rust")).await.unwrap();
    let second = commands.create_tag(term("rust")).await.unwrap();

    assert_eq!(first.slug, "rust-aaaa");
    assert_eq!(second.slug, "rust-bbbb");
}

#[tokio::test]
async fn slugs_are_unique_per_kind_only() {
    let app = support::build_app(
        support::ScriptedSuffixes::constant("same"),
        SlugPolicy::default(),
    )
    .await;
    let commands = &app.services.blog_commands;

    let tag = commands.create_tag(term("News")).await.unwrap();
    let category = commands.create_category(term("News")).await.unwrap();

    assert_eq!(tag.slug, "news-same");
    assert_eq!(category.slug, "news-same");
}

#[tokio::test]
async fn exhausted_retries_report_kind_and_attempts() {
    let app = support::build_app(
        support::ScriptedSuffixes::constant("zzzz"),
        SlugPolicy {
            suffix_length: 4,
            max_attempts: 3,
        },
    )
    .await;
    let commands = &app.services.blog_commands;

    commands.create_category(term("Travel")).await.unwrap();
    let err = commands.create_category(term("Travel")).await.unwrap_err();

    assert!(
        matches!(
            err,
            ApplicationError::SlugCollisionExhausted {
                kind: ContentKind::Category,
                attempts: 3
            }
        ),
        "{err:?}"
    );
}

#[tokio::test]
async fn names_without_alphanumerics_fall_back_to_kind() {
    let app = support::default_app().await;

    let tag = app
        .services
        .blog_commands
        .create_tag(term("!!!"))
        .await
        .unwrap();
    assert_eq!(tag.slug, "tag-ab12");
}

#[tokio::test]
async fn renaming_keeps_existing_slug() {
    let app = support::default_app().await;
    let commands = &app.services.blog_commands;

    let page = commands
        .create_page(SavePageCommand {
            title: "About us".into(),
            slug: None,
            content: "Hi".into(),
            is_published: true,
        })
        .await
        .unwrap();
    assert_eq!(page.slug, "about-us-ab12");

    let renamed = commands
        .update_page(
            page.id,
            SavePageCommand {
                title: "Who we are".into(),
                slug: None,
                content: "Hi".into(),
                is_published: true,
            },
        )
        .await
        .unwrap();
    assert_eq!(renamed.slug, "about-us-ab12");
    assert_eq!(renamed.title, "Who we are");
}

#[tokio::test]
async fn explicit_slug_is_used_verbatim() {
    let app = support::default_app().await;

    let tag = app
        .services
        .blog_commands
        .create_tag(SaveTermCommand {
            name: "Rust".into(),
            slug: Some("rust-lang".into()),
        })
        .await
        .unwrap();
    assert_eq!(tag.slug, "rust-lang");
}

#[tokio::test]
async fn duplicate_explicit_slug_is_a_storage_write_failure() {
    let app = support::default_app().await;
    let commands = &app.services.blog_commands;

    let explicit = |name: &str| SaveTermCommand {
        name: name.into(),
        slug: Some("shared".into()),
    };
    commands.create_tag(explicit("One")).await.unwrap();
    let err = commands.create_tag(explicit("Two")).await.unwrap_err();

    assert!(
        matches!(err, ApplicationError::StorageWriteFailure(ref msg) if msg == "slug already exists"),
        "{err:?}"
    );
}

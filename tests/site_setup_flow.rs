// tests/site_setup_flow.rs
use quill_cms::application::{
    ApplicationError,
    commands::{
        ImageChange,
        site_setup::{AddMenuLinkCommand, SaveSiteSetupCommand},
    },
};
use quill_cms::domain::site_setup::DisplayFlags;

mod support;

fn setup_command(title: &str, favicon: ImageChange) -> SaveSiteSetupCommand {
    SaveSiteSetupCommand {
        title: title.into(),
        description: "A quiet corner of the web".into(),
        flags: DisplayFlags::default(),
        favicon,
    }
}

#[tokio::test]
async fn png_favicon_is_shrunk_to_32_pixels() {
    let app = support::default_app().await;

    let setup = app
        .services
        .site_commands
        .create_site_setup(setup_command(
            "My blog",
            support::upload("favicon.png", support::png_bytes(512, 512)),
        ))
        .await
        .unwrap();

    assert!(setup.favicon.starts_with("assets/favicon/2024/05/"));
    let stored = app.storage.get(&setup.favicon).unwrap();
    assert_eq!(support::image_dimensions(&stored), (32, 32));
    assert_eq!(app.storage.overwrite_count(), 1);
}

#[tokio::test]
async fn small_favicon_is_left_untouched() {
    let app = support::default_app().await;

    let setup = app
        .services
        .site_commands
        .create_site_setup(setup_command(
            "My blog",
            support::upload("favicon.png", support::png_bytes(16, 16)),
        ))
        .await
        .unwrap();

    let stored = app.storage.get(&setup.favicon).unwrap();
    assert_eq!(support::image_dimensions(&stored), (16, 16));
    assert_eq!(app.storage.overwrite_count(), 0);
}

#[tokio::test]
async fn non_png_favicon_is_rejected_before_anything_is_stored() {
    let app = support::default_app().await;

    let err = app
        .services
        .site_commands
        .create_site_setup(setup_command(
            "My blog",
            support::upload("favicon.jpg", support::jpeg_bytes(64, 64)),
        ))
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::Validation(_)), "{err:?}");
    assert!(app.storage.names().is_empty());
    assert!(app.services.site_queries.list_setups().await.unwrap().is_empty());
}

#[tokio::test]
async fn png_named_file_with_jpeg_payload_is_rejected() {
    let app = support::default_app().await;

    let err = app
        .services
        .site_commands
        .create_site_setup(setup_command(
            "My blog",
            support::upload("favicon.png", support::jpeg_bytes(64, 64)),
        ))
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::Validation(_)), "{err:?}");
    assert!(app.storage.names().is_empty());
}

#[tokio::test]
async fn context_uses_latest_setup_and_its_menu() {
    let app = support::default_app().await;
    let commands = &app.services.site_commands;

    let empty = app.services.site_queries.current_context().await.unwrap();
    assert!(empty.setup.is_none());
    assert!(empty.menu_links.is_empty());

    let older = commands
        .create_site_setup(setup_command("Old title", ImageChange::Keep))
        .await
        .unwrap();
    commands
        .add_menu_link(
            older.id,
            AddMenuLinkCommand {
                text: "Old home".into(),
                url_or_path: "/old".into(),
                new_tab: false,
            },
        )
        .await
        .unwrap();

    let newer = commands
        .create_site_setup(setup_command("New title", ImageChange::Keep))
        .await
        .unwrap();
    let link = commands
        .add_menu_link(
            newer.id,
            AddMenuLinkCommand {
                text: "GitHub".into(),
                url_or_path: "https://github.com".into(),
                new_tab: true,
            },
        )
        .await
        .unwrap();

    let context = app.services.site_queries.current_context().await.unwrap();
    assert_eq!(context.setup.unwrap().title, "New title");
    assert_eq!(context.menu_links.len(), 1);
    assert_eq!(context.menu_links[0].id, link.id);
    assert!(context.menu_links[0].new_tab);
}

#[tokio::test]
async fn deleting_setup_removes_its_menu_links() {
    let app = support::default_app().await;
    let commands = &app.services.site_commands;

    let setup = commands
        .create_site_setup(setup_command("Doomed", ImageChange::Keep))
        .await
        .unwrap();
    commands
        .add_menu_link(
            setup.id,
            AddMenuLinkCommand {
                text: "Home".into(),
                url_or_path: "/".into(),
                new_tab: false,
            },
        )
        .await
        .unwrap();

    commands.delete_site_setup(setup.id).await.unwrap();

    let remaining: i64 = sqlx::query_scalar("SELECT COUNT(1) FROM menu_links")
        .fetch_one(&app.pool)
        .await
        .unwrap();
    assert_eq!(remaining, 0);
}

#[tokio::test]
async fn menu_link_for_missing_setup_is_not_found() {
    let app = support::default_app().await;

    let err = app
        .services
        .site_commands
        .add_menu_link(
            99,
            AddMenuLinkCommand {
                text: "Nowhere".into(),
                url_or_path: "/".into(),
                new_tab: false,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)), "{err:?}");
}

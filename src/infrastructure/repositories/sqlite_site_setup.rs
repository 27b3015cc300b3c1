use super::error::map_sqlx;
use crate::domain::blog::Title;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::media::ImageRef;
use crate::domain::site_setup::{
    DisplayFlags, MenuLink, MenuLinkId, MenuText, NewMenuLink, NewSiteSetup, SiteDescription,
    SiteSetup, SiteSetupId, SiteSetupRepository, UrlOrPath,
};
use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};

const SETUP_COLUMNS: &str = "id, title, description, show_header, show_search, show_menu, show_description, show_pagination, show_footer, favicon";

#[derive(Clone)]
pub struct SqliteSiteSetupRepository {
    pool: SqlitePool,
}

impl SqliteSiteSetupRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
#[allow(clippy::struct_excessive_bools)]
struct SiteSetupRow {
    id: i64,
    title: String,
    description: String,
    show_header: bool,
    show_search: bool,
    show_menu: bool,
    show_description: bool,
    show_pagination: bool,
    show_footer: bool,
    favicon: String,
}

impl TryFrom<SiteSetupRow> for SiteSetup {
    type Error = DomainError;

    fn try_from(row: SiteSetupRow) -> Result<Self, Self::Error> {
        Ok(SiteSetup {
            id: SiteSetupId::new(row.id)?,
            title: Title::new(row.title)?,
            description: SiteDescription::new(row.description)?,
            flags: DisplayFlags {
                show_header: row.show_header,
                show_search: row.show_search,
                show_menu: row.show_menu,
                show_description: row.show_description,
                show_pagination: row.show_pagination,
                show_footer: row.show_footer,
            },
            favicon: ImageRef::new(row.favicon)?,
        })
    }
}

#[derive(Debug, FromRow)]
struct MenuLinkRow {
    id: i64,
    text: String,
    url_or_path: String,
    new_tab: bool,
    site_setup_id: Option<i64>,
}

impl TryFrom<MenuLinkRow> for MenuLink {
    type Error = DomainError;

    fn try_from(row: MenuLinkRow) -> Result<Self, Self::Error> {
        Ok(MenuLink {
            id: MenuLinkId::new(row.id)?,
            text: MenuText::new(row.text)?,
            url_or_path: UrlOrPath::new(row.url_or_path)?,
            new_tab: row.new_tab,
            site_setup_id: row.site_setup_id.map(SiteSetupId::new).transpose()?,
        })
    }
}

#[async_trait]
impl SiteSetupRepository for SqliteSiteSetupRepository {
    async fn insert(&self, setup: NewSiteSetup) -> DomainResult<SiteSetup> {
        let NewSiteSetup {
            title,
            description,
            flags,
            favicon,
        } = setup;

        let row = sqlx::query_as::<_, SiteSetupRow>(&format!(
            "INSERT INTO site_setups (title, description, show_header, show_search, show_menu, show_description, show_pagination, show_footer, favicon) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?) RETURNING {SETUP_COLUMNS}"
        ))
        .bind(title.as_str())
        .bind(description.as_str())
        .bind(flags.show_header)
        .bind(flags.show_search)
        .bind(flags.show_menu)
        .bind(flags.show_description)
        .bind(flags.show_pagination)
        .bind(flags.show_footer)
        .bind(favicon.name())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        SiteSetup::try_from(row)
    }

    async fn update(&self, setup: &SiteSetup) -> DomainResult<SiteSetup> {
        let flags = setup.flags;
        let row = sqlx::query_as::<_, SiteSetupRow>(&format!(
            "UPDATE site_setups SET title = ?, description = ?, show_header = ?, show_search = ?, show_menu = ?, show_description = ?, show_pagination = ?, show_footer = ?, favicon = ? WHERE id = ? RETURNING {SETUP_COLUMNS}"
        ))
        .bind(setup.title.as_str())
        .bind(setup.description.as_str())
        .bind(flags.show_header)
        .bind(flags.show_search)
        .bind(flags.show_menu)
        .bind(flags.show_description)
        .bind(flags.show_pagination)
        .bind(flags.show_footer)
        .bind(setup.favicon.name())
        .bind(i64::from(setup.id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::missing("site setup", setup.id))?;

        SiteSetup::try_from(row)
    }

    async fn delete(&self, id: SiteSetupId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM site_setups WHERE id = ?")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::missing("site setup", id));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: SiteSetupId) -> DomainResult<Option<SiteSetup>> {
        let row = sqlx::query_as::<_, SiteSetupRow>(&format!(
            "SELECT {SETUP_COLUMNS} FROM site_setups WHERE id = ?"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(SiteSetup::try_from).transpose()
    }

    async fn latest(&self) -> DomainResult<Option<SiteSetup>> {
        let row = sqlx::query_as::<_, SiteSetupRow>(&format!(
            "SELECT {SETUP_COLUMNS} FROM site_setups ORDER BY id DESC LIMIT 1"
        ))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(SiteSetup::try_from).transpose()
    }

    async fn list(&self) -> DomainResult<Vec<SiteSetup>> {
        let rows = sqlx::query_as::<_, SiteSetupRow>(&format!(
            "SELECT {SETUP_COLUMNS} FROM site_setups ORDER BY id DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(SiteSetup::try_from).collect()
    }

    async fn insert_menu_link(&self, link: NewMenuLink) -> DomainResult<MenuLink> {
        let row = sqlx::query_as::<_, MenuLinkRow>(
            "INSERT INTO menu_links (text, url_or_path, new_tab, site_setup_id) VALUES (?, ?, ?, ?) RETURNING id, text, url_or_path, new_tab, site_setup_id",
        )
        .bind(link.text.as_str())
        .bind(link.url_or_path.as_str())
        .bind(link.new_tab)
        .bind(link.site_setup_id.map(i64::from))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        MenuLink::try_from(row)
    }

    async fn delete_menu_link(&self, id: MenuLinkId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM menu_links WHERE id = ?")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::missing("menu link", id));
        }
        Ok(())
    }

    async fn menu_links(&self, setup_id: SiteSetupId) -> DomainResult<Vec<MenuLink>> {
        let rows = sqlx::query_as::<_, MenuLinkRow>(
            "SELECT id, text, url_or_path, new_tab, site_setup_id FROM menu_links WHERE site_setup_id = ? ORDER BY id",
        )
        .bind(i64::from(setup_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(MenuLink::try_from).collect()
    }
}

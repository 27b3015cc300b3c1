mod admin;
mod blog;
mod pagination;
mod site;

pub use admin::AdminListDto;
pub use blog::{CategoryDto, PageDto, PostDto, TagDto};
pub use pagination::Paginated;
pub use site::{MenuLinkDto, SiteContextDto, SiteSetupDto};

mod pages;
mod posts;
mod service;
mod taxonomy;

pub use pages::SavePageCommand;
pub use posts::SavePostCommand;
pub use service::BlogCommandService;
pub use taxonomy::SaveTermCommand;

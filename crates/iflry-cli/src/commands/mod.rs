pub mod events;
pub mod export;
pub mod href;
pub mod init;
pub mod members;
pub mod nav;
pub mod paths;
pub mod people;
pub mod status;
pub mod vacancies;
pub mod validate;

pub use events::cmd_events;
pub use export::cmd_export;
pub use href::cmd_href;
pub use init::cmd_init;
pub use members::cmd_members;
pub use nav::cmd_nav;
pub use paths::cmd_paths;
pub use people::cmd_people;
pub use status::cmd_status;
pub use vacancies::cmd_vacancies;
pub use validate::cmd_validate;

pub mod composer;
pub mod config;
pub mod diff;
pub mod errors;
pub mod hooks;
pub mod html;
pub mod resolver;
pub mod store;
pub mod types;
pub mod urls;

pub use composer::ProfileHeaderComposer;
pub use diff::DiffAvatarDecorator;
pub use resolver::IdentityResolver;
pub use store::ProfileServices;

//! Built-in lint rules.
//!
//! This module contains all the built-in rules that come with pkglint.

pub mod checksums;
pub mod depends;
pub mod description;
pub mod extra_vars;
pub mod gnome_mime;
pub mod invalid_startdir;
pub mod mime_files;
pub mod sourceforge_url;
pub mod tags;

pub use checksums::ChecksumsRule;
pub use depends::DependsRule;
pub use description::DescriptionRule;
pub use extra_vars::ExtraVarsRule;
pub use gnome_mime::GnomeMimeRule;
pub use invalid_startdir::InvalidStartdirRule;
pub use mime_files::MimeFilesRule;
pub use sourceforge_url::SourceForgeUrlRule;
pub use tags::TagsRule;

//! Layout composition and static publishing for the EmbryoDoc landing page.
//!
//! A [`Site`] wraps every page body in a shared [`Layout`] and is written to
//! disk as static HTML by [`StaticBuilder`].

pub mod assets;
pub mod builder;
pub mod layout;
pub mod site;
pub mod templates;

pub use builder::{
    BuildError, BuildOptions, BuildResult, BuildTarget, Preset, StaticBuilder, LOCAL_PREVIEW_DIR,
};
pub use layout::{Layout, MainLayout};
pub use site::{Site, SiteMetadata};

//! Page content of the EmbryoDoc landing site.

mod home;

pub use home::Home;

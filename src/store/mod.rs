pub mod directory;

pub use directory::{ActivityDirectory, SharedDirectory};

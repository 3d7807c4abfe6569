pub mod gallery;

pub use gallery::GalleryPage;

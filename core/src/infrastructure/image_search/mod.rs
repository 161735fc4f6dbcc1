pub mod bing;

pub use bing::BingImageSearch;

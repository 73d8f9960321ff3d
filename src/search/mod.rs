pub mod path;
pub mod shortest_path;

pub use path::Path;
pub use shortest_path::ShortestPath;

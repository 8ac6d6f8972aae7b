mod articles;
mod dashboard;
mod habits;
mod logout;
pub use articles::*;
pub use dashboard::*;
pub use habits::*;
pub use logout::*;

mod imports;

mod admin;
mod habit;
mod health_check;
mod home;
pub use admin::*;
pub use habit::*;
pub use health_check::*;
pub use home::*;

pub mod path;
pub mod period;
pub mod table;
pub mod time;

pub use time::mins2readable;

pub mod aggregate;
pub mod backend;
pub mod cents;
pub mod chart;
pub mod config;
pub mod date;
pub mod datepart;
pub mod fetch;
pub mod fs;
pub mod http;
pub mod label;
pub mod period;
pub mod preset;
pub mod purchase;
pub mod range;
pub mod resolution;
pub mod series;
pub mod session;
pub mod table;
pub mod ticks;
pub mod util;

pub use aggregate::Aggregate;
pub use backend::Backend;
pub use cents::Cents;
pub use chart::Chart;
pub use config::Config;
pub use date::Date;
pub use datepart::Datepart;
pub use fs::Fs;
pub use http::HttpBackend;
pub use period::Period;
pub use preset::Preset;
pub use purchase::Purchase;
pub use range::Range;
pub use resolution::Resolution;
pub use series::ChartDataPoint;
pub use series::Series;
pub use session::Session;
pub use table::Table;
pub use ticks::TickPlan;

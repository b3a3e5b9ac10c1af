pub mod chart;
pub mod init;
pub mod range;
pub mod root;
pub mod ticks;

pub mod cli;
pub mod parse_ip;
pub mod report;

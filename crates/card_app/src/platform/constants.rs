use super::logging::LogDestination;

pub const LOG_DESTINATION: LogDestination = LogDestination::Terminal;
pub const LOG_FILE: &str = "./card_app.log";

/// All user-facing messages emitted by the application.
///
/// Centralizing the text in one enum keeps wording consistent across
/// commands and makes the strings testable independently of the console
/// or tracing output they end up in.
#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleClockify,
    ConfigModuleTimesheet,
    PromptSelectModules,
    PromptApiUrl,
    PromptResource,
    PromptCallNo,
    PromptIncludeProject,
    PromptApiKey,
    ResourceFormatInvalid,
    TimesheetConfigMissing,

    // === SETUP MESSAGES ===
    ApiKeyValidated(String), // user name
    ApiKeyDeleted,
    NoStoredApiKey,

    // === EXPORT MESSAGES ===
    FetchingWeek(String), // week-ending date
    EntriesFetched(usize),
    NoEntriesForWeek(String),  // week-ending date
    TimesheetSaved(String),    // output path
    PreviewHeader(String),     // week-ending date
    WeekTotalHours(f64),
}

#[derive(Debug, Clone)]
pub enum Message {
    // === DISPATCH MESSAGES ===
    NoCommand,

    // === TASK MESSAGES ===
    TaskAdded,
    TaskDeleted(i64),    // task id
    TaskMarkedDone(i64), // task id

    // === COMMENT MESSAGES ===
    CommentAdded(i64), // task id

    // === REPORT MESSAGES ===
    ReportHeader,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted(String), // path
    ConfigAlreadyAbsent,
    ConfigModuleDatabase,

    // === PROMPTS ===
    PromptTaskDescription,
    PromptDaysDue,
    PromptComment,
    PromptDbUser,
    PromptDbPassword,

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),        // count
    RunningMigration(u32, String), // version, name
    MigrationCompleted(u32),       // version
    MigrationFailed(u32, String),  // version, error
    AllMigrationsCompleted,
    DatabaseUpToDate,
}

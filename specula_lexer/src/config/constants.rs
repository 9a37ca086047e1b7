pub mod compile_time {
    pub mod file_processing {
        /// Maximum source file size accepted by the reader (10MB)
        /// SECURITY: Bounds memory used for a single source file
        pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

        /// Maximum number of lines fed from one file
        /// SECURITY: Bounds the work done per file
        pub const MAX_LINE_COUNT: usize = 500_000;

        /// Extension picked up when a directory is walked
        pub const SOURCE_EXTENSION: &str = "spc";

        /// Suffix appended to the file stem of a token dump
        pub const TOKEN_FILE_SUFFIX: &str = "_tokens";
    }

    pub mod lexical {
        /// Maximum number of Reprocess steps taken for a single character.
        /// The longest real chain (CHAR_SLASH -> OP_EQUALS_NEXT -> START -> IDENTIFIER, as in `/x`)
        /// takes three.
        pub const MAX_REPROCESS_DEPTH: usize = 4;

        /// Maximum length of a pending lexeme, in characters
        /// SECURITY: Prevents unbounded growth of the lexeme buffer on hostile input
        pub const MAX_TOKEN_TEXT_LENGTH: usize = 1_048_576;

        /// Maximum number of diagnostics kept per lexer instance
        /// RESOURCE: Controls memory used by the diagnostic list
        pub const MAX_DIAGNOSTICS: usize = 10_000;

        /// Identifier spellings that may be joined to a following word with `-`
        pub const DASH_PREFIXES: [&str; 2] = ["init", "auto"];
    }

    pub mod logging {
        /// Maximum number of events the collector keeps per file
        /// RESOURCE: Controls memory usage for error collection
        pub const MAX_LOG_EVENTS_PER_FILE: usize = 1_000;

        /// Maximum number of files tracked by the collector
        pub const MAX_TRACKED_FILES: usize = 10_000;

        /// Maximum message length accepted by the logging service
        /// SECURITY: Truncates oversized messages before they reach a sink
        pub const MAX_LOG_MESSAGE_LENGTH: usize = 10_000;

        /// Capacity hint for the in-memory logger used in tests
        pub const MEMORY_LOGGER_CAPACITY: usize = 1_024;
    }
}

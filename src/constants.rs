/// Constants controlling how many records the pipeline generates.
pub mod generation {
    /// Policy records generated by a default run.
    pub const POLICY_COUNT: usize = 20_000;
    /// News records generated by a default run.
    pub const NEWS_COUNT: usize = 20_000;
    /// Case records generated by a default run.
    pub const CASE_COUNT: usize = 500;
    /// Records per policy/news batch file.
    pub const BATCH_SIZE: usize = 1_000;
    /// Progress is logged every this many policy or news records.
    pub const RECORD_PROGRESS_INTERVAL: usize = 1_000;
    /// Progress is logged every this many case records.
    pub const CASE_PROGRESS_INTERVAL: usize = 50;
}

/// Constants used by the randomized record fields.
pub mod random {
    /// First year a policy may be published in.
    pub const POLICY_BASE_YEAR: i32 = 2023;
    /// Number of distinct policy publication years.
    pub const POLICY_YEAR_SPAN: u32 = 3;
    /// Highest day-of-month drawn for policy dates, valid for every month.
    pub const POLICY_MAX_DAY: u32 = 28;
    /// Years between publication and the target year named in a policy's goals.
    pub const POLICY_TARGET_YEAR_OFFSET: i32 = 2;
    /// News dates fall within this many days before the reference time.
    pub const NEWS_WINDOW_DAYS: i64 = 30;
    /// Exclusive upper bound for news view counts.
    pub const NEWS_MAX_VIEWS: u32 = 100_000;
    /// Annual sales metric range, in 亿元 (`base..base + span`).
    pub const CASE_SALES_BASE: u32 = 1;
    /// Width of the annual sales metric range.
    pub const CASE_SALES_SPAN: u32 = 50;
    /// User-count metric range, in 万 (`base..base + span`).
    pub const CASE_USERS_BASE: u32 = 100;
    /// Width of the user-count metric range.
    pub const CASE_USERS_SPAN: u32 = 900;
}

/// Constants describing the output directory layout.
pub mod files {
    /// Default output directory, relative to the working directory.
    pub const DEFAULT_OUTPUT_DIR: &str = "lib/data/generated";
    /// File-name prefix for policy batches.
    pub const POLICY_BATCH_PREFIX: &str = "policies";
    /// File-name prefix for news batches.
    pub const NEWS_BATCH_PREFIX: &str = "news";
    /// Marker between a prefix and the batch number.
    pub const BATCH_MARKER: &str = "_batch_";
    /// Extension shared by every data file.
    pub const JSON_EXTENSION: &str = ".json";
    /// Single file holding every case record.
    pub const CASES_FILE: &str = "cases_all.json";
    /// Manifest module written next to the data files.
    pub const MANIFEST_FILE: &str = "index.ts";
    /// Header comment emitted at the top of the manifest.
    pub const MANIFEST_HEADER: &str = "// 自动生成的数据索引";
}

/// Prefixes and padding used to build record identifiers.
pub mod ids {
    /// Prefix for policy identifiers.
    pub const POLICY_ID_PREFIX: &str = "policy_";
    /// Prefix for news identifiers.
    pub const NEWS_ID_PREFIX: &str = "news_";
    /// Prefix for case identifiers.
    pub const CASE_ID_PREFIX: &str = "case_";
    /// Digits used for policy and news identifiers.
    pub const RECORD_ID_WIDTH: usize = 5;
    /// Digits used for case identifiers and policy document numbers.
    pub const SHORT_ID_WIDTH: usize = 3;
}

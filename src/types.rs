/// Record identifier derived from the sequence index.
/// Examples: `policy_00001`, `news_00042`, `case_007`
pub type RecordId = String;
/// Output file name relative to the target directory.
/// Examples: `policies_batch_1.json`, `cases_all.json`, `index.ts`
pub type FileName = String;
/// Calendar date rendered as `YYYY-MM-DD`.
/// Example: `2024-03-18`
pub type DateString = String;
/// Keyword or tag attached to a record.
/// Examples: `数字文化`, `AIGC`, `成功案例`
pub type Keyword = String;
/// 1-based position of a record within its generated sequence.
pub type SequenceIndex = usize;

use crate::constants::files::MANIFEST_HEADER;
use crate::errors::GeneratorError;
use crate::types::FileName;

/// Index of every file a run wrote, in load order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Manifest {
    /// Policy batch files in batch order.
    pub policy_batches: Vec<FileName>,
    /// News batch files in batch order.
    pub news_batches: Vec<FileName>,
    /// The single case file.
    pub cases_file: FileName,
}

impl Manifest {
    /// Build a manifest from the file names the writer returned.
    pub fn new(
        policy_batches: Vec<FileName>,
        news_batches: Vec<FileName>,
        cases_file: impl Into<FileName>,
    ) -> Self {
        Self {
            policy_batches,
            news_batches,
            cases_file: cases_file.into(),
        }
    }

    /// Every referenced file: policy batches, then news batches, then the case file.
    pub fn file_names(&self) -> Vec<&str> {
        self.policy_batches
            .iter()
            .chain(self.news_batches.iter())
            .map(String::as_str)
            .chain(std::iter::once(self.cases_file.as_str()))
            .collect()
    }

    /// Render the TypeScript index module consumed by the application.
    pub fn render(&self) -> Result<String, GeneratorError> {
        let policies = serde_json::to_string(&self.policy_batches)?;
        let news = serde_json::to_string(&self.news_batches)?;
        Ok(format!(
            "\n{MANIFEST_HEADER}\nexport const POLICY_BATCHES = {policies};\nexport const NEWS_BATCHES = {news};\nexport const CASES_FILE = '{}';\n",
            self.cases_file
        ))
    }
}

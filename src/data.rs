use serde::{Deserialize, Serialize};

pub use crate::types::{DateString, Keyword, RecordId};

/// Placeholder policy document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyRecord {
    pub id: RecordId,
    pub title: String,
    /// Issuing authority, derived from the region.
    pub issuer: String,
    /// Official-style document number, e.g. `beijing文旅发〔2024〕001号`.
    pub document_number: String,
    /// Placeholder source URL; never fetched.
    pub original_url: String,
    pub publish_date: DateString,
    /// Region code (`beijing`, `shanghai`, ...).
    pub region: String,
    pub region_name: String,
    /// Policy type code (`support`, `plan`, `regulation`, `funding`).
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(rename = "typeName")]
    pub kind_name: String,
    pub keywords: Vec<Keyword>,
    pub summary: String,
    pub content: String,
    /// Ordered section headings with their content.
    pub key_points: Vec<KeyPoint>,
    /// Always empty; reserved for the consuming application.
    pub related_cases: Vec<RecordId>,
    /// Always empty; reserved for the consuming application.
    pub related_policies: Vec<RecordId>,
}

/// A numbered section of a policy document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyPoint {
    /// Section number as a string, starting at `"1"`.
    pub id: String,
    /// Section heading.
    pub title: String,
    /// Section body.
    pub content: String,
}

/// Placeholder news article.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsRecord {
    pub id: RecordId,
    pub title: String,
    /// Publishing outlet.
    pub source: String,
    /// Random date within the window before the reference time.
    pub publish_date: DateString,
    pub category: String,
    pub keywords: Vec<Keyword>,
    pub summary: String,
    pub url: String,
    pub views: u32,
}

/// Placeholder business case study.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseRecord {
    pub id: RecordId,
    pub name: String,
    /// Category code (`museum`, `ip`, `destination`, `brand`, `tech`).
    pub category: String,
    pub category_name: String,
    /// Emoji marker shown in place of a logo.
    pub logo: String,
    pub company: String,
    pub location: String,
    pub description: String,
    /// Short headline achievement.
    pub highlight: String,
    pub tags: Vec<Keyword>,
    pub success_factors: Vec<String>,
    pub data_metrics: Vec<DataMetric>,
    pub business_model: String,
    pub background: String,
    pub strategy: String,
    pub execution: String,
    pub results: String,
    pub lessons: String,
    /// Always empty; reserved for the consuming application.
    pub related_policies: Vec<RecordId>,
    /// Always empty; reserved for the consuming application.
    pub similar_cases: Vec<RecordId>,
}

/// Headline figure attached to a case.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataMetric {
    /// Metric name, e.g. `年销售额`.
    pub label: String,
    /// Decimal rendering of the figure.
    pub value: String,
    /// Unit suffix, e.g. `亿元`.
    pub unit: String,
    /// Always [`Trend::Up`] for generated cases.
    pub trend: Trend,
}

/// Direction a metric is moving in. Generated metrics always trend up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    /// Serialized as `"up"`.
    Up,
}

/// The three generated record kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// Government policy documents.
    Policy,
    /// Industry news items.
    News,
    /// Business case studies.
    Case,
}

impl RecordKind {
    /// Human-readable plural label used in logs and reports.
    pub fn label(self) -> &'static str {
        match self {
            RecordKind::Policy => "policies",
            RecordKind::News => "news",
            RecordKind::Case => "cases",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn policy_serializes_with_application_field_names() {
        let record = PolicyRecord {
            id: "policy_00001".to_string(),
            title: "t".to_string(),
            issuer: "i".to_string(),
            document_number: "d".to_string(),
            original_url: "u".to_string(),
            publish_date: "2024-01-02".to_string(),
            region: "shanghai".to_string(),
            region_name: "上海".to_string(),
            kind: "plan".to_string(),
            kind_name: "发展规划".to_string(),
            keywords: vec!["a".to_string()],
            summary: "s".to_string(),
            content: "c".to_string(),
            key_points: Vec::new(),
            related_cases: Vec::new(),
            related_policies: Vec::new(),
        };
        let value = serde_json::to_value(&record).unwrap();
        let object = value.as_object().unwrap();
        let keys: Vec<&str> = object.keys().map(String::as_str).collect();
        for expected in [
            "documentNumber",
            "originalUrl",
            "publishDate",
            "regionName",
            "type",
            "typeName",
            "keyPoints",
            "relatedCases",
            "relatedPolicies",
        ] {
            assert!(keys.contains(&expected), "missing key {expected}");
        }
        assert_eq!(value["type"], json!("plan"));
        assert_eq!(value["relatedCases"], json!([]));
    }

    #[test]
    fn trend_serializes_lowercase() {
        let metric = DataMetric {
            label: "年销售额".to_string(),
            value: "12".to_string(),
            unit: "亿元".to_string(),
            trend: Trend::Up,
        };
        let value = serde_json::to_value(&metric).unwrap();
        assert_eq!(
            value,
            json!({"label": "年销售额", "value": "12", "unit": "亿元", "trend": "up"})
        );
    }
}

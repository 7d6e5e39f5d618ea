use chrono::NaiveDate;

use crate::constants::ids::{POLICY_ID_PREFIX, RECORD_ID_WIDTH, SHORT_ID_WIDTH};
use crate::constants::random::{
    POLICY_BASE_YEAR, POLICY_MAX_DAY, POLICY_TARGET_YEAR_OFFSET, POLICY_YEAR_SPAN,
};
use crate::data::{KeyPoint, PolicyRecord};
use crate::generators::padded;
use crate::generators::tables::{
    POLICY_KEYWORDS, POLICY_SAFEGUARDS, POLICY_SECTION_TITLES, POLICY_TASKS, POLICY_TYPES,
    REGIONS, cycle,
};
use crate::random::RandomSource;
use crate::types::SequenceIndex;

/// Build the policy record at 1-based position `index`.
///
/// Region, type, and keywords cycle with `index`; the publication date is
/// drawn from `source` with the day clamped to 28 so every month is valid.
pub fn generate_policy<S: RandomSource + ?Sized>(
    index: SequenceIndex,
    source: &mut S,
) -> PolicyRecord {
    let region = cycle(&REGIONS, index);
    let kind = cycle(&POLICY_TYPES, index);
    let keyword = cycle(&POLICY_KEYWORDS, index);
    let next_keyword = cycle(&POLICY_KEYWORDS, index + 1);

    let year = POLICY_BASE_YEAR + source.below(POLICY_YEAR_SPAN) as i32;
    let month = 1 + source.below(12);
    let day = 1 + source.below(POLICY_MAX_DAY);

    PolicyRecord {
        id: format!("{POLICY_ID_PREFIX}{}", padded(index, RECORD_ID_WIDTH)),
        title: format!("{}关于促进{keyword}发展的{}", region.name, kind.name),
        issuer: format!("{}文化和旅游厅", region.name),
        document_number: format!(
            "{}文旅发〔{year}〕{}号",
            region.code,
            padded(index, SHORT_ID_WIDTH)
        ),
        original_url: format!("https://{}.gov.cn/", region.code),
        publish_date: format_date(year, month, day),
        region: region.code.to_string(),
        region_name: region.name.to_string(),
        kind: kind.code.to_string(),
        kind_name: kind.name.to_string(),
        keywords: vec![keyword.to_string(), next_keyword.to_string()],
        summary: format!(
            "该{}旨在推动{}{keyword}高质量发展，提出具体扶持措施和发展目标。",
            kind.name, region.name
        ),
        content: format!(
            "为深入贯彻落实国家关于{keyword}发展的决策部署，结合{}实际情况，制定本{}...",
            region.name, kind.name
        ),
        key_points: vec![
            key_point(
                1,
                format!(
                    "到{}年，{keyword}产业规模达到新水平。",
                    year + POLICY_TARGET_YEAR_OFFSET
                ),
            ),
            key_point(2, POLICY_TASKS.to_string()),
            key_point(3, POLICY_SAFEGUARDS.to_string()),
        ],
        related_cases: Vec::new(),
        related_policies: Vec::new(),
    }
}

fn key_point(number: usize, content: String) -> KeyPoint {
    KeyPoint {
        id: number.to_string(),
        title: POLICY_SECTION_TITLES[number - 1].to_string(),
        content,
    }
}

fn format_date(year: i32, month: u32, day: u32) -> String {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date.format("%Y-%m-%d").to_string(),
        // Unreachable for day <= 28, kept total for arbitrary sources.
        None => format!("{year:04}-{month:02}-{day:02}"),
    }
}

use crate::constants::ids::{CASE_ID_PREFIX, SHORT_ID_WIDTH};
use crate::constants::random::{
    CASE_SALES_BASE, CASE_SALES_SPAN, CASE_USERS_BASE, CASE_USERS_SPAN,
};
use crate::data::{CaseRecord, DataMetric, Trend};
use crate::generators::padded;
use crate::generators::tables::{
    CASE_CATEGORIES, CASE_HIGHLIGHTS, CASE_LOCATIONS, CASE_LOGOS, CASE_SUCCESS_FACTORS, cycle,
};
use crate::random::RandomSource;
use crate::types::SequenceIndex;

/// Build the case record at 1-based position `index`.
///
/// Display names count from `index + 1`, matching the numbering the consuming
/// application already shows.
pub fn generate_case<S: RandomSource + ?Sized>(
    index: SequenceIndex,
    source: &mut S,
) -> CaseRecord {
    let category = cycle(&CASE_CATEGORIES, index);
    let sales = CASE_SALES_BASE + source.below(CASE_SALES_SPAN);
    let users = CASE_USERS_BASE + source.below(CASE_USERS_SPAN);

    CaseRecord {
        id: format!("{CASE_ID_PREFIX}{}", padded(index, SHORT_ID_WIDTH)),
        name: format!("文创案例{}", index + 1),
        category: category.code.to_string(),
        category_name: category.name.to_string(),
        logo: cycle(&CASE_LOGOS, index).to_string(),
        company: format!("文创企业{}", index + 1),
        location: cycle(&CASE_LOCATIONS, index).to_string(),
        description: format!(
            "这是一个成功的{}案例，通过创新模式实现了快速发展。",
            category.name
        ),
        highlight: cycle(&CASE_HIGHLIGHTS, index).to_string(),
        tags: vec![
            category.name.to_string(),
            "创新".to_string(),
            "成功案例".to_string(),
        ],
        success_factors: CASE_SUCCESS_FACTORS.iter().map(|f| f.to_string()).collect(),
        data_metrics: vec![
            metric("年销售额", sales, "亿元"),
            metric("用户数量", users, "万"),
        ],
        business_model: "通过创新商业模式，实现快速增长和可持续发展。".to_string(),
        background: "项目起源于对市场需求的深刻洞察。".to_string(),
        strategy: "1. 精准定位目标用户\n2. 打造差异化产品\n3. 建立品牌认知".to_string(),
        execution: "团队高效执行，快速迭代产品，持续优化用户体验。".to_string(),
        results: "项目取得显著成功，成为行业标杆案例。".to_string(),
        lessons: "成功的关键在于准确把握用户需求，持续创新。".to_string(),
        related_policies: Vec::new(),
        similar_cases: Vec::new(),
    }
}

fn metric(label: &str, value: u32, unit: &str) -> DataMetric {
    DataMetric {
        label: label.to_string(),
        value: value.to_string(),
        unit: unit.to_string(),
        trend: Trend::Up,
    }
}

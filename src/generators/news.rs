use chrono::Duration;

use crate::constants::ids::{NEWS_ID_PREFIX, RECORD_ID_WIDTH};
use crate::constants::random::{NEWS_MAX_VIEWS, NEWS_WINDOW_DAYS};
use crate::data::NewsRecord;
use crate::generators::padded;
use crate::generators::tables::{NEWS_CATEGORIES, NEWS_OUTLETS, cycle};
use crate::random::RandomSource;
use crate::types::SequenceIndex;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1_000;

/// Build the news record at 1-based position `index`.
///
/// The publish date is a uniformly random instant in the window before
/// `source.now()`, truncated to its UTC calendar date.
pub fn generate_news<S: RandomSource + ?Sized>(
    index: SequenceIndex,
    source: &mut S,
) -> NewsRecord {
    let (category, keywords) = cycle(&NEWS_CATEGORIES, index);
    let keyword = cycle(keywords, index);
    let outlet = cycle(&NEWS_OUTLETS, index);

    let offset_ms = (source.fraction() * (NEWS_WINDOW_DAYS * MILLIS_PER_DAY) as f64) as i64;
    let published = source.now() - Duration::milliseconds(offset_ms);
    let views = source.below(NEWS_MAX_VIEWS);

    NewsRecord {
        id: format!("{NEWS_ID_PREFIX}{}", padded(index, RECORD_ID_WIDTH)),
        title: format!("{keyword}成为{category}行业新热点，多家企业布局新赛道"),
        source: outlet.to_string(),
        publish_date: published.date_naive().format("%Y-%m-%d").to_string(),
        category: category.to_string(),
        keywords: vec![keyword.to_string(), category.to_string()],
        summary: format!(
            "近期，{keyword}在{category}领域持续升温，多家企业宣布加大投入，行业专家预测将迎来新一轮增长周期。"
        ),
        url: format!("https://example.com/news/{index}"),
        views,
    }
}

//! Fixed lookup tables that record fields cycle through by index.

/// A code/display-name pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CodeName {
    /// ASCII code written to `region`, `type`, or `category` fields.
    pub code: &'static str,
    /// Chinese display name.
    pub name: &'static str,
}

const fn entry(code: &'static str, name: &'static str) -> CodeName {
    CodeName { code, name }
}

/// Provinces and municipalities policies are attributed to.
pub static REGIONS: [CodeName; 10] = [
    entry("beijing", "北京"),
    entry("shanghai", "上海"),
    entry("guangdong", "广东"),
    entry("zhejiang", "浙江"),
    entry("jiangsu", "江苏"),
    entry("sichuan", "四川"),
    entry("shaanxi", "陕西"),
    entry("shandong", "山东"),
    entry("hubei", "湖北"),
    entry("hunan", "湖南"),
];

/// Policy type codes and names.
pub static POLICY_TYPES: [CodeName; 4] = [
    entry("support", "扶持政策"),
    entry("plan", "发展规划"),
    entry("regulation", "管理规范"),
    entry("funding", "资金支持"),
];

/// Keyword pool for policy titles and tags.
pub static POLICY_KEYWORDS: [&str; 10] = [
    "数字文化",
    "文旅融合",
    "非遗保护",
    "文创产业",
    "乡村振兴",
    "夜间经济",
    "博物馆",
    "IP运营",
    "数字藏品",
    "元宇宙",
];

/// Section headings of every policy, in order.
pub static POLICY_SECTION_TITLES: [&str; 3] = ["一、总体要求", "二、重点任务", "三、保障措施"];

/// Body of the "key tasks" section.
pub const POLICY_TASKS: &str = "推动产业创新发展，培育市场主体，完善产业链条。";

/// Body of the "safeguards" section.
pub const POLICY_SAFEGUARDS: &str = "加大财政支持力度，优化发展环境，强化人才保障。";

/// Outlets news items are attributed to.
pub static NEWS_OUTLETS: [&str; 8] = [
    "新华网",
    "人民网",
    "央视网",
    "中国旅游报",
    "36氪",
    "虎嗅网",
    "新旅界",
    "执惠网",
];

/// News categories with their keyword pools, in category order.
pub static NEWS_CATEGORIES: [(&str, &[&str]); 4] = [
    ("AI", &["ChatGPT", "AIGC", "数字人", "元宇宙", "大模型"]),
    ("文创", &["博物馆文创", "IP运营", "国潮", "非遗", "数字藏品"]),
    ("文旅", &["沉浸式体验", "夜间经济", "乡村旅游", "研学旅行", "冰雪旅游"]),
    ("电商", &["直播带货", "跨境电商", "社交电商", "私域流量"]),
];

/// Case category codes and names.
pub static CASE_CATEGORIES: [CodeName; 5] = [
    entry("museum", "博物馆文创"),
    entry("ip", "IP运营"),
    entry("destination", "文旅目的地"),
    entry("brand", "新消费品牌"),
    entry("tech", "数字文旅"),
];

/// Emoji used as case logos.
pub static CASE_LOGOS: [&str; 10] = [
    "🏛️", "🎨", "🎭", "🏮", "🌸", "🌾", "🕯️", "🏖️", "📚", "🎪",
];

/// Cities cases are located in.
pub static CASE_LOCATIONS: [&str; 5] = ["北京", "上海", "杭州", "成都", "西安"];

/// Headline achievements.
pub static CASE_HIGHLIGHTS: [&str; 4] = ["年销售额过亿", "用户超百万", "获得多轮融资", "行业标杆"];

/// Success factors, listed in full on every case.
pub static CASE_SUCCESS_FACTORS: [&str; 4] = ["精准定位", "产品创新", "营销突破", "团队优秀"];

/// Pick the table entry for a 1-based sequence index.
pub fn cycle<T: Copy>(table: &[T], index: usize) -> T {
    table[index % table.len()]
}

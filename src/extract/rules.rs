//! # Conjunto Padrão de Regras
//!
//! As regras são registradas nesta ordem, que também é a ordem em que os
//! tokens de um nome chegam à contagem:
//!
//! | # | Regra | Padrão | Exemplo |
//! |---|-------|--------|---------|
//! | 1 | `zhongzheng` | `中证XXX(指数\|ETF\|联接\|100…)?` + classe/fim | `中证白酒指数A` → `白酒` |
//! | 2 | `theme` | `XXX主题` | `医药主题` → `医药` |
//! | 3 | `industry` | `XXX行业` | `消费行业` → `消费` |
//! | 4 | `sector` | `XXX板块` | `军工板块` → `军工` |
//! | 5 | `etf` | termo setorial seguido de `ETF`/`联接` | `黄金ETF` → `黄金` |
//! | 6 | `track` | `跟踪XXX` | `跟踪军工指数` → `军工` |
//! | 7 | `keyword` | termo do vocabulário contido no nome | `国泰半导体` → `半导体` |

use super::{ExtractionRule, KeywordRule, PatternRule, CJK_RANGE};
use crate::error::SectorResult;

/// Sufixos de tema/indústria/setor removidos do fim de um token.
const THEME_MARKERS: &[&str] = &["主题", "行业", "板块"];

const TRACK_MARKERS: &[&str] = &["指数", "ETF", "联接", "主题", "行业", "板块"];

/// Termos que, seguidos de `ETF` ou `联接`, identificam um fundo setorial.
#[rustfmt::skip]
pub const ETF_TERMS: &[&str] = &[
    "黄金", "医药", "消费", "科技", "新能源", "金融", "军工", "地产", "白酒", "芯片", "半导体",
    "5G", "银行", "证券", "保险", "有色", "煤炭", "钢铁", "化工", "环保", "农业", "传媒", "游戏",
    "电力", "电网", "光伏", "电池", "储能", "机器人", "港股", "纳斯达克", "标普", "恒生", "稀土",
    "养殖", "畜牧", "生物", "医疗", "创新药", "人工智能", "AI", "大数据", "云计算", "数字经济",
    "ESG", "碳中和", "沪港深",
];

/// Vocabulário de setores/temas reconhecidos por substring.
#[rustfmt::skip]
pub const KEYWORDS: &[&str] = &[
    "医药", "医疗", "消费", "科技", "新能源", "金融", "军工", "地产", "黄金", "白酒", "芯片",
    "半导体", "银行", "证券", "保险", "有色", "煤炭", "钢铁", "化工", "环保", "农业", "传媒",
    "游戏", "电力", "电网", "光伏", "电池", "储能", "机器人", "港股", "海外", "债券", "指数",
    "稀土", "养殖", "畜牧", "生物", "创新药", "人工智能", "AI", "大数据", "云计算", "数字经济",
    "ESG", "碳中和", "沪港深", "恒生", "纳斯达克", "标普", "卫星", "北斗", "国防", "航空", "航天",
    "房地产", "家电", "汽车", "旅游", "免税", "电子", "通信", "计算机", "互联网", "软件", "建材",
    "水泥", "纺织", "零售", "食品", "饮料", "中药", "医疗器械", "医疗服务", "锂电", "新能车",
    "电动车", "绿电", "水电", "火电", "输配", "贵金属", "工业金属", "高端制造", "自动化", "数控",
    "影视", "动漫", "手游", "电竞", "种业", "农林牧渔", "生猪", "饲料", "化纤", "玻璃", "陶瓷",
    "污水处理", "节能", "物联网", "区块链", "元宇宙", "国企", "央企", "红利", "一带一路", "京津冀",
    "长三角", "粤港澳", "养老", "教育", "体育", "物流", "交运", "建筑", "基建", "铁路", "港口",
    "机场", "有色金属", "黑色金属", "稀有金属", "石油", "天然气", "油气", "特高压", "智能电网",
    "核电", "风电",
];

/// Monta a lista padrão de regras, na ordem de prioridade.
pub fn default_rules() -> SectorResult<Vec<Box<dyn ExtractionRule>>> {
    let word = format!("[{CJK_RANGE}A-Za-z]");
    let etf_terms = ETF_TERMS
        .iter()
        .map(|t| regex::escape(t))
        .collect::<Vec<_>>()
        .join("|");

    let rules: Vec<Box<dyn ExtractionRule>> = vec![
        Box::new(
            PatternRule::new(
                "zhongzheng",
                &format!("中证({word}+?)(?:指数|ETF|联接|100|200|300|500|800|1000|等)?(?:[A-Z]|$)"),
                2,
            )?
            .trimming_suffixes(THEME_MARKERS),
        ),
        Box::new(PatternRule::new("theme", &format!("({word}{{2,10}})主题"), 2)?),
        Box::new(PatternRule::new("industry", &format!("({word}{{2,10}})行业"), 2)?),
        Box::new(PatternRule::new("sector", &format!("({word}{{2,10}})板块"), 2)?),
        Box::new(PatternRule::new("etf", &format!("({etf_terms})(?:ETF|联接)"), 2)?),
        Box::new(
            PatternRule::new("track", &format!("跟踪({word}{{2,8}})"), 2)?
                .trimming_suffixes(TRACK_MARKERS),
        ),
        Box::new(KeywordRule::new("keyword", KEYWORDS)),
    ];
    Ok(rules)
}

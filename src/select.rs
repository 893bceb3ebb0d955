//! # Seleção e Ranqueamento
//!
//! Transforma os grupos em listas ordenadas de rótulos:
//!
//! 1. [`rank`]: ordena os grupos por `total_count` decrescente com sort
//!    **estável** (empates preservam a ordem do Group Resolver)
//! 2. [`select_sectors`]: aplica o limiar `min_count`, tira o sentinela de
//!    onde tiver caído e o recoloca uma única vez no fim
//! 3. [`curate`]: lista enxuta para consumo humano: remove nomes de gestoras
//!    e rótulos que não são setores, limita o tamanho
//!
//! ## Invariantes da Lista Final
//!
//! - parte não sentinela em ordem não crescente de contagem
//! - sem duplicatas
//! - sentinela presente exatamente uma vez, na última posição

use serde::Serialize;

use crate::group::Group;

/// Um grupo ranqueado, como aparece no bloco `detail` do relatório.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    /// Representante do grupo.
    pub sector: String,
    /// Chave canônica do grupo.
    pub normalized: String,
    /// Contagem agregada do grupo.
    pub count: usize,
}

/// Nomes de gestoras e outros rótulos frequentes que não são setores.
#[rustfmt::skip]
pub const CURATION_EXCLUDE: &[&str] = &[
    "华夏", "南方", "易方达", "广发", "博时", "嘉实", "招商", "工银", "富国", "汇添富", "华安",
    "国泰", "鹏华", "天弘", "中欧", "诺安", "银河", "平安", "华泰柏瑞", "大成", "交银", "建信",
    "国联安", "融通", "长城", "新华", "兴业", "万家", "申万菱信", "摩根", "金鹰", "东吴", "泰信",
    "浙商", "国联", "永赢", "创金合信", "前海开源", "东方", "中信", "华商", "光大", "民生加银",
    "中海", "国投瑞银", "财通", "西部利得", "红塔红土", "格林", "贝莱德", "山证", "信澳",
    "华润元大", "中邮", "人保", "太平", "鑫元", "渤海汇金", "同泰", "瑞达", "合煦智远", "长信",
    "长安", "宏利", "农银", "国投", "华宝", "景顺", "上投摩根", "兴全", "银华", "中银", "华泰",
    "安信", "华夏中证", "南方中证", "易方达中证", "鹏华中证", "平安中证", "天弘中证", "嘉实中证",
    "招商中证", "富国中证", "华安中证", "万家中证", "大成中证", "博时中证", "工银中证", "永赢中证",
    "银河中证", "中欧中证", "A股", "G通信", "夏中证", "泰中证", "方中证", "实中证", "家中证",
    "商中证", "通中证", "安中证", "汇安", "价值", "易方达黄金", "易方达全球医药", "汇添富中证电池",
    "国有企业红利", "中央企业红利",
];

/// Fragmentos que desqualificam um rótulo da lista curada.
const CURATION_BANNED_FRAGMENTS: &[&str] = &["发起", "全指", "国新央企", "指数增强"];

/// Rótulos longos (> 8 caracteres) que ainda assim são temas legítimos.
const CURATION_LONG_ALLOWED: &[&str] = &[
    "新能源汽车", "云计算与大数据", "人工智能主题", "上海环交所碳中和",
    "云计算与大数据主题", "信息技术应用创新产业", "港股通高股息投资",
];

const CURATION_MAX_CHARS: usize = 8;

/// Ordena os grupos por contagem decrescente (sort estável).
pub fn rank(groups: &[Group]) -> Vec<Candidate> {
    let mut candidates: Vec<Candidate> = groups
        .iter()
        .map(|g| Candidate {
            sector: g.representative.clone(),
            normalized: g.key.clone(),
            count: g.total_count,
        })
        .collect();
    candidates.sort_by(|a, b| b.count.cmp(&a.count));
    candidates
}

/// Lista final: candidatos com `count >= min_count`, sentinela por último.
pub fn select_sectors(ranked: &[Candidate], min_count: usize, sentinel: &str) -> Vec<String> {
    let mut sectors: Vec<String> = ranked
        .iter()
        .filter(|c| c.count >= min_count && c.sector != sentinel)
        .map(|c| c.sector.clone())
        .collect();
    sectors.push(sentinel.to_string());
    sectors
}

/// Lista curada: como [`select_sectors`], sem ruído e limitada a `limit`.
pub fn curate(ranked: &[Candidate], min_count: usize, sentinel: &str, limit: usize) -> Vec<String> {
    let mut curated: Vec<String> = ranked
        .iter()
        .filter(|c| c.count >= min_count && c.sector != sentinel && is_curatable(&c.sector))
        .take(limit)
        .map(|c| c.sector.clone())
        .collect();
    curated.push(sentinel.to_string());
    curated
}

/// Decide se um rótulo é um setor legível e não um nome de gestora.
pub fn is_curatable(label: &str) -> bool {
    let excluded = CURATION_EXCLUDE
        .iter()
        .any(|ex| label == *ex || (ex.chars().count() >= 2 && label.starts_with(*ex)));
    if excluded {
        return false;
    }
    if CURATION_BANNED_FRAGMENTS.iter().any(|f| label.contains(*f)) {
        return false;
    }
    label.chars().count() <= CURATION_MAX_CHARS || CURATION_LONG_ALLOWED.contains(&label)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(sector: &str, count: usize) -> Candidate {
        Candidate {
            sector: sector.into(),
            normalized: sector.into(),
            count,
        }
    }

    fn group(rep: &str, total: usize) -> Group {
        Group {
            key: rep.into(),
            members: vec![(rep.into(), total)],
            representative: rep.into(),
            total_count: total,
        }
    }

    #[test]
    fn rank_is_stable_on_ties() {
        let ranked = rank(&[
            group("军工", 2),
            group("医药", 5),
            group("白酒", 2),
            group("黄金", 3),
        ]);
        let order: Vec<_> = ranked.iter().map(|c| c.sector.as_str()).collect();
        assert_eq!(order, ["医药", "黄金", "军工", "白酒"]);
    }

    #[test]
    fn threshold_filters_but_sentinel_survives() {
        let ranked = vec![candidate("医药", 5), candidate("军工", 1)];
        assert_eq!(select_sectors(&ranked, 2, "其他"), ["医药", "其他"]);
        assert_eq!(select_sectors(&ranked, 1, "其他"), ["医药", "军工", "其他"]);
    }

    #[test]
    fn sentinel_is_moved_to_the_end() {
        let ranked = vec![candidate("其他", 9), candidate("医药", 5)];
        assert_eq!(select_sectors(&ranked, 2, "其他"), ["医药", "其他"]);
    }

    #[test]
    fn sentinel_below_threshold_still_appears_once() {
        let ranked = vec![candidate("医药", 5), candidate("其他", 1)];
        let sectors = select_sectors(&ranked, 2, "其他");
        assert_eq!(sectors.iter().filter(|s| *s == "其他").count(), 1);
        assert_eq!(sectors.last().map(String::as_str), Some("其他"));
    }

    #[test]
    fn empty_ranking_yields_only_sentinel() {
        assert_eq!(select_sectors(&[], 2, "其他"), ["其他"]);
        assert_eq!(curate(&[], 2, "其他", 10), ["其他"]);
    }

    #[test]
    fn curation_drops_fund_houses_and_noise() {
        assert!(!is_curatable("华夏"));
        assert!(!is_curatable("易方达消费"));
        assert!(!is_curatable("国证2000发起"));
        assert!(!is_curatable("沪深300指数增强"));
        assert!(!is_curatable("一二三四五六七八九"));
        assert!(is_curatable("信息技术应用创新产业"));
        assert!(is_curatable("半导体"));
    }

    #[test]
    fn curation_respects_limit() {
        let ranked = vec![
            candidate("医药", 9),
            candidate("华夏", 8),
            candidate("军工", 7),
            candidate("白酒", 6),
        ];
        assert_eq!(curate(&ranked, 2, "其他", 2), ["医药", "军工", "其他"]);
    }
}

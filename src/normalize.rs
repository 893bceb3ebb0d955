//! # Normalizador: Tabela de Sinônimos
//!
//! Mapeia cada token bruto para sua **chave canônica**. A tabela é dado
//! autoral, versionado junto com o código: mudar uma entrada é decisão de
//! taxonomia, não correção de bug. Tokens ausentes da tabela são a própria
//! chave (normalização identidade).
//!
//! ## Nível Único
//!
//! A canonicalização tem um único nível: nenhum valor da tabela pode ser
//! também uma chave. [`validate_synonyms`] garante isso na construção do
//! pipeline; sem essa garantia, `稀土 → 有色金属 → …` viraria uma cadeia
//! transitiva não planejada.
//!
//! ## Exemplo
//!
//! ```text
//! 半导体 → 科技
//! 芯片   → 科技
//! 白酒   → 消费
//! 医药   → 医药   (identidade)
//! ```

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::error::{SectorError, SectorResult};

/// Tabela de sinônimos/hiperônimos: (token, chave canônica).
#[rustfmt::skip]
pub const SYNONYMS: &[(&str, &str)] = &[
    // 医药
    ("医疗", "医药"), ("生物", "医药"), ("创新药", "医药"), ("中药", "医药"), ("医疗器械", "医药"),
    ("医疗服务", "医药"),
    // 消费
    ("白酒", "消费"), ("食品", "消费"), ("饮料", "消费"), ("家电", "消费"), ("汽车", "消费"),
    ("旅游", "消费"), ("免税", "消费"), ("纺织", "消费"), ("零售", "消费"),
    // 科技
    ("半导体", "科技"), ("芯片", "科技"), ("电子", "科技"), ("通信", "科技"), ("计算机", "科技"),
    ("互联网", "科技"), ("软件", "科技"), ("人工智能", "科技"), ("AI", "科技"),
    ("数字经济", "科技"), ("云计算", "科技"), ("大数据", "科技"), ("物联网", "科技"),
    ("区块链", "科技"), ("元宇宙", "科技"),
    // 新能源
    ("光伏", "新能源"), ("电池", "新能源"), ("锂电", "新能源"), ("储能", "新能源"),
    ("新能车", "新能源"), ("电动车", "新能源"), ("碳中和", "新能源"), ("风电", "新能源"),
    ("核电", "新能源"),
    // 金融
    ("银行", "金融"), ("证券", "金融"), ("保险", "金融"), ("券商", "金融"),
    // 军工
    ("国防", "军工"), ("航空", "军工"), ("航天", "军工"), ("兵器", "军工"), ("房地产", "地产"),
    ("贵金属", "黄金"),
    // 港股 / 海外
    ("恒生", "港股"), ("沪港深", "港股"), ("港股通", "港股"), ("纳斯达克", "海外"),
    ("标普", "海外"), ("美股", "海外"), ("QDII", "海外"),
    // 债券
    ("纯债", "债券"), ("短债", "债券"), ("中短债", "债券"), ("信用债", "债券"), ("利率债", "债券"),
    // 宽基
    ("沪深", "指数"), ("上证", "指数"), ("创业板", "指数"), ("科创", "指数"), ("宽基", "指数"),
    ("中证", "指数"),
    // 有色金属
    ("稀土", "有色金属"), ("工业金属", "有色金属"), ("稀有金属", "有色金属"), ("有色", "有色金属"),
    // 电网
    ("绿电", "电网"), ("水电", "电网"), ("火电", "电网"), ("输配", "电网"), ("电力", "电网"),
    ("特高压", "电网"), ("智能电网", "电网"), ("输配电", "电网"),
    // 机器人
    ("高端制造", "机器人"), ("自动化", "机器人"), ("智能机器", "机器人"), ("工业机器人", "机器人"),
    ("数控", "机器人"), ("智能装备", "机器人"),
    // 传媒
    ("游戏", "传媒"), ("影视", "传媒"), ("动漫", "传媒"), ("手游", "传媒"), ("电竞", "传媒"),
    ("文化传播", "传媒"), ("娱乐", "传媒"),
    // 农业
    ("养殖", "农业"), ("畜牧", "农业"), ("种业", "农业"), ("农林牧渔", "农业"), ("生猪", "农业"),
    ("饲料", "农业"),
    // 周期
    ("煤矿", "煤炭"), ("黑色金属", "钢铁"), ("化纤", "化工"), ("化学", "化工"), ("水泥", "建材"),
    ("玻璃", "建材"), ("陶瓷", "建材"), ("节能", "环保"), ("污水处理", "环保"),
    // 卫星
    ("北斗", "卫星"), ("低轨", "卫星"), ("星链", "卫星"), ("卫星互联网", "卫星"),
    ("卫星导航", "卫星"),
];

static TABLE: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();

fn table() -> &'static HashMap<&'static str, &'static str> {
    TABLE.get_or_init(|| SYNONYMS.iter().copied().collect())
}

/// Chave canônica de um token bruto (identidade quando ausente da tabela).
pub fn canonical_key(token: &str) -> &str {
    table().get(token).copied().unwrap_or(token)
}

/// Verifica a consistência da tabela de sinônimos.
///
/// Rejeita chaves ou valores vazios, auto-mapeamentos, chaves duplicadas
/// com alvos diferentes e valores que também são chaves.
pub fn validate_synonyms(entries: &[(&str, &str)]) -> SectorResult<()> {
    let mut seen: HashMap<&str, &str> = HashMap::with_capacity(entries.len());
    for &(token, key) in entries {
        if token.is_empty() || key.is_empty() {
            return Err(SectorError::SynonymTable(format!(
                "entrada vazia: `{token}` → `{key}`"
            )));
        }
        if token == key {
            return Err(SectorError::SynonymTable(format!("`{token}` mapeia para si mesmo")));
        }
        if let Some(previous) = seen.insert(token, key) {
            if previous != key {
                return Err(SectorError::SynonymTable(format!(
                    "`{token}` mapeia para `{previous}` e `{key}`"
                )));
            }
        }
    }
    for &(token, key) in entries {
        if let Some(next) = seen.get(key) {
            return Err(SectorError::SynonymTable(format!(
                "cadeia `{token}` → `{key}` → `{next}` excede um nível"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_table_is_valid() {
        validate_synonyms(SYNONYMS).unwrap();
    }

    #[test]
    fn maps_known_synonyms() {
        assert_eq!(canonical_key("半导体"), "科技");
        assert_eq!(canonical_key("芯片"), "科技");
        assert_eq!(canonical_key("白酒"), "消费");
        assert_eq!(canonical_key("中证"), "指数");
    }

    #[test]
    fn unknown_token_is_its_own_key() {
        assert_eq!(canonical_key("医药"), "医药");
        assert_eq!(canonical_key("一带一路"), "一带一路");
    }

    #[test]
    fn rejects_multi_level_chain() {
        let err = validate_synonyms(&[("稀土", "有色"), ("有色", "有色金属")]).unwrap_err();
        assert!(matches!(err, SectorError::SynonymTable(_)));
    }

    #[test]
    fn rejects_conflicting_duplicates() {
        assert!(validate_synonyms(&[("航空", "军工"), ("航空", "交运")]).is_err());
        assert!(validate_synonyms(&[("航空", "军工"), ("航空", "军工")]).is_ok());
    }

    #[test]
    fn rejects_empty_and_self_entries() {
        assert!(validate_synonyms(&[("", "科技")]).is_err());
        assert!(validate_synonyms(&[("科技", "科技")]).is_err());
    }
}

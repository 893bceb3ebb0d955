//! # Pipeline de Candidatos a Setor
//!
//! Orquestra os estágios, sempre para frente:
//!
//! ```text
//! Vec<FundRecord>
//!   ├── 1. TokenExtractor   → tokens brutos por registro (rayon, ordem do catálogo)
//!   ├── 2. TallyMap         → contagem por token, ordem de primeira observação
//!   ├── 3. canonical_key    → chave canônica de cada token
//!   ├── 4. resolve_groups   → representante + total por chave
//!   ├── 5. rank / select    → lista final, sentinela por último
//!   └── 6. SectorReport     → documento de saída
//! ```
//!
//! O pipeline não guarda estado entre execuções: `run` é função pura do
//! catálogo e da [`PipelineConfig`].

use crate::catalog::FundRecord;
use crate::config::PipelineConfig;
use crate::error::SectorResult;
use crate::extract::TokenExtractor;
use crate::group::{resolve_groups, Group};
use crate::normalize::{canonical_key, validate_synonyms, SYNONYMS};
use crate::report::{DetailEntry, SectorReport};
use crate::select::{curate, rank, select_sectors, Candidate};
use crate::tally::TallyMap;

/// Resultados intermediários de uma execução, úteis para inspeção e testes.
pub struct Analysis {
    pub tally: TallyMap,
    pub groups: Vec<Group>,
    pub ranked: Vec<Candidate>,
}

/// Pipeline configurado e pronto para rodar.
pub struct SectorPipeline {
    config: PipelineConfig,
    extractor: TokenExtractor,
}

impl SectorPipeline {
    /// Valida configuração e tabela de sinônimos e compila as regras.
    ///
    /// # Erros
    ///
    /// Qualquer inconsistência é erro fatal de configuração.
    pub fn new(config: PipelineConfig) -> SectorResult<Self> {
        config.validate()?;
        validate_synonyms(SYNONYMS)?;
        let extractor = TokenExtractor::new(&config)?;
        tracing::debug!(rules = ?extractor.rule_names(), "Regras de extração registradas");
        Ok(Self { config, extractor })
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Executa extração, contagem, agrupamento e ranqueamento.
    pub fn analyze(&self, records: &[FundRecord]) -> Analysis {
        let batches = self.extractor.extract_catalog(records);
        let tally = TallyMap::from_batches(batches);
        tracing::info!(distinct = tally.len(), occurrences = tally.total(), "Tokens contados");

        let groups = resolve_groups(&tally, canonical_key);
        let ranked = rank(&groups);
        tracing::debug!(candidates = ranked.len(), "Grupos ranqueados");

        Analysis { tally, groups, ranked }
    }

    /// Executa o pipeline completo e monta o relatório.
    pub fn run(&self, records: &[FundRecord]) -> SectorReport {
        let analysis = self.analyze(records);
        let c = &self.config;
        if analysis.tally.is_empty() {
            tracing::warn!(
                records = records.len(),
                "Nenhum token extraído; só a sentinela será emitida"
            );
        }

        let sectors = select_sectors(&analysis.ranked, c.min_count, &c.sentinel);
        let sectors_curated = curate(&analysis.ranked, c.min_count, &c.sentinel, c.curated_limit);
        let detail = analysis
            .ranked
            .iter()
            .take(c.detail_limit)
            .map(DetailEntry::from)
            .collect();

        tracing::info!(
            groups = analysis.groups.len(),
            sectors = sectors.len(),
            curated = sectors_curated.len(),
            min_count = c.min_count,
            "Candidatos selecionados"
        );

        SectorReport {
            count: sectors.len(),
            curated_count: sectors_curated.len(),
            sectors,
            sectors_curated,
            source: c.source.clone(),
            min_count: c.min_count,
            detail,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(names: &[&str]) -> Vec<FundRecord> {
        names.iter().map(|n| FundRecord::named(n)).collect()
    }

    fn pipeline(min_count: usize) -> SectorPipeline {
        SectorPipeline::new(PipelineConfig {
            min_count,
            ..PipelineConfig::default()
        })
        .unwrap()
    }

    const CATALOG: &[&str] = &[
        "中证医药100指数ETF",
        "医药主题",
        "白酒ETF",
        "国泰半导体芯片",
        "芯片ETF联接A",
        "华宝中证军工",
        "（）——",
        "军工行业",
        "中证白酒指数A",
    ];

    #[test]
    fn scenario_min_count_one() {
        let report = pipeline(1).run(&records(&["中证医药100指数ETF", "医药主题", "白酒ETF"]));
        // 医药 ×3, 指数 ×1, 白酒 ×2 (grupo 消费)
        assert_eq!(report.sectors, ["医药", "白酒", "指数", "其他"]);
        assert_eq!(report.count, 4);
        assert_eq!(report.min_count, 1);
    }

    #[test]
    fn scenario_min_count_two() {
        let report = pipeline(2).run(&records(&["中证医药100指数ETF", "医药主题", "白酒ETF"]));
        assert_eq!(report.sectors, ["医药", "白酒", "其他"]);
    }

    #[test]
    fn white_spirit_normalizes_to_consumption() {
        let analysis = pipeline(2).analyze(&records(&["白酒ETF"]));
        assert_eq!(analysis.groups.len(), 1);
        assert_eq!(analysis.groups[0].key, "消费");
        assert_eq!(analysis.groups[0].representative, "白酒");
    }

    #[test]
    fn punctuation_catalog_only_has_sentinel() {
        let report = pipeline(2).run(&records(&["！？。", "（）"]));
        assert_eq!(report.sectors, ["其他"]);
        assert_eq!(report.sectors_curated, ["其他"]);
        assert!(report.detail.is_empty());
    }

    #[test]
    fn empty_catalog_only_has_sentinel() {
        let report = pipeline(2).run(&[]);
        assert_eq!(report.sectors, ["其他"]);
        assert_eq!(report.count, 1);
    }

    #[test]
    fn runs_are_idempotent() {
        let p = pipeline(1);
        let catalog = records(CATALOG);
        assert_eq!(p.run(&catalog), p.run(&catalog));
    }

    #[test]
    fn output_invariants_hold() {
        for min_count in 1..=3 {
            let p = pipeline(min_count);
            let analysis = p.analyze(&records(CATALOG));
            let report = p.run(&records(CATALOG));

            let (last, body) = report.sectors.split_last().unwrap();
            assert_eq!(last, "其他");
            assert!(!body.contains(&"其他".to_string()));

            let counts: Vec<usize> = body
                .iter()
                .map(|s| analysis.ranked.iter().find(|c| &c.sector == s).unwrap().count)
                .collect();
            assert!(counts.iter().all(|&c| c >= min_count));
            assert!(counts.windows(2).all(|w| w[0] >= w[1]));

            let mut unique = report.sectors.clone();
            unique.sort();
            unique.dedup();
            assert_eq!(unique.len(), report.sectors.len());
        }
    }

    #[test]
    fn technology_group_aggregates_chip_tokens() {
        let analysis = pipeline(2).analyze(&records(CATALOG));
        let tech = analysis.groups.iter().find(|g| g.key == "科技").unwrap();
        // 国泰半导体芯片 → 芯片, 半导体; 芯片ETF联接A → 芯片 (etf), 芯片 (keyword)
        assert_eq!(tech.representative, "芯片");
        assert_eq!(tech.total_count, 4);
    }

    #[test]
    fn sentinel_from_extraction_is_kept_last() {
        let p = SectorPipeline::new(PipelineConfig {
            sentinel: "医药".into(),
            ..PipelineConfig::default()
        })
        .unwrap();
        let report = p.run(&records(CATALOG));
        assert_eq!(report.sectors.last().map(String::as_str), Some("医药"));
        assert_eq!(report.sectors.iter().filter(|s| *s == "医药").count(), 1);
    }

    #[test]
    fn invalid_config_is_fatal() {
        let result = SectorPipeline::new(PipelineConfig {
            min_count: 0,
            ..PipelineConfig::default()
        });
        assert!(result.is_err());
    }

    #[test]
    fn detail_is_truncated() {
        let p = SectorPipeline::new(PipelineConfig {
            detail_limit: 2,
            ..PipelineConfig::default()
        })
        .unwrap();
        assert_eq!(p.run(&records(CATALOG)).detail.len(), 2);
    }
}

//! # Extrator de Tokens: Regras sobre Nomes de Fundos
//!
//! O [`TokenExtractor`] aplica uma lista **ordenada** de regras de extração a
//! cada nome de fundo, produzindo zero ou mais tokens brutos (setores/temas
//! candidatos). Um mesmo nome pode disparar várias regras, inclusive com
//! substrings sobrepostas: não há deduplicação aqui, a contagem e a
//! normalização acontecem nos estágios seguintes.
//!
//! ## Tipos de Regra
//!
//! | Tipo | Implementação | Exemplo |
//! |------|---------------|---------|
//! | Padrão (regex com 1 grupo) | [`PatternRule`] | `([…]{2,10})主题` → `医药` |
//! | Vocabulário (substring) | [`KeywordRule`] | `白酒ETF` contém `白酒` |
//!
//! ## Filtro de Nomes
//!
//! Antes de qualquer regra, o nome precisa ter entre `name_min_chars` e
//! `name_max_chars` caracteres e conter **apenas** ideogramas CJK, letras
//! ASCII e dígitos. Nomes reprovados são ignorados em silêncio.
//!
//! ## Paralelismo
//!
//! [`TokenExtractor::extract_catalog`] usa rayon, mas devolve os tokens na
//! ordem do catálogo: a contagem posterior vê exatamente a mesma sequência
//! que uma execução sequencial veria.

/// Sub-módulo com as regras baseadas em vocabulário fixo.
pub mod keyword;

/// Sub-módulo com as regras baseadas em expressões regulares.
pub mod pattern;

/// Sub-módulo com o conjunto padrão de regras e seus vocabulários.
pub mod rules;

use rayon::prelude::*;
use regex::Regex;

use crate::catalog::FundRecord;
use crate::config::PipelineConfig;
use crate::error::{SectorError, SectorResult};

pub use keyword::KeywordRule;
pub use pattern::PatternRule;

/// Faixa de ideogramas CJK aceita pelos padrões (U+4E00..U+9FA5).
pub const CJK_RANGE: &str = r"\x{4e00}-\x{9fa5}";

/// Capacidade única das regras: extrair tokens de um nome.
///
/// As regras são iteradas na ordem de registro; cada uma anexa seus
/// tokens em `out` na ordem em que os encontra.
pub trait ExtractionRule: Send + Sync {
    /// Nome curto da regra, usado em logs e testes.
    fn name(&self) -> &'static str;

    fn extract(&self, name: &str, out: &mut Vec<String>);
}

/// Aplica as regras registradas, em ordem, a nomes de fundos.
pub struct TokenExtractor {
    rules: Vec<Box<dyn ExtractionRule>>,
    /// `^[CJK A-Za-z0-9]+$`
    name_filter: Regex,
    name_min_chars: usize,
    name_max_chars: usize,
    min_token_chars: usize,
}

impl TokenExtractor {
    /// Cria o extrator com o conjunto padrão de regras.
    pub fn new(config: &PipelineConfig) -> SectorResult<Self> {
        Self::with_rules(config, rules::default_rules()?)
    }

    /// Cria o extrator com uma lista explícita de regras.
    pub fn with_rules(
        config: &PipelineConfig,
        rules: Vec<Box<dyn ExtractionRule>>,
    ) -> SectorResult<Self> {
        let name_filter = Regex::new(&format!("^[{CJK_RANGE}A-Za-z0-9]+$")).map_err(|source| {
            SectorError::InvalidPattern {
                rule: "name_filter",
                source,
            }
        })?;
        Ok(Self {
            rules,
            name_filter,
            name_min_chars: config.name_min_chars,
            name_max_chars: config.name_max_chars,
            min_token_chars: config.min_token_chars,
        })
    }

    /// Nomes das regras na ordem em que são aplicadas.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Verifica se o nome passa pelo filtro de comprimento e de caracteres.
    pub fn accepts_name(&self, name: &str) -> bool {
        let len = name.chars().count();
        len >= self.name_min_chars && len <= self.name_max_chars && self.name_filter.is_match(name)
    }

    /// Extrai os tokens brutos de um único nome.
    ///
    /// Retorna vazio para nomes reprovados pelo filtro. Tokens abaixo de
    /// `min_token_chars` são descartados sem erro.
    pub fn extract(&self, name: &str) -> Vec<String> {
        if !self.accepts_name(name) {
            return Vec::new();
        }
        let mut tokens = Vec::new();
        for rule in &self.rules {
            let before = tokens.len();
            rule.extract(name, &mut tokens);
            if tokens.len() > before {
                tracing::trace!(
                    rule = rule.name(),
                    fund = name,
                    found = tokens.len() - before,
                    "Regra disparou"
                );
            }
        }
        tokens.retain(|t| t.chars().count() >= self.min_token_chars);
        tokens
    }

    /// Extrai tokens de todo o catálogo em paralelo, preservando a ordem.
    ///
    /// O índice `i` do resultado corresponde a `records[i]`.
    pub fn extract_catalog(&self, records: &[FundRecord]) -> Vec<Vec<String>> {
        let batches: Vec<Vec<String>> = records
            .par_iter()
            .map(|record| self.extract(&record.name))
            .collect();

        let mut skipped = 0;
        for record in records.iter().filter(|r| !self.accepts_name(&r.name)) {
            skipped += 1;
            tracing::trace!(code = %record.code, fund = %record.name, "Nome fora do filtro");
        }
        tracing::info!(
            records = records.len(),
            skipped,
            tokens = batches.iter().map(Vec::len).sum::<usize>(),
            "Extração concluída"
        );
        batches
    }
}

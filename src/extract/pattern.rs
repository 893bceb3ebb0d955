//! Regras de extração por expressão regular.
//!
//! Cada [`PatternRule`] tem uma regex com **um** grupo de captura. Toda
//! ocorrência não sobreposta contribui com o texto capturado, depois de
//! remover marcadores conhecidos (`指数`, `ETF`, `主题`...) do fim.

use regex::Regex;

use super::ExtractionRule;
use crate::error::{SectorError, SectorResult};

/// Regra baseada em regex com um grupo de captura.
pub struct PatternRule {
    name: &'static str,
    regex: Regex,
    /// Comprimento mínimo do token depois do corte de marcadores.
    min_chars: usize,
    trim_suffixes: &'static [&'static str],
}

impl PatternRule {
    /// Compila a regra. Um padrão inválido é erro de configuração fatal.
    pub fn new(name: &'static str, pattern: &str, min_chars: usize) -> SectorResult<Self> {
        let regex = Regex::new(pattern)
            .map_err(|source| SectorError::InvalidPattern { rule: name, source })?;
        if regex.captures_len() < 2 {
            return Err(SectorError::Config(format!(
                "regra `{name}` não tem grupo de captura"
            )));
        }
        Ok(Self {
            name,
            regex,
            min_chars,
            trim_suffixes: &[],
        })
    }

    /// Marcadores removidos do fim do token (repetidamente).
    pub fn trimming_suffixes(mut self, suffixes: &'static [&'static str]) -> Self {
        debug_assert!(suffixes.iter().all(|s| !s.is_empty()));
        self.trim_suffixes = suffixes;
        self
    }

    fn trim<'a>(&self, mut token: &'a str) -> &'a str {
        while let Some(rest) = self.trim_suffixes.iter().find_map(|s| token.strip_suffix(*s)) {
            token = rest;
        }
        token
    }
}

impl ExtractionRule for PatternRule {
    fn name(&self) -> &'static str {
        self.name
    }

    fn extract(&self, name: &str, out: &mut Vec<String>) {
        for cap in self.regex.captures_iter(name) {
            let Some(m) = cap.get(1) else { continue };
            let token = self.trim(m.as_str());
            if token.chars().count() >= self.min_chars {
                out.push(token.to_string());
            }
        }
    }
}

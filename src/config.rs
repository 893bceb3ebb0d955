//! # Configuração do Pipeline
//!
//! [`PipelineConfig`] reúne as constantes que governam uma execução:
//! o filtro de nomes, o tamanho mínimo de token, o limiar `min_count`
//! e o rótulo sentinela. Todos os campos têm default, então um arquivo
//! TOML pode declarar apenas o que quer sobrescrever:
//!
//! ```toml
//! min_count = 3
//! curated_limit = 50
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{SectorError, SectorResult};

/// Rótulo coringa sempre colocado no fim da lista.
pub const DEFAULT_SENTINEL: &str = "其他";

/// Identificador padrão da origem do catálogo.
pub const DEFAULT_SOURCE: &str = "fundcode_search.js";

/// Configuração de uma execução do pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Contagem agregada mínima para um grupo entrar na lista final.
    pub min_count: usize,
    /// Comprimento mínimo (em caracteres) de um nome de fundo elegível.
    pub name_min_chars: usize,
    /// Comprimento máximo (em caracteres) de um nome de fundo elegível.
    pub name_max_chars: usize,
    /// Comprimento mínimo de um token bruto aceito.
    pub min_token_chars: usize,
    /// Rótulo sentinela ("其他").
    pub sentinel: String,
    /// Identificador da origem, copiado para o relatório.
    pub source: String,
    /// Máximo de entradas na lista curada (sem contar o sentinela).
    pub curated_limit: usize,
    /// Máximo de candidatos no bloco `detail` do relatório.
    pub detail_limit: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            min_count: 2,
            name_min_chars: 2,
            name_max_chars: 12,
            min_token_chars: 2,
            sentinel: DEFAULT_SENTINEL.into(),
            source: DEFAULT_SOURCE.into(),
            curated_limit: 100,
            detail_limit: 80,
        }
    }
}

impl PipelineConfig {
    /// Carrega a configuração de um arquivo TOML e a valida.
    pub fn load(path: &Path) -> SectorResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml(&raw)
    }

    pub fn from_toml(raw: &str) -> SectorResult<Self> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejeita combinações que tornariam o pipeline sem sentido.
    pub fn validate(&self) -> SectorResult<()> {
        if self.min_count == 0 {
            return Err(SectorError::Config("min_count deve ser >= 1".into()));
        }
        if self.min_token_chars == 0 {
            return Err(SectorError::Config("min_token_chars deve ser >= 1".into()));
        }
        if self.name_min_chars > self.name_max_chars {
            return Err(SectorError::Config(format!(
                "name_min_chars ({}) maior que name_max_chars ({})",
                self.name_min_chars, self.name_max_chars
            )));
        }
        if self.sentinel.trim().is_empty() {
            return Err(SectorError::Config("sentinel não pode ser vazio".into()));
        }
        Ok(())
    }
}

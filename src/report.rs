//! # Relatório: Emissão do Resultado em Disco
//!
//! Serializa o [`SectorReport`] como JSON "pretty-printed" para facilitar
//! inspeção manual. Caracteres CJK são escritos como estão (sem `\uXXXX`).
//!
//! ## Formato
//!
//! ```json
//! {
//!   "sectors": ["医药", "科技", "其他"],
//!   "sectorsCurated": ["医药", "科技", "其他"],
//!   "source": "fundcode_search.js",
//!   "count": 3,
//!   "curatedCount": 3,
//!   "minCount": 2,
//!   "detail": [{ "sector": "医药", "normalized": "医药", "count": 812 }]
//! }
//! ```
//!
//! ## ⚠️ Atomicidade
//!
//! A escrita **não é atômica**. Como o job é determinístico, basta
//! reexecutá-lo se o arquivo ficar truncado.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::select::Candidate;

/// Documento de saída do pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectorReport {
    /// Lista final de candidatos, sentinela por último.
    pub sectors: Vec<String>,
    /// Lista curada (sem gestoras/ruído), sentinela por último.
    pub sectors_curated: Vec<String>,
    pub source: String,
    /// `sectors.len()`
    pub count: usize,
    /// `sectors_curated.len()`
    pub curated_count: usize,
    /// Limiar efetivamente aplicado.
    pub min_count: usize,
    /// Primeiros candidatos ranqueados, antes do limiar.
    pub detail: Vec<DetailEntry>,
}

/// Uma linha do bloco `detail`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailEntry {
    pub sector: String,
    pub normalized: String,
    pub count: usize,
}

impl From<&Candidate> for DetailEntry {
    fn from(c: &Candidate) -> Self {
        Self {
            sector: c.sector.clone(),
            normalized: c.normalized.clone(),
            count: c.count,
        }
    }
}

/// Grava o relatório em `path`, criando diretórios intermediários.
pub fn save_report(report: &SectorReport, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Falha ao criar diretório {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(report).context("Falha ao serializar SectorReport")?;
    std::fs::write(path, json).with_context(|| format!("Falha ao escrever {}", path.display()))?;
    tracing::info!(path = %path.display(), count = report.count, "Relatório gravado");
    Ok(())
}

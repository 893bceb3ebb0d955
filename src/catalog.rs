//! # Catálogo de Fundos: Carregamento da Entrada
//!
//! Lê o catálogo bruto de fundos e o converte em uma sequência ordenada de
//! [`FundRecord`]. Dois formatos são aceitos:
//!
//! - **Script `fundcode_search.js`**: `var r = [["000001","HXCZHH","华夏成长混合",...]];`.
//!   O literal de array é localizado por regex e decodificado com `serde_json`;
//!   o elemento 0 é o código e o elemento 2 é o nome do fundo.
//! - **Texto simples**: um nome de fundo por linha não vazia.
//!
//! O formato é decidido pelo conteúdo: qualquer linha com cara de atribuição
//! (`ident = ...`) faz o arquivo ser tratado como script, e um script sem
//! `var r = [...]` é rejeitado. Um BOM UTF-8 inicial é descartado.
//!
//! Entrada malformada falha imediatamente, antes de o pipeline rodar.

use std::path::Path;

use regex::Regex;
use serde_json::Value;
use unicode_normalization::UnicodeNormalization;

use crate::error::{SectorError, SectorResult};

/// Registro imutável de um fundo. Só o nome interessa ao pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FundRecord {
    pub code: String,
    pub name: String,
}

impl FundRecord {
    /// Cria um registro, normalizando o nome para NFC.
    pub fn new(code: impl Into<String>, name: &str) -> Self {
        Self {
            code: code.into(),
            name: name.nfc().collect(),
        }
    }

    /// Registro sem código (útil para catálogos de texto simples).
    pub fn named(name: &str) -> Self {
        Self::new(String::new(), name)
    }
}

/// Lê e decodifica o catálogo em `path`, detectando o formato pelo conteúdo.
pub fn load_catalog(path: &Path) -> SectorResult<Vec<FundRecord>> {
    let raw = std::fs::read_to_string(path)?;
    let raw = raw.strip_prefix('\u{feff}').unwrap_or(&raw);
    let records = if looks_like_script(raw)? {
        parse_fundcode_js(raw)?
    } else {
        parse_name_lines(raw)
    };
    tracing::info!(path = %path.display(), records = records.len(), "Catálogo carregado");
    Ok(records)
}

/// Alguma linha começa com uma atribuição JavaScript (`var r =`, `window.r =`).
fn looks_like_script(raw: &str) -> SectorResult<bool> {
    let re = Regex::new(r"(?m)^\s*(?:(?:var|let|const)\s+)?[A-Za-z_$][\w.$]*\s*=").map_err(
        |source| SectorError::InvalidPattern {
            rule: "catalog",
            source,
        },
    )?;
    Ok(re.is_match(raw))
}

/// Decodifica o script `var r = [...];` do catálogo de fundos.
pub fn parse_fundcode_js(raw: &str) -> SectorResult<Vec<FundRecord>> {
    let re = Regex::new(r"(?s)var\s+r\s*=\s*(\[.*\])\s*;?\s*$").map_err(|source| {
        SectorError::InvalidPattern {
            rule: "catalog",
            source,
        }
    })?;
    let literal = re
        .captures(raw)
        .and_then(|cap| cap.get(1))
        .ok_or_else(|| {
            SectorError::CatalogFormat("atribuição `var r = [...]` ausente".into())
        })?;

    let entries: Vec<Value> = serde_json::from_str(literal.as_str())?;
    let mut records = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        let Some(fields) = entry.as_array() else {
            return Err(SectorError::CatalogFormat(format!(
                "entrada {index} não é um array"
            )));
        };
        match fields.get(2).and_then(Value::as_str) {
            Some(name) if !name.is_empty() => {
                let code = fields.first().and_then(Value::as_str).unwrap_or_default();
                records.push(FundRecord::new(code, name));
            }
            _ => tracing::debug!(index, "Entrada sem nome de fundo ignorada"),
        }
    }
    Ok(records)
}

/// Um nome de fundo por linha; linhas em branco são ignoradas.
pub fn parse_name_lines(raw: &str) -> Vec<FundRecord> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(FundRecord::named)
        .collect()
}

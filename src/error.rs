//! # Erros do Pipeline de Setores
//!
//! Todas as falhas do pipeline são **fatais**: é um job batch offline e
//! determinístico, então nada é re-tentado. O binário converte estes erros
//! em `anyhow::Error` com contexto adicional.
//!
//! | Variante | Origem |
//! |----------|--------|
//! | `CatalogFormat` / `CatalogJson` | Catalog Loader: entrada malformada |
//! | `Io` | Leitura do catálogo ou da configuração |
//! | `InvalidPattern` | Regra de extração com regex inválida |
//! | `SynonymTable` | Tabela de sinônimos inconsistente |
//! | `Config` / `ConfigParse` | Configuração inválida |

use thiserror::Error;

/// Erro de configuração ou de entrada detectado pelo pipeline.
#[derive(Debug, Error)]
pub enum SectorError {
    /// O catálogo não segue o formato esperado (ex: falta `var r = [...]`).
    #[error("formato de catálogo inválido: {0}")]
    CatalogFormat(String),

    /// O literal do catálogo não é JSON válido.
    #[error("catálogo com JSON inválido: {0}")]
    CatalogJson(#[from] serde_json::Error),

    #[error("erro de I/O: {0}")]
    Io(#[from] std::io::Error),

    /// Uma regra de extração não compilou.
    #[error("regra `{rule}` com padrão inválido: {source}")]
    InvalidPattern {
        rule: &'static str,
        #[source]
        source: regex::Error,
    },

    /// A tabela de sinônimos viola a canonicalização de nível único.
    #[error("tabela de sinônimos inválida: {0}")]
    SynonymTable(String),

    #[error("configuração inválida: {0}")]
    Config(String),

    #[error("configuração TOML ilegível: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

/// Alias de conveniência para os estágios do pipeline.
pub type SectorResult<T> = Result<T, SectorError>;

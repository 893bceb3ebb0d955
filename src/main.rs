//! # Fund Sectors: Candidatos a Setor a partir de Nomes de Fundos
//!
//! **Ponto de entrada** do extrator de setores/temas. Lê o catálogo de
//! fundos (`fundcode_search.js`), roda o pipeline e grava
//! `sector-candidates.json`.
//!
//! ## Fluxo
//!
//! ```text
//! main()
//!   ├── Configura tracing/logging
//!   ├── Carrega PipelineConfig (TOML opcional + flags)
//!   ├── Carrega catálogo (falha rápido se malformado)
//!   ├── SectorPipeline::run
//!   └── Grava relatório JSON
//! ```
//!
//! ## Exemplo de Uso
//!
//! ```bash
//! cargo run -- --input fundcode_search.js --output sector-candidates.json
//!
//! # Limiar maior e logs detalhados
//! RUST_LOG=debug cargo run -- --min-count 5
//! ```

/// Módulo `catalog`: leitura do catálogo bruto de fundos.
mod catalog;

/// Módulo `config`: constantes configuráveis do pipeline.
mod config;

/// Módulo `error`: taxonomia de erros fatais.
mod error;

/// Módulo `extract`: regras de extração de tokens.
mod extract;

/// Módulo `group`: agrupamento por chave canônica.
mod group;

/// Módulo `normalize`: tabela de sinônimos.
mod normalize;

/// Módulo `pipeline`: orquestração dos estágios.
mod pipeline;

/// Módulo `report`: documento de saída e persistência.
mod report;

/// Módulo `select`: limiar, ranqueamento e curadoria.
mod select;

/// Módulo `tally`: contagem com ordem de inserção.
mod tally;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::config::PipelineConfig;
use crate::pipeline::SectorPipeline;

/// Extrai candidatos a setor/tema de nomes de fundos.
#[derive(Debug, Parser)]
#[command(name = "fund-sectors", version, about)]
struct Cli {
    /// Catálogo de fundos (`var r = [...]` ou um nome por linha).
    #[arg(long, default_value = "fundcode_search.js")]
    input: PathBuf,

    /// Arquivo JSON de saída.
    #[arg(long, default_value = "sector-candidates.json")]
    output: PathBuf,

    /// Configuração TOML do pipeline.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Sobrescreve `min_count`.
    #[arg(long)]
    min_count: Option<usize>,

    /// Sobrescreve o identificador de origem do relatório.
    #[arg(long)]
    source: Option<String>,
}

fn main() -> Result<()> {
    // Aceita RUST_LOG; padrão "info".
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => PipelineConfig::load(path)
            .with_context(|| format!("Falha ao carregar {}", path.display()))?,
        None => PipelineConfig::default(),
    };
    if let Some(min_count) = cli.min_count {
        config.min_count = min_count;
    }
    if let Some(source) = cli.source {
        config.source = source;
    }

    let pipeline = SectorPipeline::new(config).context("Pipeline mal configurado")?;

    let records = catalog::load_catalog(&cli.input)
        .with_context(|| format!("Não foi possível ler o catálogo {}", cli.input.display()))?;

    let report = pipeline.run(&records);
    report::save_report(&report, &cli.output)?;

    println!("Relatório gravado em {}", cli.output.display());
    println!("Candidatos a setor: {}", report.count);
    println!("Candidatos curados: {}", report.curated_count);
    println!("Lista curada: {}", report.sectors_curated.join(", "));
    tracing::debug!(min_count = pipeline.config().min_count, "Execução concluída");

    Ok(())
}

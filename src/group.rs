//! # Resolução de Grupos
//!
//! Particiona os tokens da [`TallyMap`] em grupos por chave canônica.
//!
//! ## Regras de Cada Grupo
//!
//! - `total_count` = soma das contagens dos membros
//! - `representative` = membro com a maior contagem individual
//! - empate → o membro observado **primeiro** na extração (não alfabético)
//!
//! Os grupos saem na ordem em que sua chave canônica foi vista pela
//! primeira vez; o Selector usa essa ordem para desempatar totais iguais.
//!
//! ## Exemplo
//!
//! ```text
//! 半导体 (3) ─┐
//!             ├─ 科技 → representante 芯片, total 8
//! 芯片   (5) ─┘
//! ```

use std::collections::HashMap;

use serde::Serialize;

use crate::tally::TallyMap;

/// Todos os tokens brutos que compartilham uma chave canônica.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Group {
    pub key: String,
    /// `(token, contagem)` em ordem de primeira observação.
    pub members: Vec<(String, usize)>,
    pub representative: String,
    pub total_count: usize,
}

impl Group {
    fn new(key: &str, token: &str, count: usize) -> Self {
        Self {
            key: key.to_string(),
            members: vec![(token.to_string(), count)],
            representative: token.to_string(),
            total_count: count,
        }
    }

    fn push(&mut self, token: &str, count: usize) {
        // estritamente maior: empate mantém o membro mais antigo
        if count > self.max_member_count() {
            self.representative = token.to_string();
        }
        self.members.push((token.to_string(), count));
        self.total_count += count;
    }

    pub fn max_member_count(&self) -> usize {
        self.members.iter().map(|(_, c)| *c).max().unwrap_or(0)
    }
}

/// Agrupa a contagem usando `normalize` como função token → chave.
pub fn resolve_groups<'a, F>(tally: &'a TallyMap, normalize: F) -> Vec<Group>
where
    F: Fn(&'a str) -> &'a str,
{
    let mut groups: Vec<Group> = Vec::new();
    let mut by_key: HashMap<&str, usize> = HashMap::new();

    for (token, count) in tally.iter() {
        let key = normalize(token);
        match by_key.get(key) {
            Some(&pos) => groups[pos].push(token, count),
            None => {
                by_key.insert(key, groups.len());
                groups.push(Group::new(key, token, count));
            }
        }
    }

    tracing::debug!(tokens = tally.len(), groups = groups.len(), "Grupos resolvidos");
    groups
}

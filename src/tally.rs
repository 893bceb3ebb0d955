//! # Contagem de Frequência
//!
//! [`TallyMap`] conta as ocorrências de cada token bruto **preservando a
//! ordem da primeira observação**. Essa ordem é o critério de desempate do
//! representante de cada grupo, então a estrutura é um `Vec` de entradas
//! mais um índice `HashMap` token → posição.

use std::collections::HashMap;

/// Contagem por token bruto, em ordem de primeira observação.
#[derive(Debug, Default, Clone)]
pub struct TallyMap {
    entries: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl TallyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Constrói a contagem a partir dos lotes de tokens, um por registro,
    /// na ordem do catálogo.
    pub fn from_batches<I, B>(batches: I) -> Self
    where
        I: IntoIterator<Item = B>,
        B: IntoIterator<Item = String>,
    {
        let mut tally = Self::new();
        for batch in batches {
            for token in batch {
                tally.add(token);
            }
        }
        tally
    }

    /// Registra uma ocorrência de `token`.
    pub fn add(&mut self, token: String) {
        match self.index.get(&token) {
            Some(&pos) => self.entries[pos].1 += 1,
            None => {
                self.index.insert(token.clone(), self.entries.len());
                self.entries.push((token, 1));
            }
        }
    }

    #[cfg(test)]
    fn count(&self, token: &str) -> usize {
        self.index.get(token).map_or(0, |&pos| self.entries[pos].1)
    }

    /// Número de tokens distintos.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total de ocorrências registradas.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, c)| c).sum()
    }

    /// Itera `(token, contagem)` na ordem de primeira observação.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(t, c)| (t.as_str(), *c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn counts_repeated_tokens() {
        let tally = TallyMap::from_batches([tokens(&["医药", "白酒"]), tokens(&["医药"])]);
        assert_eq!(tally.count("医药"), 2);
        assert_eq!(tally.count("白酒"), 1);
        assert_eq!(tally.count("军工"), 0);
        assert_eq!(tally.total(), 3);
    }

    #[test]
    fn preserves_first_observation_order() {
        let tally = TallyMap::from_batches([
            tokens(&["芯片", "半导体"]),
            tokens(&["半导体", "医药", "芯片"]),
        ]);
        let order: Vec<_> = tally.iter().map(|(t, _)| t).collect();
        assert_eq!(order, ["芯片", "半导体", "医药"]);
    }

    #[test]
    fn empty_input_gives_empty_tally() {
        let tally = TallyMap::from_batches(Vec::<Vec<String>>::new());
        assert!(tally.is_empty());
        assert_eq!(tally.len(), 0);
    }
}

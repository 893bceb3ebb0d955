//! Regras de vocabulário: um termo é emitido se aparece como substring do
//! nome, em qualquer posição. Letras ASCII são comparadas sem caixa.

use super::ExtractionRule;

/// Vocabulário fixo de termos de domínio.
pub struct KeywordRule {
    name: &'static str,
    /// (termo original, termo em minúsculas)
    terms: Vec<(&'static str, String)>,
}

impl KeywordRule {
    pub fn new(name: &'static str, terms: &[&'static str]) -> Self {
        let mut unique: Vec<(&'static str, String)> = Vec::with_capacity(terms.len());
        for &term in terms {
            if !term.is_empty() && !unique.iter().any(|(t, _)| *t == term) {
                unique.push((term, term.to_ascii_lowercase()));
            }
        }
        Self { name, terms: unique }
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.terms.len()
    }
}

impl ExtractionRule for KeywordRule {
    fn name(&self) -> &'static str {
        self.name
    }

    fn extract(&self, name: &str, out: &mut Vec<String>) {
        let haystack = name.to_ascii_lowercase();
        out.extend(
            self.terms
                .iter()
                .filter(|(_, lowered)| haystack.contains(lowered.as_str()))
                .map(|(term, _)| term.to_string()),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(rule: &KeywordRule, name: &str) -> Vec<String> {
        let mut out = Vec::new();
        rule.extract(name, &mut out);
        out
    }

    #[test]
    fn emits_every_contained_term_in_vocabulary_order() {
        let rule = KeywordRule::new("kw", &["芯片", "半导体", "医药"]);
        assert_eq!(run(&rule, "国泰半导体芯片"), ["芯片", "半导体"]);
    }

    #[test]
    fn overlapping_terms_both_fire() {
        let rule = KeywordRule::new("kw", &["医疗", "医疗器械"]);
        assert_eq!(run(&rule, "医疗器械指数"), ["医疗", "医疗器械"]);
    }

    #[test]
    fn ascii_terms_ignore_case() {
        let rule = KeywordRule::new("kw", &["AI", "ESG"]);
        assert_eq!(run(&rule, "创业板Ai指数esg"), ["AI", "ESG"]);
    }

    #[test]
    fn term_fires_once_per_name() {
        let rule = KeywordRule::new("kw", &["消费"]);
        assert_eq!(run(&rule, "消费升级消费"), ["消费"]);
    }

    #[test]
    fn duplicate_terms_are_collapsed() {
        let rule = KeywordRule::new("kw", &["煤炭", "钢铁", "煤炭"]);
        assert_eq!(rule.len(), 2);
    }
}

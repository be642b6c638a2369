use std::collections::{HashMap, HashSet};

use super::stopwords::is_stop_word;

/// TF-IDF index over the catalog's course documents.
///
/// Built once from the static catalog and read-only afterwards, so it can
/// be shared across concurrent requests without locking. Scoring projects
/// a profile's text into the same term space and takes the cosine
/// similarity against every document.
#[derive(Debug, Clone)]
pub struct TfidfIndex {
    /// Term to column position in the weight vectors
    vocabulary: HashMap<String, usize>,
    /// Smoothed inverse document frequency per vocabulary term
    idf: Vec<f64>,
    /// L2-normalized TF-IDF vector per catalog document, catalog-ordered
    doc_vectors: Vec<Vec<f64>>,
}

/// Lowercases and splits on non-alphanumeric boundaries, dropping
/// single-character tokens and stop words.
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| t.len() >= 2 && !is_stop_word(t))
        .map(str::to_string)
        .collect()
}

fn l2_normalize(vector: &mut [f64]) {
    let norm = vector.iter().map(|w| w * w).sum::<f64>().sqrt();
    if norm > 0.0 {
        for w in vector.iter_mut() {
            *w /= norm;
        }
    }
}

impl TfidfIndex {
    /// Builds the index from one document per catalog entry.
    ///
    /// The vocabulary is capped at `max_terms`, keeping the terms that occur
    /// most often across the catalog (ties broken alphabetically so the
    /// build is deterministic). A catalog with fewer than 2 distinct terms
    /// produces an empty vocabulary and all-zero similarities.
    pub fn build(documents: &[String], max_terms: usize) -> Self {
        let tokenized: Vec<Vec<String>> = documents.iter().map(|d| tokenize(d)).collect();

        // Corpus-wide term counts and document frequencies
        let mut total_counts: HashMap<&str, usize> = HashMap::new();
        let mut doc_frequency: HashMap<&str, usize> = HashMap::new();
        for tokens in &tokenized {
            let mut seen: HashSet<&str> = HashSet::new();
            for token in tokens {
                *total_counts.entry(token).or_insert(0) += 1;
                seen.insert(token);
            }
            for term in seen {
                *doc_frequency.entry(term).or_insert(0) += 1;
            }
        }

        if total_counts.len() < 2 {
            return Self {
                vocabulary: HashMap::new(),
                idf: Vec::new(),
                doc_vectors: vec![Vec::new(); documents.len()],
            };
        }

        // Cap the vocabulary at the most frequent terms
        let mut ranked: Vec<(&str, usize)> = total_counts.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked.truncate(max_terms);

        let vocabulary: HashMap<String, usize> = ranked
            .iter()
            .enumerate()
            .map(|(column, (term, _))| (term.to_string(), column))
            .collect();

        let doc_count = documents.len() as f64;
        let idf: Vec<f64> = ranked
            .iter()
            .map(|(term, _)| {
                let df = doc_frequency.get(term).copied().unwrap_or(0) as f64;
                ((1.0 + doc_count) / (1.0 + df)).ln() + 1.0
            })
            .collect();

        let doc_vectors = tokenized
            .iter()
            .map(|tokens| {
                let mut vector = weigh(tokens, &vocabulary, &idf);
                l2_normalize(&mut vector);
                vector
            })
            .collect();

        Self {
            vocabulary,
            idf,
            doc_vectors,
        }
    }

    /// Number of terms in the capped vocabulary
    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    /// Cosine similarity of `query_text` against every catalog document,
    /// index-aligned with the catalog. Empty or all-stop-word text scores
    /// zero everywhere.
    pub fn score(&self, query_text: &str) -> Vec<f64> {
        if self.vocabulary.is_empty() {
            return vec![0.0; self.doc_vectors.len()];
        }

        let tokens = tokenize(query_text);
        let mut query = weigh(&tokens, &self.vocabulary, &self.idf);
        l2_normalize(&mut query);

        self.doc_vectors
            .iter()
            .map(|doc| {
                if doc.is_empty() {
                    return 0.0;
                }
                doc.iter().zip(&query).map(|(d, q)| d * q).sum::<f64>()
            })
            .collect()
    }
}

/// Raw TF-IDF weights for one token sequence in the index's term space
fn weigh(tokens: &[String], vocabulary: &HashMap<String, usize>, idf: &[f64]) -> Vec<f64> {
    let mut vector = vec![0.0; idf.len()];
    for token in tokens {
        if let Some(&column) = vocabulary.get(token) {
            vector[column] += idf[column];
        }
    }
    vector
}

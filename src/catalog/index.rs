//! Full-text search index over icon names, aliases, and tags.
//!
//! The index is an inverted map from normalized term to postings, stored in a
//! `BTreeMap` so that prefix queries are a single ordered range scan. It is
//! built in one pass from a [`Catalog`] and is immutable afterward; a new
//! catalog always produces a new index.
//!
//! # Scoring
//!
//! Each query term is expanded to every indexed term it prefixes. Every
//! (expanded term, field) posting contributes a BM25 score:
//!
//! ```text
//! idf   = ln(1 + (N - df + 0.5) / (df + 0.5))
//! norm  = 1 - b + b * field_len / avg_field_len
//! score = idf * tf * (k1 + 1) / (tf + k1 * norm) * closeness
//! ```
//!
//! where `closeness = len(query term) / len(indexed term)`, so `bell` outranks
//! `bellhop` for the query `bel`. A document must match every query term; its
//! score is the sum over terms. Ties keep catalog order.

use super::tokenizer::tokenize;
use super::Catalog;
use std::collections::{BTreeMap, HashMap};
use std::ops::Bound;

/// BM25 term-frequency saturation.
const K1: f64 = 1.2;

/// BM25 field-length normalization strength.
const B: f64 = 0.75;

/// Number of indexed fields.
const FIELD_COUNT: usize = 3;

/// Icon fields that contribute searchable text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Aliases,
    Tags,
}

impl Field {
    const ALL: [Self; FIELD_COUNT] = [Self::Name, Self::Aliases, Self::Tags];

    const fn slot(self) -> usize {
        match self {
            Self::Name => 0,
            Self::Aliases => 1,
            Self::Tags => 2,
        }
    }
}

/// One occurrence record: term `tf` times in `field` of document `doc`.
#[derive(Debug, Clone, Copy)]
struct Posting {
    doc: usize,
    field: Field,
    tf: u32,
}

/// A parsed search query.
///
/// Terms are produced by the same tokenizer as indexed text. Each term is
/// matched as a prefix (the trailing-wildcard semantics of the picker input).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    terms: Vec<String>,
}

impl Query {
    /// Parses raw input text into prefix terms.
    ///
    /// # Examples
    ///
    /// ```
    /// use mdi_picker::catalog::Query;
    ///
    /// let query = Query::parse("Acc al");
    /// assert_eq!(query.terms(), ["acc", "al"]);
    /// assert!(Query::parse("  -  ").is_empty());
    /// ```
    #[must_use]
    pub fn parse(input: &str) -> Self {
        Self {
            terms: tokenize(input),
        }
    }

    /// Returns the normalized prefix terms.
    #[must_use]
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Returns `true` if the input contained no indexable term.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// A ranked match returned by [`SearchIndex::search`].
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit<'a> {
    /// Icon id (the retrieval key).
    pub id: &'a str,
    /// Relevance score, higher is better.
    pub score: f64,
}

/// Inverted index keyed by icon id.
#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    terms: BTreeMap<String, Vec<Posting>>,
    refs: Vec<String>,
    field_lengths: Vec<[u32; FIELD_COUNT]>,
    avg_field_lengths: [f64; FIELD_COUNT],
}

impl SearchIndex {
    /// Builds the index from every icon in `catalog`, in catalog order.
    #[must_use]
    pub fn build(catalog: &Catalog) -> Self {
        let _span = tracing::debug_span!("build_search_index", icons = catalog.len()).entered();

        let mut index = Self::default();
        let mut totals = [0_u64; FIELD_COUNT];

        for (doc, icon) in catalog.iter().enumerate() {
            index.refs.push(icon.id.clone());
            let mut lengths = [0_u32; FIELD_COUNT];

            for field in Field::ALL {
                let tokens: Vec<String> = match field {
                    Field::Name => tokenize(&icon.name),
                    Field::Aliases => icon.aliases.iter().flat_map(|a| tokenize(a)).collect(),
                    Field::Tags => icon.tags.iter().flat_map(|t| tokenize(t)).collect(),
                };

                #[allow(clippy::cast_possible_truncation)]
                let length = tokens.len() as u32;
                lengths[field.slot()] = length;
                totals[field.slot()] += u64::from(length);

                let mut frequencies: HashMap<String, u32> = HashMap::new();
                for token in tokens {
                    *frequencies.entry(token).or_default() += 1;
                }
                for (term, tf) in frequencies {
                    index
                        .terms
                        .entry(term)
                        .or_default()
                        .push(Posting { doc, field, tf });
                }
            }

            index.field_lengths.push(lengths);
        }

        if !index.refs.is_empty() {
            #[allow(clippy::cast_precision_loss)]
            let docs = index.refs.len() as f64;
            for (slot, total) in totals.iter().enumerate() {
                #[allow(clippy::cast_precision_loss)]
                let total = *total as f64;
                index.avg_field_lengths[slot] = total / docs;
            }
        }

        tracing::debug!(
            documents = index.refs.len(),
            distinct_terms = index.terms.len(),
            "search index built"
        );

        index
    }

    /// Number of indexed documents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.refs.len()
    }

    /// Returns `true` if nothing has been indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.refs.is_empty()
    }

    /// Runs a prefix query and returns hits in descending relevance.
    ///
    /// Returns an empty vector for an empty query or an empty index.
    #[must_use]
    pub fn search(&self, query: &Query) -> Vec<SearchHit<'_>> {
        if query.is_empty() || self.is_empty() {
            return Vec::new();
        }

        let mut scores: HashMap<usize, f64> = HashMap::new();

        for (position, term) in query.terms().iter().enumerate() {
            let term_scores = self.score_term(term);

            if position == 0 {
                scores = term_scores;
            } else {
                scores.retain(|doc, score| {
                    term_scores.get(doc).is_some_and(|extra| {
                        *score += extra;
                        true
                    })
                });
            }

            if scores.is_empty() {
                break;
            }
        }

        let mut ranked: Vec<(usize, f64)> = scores.into_iter().collect();
        ranked.sort_by(|(doc_a, score_a), (doc_b, score_b)| {
            score_b
                .partial_cmp(score_a)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(doc_a.cmp(doc_b))
        });

        ranked
            .into_iter()
            .map(|(doc, score)| SearchHit {
                id: self.refs[doc].as_str(),
                score,
            })
            .collect()
    }

    /// Scores every document containing a term that starts with `prefix`.
    fn score_term(&self, prefix: &str) -> HashMap<usize, f64> {
        #[allow(clippy::cast_precision_loss)]
        let docs = self.refs.len() as f64;
        #[allow(clippy::cast_precision_loss)]
        let prefix_len = prefix.chars().count() as f64;

        let mut scores: HashMap<usize, f64> = HashMap::new();

        let range = self
            .terms
            .range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
            .take_while(|(term, _)| term.starts_with(prefix));

        for (term, postings) in range {
            let df = Self::document_frequency(postings);
            let idf = (1.0 + (docs - df + 0.5) / (df + 0.5)).ln();
            #[allow(clippy::cast_precision_loss)]
            let closeness = prefix_len / term.chars().count() as f64;

            for posting in postings {
                let slot = posting.field.slot();
                let avg = self.avg_field_lengths[slot];
                let norm = if avg > 0.0 {
                    1.0 - B + B * f64::from(self.field_lengths[posting.doc][slot]) / avg
                } else {
                    1.0
                };
                let tf = f64::from(posting.tf);
                let score = idf * (tf * (K1 + 1.0)) / (tf + K1 * norm) * closeness;

                *scores.entry(posting.doc).or_default() += score;
            }
        }

        scores
    }

    /// Counts distinct documents in a posting list (postings are in doc order).
    fn document_frequency(postings: &[Posting]) -> f64 {
        let mut count = 0_u32;
        let mut last = None;
        for posting in postings {
            if last != Some(posting.doc) {
                count += 1;
                last = Some(posting.doc);
            }
        }
        f64::from(count)
    }
}

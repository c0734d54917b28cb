//! Column-format corpora (CoNLL-U, CoNLL 2009 and relatives).
//!
//! One token per line, one field per column, a blank line after each
//! sentence. Lines starting with `#` are comments.

use std::path::Path;

use tracing::{debug, warn};

use super::LoadError;
use crate::corpus::{Corpus, Sentence, TokenRecord};

/// Names of the columns of a corpus file, in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnLayout {
    pub names: Vec<String>,
    /// Skip CoNLL-U multiword ranges (`1-2`) and empty nodes (`1.1`).
    pub skip_multiword: bool,
}

impl ColumnLayout {
    pub fn new<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Self {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            skip_multiword: false,
        }
    }

    /// Universal Dependencies CoNLL-U.
    pub fn conllu() -> Self {
        Self {
            skip_multiword: true,
            ..Self::new([
                "id", "form", "lemma", "upos", "xpos", "feats", "head", "deprel", "deps", "misc",
            ])
        }
    }

    /// The POS-tagging subset of the CoNLL 2009 shared task files.
    ///
    /// The file's own predicted tags load as `file_ppos`, so they are never
    /// mistaken for predictions written by a tagger.
    pub fn conll2009_pos() -> Self {
        Self::new(["id", "form", "lemma", "plemma", "pos", "file_ppos"])
    }
}

fn split_fields(line: &str) -> Vec<&str> {
    if line.contains('\t') {
        line.split('\t').collect()
    } else {
        line.split_whitespace().collect()
    }
}

fn is_multiword_id(id: &str) -> bool {
    id.contains('-') || id.contains('.')
}

/// Parses corpus text into sentences of records keyed by the layout's column names.
///
/// Fields beyond the layout are ignored; missing fields are an error.
pub fn parse(text: &str, layout: &ColumnLayout) -> Result<Corpus, LoadError> {
    let mut corpus = Corpus::new();
    let mut sentence = Sentence::new();
    let mut skipped = 0usize;

    for (index, line) in text.lines().enumerate() {
        let line = line.trim_end_matches('\r');

        if line.trim().is_empty() {
            if !sentence.is_empty() {
                corpus.push(std::mem::take(&mut sentence));
            }
            continue;
        }
        if line.starts_with('#') {
            continue;
        }

        let fields = split_fields(line);
        if fields.len() < layout.names.len() {
            return Err(LoadError::Conll {
                line: index + 1,
                message: format!(
                    "expected {} columns, found {}",
                    layout.names.len(),
                    fields.len()
                ),
            });
        }
        if layout.skip_multiword && is_multiword_id(fields[0]) {
            skipped += 1;
            continue;
        }

        sentence.push(TokenRecord::from_pairs(
            layout
                .names
                .iter()
                .map(String::as_str)
                .zip(fields.iter().copied()),
        ));
    }

    if !sentence.is_empty() {
        corpus.push(sentence);
    }

    if skipped > 0 {
        warn!(skipped, "skipped multiword and empty-node lines");
    }
    debug!(sentences = corpus.len(), "corpus parsed");
    Ok(corpus)
}

/// Reads and parses a corpus file.
pub fn load(path: &str, layout: &ColumnLayout) -> Result<Corpus, LoadError> {
    let path = Path::new(path);

    if !path.exists() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }

    let text = std::fs::read_to_string(path)?;
    let corpus = parse(&text, layout)?;

    if corpus.is_empty() {
        return Err(LoadError::EmptyFile(path.to_path_buf()));
    }
    Ok(corpus)
}

/// Formats `columns` of every record, tab-separated, one blank line after each sentence.
///
/// Absent values are written as `_`.
pub fn write(corpus: &[Sentence], columns: &[&str]) -> String {
    let mut out = String::new();
    for sentence in corpus {
        for record in sentence {
            let fields: Vec<&str> = columns
                .iter()
                .map(|column| record.get(column).unwrap_or("_"))
                .collect();
            out.push_str(&fields.join("\t"));
            out.push('\n');
        }
        out.push('\n');
    }
    out
}

pub fn save(path: &str, corpus: &[Sentence], columns: &[&str]) -> Result<(), LoadError> {
    std::fs::write(path, write(corpus, columns))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONLLU: &str = "# sent_id = 1\n\
        1\tThe\tthe\tDET\tDT\t_\t2\tdet\t_\t_\n\
        2\tdog\tdog\tNOUN\tNN\t_\t0\troot\t_\t_\n\
        \n\
        # sent_id = 2\n\
        1-2\tdon't\t_\t_\t_\t_\t_\t_\t_\t_\n\
        1\tdo\tdo\tAUX\tVBP\t_\t2\taux\t_\t_\n\
        2\tn't\tnot\tPART\tRB\t_\t0\troot\t_\t_\n";

    /// Test that CoNLL-U comments and multiword ranges are skipped.
    #[test]
    fn test_parse_conllu() {
        let corpus = parse(CONLLU, &ColumnLayout::conllu()).unwrap();
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus[0][1].get("form"), Some("dog"));
        assert_eq!(corpus[0][1].get("upos"), Some("NOUN"));
        assert_eq!(corpus[1].len(), 2);
        assert_eq!(corpus[1][0].get("form"), Some("do"));
    }

    #[test]
    fn test_parse_keeps_multiword_lines_when_asked() {
        let layout = ColumnLayout {
            skip_multiword: false,
            ..ColumnLayout::conllu()
        };
        let corpus = parse(CONLLU, &layout).unwrap();
        assert_eq!(corpus[1].len(), 3);
    }

    #[test]
    fn test_parse_whitespace_separated() {
        let text = "1 Hunden hund NN\n2 skäller skälla VB\n\n\n1 Ja ja IN\n";
        let layout = ColumnLayout::new(["id", "form", "lemma", "pos"]);
        let corpus = parse(text, &layout).unwrap();
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus[0][1].get("form"), Some("skäller"));
        assert_eq!(corpus[1][0].get("pos"), Some("IN"));
    }

    #[test]
    fn test_parse_ignores_extra_fields() {
        let layout = ColumnLayout::new(["id", "form"]);
        let corpus = parse("1\tHi\tUH\textra\n", &layout).unwrap();
        assert_eq!(corpus[0][0].len(), 2);
    }

    /// Test that a short line reports its 1-based line number.
    #[test]
    fn test_parse_short_line_reports_line_number() {
        let layout = ColumnLayout::conll2009_pos();
        let result = parse("1\tThe\tthe\tthe\tDT\tDT\n2\tdog\n", &layout);
        match result {
            Err(LoadError::Conll { line, .. }) => assert_eq!(line, 2),
            other => panic!("Expected Conll error, got {:?}", other),
        }
    }

    /// Test that the file's own predictions never land in `ppos`.
    #[test]
    fn test_conll2009_keeps_file_predictions_apart() {
        let layout = ColumnLayout::conll2009_pos();
        let corpus = parse("1\tdog\tdog\tdog\tNN\tVB\n", &layout).unwrap();
        assert_eq!(corpus[0][0].get("file_ppos"), Some("VB"));
        assert!(!corpus[0][0].contains("ppos"));
    }

    #[test]
    fn test_write_fills_missing_values() {
        let corpus = parse("1\tThe\tDT\n", &ColumnLayout::new(["id", "form", "pos"])).unwrap();
        assert_eq!(write(&corpus, &["form", "pos", "ppos"]), "The\tDT\t_\n\n");
    }

    /// Test that load returns FileNotFound for non-existent files.
    #[test]
    fn test_load_nonexistent_file() {
        let result = load("/nonexistent/corpus.conllu", &ColumnLayout::conllu());
        assert!(matches!(result, Err(LoadError::FileNotFound(_))));
    }
}

use std::fs;

use corpora::convert::{ConversionConfig, PaisaConverter};
use corpora::corpus::{CorpusIterator, SentenceSource};
use corpora::error::{CorporaError, Result};
use tempfile::tempdir;

const PAISA_SAMPLE: &str = "\
<text id=\"1\" url=\"http://example.org\">
# sent 1
1\tIl\til\tRD
2\tgatto\tgatto\tS
3\tdorme\tdormire\tV

# sent 2
1\tIl\til\tRD
2\tgatto\tgatto\tS
3\tdorme\tdormire\tV
1\tLa\tla\tRD
2\tcasa\tcasa\tS
</text>
";

#[test]
fn test_position_reset_starts_new_line() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("source.tsv");
    let target = dir.path().join("target.txt");
    fs::write(&source, "1\til\tcol2\n2\tgatto\tcol2b\n1\tcorre\tcol2c\n").unwrap();

    let config = ConversionConfig::default().with_cols([1]);
    let stats = PaisaConverter::new(config).convert(&source, &target).unwrap();

    assert_eq!(fs::read_to_string(&target).unwrap(), "il gatto \ncorre \n");
    assert_eq!(stats.sentences, 2);
    assert_eq!(stats.rows, 3);
}

#[test]
fn test_convert_then_iterate() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("paisa.conll");
    let target = dir.path().join("paisa.txt");
    fs::write(&source, PAISA_SAMPLE).unwrap();

    let converter = PaisaConverter::new(ConversionConfig::default().with_cols([2, 3]));
    let stats = converter.convert(&source, &target).unwrap();
    assert_eq!(stats.rows, 8);
    assert_eq!(stats.skipped_lines, 5);

    let corpus = CorpusIterator::builder(&target).build().unwrap();
    let sentences = corpus
        .sentences()
        .unwrap()
        .collect::<Result<Vec<_>>>()
        .unwrap();

    // Two identical sentences collapse into one, the stopwords "il" and "la"
    // are dropped on the lemma layer.
    assert_eq!(
        sentences,
        vec![vec!["gatto|s", "dormire|v"], vec!["casa|s"]]
    );
}

#[test]
fn test_missing_source_is_io_error() {
    let dir = tempdir().unwrap();
    let err = PaisaConverter::default()
        .convert(dir.path().join("missing.tsv"), dir.path().join("out.txt"))
        .unwrap_err();

    assert!(err.is_io());
}

#[test]
fn test_short_row_aborts_conversion() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("source.tsv");
    fs::write(&source, "1\tIl\til\n2\tgatto\n").unwrap();

    let err = PaisaConverter::default()
        .convert(&source, dir.path().join("out.txt"))
        .unwrap_err();

    assert!(matches!(err, CorporaError::Parse(_)));
}

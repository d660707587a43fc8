use falcata::analysis::analyzer::{Analyzer, BayesAnalyzer};
use falcata::analysis::token_filter::stem::IdentityStemmer;
use falcata::analysis::token_filter::stop::DEFAULT_ENGLISH_STOP_WORDS;
use falcata::classifier::NaiveBayesClassifier;
use falcata::config::{ClassifierConfig, StemmerKind};
use falcata::error::{FalcataError, Result};
use std::io::Write;
use std::sync::Arc;

fn fruit_and_vehicles() -> Result<NaiveBayesClassifier> {
    let mut classifier = NaiveBayesClassifier::new(["x", "y"])?;
    classifier.train("x", "apple apple banana")?;
    classifier.train("y", "car truck road")?;
    Ok(classifier)
}

#[test]
fn test_trained_category_wins() -> Result<()> {
    let classifier = fruit_and_vehicles()?;
    let result = classifier.classify("apple banana")?;

    let x = result.score("x").unwrap();
    let y = result.score("y").unwrap();
    assert!(x > y, "x = {x}, y = {y}");
    assert_eq!(result.best().map(|(name, _)| name), Some("x"));
    assert_eq!(classifier.classify_label("apple banana")?, "x");

    Ok(())
}

#[test]
fn test_duplicate_and_unknown_categories() -> Result<()> {
    let mut classifier = fruit_and_vehicles()?;

    assert!(matches!(
        classifier.add_category("x"),
        Err(FalcataError::AlreadyExists(_))
    ));
    assert!(matches!(
        classifier.add_category("X"),
        Err(FalcataError::AlreadyExists(_))
    ));
    assert!(matches!(
        classifier.train("z", "zebra"),
        Err(FalcataError::NotFound(_))
    ));
    assert!(matches!(
        classifier.untrain("z", "zebra"),
        Err(FalcataError::NotFound(_))
    ));

    Ok(())
}

#[test]
fn test_invalid_construction() {
    let empty: Vec<String> = Vec::new();
    assert!(matches!(
        NaiveBayesClassifier::new(empty),
        Err(FalcataError::InvalidArgument(_))
    ));
    assert!(matches!(
        NaiveBayesClassifier::new(["news", ""]),
        Err(FalcataError::InvalidArgument(_))
    ));
}

#[test]
fn test_only_trained_category_wins() -> Result<()> {
    let text = "The quarterly earnings report shows strong revenue growth";
    let mut classifier = NaiveBayesClassifier::new(["a", "b", "c"])?;
    classifier.train("a", text)?;

    assert_eq!(classifier.classify_label(text)?, "a");

    // Also when the trained category is not first in declaration order.
    let mut classifier = NaiveBayesClassifier::new(["b", "c", "a"])?;
    classifier.train("a", text)?;
    assert_eq!(classifier.classify_label(text)?, "a");

    Ok(())
}

#[test]
fn test_untrain_after_train_restores_every_count() -> Result<()> {
    let mut classifier = fruit_and_vehicles()?;
    let before = classifier.model().clone();

    let texts = [
        ("x", "Bananas, cherries & apples... delicious!"),
        ("y", "Heavy trucks block the road"),
        ("x", "apple"),
    ];
    for (category, text) in texts {
        classifier.train(category, text)?;
    }
    for (category, text) in texts.iter().rev() {
        classifier.untrain(category, text)?;
    }

    assert_eq!(classifier.model(), &before);
    Ok(())
}

#[test]
fn test_untrain_more_than_trained() -> Result<()> {
    let mut classifier = NaiveBayesClassifier::new(["x", "y"])?;
    classifier.train("x", "apple banana")?;
    classifier.untrain("x", "apple apple apple cherry")?;

    assert_eq!(classifier.feature_count("x", "appl")?, 0);
    assert_eq!(classifier.feature_count("x", "banana")?, 1);
    assert_eq!(classifier.word_mass("x")?, 1);
    assert_eq!(classifier.total_word_mass(), 1);
    assert_eq!(classifier.document_count("x")?, 0);

    Ok(())
}

#[test]
fn test_untrain_untrained_category() -> Result<()> {
    let mut classifier = NaiveBayesClassifier::new(["x", "y"])?;
    classifier.train("y", "car truck")?;
    classifier.untrain("x", "car truck")?;
    classifier.untrain("x", "car truck")?;

    assert_eq!(classifier.document_count("x")?, 0);
    assert_eq!(classifier.word_mass("x")?, 0);
    assert_eq!(classifier.vocabulary_size("x")?, 0);
    assert_eq!(classifier.total_word_mass(), 2);
    assert_eq!(classifier.document_count("y")?, 1);

    // The model is still usable afterwards.
    assert_eq!(classifier.classify_label("truck")?, "y");
    Ok(())
}

#[test]
fn test_features_never_contain_stop_words_or_short_words() -> Result<()> {
    let analyzer = BayesAnalyzer::new()?;
    let text = format!(
        "{} An ox is at the zoo; it ate hay by a big oak.",
        DEFAULT_ENGLISH_STOP_WORDS.join(" ").to_uppercase()
    );
    let features = analyzer.features(&text)?;

    for (feature, _) in features.iter() {
        if feature.chars().any(char::is_alphanumeric) {
            assert!(feature.chars().count() >= 3, "short feature {feature:?}");
            assert!(!DEFAULT_ENGLISH_STOP_WORDS.contains(&feature), "stop word {feature:?}");
        }
    }
    assert!(features.contains("zoo"));
    assert!(features.contains(";"));
    // Listed words survive when their stems are not listed.
    assert!(features.contains("thi"));
    assert!(features.contains("becaus"));
    assert_eq!(analyzer.features(&text)?, features);

    Ok(())
}

#[test]
fn test_identity_stemmer_via_config() -> Result<()> {
    let mut config = ClassifierConfig::default();
    config.analyzer.stemmer = StemmerKind::Identity;

    let mut classifier = NaiveBayesClassifier::with_config(["x", "y"], config)?;
    classifier.train("x", "running runners")?;
    assert_eq!(classifier.feature_count("x", "running")?, 1);
    assert_eq!(classifier.feature_count("x", "run")?, 0);

    let analyzer = Arc::new(BayesAnalyzer::with_stemmer(Arc::new(IdentityStemmer::new()))?);
    let mut classifier =
        NaiveBayesClassifier::with_analyzer(["x"], analyzer, ClassifierConfig::default())?;
    classifier.train("x", "Jumping")?;
    assert_eq!(classifier.feature_count("x", "jumping")?, 1);

    Ok(())
}

#[test]
fn test_train_and_untrain_files() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("fruit.txt");
    let mut file = std::fs::File::create(&path)?;
    writeln!(file, "Apples and bananas.")?;
    writeln!(file, "More apples!")?;
    drop(file);

    let mut classifier = fruit_and_vehicles()?;
    classifier.train_file("x", &path)?;
    assert_eq!(classifier.feature_count("x", "appl")?, 4);
    assert_eq!(classifier.document_count("x")?, 2);

    classifier.untrain_file("x", &path)?;
    assert_eq!(classifier.feature_count("x", "appl")?, 2);

    let missing = dir.path().join("missing.txt");
    let before = classifier.model().clone();
    assert!(matches!(
        classifier.train_file("x", &missing),
        Err(FalcataError::Io(_))
    ));
    assert!(matches!(
        classifier.train_file("nope", &path),
        Err(FalcataError::NotFound(_))
    ));
    assert_eq!(classifier.model(), &before);

    Ok(())
}

#[test]
fn test_introspection() -> Result<()> {
    let mut classifier = fruit_and_vehicles()?;
    classifier.add_category("Weather")?;

    assert_eq!(classifier.categories(), vec!["x", "y", "weather"]);
    assert!(classifier.has_category("WEATHER"));
    assert!(!classifier.has_category("sports"));
    assert_eq!(classifier.vocabulary_size("x")?, 2);
    assert_eq!(classifier.vocabulary_size("y")?, 3);
    assert_eq!(classifier.document_count("weather")?, 0);
    assert_eq!(classifier.total_word_mass(), 6);

    let result = classifier.classify("apple")?;
    assert_eq!(result.len(), 3);
    assert_eq!(
        result.iter().map(|(name, _)| name).collect::<Vec<_>>(),
        vec!["x", "y", "weather"]
    );
    assert!(result.iter().all(|(_, score)| score.is_finite()));

    Ok(())
}

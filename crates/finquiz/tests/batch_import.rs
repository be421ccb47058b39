use finquiz::workflows::batch::{BatchImportError, BatchImporter};
use finquiz::workflows::quiz::{ExperienceLevel, ProductCategory};

const EXPORT: &str = "\
name,age,gender,experience,goal,q1,q2,q3,q4,q5,q6,q7,q8,q9,q10,q11,q12,q13,q14,q15
Maya,18-24,female,beginner,learn,a,a,a,a,a,a,a,a,a,a,a,a,a,a,a
Tom,45-54,male,some,retirement,c,c,b,b,c,b,b,b,b,d,b,b,b,b,a
Riley,35-44,prefer-not,professional,quick-returns,d,d,d,d,d,d,d,d,d,d,d,d,d,d,d
,,,,,,,,,,,,,,,,,,,
";

#[test]
fn importer_scores_a_mixed_export() {
    let outcomes = BatchImporter::from_reader(EXPORT.as_bytes()).expect("import succeeds");
    assert_eq!(outcomes.len(), 4);

    let categories: Vec<Option<ProductCategory>> = outcomes
        .iter()
        .map(|outcome| outcome.recommendation.category)
        .collect();
    assert_eq!(
        categories,
        vec![
            Some(ProductCategory::Education),
            Some(ProductCategory::StocksBroker),
            Some(ProductCategory::Forex),
            Some(ProductCategory::Forex),
        ]
    );

    let tom = &outcomes[1];
    assert_eq!(tom.personal_info.experience, Some(ExperienceLevel::Occasional));
    assert_eq!(tom.scores.stocks_broker, 30);
    assert_eq!(tom.recommendation.reasons.len(), 5);

    let riley = &outcomes[2];
    assert_eq!(riley.recommendation.reasons.len(), 6);

    let blank = &outcomes[3];
    assert!(blank.answers.is_empty());
    assert!(blank.recommendation.description.starts_with("Your risk profile"));
}

#[test]
fn importer_stops_at_first_invalid_row() {
    let csv = "name,q1,q2\nAna,a,b\nBo,a,5\nCy,a,x\n";
    let error = BatchImporter::from_reader(csv.as_bytes()).expect_err("row 2 invalid");

    assert!(matches!(error, BatchImportError::Intake { row: 2, .. }));
    assert_eq!(
        error.to_string(),
        "row 2 has invalid answers: invalid answer value '5' for question q2 (expected a, b, c or d)"
    );
}

#[test]
fn malformed_csv_surfaces_csv_error() {
    let csv = "name,q1\nAna,a,extra\n";
    let error = BatchImporter::from_reader(csv.as_bytes()).expect_err("ragged row");
    assert!(matches!(error, BatchImportError::Csv(_)));
}

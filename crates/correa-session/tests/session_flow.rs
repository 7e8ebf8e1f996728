//! End-to-end session tests: form values -> classifier -> history pages.

use std::convert::Infallible;

use correa_dca::{ProbabilisticClassifier, ProbabilityMatrix};
use correa_session::{
    DiagnosticCategory, HISTORY_CAPACITY, LabFeature, LabSample, PAGE_SIZE, PredictionSession,
};

/// Assigns the cascade stage by age band: <20 HC, <40 NAG, <60 AG, <80 IM, else GC.
struct AgeBandModel;

impl ProbabilisticClassifier for AgeBandModel {
    type Error = Infallible;

    fn n_classes(&self) -> usize {
        5
    }

    fn predict_proba(&self, features: &[Vec<f64>]) -> Result<ProbabilityMatrix, Infallible> {
        let rows = features
            .iter()
            .map(|row| {
                let band = ((row[LabFeature::Age.index()] / 20.0) as usize).min(4);
                let mut probs = vec![0.05; 5];
                probs[band] = 0.8;
                probs
            })
            .collect();
        Ok(ProbabilityMatrix::new(rows).unwrap())
    }
}

fn sample_with_age(age: f64) -> LabSample {
    let mut values = [0.0; 10];
    for feature in LabFeature::ALL {
        values[feature.index()] = feature.default_value();
    }
    values[LabFeature::Age.index()] = age;
    LabSample::new(values).unwrap()
}

#[test]
fn predictions_follow_model_and_fill_pages() {
    let model = AgeBandModel;
    let mut session = PredictionSession::new(&model);

    let ages = [10.0, 30.0, 50.0, 70.0, 90.0, 100.0];
    let expected = [
        DiagnosticCategory::Hc,
        DiagnosticCategory::Nag,
        DiagnosticCategory::Ag,
        DiagnosticCategory::Im,
        DiagnosticCategory::Gc,
        DiagnosticCategory::Gc,
    ];
    for (age, category) in ages.iter().zip(expected) {
        let record = session.predict(sample_with_age(*age)).unwrap();
        assert_eq!(record.category, category);
        assert_eq!(record.sample.get(LabFeature::Age), *age);
    }

    assert_eq!(session.total_pages(), 2);
    assert_eq!(session.current_page_records().len(), PAGE_SIZE);
    session.next_page();
    let last_page = session.current_page_records();
    assert_eq!(last_page.len(), 1);
    assert_eq!(last_page[0].sample.get(LabFeature::Age), 100.0);
}

#[test]
fn history_keeps_only_most_recent_predictions() {
    let model = AgeBandModel;
    let mut session = PredictionSession::new(&model);
    for i in 0..(HISTORY_CAPACITY + 3) {
        session.predict(sample_with_age(i as f64)).unwrap();
    }
    let ages: Vec<f64> = session
        .history()
        .iter()
        .map(|r| r.sample.get(LabFeature::Age))
        .collect();
    assert_eq!(ages.len(), HISTORY_CAPACITY);
    assert_eq!(ages.first().copied(), Some(3.0));
    assert_eq!(ages.last().copied(), Some(12.0));
}

#[test]
fn records_serialize_for_display() {
    let model = AgeBandModel;
    let mut session = PredictionSession::new(&model);
    session.predict(sample_with_age(45.0)).unwrap();
    let json = serde_json::to_value(session.latest().unwrap()).unwrap();
    assert_eq!(json["category"], "Ag");
    assert_eq!(json["sample"].as_array().unwrap().len(), 10);
}

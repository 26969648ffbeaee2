use chart_data::ChartData;
use chart_data::core::{DataPoint, DataSet, DataSetCollection};

fn sample_points(offset: f64) -> Vec<DataPoint> {
    (0..5)
        .map(|i| DataPoint::new(i as f64, offset + i as f64))
        .collect()
}

fn container_with_labels(labels: &[&str]) -> ChartData {
    let sets = labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            DataSet::new(*label, sample_points(i as f64 * 10.0)).expect("valid data set")
        })
        .collect();
    ChartData::with_data_sets(sets)
}

#[test]
fn case_sensitive_lookup_finds_exact_labels() {
    let data = container_with_labels(&["label1", "label2", "label3"]);

    for label in ["label1", "label2", "label3"] {
        let found = data
            .data_set_for_label(label, false)
            .expect("existing label");
        assert_eq!(found.label(), label);
    }
}

#[test]
fn case_sensitive_lookup_rejects_uppercased_query() {
    let data = container_with_labels(&["label1", "label2", "label3"]);

    assert!(
        data.data_set_for_label(&"label1".to_uppercase(), false)
            .is_none()
    );
}

#[test]
fn ignore_case_lookup_matches_folded_labels() {
    let data = container_with_labels(&["label1", "label2", "label3"]);

    for label in ["label1", "label2", "label3"] {
        let exact = data
            .data_set_for_label(label, true)
            .expect("existing label");
        assert_eq!(exact.label(), label);

        let folded = data
            .data_set_for_label(&label.to_uppercase(), true)
            .expect("folded label");
        assert_eq!(folded.label(), label);
    }
}

#[test]
fn unknown_label_is_not_found_in_either_mode() {
    let data = container_with_labels(&["label1", "label2", "label3"]);

    assert!(data.data_set_for_label("Bad label", true).is_none());
    assert!(data.data_set_for_label("Bad label", false).is_none());
}

#[test]
fn duplicate_labels_resolve_to_first_insertion() {
    let first = DataSet::new("dup", sample_points(0.0)).expect("first set");
    let second = DataSet::new("dup", sample_points(100.0)).expect("second set");
    let data = ChartData::with_data_sets(vec![first, second]);

    let found = data.data_set_for_label("dup", false).expect("dup label");
    assert_eq!(found.point_at(0), Some(DataPoint::new(0.0, 0.0)));
    assert_eq!(data.index_for_label("dup", false), Some(0));
}

#[test]
fn empty_collection_finds_nothing() {
    let data = ChartData::new();

    assert!(data.data_set_for_label("label1", false).is_none());
    assert!(data.data_set_for_label("label1", true).is_none());
}

#[test]
fn empty_label_matches_only_empty_query() {
    let data = ChartData::with_data_sets(vec![
        DataSet::new("", sample_points(0.0)).expect("unnamed set"),
    ]);

    assert!(data.data_set_for_label("", false).is_some());
    assert!(data.data_set_for_label("label1", false).is_none());
}

#[test]
fn indices_for_label_lists_every_match_in_order() {
    let mut collection = DataSetCollection::new();
    collection.push(DataSet::new("a", sample_points(0.0)).expect("set a"));
    collection.push(DataSet::new("b", sample_points(1.0)).expect("set b"));
    collection.push(DataSet::new("A", sample_points(2.0)).expect("set A"));

    let folded = collection.indices_for_label("a", true);
    assert_eq!(folded.as_slice(), &[0, 2]);

    let exact = collection.indices_for_label("a", false);
    assert_eq!(exact.as_slice(), &[0]);

    assert!(collection.indices_for_label("c", true).is_empty());
}

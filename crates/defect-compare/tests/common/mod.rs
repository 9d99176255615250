//! Shared fixtures for the pipeline tests

use defect_core::{Dataset, PropertyCatalog};

pub const DATASETS: [&str; 4] = ["Mirantis", "Mozilla", "Openstack", "Wikimedia"];

pub const PROPERTIES: [(&str, &str); 12] = [
    ("Attribute", "Attribute"),
    ("Command", "Command"),
    ("Comment", "Comment"),
    ("Ensure", "Ensure"),
    ("File", "File"),
    ("File_mode", "File mode"),
    ("Hard_coded_string", "Hard-coded string"),
    ("Include", "Include"),
    ("Lines_of_code", "Lines of code"),
    ("Require", "Require"),
    ("SSH_KEY", "SSH_KEY"),
    ("URL", "URL"),
];

pub fn catalog() -> PropertyCatalog {
    PropertyCatalog::from_pairs(PROPERTIES).unwrap()
}

/// Six defective rows followed by six clean rows
pub fn labels() -> Vec<Option<i64>> {
    (0..12).map(|i| Some(if i < 6 { 1 } else { 0 })).collect()
}

/// Defective values all above clean values: p = 1/924, delta = 1
pub fn separated() -> Vec<Option<f64>> {
    (0..12)
        .map(|i| Some(if i < 6 { 10.0 + i as f64 } else { (i - 6) as f64 }))
        .collect()
}

/// Interleaved values with clean slightly ahead: p > 0.5, delta = -1/6
pub fn interleaved() -> Vec<Option<f64>> {
    (0..12)
        .map(|i| Some(if i < 6 { i as f64 } else { (i - 6) as f64 + 0.5 }))
        .collect()
}

/// Build a dataset where the listed property keys are separated and all
/// others interleaved
pub fn dataset(name: &str, separated_keys: &[&str]) -> Dataset {
    PROPERTIES
        .iter()
        .fold(Dataset::new(name, labels()), |dataset, (key, _)| {
            let values = if separated_keys.contains(key) {
                separated()
            } else {
                interleaved()
            };
            dataset.with_column(*key, values).unwrap()
        })
}

/// The four study datasets: `Attribute` and `URL` separate everywhere,
/// `Include` everywhere except Wikimedia
pub fn study() -> Vec<Dataset> {
    DATASETS
        .iter()
        .map(|&name| {
            if name == "Wikimedia" {
                dataset(name, &["Attribute", "URL"])
            } else {
                dataset(name, &["Attribute", "Include", "URL"])
            }
        })
        .collect()
}

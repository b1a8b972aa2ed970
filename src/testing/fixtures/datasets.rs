use crate::core::dataset::Dataset;
use crate::core::instances::Record;

fn rec(age: &str, bp: &str, chol: &str, na_to_k: &str, class: &str) -> Record {
    Record::new(age, bp, chol, na_to_k, class).expect("fixture record has a label")
}

/// Five `DrugA` (YOUNG, HIGH) and five `DrugB` (OLD, LOW); cholesterol is
/// always NORMAL and Na_to_K always HIGH.
pub fn two_drug_dataset() -> Dataset {
    let mut records = Vec::new();
    for _ in 0..5 {
        records.push(rec("YOUNG", "HIGH", "NORMAL", "HIGH", "DrugA"));
    }
    for _ in 0..5 {
        records.push(rec("OLD", "LOW", "NORMAL", "HIGH", "DrugB"));
    }
    Dataset::new(records)
}

/// Eight records over three classes (4 / 3 / 1) covering every value of
/// Age and BP.
pub fn drug_abc_dataset() -> Dataset {
    Dataset::new(vec![
        rec("YOUNG", "HIGH", "HIGH", "HIGH", "drugA"),
        rec("YOUNG", "HIGH", "NORMAL", "HIGH", "drugA"),
        rec("YOUNG", "NORMAL", "HIGH", "HIGH", "drugA"),
        rec("ADULT", "HIGH", "HIGH", "NORMAL", "drugA"),
        rec("OLD", "LOW", "HIGH", "LOW", "drugB"),
        rec("OLD", "LOW", "NORMAL", "LOW", "drugB"),
        rec("ADULT", "NORMAL", "NORMAL", "LOW", "drugB"),
        rec("ADULT", "LOW", "HIGH", "NORMAL", "drugC"),
    ])
}

/// Two classes with identical feature distributions, `drugY` listed first.
pub fn symmetric_dataset() -> Dataset {
    Dataset::new(vec![
        rec("YOUNG", "HIGH", "HIGH", "HIGH", "drugY"),
        rec("OLD", "LOW", "NORMAL", "LOW", "drugY"),
        rec("YOUNG", "HIGH", "HIGH", "HIGH", "drugX"),
        rec("OLD", "LOW", "NORMAL", "LOW", "drugX"),
    ])
}

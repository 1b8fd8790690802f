use std::path::Path;

const DISEASES_PATH: &str = "data/DiseaseAndSymptoms.csv";
const PRECAUTIONS_PATH: &str = "data/disease_precaution.csv";

fn main() {
    let disease_rows = validate_table(Path::new(DISEASES_PATH), |headers| {
        assert!(
            headers.iter().any(|h| h.contains("Symptom")),
            "\n\nDATASET BUILD ERROR: No symptom columns\n\
             Path: {DISEASES_PATH}\n\
             At least one column name must contain 'Symptom'.\n"
        );
    });

    let precaution_rows = validate_table(Path::new(PRECAUTIONS_PATH), |headers| {
        assert!(
            headers.iter().any(|h| h.starts_with("Precaution_")),
            "\n\nDATASET BUILD ERROR: No precaution columns\n\
             Path: {PRECAUTIONS_PATH}\n\
             Expected columns named Precaution_1 to Precaution_4.\n"
        );
    });

    println!(
        "cargo:warning=Validated dataset: {disease_rows} disease rows, {precaution_rows} precaution rows"
    );
    set_build_dependencies();
}

/// Check the file exists, has a `Disease` column, and every row names a disease.
/// Returns the number of data rows.
fn validate_table(path: &Path, check_headers: impl Fn(&csv::StringRecord)) -> usize {
    assert!(
        path.exists(),
        "\n\nDATASET BUILD ERROR: File not found\n\
         Path: {}\n\
         Please create the dataset file before building.\n",
        path.display()
    );

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .unwrap_or_else(|e| {
            panic!(
                "\n\nDATASET BUILD ERROR: Failed to open file\n\
                 Path: {}\n\
                 Error: {e}\n",
                path.display()
            );
        });

    let headers = reader.headers().cloned().unwrap_or_else(|e| {
        panic!(
            "\n\nDATASET BUILD ERROR: Unreadable header row\n\
             Path: {}\n\
             Error: {e}\n",
            path.display()
        );
    });

    let disease_column = headers
        .iter()
        .position(|h| h == "Disease")
        .unwrap_or_else(|| {
            panic!(
                "\n\nDATASET BUILD ERROR: Missing 'Disease' column\n\
                 Path: {}\n\
                 Got headers: {headers:?}\n",
                path.display()
            );
        });

    check_headers(&headers);

    let mut rows = 0;
    for (i, record) in reader.records().enumerate() {
        let record = record.unwrap_or_else(|e| {
            panic!(
                "\n\nDATASET BUILD ERROR: Malformed row {}\n\
                 Path: {}\n\
                 Error: {e}\n",
                i + 1,
                path.display()
            );
        });
        let disease = record.get(disease_column).unwrap_or("");
        assert!(
            !disease.trim().is_empty(),
            "\n\nDATASET BUILD ERROR: Row {} has no disease name\n\
             Path: {}\n",
            i + 1,
            path.display()
        );
        rows += 1;
    }

    rows
}

fn set_build_dependencies() {
    // Tell cargo to rerun if the dataset changes
    println!("cargo:rerun-if-changed={DISEASES_PATH}");
    println!("cargo:rerun-if-changed={PRECAUTIONS_PATH}");

    // Tell cargo to rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}

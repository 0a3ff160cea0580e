pub mod panels;
pub mod plot;
pub mod table;

use crate::data::model::Diagnosis;

/// Heading of the label column in the data grid and the count table.
/// Values under it are the table's own codes, not the source file's.
pub const LABEL_HEADER: &str = "label";

/// A label cell: normalised code plus its name, e.g. `0 (Benign)`.
pub fn label_cell(diagnosis: Diagnosis) -> String {
    format!("{} ({})", diagnosis.code(), diagnosis.display_name())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_cells_name_the_normalised_code() {
        assert_eq!(LABEL_HEADER, "label");
        assert_eq!(label_cell(Diagnosis::Benign), "0 (Benign)");
        assert_eq!(label_cell(Diagnosis::Malignant), "1 (Malignant)");
    }
}

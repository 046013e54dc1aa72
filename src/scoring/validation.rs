use super::config::{SexTablesConfig, TablesConfig};
use super::tables::{RiskTables, SexTables};

/// Resolve coefficient table overrides against the built-in model values.
///
/// Validates row lengths and returns all errors at once (not just the
/// first), so a broken config surfaces every problem in one run.
pub fn resolve_tables(config: &TablesConfig) -> Result<RiskTables, Vec<String>> {
    let mut tables = RiskTables::default();
    let mut errors = Vec::new();

    apply_sex(
        &mut tables.female,
        config.female.as_ref(),
        "tables.female",
        &mut errors,
    );
    apply_sex(
        &mut tables.male,
        config.male.as_ref(),
        "tables.male",
        &mut errors,
    );
    if let Some(smoking) = config.smoking {
        tables.smoking = smoking;
    }

    if errors.is_empty() {
        Ok(tables)
    } else {
        Err(errors)
    }
}

fn apply_sex(
    target: &mut SexTables,
    config: Option<&SexTablesConfig>,
    path: &str,
    errors: &mut Vec<String>,
) {
    let Some(config) = config else { return };

    apply_row(&mut target.age, config.age.as_deref(), path, "age", errors);
    apply_row(
        &mut target.estimate,
        config.estimate.as_deref(),
        path,
        "estimate",
        errors,
    );
    apply_row(
        &mut target.cholesterol,
        config.cholesterol.as_deref(),
        path,
        "cholesterol",
        errors,
    );
    apply_row(&mut target.hdl, config.hdl.as_deref(), path, "hdl", errors);
    apply_row(
        &mut target.blood_pressure,
        config.blood_pressure.as_deref(),
        path,
        "blood_pressure",
        errors,
    );
    if let Some(diabetes) = config.diabetes {
        target.diabetes = diabetes;
    }
}

fn apply_row<const N: usize>(
    target: &mut [i32; N],
    values: Option<&[i32]>,
    path: &str,
    field: &str,
    errors: &mut Vec<String>,
) {
    let Some(values) = values else { return };
    match <[i32; N]>::try_from(values) {
        Ok(row) => *target = row,
        Err(_) => errors.push(format!(
            "{}.{}: expected {} entries, got {}",
            path,
            field,
            N,
            values.len()
        )),
    }
}

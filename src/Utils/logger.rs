use crate::errors::SolverError;
use csv::Writer;
use nalgebra::{DMatrix, DVector};
use std::fs::File;
use std::io::Write;

/// Saves a computed trajectory as tab-separated text: header line with the
/// argument name and one name per state component, then one line per mesh
/// point. The trajectory has one column per mesh point.
pub fn save_matrix_to_file(
    trajectory: &DMatrix<f64>,
    headers: &Vec<String>,
    filename: &str,
    x_mesh: &DVector<f64>,
    arg: &String,
) -> Result<(), SolverError> {
    let mut file = File::create(filename)?;
    let mut headers_with_x = Vec::new();
    headers_with_x.push(arg.clone());
    headers_with_x.extend(headers.iter().cloned());
    writeln!(file, "{}", headers_with_x.join("\t"))?;
    for (i, col) in trajectory.column_iter().enumerate() {
        let mut row_data = Vec::new();
        row_data.push(x_mesh[i].to_string());
        row_data.extend(col.iter().map(|&val| val.to_string()));
        writeln!(file, "{}", row_data.join("\t"))?;
    }

    Ok(())
}

/// Same layout as [`save_matrix_to_file`] but written as CSV.
pub fn save_matrix_to_csv(
    trajectory: &DMatrix<f64>,
    headers: &Vec<String>,
    filename: &str,
    x_mesh: &DVector<f64>,
    arg: &String,
) -> Result<(), SolverError> {
    let file = File::create(filename)?;
    let mut writer = Writer::from_writer(file);

    let mut headers_with_x = Vec::new();
    headers_with_x.push(arg.clone());
    headers_with_x.extend(headers.iter().cloned());
    writer.write_record(&headers_with_x)?;

    for (i, col) in trajectory.column_iter().enumerate() {
        let mut row_data = Vec::new();
        row_data.push(x_mesh[i].to_string());
        row_data.extend(col.iter().map(|&val| val.to_string()));
        writer.write_record(&row_data)?;
    }

    writer.flush()?;
    Ok(())
}

use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use super::loader::{BOOSTER_CATEGORY, CLASS, LAUNCH_SITE, PAYLOAD_MASS};
use crate::charts::ScatterPoint;

/// Write the rows behind a scatter chart as CSV, using the input schema's
/// column names so the file can be loaded back as a dataset.
pub fn write_points_csv(points: &[ScatterPoint], path: &Path) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut writer = csv::Writer::from_writer(file);
    write_point_rows(points, &mut writer)?;
    log::info!("Exported {} launches to {}", points.len(), path.display());
    Ok(())
}

fn write_point_rows<W: Write>(points: &[ScatterPoint], writer: &mut csv::Writer<W>) -> Result<()> {
    writer.write_record([LAUNCH_SITE, PAYLOAD_MASS, CLASS, BOOSTER_CATEGORY])?;
    for point in points {
        writer.write_record([
            point.launch_site.clone(),
            point.payload_mass_kg.to_string(),
            point.outcome.class().to_string(),
            point.booster_version_category.clone(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Outcome;

    #[test]
    fn rows_use_input_column_names() {
        let points = vec![
            ScatterPoint {
                payload_mass_kg: 500.0,
                outcome: Outcome::Success,
                booster_version_category: "v1.0".into(),
                launch_site: "CCAFS LC-40".into(),
            },
            ScatterPoint {
                payload_mass_kg: 1500.5,
                outcome: Outcome::Failure,
                booster_version_category: "FT".into(),
                launch_site: "KSC LC-39A".into(),
            },
        ];

        let mut writer = csv::Writer::from_writer(Vec::new());
        write_point_rows(&points, &mut writer).unwrap();
        let text = String::from_utf8(writer.into_inner().unwrap()).unwrap();

        assert_eq!(
            text,
            "Launch Site,Payload Mass (kg),class,Booster Version Category\n\
             CCAFS LC-40,500,1,v1.0\n\
             KSC LC-39A,1500.5,0,FT\n"
        );
    }

    #[test]
    fn exported_file_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("filtered.csv");
        let points = vec![ScatterPoint {
            payload_mass_kg: 3600.0,
            outcome: Outcome::Success,
            booster_version_category: "B4".into(),
            launch_site: "CCAFS SLC-40".into(),
        }];

        write_points_csv(&points, &path).unwrap();
        let ds = crate::data::loader::load_file(&path).unwrap();
        assert_eq!(ds.launch_sites(), ["CCAFS SLC-40"]);
        assert_eq!(ds.records()[0].outcome, Outcome::Success);
    }
}
